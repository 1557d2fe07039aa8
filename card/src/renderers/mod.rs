//! Renderers for the different output modes
//!
//! Every mode turns the same [`Profile`] into a string. The caller decides
//! where that string goes, which keeps the renderers free of I/O.

use crate::error::Result;
use crate::profile::Profile;

/// Render a profile into one output representation
pub trait ProfileRenderer {
    /// Render the profile to a string in the specific format
    fn render(&self, profile: &Profile) -> Result<String>;
}

// Sub-modules
pub mod help;
pub mod json;
pub mod theme;
pub mod vcard;
pub mod visual;
pub mod yaml;

// Re-exports for convenience
pub use help::HelpRenderer;
pub use json::JsonRenderer;
pub use theme::CardTheme;
pub use vcard::VCardRenderer;
pub use visual::VisualRenderer;
pub use yaml::YamlRenderer;
