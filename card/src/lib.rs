//! Card - profile record and renderers for the swimburger intro card
//!
//! A single fixed [`Profile`] is turned into one of several output
//! representations chosen by a [`Mode`].

pub mod error;
pub mod mode;
pub mod profile;
pub mod renderers;

pub use error::{CardError, Result, ResultExt};
pub use mode::Mode;
pub use profile::{FIELD_COUNT, PROFILE, Profile};
pub use renderers::{
    HelpRenderer, JsonRenderer, ProfileRenderer, VCardRenderer, VisualRenderer, YamlRenderer,
};

use tracing::debug;

/// Name the binary is installed under
pub const PROGRAM_NAME: &str = "swimburger";

/// Output target capabilities that affect rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Whether the visual card may emit terminal hyperlinks
    pub hyperlinks: bool,
}

/// Render the profile for the given mode
pub fn render(profile: &Profile, mode: Mode, options: RenderOptions) -> Result<String> {
    let output = match mode {
        Mode::Help => HelpRenderer::new().render(profile),
        Mode::Json => JsonRenderer::new().render(profile),
        Mode::Yaml => YamlRenderer::new().render(profile),
        Mode::VCard => VCardRenderer::new().render(profile),
        Mode::Visual => VisualRenderer::new()
            .with_hyperlinks(options.hyperlinks)
            .render(profile),
    }?;

    debug!(%mode, bytes = output.len(), "rendered profile");
    Ok(output)
}
