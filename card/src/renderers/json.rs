//! JSON renderer for structured output

use super::ProfileRenderer;
use crate::error::{Result, ResultExt};
use crate::profile::Profile;

/// JSON renderer, two-space indented with a trailing newline
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a new JSON renderer with pretty printing
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRenderer for JsonRenderer {
    fn render(&self, profile: &Profile) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(profile).with_context(|| "Rendering profile as JSON")?;

        out.push('\n');
        Ok(out)
    }
}
