//! YAML renderer

use super::ProfileRenderer;
use crate::error::{Result, ResultExt};
use crate::profile::Profile;

/// Block-style YAML mapping, keys in declaration order
pub struct YamlRenderer;

impl YamlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRenderer for YamlRenderer {
    fn render(&self, profile: &Profile) -> Result<String> {
        // serde_yaml serializes struct fields in order and ends with a newline
        serde_yaml::to_string(profile).with_context(|| "Rendering profile as YAML")
    }
}
