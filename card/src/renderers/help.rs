//! Usage screen

use colored::Colorize;

use super::{CardTheme, ProfileRenderer};
use crate::error::Result;
use crate::mode::Mode;
use crate::profile::Profile;
use crate::PROGRAM_NAME;

/// Column at which option descriptions start, relative to the indent
const OPTION_COLUMN: usize = 14;
/// Column at which example descriptions start, relative to the indent
const EXAMPLE_COLUMN: usize = 24;

/// Renders the static usage text
pub struct HelpRenderer;

impl HelpRenderer {
    pub fn new() -> Self {
        Self
    }

    fn option_summary(mode: Mode) -> &'static str {
        match mode {
            Mode::Help => "Show this help message",
            Mode::Json => "Output profile data as JSON",
            Mode::Yaml => "Output profile data as YAML",
            Mode::VCard => "Output profile data as vCard (VCF format)",
            Mode::Visual => "Display visual profile card",
        }
    }

    fn example_summary(mode: Mode) -> &'static str {
        match mode {
            Mode::Json => "Output as JSON",
            Mode::Yaml => "Output as YAML",
            Mode::VCard => "Output as vCard",
            _ => Self::option_summary(mode),
        }
    }
}

impl Default for HelpRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRenderer for HelpRenderer {
    fn render(&self, profile: &Profile) -> Result<String> {
        let mut out = String::new();

        out.push('\n');
        out.push_str(&format!(
            "{} - Personal intro card for {} ({})\n\n",
            CardTheme::heading(PROGRAM_NAME),
            profile.name,
            profile.nickname
        ));

        out.push_str(&format!("{}\n", "USAGE:".bold()));
        out.push_str(&format!("  {} [OPTIONS]\n\n", PROGRAM_NAME));

        out.push_str(&format!("{}\n", "OPTIONS:".bold()));
        for mode in Mode::PRECEDENCE {
            let flags = mode.flags().join(", ");
            let gap = " ".repeat(OPTION_COLUMN.saturating_sub(flags.len()));
            out.push_str(&format!(
                "  {}{}{}\n",
                flags.cyan(),
                gap,
                Self::option_summary(mode)
            ));
        }
        out.push('\n');

        out.push_str(&format!("{}\n", "EXAMPLES:".bold()));
        for mode in [Mode::Visual, Mode::Json, Mode::Yaml, Mode::VCard] {
            let command = match mode.flags().first() {
                Some(flag) => format!("{} {}", PROGRAM_NAME, flag),
                None => PROGRAM_NAME.to_string(),
            };
            out.push_str(&format!(
                "  {:<width$}{}\n",
                command,
                Self::example_summary(mode),
                width = EXAMPLE_COLUMN
            ));
        }
        out.push('\n');

        out.push_str(&format!("{}\n", "MORE INFO:".bold()));
        out.push_str(&format!("  Website: {}\n", profile.website));
        out.push_str(&format!("  GitHub:  {}\n\n", profile.github));

        Ok(out)
    }
}
