use std::ffi::OsStr;
use std::fmt;

/// Output representation selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Help,
    Json,
    Yaml,
    VCard,
    /// Styled terminal card, used when no recognized flag is given
    #[default]
    Visual,
}

impl Mode {
    /// Flag-selected modes, highest precedence first
    pub const PRECEDENCE: [Mode; 4] = [Mode::Help, Mode::Json, Mode::Yaml, Mode::VCard];

    /// Command-line spellings that select this mode
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            Mode::Help => &["--help", "-h"],
            Mode::Json => &["--json"],
            Mode::Yaml => &["--yaml"],
            Mode::VCard => &["--vcard"],
            Mode::Visual => &[],
        }
    }

    /// Resolve the mode from raw program arguments (without the program name).
    ///
    /// Arguments are matched exactly; anything unrecognized is ignored. When
    /// several recognized flags are present the first entry of
    /// [`Mode::PRECEDENCE`] that matches wins, regardless of argument order.
    pub fn from_args<I, S>(args: I) -> Mode
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<S> = args.into_iter().collect();

        Mode::PRECEDENCE
            .into_iter()
            .find(|mode| {
                args.iter()
                    .any(|arg| mode.flags().iter().any(|flag| arg.as_ref() == *flag))
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Help => "help",
            Mode::Json => "json",
            Mode::Yaml => "yaml",
            Mode::VCard => "vcard",
            Mode::Visual => "visual",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_selects_visual() {
        assert_eq!(Mode::from_args(Vec::<String>::new()), Mode::Visual);
    }

    #[test]
    fn test_single_flags() {
        assert_eq!(Mode::from_args(["--help"]), Mode::Help);
        assert_eq!(Mode::from_args(["-h"]), Mode::Help);
        assert_eq!(Mode::from_args(["--json"]), Mode::Json);
        assert_eq!(Mode::from_args(["--yaml"]), Mode::Yaml);
        assert_eq!(Mode::from_args(["--vcard"]), Mode::VCard);
    }

    #[test]
    fn test_precedence_ignores_argument_order() {
        assert_eq!(Mode::from_args(["--help", "--json"]), Mode::Help);
        assert_eq!(Mode::from_args(["--json", "-h"]), Mode::Help);
        assert_eq!(Mode::from_args(["--vcard", "--yaml", "--json"]), Mode::Json);
        assert_eq!(Mode::from_args(["--vcard", "--yaml"]), Mode::Yaml);
    }

    #[test]
    fn test_unrecognized_arguments_are_ignored() {
        assert_eq!(Mode::from_args(["--foo"]), Mode::Visual);
        assert_eq!(Mode::from_args(["--foo", "--yaml", "bar"]), Mode::Yaml);
        assert_eq!(Mode::from_args(["--JSON", "--json=1", "-hj", "help"]), Mode::Visual);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_is_ignored() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let args = vec![OsString::from_vec(vec![0xff, 0xfe]), OsString::from("--vcard")];
        assert_eq!(Mode::from_args(args), Mode::VCard);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Mode::VCard.to_string(), "vcard");
        assert_eq!(Mode::default().to_string(), "visual");
    }
}
