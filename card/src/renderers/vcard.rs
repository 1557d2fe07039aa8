//! vCard 3.0 renderer
//!
//! Values are written verbatim except for the note, whose line breaks are
//! escaped as `\n`. Other fields are not checked for `;`, `,` or `\`.

use super::ProfileRenderer;
use crate::error::Result;
use crate::profile::Profile;

/// Builds a single vCard for the profile
pub struct VCardRenderer;

impl VCardRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Escape line breaks so a multi-line value fits one content line
    pub fn escape_newlines(value: &str) -> String {
        value.replace('\n', "\\n")
    }

    fn typed_urls(profile: &Profile) -> [(&'static str, &'static str); 8] {
        [
            ("github", profile.github),
            ("twitter", profile.twitter),
            ("linkedin", profile.linkedin),
            ("youtube", profile.youtube),
            ("facebook", profile.facebook),
            ("stackoverflow", profile.stackoverflow),
            ("mvp", profile.mvp),
            ("bluesky", profile.bluesky),
        ]
    }
}

impl Default for VCardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRenderer for VCardRenderer {
    fn render(&self, profile: &Profile) -> Result<String> {
        let mut lines = vec![
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("FN:{}", profile.name),
            format!("NICKNAME:{}", profile.nickname),
            format!("TITLE:{}", profile.title),
            format!("NOTE:{}", Self::escape_newlines(profile.bio)),
            format!("URL:{}", profile.website),
        ];

        for (label, url) in Self::typed_urls(profile) {
            lines.push(format!("URL;type={}:{}", label, url));
        }

        lines.push(format!("X-SOCIALPROFILE;type=mastodon:{}", profile.mastodon));

        // URL is repeatable; both sponsorship links share one type
        for url in [profile.sponsor_paypal, profile.sponsor_github] {
            lines.push(format!("URL;type=sponsor:{}", url));
        }

        // post-office-box;extended;street;locality;region;postal-code;country
        lines.push(format!(
            "ADR;TYPE=WORK:;;{};;;{};",
            profile.location, profile.timezone
        ));
        lines.push("END:VCARD".to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PROFILE;

    fn render() -> String {
        VCardRenderer::new().render(&PROFILE).unwrap()
    }

    #[test]
    fn test_vcard_envelope() {
        let output = render();
        assert!(output.starts_with("BEGIN:VCARD\nVERSION:3.0\n"));
        assert!(output.ends_with("END:VCARD\n"));
    }

    #[test]
    fn test_note_has_no_raw_newline() {
        let output = render();
        let note = output.lines().find(|line| line.starts_with("NOTE:")).unwrap();

        assert!(note.contains("generators.\\nGet in touch"));
        assert_eq!(note, format!("NOTE:{}", PROFILE.bio.replace('\n', "\\n")));
    }

    #[test]
    fn test_address_component_positions() {
        let output = render();
        let adr = output.lines().find(|line| line.starts_with("ADR;")).unwrap();
        let value = adr.split_once(':').unwrap().1;
        let components: Vec<&str> = value.split(';').collect();

        assert_eq!(components.len(), 7);
        assert_eq!(components[2], "NYC");
        assert_eq!(components[5], "Eastern Time");
        for index in [0, 1, 3, 4, 6] {
            assert!(components[index].is_empty());
        }
    }

    #[test]
    fn test_reference_line_order() {
        let output = render();
        let properties: Vec<&str> = output
            .lines()
            .map(|line| line.split(':').next().unwrap())
            .collect();

        assert_eq!(
            properties,
            vec![
                "BEGIN",
                "VERSION",
                "FN",
                "NICKNAME",
                "TITLE",
                "NOTE",
                "URL",
                "URL;type=github",
                "URL;type=twitter",
                "URL;type=linkedin",
                "URL;type=youtube",
                "URL;type=facebook",
                "URL;type=stackoverflow",
                "URL;type=mvp",
                "URL;type=bluesky",
                "X-SOCIALPROFILE;type=mastodon",
                "URL;type=sponsor",
                "URL;type=sponsor",
                "ADR;TYPE=WORK",
                "END",
            ]
        );
    }

    #[test]
    fn test_escape_newlines() {
        assert_eq!(VCardRenderer::escape_newlines("a\nb\nc"), "a\\nb\\nc");
        assert_eq!(VCardRenderer::escape_newlines("plain"), "plain");
    }
}
