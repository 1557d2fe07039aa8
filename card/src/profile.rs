//! The profile record shown on the card
//!
//! There is exactly one profile and it is fixed at compile time. Field order
//! matters: serializers emit keys in declaration order.

use serde::Serialize;

/// Biographical and contact details rendered by every output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub nickname: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub timezone: &'static str,
    /// Free text, may span several lines
    pub bio: &'static str,
    pub website: &'static str,
    pub github: &'static str,
    pub twitter: &'static str,
    pub linkedin: &'static str,
    pub youtube: &'static str,
    pub facebook: &'static str,
    pub stackoverflow: &'static str,
    pub mvp: &'static str,
    pub bluesky: &'static str,
    /// A fediverse handle, not a URL
    pub mastodon: &'static str,
    pub sponsor_paypal: &'static str,
    pub sponsor_github: &'static str,
}

/// Number of fields in a [`Profile`]
pub const FIELD_COUNT: usize = 18;

/// The card owner's profile
pub const PROFILE: Profile = Profile {
    name: "Niels Swimberghe",
    nickname: "Swimburger",
    title: "C# and TypeScript SDK generator engineer, at Fern",
    location: "NYC",
    timezone: "Eastern Time",
    bio: "Niels Swimberghe is a Belgian American software engineer and Microsoft MVP at Fern where he owns the C# and TypeScript SDK generators.\nGet in touch with Niels on Twitter @RealSwimburger and follow Niels' personal blog on .NET, Azure, and web development at swimburger.net.",
    website: "https://swimburger.net",
    github: "https://github.com/Swimburger",
    twitter: "https://twitter.com/RealSwimburger",
    linkedin: "https://linkedin.com/in/nielsswimberghe",
    youtube: "https://youtube.com/@RealSwimburger",
    facebook: "https://facebook.com/SwimburgerDotNet",
    stackoverflow: "https://stackoverflow.com/users/2919731/swimburger",
    mvp: "https://mvp.microsoft.com (Microsoft MVP)",
    bluesky: "https://bsky.app/profile/swimburger.bsky.social",
    mastodon: "@swimburger@dotnet.social",
    sponsor_paypal: "https://www.paypal.com/paypalme/swimburger",
    sponsor_github: "https://github.com/sponsors/Swimburger",
};

impl Profile {
    /// Key/value pairs in declaration order, keyed by serialized name.
    ///
    /// Renderers do not use this; it lets callers and tests compare parsed
    /// JSON or YAML output against the record without going through serde.
    pub fn fields(&self) -> [(&'static str, &'static str); FIELD_COUNT] {
        [
            ("name", self.name),
            ("nickname", self.nickname),
            ("title", self.title),
            ("location", self.location),
            ("timezone", self.timezone),
            ("bio", self.bio),
            ("website", self.website),
            ("github", self.github),
            ("twitter", self.twitter),
            ("linkedin", self.linkedin),
            ("youtube", self.youtube),
            ("facebook", self.facebook),
            ("stackoverflow", self.stackoverflow),
            ("mvp", self.mvp),
            ("bluesky", self.bluesky),
            ("mastodon", self.mastodon),
            ("sponsor_paypal", self.sponsor_paypal),
            ("sponsor_github", self.sponsor_github),
        ]
    }
}

impl Default for Profile {
    fn default() -> Self {
        PROFILE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_match_serialized_keys() {
        let value = serde_json::to_value(PROFILE).unwrap();
        let object = value.as_object().unwrap();

        let serialized: Vec<&str> = object.keys().map(String::as_str).collect();
        let declared: Vec<&str> = PROFILE.fields().iter().map(|(key, _)| *key).collect();
        assert_eq!(serialized, declared);

        for (key, expected) in PROFILE.fields() {
            assert_eq!(object[key], expected, "value mismatch for {key}");
        }
    }

    #[test]
    fn test_bio_spans_two_lines() {
        assert_eq!(PROFILE.bio.lines().count(), 2);
    }
}
