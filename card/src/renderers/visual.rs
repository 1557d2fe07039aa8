//! Styled terminal card
//!
//! The card is laid out as rows of styled spans. Widths are measured on the
//! unstyled text so escape sequences never disturb alignment.

use colored::Colorize;
use tracing::trace;
use unicode_width::UnicodeWidthStr;

use super::{CardTheme, ProfileRenderer};
use crate::error::Result;
use crate::profile::Profile;

/// How a span is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanStyle {
    Plain,
    Heading,
    Dim,
    Italic,
    Bold,
    /// Dimmed text that points at a URL
    Link(&'static str),
}

#[derive(Debug, Clone)]
struct Span {
    text: String,
    style: SpanStyle,
}

impl Span {
    fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn render(&self, hyperlinks: bool) -> String {
        match self.style {
            SpanStyle::Plain => self.text.clone(),
            SpanStyle::Heading => CardTheme::heading(&self.text).to_string(),
            SpanStyle::Dim => self.text.dimmed().to_string(),
            SpanStyle::Italic => self.text.italic().to_string(),
            SpanStyle::Bold => self.text.bold().to_string(),
            SpanStyle::Link(url) => {
                let text = self.text.dimmed();
                if hyperlinks {
                    hyperlink(url, &text.to_string())
                } else {
                    text.to_string()
                }
            }
        }
    }
}

/// Wrap text in an OSC 8 terminal hyperlink
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}

/// One line of card content
#[derive(Debug, Clone, Default)]
struct Row {
    spans: Vec<Span>,
}

impl Row {
    fn blank() -> Self {
        Self::default()
    }

    fn single(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            spans: vec![Span::new(text, style)],
        }
    }

    /// Display width in terminal columns
    fn width(&self) -> usize {
        self.spans.iter().map(|span| span.text.width()).sum()
    }

    fn render(&self, hyperlinks: bool) -> String {
        self.spans.iter().map(|span| span.render(hyperlinks)).collect()
    }
}

/// A labelled contact line in the Connect or Support section
#[derive(Debug, Clone, Copy)]
struct Entry {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    linked: bool,
}

impl Entry {
    const fn link(icon: &'static str, label: &'static str, value: &'static str) -> Self {
        Self {
            icon,
            label,
            value,
            linked: true,
        }
    }

    fn to_row(self, label_width: usize) -> Row {
        let value_style = if self.linked {
            SpanStyle::Link(self.value)
        } else {
            SpanStyle::Dim
        };

        Row {
            spans: vec![
                Span::new(format!("{} ", self.icon), SpanStyle::Plain),
                Span::new(self.label, SpanStyle::Bold),
                Span::new(
                    " ".repeat(label_width.saturating_sub(self.label.width()) + 1),
                    SpanStyle::Plain,
                ),
                Span::new(self.value, value_style),
            ],
        }
    }
}

/// Renders the boxed, colored business card
pub struct VisualRenderer {
    /// Emit OSC 8 hyperlinks around URL values
    pub hyperlinks: bool,
}

impl VisualRenderer {
    pub fn new() -> Self {
        Self { hyperlinks: false }
    }

    pub fn with_hyperlinks(mut self, hyperlinks: bool) -> Self {
        self.hyperlinks = hyperlinks;
        self
    }

    fn connect_entries(profile: &Profile) -> [Entry; 9] {
        [
            Entry::link("🌐", "Website:", profile.website),
            Entry::link("💻", "GitHub:", profile.github),
            Entry::link("🐦", "Twitter:", profile.twitter),
            Entry::link("💼", "LinkedIn:", profile.linkedin),
            Entry::link("🎥", "YouTube:", profile.youtube),
            Entry::link("👥", "Facebook:", profile.facebook),
            Entry::link("💬", "Stack Overflow:", profile.stackoverflow),
            Entry::link("🦋", "Bluesky:", profile.bluesky),
            Entry {
                linked: false,
                ..Entry::link("🐘", "Mastodon:", profile.mastodon)
            },
        ]
    }

    fn support_entries(profile: &Profile) -> [Entry; 2] {
        [
            Entry::link("💖", "PayPal:", profile.sponsor_paypal),
            Entry::link("🎁", "GitHub Sponsor:", profile.sponsor_github),
        ]
    }

    fn rows(profile: &Profile) -> Vec<Row> {
        let connect = Self::connect_entries(profile);
        let support = Self::support_entries(profile);
        let label_width = connect
            .iter()
            .chain(support.iter())
            .map(|entry| entry.label.width())
            .max()
            .unwrap_or(0);

        let mut rows = vec![
            Row::single(
                format!("🍔 {} ({})", profile.name, profile.nickname),
                SpanStyle::Heading,
            ),
            Row::single(
                format!("🌎 {} | {}", profile.location, profile.timezone),
                SpanStyle::Dim,
            ),
            Row::blank(),
        ];

        rows.extend(
            profile
                .bio
                .lines()
                .map(|line| Row::single(line, SpanStyle::Italic)),
        );

        rows.push(Row::blank());
        rows.push(Row::single("━━━ Connect ━━━", SpanStyle::Heading));
        rows.extend(connect.iter().map(|entry| entry.to_row(label_width)));

        rows.push(Row::blank());
        rows.push(Row::single("━━━ Support ━━━", SpanStyle::Heading));
        rows.extend(support.iter().map(|entry| entry.to_row(label_width)));

        rows
    }

    /// Surround rows with a rounded border and padding
    fn frame(&self, rows: &[Row]) -> Vec<String> {
        let content_width = rows.iter().map(Row::width).max().unwrap_or(0);
        let inner_width = content_width + 2 * CardTheme::PADDING_X;
        trace!(content_width, rows = rows.len(), "framing visual card");

        let horizontal = CardTheme::HORIZONTAL.repeat(inner_width);
        let side = CardTheme::border(CardTheme::VERTICAL).to_string();
        let gutter = " ".repeat(CardTheme::PADDING_X);
        let empty = format!("{side}{}{side}", " ".repeat(inner_width));

        let mut lines = Vec::with_capacity(rows.len() + 2 * CardTheme::PADDING_Y + 2);
        lines.push(
            CardTheme::border(&format!(
                "{}{}{}",
                CardTheme::TOP_LEFT,
                horizontal,
                CardTheme::TOP_RIGHT
            ))
            .to_string(),
        );
        lines.extend(std::iter::repeat_n(empty.clone(), CardTheme::PADDING_Y));

        for row in rows {
            let fill = " ".repeat(content_width - row.width());
            lines.push(format!(
                "{side}{gutter}{}{fill}{gutter}{side}",
                row.render(self.hyperlinks)
            ));
        }

        lines.extend(std::iter::repeat_n(empty, CardTheme::PADDING_Y));
        lines.push(
            CardTheme::border(&format!(
                "{}{}{}",
                CardTheme::BOTTOM_LEFT,
                horizontal,
                CardTheme::BOTTOM_RIGHT
            ))
            .to_string(),
        );

        lines
    }
}

impl Default for VisualRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRenderer for VisualRenderer {
    fn render(&self, profile: &Profile) -> Result<String> {
        let rows = Self::rows(profile);
        let lines = self.frame(&rows);

        // one blank line above and below the box
        Ok(format!("\n{}\n\n", lines.join("\n")))
    }
}
