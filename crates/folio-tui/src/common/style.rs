//! Terminal-agnostic styled text.
//!
//! Page slices build [`StyledLine`]s tagged with semantic [`Style`]s. The
//! renderer maps them to colours (dimmed while a section is hidden) and
//! `folio print` flattens them to plain text.

use unicode_width::UnicodeWidthStr;

use super::text::truncate_with_ellipsis;

/// Semantic style identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    /// Secondary copy.
    Muted,
    /// Section title.
    Heading,
    /// Owner's name in the hero.
    Name,
    Tagline,
    /// Small pill labels ("CA Candidate").
    Badge,
    Accent,
    Link,
    /// Key hint such as `[e]`.
    KeyHint,
    /// Fact tile label.
    Label,
    /// Fact tile value.
    Value,
    /// Filled part of a skill bar.
    BarFill,
    /// Empty part of a skill bar.
    BarTrack,
    /// Blinking typewriter cursor.
    Cursor,
    TimelineDot,
    /// Form field contents.
    Field,
    FieldPlaceholder,
    FieldFocused,
    Button,
    ButtonFocused,
    NoticeOk,
    NoticeError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: Style,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A line of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A line holding a single span.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![StyledSpan::new(text, style)],
        }
    }

    #[must_use]
    pub fn with(mut self, text: impl Into<String>, style: Style) -> Self {
        self.push(text, style);
        self
    }

    pub fn push(&mut self, text: impl Into<String>, style: Style) {
        self.spans.push(StyledSpan::new(text, style));
    }

    /// Concatenated text without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|s| s.text.trim().is_empty())
    }
}

/// Draws `body` inside a rounded box `width` columns wide.
///
/// Body lines are expected to fit in `width - 4` columns; shorter lines are
/// padded so the right border lines up.
pub fn card(title: Option<&str>, body: Vec<StyledLine>, width: usize) -> Vec<StyledLine> {
    let width = width.max(6);
    let inner = width - 4;
    let mut out = Vec::with_capacity(body.len() + 2);

    let top = match title {
        Some(title) => {
            let title = truncate_with_ellipsis(title, inner.saturating_sub(2));
            let fill = (width - 2).saturating_sub(title.width() + 3);
            format!("╭─ {title} {}╮", "─".repeat(fill))
        }
        None => format!("╭{}╮", "─".repeat(width - 2)),
    };
    out.push(StyledLine::styled(top, Style::Muted));

    for mut line in body {
        let pad = inner.saturating_sub(line.text().width());
        let mut framed = StyledLine::styled("│ ", Style::Muted);
        framed.spans.append(&mut line.spans);
        framed.push(format!("{} │", " ".repeat(pad)), Style::Muted);
        out.push(framed);
    }

    out.push(StyledLine::styled(
        format!("╰{}╯", "─".repeat(width - 2)),
        Style::Muted,
    ));
    out
}
