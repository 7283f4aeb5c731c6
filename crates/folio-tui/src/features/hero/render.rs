use folio_core::profile::Profile;

use crate::common::style::card;
use crate::common::text::wrap;
use crate::common::{Style, StyledLine};

/// Profile card width on wide terminals.
const CARD_WIDTH: usize = 48;
const CURSOR_GLYPH: &str = "▌";

/// Hero block: badges, name, tagline, summary, call to action, the typewriter
/// line and the profile card.
pub fn render_hero(profile: &Profile, typed: &str, show_cursor: bool, width: usize) -> Vec<StyledLine> {
    let mut lines = Vec::new();

    lines.push(
        StyledLine::styled(format!(" {} ", profile.badge), Style::Badge)
            .with("  ", Style::Plain)
            .with(&profile.badge_note, Style::Muted),
    );
    lines.push(StyledLine::empty());
    lines.push(StyledLine::styled(&profile.name, Style::Name));
    for row in wrap(&profile.tagline, width) {
        lines.push(StyledLine::styled(row, Style::Tagline));
    }
    lines.push(StyledLine::empty());
    for row in wrap(&profile.summary, width) {
        lines.push(StyledLine::styled(row, Style::Plain));
    }
    lines.push(StyledLine::empty());

    let mut cta = StyledLine::styled("[c] ", Style::KeyHint).with("Contact", Style::Button);
    if profile.resume.is_some() {
        cta.push("   [r] ", Style::KeyHint);
        cta.push("Resume", Style::Link);
    }
    lines.push(cta);
    lines.push(StyledLine::empty());

    let mut typewriter = StyledLine::styled("› ", Style::Accent).with(typed, Style::Accent);
    if show_cursor {
        typewriter.push(CURSOR_GLYPH, Style::Cursor);
    }
    lines.push(typewriter);
    lines.push(StyledLine::empty());

    lines.extend(profile_card(profile, width.min(CARD_WIDTH)));
    lines
}

fn profile_card(profile: &Profile, width: usize) -> Vec<StyledLine> {
    let inner = width.saturating_sub(4);
    let mut body = vec![
        StyledLine::styled(&profile.name, Style::Heading),
        StyledLine::styled(&profile.title, Style::Accent),
        StyledLine::empty(),
        StyledLine::styled("[e] ", Style::KeyHint).with(&profile.email, Style::Link),
        StyledLine::styled("[l] ", Style::KeyHint).with("LinkedIn", Style::Link),
        StyledLine::empty(),
    ];
    for milestone in &profile.milestones {
        let label = format!("{}: ", milestone.label);
        if label.len() + milestone.value.len() <= inner {
            body.push(
                StyledLine::styled(label, Style::Label).with(&milestone.value, Style::Value),
            );
        } else {
            body.push(StyledLine::styled(&milestone.label, Style::Label));
            body.push(StyledLine::styled(&milestone.value, Style::Value));
        }
    }
    card(Some(&profile.headline), body, width)
}
