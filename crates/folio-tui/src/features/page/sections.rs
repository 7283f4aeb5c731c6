//! Line builders for the content sections below the hero.

use folio_core::profile::Profile;
use unicode_width::UnicodeWidthStr;

use crate::common::style::card;
use crate::common::text::{pad_to_width, wrap};
use crate::common::{Style, StyledLine};

const BAR_FILL: &str = "█";
const BAR_TRACK: &str = "░";
const MIN_BAR_WIDTH: usize = 10;
const FACT_LABEL_WIDTH: usize = 14;
/// Widest card drawn on large terminals.
const MAX_CARD_WIDTH: usize = 64;

/// Section title with an underline.
pub fn heading(title: &str) -> Vec<StyledLine> {
    vec![
        StyledLine::styled(title, Style::Heading),
        StyledLine::styled("─".repeat(title.width().max(3)), Style::Muted),
        StyledLine::empty(),
    ]
}

pub fn about(profile: &Profile, width: usize) -> Vec<StyledLine> {
    let mut lines = heading("About");
    for row in wrap(&profile.about, width) {
        lines.push(StyledLine::styled(row, Style::Plain));
    }
    lines.push(StyledLine::empty());

    let value_width = width.saturating_sub(FACT_LABEL_WIDTH).max(1);
    for fact in &profile.facts {
        for (idx, row) in wrap(&fact.value, value_width).into_iter().enumerate() {
            let label = if idx == 0 { fact.label.as_str() } else { "" };
            lines.push(
                StyledLine::styled(pad_to_width(label, FACT_LABEL_WIDTH), Style::Label)
                    .with(row, Style::Value),
            );
        }
    }
    lines
}

pub fn education(profile: &Profile, width: usize) -> Vec<StyledLine> {
    let mut lines = heading("Education");
    let card_width = width.min(MAX_CARD_WIDTH);
    let inner = card_width.saturating_sub(4).max(1);

    for item in &profile.education {
        let mut body = Vec::new();
        let status_width = item.status.width();
        let degree_width = inner.saturating_sub(status_width + 1);
        body.push(
            StyledLine::styled(pad_to_width(&item.degree, degree_width), Style::Heading)
                .with(" ", Style::Plain)
                .with(&item.status, Style::Badge),
        );
        for row in wrap(&item.institution, inner) {
            body.push(StyledLine::styled(row, Style::Accent));
        }
        for row in wrap(&item.note, inner) {
            body.push(StyledLine::styled(row, Style::Muted));
        }
        lines.extend(card(Some(item.badge()), body, card_width));
        lines.push(StyledLine::empty());
    }

    if !profile.certifications.is_empty() {
        lines.push(StyledLine::styled("Certifications", Style::Label));
        let mut row = StyledLine::empty();
        let mut used = 0;
        for cert in &profile.certifications {
            let chip = format!("[{cert}]");
            let chip_width = chip.width() + 1;
            if used > 0 && used + chip_width > width {
                lines.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(chip, Style::Badge);
            row.push(" ", Style::Plain);
            used += chip_width;
        }
        lines.push(row);
    }
    lines
}

/// Skill bars fill to their percentage only once the section is revealed.
pub fn skills(profile: &Profile, revealed: bool, width: usize) -> Vec<StyledLine> {
    let mut lines = heading("Skills");

    let name_width = profile
        .skills
        .iter()
        .map(|s| s.name.width())
        .max()
        .unwrap_or(0)
        .min(width / 3);
    let bar_width = width.saturating_sub(name_width + 2 + 5).max(MIN_BAR_WIDTH);

    for skill in &profile.skills {
        let filled = if revealed {
            bar_fill(skill.percent, bar_width)
        } else {
            0
        };
        lines.push(
            StyledLine::styled(pad_to_width(&skill.name, name_width), Style::Label)
                .with("  ", Style::Plain)
                .with(BAR_FILL.repeat(filled), Style::BarFill)
                .with(BAR_TRACK.repeat(bar_width - filled), Style::BarTrack)
                .with(format!(" {:>3}%", skill.percent), Style::Value),
        );
    }
    lines
}

fn bar_fill(percent: u8, bar_width: usize) -> usize {
    let percent = usize::from(percent.min(100));
    (percent * bar_width + 50) / 100
}

pub fn experience(profile: &Profile, width: usize) -> Vec<StyledLine> {
    let mut lines = heading("Experience");
    let body_width = width.saturating_sub(2).max(1);

    for (idx, item) in profile.experience.iter().enumerate() {
        lines.push(
            StyledLine::styled("● ", Style::TimelineDot)
                .with(&item.role, Style::Heading)
                .with(" · ", Style::Muted)
                .with(&item.company, Style::Accent),
        );
        lines.push(StyledLine::styled("│ ", Style::TimelineDot).with(&item.duration, Style::Badge));
        for row in wrap(&item.description, body_width) {
            lines.push(StyledLine::styled("│ ", Style::TimelineDot).with(row, Style::Plain));
        }
        if idx + 1 < profile.experience.len() {
            lines.push(StyledLine::styled("│", Style::TimelineDot));
        }
    }
    lines
}

/// Contact details shown above the form.
pub fn contact_info(profile: &Profile, width: usize) -> Vec<StyledLine> {
    let mut lines = heading("Contact");
    lines.push(
        StyledLine::styled("Email  ", Style::Label)
            .with(&profile.email, Style::Link)
            .with("  ", Style::Plain)
            .with("[e]", Style::KeyHint)
            .with(" open  ", Style::Muted)
            .with("[y]", Style::KeyHint)
            .with(" copy", Style::Muted),
    );
    lines.push(StyledLine::empty());
    for note in &profile.contact_notes {
        for row in wrap(note, width.saturating_sub(2).max(1)) {
            lines.push(StyledLine::styled("• ", Style::Accent).with(row, Style::Value));
        }
    }
    lines.push(StyledLine::empty());
    lines
}

/// `© <year> <name> — <headline>` and the footer links.
pub fn footer(profile: &Profile, year: i32) -> Vec<StyledLine> {
    vec![
        StyledLine::styled(
            format!("© {year} {} — {}", profile.name, profile.headline),
            Style::Muted,
        ),
        StyledLine::styled("[e] ", Style::KeyHint)
            .with("Email", Style::Link)
            .with("  ·  ", Style::Muted)
            .with("[l] ", Style::KeyHint)
            .with("LinkedIn", Style::Link),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[StyledLine]) -> Vec<String> {
        lines.iter().map(StyledLine::text).collect()
    }

    #[test]
    fn test_skill_bars_fill_only_when_revealed() {
        let profile = Profile::default();

        let hidden = texts(&skills(&profile, false, 60));
        let taxation = hidden.iter().find(|l| l.starts_with("Taxation")).unwrap();
        assert!(!taxation.contains(BAR_FILL));
        assert!(taxation.ends_with(" 90%"));

        let shown = texts(&skills(&profile, true, 60));
        let taxation = shown.iter().find(|l| l.starts_with("Taxation")).unwrap();
        let tally = shown.iter().find(|l| l.starts_with("Tally")).unwrap();
        assert!(taxation.matches(BAR_FILL).count() > tally.matches(BAR_FILL).count());
    }

    #[test]
    fn test_bar_fill_rounds() {
        assert_eq!(bar_fill(0, 40), 0);
        assert_eq!(bar_fill(100, 40), 40);
        assert_eq!(bar_fill(90, 40), 36);
        assert_eq!(bar_fill(75, 10), 8);
    }

    #[test]
    fn test_skill_rows_share_a_width() {
        let profile = Profile::default();
        let lines = skills(&profile, true, 60);
        let widths: Vec<usize> = lines[3..].iter().map(|l| l.text().width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    #[test]
    fn test_footer_uses_year_and_headline() {
        let profile = Profile::default();
        let lines = texts(&footer(&profile, 2026));
        assert_eq!(lines[0], "© 2026 Anjali Shukla — CA Finalist");
    }

    #[test]
    fn test_about_lists_facts() {
        let lines = texts(&about(&Profile::default(), 60));
        assert!(lines.iter().any(|l| l.starts_with("Location") && l.ends_with("New Delhi, India")));
    }

    #[test]
    fn test_education_cards_and_certifications() {
        let lines = texts(&education(&Profile::default(), 60));
        assert!(lines.iter().any(|l| l.contains("Institute of Chartered Accountants")));
        assert!(lines.iter().any(|l| l.contains("[PwC Certification] [EY Certification]")));
    }
}
