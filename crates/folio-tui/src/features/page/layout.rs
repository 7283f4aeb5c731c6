//! Page layout pass.
//!
//! [`build`] turns the current state into one tall column of styled lines and
//! records where every section landed. The reducer feeds those spans to the
//! reveal observer; the renderer slices the lines to the viewport; `folio
//! print` writes them out as plain text.

use enum_map::EnumMap;
use folio_core::motion::LineSpan;
use folio_core::profile::{Profile, Section};
use ratatui::layout::Rect;

use super::sections;
use crate::common::StyledLine;
use crate::contact::{self, ContactForm};
use crate::hero;

pub const HEADER_HEIGHT: u16 = 2;
pub const HINT_HEIGHT: u16 = 1;
pub const PAGE_MARGIN: u16 = 2;
pub const SCROLLBAR_WIDTH: u16 = 1;
/// Narrower terminals still lay out at this width (and clip).
pub const MIN_CONTENT_WIDTH: usize = 24;
/// Wider terminals cap the text column here.
pub const MAX_CONTENT_WIDTH: usize = 96;
const SECTION_GAP: usize = 2;

pub const BACK_TO_TOP_LABEL: &str = " ↑ top [t] ";

/// Inputs of the layout pass.
pub struct PageView<'a> {
    pub profile: &'a Profile,
    pub revealed: EnumMap<Section, bool>,
    pub typed: &'a str,
    pub show_cursor: bool,
    pub contact: &'a ContactForm,
    pub year: i32,
}

#[derive(Debug, Default)]
pub struct PageLayout {
    pub lines: Vec<StyledLine>,
    /// Section owning each line (`None` for gaps and the footer).
    pub owners: Vec<Option<Section>>,
    pub spans: EnumMap<Section, LineSpan>,
    /// Terminal cursor in page coordinates (line, column) while a form field
    /// is focused.
    pub cursor: Option<(usize, usize)>,
}

impl PageLayout {
    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Section whose span contains `line`.
    pub fn section_at(&self, line: usize) -> Option<Section> {
        self.owners.get(line).copied().flatten()
    }

    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line.text().trim_end());
            out.push('\n');
        }
        out
    }

    fn push_section(&mut self, section: Section, lines: Vec<StyledLine>) {
        if !self.lines.is_empty() {
            for _ in 0..SECTION_GAP {
                self.push_gap();
            }
        }
        let top = self.lines.len();
        self.spans[section] = LineSpan::new(top, lines.len());
        self.owners.extend(std::iter::repeat_n(Some(section), lines.len()));
        self.lines.extend(lines);
    }

    fn push_gap(&mut self) {
        self.lines.push(StyledLine::empty());
        self.owners.push(None);
    }
}

/// Text column width for a terminal `width` columns wide.
pub fn content_width(width: u16) -> usize {
    let available = width.saturating_sub(PAGE_MARGIN * 2 + SCROLLBAR_WIDTH) as usize;
    available.clamp(MIN_CONTENT_WIDTH, MAX_CONTENT_WIDTH)
}

/// Number of page lines visible in a terminal `height` rows tall.
pub fn viewport_height(height: u16) -> usize {
    height.saturating_sub(HEADER_HEIGHT + HINT_HEIGHT) as usize
}

pub fn build(view: &PageView<'_>, width: usize) -> PageLayout {
    let width = width.clamp(MIN_CONTENT_WIDTH, MAX_CONTENT_WIDTH);
    let profile = view.profile;
    let mut layout = PageLayout::default();

    layout.push_section(
        Section::Hero,
        hero::render_hero(profile, view.typed, view.show_cursor, width),
    );
    layout.push_section(Section::About, sections::about(profile, width));
    layout.push_section(Section::Education, sections::education(profile, width));
    layout.push_section(
        Section::Skills,
        sections::skills(profile, view.revealed[Section::Skills], width),
    );
    layout.push_section(Section::Experience, sections::experience(profile, width));

    let mut contact_lines = sections::contact_info(profile, width);
    let form_top = contact_lines.len();
    let (form_lines, cursor) = contact::render_form(view.contact, width);
    contact_lines.extend(form_lines);
    layout.push_section(Section::Contact, contact_lines);
    let contact_top = layout.spans[Section::Contact].top;
    layout.cursor = cursor.map(|(line, col)| (contact_top + form_top + line, col));

    for _ in 0..SECTION_GAP {
        layout.push_gap();
    }
    for line in sections::footer(profile, view.year) {
        layout.lines.push(line);
        layout.owners.push(None);
    }
    layout
}

/// Screen regions of the full-screen page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Page viewport including margins.
    pub body: Rect,
    /// Text column inside the margins.
    pub page: Rect,
    pub scrollbar: Rect,
    pub hints: Rect,
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    let header_height = HEADER_HEIGHT.min(area.height);
    let hints_height = HINT_HEIGHT.min(area.height.saturating_sub(header_height));
    let body_height = area.height.saturating_sub(header_height + hints_height);

    let header = Rect::new(area.x, area.y, area.width, header_height);
    let body = Rect::new(area.x, area.y + header_height, area.width, body_height);
    let hints = Rect::new(area.x, body.y + body_height, area.width, hints_height);

    let scrollbar = Rect::new(
        area.x + area.width.saturating_sub(SCROLLBAR_WIDTH),
        body.y,
        SCROLLBAR_WIDTH.min(area.width),
        body_height,
    );
    let page_width = u16::try_from(content_width(area.width))
        .unwrap_or(u16::MAX)
        .min(area.width.saturating_sub(PAGE_MARGIN + SCROLLBAR_WIDTH));
    let page = Rect::new(area.x + PAGE_MARGIN.min(area.width), body.y, page_width, body_height);

    ScreenAreas {
        header,
        body,
        page,
        scrollbar,
        hints,
    }
}

/// Where the back-to-top indicator sits: bottom right of the body.
pub fn back_to_top_area(body: Rect) -> Rect {
    let width = BACK_TO_TOP_LABEL.chars().count() as u16;
    if body.height == 0 || body.width <= width + SCROLLBAR_WIDTH {
        return Rect::default();
    }
    Rect::new(
        body.x + body.width - width - SCROLLBAR_WIDTH - 1,
        body.y + body.height - 1,
        width,
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view<'a>(profile: &'a Profile, form: &'a ContactForm, revealed: bool) -> PageView<'a> {
        PageView {
            profile,
            revealed: EnumMap::from_fn(|_| revealed),
            typed: "CA Finalist",
            show_cursor: false,
            contact: form,
            year: 2026,
        }
    }

    #[test]
    fn test_sections_are_ordered_and_disjoint() {
        let profile = Profile::default();
        let form = ContactForm::default();
        let layout = build(&view(&profile, &form, true), 60);

        let spans: Vec<LineSpan> = Section::ALL.iter().map(|s| layout.spans[*s]).collect();
        assert_eq!(spans[0].top, 0);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].bottom() + SECTION_GAP, pair[1].top);
        }
        assert_eq!(layout.owners.len(), layout.lines.len());
        assert_eq!(layout.section_at(spans[3].top), Some(Section::Skills));
        assert_eq!(layout.section_at(spans[3].bottom()), None);
    }

    #[test]
    fn test_plain_text_has_every_section_and_footer() {
        let profile = Profile::default();
        let form = ContactForm::default();
        let text = build(&view(&profile, &form, true), 60).to_plain_text();

        for title in ["About", "Education", "Skills", "Experience", "Contact"] {
            assert!(text.lines().any(|l| l == title), "missing {title}");
        }
        assert!(text.contains("› CA Finalist"));
        assert!(text.contains("© 2026 Anjali Shukla — CA Finalist"));
    }

    #[test]
    fn test_width_is_capped() {
        let profile = Profile::default();
        let form = ContactForm::default();
        let widest = build(&view(&profile, &form, true), usize::MAX).to_plain_text();
        let capped = build(&view(&profile, &form, true), MAX_CONTENT_WIDTH).to_plain_text();
        assert_eq!(widest, capped);
    }

    #[test]
    fn test_cursor_maps_into_contact_section() {
        let profile = Profile::default();
        let mut form = ContactForm::default();
        form.focus = Some(crate::contact::FormFocus::Field(
            folio_core::contact::ContactField::Name,
        ));
        let layout = build(&view(&profile, &form, true), 60);

        let (line, _) = layout.cursor.unwrap();
        assert_eq!(layout.section_at(line), Some(Section::Contact));
        assert!(layout.lines[line].text().starts_with("Name"));
    }

    #[test]
    fn test_screen_areas_stack() {
        let areas = screen_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, HEADER_HEIGHT);
        assert_eq!(areas.body.height as usize, viewport_height(24));
        assert_eq!(areas.hints.y, 23);
        assert_eq!(areas.scrollbar.x, 79);
        assert_eq!(areas.page.width as usize, content_width(80));

        let top = back_to_top_area(areas.body);
        assert_eq!(top.y, areas.body.y + areas.body.height - 1);
        assert!(top.right() < areas.scrollbar.x);
    }
}
