//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::style::Style as SemanticStyle;
use crate::common::{NoticeKind, Scrollbar, StyledLine};
use crate::page::layout::{BACK_TO_TOP_LABEL, PageLayout, ScreenAreas};
use crate::page::{back_to_top_area, nav_items, screen_areas};
use crate::state::AppState;

const PAGE_HINTS: &str = "1-6 jump · j/k scroll · c contact · e email · l LinkedIn · y copy · q quit";
const FORM_HINTS: &str = "Tab next · Shift+Tab prev · Enter select · Ctrl+S send · Esc leave form";

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let areas = screen_areas(frame.area());
    let layout = app.layout();

    render_header(app, frame, areas.header);
    render_page(app, &layout, frame, &areas);
    render_hints(app, frame, areas.hints);
}

fn render_header(app: &AppState, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let buf = frame.buffer_mut();
    buf.set_string(
        area.x + 1,
        area.y,
        &app.profile.name,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    );
    for item in nav_items(&app.profile.name) {
        if item.columns.end > area.right() {
            break;
        }
        let style = if item.section == app.page.active {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        buf.set_string(item.columns.start, area.y, item.label(), style);
    }
    if area.height > 1 {
        buf.set_string(
            area.x,
            area.y + 1,
            "─".repeat(area.width as usize),
            Style::default().fg(Color::DarkGray),
        );
    }
}

fn render_page(app: &AppState, layout: &PageLayout, frame: &mut Frame, areas: &ScreenAreas) {
    let offset = app.page.scroll.offset();
    let height = areas.page.height as usize;

    let lines: Vec<Line<'static>> = layout
        .lines
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(idx, line)| {
            let dimmed = layout
                .section_at(idx)
                .is_some_and(|section| !app.reveal.is_visible(section));
            to_line(line, dimmed)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), areas.page);

    frame.render_widget(
        Scrollbar::new(layout.total_lines(), height, offset),
        areas.scrollbar,
    );

    if app.page.scroll.shows_back_to_top() {
        let target = back_to_top_area(areas.body);
        if target.width > 0 {
            frame.buffer_mut().set_string(
                target.x,
                target.y,
                BACK_TO_TOP_LABEL,
                Style::default().fg(Color::Black).bg(Color::Cyan),
            );
        }
    }

    if let Some((line, col)) = layout.cursor
        && line >= offset
        && line < offset + height
    {
        let x = areas.page.x + u16::try_from(col).unwrap_or(u16::MAX).min(areas.page.width);
        let y = areas.page.y + (line - offset) as u16;
        frame.set_cursor_position(Position::new(x, y));
    }
}

fn render_hints(app: &AppState, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let line = match app.flash.get() {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Info => Color::Green,
                NoticeKind::Error => Color::Red,
            };
            Line::from(Span::styled(
                format!(" {}", notice.text),
                Style::default().fg(color),
            ))
        }
        None => {
            let hints = if app.contact.is_focused() {
                FORM_HINTS
            } else {
                PAGE_HINTS
            };
            Line::from(Span::styled(
                format!(" {hints}"),
                Style::default().fg(Color::DarkGray),
            ))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Converts a semantic line to a ratatui line.
///
/// Lines of sections that have not been revealed yet are drawn dimmed.
pub fn to_line(line: &StyledLine, dimmed: bool) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .spans
        .iter()
        .map(|span| {
            let style = if dimmed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM)
            } else {
                style_for(span.style)
            };
            Span::styled(span.text.clone(), style)
        })
        .collect();
    Line::from(spans)
}

fn style_for(style: SemanticStyle) -> Style {
    let base = Style::default();
    match style {
        SemanticStyle::Plain => base,
        SemanticStyle::Muted => base.fg(Color::DarkGray),
        SemanticStyle::Heading => base.fg(Color::White).add_modifier(Modifier::BOLD),
        SemanticStyle::Name => base.fg(Color::Cyan).add_modifier(Modifier::BOLD),
        SemanticStyle::Tagline => base.fg(Color::White).add_modifier(Modifier::ITALIC),
        SemanticStyle::Badge => base.fg(Color::Black).bg(Color::Cyan),
        SemanticStyle::Accent => base.fg(Color::Cyan),
        SemanticStyle::Link => base.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        SemanticStyle::KeyHint => base.fg(Color::Yellow),
        SemanticStyle::Label => base.fg(Color::Gray),
        SemanticStyle::Value => base.fg(Color::White),
        SemanticStyle::BarFill => base.fg(Color::Cyan),
        SemanticStyle::BarTrack => base.fg(Color::DarkGray),
        SemanticStyle::Cursor => base.fg(Color::Cyan).add_modifier(Modifier::BOLD),
        SemanticStyle::TimelineDot => base.fg(Color::Magenta),
        SemanticStyle::Field => base.fg(Color::White),
        SemanticStyle::FieldPlaceholder => base.fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        SemanticStyle::FieldFocused => base.fg(Color::Cyan).add_modifier(Modifier::BOLD),
        SemanticStyle::Button => base.fg(Color::White).add_modifier(Modifier::BOLD),
        SemanticStyle::ButtonFocused => base.fg(Color::Black).bg(Color::Cyan),
        SemanticStyle::NoticeOk => base.fg(Color::Green),
        SemanticStyle::NoticeError => base.fg(Color::Red),
    }
}
