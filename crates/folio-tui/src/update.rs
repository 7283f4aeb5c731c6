//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use folio_core::contact::ContactField;
use folio_core::profile::Section;
use ratatui::layout::{Position, Rect};

use crate::common::{NoticeKind, Scrollbar};
use crate::contact::{self, FormFocus};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::page::scroll::MOUSE_SCROLL_LINES;
use crate::page::{ScrollState, back_to_top_area, nav_hit, screen_areas, section_for_key};
use crate::state::AppState;

pub const COPIED_NOTICE: &str = "Email copied to clipboard.";
pub const NO_RESUME_NOTICE: &str = "No resume configured.";

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick { elapsed } => {
            handle_tick(app, elapsed);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.page.size = (width, height);
            relayout(app);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Interrupted => quit(app),
        UiEvent::ContactDelivered { task } => {
            contact::on_delivered(&mut app.contact, task, &mut app.timers);
            relayout(app);
            vec![]
        }
        UiEvent::ContactCancelled { task } => {
            contact::on_cancelled(&mut app.contact, task);
            vec![]
        }
        UiEvent::Copied => {
            app.flash.show(COPIED_NOTICE, NoticeKind::Info, &mut app.timers);
            vec![]
        }
        UiEvent::EffectFailed { message } => {
            app.flash.show(message, NoticeKind::Error, &mut app.timers);
            vec![]
        }
    }
}

/// Advances the timer queue and routes every fired handle to its owner.
fn handle_tick(app: &mut AppState, elapsed: Duration) {
    let mut form_changed = false;
    for handle in app.timers.advance_to(elapsed) {
        if app.hero.on_timer(handle, &mut app.timers) {
            continue;
        }
        if contact::on_timer(&mut app.contact, handle) {
            form_changed = true;
            continue;
        }
        if !app.flash.on_timer(handle) {
            tracing::trace!(?handle, "timer fired with no owner");
        }
    }
    if form_changed {
        relayout(app);
    }
}

/// Rebuilds the layout, re-clamps the scroll position and re-syncs visibility.
fn relayout(app: &mut AppState) {
    let layout = app.layout();
    let viewport = app.viewport_height();
    app.page.scroll.set_metrics(layout.total_lines(), viewport);
    app.page.spans = layout.spans;
    sync_visibility(app);
}

fn sync_visibility(app: &mut AppState) {
    let top = app.page.scroll.offset();
    let height = app.page.scroll.viewport_height();
    if height == 0 {
        return;
    }
    app.reveal.sync(&app.page.spans, top, height);

    // Nav highlight: the last section starting in the upper third of the view.
    let probe = top + height / 3;
    app.page.active = Section::ALL
        .into_iter()
        .rev()
        .find(|section| app.page.spans[*section].top <= probe)
        .unwrap_or(Section::Hero);
}

fn scroll_with(app: &mut AppState, f: impl FnOnce(&mut ScrollState) -> bool) {
    if f(&mut app.page.scroll) {
        sync_visibility(app);
    }
}

fn jump_to_section(app: &mut AppState, section: Section) {
    let top = app.page.spans[section].top;
    scroll_with(app, |scroll| scroll.jump_to(top));
}

/// Keeps the form cursor inside the viewport while typing.
fn follow_cursor(app: &mut AppState) {
    let Some((line, _)) = app.layout().cursor else {
        return;
    };
    let scroll = &app.page.scroll;
    let (top, height) = (scroll.offset(), scroll.viewport_height());
    if line < top {
        scroll_with(app, |s| s.jump_to(line));
    } else if height > 0 && line >= top + height {
        scroll_with(app, |s| s.jump_to(line + 1 - height));
    }
}

fn quit(app: &mut AppState) -> Vec<UiEffect> {
    tracing::info!("quit requested");
    let mut effects = Vec::new();
    if let Some(token) = app.teardown() {
        effects.push(UiEffect::CancelTask { token: Some(token) });
    }
    effects.push(UiEffect::Quit);
    effects
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            vec![]
        }
        Event::Paste(text) => {
            if let Some(field) = app.contact.focused_field() {
                app.contact.field_mut(field).insert_str(&text);
                relayout(app);
                follow_cursor(app);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return quit(app);
    }

    if app.contact.is_focused() {
        let effects = contact::handle_key(&mut app.contact, key, &mut app.tasks, &mut app.timers);
        relayout(app);
        follow_cursor(app);
        return effects;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => quit(app),
        KeyCode::Char(ch @ '1'..='9') => {
            if let Some(section) = section_for_key(ch) {
                jump_to_section(app, section);
            }
            vec![]
        }
        KeyCode::Char('j') | KeyCode::Down => {
            scroll_with(app, |s| s.scroll_down(1));
            vec![]
        }
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_with(app, |s| s.scroll_up(1));
            vec![]
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            scroll_with(app, ScrollState::page_down);
            vec![]
        }
        KeyCode::PageUp => {
            scroll_with(app, ScrollState::page_up);
            vec![]
        }
        KeyCode::Home | KeyCode::Char('g' | 't') => {
            scroll_with(app, ScrollState::to_top);
            vec![]
        }
        KeyCode::End | KeyCode::Char('G') => {
            scroll_with(app, ScrollState::to_bottom);
            vec![]
        }
        KeyCode::Char('c') | KeyCode::Tab => {
            app.contact.focus = Some(FormFocus::Field(ContactField::Name));
            relayout(app);
            jump_to_section(app, Section::Contact);
            vec![]
        }
        KeyCode::Char('e') => vec![UiEffect::OpenLink {
            target: app.profile.mailto(),
        }],
        KeyCode::Char('l') => vec![UiEffect::OpenLink {
            target: app.profile.linkedin.clone(),
        }],
        KeyCode::Char('r') => match &app.profile.resume {
            Some(resume) => vec![UiEffect::OpenLink {
                target: resume.clone(),
            }],
            None => {
                app.flash
                    .show(NO_RESUME_NOTICE, NoticeKind::Error, &mut app.timers);
                vec![]
            }
        },
        KeyCode::Char('y') => vec![UiEffect::CopyToClipboard {
            text: app.profile.email.clone(),
        }],
        _ => vec![],
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let (width, height) = app.page.size;
    let areas = screen_areas(Rect::new(0, 0, width, height));
    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollDown => scroll_with(app, |s| s.scroll_down(MOUSE_SCROLL_LINES)),
        MouseEventKind::ScrollUp => scroll_with(app, |s| s.scroll_up(MOUSE_SCROLL_LINES)),
        MouseEventKind::Down(MouseButton::Left) => {
            if pos.y == areas.header.y {
                if let Some(section) = nav_hit(&app.profile.name, pos.x) {
                    app.contact.focus = None;
                    jump_to_section(app, section);
                }
            } else if app.page.scroll.shows_back_to_top()
                && back_to_top_area(areas.body).contains(pos)
            {
                scroll_with(app, ScrollState::to_top);
            } else if areas.scrollbar.contains(pos) {
                drag_scrollbar(app, areas.scrollbar, pos.y);
            } else if areas.page.contains(pos) {
                click_page(app, (pos.y - areas.page.y) as usize);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if areas.scrollbar.contains(pos) => {
            drag_scrollbar(app, areas.scrollbar, pos.y);
        }
        _ => {}
    }
}

fn drag_scrollbar(app: &mut AppState, track: Rect, y: u16) {
    let scroll = &app.page.scroll;
    let bar = Scrollbar::new(
        scroll.content_height(),
        scroll.viewport_height(),
        scroll.offset(),
    );
    let target = bar.offset_for_row((y - track.y) as usize, track.height as usize);
    scroll_with(app, |s| s.jump_to(target));
}

/// A click inside the contact section focuses the form; anywhere else leaves it.
fn click_page(app: &mut AppState, row: usize) {
    let line = app.page.scroll.offset() + row;
    let in_contact = app.page.spans[Section::Contact].contains(line);
    let focus = in_contact.then_some(FormFocus::Field(ContactField::Name));
    if app.contact.focus.is_some() != focus.is_some() {
        app.contact.focus = focus;
        relayout(app);
    }
}

#[cfg(test)]
mod tests {
    use folio_core::config::Config;

    use super::*;
    use crate::common::notice::NOTICE_DURATION;
    use crate::common::TaskId;

    fn app() -> AppState {
        let mut app = AppState::new(&Config::default()).unwrap();
        update(&mut app, UiEvent::Frame { width: 80, height: 24 });
        app
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_frame_reveals_sections_in_view() {
        let app = app();
        assert!(app.reveal.is_visible(Section::Hero));
        assert!(!app.reveal.is_visible(Section::Contact));
        assert!(app.page.scroll.content_height() > app.page.scroll.viewport_height());
    }

    #[test]
    fn test_number_key_jumps_and_reveals() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.page.scroll.offset(), app.page.spans[Section::Skills].top);
        assert!(app.reveal.is_visible(Section::Skills));
        assert!(!app.reveal.is_visible(Section::Hero));
        assert_eq!(app.page.active, Section::Skills);
    }

    #[test]
    fn test_tick_drives_typewriter() {
        let mut app = app();
        update(
            &mut app,
            UiEvent::Tick {
                elapsed: Duration::from_millis(90),
            },
        );
        assert_eq!(app.hero.display_text(), "C");
        update(
            &mut app,
            UiEvent::Tick {
                elapsed: Duration::from_millis(180),
            },
        );
        assert_eq!(app.hero.display_text(), "CA");
    }

    #[test]
    fn test_quit_tears_down() {
        let mut app = app();
        let effects = press(&mut app, KeyCode::Char('q'));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
        assert_eq!(app.timers.pending_count(), 0);
        assert!(!app.hero.is_running());
    }

    #[test]
    fn test_quit_cancels_in_flight_submission() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "Ravi");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ravi@example.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Hello");
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('s'),
                KeyModifiers::CONTROL,
            ))),
        );
        let Some(UiEffect::SubmitContact { cancel, .. }) = effects.into_iter().next() else {
            panic!("expected SubmitContact");
        };

        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        match effects.as_slice() {
            [UiEffect::CancelTask { token: Some(token) }, UiEffect::Quit] => {
                token.cancel();
                assert!(cancel.is_cancelled());
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn test_typing_in_form_does_not_trigger_shortcuts() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert!(app.contact.is_focused());
        assert_eq!(app.page.active, Section::Contact);

        let effects = press(&mut app, KeyCode::Char('q'));
        assert!(effects.is_empty());
        assert_eq!(app.contact.draft().name, "q");

        press(&mut app, KeyCode::Esc);
        assert!(!app.contact.is_focused());
    }

    #[test]
    fn test_delivery_then_notice_expires() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "Ravi");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ravi@example.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Hi");
        press(&mut app, KeyCode::Tab);
        let effects = press(&mut app, KeyCode::Enter);
        let task = match effects.as_slice() {
            [UiEffect::SubmitContact { task, .. }] => *task,
            other => panic!("unexpected effects: {other:?}"),
        };

        update(&mut app, UiEvent::ContactDelivered { task });
        assert!(app.contact.notice.get().is_some());
        assert_eq!(app.contact.draft().name, "");

        let now = app.timers.now();
        update(
            &mut app,
            UiEvent::Tick {
                elapsed: now + NOTICE_DURATION,
            },
        );
        assert!(app.contact.notice.get().is_none());
    }

    #[test]
    fn test_stale_delivery_is_ignored() {
        let mut app = app();
        update(&mut app, UiEvent::ContactDelivered { task: TaskId(42) });
        assert!(app.contact.notice.get().is_none());
    }

    #[test]
    fn test_link_and_clipboard_effects() {
        let mut app = app();
        match press(&mut app, KeyCode::Char('e')).as_slice() {
            [UiEffect::OpenLink { target }] => assert!(target.starts_with("mailto:")),
            other => panic!("unexpected effects: {other:?}"),
        }
        match press(&mut app, KeyCode::Char('y')).as_slice() {
            [UiEffect::CopyToClipboard { text }] => assert_eq!(text, &app.profile.email),
            other => panic!("unexpected effects: {other:?}"),
        }
        assert!(press(&mut app, KeyCode::Char('r')).is_empty());
        assert_eq!(
            app.flash.get().map(|n| n.text.as_str()),
            Some(NO_RESUME_NOTICE)
        );
    }

    #[test]
    fn test_mouse_wheel_and_back_to_top() {
        let mut app = app();
        for _ in 0..10 {
            update(
                &mut app,
                UiEvent::Terminal(Event::Mouse(MouseEvent {
                    kind: MouseEventKind::ScrollDown,
                    column: 10,
                    row: 10,
                    modifiers: KeyModifiers::NONE,
                })),
            );
        }
        assert_eq!(app.page.scroll.offset(), 10 * MOUSE_SCROLL_LINES);
        assert!(app.page.scroll.shows_back_to_top());

        let areas = screen_areas(Rect::new(0, 0, 80, 24));
        let target = back_to_top_area(areas.body);
        update(
            &mut app,
            UiEvent::Terminal(Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: target.x,
                row: target.y,
                modifiers: KeyModifiers::NONE,
            })),
        );
        assert_eq!(app.page.scroll.offset(), 0);
    }

    #[test]
    fn test_nav_click_jumps_to_section() {
        let mut app = app();
        let item = crate::page::nav_items(&app.profile.name)
            .into_iter()
            .find(|item| item.section == Section::Experience)
            .unwrap();
        update(
            &mut app,
            UiEvent::Terminal(Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: item.columns.start,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })),
        );
        let expected = app.page.spans[Section::Experience]
            .top
            .min(app.page.scroll.max_offset());
        assert_eq!(app.page.scroll.offset(), expected);
    }
}
