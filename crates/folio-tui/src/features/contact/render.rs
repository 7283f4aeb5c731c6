use folio_core::contact::ContactField;
use unicode_width::UnicodeWidthChar;

use super::state::{ContactForm, FormFocus};
use crate::common::text::{pad_to_width, truncate_with_ellipsis};
use crate::common::{NoticeKind, Style, StyledLine};

const LABEL_WIDTH: usize = 9;
const GUTTER: &str = "│ ";
const GUTTER_WIDTH: usize = 2;
/// The message box always shows at least this many lines.
const MESSAGE_MIN_LINES: usize = 3;

/// Form lines plus the terminal cursor position (line, column) relative to
/// the first form line, when a field is focused.
pub fn render_form(form: &ContactForm, width: usize) -> (Vec<StyledLine>, Option<(usize, usize)>) {
    let inner = width.saturating_sub(LABEL_WIDTH + GUTTER_WIDTH).max(1);
    let mut lines = Vec::new();
    let mut cursor = None;

    for field in ContactField::ALL {
        let state = form.field(field);
        let focused = form.focused_field() == Some(field);
        let label_style = if focused {
            Style::FieldFocused
        } else {
            Style::Label
        };

        let mut rows: Vec<&str> = state.text().split('\n').collect();
        if field == ContactField::Message {
            while rows.len() < MESSAGE_MIN_LINES {
                rows.push("");
            }
        }
        let show_placeholder = state.text().is_empty() && !focused;

        if focused {
            let (row, col) = state.cursor_line_col();
            let row_text = rows.get(row).copied().unwrap_or("");
            let col_width: usize = row_text
                .chars()
                .take(col)
                .map(|c| c.width().unwrap_or(0))
                .sum();
            cursor = Some((
                lines.len() + row,
                LABEL_WIDTH + GUTTER_WIDTH + col_width.min(inner),
            ));
        }

        for (idx, row) in rows.iter().enumerate() {
            let label = if idx == 0 { field_label(field) } else { "" };
            let mut line = StyledLine::styled(pad_to_width(label, LABEL_WIDTH), label_style)
                .with(GUTTER, label_style);
            if show_placeholder && idx == 0 {
                line.push(field.placeholder(), Style::FieldPlaceholder);
            } else {
                line.push(truncate_with_ellipsis(row, inner), Style::Field);
            }
            lines.push(line);
        }
    }

    lines.push(StyledLine::empty());
    let send_label = if form.is_sending() {
        "[ Sending… ]"
    } else {
        "[ Send ]"
    };
    lines.push(
        StyledLine::styled(" ".repeat(LABEL_WIDTH + GUTTER_WIDTH), Style::Plain)
            .with(send_label, button_style(form, FormFocus::Send))
            .with("  ", Style::Plain)
            .with("[ Reset ]", button_style(form, FormFocus::Reset)),
    );

    if let Some(notice) = form.notice.get() {
        let style = match notice.kind {
            NoticeKind::Info => Style::NoticeOk,
            NoticeKind::Error => Style::NoticeError,
        };
        lines.push(StyledLine::styled(
            format!("{}{}", " ".repeat(LABEL_WIDTH + GUTTER_WIDTH), notice.text),
            style,
        ));
    }

    (lines, cursor)
}

fn field_label(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Name",
        ContactField::Email => "Email",
        ContactField::Message => "Message",
    }
}

fn button_style(form: &ContactForm, button: FormFocus) -> Style {
    if form.focus == Some(button) {
        Style::ButtonFocused
    } else {
        Style::Button
    }
}

#[cfg(test)]
mod tests {
    use folio_core::motion::TimerQueue;

    use super::*;

    #[test]
    fn test_empty_form_shows_placeholders() {
        let form = ContactForm::default();
        let (lines, cursor) = render_form(&form, 40);
        let text: Vec<String> = lines.iter().map(StyledLine::text).collect();

        assert!(text[0].starts_with("Name"));
        assert!(text[0].ends_with("Your name"));
        // Name, Email, three message rows, blank, buttons.
        assert_eq!(lines.len(), 7);
        assert!(text[6].contains("[ Send ]"));
        assert_eq!(cursor, None);
    }

    #[test]
    fn test_cursor_follows_focused_field() {
        let mut form = ContactForm::default();
        form.field_mut(ContactField::Message).insert_str("Hi\nthere");
        form.focus = Some(FormFocus::Field(ContactField::Message));

        let (_, cursor) = render_form(&form, 40);
        // Message starts on line 2; cursor sits after "there" on its second row.
        assert_eq!(cursor, Some((3, LABEL_WIDTH + GUTTER_WIDTH + 5)));
    }

    #[test]
    fn test_notice_and_sending_label() {
        let mut form = ContactForm::default();
        let mut timers = TimerQueue::new();
        form.notice
            .show("Please fill all fields.", NoticeKind::Error, &mut timers);
        form.submission
            .on_started(crate::common::TaskId(1), tokio_util::sync::CancellationToken::new());

        let (lines, _) = render_form(&form, 40);
        let last = lines.last().map(StyledLine::text).unwrap_or_default();
        assert!(last.ends_with("Please fill all fields."));
        assert!(lines.iter().any(|l| l.text().contains("Sending…")));
    }
}
