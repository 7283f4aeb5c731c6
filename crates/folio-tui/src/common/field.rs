//! Editable text field for the contact form.
//!
//! Text is one `String` with a cursor counted in chars. Multi-line fields
//! accept Enter as a newline; single-line fields drop newlines (including from
//! pastes).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
    multiline: bool,
}

impl TextField {
    pub fn single_line() -> Self {
        Self::default()
    }

    pub fn multi_line() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Cursor position in chars from the start.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor as (line, column) in chars.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before: String = self.text.chars().take(self.cursor).collect();
        let line = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map_or(0, |tail| tail.chars().count());
        (line, col)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_str(&mut self, text: &str) {
        let text: String = if self.multiline {
            text.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
        };
        if text.is_empty() {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.text.insert_str(idx, &text);
        self.cursor += text.chars().count();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Backspace.
    pub fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_index(self.cursor - 1);
        let end = self.byte_index(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Delete.
    pub fn delete_next_char(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    /// Deletes the run of whitespace and then the word left of the cursor.
    pub fn delete_word_left(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        let mut idx = self.cursor.min(chars.len());
        while idx > 0 && chars[idx - 1].is_whitespace() {
            idx -= 1;
        }
        while idx > 0 && !chars[idx - 1].is_whitespace() {
            idx -= 1;
        }
        let start = self.byte_index(idx);
        let end = self.byte_index(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor = idx;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    /// Start of the current line.
    pub fn move_home(&mut self) {
        let (_, col) = self.cursor_line_col();
        self.cursor -= col;
    }

    /// End of the current line.
    pub fn move_end(&mut self) {
        let rest = self.text.chars().skip(self.cursor);
        self.cursor += rest.take_while(|c| *c != '\n').count();
    }

    /// Applies an editing key. Returns true if the key was consumed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if matches!(key.kind, KeyEventKind::Release) {
            return false;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('w') if ctrl => self.delete_word_left(),
            KeyCode::Backspace if alt || ctrl => self.delete_word_left(),
            KeyCode::Char(ch) if !ctrl && !alt => self.insert_char(ch),
            KeyCode::Enter if self.multiline => self.insert_char('\n'),
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, col: usize) -> usize {
        self.text
            .char_indices()
            .nth(col)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::single_line();
        for ch in "Ravi".chars() {
            assert!(field.input(key(KeyCode::Char(ch))));
        }
        field.input(key(KeyCode::Backspace));
        assert_eq!(field.text(), "Rav");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_single_line_rejects_newlines() {
        let mut field = TextField::single_line();
        assert!(!field.input(key(KeyCode::Enter)));
        field.insert_str("a\nb");
        assert_eq!(field.text(), "ab");
    }

    #[test]
    fn test_multi_line_enter_and_cursor() {
        let mut field = TextField::multi_line();
        field.insert_str("Hello\r\nthere");
        assert_eq!(field.text(), "Hello\nthere");
        assert_eq!(field.cursor_line_col(), (1, 5));

        field.move_home();
        assert_eq!(field.cursor_line_col(), (1, 0));
        field.input(key(KeyCode::Enter));
        assert_eq!(field.text(), "Hello\n\nthere");
    }

    #[test]
    fn test_edits_in_the_middle_of_unicode() {
        let mut field = TextField::single_line();
        field.insert_str("₹100");
        field.move_left();
        field.move_left();
        field.move_left();
        field.delete_prev_char();
        assert_eq!(field.text(), "100");
        field.delete_next_char();
        assert_eq!(field.text(), "00");
        field.move_end();
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_delete_word_left() {
        let mut field = TextField::single_line();
        field.insert_str("tax audit  ");
        field.input(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(field.text(), "tax ");
        field.delete_word_left();
        assert_eq!(field.text(), "");
    }
}
