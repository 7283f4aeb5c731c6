//! Width-aware text helpers.
//!
//! All widths are terminal columns (`unicode-width`), not chars or bytes.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with `…` if it exceeds `max_width`.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        truncated.push(ch);
        used += w;
    }
    truncated.push('…');
    truncated
}

/// Word-wraps `text` to `width` columns.
///
/// Explicit newlines are kept. Words wider than a line are split. Always
/// returns at least one (possibly empty) line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(!line.is_empty());

            if line_width + gap + word_width <= width {
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += gap + word_width;
                continue;
            }

            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if line_width + w > width && !line.is_empty() {
                    out.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += w;
            }
        }
        out.push(line);
    }

    out
}

/// Pads `text` with spaces to exactly `width` columns (truncating if longer).
pub fn pad_to_width(text: &str, width: usize) -> String {
    let text = truncate_with_ellipsis(text, width);
    let pad = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(pad))
}
