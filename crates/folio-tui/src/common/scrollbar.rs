//! Page scrollbar with a stable thumb size.
//!
//! The thumb length is fixed for a given page height, and the thumb reaches
//! the bottom of the track exactly at the last scroll position.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = "│";

#[derive(Debug, Clone)]
pub struct Scrollbar {
    total_lines: usize,
    viewport_height: usize,
    scroll_offset: usize,
}

impl Scrollbar {
    pub fn new(total_lines: usize, viewport_height: usize, scroll_offset: usize) -> Self {
        Self {
            total_lines,
            viewport_height,
            scroll_offset,
        }
    }

    /// Only shown when the page is taller than the viewport.
    pub fn should_display(&self) -> bool {
        self.total_lines > self.viewport_height
    }

    fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport_height)
    }

    /// Thumb as (start, len) within a track of `track_len` rows.
    pub fn thumb(&self, track_len: usize) -> Option<(usize, usize)> {
        let max_scroll = self.max_scroll();
        if !self.should_display() || track_len == 0 || max_scroll == 0 {
            return None;
        }

        // round(track * viewport / (total - 1 + viewport))
        let viewport_len = self.viewport_height.min(track_len);
        let denom = self
            .total_lines
            .saturating_sub(1)
            .saturating_add(viewport_len) as u64;
        let numerator = track_len as u64 * viewport_len as u64;
        let thumb_len = ((numerator + denom / 2) / denom.max(1)) as usize;
        let thumb_len = thumb_len.clamp(1, track_len);

        let available = track_len.saturating_sub(thumb_len);
        let offset = self.scroll_offset.min(max_scroll);
        let start = (offset as u64 * available as u64 / max_scroll as u64) as usize;
        Some((start, thumb_len))
    }

    /// Scroll offset that puts the thumb at `row` of the track (click to jump).
    pub fn offset_for_row(&self, row: usize, track_len: usize) -> usize {
        let max_scroll = self.max_scroll();
        if track_len <= 1 {
            return 0;
        }
        let row = row.min(track_len - 1);
        (row as u64 * max_scroll as u64 / (track_len as u64 - 1)) as usize
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((thumb_start, thumb_len)) = self.thumb(area.height as usize) else {
            return;
        };

        let x = area.x + area.width.saturating_sub(1);
        for (idx, y) in (area.y..area.y + area.height).enumerate() {
            let (symbol, color) = if idx >= thumb_start && idx < thumb_start + thumb_len {
                (THUMB_SYMBOL, Color::Cyan)
            } else {
                (TRACK_SYMBOL, Color::DarkGray)
            };
            buf.set_string(x, y, symbol, Style::default().fg(color));
        }
    }
}
