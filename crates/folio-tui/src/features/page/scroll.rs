//! Page scroll position.

/// Scrolled this many lines down, the back-to-top indicator appears.
pub const BACK_TO_TOP_AFTER: usize = 12;

/// Lines moved per mouse wheel notch.
pub const MOUSE_SCROLL_LINES: usize = 3;

/// Scroll offset clamped to the page and viewport sizes.
#[derive(Debug, Default, Clone)]
pub struct ScrollState {
    offset: usize,
    viewport_height: usize,
    content_height: usize,
}

impl ScrollState {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn content_height(&self) -> usize {
        self.content_height
    }

    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Updates page and viewport sizes, re-clamping the offset.
    pub fn set_metrics(&mut self, content_height: usize, viewport_height: usize) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Moves to `line` (clamped). Returns true if the offset changed.
    pub fn jump_to(&mut self, line: usize) -> bool {
        let target = line.min(self.max_offset());
        let changed = target != self.offset;
        self.offset = target;
        changed
    }

    pub fn scroll_up(&mut self, lines: usize) -> bool {
        self.jump_to(self.offset.saturating_sub(lines))
    }

    pub fn scroll_down(&mut self, lines: usize) -> bool {
        self.jump_to(self.offset.saturating_add(lines))
    }

    pub fn page_up(&mut self) -> bool {
        self.scroll_up(self.page_step())
    }

    pub fn page_down(&mut self) -> bool {
        self.scroll_down(self.page_step())
    }

    pub fn to_top(&mut self) -> bool {
        self.jump_to(0)
    }

    pub fn to_bottom(&mut self) -> bool {
        self.jump_to(usize::MAX)
    }

    pub fn shows_back_to_top(&self) -> bool {
        self.offset > BACK_TO_TOP_AFTER
    }

    /// One viewport minus a line of overlap.
    fn page_step(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }
}
