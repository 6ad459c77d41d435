//! Cursor and viewport logic for horse.
//!
//! [CursorState] addresses whichever list is in view (filtered results or the full listing),
//! the caller always passes that list's length. [ViewportConfig] carries the number of rows
//! available for the list and only changes on an explicit resize.

/// Rows taken by the header, the separator and the footer.
pub(crate) const RESERVED_ROWS: u16 = 3;

/// Height of the scrollable list area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportConfig {
    height: usize,
}

impl ViewportConfig {
    /// Builds the viewport for a terminal with `rows` rows, never smaller than one row.
    pub(crate) fn from_terminal_rows(rows: u16) -> Self {
        Self {
            height: usize::from(rows.saturating_sub(RESERVED_ROWS)).max(1),
        }
    }

    pub fn with_height(height: usize) -> Self {
        Self {
            height: height.max(1),
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::from_terminal_rows(24)
    }
}

/// Selected row and first visible row of the active list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    selected: usize,
    top: usize,
}

impl CursorState {
    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn top(&self) -> usize {
        self.top
    }

    /// Moves the selection by `delta`, wrapping at both ends of a list of `len` entries.
    /// Returns `false` if there are no entries.
    fn move_by(&mut self, delta: isize, len: usize, viewport: &ViewportConfig) -> bool {
        if len == 0 {
            return false;
        }

        // rem_euclid keeps the index in range for negative deltas
        let len_i = len as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len_i) as usize;
        self.scroll_into_view(viewport);
        true
    }

    pub(crate) fn move_down(&mut self, len: usize, viewport: &ViewportConfig) -> bool {
        self.move_by(1, len, viewport)
    }

    pub(crate) fn move_up(&mut self, len: usize, viewport: &ViewportConfig) -> bool {
        self.move_by(-1, len, viewport)
    }

    /// Pulls the selection back inside a list that shrank to `len` entries.
    pub(crate) fn clamp(&mut self, len: usize, viewport: &ViewportConfig) {
        if len == 0 {
            self.reset();
            return;
        }
        self.selected = self.selected.min(len - 1);
        self.top = self.top.min(self.selected);
        self.scroll_into_view(viewport);
    }

    pub(crate) fn reset(&mut self) {
        self.selected = 0;
        self.top = 0;
    }

    /// Adjusts `top` minimally so the selection is inside the window.
    fn scroll_into_view(&mut self, viewport: &ViewportConfig) {
        let height = viewport.height();
        if self.selected < self.top {
            self.top = self.selected;
        } else if self.selected >= self.top + height {
            self.top = self.selected + 1 - height;
        }
    }
}
