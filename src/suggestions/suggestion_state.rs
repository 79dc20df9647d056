use crate::wiki::SuggestionItem;

/// Rows shown at once before the popup starts scrolling
pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;

/// Items currently offered to the user and the keyboard highlight
///
/// `active` is either `None` or a valid index into `items`. Replacing the
/// items always resets it to `None`. The list is visible exactly when it is
/// non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionListState {
    items: Vec<SuggestionItem>,
    active: Option<usize>,
    scroll_offset: usize,
}

impl SuggestionListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all items; an empty set behaves like [`clear`](Self::clear)
    pub fn render(&mut self, items: Vec<SuggestionItem>) {
        self.items = items;
        self.active = None;
        self.scroll_offset = 0;
    }

    pub fn clear(&mut self) {
        self.render(Vec::new());
    }

    pub fn items(&self) -> &[SuggestionItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// First visible row of the popup
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// First item shown when only `rows` rows fit
    ///
    /// Shifts [`scroll_offset`](Self::scroll_offset) just enough to keep the
    /// highlight on screen when the popup is clipped below its full height.
    pub fn window_start(&self, rows: usize) -> usize {
        let rows = rows.max(1);
        match self.active {
            Some(active) if active < self.scroll_offset => active,
            Some(active) if active >= self.scroll_offset + rows => active + 1 - rows,
            _ => self.scroll_offset,
        }
    }

    /// Highlight `index` and scroll it into view; out-of-range indices are ignored
    pub fn set_active(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.active = Some(index);

        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + MAX_VISIBLE_SUGGESTIONS {
            self.scroll_offset = index + 1 - MAX_VISIBLE_SUGGESTIONS;
        }
    }

    /// Move the highlight down, stopping at the last item
    pub fn move_down(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        let next = self.active.map_or(0, |i| (i + 1).min(last));
        self.set_active(next);
    }

    /// Move the highlight up, stopping at the first item
    pub fn move_up(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let prev = self.active.map_or(0, |i| i.saturating_sub(1));
        self.set_active(prev);
    }

    /// The item Enter would pick: the highlighted one, or the first
    pub fn current(&self) -> Option<&SuggestionItem> {
        self.items.get(self.active.unwrap_or(0))
    }

    /// Take the current item and clear the list
    ///
    /// Returns `None` without touching anything when the list is empty.
    pub fn select_current(&mut self) -> Option<SuggestionItem> {
        let index = self.active.unwrap_or(0);
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.swap_remove(index);
        self.clear();
        Some(item)
    }
}

#[cfg(test)]
#[path = "suggestion_state_tests.rs"]
mod suggestion_state_tests;
