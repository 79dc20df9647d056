//! Layout module for tracking UI component regions
//!
//! Regions are recorded while rendering and consulted for mouse input, so
//! a click can be classified as inside or outside the search region.

use ratatui::layout::Rect;

/// Named screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchInput,
    SuggestionList,
    Results,
    Detail,
    DetailContent,
    BackControl,
}

/// Where each component was drawn on the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub search_input: Option<Rect>,
    pub suggestion_list: Option<Rect>,
    pub results: Option<Rect>,
    pub detail: Option<Rect>,
    pub detail_content: Option<Rect>,
    pub back_control: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Topmost region under the given cell
    ///
    /// Overlays are checked first: the suggestion popup covers the body, and
    /// the back control and content sit inside the detail container.
    pub fn region_at(&self, column: u16, row: u16) -> Option<Region> {
        let ordered = [
            (self.suggestion_list, Region::SuggestionList),
            (self.search_input, Region::SearchInput),
            (self.back_control, Region::BackControl),
            (self.detail_content, Region::DetailContent),
            (self.detail, Region::Detail),
            (self.results, Region::Results),
        ];

        ordered
            .into_iter()
            .find(|(rect, _)| rect.is_some_and(|r| contains(r, column, row)))
            .map(|(_, region)| region)
    }

    /// True when the cell is part of the input or its suggestion popup
    pub fn in_search_region(&self, column: u16, row: u16) -> bool {
        matches!(
            self.region_at(column, row),
            Some(Region::SearchInput | Region::SuggestionList)
        )
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
