//! Suggestion popup rendering
//!
//! Draws the dropdown directly under the search input.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::{MAX_VISIBLE_SUGGESTIONS, SuggestionListState};
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const MIN_POPUP_HEIGHT: u16 = 3;
const MARKER_WIDTH: usize = 2;
const DESCRIPTION_SEPARATOR: &str = "  ";

/// Render the suggestion popup below `anchor`
///
/// Returns the popup area for hit-testing, or `None` when nothing was drawn.
pub fn render_popup(
    frame: &mut Frame,
    list: &SuggestionListState,
    anchor: Rect,
    bounds: Rect,
    title: &str,
) -> Option<Rect> {
    if !list.is_visible() {
        return None;
    }

    let visible_count = list.len().min(MAX_VISIBLE_SUGGESTIONS) as u16;
    let popup_area = popup::popup_below_anchor(
        anchor,
        bounds,
        visible_count + POPUP_BORDER_HEIGHT,
        MIN_POPUP_HEIGHT,
    )?;

    let inner_width = popup_area.width.saturating_sub(POPUP_BORDER_HEIGHT) as usize;
    let rows = visible_rows(popup_area);

    let items: Vec<ListItem> = list
        .items()
        .iter()
        .enumerate()
        .skip(list.window_start(rows))
        .take(rows)
        .map(|(i, item)| {
            let selected = list.active() == Some(i);
            let marker = if selected { "► " } else { "  " };

            let text_width = inner_width.saturating_sub(MARKER_WIDTH);
            let title = popup::truncate_to_width(&item.title, text_width);
            let title_width = title.width();

            let description_width = text_width
                .saturating_sub(title_width)
                .saturating_sub(DESCRIPTION_SEPARATOR.len());
            let description = if item.description.is_empty() || description_width == 0 {
                String::new()
            } else {
                format!(
                    "{}{}",
                    DESCRIPTION_SEPARATOR,
                    popup::truncate_to_width(&item.description, description_width)
                )
            };

            let line = if selected {
                Line::from(vec![
                    Span::styled(
                        format!("{}{}", marker, title),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description, Style::default().fg(Color::Black).bg(Color::Cyan)),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{}{}", marker, title),
                        Style::default().fg(Color::White).bg(Color::Black),
                    ),
                    Span::styled(description, Style::default().fg(Color::DarkGray).bg(Color::Black)),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list_widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list_widget, popup_area);
    Some(popup_area)
}

/// Map a screen row inside the popup to an item index
pub fn item_at_row(list: &SuggestionListState, popup_area: Rect, row: u16) -> Option<usize> {
    let first_row = popup_area.y + 1;
    let last_row = popup_area.y + popup_area.height.saturating_sub(1);
    if row < first_row || row >= last_row {
        return None;
    }

    let index = list.window_start(visible_rows(popup_area)) + (row - first_row) as usize;
    (index < list.len()).then_some(index)
}

fn visible_rows(popup_area: Rect) -> usize {
    popup_area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize
}

#[cfg(test)]
#[path = "suggestion_render_tests.rs"]
mod suggestion_render_tests;
