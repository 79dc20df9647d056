//! Mouse handling
//!
//! Clicks are resolved against the regions recorded by the last render.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::controller::{InputEvent, View};
use crate::layout::Region;
use crate::suggestions::suggestion_render::item_at_row;

const WHEEL_LINES: u16 = 3;

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, mouse.column, mouse.row),
        MouseEventKind::ScrollDown => scroll_detail(app, mouse, true),
        MouseEventKind::ScrollUp => scroll_detail(app, mouse, false),
        _ => {}
    }
}

fn handle_click(app: &mut App, column: u16, row: u16) {
    let regions = app.layout_regions;
    if !regions.in_search_region(column, row) {
        let event = match regions.region_at(column, row) {
            Some(Region::BackControl) => InputEvent::Back,
            _ => InputEvent::OutsideClick,
        };
        app.dispatch(event);
        return;
    }

    let event = match regions.region_at(column, row) {
        Some(Region::SuggestionList) => regions
            .suggestion_list
            .and_then(|popup| item_at_row(app.controller.list(), popup, row))
            .map(InputEvent::Click),
        _ => Some(InputEvent::Focus),
    };

    if let Some(event) = event {
        app.dispatch(event);
    }
}

fn scroll_detail(app: &mut App, mouse: MouseEvent, down: bool) {
    if app.controller.view() != View::Detail {
        return;
    }
    if !matches!(
        app.layout_regions.region_at(mouse.column, mouse.row),
        Some(Region::Detail | Region::DetailContent | Region::BackControl)
    ) {
        return;
    }

    let scroll = &mut app.controller.detail_mut().scroll;
    if down {
        scroll.scroll_down(WHEEL_LINES);
    } else {
        scroll.scroll_up(WHEEL_LINES);
    }
}
