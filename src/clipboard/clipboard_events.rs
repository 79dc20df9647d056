use crate::app::App;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::backend::copy_to_clipboard;

/// Ctrl+Y copies the link of whatever is on screen
pub fn handle_clipboard_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
        copy_current_link(app);
        return true;
    }

    false
}

/// Copy the open article's URL, or the suggestion Enter would pick
pub fn copy_current_link(app: &mut App) -> bool {
    let Some(url) = app.controller.current_url().map(str::to_string) else {
        return false;
    };

    match copy_to_clipboard(&url, app.clipboard_backend) {
        Ok(()) => {
            app.notification.show(app.messages.link_copied);
            true
        }
        Err(e) => {
            log::warn!("Copy failed: {}", e);
            app.notification.show_error(app.messages.copy_failed);
            false
        }
    }
}

#[cfg(test)]
#[path = "clipboard_events_tests.rs"]
mod clipboard_events_tests;
