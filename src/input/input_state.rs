use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Single-line search box
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines().first().map_or("", String::as_str)
    }

    /// Replace the whole line, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::Head);
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(single_line(text));
    }

    /// Insert pasted text at the cursor; line breaks become spaces
    pub fn paste(&mut self, text: &str) -> bool {
        let text = single_line(text);
        if text.is_empty() {
            return false;
        }
        self.textarea.insert_str(text)
    }

    /// Feed an editing key to the text area; returns true if the text changed
    ///
    /// Keys that would break the single-line invariant are dropped.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if inserts_line_break(key) {
            return false;
        }
        self.textarea.input(key)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn inserts_line_break(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Tab => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
