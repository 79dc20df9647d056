use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use super::mouse_events;
use crate::clipboard::clipboard_events;
use crate::controller::{InputEvent, View};

impl App {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => mouse_events::handle_mouse_event(self, mouse),
            Event::FocusGained => self.dispatch(InputEvent::Focus),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
    }

    pub fn handle_paste_event(&mut self, text: String) {
        if self.input.paste(&text) {
            self.on_text_changed();
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.controller.view() {
            View::Detail if self.handle_detail_key(key) => {}
            _ => self.handle_list_key(key),
        }
    }

    /// Keys that behave the same in every view
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        if clipboard_events::handle_clipboard_key(self, key) {
            return true;
        }

        match key.code {
            KeyCode::Up => self.dispatch(InputEvent::ArrowUp),
            KeyCode::Down => self.dispatch(InputEvent::ArrowDown),
            KeyCode::Enter => self.dispatch(InputEvent::Enter),
            _ => return false,
        }
        true
    }

    /// Scrolling and navigation inside the article; returns false for keys
    /// that should edit the query instead
    fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
            self.dispatch(InputEvent::Back);
            return true;
        }

        let scroll = &mut self.controller.detail_mut().scroll;
        match key.code {
            KeyCode::PageDown => scroll.page_down(),
            KeyCode::PageUp => scroll.page_up(),
            KeyCode::Home => scroll.jump_to_top(),
            KeyCode::End => scroll.jump_to_bottom(),
            _ => return false,
        }
        true
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            if self.controller.list().is_empty() && !self.controller.is_searching() {
                self.should_quit = true;
            } else {
                self.dispatch(InputEvent::Escape);
            }
            return;
        }

        if self.input.handle_key(key) {
            self.on_text_changed();
        }
    }

    fn on_text_changed(&mut self) {
        let query = self.input.query().to_string();
        self.dispatch(InputEvent::Input(query));
    }
}
