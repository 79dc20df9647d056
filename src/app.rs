//! Application shell
//!
//! Translates terminal events into controller input, executes the
//! controller's commands, and draws the screen.

mod app_events;
mod app_render;
mod app_state;
mod mouse_events;

pub use app_state::App;
