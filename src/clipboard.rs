//! Copying links to the clipboard
//!
//! The system clipboard is reached through arboard; terminals that forward
//! OSC 52 escape sequences are supported as a fallback for remote sessions.

mod backend;
pub mod clipboard_events;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
