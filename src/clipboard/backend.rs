//! Clipboard backend selection and error types

use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("System clipboard unavailable")]
    SystemUnavailable,

    #[error("Failed to write to clipboard")]
    WriteError,
}

/// Copy text using `backend`
///
/// - `System`: OS clipboard only
/// - `Osc52`: terminal escape sequence only
/// - `Auto`: OS clipboard, falling back to OSC 52
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|err| {
            log::debug!("System clipboard failed ({}), using OSC 52", err);
            osc52::copy(text)
        }),
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
