//! Launching article URLs in the system browser

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenError {
    #[error("Refusing to open non-http URL: {0}")]
    UnsupportedUrl(String),

    #[error("No browser launcher found (tried {0})")]
    NoLauncher(String),

    #[error("Failed to launch {program}: {reason}")]
    Spawn { program: String, reason: String },
}

/// Something that can show a URL to the user
pub type UrlOpener = Box<dyn FnMut(&str) -> Result<(), OpenError>>;

#[cfg(target_os = "macos")]
const LAUNCHERS: &[&str] = &["open"];

#[cfg(target_os = "windows")]
const LAUNCHERS: &[&str] = &["explorer"];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const LAUNCHERS: &[&str] = &["xdg-open", "gio", "wslview"];

/// Open `url` with the platform launcher
///
/// The launcher is detached from the terminal: its stdio is discarded so
/// browser output cannot corrupt the screen.
pub fn open_url(url: &str) -> Result<(), OpenError> {
    check_url(url)?;

    let (program, path) = find_launcher(LAUNCHERS)?;
    let mut command = Command::new(path);
    if program == "gio" {
        command.arg("open");
    }

    log::debug!("Opening {} with {}", url, program);
    let child = command
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| OpenError::Spawn {
            program: program.to_string(),
            reason: e.to_string(),
        })?;

    reap(child);
    Ok(())
}

/// Wait for a launcher in the background so it does not linger as a zombie
fn reap(mut child: Child) {
    std::thread::spawn(move || {
        if let Err(e) = child.wait() {
            log::warn!("Failed to wait for browser launcher: {}", e);
        }
    });
}

/// Boxed [`open_url`], the default opener for the app
pub fn system_opener() -> UrlOpener {
    Box::new(open_url)
}

fn check_url(url: &str) -> Result<(), OpenError> {
    match reqwest::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(OpenError::UnsupportedUrl(url.to_string())),
    }
}

fn find_launcher<'a>(candidates: &[&'a str]) -> Result<(&'a str, PathBuf), OpenError> {
    candidates
        .iter()
        .find_map(|name| which::which(name).ok().map(|path| (*name, path)))
        .ok_or_else(|| OpenError::NoLauncher(candidates.join(", ")))
}
