//! Debug-build logging
//!
//! The terminal is in raw mode while the app runs, so log records go to a
//! file instead of stderr. Release builds install no logger and the `log`
//! macros compile to no-ops at runtime.

use std::path::PathBuf;

pub const LOG_FILE_NAME: &str = "wiq-debug.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Start logging to [`log_path`]; `RUST_LOG` overrides the default `debug` filter
#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::OpenOptions;
    use std::io::Write;

    let path = log_path();
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(_) => return,
    };

    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::debug!("wiq {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    }
}

#[cfg(not(debug_assertions))]
pub fn init() {}
