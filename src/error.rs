use thiserror::Error;

/// Start-up errors for wiq
///
/// Anything that goes wrong once the UI is running is downgraded to an
/// on-screen state instead of surfacing here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiqError {
    #[error("Invalid API endpoint '{0}': expected an absolute http(s) URL")]
    InvalidEndpoint(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for WiqError {
    fn from(err: std::io::Error) -> Self {
        WiqError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
