// src/error.rs
use std::path::PathBuf;

/// Everything that can abort a run, one variant per pipeline stage.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// Fetch stage: timeout, unreachable host, or a non-success status.
    #[error("Network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    /// Structure stage: the anchor is gone or the section has no shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The HTTP client could not be built (TLS backend, bad user agent).
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),

    /// Serialising the document for output failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Write stage, plus reading/saving local HTML.
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::Io { path: path.into(), source }
    }

    pub fn network(url: &str, reason: impl ToString) -> Self {
        ScrapeError::Network { url: s!(url), reason: reason.to_string() }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        ScrapeError::Parse(msg.into())
    }

    pub fn client_setup(reason: impl ToString) -> Self {
        ScrapeError::ClientSetup(reason.to_string())
    }

    pub fn render(reason: impl ToString) -> Self {
        ScrapeError::Render(reason.to_string())
    }

    pub fn is_network(&self) -> bool { matches!(self, ScrapeError::Network { .. }) }
    pub fn is_parse(&self) -> bool { matches!(self, ScrapeError::Parse(_)) }
    pub fn is_io(&self) -> bool { matches!(self, ScrapeError::Io { .. }) }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
