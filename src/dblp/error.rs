use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while querying DBLP or saving its results.
#[derive(Debug, Error)]
pub enum DblpError {
    /// Transport failure or non-success HTTP status.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not the JSON document the search API returns.
    #[error("Failed to decode DBLP response: {0}")]
    Decode(#[from] serde_json::Error),

    /// `@total` could not be read as an integer.
    #[error("Invalid hit count in DBLP response: '{0}'")]
    InvalidTotal(String),

    /// Writing the output bundle failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DblpError {
    /// True for failures of the remote API (transport, status, payload),
    /// false for local filesystem failures.
    pub fn is_remote(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}
