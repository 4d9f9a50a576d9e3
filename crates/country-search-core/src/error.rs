// crates/country-search-core/src/error.rs
use thiserror::Error;

/// Errors raised by the data source adapter.
///
/// The search engine itself never fails; everything here comes from
/// fetching, parsing, or reading/writing record sets on disk.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport failure talking to the REST endpoint.
    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Request failed with status {0}")]
    Status(u16),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
