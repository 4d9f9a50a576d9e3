// crates/country-search-core/src/loader/mod.rs

//! # Data Loader
//!
//! The data source adapter. Handles the physical layer (HTTP, files,
//! decompression) and delegates to the payload parsers (restcountries JSON
//! vs. binary snapshot).
//!
//! Every entry point returns a `Result<RecordSet>`; that value is the
//! completion signal a [`SearchSession`](crate::SearchSession) consumes once.

use crate::error::{Result, SearchError};
use crate::model::RecordSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

mod common_io;
mod snapshot;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "fetch")]
mod fetch;

pub use snapshot::CompressionMode;

#[cfg(feature = "fetch")]
pub use fetch::fetch_records;

/// The restcountries v3.1 endpoint, restricted to the fields a card shows.
pub const REST_COUNTRIES_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,flags,capital,area,population";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// File extension of binary snapshots.
pub const SNAPSHOT_EXTENSION: &str = "bin";

/// Where and how to fetch the record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: REST_COUNTRIES_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SourceConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl RecordSet {
    /// Directory holding the bundled sample dataset.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// A small restcountries dump shipped with the crate, used by demos
    /// and tests that must not touch the network.
    pub fn sample_dataset_path() -> PathBuf {
        Self::default_data_dir().join("countries.sample.json")
    }

    /// Load a record set from disk.
    ///
    /// - `*.bin` is read as a snapshot (see [`RecordSet::save_snapshot`]).
    /// - `*.json` / `*.json.gz` is read as a restcountries response body.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading record set");

        match path.extension().and_then(|e| e.to_str()) {
            Some(SNAPSHOT_EXTENSION) => Self::load_snapshot(path),
            #[cfg(feature = "json")]
            Some("json") | Some("gz") => {
                let reader = common_io::open_stream(path)?;
                json::parse_records(reader)
            }
            _ => Err(SearchError::InvalidData(format!(
                "Unsupported dataset format: {}",
                path.display()
            ))),
        }
    }

    /// Download the record set (blocking).
    #[cfg(feature = "fetch")]
    pub fn fetch(config: &SourceConfig) -> Result<Self> {
        fetch::fetch_records(config)
    }
}
