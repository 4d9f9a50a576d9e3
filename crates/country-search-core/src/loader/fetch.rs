// crates/country-search-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use super::json;
use super::SourceConfig;
use crate::error::{Result, SearchError};
use crate::model::RecordSet;
use tracing::{debug, info};

/// Download and parse the record set from `config.endpoint` (blocking).
///
/// - Transport failures map to [`SearchError::Http`].
/// - A non-success status maps to [`SearchError::Status`].
/// - A body that is not a country array maps to [`SearchError::Json`].
pub fn fetch_records(config: &SourceConfig) -> Result<RecordSet> {
    info!(endpoint = %config.endpoint, "fetching country data");

    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout)
        .build()?;

    let response = client.get(&config.endpoint).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::Status(status.as_u16()));
    }

    let body = response.bytes()?;
    debug!(bytes = body.len(), "received country payload");

    let records = json::parse_records(body.as_ref())?;
    info!(count = records.len(), "fetched country data");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn unreachable_endpoint_is_an_error() {
        // Port 9 (discard) is not listening on loopback.
        let cfg = SourceConfig::default()
            .with_endpoint("http://127.0.0.1:9/v3.1/all")
            .with_timeout(Duration::from_secs(2));
        assert!(fetch_records(&cfg).is_err());
    }
}
