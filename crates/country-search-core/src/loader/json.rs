// crates/country-search-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

//! The restcountries v3.1 wire shape and its mapping onto [`CountryRecord`].
//!
//! ```json
//! {
//!   "name": { "common": "France", "official": "French Republic" },
//!   "capital": ["Paris"],
//!   "population": 67391582,
//!   "area": 551695.0,
//!   "flags": { "png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg" }
//! }
//! ```

use crate::error::Result;
use crate::model::{CountryRecord, RecordSet};
use serde::Deserialize;
use std::io::Read;
use tracing::debug;

/// Raw country object as it comes from the endpoint.
/// Only `name.common` is required; everything else defaults.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: NameRaw,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub flags: Option<FlagsRaw>,
}

#[derive(Debug, Deserialize)]
pub struct NameRaw {
    pub common: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
}

impl From<CountryRaw> for CountryRecord {
    fn from(raw: CountryRaw) -> Self {
        let capital = raw
            .capital
            .and_then(|c| c.into_iter().next())
            .unwrap_or_default();
        let flags = raw.flags.unwrap_or_default();
        // Prefer the SVG; a few entries only carry a PNG.
        let flag = flags.svg.or(flags.png).unwrap_or_default();

        CountryRecord::new(
            raw.name.common,
            capital,
            raw.population.unwrap_or(0),
            raw.area.unwrap_or(0.0),
            flag,
        )
    }
}

/// Parse a restcountries response body (a JSON array) into a record set,
/// keeping the order of the array.
pub fn parse_records<R: Read>(reader: R) -> Result<RecordSet> {
    let raw: Vec<CountryRaw> = serde_json::from_reader(reader)?;
    debug!(count = raw.len(), "parsed country payload");
    Ok(raw.into_iter().map(CountryRecord::from).collect())
}

pub fn parse_records_str(body: &str) -> Result<RecordSet> {
    parse_records(body.as_bytes())
}
