// crates/country-search-core/src/lib.rs

//! # country-search-core
//!
//! Country records fetched from the public restcountries endpoint, plus the
//! search engine that drives a typeahead box:
//!
//! - [`filter`]: every record whose name contains the query (case-insensitive)
//! - [`suggest`]: the first [`SUGGESTION_LIMIT`] of those
//! - [`search`]: both views derived from a single pass
//!
//! ```rust
//! use country_search_core::prelude::*;
//!
//! let records: RecordSet = vec![
//!     CountryRecord::new("France", "Paris", 68_000_000, 551_695.0, "fr.svg"),
//!     CountryRecord::new("Germany", "Berlin", 83_000_000, 357_114.0, "de.svg"),
//! ]
//! .into();
//!
//! let view = records.search("FRA");
//! assert_eq!(view.suggestion_names(), vec!["France"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod session;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::SetStats;
pub use crate::error::{Result, SearchError};
pub use crate::loader::{SourceConfig, REST_COUNTRIES_URL};
pub use crate::model::{CountryRecord, RecordSet};
pub use crate::search::{filter, search, suggest, SearchView, SUGGESTION_LIMIT};
pub use crate::session::{SearchSession, LOAD_ERROR_MESSAGE};
pub use crate::traits::{NameMatch, RecordSearch};
