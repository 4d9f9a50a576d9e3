//! country-search prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::common::SetStats;
pub use crate::error::{Result, SearchError};
pub use crate::loader::{CompressionMode, SourceConfig, REST_COUNTRIES_URL};
pub use crate::model::{CountryRecord, RecordSet};
pub use crate::search::{filter, search, suggest, SearchView, SUGGESTION_LIMIT};
pub use crate::session::{SearchSession, LOAD_ERROR_MESSAGE};
pub use crate::text::fold_case;
pub use crate::traits::{NameMatch, RecordSearch};
