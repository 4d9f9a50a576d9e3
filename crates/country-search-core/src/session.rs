// crates/country-search-core/src/session.rs
use crate::error::Result;
use crate::model::{CountryRecord, RecordSet};
use crate::search::{self, SearchView};
use tracing::{debug, info, warn};

/// Message shown to the user when the record set could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error occurred while fetching country data.";

/// State behind one search box: the full record set, the current query
/// and the last load failure.
///
/// The display and suggestion lists are not stored; they are derived from
/// `(records, query)` on demand through [`SearchSession::view`].
///
/// ```rust
/// use country_search_core::{CountryRecord, RecordSet, SearchSession};
///
/// let mut session = SearchSession::new();
/// assert!(session.display().is_empty());
///
/// let records: RecordSet = vec![CountryRecord::new("Japan", "Tokyo", 0, 0.0, "")].into();
/// session.load(Ok(records));
/// session.set_query("jap");
/// assert_eq!(session.suggestions(), vec!["Japan"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    records: RecordSet,
    query: String,
    error: Option<String>,
    loaded: bool,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: RecordSet) -> Self {
        let mut session = Self::new();
        session.install(records);
        session
    }

    /// Consume the completion signal of a load.
    ///
    /// On success the full set is replaced and any previous error cleared.
    /// On failure the current set (empty or last good) is kept and
    /// [`LOAD_ERROR_MESSAGE`] becomes visible through
    /// [`SearchSession::error`]. Returns `true` when new records were
    /// installed.
    pub fn load(&mut self, outcome: Result<RecordSet>) -> bool {
        match outcome {
            Ok(records) => {
                self.install(records);
                true
            }
            Err(e) => {
                warn!(error = %e, kept = self.records.len(), "country data load failed");
                self.error = Some(LOAD_ERROR_MESSAGE.to_owned());
                false
            }
        }
    }

    fn install(&mut self, records: RecordSet) {
        info!(count = records.len(), "country records loaded");
        self.records = records;
        self.error = None;
        self.loaded = true;
    }

    /// Record a failure reported by an adapter that lives outside this
    /// crate (e.g. a browser `fetch`).
    pub fn load_failed(&mut self, reason: &str) {
        warn!(reason, kept = self.records.len(), "country data load failed");
        self.error = Some(LOAD_ERROR_MESSAGE.to_owned());
    }

    /// Replace the current query. Called on every change of the input.
    pub fn set_query(&mut self, query: &str) {
        debug!(query, "query changed");
        self.query.clear();
        self.query.push_str(query);
    }

    /// Both output views for the current query, from one pass over the
    /// records. Callers that need suggestions and display together should
    /// take them from a single view.
    pub fn view(&self) -> SearchView<'_> {
        search::search(self.records.records(), &self.query)
    }

    /// Names for the suggestion list (at most eight).
    ///
    /// Filters the records on each call; see [`SearchSession::view`].
    pub fn suggestions(&self) -> Vec<&str> {
        self.view().suggestion_names()
    }

    /// Records for the display list.
    ///
    /// Filters the records on each call; see [`SearchSession::view`].
    pub fn display(&self) -> Vec<&CountryRecord> {
        self.view().into_display()
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// User-visible message of the last failed load, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// `true` once any load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
