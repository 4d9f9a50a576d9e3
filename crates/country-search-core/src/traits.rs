// crates/country-search-core/src/traits.rs
use crate::common::SetStats;
use crate::model::{CountryRecord, RecordSet};
use crate::search::{self, SearchView};
use crate::text::{contains_folded, fold_case};

/// Name-based matching for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get the typeahead matching rule for free:
/// case-insensitive substring containment, nothing else.
///
/// # Examples
/// ```rust
/// use country_search_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Frankfurt-Land").name_contains("FRA"));
/// assert!(!Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive substring match against an unfolded query.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_contains_folded(&fold_case(q))
    }

    /// Same as [`NameMatch::name_contains`], for a query already passed
    /// through [`fold_case`].
    #[inline]
    fn name_contains_folded(&self, folded: &str) -> bool {
        contains_folded(self.name_str(), folded)
    }
}

impl NameMatch for CountryRecord {
    fn name_str(&self) -> &str {
        self.name()
    }
}

/// Search operations over anything that can lend out an ordered slice of
/// records.
///
/// All methods are pure: the result depends only on the records and the
/// query, never on earlier calls.
///
/// # Example
///
/// ```rust
/// use country_search_core::{CountryRecord, RecordSearch, RecordSet};
///
/// let set: RecordSet = ["Finland", "Iceland", "Ireland"]
///     .into_iter()
///     .map(|n| CountryRecord::new(n, "", 0, 0.0, ""))
///     .collect();
///
/// let hits = set.filter("LAND");
/// assert_eq!(hits.len(), 3);
/// assert_eq!(set.stats().countries, 3);
/// ```
pub trait RecordSearch {
    fn records(&self) -> &[CountryRecord];

    /// Every record whose name contains `query`, in source order.
    fn filter(&self, query: &str) -> Vec<&CountryRecord> {
        search::filter(self.records(), query)
    }

    /// At most [`SUGGESTION_LIMIT`](crate::SUGGESTION_LIMIT) matches.
    fn suggest(&self, query: &str) -> Vec<&CountryRecord> {
        search::suggest(self.records(), query)
    }

    /// Both views from one pass.
    fn search(&self, query: &str) -> SearchView<'_> {
        search::search(self.records(), query)
    }

    fn stats(&self) -> SetStats {
        SetStats::from_records(self.records())
    }
}

impl RecordSearch for RecordSet {
    fn records(&self) -> &[CountryRecord] {
        RecordSet::records(self)
    }
}

impl RecordSearch for [CountryRecord] {
    fn records(&self) -> &[CountryRecord] {
        self
    }
}

impl RecordSearch for Vec<CountryRecord> {
    fn records(&self) -> &[CountryRecord] {
        self
    }
}
