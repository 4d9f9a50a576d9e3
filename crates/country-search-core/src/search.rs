// crates/country-search-core/src/search.rs

//! The search engine behind the typeahead box.
//!
//! One keystroke produces two outputs from the same query: the capped
//! suggestion list and the uncapped display list. [`search`] computes the
//! matches once and hands out both as projections of that single result;
//! [`filter`] and [`suggest`] are the standalone forms.

use crate::model::CountryRecord;
use crate::text::fold_case;
use crate::traits::NameMatch;

/// Maximum number of entries in the suggestion list.
pub const SUGGESTION_LIMIT: usize = 8;

/// Every record whose lower-cased name contains the lower-cased `query`.
///
/// Order follows `records`; there is no cap. The empty query matches all
/// records.
///
/// ```rust
/// use country_search_core::{filter, CountryRecord};
///
/// let records = vec![
///     CountryRecord::new("France", "Paris", 0, 0.0, ""),
///     CountryRecord::new("Germany", "Berlin", 0, 0.0, ""),
///     CountryRecord::new("Frankfurt-Land", "", 0, 0.0, ""),
/// ];
///
/// let names: Vec<&str> = filter(&records, "fra").iter().map(|r| r.name()).collect();
/// assert_eq!(names, vec!["France", "Frankfurt-Land"]);
/// ```
pub fn filter<'a>(records: &'a [CountryRecord], query: &str) -> Vec<&'a CountryRecord> {
    let q = fold_case(query);
    records
        .iter()
        .filter(|r| r.name_contains_folded(&q))
        .collect()
}

/// [`filter`] truncated to the first [`SUGGESTION_LIMIT`] matches.
pub fn suggest<'a>(records: &'a [CountryRecord], query: &str) -> Vec<&'a CountryRecord> {
    let q = fold_case(query);
    records
        .iter()
        .filter(|r| r.name_contains_folded(&q))
        .take(SUGGESTION_LIMIT)
        .collect()
}

/// Run the query once and expose both the suggestion and the display view.
pub fn search<'a>(records: &'a [CountryRecord], query: &str) -> SearchView<'a> {
    SearchView {
        query: query.to_owned(),
        matches: filter(records, query),
    }
}

/// Result of one query over a record set.
///
/// Borrows from the full set, so the records it exposes cannot be altered
/// and always form a subsequence of that set.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView<'a> {
    query: String,
    matches: Vec<&'a CountryRecord>,
}

impl<'a> SearchView<'a> {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The uncapped display set.
    pub fn display(&self) -> &[&'a CountryRecord] {
        &self.matches
    }

    /// The first [`SUGGESTION_LIMIT`] matches.
    pub fn suggestions(&self) -> &[&'a CountryRecord] {
        let n = self.matches.len().min(SUGGESTION_LIMIT);
        &self.matches[..n]
    }

    /// Names for the typeahead list.
    pub fn suggestion_names(&self) -> Vec<&'a str> {
        self.suggestions().iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn into_display(self) -> Vec<&'a CountryRecord> {
        self.matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str) -> CountryRecord {
        CountryRecord::new(name, "", 0, 0.0, "")
    }

    fn names<'a>(rs: &[&'a CountryRecord]) -> Vec<&'a str> {
        rs.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn filter_keeps_relative_order() {
        let records = vec![rec("France"), rec("Germany"), rec("Frankfurt-Land")];
        assert_eq!(
            names(&filter(&records, "fra")),
            vec!["France", "Frankfurt-Land"]
        );
        assert_eq!(
            names(&suggest(&records, "fra")),
            vec!["France", "Frankfurt-Land"]
        );
    }

    #[test]
    fn empty_records_yield_nothing() {
        let records: Vec<CountryRecord> = Vec::new();
        assert!(filter(&records, "anything").is_empty());
        assert!(suggest(&records, "anything").is_empty());
        assert!(search(&records, "anything").is_empty());
    }

    #[test]
    fn empty_query_is_identity() {
        let records = vec![rec("Chad"), rec("Peru"), rec("Oman")];
        let all = filter(&records, "");
        assert_eq!(names(&all), vec!["Chad", "Peru", "Oman"]);
    }

    #[test]
    fn suggestions_cap_at_eight() {
        let records: Vec<CountryRecord> = (0..10).map(|i| rec(&format!("Land {i}"))).collect();

        let view = search(&records, "land");
        assert_eq!(view.display().len(), 10);
        assert_eq!(view.suggestions().len(), SUGGESTION_LIMIT);
        assert_eq!(
            view.suggestion_names(),
            (0..8).map(|i| format!("Land {i}")).collect::<Vec<_>>()
        );
        assert_eq!(suggest(&records, "LAND"), view.suggestions().to_vec());
    }

    #[test]
    fn case_of_query_does_not_matter() {
        let records = vec![rec("France"), rec("Germany"), rec("Frankfurt-Land")];
        assert_eq!(filter(&records, "FRA"), filter(&records, "fra"));
        assert_eq!(filter(&records, "fRa"), filter(&records, "fra"));
    }

    #[test]
    fn query_is_not_trimmed() {
        let records = vec![rec("France"), rec("New Zealand")];
        assert!(filter(&records, " fra").is_empty());
        assert_eq!(names(&filter(&records, "w z")), vec!["New Zealand"]);
    }

    #[test]
    fn view_keeps_query() {
        let records = vec![rec("Chile")];
        let view = search(&records, "Chi");
        assert_eq!(view.query(), "Chi");
        assert_eq!(view.len(), 1);
    }
}
