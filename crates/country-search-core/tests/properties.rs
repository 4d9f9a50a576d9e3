//! Property tests for the search engine.

use country_search_core::prelude::*;
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = CountryRecord> {
    (
        "[A-Za-z][A-Za-z \\-]{0,14}",
        "[A-Za-z]{0,10}",
        0u64..2_000_000_000,
        0.0f64..20_000_000.0,
    )
        .prop_map(|(name, capital, population, area)| {
            let flag = format!("https://flagcdn.com/{}.svg", name.len());
            CountryRecord::new(name, capital, population, area, flag)
        })
}

fn arb_records(max: usize) -> impl Strategy<Value = Vec<CountryRecord>> {
    prop::collection::vec(arb_record(), 0..max)
}

fn arb_query() -> impl Strategy<Value = String> {
    "[A-Za-z \\-]{0,3}"
}

proptest! {
    /// The empty query returns the full set in order.
    #[test]
    fn empty_query_is_identity(records in arb_records(30)) {
        let all: Vec<&CountryRecord> = records.iter().collect();
        prop_assert_eq!(filter(&records, ""), all);
    }

    /// No false positives and no false negatives.
    #[test]
    fn filter_is_exact(records in arb_records(30), q in arb_query()) {
        let needle = q.to_lowercase();
        let expected: Vec<&CountryRecord> = records
            .iter()
            .filter(|r| r.name().to_lowercase().contains(&needle))
            .collect();
        prop_assert_eq!(filter(&records, &q), expected);
    }

    /// Suggestions are the first eight filter results.
    #[test]
    fn suggest_is_truncated_filter(records in arb_records(40), q in arb_query()) {
        let suggestions = suggest(&records, &q);
        let full = filter(&records, &q);
        prop_assert!(suggestions.len() <= SUGGESTION_LIMIT);
        prop_assert_eq!(&suggestions[..], &full[..full.len().min(SUGGESTION_LIMIT)]);
    }

    /// Upper- and lower-case queries agree.
    #[test]
    fn query_case_is_ignored(records in arb_records(30), q in arb_query()) {
        prop_assert_eq!(
            filter(&records, &q.to_uppercase()),
            filter(&records, &q.to_lowercase())
        );
    }

    /// Filtering a filtered set again changes nothing.
    #[test]
    fn filter_is_idempotent(records in arb_records(30), q in arb_query()) {
        let once: Vec<CountryRecord> = filter(&records, &q).into_iter().cloned().collect();
        let twice: Vec<CountryRecord> = filter(&once, &q).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    /// The single-pass view projects to exactly the standalone results.
    #[test]
    fn view_matches_standalone_calls(records in arb_records(40), q in arb_query()) {
        let view = search(&records, &q);
        let filtered = filter(&records, &q);
        let suggested = suggest(&records, &q);
        prop_assert_eq!(view.display(), &filtered[..]);
        prop_assert_eq!(view.suggestions(), &suggested[..]);
    }

    /// A session with the same records and query gives the same views.
    #[test]
    fn session_agrees_with_engine(records in arb_records(20), q in arb_query()) {
        let mut session = SearchSession::with_records(RecordSet::new(records.clone()));
        session.set_query(&q);
        prop_assert_eq!(session.display(), filter(&records, &q));
        let names: Vec<&str> = suggest(&records, &q).iter().map(|r| r.name()).collect();
        prop_assert_eq!(session.suggestions(), names);
    }
}
