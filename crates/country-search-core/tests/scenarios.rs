use country_search_core::prelude::*;

fn rec(name: &str) -> CountryRecord {
    CountryRecord::new(name, "", 0, 0.0, "")
}

fn names<'a>(rs: &[&'a CountryRecord]) -> Vec<&'a str> {
    rs.iter().map(|r| r.name()).collect()
}

#[test]
fn fra_matches_france_and_frankfurt_land() {
    let set: RecordSet = vec![rec("France"), rec("Germany"), rec("Frankfurt-Land")].into();

    assert_eq!(names(&set.filter("fra")), vec!["France", "Frankfurt-Land"]);
    assert_eq!(names(&set.suggest("fra")), vec!["France", "Frankfurt-Land"]);
    assert_eq!(
        set.search("fra").suggestion_names(),
        vec!["France", "Frankfurt-Land"]
    );
}

#[test]
fn empty_set_never_fails() {
    let set = RecordSet::default();
    assert!(set.filter("anything").is_empty());
    assert!(set.suggest("anything").is_empty());
    assert_eq!(set.stats(), SetStats::default());
}

#[test]
fn ten_land_records() {
    let set: RecordSet = (1..=10).map(|i| rec(&format!("Land{i}"))).collect();

    let suggested = set.suggest("land");
    assert_eq!(suggested.len(), 8);
    assert_eq!(
        names(&suggested),
        (1..=8).map(|i| format!("Land{i}")).collect::<Vec<_>>()
    );
    assert_eq!(set.filter("land").len(), 10);
}

#[cfg(feature = "json")]
mod sample_dataset {
    use super::*;

    fn sample() -> RecordSet {
        RecordSet::load_from_path(RecordSet::sample_dataset_path()).unwrap()
    }

    #[test]
    fn land_query_caps_suggestions() {
        let set = sample();
        let view = set.search("LAND");
        // Finland, Iceland, Ireland, Poland, Switzerland, Thailand,
        // Netherlands, New Zealand, Greenland, Åland Islands
        assert_eq!(view.display().len(), 10);
        assert_eq!(
            view.suggestion_names(),
            vec![
                "Finland",
                "Iceland",
                "Ireland",
                "Poland",
                "Switzerland",
                "Thailand",
                "Netherlands",
                "New Zealand",
            ]
        );
    }

    #[test]
    fn accents_are_not_folded() {
        let set = sample();
        assert!(set.filter("curacao").is_empty());
        assert_eq!(names(&set.filter("CURAÇ")), vec!["Curaçao"]);
        assert_eq!(names(&set.filter("åland")), vec!["Åland Islands"]);
    }

    #[test]
    fn stats_cover_whole_set() {
        let set = sample();
        let stats = set.stats();
        assert_eq!(stats.countries, set.len());
        assert!(stats.total_population > 0);
        assert!(stats.total_area > 0.0);
    }

    #[test]
    fn session_typeahead_flow() {
        let mut session = SearchSession::new();
        assert!(session.display().is_empty());

        session.load(Ok(sample()));
        assert_eq!(session.display().len(), sample().len());

        for q in ["m", "ma", "mal", "malt"] {
            session.set_query(q);
        }
        assert_eq!(session.suggestions(), vec!["Malta"]);

        session.set_query("mal");
        assert_eq!(session.suggestions(), vec!["Mali", "Malta"]);
    }
}
