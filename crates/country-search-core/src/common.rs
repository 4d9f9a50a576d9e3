// crates/country-search-core/src/common.rs
use crate::model::CountryRecord;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a record set.
///
/// Returned by [`RecordSearch::stats`](crate::RecordSearch::stats); the
/// counts reflect whatever set they were computed over (full or filtered).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SetStats {
    pub countries: usize,
    pub total_population: u64,
    pub total_area: f64,
}

impl SetStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CountryRecord>,
    {
        records
            .into_iter()
            .fold(SetStats::default(), |mut acc, r| {
                acc.countries += 1;
                acc.total_population = acc.total_population.saturating_add(r.population());
                acc.total_area += r.area();
                acc
            })
    }
}
