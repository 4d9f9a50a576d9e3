// crates/country-search-core/src/model.rs
use serde::{Deserialize, Serialize};

/// A country entry as shown on a card.
///
/// Records are produced by the loader and never mutated afterwards; the
/// fields are private and only readable through accessors. All fields except
/// `name` are opaque display data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    name: String,
    capital: String,
    population: u64,
    area: f64,
    /// URI of the flag image (SVG in the restcountries dataset).
    flag: String,
}

impl CountryRecord {
    pub fn new(
        name: impl Into<String>,
        capital: impl Into<String>,
        population: u64,
        area: f64,
        flag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            capital: capital.into(),
            population,
            area,
            flag: flag.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capital city; empty when the source lists none.
    pub fn capital(&self) -> &str {
        &self.capital
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    /// Area in square kilometres.
    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }
}

/// The full, ordered record set. Order is source order.
///
/// The default value is the empty set, which is also what a session holds
/// before the first successful load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<CountryRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    /// All records, in source order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.records.iter()
    }

    pub fn into_inner(self) -> Vec<CountryRecord> {
        self.records
    }
}

impl From<Vec<CountryRecord>> for RecordSet {
    fn from(records: Vec<CountryRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<CountryRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = CountryRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl AsRef<[CountryRecord]> for RecordSet {
    fn as_ref(&self) -> &[CountryRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_set_keeps_source_order() {
        let set: RecordSet = ["Chad", "Austria", "Brazil"]
            .into_iter()
            .map(|n| CountryRecord::new(n, "", 0, 0.0, ""))
            .collect();

        let names: Vec<&str> = set.iter().map(CountryRecord::name).collect();
        assert_eq!(names, vec!["Chad", "Austria", "Brazil"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn default_set_is_empty() {
        let set = RecordSet::default();
        assert!(set.is_empty());
        assert_eq!(set.records(), &[] as &[CountryRecord]);
    }
}
