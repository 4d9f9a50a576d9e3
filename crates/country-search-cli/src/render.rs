//! Plain-text rendering of search results.

use country_search_core::{CountryRecord, SearchView, SetStats};
use std::io::{self, Write};

/// One country card.
pub fn card<W: Write>(w: &mut W, record: &CountryRecord) -> io::Result<()> {
    writeln!(w, "Name: {}", record.name())?;
    writeln!(w, "Capital: {}", record.capital())?;
    writeln!(w, "Population: {}", record.population())?;
    writeln!(w, "Area: {}", record.area())?;
    writeln!(w, "Flag: {}", record.flag())
}

/// The display set as cards separated by blank lines.
pub fn cards<W: Write>(w: &mut W, view: &SearchView<'_>) -> io::Result<()> {
    if view.is_empty() {
        return writeln!(w, "No countries found matching: {}", view.query());
    }
    for (i, record) in view.display().iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        card(w, record)?;
    }
    Ok(())
}

/// The suggestion list, one name per line.
pub fn suggestions<W: Write>(w: &mut W, view: &SearchView<'_>) -> io::Result<()> {
    for name in view.suggestion_names() {
        writeln!(w, "{name}")?;
    }
    Ok(())
}

pub fn stats<W: Write>(w: &mut W, stats: &SetStats) -> io::Result<()> {
    writeln!(w, "Country statistics:")?;
    writeln!(w, "  Countries: {}", stats.countries)?;
    writeln!(w, "  Total population: {}", stats.total_population)?;
    writeln!(w, "  Total area: {}", stats.total_area)
}
