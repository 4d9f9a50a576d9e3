//! Basic usage example for country-search-rs
//!
//! This example demonstrates how to:
//! - Load the bundled sample of the restcountries dataset
//! - Filter countries by a substring of their name
//! - Get the capped suggestion list for a typeahead box

use country_search_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== country-search-rs Basic Usage Example ===\n");

    // Load the sample (no network needed)
    println!("Loading sample dataset...");
    let countries = RecordSet::load_from_path(RecordSet::sample_dataset_path())?;
    println!("✓ Loaded {} countries\n", countries.len());

    // Example 1: First few countries, in source order
    println!("--- Example 1: List countries ---");
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.capital());
    }
    println!("... and {} more\n", countries.len().saturating_sub(5));

    // Example 2: Filter by substring (case-insensitive)
    println!("--- Example 2: Filter by 'FRA' ---");
    for country in countries.filter("FRA") {
        println!("- {}", country.name());
    }
    println!();

    // Example 3: Suggestions are capped at eight
    println!("--- Example 3: Suggestions for 'land' ---");
    let view = countries.search("land");
    println!(
        "{} matches, showing {} suggestions:",
        view.len(),
        view.suggestions().len()
    );
    for name in view.suggestion_names() {
        println!("  {name}");
    }
    println!();

    // Example 4: A full card
    println!("--- Example 4: Country card ---");
    if let Some(country) = countries.suggest("japan").first() {
        println!("Name:       {}", country.name());
        println!("Capital:    {}", country.capital());
        println!("Population: {}", country.population());
        println!("Area:       {} km²", country.area());
        println!("Flag:       {}", country.flag());
    }
    println!();

    // Example 5: Statistics
    println!("--- Example 5: Statistics ---");
    let stats = countries.stats();
    println!("Countries: {}", stats.countries);
    println!("Total population: {}", stats.total_population);
    println!("Total area: {} km²", stats.total_area);

    Ok(())
}
