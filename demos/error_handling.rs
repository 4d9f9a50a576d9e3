//! Error handling example for country-search-rs
//!
//! This example demonstrates how load failures surface and that searching
//! keeps working over the last good data.

use country_search_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== country-search-rs Error Handling Example ===\n");

    // Example 1: Missing file
    println!("--- Example 1: Loading a missing dataset ---");
    match RecordSet::load_from_path("does/not/exist.json") {
        Ok(set) => println!("✓ Loaded {} countries", set.len()),
        Err(e) => eprintln!("✗ Failed to load: {e}"),
    }
    println!();

    // Example 2: Unsupported format
    println!("--- Example 2: Unsupported file type ---");
    if let Err(e) = RecordSet::load_from_path("countries.csv") {
        println!("  {e}");
    }
    println!();

    // Example 3: A session keeps its last good data
    println!("--- Example 3: Failed reload keeps last good data ---");
    let mut session = SearchSession::new();
    session.load(RecordSet::load_from_path(RecordSet::sample_dataset_path()));
    session.load(RecordSet::load_from_path("does/not/exist.json"));
    if let Some(message) = session.error() {
        println!("  Error: {message}");
    }
    session.set_query("mal");
    println!("  Still searching {} countries: {:?}", session.records().len(), session.suggestions());
    println!();

    // Example 4: Queries never fail
    println!("--- Example 4: Odd queries ---");
    let empty = RecordSet::default();
    for q in ["", " ", "zzz", "ÅLAND"] {
        println!("  {q:?}: {} match(es) in an empty set", empty.filter(q).len());
    }

    Ok(())
}
