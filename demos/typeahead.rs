//! Typeahead example for country-search-rs
//!
//! Simulates a user typing into the search box one key at a time. Each
//! keystroke updates the suggestion list and the display list from the
//! same query.

use country_search_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== country-search-rs Typeahead Example ===\n");

    let mut session = SearchSession::new();

    // Before the data arrives the box still works, over an empty list
    session.set_query("s");
    println!("Before load: {} suggestions\n", session.suggestions().len());

    session.load(RecordSet::load_from_path(RecordSet::sample_dataset_path()));
    println!("Loaded {} countries\n", session.records().len());

    let typed = "switz";
    for end in 1..=typed.len() {
        let query = &typed[..end];
        session.set_query(query);

        let view = session.view();
        println!("> {query:<6} {} match(es)", view.len());
        for name in view.suggestion_names() {
            println!("    {name}");
        }
    }
    println!();

    // Clearing the box shows every country again
    session.set_query("");
    println!("Cleared: {} cards on display", session.display().len());

    Ok(())
}
