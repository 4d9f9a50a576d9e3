//! country-search: typeahead country search in the terminal
//!
//! Loads the country list once (from the restcountries endpoint, or from a
//! file given with `--input`) and runs queries against it.
//!
//! Usage examples
//! --------------
//!
//! - Suggestions for a query (at most eight names)
//!   $ country-search suggest fra
//!
//! - Every matching country as a card
//!   $ country-search search land
//!
//! - Cache the download for offline use, then query the snapshot
//!   $ country-search fetch --output countries.bin
//!   $ country-search --input countries.bin stats
//!
//! - One query per input line, as if typed key by key
//!   $ country-search --input countries.bin interactive
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (default `warn`).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use country_search_cli::{interactive, render};
use country_search_core::loader::CompressionMode;
use country_search_core::{RecordSearch, RecordSet, SearchSession, SourceConfig};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args = CliArgs::parse();

    let mut config = SourceConfig::default();
    if let Some(url) = args.url {
        config = config.with_endpoint(url);
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::Fetch {
            output,
            uncompressed,
        } => {
            let records =
                fetch(&config).with_context(|| format!("fetching {}", config.endpoint))?;
            let mode = if uncompressed {
                CompressionMode::None
            } else {
                CompressionMode::default()
            };
            records
                .save_snapshot_with(&output, mode)
                .with_context(|| format!("writing snapshot to {}", output.display()))?;
            info!(path = %output.display(), count = records.len(), "snapshot saved");
            writeln!(out, "Saved {} countries to {}", records.len(), output.display())?;
        }

        Commands::Search { query } => {
            let mut session = open_session(args.input.as_deref(), &config);
            session.set_query(&query);
            render::cards(&mut out, &session.view())?;
        }

        Commands::Suggest { query } => {
            let mut session = open_session(args.input.as_deref(), &config);
            session.set_query(&query);
            render::suggestions(&mut out, &session.view())?;
        }

        Commands::Stats => {
            let session = open_session(args.input.as_deref(), &config);
            render::stats(&mut out, &session.records().stats())?;
        }

        Commands::Interactive => {
            let mut session = open_session(args.input.as_deref(), &config);
            interactive::run(&mut session, io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}

/// Load once; a failure is reported and the session continues empty.
fn open_session(input: Option<&Path>, config: &SourceConfig) -> SearchSession {
    let outcome = match input {
        Some(path) => RecordSet::load_from_path(path),
        None => fetch(config),
    };

    let mut session = SearchSession::new();
    session.load(outcome);
    if let Some(message) = session.error() {
        eprintln!("Error: {message}");
    }
    session
}

#[cfg(feature = "fetch")]
fn fetch(config: &SourceConfig) -> country_search_core::Result<RecordSet> {
    RecordSet::fetch(config)
}

#[cfg(not(feature = "fetch"))]
fn fetch(_config: &SourceConfig) -> country_search_core::Result<RecordSet> {
    Err(country_search_core::SearchError::InvalidData(
        "built without the 'fetch' feature; pass --input <file>".into(),
    ))
}
