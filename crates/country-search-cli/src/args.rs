use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for country-search
#[derive(Debug, Parser)]
#[command(
    name = "country-search",
    version,
    about = "Typeahead search over the restcountries dataset"
)]
pub struct CliArgs {
    /// Read countries from a file (restcountries .json/.json.gz or a .bin snapshot)
    /// instead of fetching them
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Endpoint to fetch from (default: restcountries v3.1)
    #[arg(long = "url", global = true)]
    pub url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long = "timeout", global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every country whose name contains the query, as cards
    Search {
        /// Substring to search (case-insensitive); empty lists all
        #[arg(default_value = "")]
        query: String,
    },

    /// Print up to eight suggested country names
    Suggest {
        /// Substring to search (case-insensitive)
        #[arg(default_value = "")]
        query: String,
    },

    /// Show a summary of the loaded countries
    Stats,

    /// Download the countries and store them as a snapshot
    Fetch {
        /// Snapshot file to write (e.g. countries.bin)
        #[arg(short = 'o', long = "output")]
        output: PathBuf,

        /// Write the snapshot without gzip
        #[arg(long)]
        uncompressed: bool,
    },

    /// Read queries from stdin, one per line, and show suggestions for each
    Interactive,
}
