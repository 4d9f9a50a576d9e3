//! country-search-cli
//! ==================
//!
//! Command-line front end for `country-search-core`.
//!
//! The crate ships a binary (`country-search`); the library target carries
//! the text rendering and the interactive loop used by it so that both can
//! be tested on their own.
//!
//! Basic usage:
//!
//! ```text
//! country-search --help
//! country-search suggest fra
//! country-search search land
//! country-search fetch --output countries.bin
//! country-search --input countries.bin interactive
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod interactive;
pub mod render;
