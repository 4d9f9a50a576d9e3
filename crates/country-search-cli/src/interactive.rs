//! Line-driven typeahead: every input line is a new query.

use crate::render;
use country_search_core::SearchSession;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "> ";

/// Read queries from `input` until EOF, printing suggestions and the match
/// count after each one.
///
/// Lines are decoded lossily; bytes that are not UTF-8 become U+FFFD
/// instead of ending the loop.
pub fn run<R: BufRead, W: Write>(
    session: &mut SearchSession,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.split(b'\n') {
        let line = line?;
        let query = String::from_utf8_lossy(&line);
        let query = query.strip_suffix('\r').unwrap_or(&query);
        debug!(query, "interactive query");

        session.set_query(query);
        let view = session.view();
        render::suggestions(out, &view)?;
        writeln!(out, "({} countries)", view.len())?;
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)
}
