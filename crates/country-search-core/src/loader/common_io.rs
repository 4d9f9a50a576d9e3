// crates/country-search-core/src/loader/common_io.rs
use crate::error::{Result, SearchError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// First two bytes of every gzip stream.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

pub fn open_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        SearchError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    Ok(BufReader::new(file))
}

/// Opens a file, buffers it, and unwraps gzip when the name ends in `.gz`.
#[cfg_attr(not(feature = "json"), allow(dead_code))]
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let reader = open_file(path)?;
    let gz = path.extension().is_some_and(|e| e == "gz");

    if !gz {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(SearchError::InvalidData(format!(
            "{} is gzip-compressed but 'compact' is disabled",
            path.display()
        )))
    }
}

pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}
