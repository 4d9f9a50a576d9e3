// crates/country-search-core/src/loader/snapshot.rs
use super::common_io;
use crate::error::Result;
use crate::model::RecordSet;
use bincode::Options;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Upper bound on a snapshot's decoded size; guards against corrupt input.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl Default for CompressionMode {
    fn default() -> Self {
        if cfg!(feature = "compact") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

impl RecordSet {
    /// Write the set to `path` with the default compression.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_snapshot_with(path, CompressionMode::default())
    }

    pub fn save_snapshot_with(
        &self,
        path: impl AsRef<Path>,
        compression: CompressionMode,
    ) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        match compression {
            CompressionMode::Gzip => {
                #[cfg(feature = "compact")]
                {
                    let mut encoder = GzEncoder::new(writer, Compression::default());
                    options().serialize_into(&mut encoder, self)?;
                    // finish() writes the gzip trailer; errors there must surface.
                    encoder.finish()?.flush()?;
                }
                #[cfg(not(feature = "compact"))]
                {
                    drop(writer);
                    return Err(crate::error::SearchError::InvalidData(
                        "Gzip requested but 'compact' disabled".into(),
                    ));
                }
            }
            CompressionMode::None => {
                let mut writer = writer;
                options().serialize_into(&mut writer, self)?;
                writer.flush()?;
            }
        }

        debug!(path = %path.display(), count = self.len(), ?compression, "snapshot written");
        Ok(())
    }

    /// Read a snapshot written by [`RecordSet::save_snapshot`]. Gzip is
    /// detected from the stream itself.
    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = common_io::open_file(path.as_ref())?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_snapshot_bytes(&data)
    }

    pub fn from_snapshot_bytes(data: &[u8]) -> Result<Self> {
        if common_io::is_gzip(data) {
            #[cfg(feature = "compact")]
            {
                let mut plain = Vec::new();
                GzDecoder::new(data).read_to_end(&mut plain)?;
                return Ok(options().deserialize(&plain)?);
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(crate::error::SearchError::InvalidData(
                    "Snapshot is gzip-compressed but 'compact' disabled".into(),
                ));
            }
        }
        Ok(options().deserialize(data)?)
    }
}
