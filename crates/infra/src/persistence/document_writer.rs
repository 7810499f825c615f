use std::path::Path;

use log::trace;
use provmeta_ports::persistence::DocumentWriter;
use provmeta_shared_kernel::Result;
use serde::{Deserialize, Serialize};

use super::FileWriter;

/// How the destination document is replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Create or truncate the destination in place.
    #[default]
    Truncate,
    /// Write a sibling temp file and rename it over the destination.
    Atomic,
}

/// Filesystem adapter implementing the `DocumentWriter` port.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDocumentWriter {
    mode: WriteMode,
}

impl FsDocumentWriter {
    pub fn new(mode: WriteMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }
}

impl DocumentWriter for FsDocumentWriter {
    fn write_document(&self, destination: &Path, payload: &[u8]) -> Result<()> {
        trace!("writing {} bytes to {} ({:?})", payload.len(), destination.display(), self.mode);
        match self.mode {
            WriteMode::Truncate => FileWriter::write_truncate(destination, payload)?,
            WriteMode::Atomic => FileWriter::atomic_write(destination, payload)?,
        }
        Ok(())
    }
}
