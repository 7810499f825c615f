use std::path::Path;

use provmeta_domain::Record;
use provmeta_infra::{FsDocumentWriter, JsonEncoder, Sha1FileHasher};
use provmeta_shared_kernel::Result;
use provmeta_usecase::WriteMetadata;

use crate::config::PersistConfig;

/// Persists records with a fixed [`PersistConfig`] using the filesystem adapters.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataWriter {
    config: PersistConfig,
    hasher: Sha1FileHasher,
    encoder: JsonEncoder,
    writer: FsDocumentWriter,
}

impl MetadataWriter {
    pub fn new(config: PersistConfig) -> Self {
        Self {
            config,
            hasher: Sha1FileHasher::new(),
            encoder: JsonEncoder::new(config.layout),
            writer: FsDocumentWriter::new(config.write_mode),
        }
    }

    pub fn config(&self) -> &PersistConfig {
        &self.config
    }

    /// Checksum every file tracked by `record`, store the digests on it, and
    /// write the metadata document to `destination`.
    ///
    /// # Errors
    ///
    /// Fails without touching `destination` if any tracked file is missing or
    /// unreadable; fails if `destination` cannot be written.
    pub fn write(&self, record: &mut Record, destination: impl AsRef<Path>) -> Result<()> {
        WriteMetadata::new(&self.hasher, &self.encoder, &self.writer).run(record, destination.as_ref())
    }
}

/// Persist `record` to `destination` with the default configuration.
///
/// # Errors
///
/// See [`MetadataWriter::write`].
pub fn write_metadata(record: &mut Record, destination: impl AsRef<Path>) -> Result<()> {
    MetadataWriter::default().write(record, destination)
}
