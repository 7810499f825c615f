use std::path::Path;

use log::{debug, trace};
use provmeta_domain::Record;
use provmeta_ports::{document::DocumentEncoder, hashing::ChecksumProvider, persistence::DocumentWriter};
use provmeta_shared_kernel::{ApplicationError, Result, Sha1Digest};

use crate::dto::document_from_record;

/// Finalizes a [`Record`] into a checksummed document on disk.
pub struct WriteMetadata<'a> {
    hasher: &'a dyn ChecksumProvider,
    encoder: &'a dyn DocumentEncoder,
    writer: &'a dyn DocumentWriter,
}

impl<'a> WriteMetadata<'a> {
    pub fn new(
        hasher: &'a dyn ChecksumProvider,
        encoder: &'a dyn DocumentEncoder,
        writer: &'a dyn DocumentWriter,
    ) -> Self {
        Self { hasher, encoder, writer }
    }

    /// Checksum every tracked file, store the digests on the record, and
    /// write the encoded document to `destination`.
    ///
    /// Every call recomputes all digests. Nothing is written, and the record's
    /// existing digests are kept, if any file cannot be checksummed.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable tracked file, if encoding fails, or if
    /// `destination` cannot be written.
    pub fn run(&self, record: &mut Record, destination: &Path) -> Result<()> {
        debug!(
            "persisting metadata: {} inputs, {} outputs -> {}",
            record.inputs().len(),
            record.outputs().len(),
            destination.display()
        );

        let digests = self.checksum_all(record)?;
        record.apply_digests(digests)?;

        let document = document_from_record(record)?;
        let payload = self.encoder.encode(&document)?;
        trace!("encoded {} bytes of {}", payload.len(), self.encoder.format_name());

        self.writer.write_document(destination, &payload)?;
        debug!("wrote metadata to {}", destination.display());
        Ok(())
    }

    fn checksum_all(&self, record: &Record) -> Result<Vec<Sha1Digest>> {
        let mut digests = Vec::with_capacity(record.tracked_len());
        for (role, entry) in record.tracked_files() {
            let digest = self.hasher.digest_file(Path::new(entry.path())).map_err(|err| {
                ApplicationError::ChecksumFailed { role, path: entry.path().to_string(), source: Box::new(err) }
            })?;
            trace!("{role} {} sha1={digest}", entry.path());
            digests.push(digest);
        }
        Ok(digests)
    }
}
