// crates/infra/src/hashing.rs
use std::path::Path;

use log::trace;
use provmeta_ports::hashing::ChecksumProvider;
use provmeta_shared_kernel::{Result, Sha1Digest};
use sha1::{Digest, Sha1};

use crate::persistence::FileReader;

/// In-process SHA-1 over whole file contents.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha1FileHasher;

impl Sha1FileHasher {
    pub fn new() -> Self {
        Self
    }

    pub fn digest_bytes(&self, data: &[u8]) -> Result<Sha1Digest> {
        let raw = Sha1::digest(data);
        Ok(Sha1Digest::from_digest_bytes(raw.as_slice())?)
    }
}

impl ChecksumProvider for Sha1FileHasher {
    fn digest_file(&self, path: &Path) -> Result<Sha1Digest> {
        let data = FileReader::read_to_end(path)?;
        trace!("read {} bytes from {}", data.len(), path.display());
        self.digest_bytes(&data)
    }
}
