// crates/ports/src/hashing.rs
use std::path::Path;

use provmeta_shared_kernel::{Result, Sha1Digest};

/// Computes SHA-1 content fingerprints.
pub trait ChecksumProvider: Send + Sync {
    /// Digest the full contents of the file at `path`.
    fn digest_file(&self, path: &Path) -> Result<Sha1Digest>;
}
