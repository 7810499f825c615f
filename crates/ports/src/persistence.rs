// crates/ports/src/persistence.rs
use std::path::Path;

use provmeta_shared_kernel::Result;

/// Creates or replaces `destination` with exactly `payload`.
pub trait DocumentWriter: Send + Sync {
    fn write_document(&self, destination: &Path, payload: &[u8]) -> Result<()>;
}
