// crates/ports/src/document.rs
use provmeta_shared_kernel::{Result, Sha1Digest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// DTO for one checksummed file in the persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDigestDto {
    pub path: String,
    pub sha1: Sha1Digest,
}

/// The persisted metadata document.
///
/// Field declaration order is the key order on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataDocument {
    pub inputs: Vec<FileDigestDto>,
    pub outputs: Vec<FileDigestDto>,
    pub parameters: Vec<Value>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Port for turning a [`MetadataDocument`] into the bytes written to disk.
pub trait DocumentEncoder: Send + Sync {
    /// Short label used in logs and errors, e.g. `"JSON"`.
    fn format_name(&self) -> &'static str;

    fn encode(&self, document: &MetadataDocument) -> Result<Vec<u8>>;
}
