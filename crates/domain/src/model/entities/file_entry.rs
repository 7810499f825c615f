use provmeta_shared_kernel::Sha1Digest;
use serde::{Deserialize, Serialize};

/// A tracked file path together with its content checksum, once known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sha1: Option<Sha1Digest>,
}

impl FileEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), sha1: None }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Checksum recorded by the last persist, `None` before that.
    pub fn sha1(&self) -> Option<&Sha1Digest> {
        self.sha1.as_ref()
    }

    pub(crate) fn record_digest(&mut self, digest: Sha1Digest) {
        self.sha1 = Some(digest);
    }
}
