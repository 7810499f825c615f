// tests/common/mod.rs
//! Shared fixtures for the integration tests.

use std::{fs, path::Path};

use sha1::{Digest, Sha1};
use tempfile::TempDir;

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `rel` and return the absolute path as a string.
    pub fn file(&self, rel: &str, contents: impl AsRef<[u8]>) -> String {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, contents).expect("write fixture");
        path.to_string_lossy().into_owned()
    }

    pub fn missing(&self, rel: &str) -> String {
        self.dir.path().join(rel).to_string_lossy().into_owned()
    }

    pub fn read_json(&self, rel: &str) -> serde_json::Value {
        let text = fs::read_to_string(self.dir.path().join(rel)).expect("read document");
        serde_json::from_str(&text).expect("valid JSON")
    }
}

/// Independent SHA-1 of `bytes`, lowercase hex.
pub fn sha1_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(Sha1::digest(bytes.as_ref()))
}
