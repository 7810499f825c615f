// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod hashing;
pub mod persistence;
pub mod serialization;

pub use hashing::Sha1FileHasher;
pub use persistence::{FileReader, FileWriter, FsDocumentWriter, WriteMode};
pub use serialization::{JsonEncoder, JsonLayout};
