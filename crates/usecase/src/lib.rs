//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`persister`]: checksum every tracked file and write the metadata document
//! - [`dto`]: mapping from the domain record to the persisted document
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod persister;

pub use dto::document_from_record;
pub use persister::WriteMetadata;
