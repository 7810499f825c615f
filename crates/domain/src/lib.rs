//! # Domain
//!
//! The provenance record for one unit of work: which files went in, which
//! came out, the caller's parameters, and when it happened.

#![allow(clippy::multiple_crate_versions)]

pub mod model;

pub use model::{FileEntry, Record};
