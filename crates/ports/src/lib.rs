//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`hashing`]: Content checksums of tracked files
//! - [`document`]: The persisted document shape and its encoding
//! - [`persistence`]: Writing the encoded document to its destination
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod document;
pub mod hashing;
pub mod persistence;
