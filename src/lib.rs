//! # provmeta
//!
//! Lightweight provenance records for pipeline steps: which files a step
//! consumed and produced, their SHA-1 checksums, free-form parameters and a
//! date/time, persisted as one JSON document.
//!
//! ```no_run
//! use provmeta::{Record, write_metadata};
//!
//! # fn main() -> provmeta::Result<()> {
//! let mut record = Record::new();
//! record.add_input("raw/reads.fastq");
//! record.add_output("aligned/reads.bam");
//! record.push_parameter("--min-quality=20")?;
//! record.stamp_now();
//! write_metadata(&mut record, "aligned/reads.bam.meta.json")?;
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod writer;

pub use config::PersistConfig;
pub use provmeta_domain::{FileEntry, Record};
pub use provmeta_infra::{JsonLayout, WriteMode};
pub use provmeta_ports::document::{FileDigestDto, MetadataDocument};
pub use provmeta_shared_kernel::{
    ApplicationError, DomainError, ErrorContext, FileRole, InfrastructureError, ProvmetaError, Result, Sha1Digest,
};
pub use writer::{MetadataWriter, write_metadata};
