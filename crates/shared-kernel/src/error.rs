// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::value_objects::FileRole;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ProvmetaError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ProvmetaError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, ProvmetaError>;

impl ProvmetaError {
    /// True when the root cause is a tracked file that does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Context { source, .. } => source.is_not_found(),
            Self::Infrastructure(InfrastructureError::FileNotFound { .. }) => true,
            Self::Application(ApplicationError::ChecksumFailed { source, .. }) => source.is_not_found(),
            _ => false,
        }
    }

    /// True when the destination document could not be written.
    pub fn is_write_failure(&self) -> bool {
        match self {
            Self::Context { source, .. } => source.is_write_failure(),
            Self::Infrastructure(InfrastructureError::FileWrite { .. }) => true,
            _ => false,
        }
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid SHA-1 digest '{value}': {reason}")]
    InvalidDigest { value: String, reason: String },

    #[error("Invalid parameter value: {details}")]
    InvalidParameter { details: String },

    #[error("Digest count mismatch: {expected} tracked files but {actual} digests")]
    DigestCountMismatch { expected: usize, actual: usize },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to checksum {role} '{path}': {source}")]
    ChecksumFailed {
        role: FileRole,
        path: String,
        #[source]
        source: Box<ProvmetaError>,
    },

    #[error("No checksum recorded for {role} '{path}'")]
    MissingDigest { role: FileRole, path: String },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("File not found: '{path}'")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} document: {details}")]
    SerializationError { format: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl InfrastructureError {
    /// Classify a read failure, separating a missing file from other I/O errors.
    pub fn read_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite { path: path.into(), source }
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ProvmetaError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ProvmetaError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ProvmetaError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ProvmetaError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
