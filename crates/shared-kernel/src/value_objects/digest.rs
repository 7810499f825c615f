// crates/shared-kernel/src/value_objects/digest.rs
use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DomainError, DomainResult};

/// Number of hex characters in a rendered SHA-1 digest.
pub const SHA1_HEX_LEN: usize = 40;
/// Number of raw bytes in a SHA-1 digest.
pub const SHA1_BYTE_LEN: usize = 20;

/// Lowercase hexadecimal SHA-1 digest, always exactly 40 characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Sha1Digest(String);

impl Sha1Digest {
    /// Parse a hex digest, folding uppercase digits to lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDigest`] when the value is not 40 hex characters.
    pub fn parse(value: &str) -> DomainResult<Self> {
        if value.len() != SHA1_HEX_LEN {
            return Err(DomainError::InvalidDigest {
                value: value.to_string(),
                reason: format!("expected {SHA1_HEX_LEN} characters, got {}", value.len()),
            });
        }
        if let Some(bad) = value.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidDigest {
                value: value.to_string(),
                reason: format!("'{bad}' is not a hexadecimal digit"),
            });
        }
        Ok(Self(value.to_ascii_lowercase()))
    }

    /// Render raw digest output as lowercase hex.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDigest`] unless `bytes` is exactly 20 bytes long.
    pub fn from_digest_bytes(bytes: &[u8]) -> DomainResult<Self> {
        if bytes.len() != SHA1_BYTE_LEN {
            return Err(DomainError::InvalidDigest {
                value: hex::encode(bytes),
                reason: format!("expected {SHA1_BYTE_LEN} digest bytes, got {}", bytes.len()),
            });
        }
        Ok(Self(hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Sha1Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for Sha1Digest {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Sha1Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Sha1Digest {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Sha1Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
