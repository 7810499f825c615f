use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use provmeta_shared_kernel::{DomainError, DomainResult, FileRole, Sha1Digest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FileEntry;

/// Provenance of one unit of work.
///
/// `inputs` and `outputs` are append-only and keep insertion order. Paths
/// are neither validated nor deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    inputs: Vec<FileEntry>,
    outputs: Vec<FileEntry>,
    parameters: Vec<Value>,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_input(&mut self, path: impl Into<String>) {
        self.inputs.push(FileEntry::new(path));
    }

    pub fn add_output(&mut self, path: impl Into<String>) {
        self.outputs.push(FileEntry::new(path));
    }

    pub fn inputs(&self) -> &[FileEntry] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[FileEntry] {
        &self.outputs
    }

    pub fn parameters(&self) -> &[Value] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Vec<Value> {
        &mut self.parameters
    }

    pub fn set_parameters(&mut self, parameters: Vec<Value>) {
        self.parameters = parameters;
    }

    /// Append any serializable value as an opaque parameter.
    ///
    /// Object keys keep their serialization order. Non-finite floats
    /// (`NaN`, `inf`) have no JSON form and are stored as `null`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParameter`] if `value` cannot be represented as JSON
    /// (for example a map with non-string keys).
    pub fn push_parameter<T: Serialize>(&mut self, value: T) -> DomainResult<()> {
        let value = serde_json::to_value(value)
            .map_err(|err| DomainError::InvalidParameter { details: err.to_string() })?;
        self.parameters.push(value);
        Ok(())
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    pub fn clear_date(&mut self) {
        self.date = None;
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.time = Some(time);
    }

    pub fn clear_time(&mut self) {
        self.time = None;
    }

    /// Set date and time from `at`, dropping sub-second precision.
    pub fn stamp(&mut self, at: NaiveDateTime) {
        self.date = Some(at.date());
        let time = at.time();
        self.time = Some(time.with_nanosecond(0).unwrap_or(time));
    }

    /// Set date and time from the local clock.
    pub fn stamp_now(&mut self) {
        self.stamp(Local::now().naive_local());
    }

    /// Every tracked file with its role: all inputs, then all outputs.
    pub fn tracked_files(&self) -> impl Iterator<Item = (FileRole, &FileEntry)> {
        self.inputs
            .iter()
            .map(|entry| (FileRole::Input, entry))
            .chain(self.outputs.iter().map(|entry| (FileRole::Output, entry)))
    }

    pub fn tracked_len(&self) -> usize {
        self.inputs.len() + self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked_len() == 0 && self.parameters.is_empty() && self.date.is_none() && self.time.is_none()
    }

    /// Store one digest per tracked file, in [`Record::tracked_files`] order,
    /// overwriting any earlier values.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DigestCountMismatch`] and leaves the record untouched
    /// when `digests` does not cover every tracked file exactly once.
    pub fn apply_digests(&mut self, digests: Vec<Sha1Digest>) -> DomainResult<()> {
        let expected = self.tracked_len();
        if digests.len() != expected {
            return Err(DomainError::DigestCountMismatch { expected, actual: digests.len() });
        }
        for (entry, digest) in self.inputs.iter_mut().chain(self.outputs.iter_mut()).zip(digests) {
            entry.record_digest(digest);
        }
        Ok(())
    }
}
