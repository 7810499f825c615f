use provmeta_domain::{FileEntry, Record};
use provmeta_ports::document::{FileDigestDto, MetadataDocument};
use provmeta_shared_kernel::{ApplicationError, FileRole, Result};

/// Map a fully checksummed record to the persisted document shape.
///
/// # Errors
///
/// Returns [`ApplicationError::MissingDigest`] if any tracked file has not been checksummed.
pub fn document_from_record(record: &Record) -> Result<MetadataDocument> {
    Ok(MetadataDocument {
        inputs: entries_to_dtos(FileRole::Input, record.inputs())?,
        outputs: entries_to_dtos(FileRole::Output, record.outputs())?,
        parameters: record.parameters().to_vec(),
        date: record.date().map(|d| d.to_string()),
        time: record.time().map(|t| t.to_string()),
    })
}

fn entries_to_dtos(role: FileRole, entries: &[FileEntry]) -> Result<Vec<FileDigestDto>> {
    entries
        .iter()
        .map(|entry| match entry.sha1() {
            Some(sha1) => Ok(FileDigestDto { path: entry.path().to_string(), sha1: sha1.clone() }),
            None => Err(ApplicationError::MissingDigest { role, path: entry.path().to_string() }.into()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use provmeta_shared_kernel::{ProvmetaError, Sha1Digest};

    use super::*;

    #[test]
    fn maps_checksummed_record() {
        let mut record = Record::new();
        record.add_input("a.txt");
        record.push_parameter(3).unwrap();
        record.set_date(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        record.set_time(NaiveTime::from_hms_opt(3, 4, 5).unwrap());
        let digest = Sha1Digest::parse("aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d").unwrap();
        record.apply_digests(vec![digest.clone()]).unwrap();

        let doc = document_from_record(&record).unwrap();
        assert_eq!(doc.inputs, vec![FileDigestDto { path: "a.txt".into(), sha1: digest }]);
        assert!(doc.outputs.is_empty());
        assert_eq!(doc.parameters, vec![serde_json::json!(3)]);
        assert_eq!(doc.date.as_deref(), Some("2023-01-02"));
        assert_eq!(doc.time.as_deref(), Some("03:04:05"));
    }

    #[test]
    fn unchecksummed_entry_is_an_error() {
        let mut record = Record::new();
        record.add_output("b.txt");

        let err = document_from_record(&record).unwrap_err();
        assert!(matches!(
            err,
            ProvmetaError::Application(ApplicationError::MissingDigest { role: FileRole::Output, .. })
        ));
    }
}
