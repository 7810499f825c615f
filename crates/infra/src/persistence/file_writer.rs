// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use provmeta_shared_kernel::{InfraResult, InfrastructureError};
use tempfile::NamedTempFile;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create (or truncate) `path` and write `data` through a buffered writer.
    pub fn write_truncate(path: &Path, data: &[u8]) -> InfraResult<()> {
        let fail = |err| InfrastructureError::write_failure(path, err);
        let mut w = File::create(path).map(BufWriter::new).map_err(fail)?;
        w.write_all(data).map_err(fail)?;
        w.flush().map_err(fail)
    }

    /// Atomically write `data` to `path` via a uniquely named sibling temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        let fail = |err| InfrastructureError::write_failure(path, err);
        let dir = parent_dir(path);

        // The temp file is removed on drop if any step before `persist` fails.
        let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
        {
            let mut w = BufWriter::new(tmp.as_file_mut());
            w.write_all(data).map_err(fail)?;
            w.flush().map_err(fail)?;
        }
        let _ = tmp.as_file().sync_all();
        tmp.persist(path).map_err(|err| fail(err.error))?;

        // Make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(dir) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn write_truncate_replaces_existing_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.json");
        fs::write(&path, "a much longer previous document").unwrap();

        FileWriter::write_truncate(&path, b"{}").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"{}");
    }

    #[test]
    fn write_truncate_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/meta.json");

        let err = FileWriter::write_truncate(&path, b"{}").unwrap_err();
        assert!(matches!(err, InfrastructureError::FileWrite { .. }));
    }

    #[test]
    fn atomic_write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.json");
        fs::write(&path, "old").unwrap();

        FileWriter::atomic_write(&path, b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
        let names: Vec<_> = fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
        assert_eq!(names, vec![std::ffi::OsString::from("meta.json")]);
    }

    #[test]
    fn concurrent_atomic_writes_in_one_directory_stay_separate() {
        let dir = tempfile::tempdir().unwrap();
        let targets: Vec<_> = (0..8).map(|i| dir.path().join(format!("meta-{i}.json"))).collect();

        std::thread::scope(|scope| {
            for (i, target) in targets.iter().enumerate() {
                scope.spawn(move || {
                    for round in 0..25 {
                        FileWriter::atomic_write(target, format!("{i}:{round}").as_bytes()).unwrap();
                    }
                });
            }
        });

        for (i, target) in targets.iter().enumerate() {
            assert_eq!(fs::read_to_string(target).unwrap(), format!("{i}:24"));
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), targets.len());
    }

    #[test]
    fn atomic_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileWriter::atomic_write(&dir.path().join("missing/meta.json"), b"{}").unwrap_err();
        assert!(matches!(err, InfrastructureError::FileWrite { .. }));
    }

    #[test]
    fn parent_of_bare_file_name_is_current_dir() {
        assert_eq!(parent_dir(Path::new("meta.json")), Path::new("."));
        assert_eq!(parent_dir(Path::new("out/meta.json")), Path::new("out"));
    }
}
