use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use provmeta_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> InfraResult<File> {
        File::open(path).map_err(|err| InfrastructureError::read_failure(path, err))
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> InfraResult<Vec<u8>> {
        let mut reader = Self::open_buffered(path)?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map_err(|err| InfrastructureError::read_failure(path, err))?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"\x00\x01payload").unwrap();

        assert_eq!(FileReader::read_to_end(&path).unwrap(), b"\x00\x01payload");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileReader::read_to_end(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, InfrastructureError::FileNotFound { .. }));
    }

    #[test]
    fn directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileReader::read_to_end(dir.path()).unwrap_err();
        assert!(matches!(err, InfrastructureError::FileRead { .. }));
    }
}
