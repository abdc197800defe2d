use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use arqa_shared_kernel::{InfraResult, InfrastructureError};
use serde::de::DeserializeOwned;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        File::open(path)
            .map(BufReader::new)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Read the entire file into a string.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let mut buf = String::new();
        Self::open_buffered(path)?
            .read_to_string(&mut buf)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Ok(buf)
    }

    /// Deserialize a JSON document from `path`.
    pub fn read_json<T: DeserializeOwned>(path: &Path) -> InfraResult<T> {
        let reader = Self::open_buffered(path)?;
        serde_json::from_reader(reader).map_err(|e| InfrastructureError::SerializationError {
            format: "JSON".to_string(),
            details: format!("{}: {e}", path.display()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = FileReader::read_to_string(&path).unwrap_err();
        assert!(matches!(err, InfrastructureError::FileRead { ref path, .. } if path.ends_with("absent.json")));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = FileReader::read_json::<serde_json::Value>(&path).unwrap_err();
        assert!(matches!(err, InfrastructureError::SerializationError { .. }));
    }
}
