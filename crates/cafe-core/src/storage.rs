//! JSON file storage with atomic replace

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ports::DocumentStorage;
use crate::Result;

/// Stores the data document in a single file on disk.
///
/// Writes go to a temporary sibling file which is synced and then renamed
/// over the target, so a crash mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("data.json");
        self.path
            .with_file_name(format!(".{}.tmp.{}", name, std::process::id()))
    }
}

impl DocumentStorage for JsonFileStorage {
    fn read(&self) -> Result<Vec<u8>> {
        Ok(std::fs::read(&self.path)?)
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = self.temp_path();
        let written = (|| -> std::io::Result<()> {
            let mut file = File::create(&tmp)?;
            file.write_all(bytes)?;
            file.sync_all()?;
            std::fs::rename(&tmp, &self.path)
        })();

        if let Err(e) = written {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }

        if let Some(dir) = self.path.parent().and_then(|p| File::open(p).ok()) {
            let _ = dir.sync_all();
        }

        debug!("Wrote {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("data.json"));

        storage.write(b"{\"cafes\":[]}").unwrap();
        assert_eq!(storage.read().unwrap(), b"{\"cafes\":[]}");

        storage.write(b"{}").unwrap();
        assert_eq!(storage.read().unwrap(), b"{}");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("data.json"));
        storage.write(b"{}").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["data.json".to_string()]);
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested").join("data.json"));
        storage.write(b"{}").unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("missing.json"));
        assert!(matches!(storage.read(), Err(crate::CafeError::Io(_))));
    }
}
