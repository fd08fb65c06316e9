use crate::core::Storage;
use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Storage rooted at the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    type Writer = BufWriter<File>;
    type Reader = BufReader<File>;

    fn open_writer(&self, path: &str) -> Result<BufWriter<File>> {
        let full_path = self.resolve(path);
        tracing::debug!("Opening {} for writing", full_path.display());

        let file = File::create(full_path)?;
        Ok(BufWriter::new(file))
    }

    fn open_reader(&self, path: &str) -> Result<BufReader<File>> {
        let full_path = self.resolve(path);
        tracing::debug!("Opening {} for reading", full_path.display());

        let file = File::open(full_path)?;
        Ok(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    fn read_back(storage: &LocalStorage, path: &str) -> String {
        let mut content = String::new();
        storage
            .open_reader(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        {
            let mut writer = storage.open_writer("out.txt").unwrap();
            writeln!(writer, "1 Яблоко 1.0 3").unwrap();
        }

        assert_eq!(read_back(&storage, "out.txt"), "1 Яблоко 1.0 3\n");
    }

    #[test]
    fn test_open_writer_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        std::fs::write(temp_dir.path().join("out.txt"), "old content\nmore\n").unwrap();

        {
            let mut writer = storage.open_writer("out.txt").unwrap();
            write!(writer, "new").unwrap();
        }

        assert_eq!(read_back(&storage, "out.txt"), "new");
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("missing"));

        assert!(matches!(
            storage.open_writer("out.txt"),
            Err(crate::utils::error::ReceiptError::IoError(_))
        ));
    }
}
