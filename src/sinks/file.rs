//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends to a file, creating it if needed
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening file target",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Sink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn buffer_capacity(&self) -> usize {
        4096
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_appends_to_existing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("app.log");
        std::fs::write(&path, "existing\n").expect("seed file");

        let mut sink = FileSink::new(&path).expect("open");
        sink.write_all(b"appended\n").expect("write");
        sink.flush().expect("flush");

        let content = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "existing\nappended\n");
        assert_eq!(sink.path(), path.as_path());
    }

    #[test]
    fn test_open_failure_has_context() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("app.log");

        let err = FileSink::new(&path).err().expect("missing parent directory");
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening file target"));
    }
}
