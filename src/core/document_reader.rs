/*
 * Reads tutorial documents by their navigation path. The reader sits behind
 * `DocumentReaderOperations` so the presenter can be tested without touching
 * the filesystem.
 */
use std::fs;
use std::io;
use std::path::PathBuf;

pub trait DocumentReaderOperations: Send + Sync {
    fn read_text(&self, relative_path: &str) -> io::Result<String>;
}

pub struct CoreDocumentReader {
    root: PathBuf,
}

impl CoreDocumentReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CoreDocumentReader { root: root.into() }
    }
}

impl DocumentReaderOperations for CoreDocumentReader {
    fn read_text(&self, relative_path: &str) -> io::Result<String> {
        let mut full_path = self.root.clone();
        for segment in relative_path.split('/') {
            if segment.is_empty() || segment == "." {
                continue;
            }
            if segment == ".." {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Path escapes content root: {relative_path}"),
                ));
            }
            full_path.push(segment);
        }
        log::debug!("DocumentReader: Reading {full_path:?}");
        fs::read_to_string(&full_path)
    }
}
