use ignore::WalkBuilder;
use std::io;
use std::path::PathBuf;

/*
 * This module provides the directory-listing capability the tree builder is
 * driven by. It defines errors specific to listing, a trait
 * `DirectoryListerOperations` so the builder can be fed from any source (the
 * real filesystem, or an in-memory fixture in tests), and the concrete
 * `CoreDirectoryLister` which reads one directory level at a time using the
 * `ignore` crate, so hidden entries and `.gitignore` rules are respected.
 */

#[derive(Debug)]
pub enum FileSystemError {
    Io(io::Error),
    IgnoreError(ignore::Error),
    InvalidPath(PathBuf),
}

impl From<io::Error> for FileSystemError {
    fn from(err: io::Error) -> Self {
        FileSystemError::Io(err)
    }
}

impl From<ignore::Error> for FileSystemError {
    fn from(err: ignore::Error) -> Self {
        FileSystemError::IgnoreError(err)
    }
}

impl std::fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileSystemError::Io(e) => write!(f, "I/O error: {e}"),
            FileSystemError::IgnoreError(e) => write!(f, "Ignore pattern processing error: {e}"),
            FileSystemError::InvalidPath(p) => write!(f, "Invalid path: {p:?}"),
        }
    }
}

impl std::error::Error for FileSystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileSystemError::Io(e) => Some(e),
            FileSystemError::IgnoreError(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FileSystemError>;

/* One entry of a directory listing. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub is_directory: bool,
}

impl ListedEntry {
    pub fn file(name: impl Into<String>) -> Self {
        ListedEntry {
            name: name.into(),
            is_directory: false,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        ListedEntry {
            name: name.into(),
            is_directory: true,
        }
    }
}

/*
 * Lists the immediate entries of a directory. The path is the storage-relative
 * navigation path (`/`-separated, empty for the content root), so implementations
 * decide for themselves where the content actually lives.
 */
pub trait DirectoryListerOperations: Send + Sync {
    fn list(&self, relative_path: &str) -> Result<Vec<ListedEntry>>;
}

/*
 * Lists directories below a fixed content root on the local filesystem.
 * Entries come back sorted by file name so repeated scans of an unchanged
 * tree produce the same order.
 */
pub struct CoreDirectoryLister {
    root: PathBuf,
}

impl CoreDirectoryLister {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CoreDirectoryLister { root: root.into() }
    }

    fn resolve(&self, relative_path: &str) -> PathBuf {
        relative_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }
}

impl DirectoryListerOperations for CoreDirectoryLister {
    fn list(&self, relative_path: &str) -> Result<Vec<ListedEntry>> {
        let dir = self.resolve(relative_path);
        if !dir.is_dir() {
            return Err(FileSystemError::InvalidPath(dir));
        }
        log::trace!("DirectoryLister: Listing {dir:?}");

        let walker = WalkBuilder::new(&dir)
            .max_depth(Some(1))
            .standard_filters(true)
            .parents(true)
            .git_global(false) // Only the content tree's own ignore files apply.
            .git_ignore(true)
            .git_exclude(true)
            .ignore(true)
            .hidden(true)
            .sort_by_file_path(|a, b| a.cmp(b))
            .build();

        let mut entries = Vec::new();
        for entry_result in walker {
            let entry = entry_result?;
            if entry.depth() == 0 {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                entries.push(ListedEntry::directory(name));
            } else {
                entries.push(ListedEntry::file(name));
            }
        }

        log::trace!(
            "DirectoryLister: {} entries in {:?}",
            entries.len(),
            dir
        );
        Ok(entries)
    }
}
