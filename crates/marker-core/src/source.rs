/// File content access for the reference scan.
///
/// The scan only needs to read Markdown files by their root-relative path,
/// so the filesystem is reduced to a single `open`. Readers are owned
/// values and close when dropped, whichever way the caller leaves.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

pub trait FileSource {
    /// Open `relative_path` (`/`-delimited, relative to the project root).
    fn open(&self, relative_path: &str) -> io::Result<Box<dyn BufRead + '_>>;
}

/// Reads files from a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskSource {
    root: PathBuf,
}

impl DiskSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileSource for DiskSource {
    fn open(&self, relative_path: &str) -> io::Result<Box<dyn BufRead + '_>> {
        let path = relative_path
            .split('/')
            .fold(self.root.clone(), |acc, segment| acc.join(segment));
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_disk_source_opens_nested_relative_path() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("doc")).unwrap();
        std::fs::write(tmp.path().join("doc/a.md"), "hello").unwrap();

        let source = DiskSource::new(tmp.path());
        let mut text = String::new();
        source.open("doc/a.md").unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_disk_source_missing_file() {
        let tmp = TempDir::new().unwrap();
        let source = DiskSource::new(tmp.path());
        let err = source.open("nope.md").err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
