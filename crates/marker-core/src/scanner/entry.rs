/// Entry descriptor handed to skip predicates during the walk.
use std::path::{Path, PathBuf};

/// One directory entry as seen by the tree builder, before it is indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Path relative to the scan root.
    pub relative_path: PathBuf,
    /// File or directory name only.
    pub name: String,
    /// `true` if the entry is a directory. Symlinks are never directories.
    pub is_dir: bool,
}

impl WalkEntry {
    pub fn new(relative_path: impl Into<PathBuf>, is_dir: bool) -> Self {
        let relative_path = relative_path.into();
        let name = relative_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            relative_path,
            name,
            is_dir,
        }
    }

    /// `true` for dot-files and dot-directories such as `.git`.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Path segments relative to the scan root.
    pub fn segments(&self) -> impl Iterator<Item = String> + '_ {
        path_segments(&self.relative_path)
    }
}

/// Split a relative path into owned, lossily decoded segments.
pub(crate) fn path_segments(path: &Path) -> impl Iterator<Item = String> + '_ {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
}
