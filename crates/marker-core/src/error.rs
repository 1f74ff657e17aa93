/// Error types for the marker core.
///
/// Every variant is fatal to the operation that raised it and carries the
/// path involved. An unresolved image link is not an error and never shows
/// up here.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum MarkerError {
    /// The directory walk could not enumerate a path.
    #[error("failed to walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: jwalk::Error,
    },

    /// A Markdown file could not be opened.
    #[error("failed to open markdown file {path}")]
    OpenMarkdown {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A Markdown file failed partway through reading.
    #[error("failed to read markdown file {path}")]
    ReadMarkdown {
        path: String,
        #[source]
        source: io::Error,
    },

    /// An image could not be deleted from disk.
    #[error("failed to remove {}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
