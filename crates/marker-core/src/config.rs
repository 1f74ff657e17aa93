/// Project configuration — which entries to skip and which extensions are images.
///
/// Read from `.marker.json` at the project root when present. Every field is
/// optional in the file; missing fields fall back to the defaults below.
use crate::analysis::ImageTypes;
use crate::scanner::WalkEntry;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Config file looked up at the project root.
pub const CONFIG_FILE_NAME: &str = ".marker.json";

const DEFAULT_IMAGE_TYPES: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".bmp"];
const DEFAULT_SKIP_NAMES: &[&str] = &["node_modules", "target"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File extensions counted as images, e.g. `.png`.
    pub image_types: Vec<String>,
    /// Entry names excluded from the walk. A matching directory is pruned whole.
    pub skip_names: Vec<String>,
    /// Exclude dot-files and dot-directories such as `.git`.
    pub skip_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_types: DEFAULT_IMAGE_TYPES.iter().map(|s| s.to_string()).collect(),
            skip_names: DEFAULT_SKIP_NAMES.iter().map(|s| s.to_string()).collect(),
            skip_hidden: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    /// Load `<root>/.marker.json`, or the defaults if the file does not exist.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
            return Ok(Self::default());
        }
        Self::from_path(&path)
    }

    /// Load an explicit config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading config file {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether the walk should exclude `entry`.
    pub fn should_skip(&self, entry: &WalkEntry) -> bool {
        (self.skip_hidden && entry.is_hidden())
            || self.skip_names.iter().any(|n| *n == entry.name)
    }

    /// An owned predicate suitable for [`crate::scanner::build_tree`].
    pub fn skip_predicate(&self) -> impl Fn(&WalkEntry) -> bool + Send + Sync + 'static {
        let config = self.clone();
        move |entry| config.should_skip(entry)
    }

    /// The recognised image extensions, normalised for lookup.
    pub fn image_types(&self) -> ImageTypes {
        ImageTypes::new(&self.image_types)
    }
}
