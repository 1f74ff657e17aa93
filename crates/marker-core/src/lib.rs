/// marker core — tree indexing and image reference resolution.
///
/// This crate contains all the logic with zero CLI dependencies.
///
/// # Modules
///
/// - [`model`] — Arena-allocated project tree with relative-path search.
/// - [`scanner`] — Single filesystem walk that builds the tree, honouring skip rules.
/// - [`analysis`] — Markdown reference counting and useless-image collection.
/// - [`markdown`] — Image reference extraction from Markdown lines.
/// - [`source`] — File content access used by the reference scan.
/// - [`config`] — Skip rules and recognised image types.
/// - [`removal`] — Deleting useless images from disk.
pub mod analysis;
pub mod config;
pub mod error;
pub mod markdown;
pub mod model;
pub mod removal;
pub mod scanner;
pub mod source;

pub use analysis::{get_useless_images, ImageTypes};
pub use config::Config;
pub use error::MarkerError;
pub use model::{NodeIndex, ProjectTree};
pub use scanner::{build_tree, WalkEntry};
pub use source::{DiskSource, FileSource};
