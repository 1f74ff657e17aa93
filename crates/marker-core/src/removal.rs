/// Deleting useless images from disk.
use crate::error::MarkerError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Remove each root-relative image path under `root`.
///
/// Stops at the first failure. `on_removed` is called after every
/// successful deletion so callers can report progress as it happens.
/// Returns the number of files removed.
pub fn remove_images<F>(
    root: &Path,
    images: &[String],
    mut on_removed: F,
) -> Result<usize, MarkerError>
where
    F: FnMut(&Path),
{
    let mut removed = 0;
    for image in images {
        let path: PathBuf = image
            .split('/')
            .fold(root.to_path_buf(), |acc, segment| acc.join(segment));
        std::fs::remove_file(&path).map_err(|source| MarkerError::Remove {
            path: path.clone(),
            source,
        })?;
        info!("Removed {}", path.display());
        on_removed(&path);
        removed += 1;
    }
    Ok(removed)
}
