/// Scanner module — builds the in-memory project tree from disk.
///
/// Uses `jwalk` in serial mode with name-sorted listings so the walk is
/// pre-order, depth-first and deterministic. The skip predicate runs inside
/// jwalk's `process_read_dir` hook: an excluded entry is dropped from its
/// parent's listing, so an excluded directory is never opened.
pub mod entry;

pub use entry::WalkEntry;

use crate::error::MarkerError;
use crate::model::ProjectTree;
use entry::path_segments;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Initial arena capacity for a typical documentation project.
const ESTIMATED_NODES: usize = 4_096;

/// Walk `root` once and index every entry the predicate does not exclude.
///
/// Fails only when the walk itself fails (missing root, unreadable
/// directory). A predicate that excludes everything yields a tree holding
/// just the root.
pub fn build_tree<P>(root: &Path, skip: P) -> Result<ProjectTree, MarkerError>
where
    P: Fn(&WalkEntry) -> bool + Send + Sync + 'static,
{
    let start = Instant::now();
    info!("Starting scan of {}", root.display());

    let skipped = Arc::new(AtomicU64::new(0));
    let skipped_counter = skipped.clone();
    let walk_root = root.to_path_buf();

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial)
        .process_read_dir(move |_depth, _dir_path, _state, children| {
            children.retain(|entry_result| {
                let entry = match entry_result {
                    Ok(entry) => entry,
                    // Errors are kept so the iterator surfaces them.
                    Err(_) => return true,
                };
                if entry.depth == 0 {
                    return true;
                }
                let path = entry.path();
                let relative = path.strip_prefix(&walk_root).unwrap_or(&path);
                let descriptor = WalkEntry::new(relative, entry.file_type().is_dir());
                if skip(&descriptor) {
                    skipped_counter.fetch_add(1, Ordering::Relaxed);
                    return false;
                }
                true
            });
        });

    let mut tree = ProjectTree::with_capacity(ESTIMATED_NODES);
    let mut files_found: u64 = 0;
    let mut dirs_found: u64 = 0;

    for entry_result in walker {
        let mut entry = entry_result.map_err(|source| MarkerError::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;

        // jwalk yields an unreadable directory as an entry with the listing error attached.
        if let Some(source) = entry.read_children_error.take() {
            return Err(MarkerError::Walk {
                path: entry.path(),
                source,
            });
        }

        // The root itself is already in the tree.
        if entry.depth == 0 {
            continue;
        }

        let path = entry.path();
        let relative = match path.strip_prefix(root) {
            Ok(relative) => relative,
            Err(_) => continue,
        };

        let is_dir = entry.file_type().is_dir();
        tree.insert(path_segments(relative), is_dir);
        if is_dir {
            dirs_found += 1;
        } else {
            files_found += 1;
        }
    }

    debug!(
        "Scan walk complete: {} files, {} dirs, {} skipped in {:?}",
        files_found,
        dirs_found,
        skipped.load(Ordering::Relaxed),
        start.elapsed()
    );

    Ok(tree)
}
