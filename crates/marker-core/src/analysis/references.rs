/// Reference scan — counts how often each file is linked from Markdown.
///
/// Every Markdown file is read line by line. Each image reference is
/// resolved against the directory holding the Markdown file, and a
/// successful resolution bumps the target's counter by one. Links that do
/// not resolve are expected (typos, remote images, paths outside the root)
/// and are ignored.
use crate::error::MarkerError;
use crate::markdown::{image_references, is_markdown};
use crate::model::{NodeIndex, ProjectTree, SEPARATOR};
use crate::source::FileSource;
use std::io::BufRead;
use std::time::Instant;
use tracing::{debug, trace};

/// Totals from one reference scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceStats {
    pub markdown_files: u64,
    pub references: u64,
    pub resolved: u64,
    pub unresolved: u64,
}

/// Scan every Markdown file in `tree` and accumulate reference counts.
///
/// Files are visited in discovery order, but the final counts do not depend
/// on it. A Markdown file that cannot be opened or read fails the whole
/// scan: partial counts would make used images look useless.
pub fn count_references<S>(
    tree: &mut ProjectTree,
    source: &S,
) -> Result<ReferenceStats, MarkerError>
where
    S: FileSource + ?Sized,
{
    let start = Instant::now();
    let mut stats = ReferenceStats::default();

    let markdown_files: Vec<NodeIndex> = tree
        .iter()
        .filter(|(_, node)| !node.is_dir && is_markdown(&node.name))
        .map(|(idx, _)| idx)
        .collect();

    for md in markdown_files {
        let path = tree.absolute_path(md);
        let targets = read_references(source, &path)?;
        stats.markdown_files += 1;

        // Links resolve against the directory holding the Markdown file.
        let base = match tree.parent(md) {
            Some(parent) => parent,
            None => continue,
        };

        for target in targets {
            stats.references += 1;
            let found = if climbs_above_root(tree.depth(base), &target) {
                None
            } else {
                tree.search(base, &target)
            };
            if found.is_some_and(|idx| tree.add_reference(idx)) {
                stats.resolved += 1;
            } else {
                trace!("Unresolved reference {} in {}", target, path);
                stats.unresolved += 1;
            }
        }
    }

    debug!(
        "Reference scan complete: {} markdown files, {} references ({} resolved) in {:?}",
        stats.markdown_files,
        stats.references,
        stats.resolved,
        start.elapsed()
    );

    Ok(stats)
}

/// Whether `target`, resolved from a directory `depth` levels below the
/// root, steps above the root at any point.
fn climbs_above_root(depth: usize, target: &str) -> bool {
    let mut depth = depth;
    for segment in target.split(SEPARATOR) {
        match segment {
            "." => {}
            ".." => match depth.checked_sub(1) {
                Some(up) => depth = up,
                None => return true,
            },
            _ => depth += 1,
        }
    }
    false
}

/// Collect every image reference in one Markdown file.
///
/// Lines are decoded lossily so a stray invalid byte does not abort the scan.
fn read_references<S>(source: &S, path: &str) -> Result<Vec<String>, MarkerError>
where
    S: FileSource + ?Sized,
{
    let mut reader = source.open(path).map_err(|source| MarkerError::OpenMarkdown {
        path: path.to_string(),
        source,
    })?;

    let mut targets = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| MarkerError::ReadMarkdown {
                path: path.to_string(),
                source,
            })?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(&['\n', '\r'][..]);
        targets.extend(image_references(line).into_iter().map(str::to_string));
    }
    Ok(targets)
}
