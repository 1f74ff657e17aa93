/// Useless-image collection — files with an image extension and no references.
use super::references::count_references;
use crate::error::MarkerError;
use crate::model::ProjectTree;
use crate::source::FileSource;
use std::collections::HashSet;
use tracing::info;

/// Normalised set of recognised image extensions.
///
/// Entries are stored lowercase with a leading dot, so `PNG`, `.png` and
/// `.PNG` in the configuration all mean the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageTypes {
    extensions: HashSet<String>,
}

impl ImageTypes {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref().trim().to_ascii_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .filter(|ext| ext.len() > 1)
            .collect();
        Self { extensions }
    }

    /// Whether a file name carries one of the recognised extensions.
    pub fn contains_name(&self, name: &str) -> bool {
        let ext = extension(name);
        !ext.is_empty() && self.extensions.contains(&ext.to_ascii_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

/// The extension of `name` including its dot, or `""` when there is none.
pub fn extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) => &name[pos..],
        None => "",
    }
}

/// Collect the root-relative paths of unreferenced image files.
///
/// Must run after [`count_references`]. Output follows discovery order.
pub fn useless_images(tree: &ProjectTree, image_types: &ImageTypes) -> Vec<String> {
    tree.iter()
        .filter(|(_, node)| {
            !node.is_dir && node.reference_count < 1 && image_types.contains_name(&node.name)
        })
        .map(|(idx, _)| tree.absolute_path(idx))
        .collect()
}

/// Count references across every Markdown file, then collect useless images.
pub fn get_useless_images<S>(
    tree: &mut ProjectTree,
    source: &S,
    image_types: &ImageTypes,
) -> Result<Vec<String>, MarkerError>
where
    S: FileSource + ?Sized,
{
    let stats = count_references(tree, source)?;
    let images = useless_images(tree, image_types);
    info!(
        "Found {} useless images ({} markdown files, {} resolved references)",
        images.len(),
        stats.markdown_files,
        stats.resolved
    );
    Ok(images)
}
