/// End-to-end tests for the build → scan → collect pipeline.
///
/// These tests run the real `build_tree` walk and the `DiskSource`-backed
/// reference scan against a temporary project directory, then check which
/// images come back as useless.
use marker_core::analysis::{count_references, get_useless_images, useless_images};
use marker_core::removal::remove_images;
use marker_core::{build_tree, Config, DiskSource, ImageTypes, MarkerError, ProjectTree};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Create a reproducible project tree:
///
/// ```text
/// root/
///   doc/
///     a.md          ![alt](img/x.png), ![alt](../assets/y.png), ![alt](nope.png)
///     img/
///       x.png
///   assets/
///     y.png
///   img/
///     orphan.png
///   .git/
///     logo.png
///   node_modules/
///     pkg/
///       icon.png
/// ```
fn build_test_project(root: &Path) {
    write(
        &root.join("doc/a.md"),
        "# Doc\n\n![alt](img/x.png)\n\nSee ![alt](../assets/y.png).\n![alt](nope.png)\n",
    );
    write(&root.join("doc/img/x.png"), "x");
    write(&root.join("assets/y.png"), "y");
    write(&root.join("img/orphan.png"), "o");
    write(&root.join(".git/logo.png"), "g");
    write(&root.join("node_modules/pkg/icon.png"), "i");
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn build_with_defaults(root: &Path) -> ProjectTree {
    build_tree(root, Config::default().skip_predicate()).expect("build tree")
}

fn reference_count(tree: &ProjectTree, path: &str) -> u32 {
    let idx = tree
        .search(tree.root(), path)
        .unwrap_or_else(|| panic!("{path} not in tree"));
    tree.node(idx).reference_count
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// A referenced image is counted and excluded; an unreferenced one is listed.
#[test]
fn referenced_images_are_kept_and_orphans_listed() {
    let tmp = TempDir::new().unwrap();
    build_test_project(tmp.path());

    let mut tree = build_with_defaults(tmp.path());
    let source = DiskSource::new(tmp.path());
    let images =
        get_useless_images(&mut tree, &source, &Config::default().image_types()).unwrap();

    assert_eq!(reference_count(&tree, "doc/img/x.png"), 1);
    assert_eq!(images, ["img/orphan.png"]);
}

/// `../` in a link resolves from the Markdown file's parent directory.
#[test]
fn parent_relative_link_reaches_sibling_directory() {
    let tmp = TempDir::new().unwrap();
    build_test_project(tmp.path());

    let mut tree = build_with_defaults(tmp.path());
    count_references(&mut tree, &DiskSource::new(tmp.path())).unwrap();

    assert_eq!(reference_count(&tree, "assets/y.png"), 1);
}

/// Broken links neither count nor fail the run.
#[test]
fn broken_link_is_ignored() {
    let tmp = TempDir::new().unwrap();
    build_test_project(tmp.path());

    let mut tree = build_with_defaults(tmp.path());
    let stats = count_references(&mut tree, &DiskSource::new(tmp.path())).unwrap();

    assert_eq!(stats.references, 3);
    assert_eq!(stats.resolved, 2);
    assert_eq!(stats.unresolved, 1);
}

/// Skipped directories never enter the tree, so their images are never listed.
#[test]
fn skipped_directories_are_not_indexed() {
    let tmp = TempDir::new().unwrap();
    build_test_project(tmp.path());

    let tree = build_with_defaults(tmp.path());
    assert!(tree.search(tree.root(), ".git").is_none());
    assert!(tree.search(tree.root(), "node_modules").is_none());
    assert!(tree
        .iter()
        .all(|(_, node)| node.name != "pkg" && node.name != "icon.png"));
}

/// Without skip rules every file on disk is reachable from the root.
#[test]
fn every_file_reachable_without_skip_rules() {
    let tmp = TempDir::new().unwrap();
    build_test_project(tmp.path());

    let tree = build_tree(tmp.path(), |_| false).unwrap();
    for path in [
        "doc/a.md",
        "doc/img/x.png",
        "assets/y.png",
        "img/orphan.png",
        ".git/logo.png",
        "node_modules/pkg/icon.png",
    ] {
        let idx = tree.search(tree.root(), path).unwrap();
        assert!(!tree.node(idx).is_dir, "{path}");
        assert_eq!(tree.absolute_path(idx), path);
    }
}

/// A project without Markdown lists every image, in walk order.
#[test]
fn project_without_markdown_lists_all_images() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("b/two.jpg"), "2");
    write(&tmp.path().join("a/one.png"), "1");
    write(&tmp.path().join("readme.txt"), "not markdown");

    let mut tree = build_with_defaults(tmp.path());
    let images = get_useless_images(
        &mut tree,
        &DiskSource::new(tmp.path()),
        &ImageTypes::new([".png", ".jpg"]),
    )
    .unwrap();

    assert_eq!(images, ["a/one.png", "b/two.jpg"]);
}

/// An empty project yields an empty list, not an error.
#[test]
fn empty_project_has_no_useless_images() {
    let tmp = TempDir::new().unwrap();

    let mut tree = build_with_defaults(tmp.path());
    let images = get_useless_images(
        &mut tree,
        &DiskSource::new(tmp.path()),
        &Config::default().image_types(),
    )
    .unwrap();

    assert!(tree.is_empty());
    assert!(images.is_empty());
}

/// A Markdown file deleted between build and scan fails the whole run.
#[test]
fn markdown_vanishing_after_build_is_fatal() {
    let tmp = TempDir::new().unwrap();
    build_test_project(tmp.path());

    let mut tree = build_with_defaults(tmp.path());
    fs::remove_file(tmp.path().join("doc/a.md")).unwrap();

    let err = get_useless_images(
        &mut tree,
        &DiskSource::new(tmp.path()),
        &Config::default().image_types(),
    )
    .unwrap_err();
    assert!(matches!(err, MarkerError::OpenMarkdown { .. }));
}

/// The config file at the root changes both skip rules and image types.
#[test]
fn project_config_file_is_honoured() {
    let tmp = TempDir::new().unwrap();
    build_test_project(tmp.path());
    write(&tmp.path().join("img/extra.gif"), "g");
    write(
        &tmp.path().join(".marker.json"),
        r#"{ "image_types": [".gif"], "skip_names": ["img"] }"#,
    );

    let config = Config::load(tmp.path()).unwrap();
    let mut tree = build_tree(tmp.path(), config.skip_predicate()).unwrap();
    let images =
        get_useless_images(&mut tree, &DiskSource::new(tmp.path()), &config.image_types())
            .unwrap();

    // `img` is skipped at the root and under `doc`, so x.png never resolves.
    assert!(tree.search(tree.root(), "doc/img").is_none());
    assert!(images.is_empty());
}

/// Listed images can be removed and a second run comes back clean.
#[test]
fn removing_useless_images_leaves_nothing_to_remove() {
    let tmp = TempDir::new().unwrap();
    build_test_project(tmp.path());
    let types = Config::default().image_types();

    let mut tree = build_with_defaults(tmp.path());
    let images = get_useless_images(&mut tree, &DiskSource::new(tmp.path()), &types).unwrap();
    let removed = remove_images(tmp.path(), &images, |_| {}).unwrap();
    assert_eq!(removed, 1);
    assert!(!tmp.path().join("img/orphan.png").exists());

    let mut tree = build_with_defaults(tmp.path());
    count_references(&mut tree, &DiskSource::new(tmp.path())).unwrap();
    assert!(useless_images(&tree, &types).is_empty());
}

/// A Markdown name that is not valid UTF-8 cannot be reopened from its
/// lossy tree name, so the run fails instead of undercounting references.
#[cfg(target_os = "linux")]
#[test]
fn non_utf8_markdown_name_fails_the_run() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = TempDir::new().unwrap();
    let name = OsStr::from_bytes(b"bad\xff.md");
    if fs::write(tmp.path().join(name), "![](x.png)").is_err() {
        // Filesystem rejects non-UTF-8 names; nothing to check.
        return;
    }
    write(&tmp.path().join("x.png"), "x");

    let mut tree = build_with_defaults(tmp.path());
    let err = get_useless_images(
        &mut tree,
        &DiskSource::new(tmp.path()),
        &Config::default().image_types(),
    )
    .unwrap_err();
    assert!(matches!(err, MarkerError::OpenMarkdown { .. }));
}
