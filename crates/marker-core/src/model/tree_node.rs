/// A single node in the arena-allocated project tree.
///
/// Nodes are stored in a flat `Vec<TreeNode>`. Parent-child relationships
/// use indices rather than pointers, so the parent link is a plain back
/// reference that never owns anything.
use compact_str::CompactString;
use std::collections::HashMap;

/// Lightweight index into the arena `Vec<TreeNode>`.
///
/// Uses `u32` to keep nodes small. A project tree with more than four
/// billion entries is not something this tool will ever see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Create a new `NodeIndex` from a `usize`.
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "NodeIndex overflow");
        Self(index as u32)
    }

    /// Return the index as a `usize` for Vec indexing.
    #[inline]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A single file or directory in the tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Entry name only (NOT the full path).
    /// Root-relative paths are rebuilt on demand by walking up via `parent`.
    pub name: CompactString,

    /// `true` if this node represents a directory. Fixed at creation.
    pub is_dir: bool,

    /// Number of resolved Markdown image links pointing at this file.
    /// Always 0 for directories.
    pub reference_count: u32,

    /// Index of the enclosing directory. `None` only for the root.
    pub parent: Option<NodeIndex>,

    /// Children in discovery order.
    pub children: Vec<NodeIndex>,

    /// Name → child lookup, kept in sync with `children`.
    lookup: HashMap<CompactString, NodeIndex>,
}

impl TreeNode {
    /// Create a new file node.
    pub fn new_file(name: CompactString, parent: Option<NodeIndex>) -> Self {
        Self::new(name, false, parent)
    }

    /// Create a new directory node.
    pub fn new_dir(name: CompactString, parent: Option<NodeIndex>) -> Self {
        Self::new(name, true, parent)
    }

    fn new(name: CompactString, is_dir: bool, parent: Option<NodeIndex>) -> Self {
        Self {
            name,
            is_dir,
            reference_count: 0,
            parent,
            children: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Look up a direct child by exact name.
    #[inline]
    pub fn child(&self, name: &str) -> Option<NodeIndex> {
        self.lookup.get(name).copied()
    }

    /// Register `child` under `name`. The caller guarantees the name is new.
    pub(crate) fn attach(&mut self, name: CompactString, child: NodeIndex) {
        debug_assert!(!self.lookup.contains_key(&name), "duplicate child name");
        self.children.push(child);
        self.lookup.insert(name, child);
    }
}
