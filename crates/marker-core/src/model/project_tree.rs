/// Arena-backed project tree with relative-path resolution.
///
/// All nodes live in a single `Vec<TreeNode>`. The root is always at index 0
/// and is named `.`. Nodes are appended in discovery order and never
/// removed, so iterating the arena front to back replays the walk that
/// built it.
use super::tree_node::{NodeIndex, TreeNode};
use compact_str::CompactString;

/// Name given to the root node.
pub const ROOT_NAME: &str = ".";

/// Path separator used for reference resolution and rendered paths.
pub const SEPARATOR: char = '/';

/// The in-memory index of every retained file and directory under a root.
#[derive(Debug, Clone)]
pub struct ProjectTree {
    /// Arena: every node in a flat vector, root first.
    nodes: Vec<TreeNode>,
}

impl Default for ProjectTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectTree {
    /// Create a tree holding only the root directory.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create a tree with pre-allocated arena capacity.
    pub fn with_capacity(estimated_nodes: usize) -> Self {
        let mut nodes = Vec::with_capacity(estimated_nodes.max(1));
        nodes.push(TreeNode::new_dir(CompactString::new(ROOT_NAME), None));
        Self { nodes }
    }

    /// Index of the root directory.
    #[inline]
    pub fn root(&self) -> NodeIndex {
        NodeIndex(0)
    }

    /// Insert a path given as segments, creating missing nodes on the way.
    ///
    /// Existing nodes are reused untouched, so inserting the same path twice
    /// returns the same index and keeps its reference count. Intermediate
    /// nodes created here are directories; only the last segment takes
    /// `is_dir`. Empty and `.` segments are ignored.
    pub fn insert<I, S>(&mut self, segments: I, is_dir: bool) -> NodeIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments = segments
            .into_iter()
            .filter(|s| {
                let name: &str = s.as_ref();
                !name.is_empty() && name != ROOT_NAME
            })
            .peekable();

        let mut current = self.root();
        while let Some(segment) = segments.next() {
            let name: &str = segment.as_ref();
            current = match self.nodes[current.idx()].child(name) {
                Some(existing) => existing,
                None => {
                    let leaf = segments.peek().is_none();
                    self.add_child(current, CompactString::new(name), !leaf || is_dir)
                }
            };
        }
        current
    }

    /// Insert a `/`-delimited root-relative path.
    pub fn insert_path(&mut self, path: &str, is_dir: bool) -> NodeIndex {
        self.insert(path.split(SEPARATOR), is_dir)
    }

    /// Allocate a node and attach it under `parent`.
    fn add_child(&mut self, parent: NodeIndex, name: CompactString, is_dir: bool) -> NodeIndex {
        let idx = NodeIndex::new(self.nodes.len());
        let node = if is_dir {
            TreeNode::new_dir(name.clone(), Some(parent))
        } else {
            TreeNode::new_file(name.clone(), Some(parent))
        };
        self.nodes.push(node);
        self.nodes[parent.idx()].attach(name, idx);
        idx
    }

    /// Resolve a relative path starting from `from`.
    ///
    /// Segments are processed left to right: `.` stays put, `..` moves to
    /// the parent (a no-op at the root), anything else must name an existing
    /// child. The first missing child aborts the whole lookup with `None`.
    pub fn search(&self, from: NodeIndex, path: &str) -> Option<NodeIndex> {
        let mut current = from;
        for segment in path.split(SEPARATOR) {
            match segment {
                "." => {}
                ".." => {
                    if let Some(parent) = self.nodes[current.idx()].parent {
                        current = parent;
                    }
                }
                name => current = self.nodes[current.idx()].child(name)?,
            }
        }
        Some(current)
    }

    /// Reconstruct the root-relative path for a node by walking up to the root.
    ///
    /// The root itself renders as `.`.
    pub fn absolute_path(&self, index: NodeIndex) -> String {
        let mut segments = Vec::new();
        let mut current = index;
        while let Some(parent) = self.nodes[current.idx()].parent {
            segments.push(self.nodes[current.idx()].name.as_str());
            current = parent;
        }
        if segments.is_empty() {
            return ROOT_NAME.to_string();
        }
        segments.reverse();
        segments.join("/")
    }

    /// Number of edges between `index` and the root; 0 for the root itself.
    pub fn depth(&self, index: NodeIndex) -> usize {
        let mut depth = 0;
        let mut current = index;
        while let Some(parent) = self.nodes[current.idx()].parent {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Increment the reference count of a file node.
    ///
    /// Returns `false` without counting when `index` is a directory.
    pub fn add_reference(&mut self, index: NodeIndex) -> bool {
        let node = &mut self.nodes[index.idx()];
        if node.is_dir {
            return false;
        }
        node.reference_count += 1;
        true
    }

    /// Look up a direct child of `parent` by name.
    #[inline]
    pub fn child(&self, parent: NodeIndex, name: &str) -> Option<NodeIndex> {
        self.nodes[parent.idx()].child(name)
    }

    /// Direct children of a node in discovery order.
    #[inline]
    pub fn children(&self, parent: NodeIndex) -> &[NodeIndex] {
        &self.nodes[parent.idx()].children
    }

    /// Parent of a node, `None` for the root.
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.nodes[index.idx()].parent
    }

    /// Get the node at the given index.
    #[inline]
    pub fn node(&self, index: NodeIndex) -> &TreeNode {
        &self.nodes[index.idx()]
    }

    /// Every node with its index, in discovery order (root first).
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &TreeNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex::new(i), node))
    }

    /// Total number of nodes in the tree, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds nothing but the root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }
}
