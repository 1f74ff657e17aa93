/// Data model for the marker project tree.
///
/// Re-exports the arena-allocated tree structure and supporting types.
pub mod project_tree;
pub mod tree_node;

pub use project_tree::{ProjectTree, ROOT_NAME, SEPARATOR};
pub use tree_node::{NodeIndex, TreeNode};
