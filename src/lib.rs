//! Ntree is a library providing a generic N-ary tree container.
//!
//! Core functionality provided:
//! - Tree model: [Tree] owns a root [TreeNode] and, transitively, every node
//!   below it. Nodes live in an arena and are referenced by [NodeId]; each
//!   node owns its children and refers to its parent by id only.
//! - Traversals: breadth-first, pre-order and post-order, each with a visitor
//!   closure or as a lazy iterator, from the root or from any node.
//! - Construction: attach children one by one, or grow a tree breadth-first
//!   from a predicate and a child factory with a
//!   [BreadthFirstBuilder](crate::model::BreadthFirstBuilder).
//! - Deletion: delete all descendants of a node, delete a whole subtree, or
//!   split a subtree off into a tree of its own. All bottom-up and iterative.
//!
//! Limitations:
//! - Strict trees only (no shared children, no cycles)
//! - No ordering or search semantics
//! - Single-threaded use; synchronize externally if needed
//!
//! # Usage patterns
//! 1. The quick function [build_tree] builds a whole tree from a root element.
//! 2. Configure a [BreadthFirstBuilder](crate::model::BreadthFirstBuilder)
//!    yourself for depth limits, fallible child factories, or to grow a tree
//!    from an inner node.
//!
//! ## Example
//! ```
//! use ntree::build_tree;
//!
//! let tree = build_tree(
//!     5_usize,
//!     |value| *value > 1,
//!     |node| {
//!         for i in 0..*node.data() {
//!             node.add_child(i);
//!         }
//!     },
//! );
//!
//! let mut values = Vec::new();
//! tree.breadth_first_traverse(|value| values.push(*value));
//! assert_eq!(&values[..6], [5, 0, 1, 2, 3, 4]);
//! ```

pub mod model;

use crate::model::BreadthFirstBuilder;
use crate::model::NodeMut;
pub use crate::model::{NodeId, Tree, TreeError, TreeNode};

// ============================================================================
// Quick API
// ============================================================================
/// Builds a tree breadth-first from `root`, using default settings.
///
/// Every node whose element satisfies `can_expand` is handed to `populate`,
/// which attaches its children.
///
/// See [BreadthFirstBuilder] for full documentation.
pub fn build_tree<T, P, F>(root: T, can_expand: P, populate: F) -> Tree<T>
where
    P: FnMut(&T) -> bool,
    F: FnMut(&mut NodeMut<'_, T>),
{
    let mut tree = Tree::new(TreeNode::new(root));
    BreadthFirstBuilder::new(can_expand, populate).build(&mut tree);
    tree
}
