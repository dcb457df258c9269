//! Data model for generic N-ary trees.
//!
//! # Tree representation
//! Trees are represented by [Tree], which uses the arena pattern to store
//! [TreeNode]s referenced by [NodeId]. Each node owns its children (in
//! insertion order) and knows its parent by id only, so no reference cycles
//! arise and dropping a tree frees every node exactly once.
//!
//! | Type | Role |
//! |------|------|
//! | [Tree] | Owns the arena and the root; runs traversals |
//! | [TreeNode] | Element plus parent and child links |
//! | [NodeRef] / [NodeMut] | Borrowed read / write view of one node |
//! | [Queue] | FIFO driving breadth-first traversal and construction |
//!
//! # Building trees
//! Attach children one by one via [`Tree::add_child`], or grow a tree
//! level by level with a [BreadthFirstBuilder] from a predicate and a
//! child factory.
//!
//! # Traversals
//! Breadth-first, pre-order and post-order, each as a visitor method
//! (`*_traverse`, fallible `try_*_traverse`) and as a lazy iterator
//! (`*_iter`). All are iterative, so tree depth is not limited by the call
//! stack. A visitor sees elements only, never the shape; to release
//! resources held by elements, run [`Tree::post_order_traverse_mut`]
//! before deleting the nodes.

pub mod builder;
pub mod handle;
pub mod node;
pub mod queue;
pub mod tree;
pub mod tree_error;

pub use builder::BreadthFirstBuilder;
pub use builder::BuildReport;
pub use handle::NodeMut;
pub use handle::NodeRef;
pub use node::NodeId;
pub use node::TreeNode;
pub use queue::Queue;
pub use tree::Tree;
pub use tree_error::TreeError;
pub use tree_error::TreeErrorType;
