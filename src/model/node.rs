//! Node module for N-ary tree representation.
//!
//! Provides [TreeNode], the element-carrying vertex stored in a tree arena,
//! and [NodeId], the handle used to refer to it.

use crate::model::tree_error::TreeError;
use std::fmt;

// =#========================================================================#=
// NODE ID
// =#========================================================================#=
/// Handle of a node in a [Tree](crate::model::Tree) (arena).
///
/// Consists of the slot index and the generation of that slot. Once a node is
/// deleted its slot may be reused, but the generation changes, so an old
/// handle never silently refers to a different node. A slot whose generation
/// reaches `u32::MAX` is retired instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    pub(crate) const fn new(index: usize, generation: u32) -> Self {
        NodeId { index, generation }
    }

    /// Returns the slot index in the arena.
    pub const fn index(self) -> usize {
        self.index
    }

    pub(crate) const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index, self.generation)
    }
}

// =#========================================================================#=
// TREE NODE
// =#========================================================================#=
/// A single vertex of a tree, holding one element.
///
/// # Invariants
/// - `parent` is `None` exactly for the root (or a node not yet placed in a tree)
/// - If `parent` is set, that node lists this node in its `children` exactly once
/// - `children` are exclusively owned by this node; order is insertion order
///
/// Links are [NodeId]s into the arena of the owning tree, so the parent link
/// is a plain observation and never keeps anything alive.
///
/// Child positions as used by [TreeNode::child] are positions in the current
/// order, not identities: deleting a child shifts the positions of its later
/// siblings. Keep the [NodeId] to refer to a node stably.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    data: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl<T> TreeNode<T> {
    /// Creates a standalone node (no parent, no children) holding `data`.
    pub fn new(data: T) -> Self {
        TreeNode {
            data,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Returns a reference to the element.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the element.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Replaces the element, returning the previous one.
    pub fn set_data(&mut self, data: T) -> T {
        std::mem::replace(&mut self.data, data)
    }

    /// Returns the parent, or `None` for a root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the `i`-th child in insertion order.
    ///
    /// # Errors
    /// [IndexOutOfRange](crate::model::TreeErrorType::IndexOutOfRange)
    /// if `i >= self.child_count()`.
    pub fn child(&self, i: usize) -> Result<NodeId, TreeError> {
        self.children
            .get(i)
            .copied()
            .ok_or_else(|| TreeError::index_out_of_range(i, self.children.len()))
    }

    /// Returns all direct children in order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn into_data(self) -> T {
        self.data
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    /// Removes `child` from the children, returning whether it was present.
    pub(crate) fn remove_child(&mut self, child: NodeId) -> bool {
        match self.children.iter().position(|&c| c == child) {
            Some(position) => {
                self.children.remove(position);
                true
            }
            None => false,
        }
    }

    pub(crate) fn take_children(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.children)
    }
}

impl<T: Default> Default for TreeNode<T> {
    /// Creates a standalone node holding `T::default()`.
    fn default() -> Self {
        TreeNode::new(T::default())
    }
}

impl<T> From<T> for TreeNode<T> {
    fn from(data: T) -> Self {
        TreeNode::new(data)
    }
}
