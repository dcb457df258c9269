//! Borrowed handles on a single node within its tree.
//!
//! * [NodeRef] - read access to a node, its relatives and its subtree
//! * [NodeMut] - write access to a node's element and its children

use crate::model::node::{NodeId, TreeNode};
use crate::model::tree::{BreadthFirstIter, PostOrderIter, PreOrderIter, Tree};
use crate::model::tree_error::TreeError;

// =#========================================================================#=
// NODE REF
// =#========================================================================#=
/// Read handle on a live node of a [Tree].
///
/// Traversals started from a handle cover the subtree rooted at this node,
/// which makes a node usable as the root of a traversal without creating a
/// second tree over it.
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
    node: &'a TreeNode<T>,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, id: NodeId, node: &'a TreeNode<T>) -> Self {
        NodeRef { tree, id, node }
    }

    /// Returns the id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the element.
    pub fn data(&self) -> &'a T {
        self.node.data()
    }

    /// Returns the underlying node.
    pub fn node(&self) -> &'a TreeNode<T> {
        self.node
    }

    /// Returns the tree this node lives in.
    pub fn tree(&self) -> &'a Tree<T> {
        self.tree
    }

    /// Returns the parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        let parent = self.node.parent()?;
        self.tree.get(parent).ok()
    }

    /// Returns the number of direct children.
    pub fn child_count(&self) -> usize {
        self.node.child_count()
    }

    /// Returns the `i`-th child in insertion order.
    ///
    /// # Errors
    /// [IndexOutOfRange](crate::model::TreeErrorType::IndexOutOfRange)
    /// if `i >= self.child_count()`.
    pub fn child(&self, i: usize) -> Result<NodeRef<'a, T>, TreeError> {
        let child = self.node.child(i).map_err(|err| err.with_node(self.id))?;
        self.tree.get(child)
    }

    /// Returns an iterator over the direct children in order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, T>> + use<'a, T> {
        let tree = self.tree;
        self.node
            .children()
            .iter()
            .filter_map(move |&child| tree.get(child).ok())
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Returns `true` if this node is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.node.is_root()
    }

    /// Returns an iterator over this subtree in breadth-first order.
    pub fn breadth_first_iter(&self) -> BreadthFirstIter<'a, T> {
        BreadthFirstIter::new(self.tree, self.id)
    }

    /// Returns an iterator over this subtree in pre-order.
    pub fn pre_order_iter(&self) -> PreOrderIter<'a, T> {
        PreOrderIter::new(self.tree, self.id)
    }

    /// Returns an iterator over this subtree in post-order.
    pub fn post_order_iter(&self) -> PostOrderIter<'a, T> {
        PostOrderIter::new(self.tree, self.id)
    }

    /// Applies `visit` to every element of this subtree in breadth-first order.
    pub fn breadth_first_traverse<F: FnMut(&T)>(&self, mut visit: F) {
        self.breadth_first_iter().for_each(|node| visit(node.data()));
    }

    /// Applies `visit` to every element of this subtree in pre-order.
    pub fn pre_order_traverse<F: FnMut(&T)>(&self, mut visit: F) {
        self.pre_order_iter().for_each(|node| visit(node.data()));
    }

    /// Applies `visit` to every element of this subtree in post-order.
    pub fn post_order_traverse<F: FnMut(&T)>(&self, mut visit: F) {
        self.post_order_iter().for_each(|node| visit(node.data()));
    }

    /// Breadth-first traversal stopping at the first error of `visit`.
    pub fn try_breadth_first_traverse<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        self.breadth_first_iter().try_for_each(|node| visit(node.data()))
    }

    /// Pre-order traversal stopping at the first error of `visit`.
    pub fn try_pre_order_traverse<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        self.pre_order_iter().try_for_each(|node| visit(node.data()))
    }

    /// Post-order traversal stopping at the first error of `visit`.
    pub fn try_post_order_traverse<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        self.post_order_iter().try_for_each(|node| visit(node.data()))
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    /// Handles are equal if they refer to the same node of the same tree.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.tree, other.tree)
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("data", self.node.data())
            .finish()
    }
}

// =#========================================================================#=
// NODE MUT
// =#========================================================================#=
/// Write handle on a live node of a [Tree].
///
/// This is what a child factory of a
/// [BreadthFirstBuilder](crate::model::BreadthFirstBuilder) receives: it can
/// set the element and attach children, each linked to this node as parent.
pub struct NodeMut<'a, T> {
    tree: &'a mut Tree<T>,
    id: NodeId,
}

impl<'a, T> NodeMut<'a, T> {
    /// `id` must be live in `tree`.
    pub(crate) fn new(tree: &'a mut Tree<T>, id: NodeId) -> Self {
        NodeMut { tree, id }
    }

    fn node(&self) -> &TreeNode<T> {
        &self.tree[self.id]
    }

    /// Returns the id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the element.
    pub fn data(&self) -> &T {
        self.node().data()
    }

    /// Returns the element mutably.
    pub fn data_mut(&mut self) -> &mut T {
        self.tree.linked_mut(self.id).data_mut()
    }

    /// Replaces the element, returning the previous one.
    pub fn set_data(&mut self, data: T) -> T {
        self.tree.linked_mut(self.id).set_data(data)
    }

    /// Returns the parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.node().parent()
    }

    /// Returns the number of direct children.
    pub fn child_count(&self) -> usize {
        self.node().child_count()
    }

    /// Returns the `i`-th child in insertion order.
    ///
    /// # Errors
    /// [IndexOutOfRange](crate::model::TreeErrorType::IndexOutOfRange)
    /// if `i >= self.child_count()`.
    pub fn child(&self, i: usize) -> Result<NodeId, TreeError> {
        self.node().child(i).map_err(|err| err.with_node(self.id))
    }

    /// Returns a write handle on the `i`-th child.
    ///
    /// # Errors
    /// [IndexOutOfRange](crate::model::TreeErrorType::IndexOutOfRange)
    /// if `i >= self.child_count()`.
    pub fn child_mut(&mut self, i: usize) -> Result<NodeMut<'_, T>, TreeError> {
        let child = self.child(i)?;
        Ok(NodeMut::new(&mut *self.tree, child))
    }

    /// Creates a child holding `data`, appended after the existing children.
    pub fn add_child(&mut self, data: T) -> NodeId {
        self.tree.attach(self.id, data)
    }

    /// Creates a child holding `T::default()`.
    pub fn add_default_child(&mut self) -> NodeId
    where
        T: Default,
    {
        self.add_child(T::default())
    }

    /// Deletes all descendants, bottom-up; returns the number of deleted nodes.
    ///
    /// # Panics
    /// Panics if the node of this handle is no longer live.
    pub fn delete_children(&mut self) -> usize {
        match self.tree.delete_children(self.id) {
            Ok(deleted) => deleted,
            Err(err) => panic!("{err}"),
        }
    }

    /// Applies `visit` to every element of this subtree mutably, in post-order.
    pub fn post_order_traverse_mut<F: FnMut(&mut T)>(&mut self, mut visit: F) {
        for id in self.tree.post_order_ids(self.id) {
            visit(self.tree.linked_mut(id).data_mut());
        }
    }

    /// Returns a read handle on this node.
    pub fn as_node_ref(&self) -> NodeRef<'_, T> {
        let tree: &Tree<T> = &*self.tree;
        NodeRef::new(tree, self.id, &tree[self.id])
    }

    /// Returns the tree this node lives in.
    pub fn tree(&self) -> &Tree<T> {
        &*self.tree
    }
}
