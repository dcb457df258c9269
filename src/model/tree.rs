//! Provides the generic N-ary tree container.
//!
//! Provides core data structures for representing trees:
//! * [`Tree<T>`] - Owning tree using the arena pattern, generic over the element type
//! * [BreadthFirstIter], [PreOrderIter], [PostOrderIter] as lazy traversals

use crate::model::handle::{NodeMut, NodeRef};
use crate::model::node::{NodeId, TreeNode};
use crate::model::queue::Queue;
use crate::model::tree_error::{TreeError, TreeErrorType};
use log::debug;
use std::collections::HashMap;

/// Slot of the arena; `generation` advances whenever its node is released.
///
/// A slot released at generation `u32::MAX` stays empty for good.
#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    node: Option<TreeNode<T>>,
}

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// An N-ary tree represented using the arena pattern on [TreeNode].
///
/// Nodes are stored in a contiguous vector of slots and referenced by
/// [NodeId]. The tree is the sole owner of every node; each node owns its
/// children, while the parent link is a plain id and owns nothing.
///
/// # Structure
/// - The root is supplied at construction and has no parent for the whole
///   lifetime of the tree.
/// - Slots of deleted nodes are reused; their generation changes, so ids of
///   deleted nodes are recognized as stale.
/// - Dropping the tree drops every node exactly once (flat, no recursion).
///
/// # Construction
/// Create the tree from a root node, then attach children with
/// [`Tree::add_child()`] or through a [NodeMut], e.g. within a
/// [BreadthFirstBuilder](crate::model::BreadthFirstBuilder).
///
/// # Example
/// ```
/// use ntree::model::{Tree, TreeNode};
///
/// let mut tree = Tree::new(TreeNode::new("root"));
/// let root = tree.root_id();
/// let a = tree.add_child(root, "a").unwrap();
/// let b = tree.add_child(root, "b").unwrap();
/// tree.add_child(a, "a.0").unwrap();
///
/// let mut visited = Vec::new();
/// tree.breadth_first_traverse(|data| visited.push(*data));
/// assert_eq!(visited, ["root", "a", "b", "a.0"]);
/// assert_eq!(tree[b].parent(), Some(root));
/// ```
#[derive(Debug, Clone)]
pub struct Tree<T> {
    /// Nodes of this tree (arena pattern)
    slots: Vec<Slot<T>>,

    /// Indices of released slots, ready for reuse
    free: Vec<usize>,

    /// Id of the root of this tree
    root_id: NodeId,

    /// Number of live nodes
    num_nodes: usize,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl<T> Tree<T> {
    /// Creates a new tree owning `root`.
    ///
    /// # Panics
    /// Panics if `root` carries links, i.e. was taken from another tree.
    /// Use [`Tree::try_new()`] to get an error instead.
    pub fn new(root: TreeNode<T>) -> Self {
        Self::with_capacity(root, 1)
    }

    /// Creates a new tree owning `root`, with room for `capacity` nodes.
    ///
    /// # Panics
    /// Panics if `root` carries links.
    pub fn with_capacity(root: TreeNode<T>, capacity: usize) -> Self {
        match Self::try_with_capacity(root, capacity) {
            Ok(tree) => tree,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a new tree owning `root`.
    ///
    /// # Errors
    /// [InvalidOwnership](TreeErrorType::InvalidOwnership) if `root` has a
    /// parent or children, since those links belong to another tree.
    pub fn try_new(root: TreeNode<T>) -> Result<Self, TreeError> {
        Self::try_with_capacity(root, 1)
    }

    fn try_with_capacity(root: TreeNode<T>, capacity: usize) -> Result<Self, TreeError> {
        if !root.is_root() || !root.is_leaf() {
            return Err(TreeError::without_node(TreeErrorType::InvalidOwnership));
        }

        let mut slots = Vec::with_capacity(capacity.max(1));
        slots.push(Slot { generation: 0, node: Some(root) });
        Ok(Tree {
            slots,
            free: Vec::new(),
            root_id: NodeId::new(0, 0),
            num_nodes: 1,
        })
    }

    /// Returns the id of the root.
    pub fn root_id(&self) -> NodeId {
        self.root_id
    }

    /// Returns a read handle on the root.
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef::new(self, self.root_id, &self[self.root_id])
    }

    /// Returns a write handle on the root.
    pub fn root_mut(&mut self) -> NodeMut<'_, T> {
        let root_id = self.root_id;
        NodeMut::new(self, root_id)
    }

    /// Returns a read handle on the node with `id`.
    ///
    /// # Errors
    /// [NodeNotFound](TreeErrorType::NodeNotFound) if `id` is stale or foreign.
    pub fn get(&self, id: NodeId) -> Result<NodeRef<'_, T>, TreeError> {
        let node = self.checked(id)?;
        Ok(NodeRef::new(self, id, node))
    }

    /// Returns a write handle on the node with `id`.
    ///
    /// # Errors
    /// [NodeNotFound](TreeErrorType::NodeNotFound) if `id` is stale or foreign.
    pub fn get_mut(&mut self, id: NodeId) -> Result<NodeMut<'_, T>, TreeError> {
        self.checked(id)?;
        Ok(NodeMut::new(self, id))
    }

    /// Returns the node with `id`, or `None` if `id` is stale or foreign.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
    }

    /// Returns the element of `id` mutably.
    ///
    /// # Errors
    /// [NodeNotFound](TreeErrorType::NodeNotFound) if `id` is stale or foreign.
    pub fn data_mut(&mut self, id: NodeId) -> Result<&mut T, TreeError> {
        self.node_mut(id)
            .map(TreeNode::data_mut)
            .ok_or_else(|| TreeError::node_not_found(id))
    }

    /// Links are maintained by the tree only, so nodes are never handed out mutably.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode<T>> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
    }

    /// Returns whether `id` refers to a live node of this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Returns number of live nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the `i`-th child of `parent`.
    ///
    /// # Errors
    /// - [NodeNotFound](TreeErrorType::NodeNotFound) if `parent` is stale
    /// - [IndexOutOfRange](TreeErrorType::IndexOutOfRange) if `i` is too large
    pub fn child(&self, parent: NodeId, i: usize) -> Result<NodeId, TreeError> {
        self.checked(parent)?
            .child(i)
            .map_err(|err| err.with_node(parent))
    }

    /// Returns the depth of `id`, root having depth 0.
    ///
    /// # Errors
    /// [NodeNotFound](TreeErrorType::NodeNotFound) if `id` is stale or foreign.
    pub fn depth(&self, id: NodeId) -> Result<usize, TreeError> {
        let mut depth = 0;
        let mut current = self.checked(id)?;
        while let Some(parent) = current.parent() {
            depth += 1;
            current = &self[parent];
        }
        Ok(depth)
    }

    /// Checked node access, failing with [NodeNotFound](TreeErrorType::NodeNotFound).
    pub(crate) fn checked(&self, id: NodeId) -> Result<&TreeNode<T>, TreeError> {
        self.node(id).ok_or_else(|| TreeError::node_not_found(id))
    }
}

impl<T: Default> Default for Tree<T> {
    /// Creates a tree whose root holds `T::default()`.
    fn default() -> Self {
        Tree::new(TreeNode::default())
    }
}

impl<T> std::ops::Index<NodeId> for Tree<T> {
    type Output = TreeNode<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.node(id) {
            Some(node) => node,
            None => panic!("{}", TreeError::node_not_found(id)),
        }
    }
}

impl<T> Tree<T> {
    /// Mutable counterpart of indexing, for ids known to be live.
    pub(crate) fn linked_mut(&mut self, id: NodeId) -> &mut TreeNode<T> {
        match self.node_mut(id) {
            Some(node) => node,
            None => panic!("{}", TreeError::node_not_found(id)),
        }
    }
}

// ============================================================================
// Structural changes (pub)
// ============================================================================
impl<T> Tree<T> {
    /// Creates a child of `parent` holding `data`, appended after its
    /// existing children, and returns its id.
    ///
    /// Afterwards `tree[child].parent() == Some(parent)` and
    /// `tree.child(parent, last) == Ok(child)`.
    ///
    /// # Errors
    /// [NodeNotFound](TreeErrorType::NodeNotFound) if `parent` is stale or foreign.
    pub fn add_child(&mut self, parent: NodeId, data: T) -> Result<NodeId, TreeError> {
        self.checked(parent)?;
        Ok(self.attach(parent, data))
    }

    /// Creates a child of `parent` holding `T::default()`.
    ///
    /// # Errors
    /// [NodeNotFound](TreeErrorType::NodeNotFound) if `parent` is stale or foreign.
    pub fn add_default_child(&mut self, parent: NodeId) -> Result<NodeId, TreeError>
    where
        T: Default,
    {
        self.add_child(parent, T::default())
    }

    /// Deletes all descendants of `id`, bottom-up; `id` itself stays, childless.
    ///
    /// Calling this on a leaf is a no-op.
    ///
    /// # Returns
    /// Number of deleted nodes.
    ///
    /// # Errors
    /// [NodeNotFound](TreeErrorType::NodeNotFound) if `id` is stale or foreign.
    pub fn delete_children(&mut self, id: NodeId) -> Result<usize, TreeError> {
        let children = match self.node_mut(id) {
            Some(node) => node.take_children(),
            None => return Err(TreeError::node_not_found(id)),
        };

        let deleted = self.release_subtrees(children);
        if deleted > 0 {
            debug!("Deleted {deleted} descendants of {id}");
        }
        Ok(deleted)
    }

    /// Deletes `id` together with all its descendants and returns its element.
    ///
    /// The node is first unlinked from its parent, then the subtree is
    /// released bottom-up. Later siblings move one position forward.
    ///
    /// # Errors
    /// - [NodeNotFound](TreeErrorType::NodeNotFound) if `id` is stale or foreign
    /// - [InvalidOwnership](TreeErrorType::InvalidOwnership) if `id` is the root,
    ///   which is owned by the tree itself
    pub fn delete_subtree(&mut self, id: NodeId) -> Result<T, TreeError> {
        self.detach(id)?;

        let children = self.linked_mut(id).take_children();
        let deleted = self.release_subtrees(children) + 1;
        let node = self.release(id).ok_or_else(|| TreeError::node_not_found(id))?;
        debug!("Deleted subtree of {deleted} nodes rooted at {id}");
        Ok(node.into_data())
    }

    /// Detaches the subtree rooted at `id` and returns it as a tree of its own.
    ///
    /// Children keep their order; ids of moved nodes become stale in `self`.
    ///
    /// # Errors
    /// - [NodeNotFound](TreeErrorType::NodeNotFound) if `id` is stale or foreign
    /// - [InvalidOwnership](TreeErrorType::InvalidOwnership) if `id` is the root
    pub fn split_off(&mut self, id: NodeId) -> Result<Tree<T>, TreeError> {
        self.detach(id)?;

        // Pre-order: every parent is moved before its children
        let order: Vec<NodeId> = self.pre_order_ids(id);
        let root = self.release(id).ok_or_else(|| TreeError::node_not_found(id))?;
        let mut split = Tree::with_capacity(TreeNode::new(root.into_data()), order.len());
        let mut moved: HashMap<NodeId, NodeId> = HashMap::with_capacity(order.len());
        moved.insert(id, split.root_id());

        for old_id in order.into_iter().skip(1) {
            let node = self
                .release(old_id)
                .ok_or_else(|| TreeError::node_not_found(old_id))?;
            let new_parent = node
                .parent()
                .and_then(|old_parent| moved.get(&old_parent).copied())
                .ok_or_else(|| TreeError::node_not_found(old_id))?;
            let new_id = split.attach(new_parent, node.into_data());
            moved.insert(old_id, new_id);
        }

        debug!("Split off {} nodes rooted at {id}", moved.len());
        Ok(split)
    }
}

// ============================================================================
// Arena management (private)
// ============================================================================
impl<T> Tree<T> {
    /// Creates a linked child of the live node `parent`.
    pub(crate) fn attach(&mut self, parent: NodeId, data: T) -> NodeId {
        let mut node = TreeNode::new(data);
        node.set_parent(Some(parent));
        let child = self.allocate(node);
        self.linked_mut(parent).push_child(child);
        child
    }

    /// Unlinks non-root `id` from its parent.
    fn detach(&mut self, id: NodeId) -> Result<(), TreeError> {
        let parent = self
            .checked(id)?
            .parent()
            .ok_or_else(|| TreeError::invalid_ownership(id))?;
        self.linked_mut(parent).remove_child(id);
        self.linked_mut(id).set_parent(None);
        Ok(())
    }

    fn allocate(&mut self, node: TreeNode<T>) -> NodeId {
        self.num_nodes += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId::new(index, slot.generation)
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot { generation: 0, node: Some(node) });
                NodeId::new(index, 0)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Option<TreeNode<T>> {
        let slot = self
            .slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())?;
        let node = slot.node.take()?;
        // A slot whose generation is exhausted is retired, never reused
        if let Some(generation) = slot.generation.checked_add(1) {
            slot.generation = generation;
            self.free.push(id.index());
        }
        self.num_nodes -= 1;
        Some(node)
    }

    /// Releases the subtrees rooted at `tops`, descendants before ancestors.
    ///
    /// Uses an explicit worklist, so depth is not limited by the call stack.
    fn release_subtrees(&mut self, tops: Vec<NodeId>) -> usize {
        let mut order = Vec::new();
        let mut stack = tops;
        while let Some(id) = stack.pop() {
            if let Some(node) = self.node(id) {
                stack.extend_from_slice(node.children());
                order.push(id);
            }
        }

        // Reversed pre-order puts every node after all of its descendants
        for &id in order.iter().rev() {
            self.release(id);
        }
        order.len()
    }

    pub(crate) fn pre_order_ids(&self, start: NodeId) -> Vec<NodeId> {
        PreOrderIter::new(self, start).map(|node| node.id()).collect()
    }

    pub(crate) fn post_order_ids(&self, start: NodeId) -> Vec<NodeId> {
        PostOrderIter::new(self, start).map(|node| node.id()).collect()
    }
}

// =$========================================================================$=
// TRAVERSALS
// =$========================================================================$=
impl<T> Tree<T> {
    /// Applies `visit` to every element in breadth-first (level) order.
    ///
    /// Starting with the root, all nodes of depth 1 are visited left to right,
    /// then all nodes of depth 2, etc.
    pub fn breadth_first_traverse<F: FnMut(&T)>(&self, visit: F) {
        self.root().breadth_first_traverse(visit);
    }

    /// Applies `visit` to every element in pre-order (parents before children).
    pub fn pre_order_traverse<F: FnMut(&T)>(&self, visit: F) {
        self.root().pre_order_traverse(visit);
    }

    /// Applies `visit` to every element in post-order (children before parents).
    pub fn post_order_traverse<F: FnMut(&T)>(&self, visit: F) {
        self.root().post_order_traverse(visit);
    }

    /// Fallible [`Tree::breadth_first_traverse()`]; stops at and returns the first error.
    pub fn try_breadth_first_traverse<E, F>(&self, visit: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        self.root().try_breadth_first_traverse(visit)
    }

    /// Fallible [`Tree::pre_order_traverse()`]; stops at and returns the first error.
    pub fn try_pre_order_traverse<E, F>(&self, visit: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        self.root().try_pre_order_traverse(visit)
    }

    /// Fallible [`Tree::post_order_traverse()`]; stops at and returns the first error.
    pub fn try_post_order_traverse<E, F>(&self, visit: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        self.root().try_post_order_traverse(visit)
    }

    /// Applies `visit` to every element mutably in post-order.
    ///
    /// Meant for releasing resources held by elements before the nodes
    /// holding them are deleted. The shape of the tree cannot change here;
    /// run such a pass before [`Tree::delete_children()`], never interleaved.
    pub fn post_order_traverse_mut<F: FnMut(&mut T)>(&mut self, visit: F) {
        self.root_mut().post_order_traverse_mut(visit);
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl<T> Tree<T> {
    /// Returns an iterator over the tree in breadth-first order.
    pub fn breadth_first_iter(&self) -> BreadthFirstIter<'_, T> {
        BreadthFirstIter::new(self, self.root_id)
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// Pre-order traversal visits each node before visiting its children.
    /// This is useful for propagating data from root to leaves.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self, self.root_id)
    }

    /// Returns an iterator over the tree in post-order (children before parents).
    ///
    /// Post-order traversal visits each node's children before the node itself.
    /// This is useful for aggregating data from leaves upward or for cleanup.
    pub fn post_order_iter(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(self, self.root_id)
    }
}

/// Iterator for breadth-first traversal, driven by a [Queue].
pub struct BreadthFirstIter<'a, T> {
    tree: &'a Tree<T>,
    queue: Queue<NodeId>,
}

impl<'a, T> BreadthFirstIter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, start: NodeId) -> Self {
        let mut queue = Queue::new();
        if tree.contains(start) {
            queue.enqueue(start);
        }
        BreadthFirstIter { tree, queue }
    }
}

impl<'a, T> Iterator for BreadthFirstIter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.dequeue().ok()?;
        let node = self.tree.node(id)?;
        self.queue.extend(node.children().iter().copied());
        Some(NodeRef::new(self.tree, id, node))
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
pub struct PreOrderIter<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> PreOrderIter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, start: NodeId) -> Self {
        let mut stack = Vec::new();
        if tree.contains(start) {
            stack.push(start);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id)?;

        // Push children in reverse, so the first child is processed first
        self.stack.extend(node.children().iter().rev().copied());

        Some(NodeRef::new(self.tree, id, node))
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited after all its descendants have been visited.
pub struct PostOrderIter<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<(NodeId, bool)>, // (id, children_pushed)
}

impl<'a, T> PostOrderIter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, start: NodeId) -> Self {
        let mut stack = Vec::new();
        if tree.contains(start) {
            stack.push((start, false));
        }
        PostOrderIter { tree, stack }
    }
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, children_pushed)) = self.stack.pop() {
            let node = self.tree.node(id)?;

            if children_pushed || node.is_leaf() {
                return Some(NodeRef::new(self.tree, id, node));
            }

            self.stack.push((id, true));
            self.stack
                .extend(node.children().iter().rev().map(|&child| (child, false)));
        }
        None
    }
}
