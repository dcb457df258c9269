//! Breadth-first construction of trees.
//!
//! A [BreadthFirstBuilder] grows a tree level by level from two callbacks:
//! - a predicate `can_expand(&T) -> bool` deciding whether a node gets children
//! - a child factory `populate(&mut NodeMut<T>)` attaching those children
//!
//! Nodes are expanded strictly when they are dequeued, and children are only
//! enqueued by their own parent's dequeue, so every reachable node is visited
//! exactly once and expanded at most once.
//!
//! # Example
//! ```
//! use ntree::model::{BreadthFirstBuilder, NodeMut, Tree, TreeNode};
//!
//! // Node valued `n` gets children valued `0..n`
//! let mut tree = Tree::new(TreeNode::new(3_usize));
//! let report = BreadthFirstBuilder::new(
//!     |value: &usize| *value > 1,
//!     |node: &mut NodeMut<'_, usize>| {
//!         for i in 0..*node.data() {
//!             node.add_child(i);
//!         }
//!     },
//! )
//! .build(&mut tree);
//!
//! let mut values = Vec::new();
//! tree.breadth_first_traverse(|value| values.push(*value));
//! assert_eq!(values, [3, 0, 1, 2, 0, 1]);
//! assert_eq!(report.expanded, 2);
//! ```

use crate::model::handle::NodeMut;
use crate::model::node::NodeId;
use crate::model::queue::Queue;
use crate::model::tree::Tree;
use crate::model::tree_error::TreeError;
use log::{debug, trace};

/// Counts gathered during one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildReport {
    /// Nodes dequeued, including the start node
    pub visited: usize,
    /// Nodes handed to the child factory
    pub expanded: usize,
}

// =#========================================================================#=
// BREADTH FIRST BUILDER
// =#========================================================================T=
/// Grows a tree breadth-first from a predicate and a child factory.
///
/// The predicate must not depend on the tree shape; the factory may attach
/// any number of children (including none) and set their elements.
///
/// # Configuration
/// - [`with_max_depth`](Self::with_max_depth): nodes at or below the given
///   depth (relative to the start node) are not expanded.
pub struct BreadthFirstBuilder<P, F> {
    can_expand: P,
    populate: F,
    max_depth: Option<usize>,
}

impl<P, F> BreadthFirstBuilder<P, F> {
    /// Creates a builder from the predicate and the child factory.
    pub fn new(can_expand: P, populate: F) -> Self {
        Self {
            can_expand,
            populate,
            max_depth: None,
        }
    }

    /// Stops expansion at `max_depth` below the start node.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Builds from the root of `tree`.
    pub fn build<T>(&mut self, tree: &mut Tree<T>) -> BuildReport
    where
        P: FnMut(&T) -> bool,
        F: FnMut(&mut NodeMut<'_, T>),
    {
        let root_id = tree.root_id();
        // The root is always live
        self.build_from(tree, root_id).unwrap_or_default()
    }

    /// Builds from the node `start` of `tree`.
    ///
    /// # Errors
    /// [NodeNotFound](crate::model::TreeErrorType::NodeNotFound) if `start` is stale.
    pub fn build_from<T>(&mut self, tree: &mut Tree<T>, start: NodeId) -> Result<BuildReport, TreeError>
    where
        P: FnMut(&T) -> bool,
        F: FnMut(&mut NodeMut<'_, T>),
    {
        let Self { can_expand, populate, max_depth } = self;
        expand_breadth_first(
            tree,
            start,
            *max_depth,
            can_expand,
            &mut |node: &mut NodeMut<'_, T>| {
                populate(node);
                Ok::<(), TreeError>(())
            },
        )
    }

    /// Builds from the root of `tree` with a fallible child factory.
    ///
    /// # Errors
    /// The first error of the child factory, unchanged.
    pub fn try_build<T, E>(&mut self, tree: &mut Tree<T>) -> Result<BuildReport, E>
    where
        P: FnMut(&T) -> bool,
        F: FnMut(&mut NodeMut<'_, T>) -> Result<(), E>,
        E: From<TreeError>,
    {
        let root_id = tree.root_id();
        self.try_build_from(tree, root_id)
    }

    /// Builds from the node `start` of `tree` with a fallible child factory.
    ///
    /// # Errors
    /// - The first error of the child factory, unchanged
    /// - [NodeNotFound](crate::model::TreeErrorType::NodeNotFound) if `start` is stale
    pub fn try_build_from<T, E>(&mut self, tree: &mut Tree<T>, start: NodeId) -> Result<BuildReport, E>
    where
        P: FnMut(&T) -> bool,
        F: FnMut(&mut NodeMut<'_, T>) -> Result<(), E>,
        E: From<TreeError>,
    {
        let Self { can_expand, populate, max_depth } = self;
        expand_breadth_first(tree, start, *max_depth, can_expand, populate)
    }
}

fn expand_breadth_first<T, P, F, E>(
    tree: &mut Tree<T>,
    start: NodeId,
    max_depth: Option<usize>,
    can_expand: &mut P,
    populate: &mut F,
) -> Result<BuildReport, E>
where
    P: FnMut(&T) -> bool,
    F: FnMut(&mut NodeMut<'_, T>) -> Result<(), E>,
    E: From<TreeError>,
{
    let mut report = BuildReport::default();
    let mut queue = Queue::new();
    tree.checked(start)?;
    queue.enqueue((start, 0_usize));

    while !queue.is_empty() {
        let (id, depth) = queue.dequeue()?;
        report.visited += 1;

        let below_limit = max_depth.is_none_or(|max_depth| depth < max_depth);
        let mut node = tree.get_mut(id)?;
        if below_limit && can_expand(node.data()) {
            populate(&mut node)?;
            report.expanded += 1;
            trace!("Expanded {id} at depth {depth} into {} children", node.child_count());
        }

        queue.extend(tree[id].children().iter().map(|&child| (child, depth + 1)));
    }

    debug!(
        "Built tree from {start}: visited {} nodes, expanded {}",
        report.visited, report.expanded
    );
    Ok(report)
}
