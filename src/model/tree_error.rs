//! Error types for the tree container and its queue.
//!
//! This module provides [TreeError] and [TreeErrorType] for representing
//! contract violations when accessing or restructuring a [Tree](crate::model::Tree).

use crate::model::node::NodeId;
use std::error::Error;
use std::fmt;

// =#========================================================================#=
// TREE ERROR TYPE
// =#========================================================================€=
/// Error types that can occur when working with a tree or queue.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum TreeErrorType {
    /// `dequeue` or `front` on an empty queue
    EmptyQueue,
    /// Child position at or beyond the child count
    IndexOutOfRange { index: usize, child_count: usize },
    /// Attempt to destroy or detach the root owned by the tree
    InvalidOwnership,
    /// Stale or foreign node id
    NodeNotFound,
}

// =#========================================================================#=
// TREE ERROR
// =#========================================================================$=
/// Tree error with the offending node, if one is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeError {
    kind: TreeErrorType,
    node: Option<NodeId>,
}

impl TreeError {
    /// Create a TreeError from an error type and the node it concerns
    pub fn at_node(kind: TreeErrorType, node: NodeId) -> Self {
        Self { kind, node: Some(node) }
    }

    /// Create a TreeError not tied to any node
    pub fn without_node(kind: TreeErrorType) -> Self {
        Self { kind, node: None }
    }

    /// Convenience constructor for EmptyQueue
    pub fn empty_queue() -> Self {
        Self::without_node(TreeErrorType::EmptyQueue)
    }

    /// Convenience constructor for IndexOutOfRange
    pub fn index_out_of_range(index: usize, child_count: usize) -> Self {
        Self::without_node(TreeErrorType::IndexOutOfRange { index, child_count })
    }

    /// Convenience constructor for InvalidOwnership
    pub fn invalid_ownership(node: NodeId) -> Self {
        Self::at_node(TreeErrorType::InvalidOwnership, node)
    }

    /// Convenience constructor for NodeNotFound
    pub fn node_not_found(node: NodeId) -> Self {
        Self::at_node(TreeErrorType::NodeNotFound, node)
    }

    /// Attaches the node this error concerns
    pub(crate) fn with_node(mut self, node: NodeId) -> Self {
        self.node = Some(node);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> &TreeErrorType {
        &self.kind
    }

    /// Get the node the error concerns, if known
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            TreeErrorType::EmptyQueue => write!(f, "Queue is empty")?,
            TreeErrorType::IndexOutOfRange { index, child_count } => write!(
                f,
                "Child index {index} out of range - node has {child_count} children"
            )?,
            TreeErrorType::InvalidOwnership => {
                write!(f, "Invalid ownership - root is owned by its tree")?
            }
            TreeErrorType::NodeNotFound => write!(f, "Node not found - id is stale or foreign")?,
        }

        if let Some(node) = self.node {
            write!(f, " ({node})")?;
        }

        Ok(())
    }
}

impl Error for TreeError {}
