//! Minimal FIFO container driving breadth-first traversal and construction.

use crate::model::tree_error::TreeError;
use std::collections::VecDeque;

// =#========================================================================#=
// QUEUE
// =#========================================================================#=
/// First-in, first-out queue.
///
/// Elements are enqueued at the tail and dequeued from the head; no other
/// access order is offered, so level-by-level visitation stays correct.
///
/// # Example
/// ```
/// use ntree::model::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.front(), Ok(&1));
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(2));
/// assert!(queue.is_empty());
/// assert!(queue.dequeue().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Queue<X> {
    items: VecDeque<X>,
}

impl<X> Queue<X> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: VecDeque::with_capacity(capacity) }
    }

    /// Appends `item` at the tail.
    pub fn enqueue(&mut self, item: X) {
        self.items.push_back(item);
    }

    /// Removes and returns the head element.
    ///
    /// # Errors
    /// [EmptyQueue](crate::model::TreeErrorType::EmptyQueue) if the queue is empty.
    pub fn dequeue(&mut self) -> Result<X, TreeError> {
        self.items.pop_front().ok_or_else(TreeError::empty_queue)
    }

    /// Returns the head element without removing it.
    ///
    /// # Errors
    /// [EmptyQueue](crate::model::TreeErrorType::EmptyQueue) if the queue is empty.
    pub fn front(&self) -> Result<&X, TreeError> {
        self.items.front().ok_or_else(TreeError::empty_queue)
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns number of queued elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<X> Default for Queue<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X> Extend<X> for Queue<X> {
    fn extend<I: IntoIterator<Item = X>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
