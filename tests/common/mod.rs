#![allow(dead_code)]

use ntree::model::{BreadthFirstBuilder, NodeMut, Tree, TreeNode};

/// Tree where a node valued `n > 1` has children valued `0..n`.
pub fn size_tree(root: usize) -> Tree<usize> {
    let mut tree = Tree::new(TreeNode::new(root));
    BreadthFirstBuilder::new(is_not_leaf_size, create_size_nodes).build(&mut tree);
    tree
}

pub fn is_not_leaf_size(value: &usize) -> bool {
    *value > 1
}

pub fn create_size_nodes(node: &mut NodeMut<'_, usize>) {
    for i in 0..*node.data() {
        let child = node.add_child(i);
        assert_eq!(node.child(i), Ok(child), "parent not linked to its child");
        assert_eq!(node.tree()[child].parent(), Some(node.id()), "child not linked to its parent");
    }
}

pub fn breadth_first<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut visited = Vec::new();
    tree.breadth_first_traverse(|data| visited.push(data.clone()));
    visited
}

pub fn pre_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut visited = Vec::new();
    tree.pre_order_traverse(|data| visited.push(data.clone()));
    visited
}

pub fn post_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut visited = Vec::new();
    tree.post_order_traverse(|data| visited.push(data.clone()));
    visited
}
