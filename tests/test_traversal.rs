mod common;

use common::{breadth_first, post_order, pre_order, size_tree};
use ntree::model::{NodeId, Tree, TreeNode};
use proptest::prelude::*;

const SIZE_5_BREADTH_FIRST: [usize; 24] = [
    5, 0, 1, 2, 3, 4, 0, 1, 0, 1, 2, 0, 1, 2, 3, 0, 1, 0, 1, 0, 1, 2, 0, 1,
];
const SIZE_5_PRE_ORDER: [usize; 24] = [
    5, 0, 1, 2, 0, 1, 3, 0, 1, 2, 0, 1, 4, 0, 1, 2, 0, 1, 3, 0, 1, 2, 0, 1,
];
const SIZE_5_POST_ORDER: [usize; 24] = [
    0, 1, 0, 1, 2, 0, 1, 0, 1, 2, 3, 0, 1, 0, 1, 2, 0, 1, 0, 1, 2, 3, 4, 5,
];

#[test]
fn test_traversals_after_construction() {
    let tree = size_tree(5);
    assert_eq!(breadth_first(&tree), SIZE_5_BREADTH_FIRST);
    assert_eq!(pre_order(&tree), SIZE_5_PRE_ORDER);
    assert_eq!(post_order(&tree), SIZE_5_POST_ORDER);
}

#[test]
fn test_traversals_after_delete_children() {
    let mut tree = size_tree(5);
    let fourth = tree.child(tree.root_id(), 4).unwrap();
    tree.get_mut(fourth).unwrap().delete_children();

    assert_eq!(breadth_first(&tree), [5, 0, 1, 2, 3, 4, 0, 1, 0, 1, 2, 0, 1]);
    assert_eq!(pre_order(&tree), [5, 0, 1, 2, 0, 1, 3, 0, 1, 2, 0, 1, 4]);
    assert_eq!(post_order(&tree), [0, 1, 0, 1, 2, 0, 1, 0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_iterators_match_traversals() {
    let tree = size_tree(5);
    let bfs: Vec<usize> = tree.breadth_first_iter().map(|node| *node.data()).collect();
    let pre: Vec<usize> = tree.pre_order_iter().map(|node| *node.data()).collect();
    let post: Vec<usize> = tree.post_order_iter().map(|node| *node.data()).collect();
    assert_eq!(bfs, SIZE_5_BREADTH_FIRST);
    assert_eq!(pre, SIZE_5_PRE_ORDER);
    assert_eq!(post, SIZE_5_POST_ORDER);
}

#[test]
fn test_traversal_from_inner_node() {
    let tree = size_tree(5);
    let three = tree.root().child(3).unwrap();

    let mut visited = Vec::new();
    three.breadth_first_traverse(|value| visited.push(*value));
    assert_eq!(visited, [3, 0, 1, 2, 0, 1]);

    visited.clear();
    three.post_order_traverse(|value| visited.push(*value));
    assert_eq!(visited, [0, 1, 0, 1, 2, 3]);

    visited.clear();
    three.pre_order_traverse(|value| visited.push(*value));
    assert_eq!(visited, [3, 0, 1, 2, 0, 1]);
}

#[test]
fn test_single_node_traversals() {
    let tree = Tree::new(TreeNode::new('r'));
    assert_eq!(breadth_first(&tree), ['r']);
    assert_eq!(pre_order(&tree), ['r']);
    assert_eq!(post_order(&tree), ['r']);
}

#[test]
fn test_try_traverse_stops_at_first_error() {
    let tree = size_tree(5);
    let mut visited = Vec::new();
    let result = tree.try_pre_order_traverse(|value| {
        if *value == 3 {
            return Err(format!("cannot visit {value}"));
        }
        visited.push(*value);
        Ok(())
    });
    assert_eq!(result, Err(String::from("cannot visit 3")));
    assert_eq!(visited, [5, 0, 1, 2, 0, 1]);

    assert_eq!(tree.try_breadth_first_traverse(|_| Ok::<(), ()>(())), Ok(()));
    assert_eq!(tree.try_post_order_traverse(|value| if *value == 5 { Err(*value) } else { Ok(()) }), Err(5));
}

#[test]
fn test_post_order_mut_releases_before_delete() {
    let mut tree: Tree<Option<String>> = Tree::default();
    let root = tree.root_id();
    *tree.data_mut(root).unwrap() = Some(String::from("2"));
    let zero = tree.add_child(root, Some(String::from("0"))).unwrap();
    let one = tree.add_child(root, Some(String::from("1"))).unwrap();
    tree.add_child(one, Some(String::from("0"))).unwrap();

    let mut order = Vec::new();
    tree.get_mut(one).unwrap().post_order_traverse_mut(|text| order.extend(text.take()));
    assert_eq!(order, ["0", "1"]);
    tree.delete_children(one).unwrap();

    let mut remaining = Vec::new();
    tree.breadth_first_traverse(|text| remaining.push(text.clone()));
    assert_eq!(remaining, [Some(String::from("2")), Some(String::from("0")), None]);

    tree.post_order_traverse_mut(|text| *text = None);
    assert!(tree[zero].data().is_none());
    assert!(tree.root().data().is_none());
}

#[test]
fn test_node_ref_relatives() {
    let tree = size_tree(4);
    let three = tree.root().child(3).unwrap();
    let children: Vec<usize> = three.children().map(|child| *child.data()).collect();
    assert_eq!(children, [0, 1, 2]);
    assert_eq!(three.parent(), Some(tree.root()));
    assert!(!three.is_leaf());
    assert!(three.child(0).unwrap().is_leaf());
}

// ============= Properties =============

/// Builds a tree from a parent choice per node: node `i + 1` hangs below
/// node `choices[i] % (i + 1)`, so every shape is reachable.
fn tree_from_choices(choices: &[usize]) -> (Tree<usize>, Vec<NodeId>) {
    let mut tree = Tree::new(TreeNode::new(0));
    let mut ids = vec![tree.root_id()];
    for (i, choice) in choices.iter().enumerate() {
        let parent = ids[choice % (i + 1)];
        ids.push(tree.add_child(parent, i + 1).unwrap());
    }
    (tree, ids)
}

proptest! {
    #[test]
    fn prop_traversals_visit_every_node_once(choices in prop::collection::vec(any::<usize>(), 0..200)) {
        let (tree, _) = tree_from_choices(&choices);
        let expected: Vec<usize> = (0..=choices.len()).collect();

        for mut visited in [breadth_first(&tree), pre_order(&tree), post_order(&tree)] {
            visited.sort_unstable();
            prop_assert_eq!(&visited, &expected);
        }
    }

    #[test]
    fn prop_children_link_back_to_parent(choices in prop::collection::vec(any::<usize>(), 0..200)) {
        let (tree, ids) = tree_from_choices(&choices);
        prop_assert!(tree.root().parent().is_none());

        for &id in &ids {
            let node = &tree[id];
            for i in 0..node.child_count() {
                let child = node.child(i).unwrap();
                prop_assert_eq!(tree[child].parent(), Some(id));
            }
            if let Some(parent) = node.parent() {
                let occurrences = tree[parent].children().iter().filter(|&&c| c == id).count();
                prop_assert_eq!(occurrences, 1);
            }
        }
    }

    #[test]
    fn prop_delete_children_leaves_no_descendant(
        choices in prop::collection::vec(any::<usize>(), 1..200),
        target in any::<usize>(),
    ) {
        let (mut tree, ids) = tree_from_choices(&choices);
        let target = ids[target % ids.len()];
        let descendants: Vec<NodeId> = tree.get(target).unwrap().pre_order_iter().skip(1).map(|node| node.id()).collect();
        let before = tree.num_nodes();

        prop_assert_eq!(tree.delete_children(target).unwrap(), descendants.len());
        prop_assert_eq!(tree[target].child_count(), 0);
        prop_assert_eq!(tree.num_nodes(), before - descendants.len());
        prop_assert!(descendants.iter().all(|&id| !tree.contains(id)));
        prop_assert_eq!(tree.breadth_first_iter().count(), tree.num_nodes());
    }
}
