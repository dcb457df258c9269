use criterion::{Criterion, criterion_group, criterion_main};
use ntree::model::{BreadthFirstBuilder, NodeMut, Tree, TreeNode};
use std::hint::black_box;

const SIZE_ROOTS: &[(&str, usize)] = &[("size-8", 8), ("size-11", 11), ("size-13", 13)];

fn size_tree(root: usize) -> Tree<usize> {
    let mut tree = Tree::new(TreeNode::new(root));
    BreadthFirstBuilder::new(
        |value: &usize| *value > 1,
        |node: &mut NodeMut<'_, usize>| {
            for i in 0..*node.data() {
                node.add_child(i);
            }
        },
    )
    .build(&mut tree);
    tree
}

fn building(c: &mut Criterion) {
    for (name, root) in SIZE_ROOTS {
        c.bench_function(&format!("build {name}"), |b| {
            b.iter(|| size_tree(black_box(*root)));
        });
    }
}

fn traversing(c: &mut Criterion) {
    for (name, root) in SIZE_ROOTS {
        let tree = size_tree(*root);
        c.bench_function(&format!("breadth-first {name}"), |b| {
            b.iter(|| {
                let mut sum = 0;
                tree.breadth_first_traverse(|value| sum += value);
                black_box(sum)
            });
        });
        c.bench_function(&format!("post-order {name}"), |b| {
            b.iter(|| {
                let mut sum = 0;
                tree.post_order_traverse(|value| sum += value);
                black_box(sum)
            });
        });
    }
}

fn deleting(c: &mut Criterion) {
    for (name, root) in SIZE_ROOTS {
        let tree = size_tree(*root);
        c.bench_function(&format!("delete children {name}"), |b| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| {
                    let root_id = tree.root_id();
                    black_box(tree.delete_children(root_id))
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
}

criterion_group!(regression, building, traversing);
criterion_group! {
    name = reporting;
    config = Criterion::default().sample_size(10);
    targets = deleting
}
criterion_main!(regression, reporting);
