use anyhow::{Result, bail};
use clap::Parser;
use log::info;
use ntree::model::{BreadthFirstBuilder, NodeMut, Tree, TreeNode};

/// Builds sample trees and prints their traversals before and after deleting a subtree.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Root value of the numeric tree; a node valued n gets children 0..n
    #[arg(long, default_value_t = 5)]
    size_root: usize,

    /// Root digit of the text tree; a node "d" gets children "0".."d-1"
    #[arg(long, default_value_t = '5')]
    text_root: char,

    /// Text elements below this digit are released before their nodes are deleted
    #[arg(long, default_value_t = '4')]
    prune_below: char,

    /// Do not expand nodes at or below this depth
    #[arg(long)]
    max_depth: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if !args.text_root.is_ascii_digit() || !args.prune_below.is_ascii_digit() {
        bail!("text root and prune digit must be ASCII digits");
    }

    run_size_tree(&args)?;
    run_text_tree(&args)?;
    Ok(())
}

fn run_size_tree(args: &Args) -> Result<()> {
    let mut tree = Tree::new(TreeNode::new(args.size_root));
    let mut builder = BreadthFirstBuilder::new(
        |value: &usize| *value > 1,
        |node: &mut NodeMut<'_, usize>| {
            for i in 0..*node.data() {
                node.add_child(i);
            }
        },
    );
    if let Some(max_depth) = args.max_depth {
        builder = builder.with_max_depth(max_depth);
    }
    let report = builder.build(&mut tree);
    info!("Numeric tree: {} nodes, {} expanded", tree.num_nodes(), report.expanded);
    print_traversals("After construction,", &tree, |value| value.to_string());

    // Last child of the root has the most descendants
    let Some(last) = tree.root().child_count().checked_sub(1) else {
        return Ok(());
    };
    let target = tree.child(tree.root_id(), last)?;
    let deleted = tree.delete_children(target)?;
    info!("Deleted {deleted} nodes below {target}");
    print_traversals("After deleteChildren call,", &tree, |value| value.to_string());
    Ok(())
}

/// Elements start out unset, as with a default-constructed node.
type Text = Option<String>;

fn run_text_tree(args: &Args) -> Result<()> {
    let mut tree: Tree<Text> = Tree::default();
    *tree.root_mut().data_mut() = Some(args.text_root.to_string());

    let mut builder = BreadthFirstBuilder::new(
        |text: &Text| first_char(text) > '1',
        |node: &mut NodeMut<'_, Text>| {
            let end = first_char(node.data());
            for digit in '0'..end {
                let position = node.child_count();
                node.add_default_child();
                if let Ok(mut child) = node.child_mut(position) {
                    child.set_data(Some(digit.to_string()));
                }
            }
        },
    );
    if let Some(max_depth) = args.max_depth {
        builder = builder.with_max_depth(max_depth);
    }
    builder.build(&mut tree);
    print_traversals("After construction,", &tree, show_text);

    let Some(last) = tree.root().child_count().checked_sub(1) else {
        return Ok(());
    };
    let target = tree.child(tree.root_id(), last)?;

    // Release elements first, then delete the nodes holding them
    let prune_below = args.prune_below;
    tree.get_mut(target)?.post_order_traverse_mut(|text| {
        if first_char(text) < prune_below {
            text.take();
        }
    });
    tree.delete_children(target)?;
    print_traversals("After deleteChildren call,", &tree, show_text);

    let mut released = 0;
    tree.post_order_traverse_mut(|text| {
        if text.take().is_some() {
            released += 1;
        }
    });
    info!("Released {released} text elements");
    Ok(())
}

fn first_char(text: &Text) -> char {
    text.as_deref().and_then(|text| text.chars().next()).unwrap_or('0')
}

fn show_text(text: &Text) -> String {
    text.clone().unwrap_or_else(|| "-".to_string())
}

/// Runs a traversal of the whole tree with the given visitor.
type Traversal<T> = fn(&Tree<T>, &mut dyn FnMut(&T));

fn print_traversals<T, S>(title: &str, tree: &Tree<T>, show: S)
where
    S: Fn(&T) -> String,
{
    println!("{title}");
    let orders: [(&str, Traversal<T>); 3] = [
        ("Breadth-first", |tree, visit| tree.breadth_first_traverse(visit)),
        ("Pre-order", |tree, visit| tree.pre_order_traverse(visit)),
        ("Post-order", |tree, visit| tree.post_order_traverse(visit)),
    ];
    for (name, traverse) in orders {
        let mut line = String::new();
        traverse(tree, &mut |value| line.push_str(&format!(" {}", show(value))));
        println!("    {name} traversal:{line}");
    }
    println!();
}
