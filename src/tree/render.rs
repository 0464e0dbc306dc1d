use std::fmt;

use super::node::Node;
use super::OrderedIndex;

/// Line printed for a tree with no nodes.
pub const EMPTY_TREE: &str = "Tree is empty.";

// Connector glyphs
const RIGHT_EDGE: &str = "┌── ";
const LEFT_EDGE: &str = "└── ";
const BAR: &str = "│   ";
const GAP: &str = "    ";

impl OrderedIndex {
    /// Draw the tree sideways, one line per node.
    ///
    /// Right subtrees are drawn above their parent and left subtrees
    /// below, so reading top to bottom goes from the largest key to the
    /// smallest. Indentation grows by one column group per level:
    ///
    /// ```text
    /// │       ┌── T
    /// │   ┌── M
    /// │   │   └── D
    /// └── B
    ///     └── A
    /// ```
    pub fn render(&self) -> Vec<String> {
        let Some(root) = self.root() else {
            return vec![EMPTY_TREE.to_string()];
        };
        let mut lines = Vec::new();
        render_node(root, "", true, &mut lines);
        lines
    }
}

/// Right subtree, then this node, then left subtree.
///
/// `is_left` says which side of its parent the node hangs on; the root is
/// treated as a left child.
fn render_node(node: &Node, prefix: &str, is_left: bool, lines: &mut Vec<String>) {
    if let Some(right) = node.right() {
        let child_prefix = format!("{prefix}{}", if is_left { BAR } else { GAP });
        render_node(right, &child_prefix, false, lines);
    }

    let edge = if is_left { LEFT_EDGE } else { RIGHT_EDGE };
    lines.push(format!("{prefix}{edge}{}", node.key()));

    if let Some(left) = node.left() {
        let child_prefix = format!("{prefix}{}", if is_left { GAP } else { BAR });
        render_node(left, &child_prefix, true, lines);
    }
}

impl fmt::Display for OrderedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
