use std::vec;

use super::node::Node;
use crate::types::Entry;

/// Depth-first visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// left, node, right: ascending key order.
    In,
    /// node, left, right: reflects tree shape.
    Pre,
    /// left, right, node.
    Post,
}

/// A finished walk over the tree.
///
/// The walk is done eagerly when the traversal is created, by plain
/// recursion (O(depth) stack). Iterating only hands out the collected
/// `(key, value)` pairs. It cannot be restarted; ask the index for a new
/// one instead.
#[derive(Debug)]
pub struct Traversal<'a> {
    entries: vec::IntoIter<Entry<'a>>,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(root: Option<&'a Node>, order: Order) -> Self {
        let mut out = Vec::new();
        walk(root, order, &mut out);
        Traversal {
            entries: out.into_iter(),
        }
    }

    /// Just the keys, in visiting order.
    pub fn keys(self) -> impl Iterator<Item = &'a str> {
        self.map(|(key, _)| key)
    }
}

fn walk<'a>(node: Option<&'a Node>, order: Order, out: &mut Vec<Entry<'a>>) {
    let Some(node) = node else {
        return;
    };
    let entry = (node.key(), node.value());

    match order {
        Order::In => {
            walk(node.left(), order, out);
            out.push(entry);
            walk(node.right(), order, out);
        }
        Order::Pre => {
            out.push(entry);
            walk(node.left(), order, out);
            walk(node.right(), order, out);
        }
        Order::Post => {
            walk(node.left(), order, out);
            walk(node.right(), order, out);
            out.push(entry);
        }
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for Traversal<'_> {}
