pub mod node;
pub mod render;
pub mod traversal;

use std::cmp::Ordering;

use tracing::debug;

use crate::types::{compare_folded, fold, Key, Value};
use node::{Link, Node};
use traversal::{Order, Traversal};

/// In-memory ordered index over text keys. An unbalanced binary search tree.
///
/// Keys compare case-insensitively but are stored with their original
/// casing. Re-inserting a key under different casing replaces the value
/// and leaves the stored key alone.
///
/// No rebalancing ever happens: the shape is a pure function of the
/// insertion order, and sorted input degrades into a linked list.
/// Every operation is O(depth), which is O(n) in that worst case.
///
/// Mutations take `&mut self`, so callers are serialised by the borrow
/// checker. Each recursive step takes ownership of a subtree and hands
/// back the new owning link, and the parent reattaches it before
/// returning, so the ordering invariant holds between any two calls.
#[derive(Debug, Default)]
pub struct OrderedIndex {
    root: Link,
}

/// Summary figures behind the console's statistics screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub size: usize,
    pub is_empty: bool,
    /// Smallest key in folded order, `None` when empty.
    pub first: Option<String>,
    /// Largest key in folded order, `None` when empty.
    pub last: Option<String>,
}

impl OrderedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        OrderedIndex { root: None }
    }

    /// Insert a key, or overwrite the value of an existing one.
    ///
    /// Returns `true` when a new node was created, `false` when a key that
    /// already existed (case-insensitively) had its value replaced. The
    /// stored casing of an existing key is never changed here.
    ///
    /// A `None` value is stored as-is; it does not delete anything.
    pub fn insert(&mut self, key: impl Into<Key>, value: Value) -> bool {
        let key = key.into();
        let folded = fold(&key);
        let (root, is_new) = insert_into(self.root.take(), &folded, key, value);
        self.root = Some(root);

        if is_new {
            debug!(key = %folded, "inserted new key");
        } else {
            debug!(key = %folded, "updated existing key");
        }
        is_new
    }

    /// Look a key up case-insensitively.
    pub fn search(&self, key: &str) -> Option<&Node> {
        fn search_in<'a>(node: Option<&'a Node>, folded: &str) -> Option<&'a Node> {
            let node = node?;
            match compare_folded(folded, &node.key) {
                Ordering::Equal => Some(node),
                Ordering::Less => search_in(node.left.as_deref(), folded),
                Ordering::Greater => search_in(node.right.as_deref(), folded),
            }
        }
        search_in(self.root.as_deref(), &fold(key))
    }

    /// Whether a key is present, ignoring case.
    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Remove a key. Returns `false` (and changes nothing) if it is absent.
    ///
    /// A node with two children is not unlinked itself: it takes over the
    /// key and value of its inorder successor, and the successor's node
    /// is spliced out of the right subtree instead. The surviving node
    /// therefore adopts the successor's casing.
    pub fn delete(&mut self, key: &str) -> bool {
        let folded = fold(key);
        let (root, deleted) = delete_from(self.root.take(), &folded);
        self.root = root;

        if deleted {
            debug!(key = %folded, "deleted key");
        }
        deleted
    }

    /// Entries in ascending case-insensitive key order.
    pub fn inorder(&self) -> Traversal<'_> {
        self.traverse(Order::In)
    }

    /// Entries in node, left, right order. Mirrors insertion structure.
    pub fn preorder(&self) -> Traversal<'_> {
        self.traverse(Order::Pre)
    }

    /// Entries in left, right, node order.
    pub fn postorder(&self) -> Traversal<'_> {
        self.traverse(Order::Post)
    }

    /// Walk the tree in the given order. Computed fresh on every call.
    pub fn traverse(&self, order: Order) -> Traversal<'_> {
        Traversal::new(self.root.as_deref(), order)
    }

    /// Number of entries. Counts a full inorder walk; nothing is cached.
    pub fn size(&self) -> usize {
        self.inorder().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The entry with the smallest key.
    pub fn first(&self) -> Option<&Node> {
        self.root.as_deref().map(Node::leftmost)
    }

    /// The entry with the largest key.
    pub fn last(&self) -> Option<&Node> {
        self.root.as_deref().map(Node::rightmost)
    }

    pub fn stats(&self) -> Stats {
        Stats {
            size: self.size(),
            is_empty: self.is_empty(),
            first: self.first().map(|n| n.key.clone()),
            last: self.last().map(|n| n.key.clone()),
        }
    }

    /// The root node, for inspecting tree shape.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }
}

/// Insert below `link`, returning the subtree's new root and whether a
/// node was created.
fn insert_into(link: Link, folded: &str, key: Key, value: Value) -> (Box<Node>, bool) {
    let Some(mut node) = link else {
        return (Node::leaf(key, value), true);
    };

    let is_new = match compare_folded(folded, &node.key) {
        Ordering::Less => {
            let (child, is_new) = insert_into(node.left.take(), folded, key, value);
            node.left = Some(child);
            is_new
        }
        Ordering::Greater => {
            let (child, is_new) = insert_into(node.right.take(), folded, key, value);
            node.right = Some(child);
            is_new
        }
        Ordering::Equal => {
            // value only; the stored key keeps its first-seen casing
            node.value = value;
            false
        }
    };
    (node, is_new)
}

/// Delete below `link`, returning the subtree's replacement link and
/// whether anything was removed.
fn delete_from(link: Link, folded: &str) -> (Link, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };

    match compare_folded(folded, &node.key) {
        Ordering::Less => {
            let (child, deleted) = delete_from(node.left.take(), folded);
            node.left = child;
            (Some(node), deleted)
        }
        Ordering::Greater => {
            let (child, deleted) = delete_from(node.right.take(), folded);
            node.right = child;
            (Some(node), deleted)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => (right, true),
            (left, None) => (left, true),
            (Some(left), Some(right)) => {
                let (right, successor) = detach_leftmost(right);
                let Node { key, value, .. } = *successor;
                node.key = key;
                node.value = value;
                node.left = Some(left);
                node.right = right;
                (Some(node), true)
            }
        },
    }
}

/// Unlink the leftmost node of a subtree.
///
/// Returns the subtree without it, plus the detached node. The leftmost
/// node has no left child, so it is replaced by its right child.
fn detach_leftmost(mut node: Box<Node>) -> (Link, Box<Node>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = detach_leftmost(left);
            node.left = rest;
            (Some(node), min)
        }
    }
}
