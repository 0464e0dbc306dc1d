use crate::types::{Key, Value};

/// Owned link to a subtree. `None` is an empty slot.
pub(crate) type Link = Option<Box<Node>>;

/// A single node in the tree.
///
/// Each child is exclusively owned through a `Box`, so the node graph is a
/// strict tree: no sharing, no cycles, and dropping a node drops its whole
/// subtree.
///
/// ```text
///              ┌──────────────┐
///              │ key: "Bob"   │
///              │ value: "1"   │
///              └──┬────────┬──┘
///          left   │        │   right
///      ┌──────────▼──┐  ┌──▼──────────┐
///      │ key: "alice"│  │ key: "Carol"│
///      └─────────────┘  └─────────────┘
/// ```
#[derive(Debug)]
pub struct Node {
    pub(crate) key: Key,
    pub(crate) value: Value,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn leaf(key: Key, value: Value) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }

    /// The stored key, with the casing it was first inserted under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The payload, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Leftmost node of this subtree.
    pub(crate) fn leftmost(&self) -> &Node {
        let mut current = self;
        while let Some(next) = current.left.as_deref() {
            current = next;
        }
        current
    }

    /// Rightmost node of this subtree.
    pub(crate) fn rightmost(&self) -> &Node {
        let mut current = self;
        while let Some(next) = current.right.as_deref() {
            current = next;
        }
        current
    }
}
