//! # Ordered Index
//!
//! An in-memory ordered key-value index over text keys, built as a plain
//! (unbalanced) binary search tree, plus the contact-manager console that
//! drives it.
//!
//! ## Core idea
//! Keys are compared after Unicode lowercase folding but stored exactly as
//! first typed. `"john"` and `"John"` are the same entry; whichever casing
//! arrived first is the one you see in listings.
//!
//! The tree never rebalances. Its shape is whatever the insertion order
//! made it, which is the point: the traversals and the sideways printer
//! show that shape directly.

pub mod error;
pub mod shell;
pub mod tree;
pub mod types;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use shell::{Options, Shell};
pub use tree::node::Node;
pub use tree::traversal::{Order, Traversal};
pub use tree::{OrderedIndex, Stats};
