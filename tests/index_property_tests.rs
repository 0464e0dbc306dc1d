// Properties that hold for any sequence of inserts and deletes.

use std::collections::BTreeMap;

use ordered_index::{Node, OrderedIndex};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Debug, Clone)]
enum Op {
    Insert(String, Option<String>),
    Delete(String),
}

fn key() -> impl Strategy<Value = String> {
    // Small alphabet with both cases so collisions under folding are common.
    "[a-dA-D]{0,3}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (key(), proptest::option::of("[0-9]{1,3}")).prop_map(|(k, v)| Op::Insert(k, v)),
        1 => key().prop_map(Op::Delete),
    ]
}

/// Walk the whole tree checking every node sits strictly between its bounds.
fn assert_ordered(node: Option<&Node>, low: Option<&str>, high: Option<&str>) {
    let Some(node) = node else {
        return;
    };
    let folded = node.key().to_lowercase();
    if let Some(low) = low {
        assert!(low.to_lowercase() < folded, "{low} should sort before {}", node.key());
    }
    if let Some(high) = high {
        assert!(folded < high.to_lowercase(), "{} should sort before {high}", node.key());
    }
    assert_ordered(node.left(), low, Some(node.key()));
    assert_ordered(node.right(), Some(node.key()), high);
}

proptest! {
    #[test]
    fn inorder_is_sorted_after_inserts(keys in proptest::collection::vec(key(), 0..40)) {
        let mut index = OrderedIndex::new();
        for k in &keys {
            index.insert(k.clone(), None);
        }

        let folded: Vec<String> = index.inorder().keys().map(str::to_lowercase).collect();
        let mut sorted = folded.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(folded, sorted);
    }

    #[test]
    fn behaves_like_a_folded_map(ops in proptest::collection::vec(op(), 0..60)) {
        let mut index = OrderedIndex::new();
        // folded key -> (stored casing, value)
        let mut model: BTreeMap<String, (String, Option<String>)> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let folded = k.to_lowercase();
                    let expect_new = !model.contains_key(&folded);
                    prop_assert_eq!(index.insert(k.clone(), v.clone()), expect_new);
                    match model.get_mut(&folded) {
                        Some(entry) => entry.1 = v,
                        None => {
                            model.insert(folded, (k.clone(), v));
                        }
                    }

                    // last written value wins
                    let found = index.search(&k.to_uppercase()).unwrap();
                    prop_assert_eq!(found.value(), model[&k.to_lowercase()].1.as_deref());
                }
                Op::Delete(k) => {
                    let before = index.size();
                    let present = model.remove(&k.to_lowercase()).is_some();
                    prop_assert_eq!(index.delete(&k), present);
                    prop_assert!(index.search(&k).is_none());
                    prop_assert_eq!(index.size(), if present { before - 1 } else { before });
                }
            }
            assert_ordered(index.root(), None, None);
        }

        prop_assert_eq!(index.size(), model.len());
        prop_assert_eq!(index.is_empty(), model.is_empty());
        let values: Vec<Option<String>> = index
            .inorder()
            .map(|(_, v)| v.map(str::to_string))
            .collect();
        let expected: Vec<Option<String>> = model.values().map(|(_, v)| v.clone()).collect();
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn traversals_are_permutations(keys in proptest::collection::vec(key(), 0..40)) {
        let mut index = OrderedIndex::new();
        for (i, k) in keys.iter().enumerate() {
            index.insert(k.clone(), Some(i.to_string()));
        }

        let mut ino: Vec<_> = index.inorder().collect();
        let mut pre: Vec<_> = index.preorder().collect();
        let mut post: Vec<_> = index.postorder().collect();
        prop_assert_eq!(ino.len(), index.size());
        prop_assert_eq!(pre.len(), index.size());
        prop_assert_eq!(post.len(), index.size());

        ino.sort();
        pre.sort();
        post.sort();
        prop_assert_eq!(&ino, &pre);
        prop_assert_eq!(&ino, &post);
    }

    #[test]
    fn two_child_delete_promotes_successor(keys in proptest::collection::vec("[a-z]{1,4}", 1..40)) {
        let mut index = OrderedIndex::new();
        for k in &keys {
            index.insert(k.clone(), None);
        }

        let root = index.root().unwrap();
        prop_assume!(root.left().is_some() && root.right().is_some());
        let root_key = root.key().to_string();

        let ordered: Vec<String> = index.inorder().keys().map(str::to_string).collect();
        let position = ordered.iter().position(|k| *k == root_key).unwrap();
        let successor = ordered[position + 1].clone();

        prop_assert!(index.delete(&root_key));
        prop_assert_eq!(index.root().unwrap().key(), successor.as_str());
        assert_ordered(index.root(), None, None);
    }
}

// =============================================================================
// Shuffled bulk load and drain
// =============================================================================
#[test]
fn shuffled_insert_then_shuffled_delete() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut keys: Vec<String> = (0..500).map(|i| format!("Contact{i:03}")).collect();
    keys.shuffle(&mut rng);

    let mut index = OrderedIndex::new();
    for k in &keys {
        assert!(index.insert(k.clone(), Some(k.to_uppercase())));
    }
    assert_eq!(index.size(), keys.len());

    keys.shuffle(&mut rng);
    for (i, k) in keys.iter().enumerate() {
        assert!(index.delete(&k.to_lowercase()));
        assert_eq!(index.size(), keys.len() - i - 1);
        assert_ordered(index.root(), None, None);
    }
    assert!(index.is_empty());
}
