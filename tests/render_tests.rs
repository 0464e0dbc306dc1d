// Structural printer: right subtree above, left subtree below.

use ordered_index::OrderedIndex;

// =============================================================================
// Test 1: Empty tree
// =============================================================================
#[test]
fn empty_tree_renders_one_line() {
    let index = OrderedIndex::new();
    assert_eq!(index.render(), ["Tree is empty."]);
}

// =============================================================================
// Test 2: Single node
// =============================================================================
#[test]
fn single_node_renders_as_root() {
    let mut index = OrderedIndex::new();
    index.insert("Solo", None);
    assert_eq!(index.render(), ["└── Solo"]);
}

// =============================================================================
// Test 3: Right, self, left with depth indentation
// =============================================================================
#[test]
fn render_visits_right_then_self_then_left() {
    let mut index = OrderedIndex::new();
    for key in ["B", "A", "M", "D", "T"] {
        index.insert(key, None);
    }

    assert_eq!(
        index.render(),
        [
            "│       ┌── T",
            "│   ┌── M",
            "│   │   └── D",
            "└── B",
            "    └── A",
        ]
    );
}

// =============================================================================
// Test 4: Top to bottom is descending key order
// =============================================================================
#[test]
fn render_lines_run_from_largest_to_smallest() {
    let mut index = OrderedIndex::new();
    for key in ["m", "f", "t", "b", "h", "p", "w", "a"] {
        index.insert(key, None);
    }

    let rendered: Vec<String> = index
        .render()
        .iter()
        .map(|line| line.rsplit(' ').next().unwrap().to_string())
        .collect();
    let mut descending: Vec<String> = index.inorder().keys().map(str::to_string).collect();
    descending.reverse();

    assert_eq!(rendered, descending);
}

// =============================================================================
// Test 5: Indentation grows with depth
// =============================================================================
#[test]
fn indentation_tracks_depth() {
    let mut index = OrderedIndex::new();
    for key in ["d", "c", "b", "a"] {
        index.insert(key, None);
    }

    // Left-leaning chain: each level adds one four-column group.
    let lines = index.render();
    assert_eq!(lines, ["└── d", "    └── c", "        └── b", "            └── a"]);
}

// =============================================================================
// Test 6: Display writes the same lines
// =============================================================================
#[test]
fn display_matches_render() {
    let mut index = OrderedIndex::new();
    index.insert("Bob", None);
    index.insert("alice", None);

    let expected = index.render().join("\n") + "\n";
    assert_eq!(index.to_string(), expected);
}
