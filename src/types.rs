use std::cmp::Ordering;

/// Stored key text. Casing is kept exactly as first inserted.
pub type Key = String;

/// Optional payload attached to a key (phone number, email, ...).
pub type Value = Option<String>;

/// A borrowed `(key, value)` pair as yielded by the traversals.
pub type Entry<'a> = (&'a str, Option<&'a str>);

/// Fold a key into its comparison form.
///
/// Uses Unicode lowercase mapping, which does not depend on the process
/// locale. The folded string is only ever used for comparison; it is never
/// stored in the tree.
pub fn fold(key: &str) -> String {
    key.to_lowercase()
}

/// Compare an already folded probe against a stored key.
///
/// Ordering: folded lexicographic only. Two keys that differ just in casing
/// compare `Equal`; there is no tie-break on the original casing.
pub fn compare_folded(folded_probe: &str, stored: &str) -> Ordering {
    folded_probe.cmp(fold(stored).as_str())
}

/// Case-insensitive comparison of two raw keys.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    compare_folded(&fold(a), b)
}
