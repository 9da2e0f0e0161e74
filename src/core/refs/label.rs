use std::sync::LazyLock;

use regex::Regex;

use super::CommitRef;

/// `name (hash1) ↔ name (hash2)` as shown on a comparison tab.
static COMPARISON_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(([a-f0-9]{7,40})\)\s*↔\s*.*\(([a-f0-9]{7,40})\)")
        .expect("valid comparison label regex")
});

/// Extract the `(left, right)` commit pair from a comparison label.
pub fn parse_comparison_label(label: &str) -> Option<(CommitRef, CommitRef)> {
    let caps = COMPARISON_LABEL.captures(label)?;
    let left = CommitRef::parse(caps.get(1)?.as_str())?;
    let right = CommitRef::parse(caps.get(2)?.as_str())?;
    Some((left, right))
}
