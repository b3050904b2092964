//! Field-set reconciliation
//!
//! Rule keys may use dot notation to address nested object or array members.
//! Only the first path segment of a key counts toward the allowed top-level
//! set: a rule on `address.street` allows the top-level field `address`.

use indexmap::{IndexMap, IndexSet};

/// Separator for nested field paths in rule keys
pub const PATH_SEPARATOR: char = '.';

/// First path segment of a rule key (`"address.street"` -> `"address"`)
pub fn top_level_of(key: &str) -> &str {
    match key.split_once(PATH_SEPARATOR) {
        Some((head, _)) => head,
        None => key,
    }
}

/// Deduplicated first segments across all rule keys, declaration order kept
pub fn allowed_top_level(rules: &IndexMap<String, String>) -> IndexSet<&str> {
    rules.keys().map(|key| top_level_of(key)).collect()
}

/// Submitted field names absent from the allowed set, submission order kept
///
/// An empty allowed set (no rules declared) makes every submitted field
/// wrong.
pub fn wrong_fields<'a>(
    submitted: impl Iterator<Item = &'a str>,
    allowed: &IndexSet<&str>,
) -> Vec<String> {
    submitted
        .filter(|field| !allowed.contains(*field))
        .map(str::to_string)
        .collect()
}
