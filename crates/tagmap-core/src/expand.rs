// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dot-path expansion and deep merge.
//!
//! Each flat entry `a.b.c → v` becomes the fragment `{a: {b: {c: v}}}`, and
//! all fragments are deep-merged into a single map:
//!
//! ```text
//! "data.text" → "2"            {"data": {"text": "2"}}
//! "data.call" → 2       ──►    {"data": {"call": 2}}     ──►  {"data": {"text": "2", "call": 2}}
//! ```
//!
//! Maps meeting at the same key merge key by key. Any other collision is
//! settled by [`ConflictPolicy`].

use serde_json::{Map, Value};
use tracing::debug;

use crate::{ConflictPolicy, Error, FlatEntries, MapOptions, Nested};

/// Build the singly nested fragment for a dot path.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tagmap_core::nest;
///
/// let fragment = nest("object.data.world", json!("6"));
/// assert_eq!(json!(fragment), json!({"object": {"data": {"world": "6"}}}));
/// ```
pub fn nest(path: &str, value: Value) -> Nested {
    let mut segments = path.rsplit('.');
    let leaf = segments.next().unwrap_or(path);

    let mut node = Map::new();
    node.insert(leaf.to_owned(), value);

    for segment in segments {
        let mut parent = Map::new();
        parent.insert(segment.to_owned(), Value::Object(node));
        node = parent;
    }

    node
}

/// Nest `value` under `path` and merge the fragment into `parent`.
///
/// # Errors
///
/// [`Error::MergeConflict`] when `policy` is [`ConflictPolicy::Strict`] and
/// the fragment collides with a different existing value.
pub fn build_map(
    path: &str,
    value: Value,
    parent: &mut Nested,
    policy: ConflictPolicy
) -> Result<(), Error> {
    merge(parent, nest(path, value), policy, "")
}

/// Expand every flat entry and merge them into one nested map.
///
/// # Errors
///
/// Propagates [`build_map`] failures.
pub fn expand(entries: FlatEntries, options: &MapOptions) -> Result<Nested, Error> {
    let mut parent = Map::new();
    for (path, value) in entries {
        build_map(&path, value, &mut parent, options.conflict)?;
    }
    Ok(parent)
}

/// Deep-merge `src` into `dst`, filling keys missing from `dst`.
fn merge(dst: &mut Nested, src: Nested, policy: ConflictPolicy, prefix: &str) -> Result<(), Error> {
    for (key, incoming) in src {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match (dst.get_mut(&key), incoming) {
            (None, incoming) => {
                dst.insert(key, incoming);
            }
            (Some(Value::Object(existing)), Value::Object(inner)) => {
                merge(existing, inner, policy, &path)?;
            }
            (Some(existing), incoming) if *existing == incoming => {}
            (Some(_), _) => match policy {
                ConflictPolicy::FirstWriteWins => {
                    debug!(path = %path, "conflicting value, keeping first write");
                }
                ConflictPolicy::Strict => {
                    return Err(Error::MergeConflict {
                        path
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn nest_single_segment() {
        assert_eq!(json!(nest("id", json!(1))), json!({"id": 1}));
    }

    #[test]
    fn nest_deep_path() {
        assert_eq!(
            json!(nest("a.b.c", json!(true))),
            json!({"a": {"b": {"c": true}}})
        );
    }

    #[test]
    fn shared_prefixes_merge() {
        let mut parent = Map::new();
        build_map("data.text", json!("2"), &mut parent, ConflictPolicy::Strict).unwrap();
        build_map("data.call", json!(2), &mut parent, ConflictPolicy::Strict).unwrap();
        build_map("object.data.world", json!("6"), &mut parent, ConflictPolicy::Strict).unwrap();
        build_map("object.name", json!("4"), &mut parent, ConflictPolicy::Strict).unwrap();

        assert_eq!(
            json!(parent),
            json!({
                "data": {"text": "2", "call": 2},
                "object": {"name": "4", "data": {"world": "6"}}
            })
        );
    }

    #[test]
    fn first_write_wins_on_leaf_collision() {
        let mut parent = Map::new();
        build_map("data", json!("leaf"), &mut parent, ConflictPolicy::FirstWriteWins).unwrap();
        build_map("data.text", json!("2"), &mut parent, ConflictPolicy::FirstWriteWins).unwrap();
        assert_eq!(json!(parent), json!({"data": "leaf"}));
    }

    #[test]
    fn first_write_wins_keeps_existing_map() {
        let mut parent = Map::new();
        build_map("data.text", json!("2"), &mut parent, ConflictPolicy::FirstWriteWins).unwrap();
        build_map("data", json!(7), &mut parent, ConflictPolicy::FirstWriteWins).unwrap();
        assert_eq!(json!(parent), json!({"data": {"text": "2"}}));
    }

    #[test]
    fn strict_reports_full_path() {
        let mut parent = Map::new();
        build_map("a.b", json!(1), &mut parent, ConflictPolicy::Strict).unwrap();
        let err = build_map("a.b.c", json!(2), &mut parent, ConflictPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            Error::MergeConflict {
                path: "a.b".into()
            }
        );
    }

    #[test]
    fn strict_allows_identical_values() {
        let mut parent = Map::new();
        build_map("a.b", json!(1), &mut parent, ConflictPolicy::Strict).unwrap();
        build_map("a.b", json!(1), &mut parent, ConflictPolicy::Strict).unwrap();
        assert_eq!(json!(parent), json!({"a": {"b": 1}}));
    }

    #[test]
    fn expand_keeps_lists_opaque() {
        let mut entries = FlatEntries::new();
        entries
            .insert("list", json!([{"name": "hi", "value": 1}]))
            .unwrap();
        entries.insert("id", json!(1)).unwrap();

        let nested = expand(entries, &MapOptions::default()).unwrap();
        assert_eq!(
            json!(nested),
            json!({"id": 1, "list": [{"name": "hi", "value": 1}]})
        );
    }
}
