// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Extraction of flat `dot.path → value` entries from a record.
//!
//! # Example
//!
//! For a record mapped under `custom`, extraction produces entries such as:
//!
//! ```text
//! "name"              → "2"
//! "object.data.world" → "6"
//! "data.call"         → 2
//! "list"              → [{"name": "hi", "value": 1}, {"name": "world", "value": 2}]
//! ```
//!
//! Entries keep field declaration order. [`expand`](crate::expand) turns
//! them into a nested map.

use serde_json::{Map, Value};
use tracing::debug;

use crate::{ConflictPolicy, Error, MapOptions, TagMap};

/// Flat mapping from full dot path to value.
///
/// Lists of records are stored whole, as an array of flat maps; their
/// elements are never split into dot paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatEntries {
    entries: Map<String, Value>,
    options: MapOptions
}

impl FlatEntries {
    /// Create an empty set using default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set using `options` for collision handling.
    pub fn with_options(options: MapOptions) -> Self {
        Self {
            entries: Map::new(),
            options
        }
    }

    /// Create an empty set sharing this set's options.
    #[must_use]
    pub fn child(&self) -> Self {
        Self::with_options(self.options)
    }

    /// Options this set was created with.
    pub const fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Insert a value under `path`.
    ///
    /// A path that is already present keeps its first value, or fails under
    /// [`ConflictPolicy::Strict`] when the values differ.
    ///
    /// # Errors
    ///
    /// [`Error::MergeConflict`] under the strict policy.
    pub fn insert(&mut self, path: impl Into<String>, value: Value) -> Result<(), Error> {
        let path = path.into();
        match self.entries.get(&path) {
            None => {
                self.entries.insert(path, value);
                Ok(())
            }
            Some(existing) if *existing == value => Ok(()),
            Some(_) => match self.options.conflict {
                ConflictPolicy::FirstWriteWins => {
                    debug!(path = %path, "duplicate key, keeping first value");
                    Ok(())
                }
                ConflictPolicy::Strict => Err(Error::MergeConflict {
                    path
                })
            }
        }
    }

    /// Move every entry of `child` into this set.
    ///
    /// With a `prefix`, child keys become `prefix.key`; without one they are
    /// hoisted unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::MergeConflict`] under the strict policy.
    pub fn absorb(&mut self, prefix: Option<&str>, child: FlatEntries) -> Result<(), Error> {
        for (key, value) in child.entries {
            match prefix {
                Some(prefix) => self.insert(format!("{prefix}.{key}"), value)?,
                None => self.insert(key, value)?
            }
        }
        Ok(())
    }

    /// Value stored under `path`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries.get(path)
    }

    /// Check if `path` is present.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries were produced.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(path, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl IntoIterator for FlatEntries {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Extract flat entries from `record` under `namespace`.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if the record is absent
/// - [`Error::EmptyInput`] if the record is its zero value
/// - [`Error::MergeConflict`] never, with default options
pub fn flatten<R: TagMap + ?Sized>(record: &R, namespace: &str) -> Result<FlatEntries, Error> {
    flatten_with(record, namespace, &MapOptions::default())
}

/// [`flatten`] with explicit options.
///
/// # Errors
///
/// See [`flatten`]; with [`ConflictPolicy::Strict`] colliding keys fail with
/// [`Error::MergeConflict`].
pub fn flatten_with<R: TagMap + ?Sized>(
    record: &R,
    namespace: &str,
    options: &MapOptions
) -> Result<FlatEntries, Error> {
    if record.is_nil() {
        return Err(Error::InvalidInput);
    }
    if record.is_zero_record() {
        return Err(Error::EmptyInput);
    }

    let mut entries = FlatEntries::with_options(*options);
    record.flatten_into(namespace, &mut entries)?;
    Ok(entries)
}
