// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-field export directives.
//!
//! `#[derive(TagMap)]` turns every field into one call of [`leaf`],
//! [`record`] or [`record_list`], passing the field's [`TagTable`] and the
//! namespace it received. The same functions can be used to implement
//! [`TagMap`] by hand:
//!
//! ```rust
//! use tagmap_core::{Error, FlatEntries, IsZero, TagMap, export};
//!
//! struct Profile {
//!     age:  String,
//!     year: i32
//! }
//!
//! impl IsZero for Profile {
//!     fn is_zero(&self) -> bool {
//!         self.age.is_zero() && self.year.is_zero()
//!     }
//! }
//!
//! impl TagMap for Profile {
//!     fn flatten_into(&self, namespace: &str, entries: &mut FlatEntries) -> Result<(), Error> {
//!         export::leaf(entries, &[("foo", "age")], namespace, "age", &self.age)?;
//!         export::leaf(entries, &[("foo", "dob.year")], namespace, "year", &self.year)?;
//!         Ok(())
//!     }
//! }
//! ```

use serde::Serialize;
use serde_json::Value;
use tracing::{trace, warn};

use crate::{Annotation, Error, FlatEntries, IsZero, TagMap, TagTable};

/// Export a plain value.
///
/// Skipped when the annotation is absent or `-`, or when `omitempty` is set
/// and the value is zero. A value that fails to serialize is skipped with a
/// warning.
///
/// # Errors
///
/// [`Error::MergeConflict`] from [`FlatEntries::insert`].
pub fn leaf<T>(
    entries: &mut FlatEntries,
    table: &TagTable,
    namespace: &str,
    field: &'static str,
    value: &T
) -> Result<(), Error>
where
    T: Serialize + IsZero + ?Sized
{
    let Annotation::Key {
        path,
        omit_empty
    } = Annotation::lookup(table, namespace)
    else {
        trace!(field, namespace, "leaf not mapped");
        return Ok(());
    };

    if omit_empty && value.is_zero() {
        trace!(field, namespace, path, "omitting empty leaf");
        return Ok(());
    }

    match serde_json::to_value(value) {
        Ok(value) => {
            trace!(field, namespace, path, "exporting leaf");
            entries.insert(path, value)
        }
        Err(err) => {
            warn!(field, namespace, path, error = %err, "skipping unserializable field");
            Ok(())
        }
    }
}

/// Export a nested record.
///
/// - annotation `-`: skipped with its subtree
/// - no annotation: child entries are hoisted into the parent unprefixed
/// - `key`: child entries are stored under `key.<child path>`
///
/// A zero record contributes nothing, with or without `omitempty`.
///
/// # Errors
///
/// Propagates failures from the nested record.
pub fn record<T>(
    entries: &mut FlatEntries,
    table: &TagTable,
    namespace: &str,
    field: &'static str,
    value: &T
) -> Result<(), Error>
where
    T: TagMap + ?Sized
{
    let prefix = match Annotation::lookup(table, namespace) {
        Annotation::Skip => {
            trace!(field, namespace, "record excluded");
            return Ok(());
        }
        Annotation::Absent => None,
        Annotation::Key {
            path, ..
        } => Some(path)
    };

    if value.is_zero_record() {
        trace!(field, namespace, "skipping empty record");
        return Ok(());
    }

    let mut child = entries.child();
    value.flatten_into(namespace, &mut child)?;
    trace!(field, namespace, prefix, count = child.len(), "merging record");
    entries.absorb(prefix, child)
}

/// Export a list of records.
///
/// Each non-zero element is flattened on its own and the ordered array of
/// those flat maps is stored under the field's key. Element keys keep their
/// dots: a child path `meta.value` stays a single key. Untagged lists are
/// skipped, and with `omitempty` so are lists without a non-zero element.
///
/// # Errors
///
/// Propagates failures from the elements.
pub fn record_list<T>(
    entries: &mut FlatEntries,
    table: &TagTable,
    namespace: &str,
    field: &'static str,
    values: &[T]
) -> Result<(), Error>
where
    T: TagMap
{
    let Annotation::Key {
        path,
        omit_empty
    } = Annotation::lookup(table, namespace)
    else {
        trace!(field, namespace, "list not mapped");
        return Ok(());
    };

    let mut items = Vec::with_capacity(values.len());
    for value in values.iter().filter(|value| !value.is_zero_record()) {
        let mut element = entries.child();
        value.flatten_into(namespace, &mut element)?;
        items.push(Value::Object(element.into_iter().collect()));
    }

    if omit_empty && items.is_empty() {
        trace!(field, namespace, path, "omitting empty list");
        return Ok(());
    }

    trace!(field, namespace, path, count = items.len(), "exporting list");
    entries.insert(path, Value::Array(items))
}
