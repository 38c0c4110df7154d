// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and algorithms for tagmap.
//!
//! This crate converts annotated records into nested
//! [`serde_json::Map`]s. Records describe their fields through the
//! [`TagMap`] trait, normally implemented by `#[derive(TagMap)]` from the
//! `tagmap` crate, which re-exports everything here.
//!
//! # Overview
//!
//! - [`TagMap`] — capability implemented by every mappable record
//! - [`IsZero`] — zero-value detection for `omitempty`
//! - [`Annotation`] — the `key.path[,omitempty]` / `-` grammar
//! - [`flatten`] — record → flat `dot.path → value` entries
//! - [`expand`] / [`build_map`] — flat entries → nested map
//! - [`to_map`] — the whole pipeline
//!
//! # Pipeline
//!
//! ```text
//! record ──flatten──► FlatEntries ──expand──► Nested
//!          (namespace)  "object.name" → "4"     {"object": {"name": "4"}}
//! ```
//!
//! The namespace is passed explicitly through every step, so records can be
//! mapped under different namespaces concurrently.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod annotation;
mod error;
pub mod export;
mod expand;
mod flatten;
mod options;
pub mod prelude;
mod zero;

pub use annotation::{Annotation, OMIT_EMPTY, SKIP, TagTable};
pub use error::Error;
pub use expand::{build_map, expand, nest};
pub use flatten::{FlatEntries, flatten, flatten_with};
pub use options::{ConflictPolicy, MapOptions};
pub use zero::IsZero;

#[doc(hidden)]
pub mod __private {
    pub use serde::Serialize;
}

/// Nested output map.
pub type Nested = serde_json::Map<String, serde_json::Value>;

/// A record that can be mapped to a nested map.
///
/// Implementations visit their fields in declaration order and feed each
/// one to the matching [`export`] directive. Use `#[derive(TagMap)]` rather
/// than implementing this by hand.
pub trait TagMap: IsZero {
    /// Append this record's flat entries for `namespace` to `entries`.
    ///
    /// # Errors
    ///
    /// [`Error::MergeConflict`] under [`ConflictPolicy::Strict`].
    fn flatten_into(&self, namespace: &str, entries: &mut FlatEntries) -> Result<(), Error>;

    /// Check if this stands for an absent record.
    fn is_nil(&self) -> bool {
        false
    }

    /// Check if the record is its zero value.
    ///
    /// Wrappers look through to the record they hold.
    fn is_zero_record(&self) -> bool {
        self.is_zero()
    }
}

impl<R: TagMap> TagMap for Option<R> {
    fn flatten_into(&self, namespace: &str, entries: &mut FlatEntries) -> Result<(), Error> {
        match self {
            Some(record) => record.flatten_into(namespace, entries),
            None => Ok(())
        }
    }

    fn is_nil(&self) -> bool {
        self.is_none()
    }

    fn is_zero_record(&self) -> bool {
        self.as_ref().is_none_or(TagMap::is_zero_record)
    }
}

impl<R: TagMap + ?Sized> TagMap for Box<R> {
    fn flatten_into(&self, namespace: &str, entries: &mut FlatEntries) -> Result<(), Error> {
        (**self).flatten_into(namespace, entries)
    }

    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }

    fn is_zero_record(&self) -> bool {
        (**self).is_zero_record()
    }
}

impl<R: TagMap + ?Sized> TagMap for &R {
    fn flatten_into(&self, namespace: &str, entries: &mut FlatEntries) -> Result<(), Error> {
        (**self).flatten_into(namespace, entries)
    }

    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }

    fn is_zero_record(&self) -> bool {
        (**self).is_zero_record()
    }
}

/// Convert `record` into a nested map using the annotations registered for
/// `namespace`.
///
/// # Errors
///
/// - [`Error::InvalidInput`] — the record is absent (`None`)
/// - [`Error::EmptyInput`] — the record is its zero value
/// - [`Error::NoMappableFields`] — no field is mapped under `namespace`
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tagmap_core::{Error, FlatEntries, IsZero, TagMap, export, to_map};
///
/// struct Birth {
///     year: i32
/// }
///
/// impl IsZero for Birth {
///     fn is_zero(&self) -> bool {
///         self.year.is_zero()
///     }
/// }
///
/// impl TagMap for Birth {
///     fn flatten_into(&self, namespace: &str, entries: &mut FlatEntries) -> Result<(), Error> {
///         export::leaf(entries, &[("foo", "dob.year")], namespace, "year", &self.year)
///     }
/// }
///
/// let map = to_map(&Birth { year: 1998 }, "foo")?;
/// assert_eq!(json!(map), json!({"dob": {"year": 1998}}));
/// # Ok::<(), Error>(())
/// ```
pub fn to_map<R: TagMap + ?Sized>(record: &R, namespace: &str) -> Result<Nested, Error> {
    to_map_with(record, namespace, &MapOptions::default())
}

/// [`to_map`] with explicit options.
///
/// # Errors
///
/// See [`to_map`]; additionally [`Error::MergeConflict`] under
/// [`ConflictPolicy::Strict`].
pub fn to_map_with<R: TagMap + ?Sized>(
    record: &R,
    namespace: &str,
    options: &MapOptions
) -> Result<Nested, Error> {
    let entries = flatten_with(record, namespace, options)?;
    if entries.is_empty() {
        return Err(Error::NoMappableFields {
            namespace: namespace.to_owned()
        });
    }

    tracing::debug!(namespace, entries = entries.len(), "expanding flat entries");
    expand(entries, options)
}
