// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field annotation grammar.
//!
//! Every field of a record carries one annotation string per namespace:
//!
//! | Annotation | Meaning |
//! |------------|---------|
//! | *(none)* | Skipped, unless the field is a nested record (promoted unprefixed) |
//! | `-` | Field and its subtree are excluded |
//! | `key.path` | Emitted under the dot path `key.path` |
//! | `key.path,omitempty` | As above, but skipped when the value is zero |
//!
//! Anything after the first comma other than `omitempty` is ignored.

/// Annotation that excludes a field.
pub const SKIP: &str = "-";

/// The only recognised annotation option.
pub const OMIT_EMPTY: &str = "omitempty";

/// Annotations of one field, keyed by namespace.
///
/// Generated by `#[derive(TagMap)]` from `#[tag(ns = "...")]` attributes.
pub type TagTable = [(&'static str, &'static str)];

/// A parsed field annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation<'a> {
    /// No annotation under the namespace.
    Absent,

    /// Explicitly excluded with `-`.
    Skip,

    /// Output key path and options.
    Key {
        /// Dot-separated output path.
        path:       &'a str,
        /// `omitempty` was given.
        omit_empty: bool
    }
}

impl<'a> Annotation<'a> {
    /// Parse a raw annotation string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tagmap_core::Annotation;
    ///
    /// assert_eq!(Annotation::parse("-"), Annotation::Skip);
    /// assert_eq!(
    ///     Annotation::parse("dob.year, omitempty"),
    ///     Annotation::Key {
    ///         path:       "dob.year",
    ///         omit_empty: true
    ///     }
    /// );
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        if raw.is_empty() {
            return Self::Absent;
        }
        if raw == SKIP {
            return Self::Skip;
        }

        let mut parts = raw.split(',');
        let path = parts.next().unwrap_or(raw);
        let omit_empty = parts
            .next()
            .is_some_and(|option| option.trim() == OMIT_EMPTY);

        Self::Key {
            path,
            omit_empty
        }
    }

    /// Find and parse the annotation registered for `namespace`.
    ///
    /// Returns [`Annotation::Absent`] when the table has no entry for it.
    pub fn lookup(table: &'a TagTable, namespace: &str) -> Self {
        table
            .iter()
            .find(|(ns, _)| *ns == namespace)
            .map_or(Self::Absent, |(_, raw)| Self::parse(raw))
    }
}
