// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Procedural macro behind `tagmap`. Use the `tagmap` crate instead of
//! depending on this one directly.
//!
//! # Attribute Quick Reference
//!
//! ## Record-Level `#[tagmap(...)]`
//!
//! ```rust,ignore
//! #[derive(TagMap)]
//! #[tagmap(
//!     crate = "::tagmap",  // Optional: runtime crate path (default: "::tagmap")
//!     manual_zero          // Optional: implement IsZero yourself
//! )]
//! pub struct Example { /* ... */ }
//! ```
//!
//! ## Field-Level `#[tag(...)]`
//!
//! ```rust,ignore
//! pub struct Example {
//!     #[tag(custom = "name")]                  // "name" under namespace `custom`
//!     pub name: String,
//!
//!     #[tag(foo = "dob.year", bar = "details.birthYear")] // one path per namespace
//!     pub year: i32,
//!
//!     #[tag(custom = "flag,omitempty")]        // dropped while `false`
//!     pub flag: bool,
//!
//!     #[tag(custom = "object", nested)]        // child paths become "object.*"
//!     pub obj: Obj,
//!
//!     #[tag(nested)]                           // child paths hoisted unprefixed
//!     pub promoted: ObjTwo,
//!
//!     #[tag(custom = "-", nested)]             // excluded with its subtree
//!     pub hidden: ObjTwo,
//!
//!     #[tag(custom = "list", nested)]          // array of flat maps
//!     pub items: Vec<ObjThree>,
//! }
//! ```
//!
//! # Generated Code
//!
//! | Generated | Description |
//! |-----------|-------------|
//! | `impl IsZero` | Record is zero when every field is zero |
//! | `impl TagMap` | One export directive per field, in declaration order |
//!
//! No reflection happens at runtime: the annotation table of every field is
//! a static slice in the generated code.

mod record;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for annotation-driven conversion into nested maps.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[tag(ns = "a.b")]` | Emit the field under path `a.b` for namespace `ns` |
/// | `#[tag(ns = "a.b,omitempty")]` | Same, unless the value is zero |
/// | `#[tag(ns = "-")]` | Exclude the field (and its subtree) for `ns` |
/// | `#[tag(nested)]` | The field is a record, or a `Vec` of records |
///
/// Namespaces without an annotation skip plain fields and promote nested
/// records into the parent.
///
/// # Requirements
///
/// - Every field: `tagmap::IsZero`, unless `#[tagmap(manual_zero)]` is set
/// - Plain fields exported under some namespace: `serde::Serialize`
/// - Nested fields: `tagmap::TagMap` (derive it on the inner record), as a
///   record, an `Option`/`Box` of one, or a `Vec` of records
///
/// # Example
///
/// ```rust,ignore
/// use tagmap::TagMap;
///
/// #[derive(TagMap)]
/// pub struct Person {
///     #[tag(foo = "age", bar = "details.myAge")]
///     pub age: String,
///
///     #[tag(foo = "dob.year", bar = "details.birthYear")]
///     pub year: i32,
///
///     #[tag(foo = "dob.month", bar = "-")]
///     pub month: i32,
/// }
///
/// // foo → {"age": "22", "dob": {"year": 1998, "month": 1}}
/// // bar → {"details": {"myAge": "22", "birthYear": 1998}}
/// ```
#[proc_macro_derive(TagMap, attributes(tag, tagmap))]
pub fn derive_tag_map(input: TokenStream) -> TokenStream {
    record::derive(input)
}
