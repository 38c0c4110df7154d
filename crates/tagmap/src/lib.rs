// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # tagmap
//!
//! One crate, all features. Re-exports:
//! - [`TagMap`](macro@TagMap) derive macro from `tagmap-derive-impl`
//! - All types and functions from `tagmap-core` ([`to_map`], [`MapOptions`],
//!   [`IsZero`], ...)
//!
//! # Quick Start
//!
//! ```rust
//! use tagmap::TagMap;
//!
//! #[derive(TagMap)]
//! pub struct User {
//!     #[tag(api = "user.name")]
//!     pub name: String,
//! }
//!
//! let map = tagmap::to_map(&User { name: "Ann".into() }, "api").unwrap();
//! assert_eq!(map["user"]["name"], "Ann");
//! ```

// Re-export derive macro
// Re-export all core types
pub use tagmap_core::*;
pub use tagmap_derive_impl::TagMap;
