// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the TagMap derive macro.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── record.rs     - Record-level parsing (RecordDef, darling)
//! └── field.rs      - Field-level parsing (FieldDef, FieldKind)
//!     └── tags.rs   - #[tag(ns = "...", nested)] content
//! ```
//!
//! Container attributes (`#[tagmap(...)]`) go through darling. Field
//! attributes use `parse_nested_meta` because namespace names are open-ended
//! and not known to a fixed darling struct.

mod field;
mod record;

pub use field::{FieldDef, FieldKind};
pub use record::RecordDef;
