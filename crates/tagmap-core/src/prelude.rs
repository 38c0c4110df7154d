// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tagmap_core::prelude::*;
//! ```

pub use crate::{
    ConflictPolicy, Error, FlatEntries, IsZero, MapOptions, Nested, TagMap, to_map, to_map_with
};
