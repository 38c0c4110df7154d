// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime options for map conversion.

/// What to do when two entries want different values at the same path.
///
/// A collision happens when two fields map to the same flat key, or when a
/// leaf and a nested map claim the same key (`data` and `data.text`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Keep the value written first, in field declaration order.
    #[default]
    FirstWriteWins,

    /// Fail with [`Error::MergeConflict`](crate::Error::MergeConflict).
    ///
    /// Writing an identical value twice is not a conflict.
    Strict
}

/// Options for [`to_map_with`](crate::to_map_with).
///
/// # Example
///
/// ```rust
/// use tagmap_core::{ConflictPolicy, MapOptions};
///
/// let options = MapOptions::new().conflict(ConflictPolicy::Strict);
/// assert_eq!(options, MapOptions::strict());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapOptions {
    /// Collision handling for flat keys and merged fragments.
    pub conflict: ConflictPolicy
}

impl MapOptions {
    /// Default options: first write wins.
    pub const fn new() -> Self {
        Self {
            conflict: ConflictPolicy::FirstWriteWins
        }
    }

    /// Options that reject conflicting writes.
    pub const fn strict() -> Self {
        Self {
            conflict: ConflictPolicy::Strict
        }
    }

    /// Set the conflict policy.
    #[must_use]
    pub const fn conflict(mut self, policy: ConflictPolicy) -> Self {
        self.conflict = policy;
        self
    }

    /// Check if conflicting writes are rejected.
    pub const fn is_strict(&self) -> bool {
        matches!(self.conflict, ConflictPolicy::Strict)
    }
}
