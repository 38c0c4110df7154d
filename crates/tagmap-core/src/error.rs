// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type for map conversion.
//!
//! Only whole-call failures are reported here. Problems with a single field
//! (for example a leaf that cannot be serialized) are logged and skipped.

use thiserror::Error;

/// Errors returned by [`to_map`](crate::to_map) and the stages it drives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No record was supplied (`None` passed as the record).
    #[error("nil record passed")]
    InvalidInput,

    /// The record is the zero value of its type.
    #[error("record is empty: zero-valued records cannot be mapped")]
    EmptyInput,

    /// Extraction finished without producing a single entry.
    #[error("no valid map could be formed: no field is mapped under namespace `{namespace}`")]
    NoMappableFields {
        /// Namespace the record was walked under.
        namespace: String
    },

    /// Two entries collided on `path` under [`ConflictPolicy::Strict`].
    ///
    /// [`ConflictPolicy::Strict`]: crate::ConflictPolicy::Strict
    #[error("conflicting values at `{path}`")]
    MergeConflict {
        /// Dot path where the collision happened.
        path: String
    }
}

impl Error {
    /// Check if this error concerns the supplied record rather than merging.
    pub const fn is_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::EmptyInput | Self::NoMappableFields { .. }
        )
    }

    /// Check if this error was raised while merging fragments.
    pub const fn is_merge(&self) -> bool {
        matches!(self, Self::MergeConflict { .. })
    }
}
