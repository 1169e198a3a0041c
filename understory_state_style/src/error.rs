// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt;

use smallvec::CollectionAllocErr;
use understory_state_property::{PropertyId, StateMask, ValueCategory};

/// An error from a mutating style operation.
///
/// Growing storage is the only way style mutation can fail. Lookups never
/// fail; a missing value is reported as `None`.
#[derive(Debug)]
pub enum StyleError {
    /// Growing entry or style storage failed.
    Alloc(CollectionAllocErr),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc(CollectionAllocErr::CapacityOverflow) => {
                f.write_str("style storage capacity overflow")
            }
            Self::Alloc(CollectionAllocErr::AllocErr { layout }) => write!(
                f,
                "failed to allocate {} bytes of style storage",
                layout.size()
            ),
        }
    }
}

impl core::error::Error for StyleError {}

impl From<CollectionAllocErr> for StyleError {
    #[inline]
    fn from(err: CollectionAllocErr) -> Self {
        Self::Alloc(err)
    }
}

/// A broken storage invariant, reported by [`Style::validate`](crate::Style::validate).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Two entries share the same property and state mask.
    DuplicateEntry {
        /// The duplicated property.
        property: PropertyId,
        /// The duplicated state mask.
        state: StateMask,
    },
    /// A stored value's category differs from the one its property id declares.
    CategoryMismatch {
        /// The property whose value has the wrong category.
        property: PropertyId,
        /// The category of the stored value.
        stored: ValueCategory,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateEntry { property, state } => write!(
                f,
                "{property} is stored more than once for state {:#04x}",
                state.bits()
            ),
            Self::CategoryMismatch { property, stored } => write!(
                f,
                "{property} declares {:?} values but stores {stored:?}",
                property.category()
            ),
        }
    }
}

impl core::error::Error for InvariantViolation {}
