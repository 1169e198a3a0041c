// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single stored style entry.

use understory_state_property::{PropertyId, StateMask, Value};

/// Bytes a packed entry spends on its header: the 16-bit property id and the
/// 8-bit state/inherit attribute.
pub(crate) const ENTRY_HEADER_SIZE: usize = size_of::<u16>() + size_of::<u8>();

/// One `(property, state, value)` record of a [`Style`](crate::Style).
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyEntry {
    property: PropertyId,
    state: StateMask,
    value: Value,
}

impl PropertyEntry {
    pub(crate) fn new(property: PropertyId, state: StateMask, value: Value) -> Self {
        Self {
            property,
            state,
            value,
        }
    }

    /// Returns the property this entry sets.
    #[must_use]
    #[inline]
    pub fn property(&self) -> PropertyId {
        self.property
    }

    /// Returns the states this entry requires.
    #[must_use]
    #[inline]
    pub fn state(&self) -> StateMask {
        self.state
    }

    /// Returns the stored value.
    #[must_use]
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the packed size of this entry in bytes.
    #[must_use]
    #[inline]
    pub fn encoded_size(&self) -> usize {
        ENTRY_HEADER_SIZE + self.value.encoded_size()
    }

    #[inline]
    pub(crate) fn is_for(&self, property: PropertyId, state: StateMask) -> bool {
        self.property == property && self.state == state
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }
}
