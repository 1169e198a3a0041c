// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style storage and single-style lookup.
//!
//! This module provides [`Style`], an ordered collection of
//! `(property, state, value)` entries with a best-match lookup.

use smallvec::SmallVec;
use understory_state_property::{
    Color, Opacity, PropertyId, Resource, StateMask, Value,
};

use crate::entry::PropertyEntry;
use crate::error::{InvariantViolation, StyleError};
use crate::value::{StyleMatch, StyleValue};

/// Inline capacity for style entries.
///
/// Most shared styles set a handful of properties, and most local styles
/// fewer still, so this avoids a heap allocation in the common case.
pub const INLINE_ENTRIES: usize = 4;

/// An ordered collection of state-tagged property values.
///
/// Each entry is keyed by `(property, state)`; the mutating API guarantees no
/// two entries share a key. Lookups scan every entry of the requested
/// property and return the most specific one that applies to the widget's
/// current state.
///
/// # Matching
///
/// An entry applies when its state mask is a subset of the requested state.
/// Among applicable entries the one whose mask has the most bits set wins;
/// ties go to the entry stored later.
///
/// # Example
///
/// ```rust
/// use understory_state_property::{PropertyId, StateMask};
/// use understory_state_style::Style;
///
/// const BORDER_WIDTH: PropertyId = PropertyId::new(0x3, 0x0, false);
///
/// let mut style = Style::new();
/// style.set_int(BORDER_WIDTH, StateMask::DEFAULT, 1)?;
/// style.set_int(BORDER_WIDTH, StateMask::PRESSED, 3)?;
///
/// let idle = style.lookup_int(BORDER_WIDTH, StateMask::DEFAULT).unwrap();
/// assert_eq!((idle.value, idle.specificity), (1, 0));
///
/// let pressed = style.lookup_int(BORDER_WIDTH, StateMask::PRESSED | StateMask::FOCUSED).unwrap();
/// assert_eq!((pressed.value, pressed.specificity), (3, 1));
/// # Ok::<(), understory_state_style::StyleError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    entries: SmallVec<[PropertyEntry; INLINE_ENTRIES]>,
}

impl Style {
    /// Creates an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if this style has no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns an iterator over the entries in storage order.
    pub fn entries(&self) -> impl Iterator<Item = &PropertyEntry> + '_ {
        self.entries.iter()
    }

    /// Returns `true` if an entry exists for exactly this property and state.
    #[must_use]
    pub fn contains(&self, property: PropertyId, state: StateMask) -> bool {
        self.position(property, state).is_some()
    }

    /// Returns the packed size of all entries in bytes.
    #[must_use]
    pub fn mem_size(&self) -> usize {
        self.entries.iter().map(PropertyEntry::encoded_size).sum()
    }

    #[inline]
    fn position(&self, property: PropertyId, state: StateMask) -> Option<usize> {
        self.entries.iter().position(|e| e.is_for(property, state))
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Sets the value of `property` for `state`.
    ///
    /// An existing entry for the same `(property, state)` is overwritten in
    /// place. If the existing entry holds a value of a different category, it
    /// is removed and the new entry is appended instead, so storage order is
    /// not preserved in that case.
    ///
    /// The value's category is not checked against `property.category()`.
    /// Use the category-specific setters and keep them consistent with the
    /// property catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Alloc`] if storage cannot grow. The style is left
    /// unchanged.
    pub fn set(
        &mut self,
        property: PropertyId,
        state: StateMask,
        value: impl Into<Value>,
    ) -> Result<(), StyleError> {
        let value = value.into();
        match self.position(property, state) {
            Some(index) if self.entries[index].value().category() == value.category() => {
                *self.entries[index].value_mut() = value;
            }
            Some(index) => {
                log::debug!(
                    "relocating {property} entry: {:?} -> {:?}",
                    self.entries[index].value().category(),
                    value.category()
                );
                // Removing first leaves room for the push.
                self.entries.remove(index);
                self.entries.push(PropertyEntry::new(property, state, value));
            }
            None => {
                self.entries.try_reserve(1)?;
                self.entries.push(PropertyEntry::new(property, state, value));
            }
        }
        self.check_invariants();
        Ok(())
    }

    /// Sets an integer property.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Alloc`] if storage cannot grow.
    #[inline]
    pub fn set_int(
        &mut self,
        property: PropertyId,
        state: StateMask,
        value: i16,
    ) -> Result<(), StyleError> {
        self.set(property, state, value)
    }

    /// Sets a color property.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Alloc`] if storage cannot grow.
    #[inline]
    pub fn set_color(
        &mut self,
        property: PropertyId,
        state: StateMask,
        value: Color,
    ) -> Result<(), StyleError> {
        self.set(property, state, value)
    }

    /// Sets an opacity property.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Alloc`] if storage cannot grow.
    #[inline]
    pub fn set_opacity(
        &mut self,
        property: PropertyId,
        state: StateMask,
        value: Opacity,
    ) -> Result<(), StyleError> {
        self.set(property, state, value)
    }

    /// Sets a resource property. Only the handle is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Alloc`] if storage cannot grow.
    #[inline]
    pub fn set_resource(
        &mut self,
        property: PropertyId,
        state: StateMask,
        value: Resource,
    ) -> Result<(), StyleError> {
        self.set(property, state, value)
    }

    /// Removes the entry for exactly this property and state.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, property: PropertyId, state: StateMask) -> bool {
        let Some(index) = self.position(property, state) else {
            return false;
        };
        self.entries.remove(index);
        self.check_invariants();
        true
    }

    /// Removes every entry and releases heap storage.
    pub fn reset(&mut self) {
        self.entries = SmallVec::new();
    }

    /// Replaces this style's entries with a copy of `src`'s.
    ///
    /// Resource values are shared with `src`, not duplicated.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Alloc`] if storage cannot be allocated. The style
    /// is left unchanged.
    pub fn copy_from(&mut self, src: &Self) -> Result<(), StyleError> {
        let mut entries = SmallVec::new();
        entries.try_reserve(src.entries.len())?;
        entries.extend(src.entries.iter().cloned());
        self.entries = entries;
        self.check_invariants();
        Ok(())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns the best matching value of `property` for the `requested` state.
    ///
    /// Only entries whose state mask is a subset of `requested` are
    /// considered; among those the most specific wins, and later entries win
    /// ties. Entries holding a different category than `T` are skipped.
    ///
    /// Returns `None` if no entry applies.
    #[must_use]
    pub fn lookup<T: StyleValue>(
        &self,
        property: PropertyId,
        requested: StateMask,
    ) -> Option<StyleMatch<T>> {
        let mut best: Option<(&PropertyEntry, u32)> = None;
        for entry in &self.entries {
            if entry.property() != property
                || !entry.state().applies_to(requested)
                || entry.value().category() != T::CATEGORY
            {
                continue;
            }
            let specificity = entry.state().specificity();
            if best.is_none_or(|(_, best_specificity)| specificity >= best_specificity) {
                best = Some((entry, specificity));
            }
        }

        let (entry, specificity) = best?;
        T::from_value(entry.value()).map(|value| StyleMatch { value, specificity })
    }

    /// Returns the best matching integer value.
    #[must_use]
    #[inline]
    pub fn lookup_int(&self, property: PropertyId, requested: StateMask) -> Option<StyleMatch<i16>> {
        self.lookup(property, requested)
    }

    /// Returns the best matching color value.
    #[must_use]
    #[inline]
    pub fn lookup_color(
        &self,
        property: PropertyId,
        requested: StateMask,
    ) -> Option<StyleMatch<Color>> {
        self.lookup(property, requested)
    }

    /// Returns the best matching opacity value.
    #[must_use]
    #[inline]
    pub fn lookup_opacity(
        &self,
        property: PropertyId,
        requested: StateMask,
    ) -> Option<StyleMatch<Opacity>> {
        self.lookup(property, requested)
    }

    /// Returns the best matching resource handle.
    #[must_use]
    #[inline]
    pub fn lookup_resource(
        &self,
        property: PropertyId,
        requested: StateMask,
    ) -> Option<StyleMatch<Resource>> {
        self.lookup(property, requested)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Checks the storage invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a duplicated `(property, state)` key
    /// or a value whose category disagrees with its property id.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for (index, entry) in self.entries.iter().enumerate() {
            let stored = entry.value().category();
            if stored != entry.property().category() {
                return Err(InvariantViolation::CategoryMismatch {
                    property: entry.property(),
                    stored,
                });
            }
            if self.entries[..index]
                .iter()
                .any(|earlier| earlier.is_for(entry.property(), entry.state()))
            {
                return Err(InvariantViolation::DuplicateEntry {
                    property: entry.property(),
                    state: entry.state(),
                });
            }
        }
        Ok(())
    }

    #[inline]
    fn check_invariants(&self) {
        #[cfg(feature = "assert_style")]
        if let Err(violation) = self.validate() {
            panic!("style invariant violated: {violation}");
        }
    }
}
