// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property identification types.
//!
//! This module provides [`PropertyId`], the compact identifier of a stylable
//! attribute, and [`ValueCategory`], the kind of value the attribute stores.

use core::fmt;

/// The kind of value a property stores.
///
/// The category is part of a [`PropertyId`]'s encoding: each property group
/// reserves a fixed sub-range of indices per category, so the category can be
/// derived from the id alone.
///
/// | Category   | Index range   | Slots |
/// |------------|---------------|-------|
/// | `Int`      | `0x0..=0x5`   | 6     |
/// | `Color`    | `0x6..=0x9`   | 4     |
/// | `Opacity`  | `0xA..=0xD`   | 4     |
/// | `Resource` | `0xE..=0xF`   | 2     |
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueCategory {
    /// A signed 16-bit integer (widths, paddings, offsets, enum-like values).
    Int,
    /// A color.
    Color,
    /// An 8-bit opacity.
    Opacity,
    /// A shared handle to an external resource (fonts, images, strings).
    Resource,
}

impl ValueCategory {
    /// Returns the first index of this category's sub-range within a group.
    ///
    /// ```rust
    /// use understory_state_property::{PropertyId, ValueCategory};
    ///
    /// const BORDER_COLOR: PropertyId =
    ///     PropertyId::new(0x3, ValueCategory::Color.first_index(), false);
    /// assert_eq!(BORDER_COLOR.category(), ValueCategory::Color);
    /// ```
    #[must_use]
    #[inline]
    pub const fn first_index(self) -> u8 {
        match self {
            Self::Int => 0x0,
            Self::Color => 0x6,
            Self::Opacity => 0xA,
            Self::Resource => 0xE,
        }
    }

    /// Returns the category that owns the given index within a group.
    ///
    /// Only the low four bits of `index` are considered.
    #[must_use]
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index & 0x0F {
            0x0..=0x5 => Self::Int,
            0x6..=0x9 => Self::Color,
            0xA..=0xD => Self::Opacity,
            _ => Self::Resource,
        }
    }
}

const KEY_MASK: u16 = 0x00FF;
const INHERIT_BIT: u16 = 1 << 15;

/// A stylable attribute identifier.
///
/// The id is 16 bits wide. The low byte is the property key, made of a 4-bit
/// *group* (background, border, text, ...) and a 4-bit *index* within the
/// group. Bit 15 carries the inherit flag: whether a descendant picks the
/// property up from an ancestor when it is not set on the descendant itself.
///
/// The catalog of concrete ids is defined by the embedder; this type only
/// fixes the encoding.
///
/// # Example
///
/// ```rust
/// use understory_state_property::{PropertyId, ValueCategory};
///
/// const BORDER_WIDTH: PropertyId = PropertyId::new(0x3, 0x0, false);
/// const TEXT_COLOR: PropertyId = PropertyId::new(0x8, 0x6, true);
///
/// assert_eq!(BORDER_WIDTH.group(), 0x3);
/// assert_eq!(BORDER_WIDTH.category(), ValueCategory::Int);
/// assert_eq!(TEXT_COLOR.category(), ValueCategory::Color);
/// assert!(TEXT_COLOR.inherits());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyId(u16);

impl PropertyId {
    /// Creates a property id from its group, index and inherit flag.
    ///
    /// # Panics
    ///
    /// Panics if `group` or `index` does not fit in four bits. In a `const`
    /// context this is a compile error.
    #[must_use]
    #[inline]
    pub const fn new(group: u8, index: u8, inherits: bool) -> Self {
        assert!(group < 0x10, "property group must fit in four bits");
        assert!(index < 0x10, "property index must fit in four bits");
        let key = ((group as u16) << 4) | index as u16;
        if inherits {
            Self(key | INHERIT_BIT)
        } else {
            Self(key)
        }
    }

    /// Creates a property id from its raw 16-bit encoding.
    ///
    /// Reserved bits (8..=14) are cleared.
    #[must_use]
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw & (KEY_MASK | INHERIT_BIT))
    }

    /// Returns the raw 16-bit encoding.
    #[must_use]
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns the property key (group and index, without the inherit flag).
    #[must_use]
    #[inline]
    pub const fn key(self) -> u8 {
        self.0.to_le_bytes()[0]
    }

    /// Returns the property group.
    #[must_use]
    #[inline]
    pub const fn group(self) -> u8 {
        self.key() >> 4
    }

    /// Returns the index within the group.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.key() & 0x0F
    }

    /// Returns the value category implied by the index.
    #[must_use]
    #[inline]
    pub const fn category(self) -> ValueCategory {
        ValueCategory::from_index(self.index())
    }

    /// Returns `true` if the property propagates from ancestors.
    #[must_use]
    #[inline]
    pub const fn inherits(self) -> bool {
        self.0 & INHERIT_BIT != 0
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyId")
            .field("group", &self.group())
            .field("index", &self.index())
            .field("category", &self.category())
            .field("inherits", &self.inherits())
            .finish()
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyId({:#04x})", self.key())
    }
}
