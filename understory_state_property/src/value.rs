// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed style values.
//!
//! This module provides [`Value`], the tagged union stored by style entries,
//! together with [`Opacity`] and [`Resource`].

use alloc::rc::Rc;
use core::any::{Any, TypeId};
use core::fmt;

use peniko::Color;

use crate::id::ValueCategory;

/// An 8-bit opacity, `0` fully transparent and `255` fully opaque.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Opacity(pub u8);

impl Opacity {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0);
    /// Fully opaque.
    pub const COVER: Self = Self(255);

    /// Returns the raw opacity.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for Opacity {
    #[inline]
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// A shared handle to an externally managed resource such as a font or image.
///
/// Styles never own the assets they point at. A `Resource` holds a reference
/// counted pointer instead, so the asset stays alive for as long as any style
/// refers to it. Cloning a `Resource` (and therefore copying a style) shares
/// the pointee; it is never deep-cloned.
///
/// Equality is identity: two handles are equal if they point at the same
/// allocation.
///
/// # Example
///
/// ```rust
/// use understory_state_property::Resource;
///
/// struct Font {
///     line_height: u16,
/// }
///
/// let font = Resource::new(Font { line_height: 16 });
/// let shared = font.clone();
///
/// assert_eq!(font, shared);
/// assert_eq!(shared.downcast_ref::<Font>().map(|f| f.line_height), Some(16));
/// assert!(shared.downcast_ref::<u32>().is_none());
/// ```
#[derive(Clone)]
pub struct Resource {
    inner: Rc<dyn Any>,
}

impl Resource {
    /// Wraps an asset in a new shared handle.
    #[must_use]
    pub fn new<T: 'static>(asset: T) -> Self {
        Self {
            inner: Rc::new(asset),
        }
    }

    /// Creates a handle from an existing shared asset, without copying it.
    #[must_use]
    pub fn from_rc<T: 'static>(asset: Rc<T>) -> Self {
        Self { inner: asset }
    }

    /// Returns the [`TypeId`] of the referenced asset.
    #[must_use]
    #[inline]
    pub fn asset_type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    /// Returns `true` if the referenced asset is of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Attempts to view the referenced asset as a `T`.
    #[must_use]
    #[inline]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// Returns `true` if both handles point at the same asset.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the number of handles sharing the asset.
    #[must_use]
    #[inline]
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Resource {}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("ptr", &Rc::as_ptr(&self.inner).cast::<()>())
            .field("type_id", &self.asset_type_id())
            .finish()
    }
}

/// A style value of one of the four [`ValueCategory`] kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An integer value.
    Int(i16),
    /// A color value.
    Color(Color),
    /// An opacity value.
    Opacity(Opacity),
    /// A shared resource handle.
    Resource(Resource),
}

impl Value {
    /// Returns the category of this value.
    #[must_use]
    #[inline]
    pub fn category(&self) -> ValueCategory {
        match self {
            Self::Int(_) => ValueCategory::Int,
            Self::Color(_) => ValueCategory::Color,
            Self::Opacity(_) => ValueCategory::Opacity,
            Self::Resource(_) => ValueCategory::Resource,
        }
    }

    /// Returns the packed size of this value in bytes.
    ///
    /// This is the payload size a byte-packed encoding of the value would
    /// need, and is used for memory accounting.
    #[must_use]
    #[inline]
    pub fn encoded_size(&self) -> usize {
        self.category().encoded_size()
    }
}

impl ValueCategory {
    /// Returns the packed payload size of values of this category, in bytes.
    #[must_use]
    #[inline]
    pub const fn encoded_size(self) -> usize {
        match self {
            Self::Int => size_of::<i16>(),
            Self::Color => size_of::<Color>(),
            Self::Opacity => size_of::<u8>(),
            Self::Resource => size_of::<usize>(),
        }
    }
}

impl From<i16> for Value {
    #[inline]
    fn from(value: i16) -> Self {
        Self::Int(value)
    }
}

impl From<Color> for Value {
    #[inline]
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Opacity> for Value {
    #[inline]
    fn from(value: Opacity) -> Self {
        Self::Opacity(value)
    }
}

impl From<Resource> for Value {
    #[inline]
    fn from(value: Resource) -> Self {
        Self::Resource(value)
    }
}
