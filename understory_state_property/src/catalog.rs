// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property descriptors and the optional property catalog.
//!
//! Style storage and lookup never consult the catalog: everything they need
//! (category, inherit flag) is encoded in the [`PropertyId`] itself. The
//! catalog exists so embedders can attach names to ids for debugging,
//! inspection and tooling.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::id::{PropertyId, ValueCategory};

/// Static description of a stylable attribute.
///
/// # Example
///
/// ```rust
/// use understory_state_property::{PropertyDescriptor, PropertyId, ValueCategory};
///
/// const TEXT_COLOR: PropertyDescriptor =
///     PropertyDescriptor::new(PropertyId::new(0x8, 0x6, true), "text_color");
///
/// assert_eq!(TEXT_COLOR.category(), ValueCategory::Color);
/// assert!(TEXT_COLOR.inherits());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyDescriptor {
    id: PropertyId,
    name: &'static str,
}

impl PropertyDescriptor {
    /// Creates a descriptor.
    #[must_use]
    #[inline]
    pub const fn new(id: PropertyId, name: &'static str) -> Self {
        Self { id, name }
    }

    /// Returns the property id.
    #[must_use]
    #[inline]
    pub const fn id(&self) -> PropertyId {
        self.id
    }

    /// Returns the property name.
    #[must_use]
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the property's value category.
    #[must_use]
    #[inline]
    pub const fn category(&self) -> ValueCategory {
        self.id.category()
    }

    /// Returns whether the property inherits from ancestors.
    #[must_use]
    #[inline]
    pub const fn inherits(&self) -> bool {
        self.id.inherits()
    }
}

/// A lookup table of [`PropertyDescriptor`]s.
///
/// Descriptors are registered once, typically at startup from a static
/// table, and can then be found by id or by name.
///
/// # Example
///
/// ```rust
/// use understory_state_property::{PropertyCatalog, PropertyDescriptor, PropertyId};
///
/// const BORDER_WIDTH: PropertyId = PropertyId::new(0x3, 0x0, false);
/// const BORDER_OPA: PropertyId = PropertyId::new(0x3, 0xA, false);
///
/// let catalog = PropertyCatalog::from_descriptors([
///     PropertyDescriptor::new(BORDER_WIDTH, "border_width"),
///     PropertyDescriptor::new(BORDER_OPA, "border_opa"),
/// ]);
///
/// assert_eq!(catalog.name(BORDER_WIDTH), Some("border_width"));
/// assert_eq!(catalog.by_name("border_opa"), Some(BORDER_OPA));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PropertyCatalog {
    descriptors: Vec<PropertyDescriptor>,
    by_key: HashMap<u8, usize>,
    by_name: HashMap<&'static str, PropertyId>,
}

impl PropertyCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from a list of descriptors.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`PropertyCatalog::register`].
    #[must_use]
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = PropertyDescriptor>) -> Self {
        let mut catalog = Self::new();
        for descriptor in descriptors {
            catalog.register(descriptor);
        }
        catalog
    }

    /// Registers a descriptor.
    ///
    /// # Panics
    ///
    /// Panics if a descriptor with the same property key or the same name is
    /// already registered.
    pub fn register(&mut self, descriptor: PropertyDescriptor) {
        let key = descriptor.id.key();
        assert!(
            !self.by_key.contains_key(&key),
            "Property {} is already registered",
            descriptor.id
        );
        assert!(
            !self.by_name.contains_key(descriptor.name),
            "Property '{}' is already registered",
            descriptor.name
        );

        self.by_key.insert(key, self.descriptors.len());
        self.by_name.insert(descriptor.name, descriptor.id);
        self.descriptors.push(descriptor);
    }

    /// Returns the number of registered descriptors.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Returns the descriptor for a property.
    ///
    /// The id must match the registered one exactly, inherit flag included.
    #[must_use]
    pub fn get(&self, id: PropertyId) -> Option<&PropertyDescriptor> {
        self.by_key
            .get(&id.key())
            .map(|&index| &self.descriptors[index])
            .filter(|descriptor| descriptor.id == id)
    }

    /// Returns the name of a property.
    #[must_use]
    pub fn name(&self, id: PropertyId) -> Option<&'static str> {
        self.get(id).map(PropertyDescriptor::name)
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<PropertyId> {
        self.by_name.get(name).copied()
    }

    /// Returns an iterator over descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> + '_ {
        self.descriptors.iter()
    }
}
