// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category dispatch for typed lookups.

use understory_state_property::{Color, Opacity, Resource, Value, ValueCategory};

/// A Rust type that stores one [`ValueCategory`] of style value.
///
/// Lookups are generic over this trait; the category-specific helpers
/// (`lookup_int`, `lookup_color`, ...) are thin wrappers over it.
pub trait StyleValue: Sized {
    /// The category this type maps to.
    const CATEGORY: ValueCategory;

    /// Extracts a value of this type, or `None` if `value` is another category.
    fn from_value(value: &Value) -> Option<Self>;
}

impl StyleValue for i16 {
    const CATEGORY: ValueCategory = ValueCategory::Int;

    #[inline]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl StyleValue for Color {
    const CATEGORY: ValueCategory = ValueCategory::Color;

    #[inline]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Color(v) => Some(*v),
            _ => None,
        }
    }
}

impl StyleValue for Opacity {
    const CATEGORY: ValueCategory = ValueCategory::Opacity;

    #[inline]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Opacity(v) => Some(*v),
            _ => None,
        }
    }
}

impl StyleValue for Resource {
    const CATEGORY: ValueCategory = ValueCategory::Resource;

    #[inline]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Resource(v) => Some(v.clone()),
            _ => None,
        }
    }
}

/// The winning value of a lookup and how specific its match was.
///
/// `specificity` is the number of state bits the winning entry required.
/// `0` means the unconditional (default-state) value matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StyleMatch<T> {
    /// The resolved value.
    pub value: T,
    /// The number of states the winning entry required.
    pub specificity: u32,
}

impl<T> StyleMatch<T> {
    /// Discards the specificity and returns the value.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}
