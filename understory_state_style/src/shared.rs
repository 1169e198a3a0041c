// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared, mutable styles.

use alloc::rc::Rc;
use core::cell::{Ref, RefCell, RefMut};

use crate::style::Style;

/// A [`Style`] shared by many [`StyleList`](crate::StyleList)s.
///
/// Cloning a `SharedStyle` is cheap (a reference count increment) and yields
/// another handle to the same style. Mutations made through any handle are
/// seen by every list on its next lookup; there is no copy-on-write.
///
/// The handle is `!Send` and `!Sync`: a shared style belongs to the UI thread
/// that created it.
///
/// # Example
///
/// ```rust
/// use understory_state_property::{PropertyId, StateMask};
/// use understory_state_style::{SharedStyle, StyleList};
///
/// const PAD_TOP: PropertyId = PropertyId::new(0x1, 0x0, false);
///
/// let theme = SharedStyle::default();
/// let mut list = StyleList::new();
/// list.add_style(theme.clone())?;
///
/// theme.write().set_int(PAD_TOP, StateMask::DEFAULT, 6)?;
/// assert_eq!(list.lookup_int(PAD_TOP, StateMask::DEFAULT).map(|m| m.value), Some(6));
/// # Ok::<(), understory_state_style::StyleError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedStyle {
    inner: Rc<RefCell<Style>>,
}

impl SharedStyle {
    /// Wraps a style for sharing.
    #[must_use]
    pub fn new(style: Style) -> Self {
        Self {
            inner: Rc::new(RefCell::new(style)),
        }
    }

    /// Borrows the style for reading.
    ///
    /// # Panics
    ///
    /// Panics if the style is currently borrowed for writing.
    #[must_use]
    #[inline]
    pub fn read(&self) -> Ref<'_, Style> {
        self.inner.borrow()
    }

    /// Borrows the style for writing.
    ///
    /// Hold the guard only for the duration of the edit: lookups through any
    /// list referencing this style panic while it is held.
    ///
    /// # Panics
    ///
    /// Panics if the style is currently borrowed.
    #[must_use]
    #[inline]
    pub fn write(&self) -> RefMut<'_, Style> {
        self.inner.borrow_mut()
    }

    /// Returns `true` if both handles refer to the same style.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the number of handles to this style, including this one.
    #[must_use]
    #[inline]
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl From<Style> for SharedStyle {
    #[inline]
    fn from(style: Style) -> Self {
        Self::new(style)
    }
}
