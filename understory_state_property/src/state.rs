// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive state masks.

bitflags::bitflags! {
    /// A set of interactive states a style entry applies under.
    ///
    /// The mask is seven bits wide. The empty mask is the default state: an
    /// entry stored for it applies unconditionally. Six bits carry the common
    /// widget vocabulary below; the seventh (`0x40`) is valid but left for the
    /// embedder to name.
    ///
    /// An entry's mask *applies* when every state it requires is active in the
    /// widget's current state, and its *specificity* is the number of states it
    /// pins down. See [`StateMask::applies_to`] and [`StateMask::specificity`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct StateMask: u8 {
        /// The widget is toggled on.
        const CHECKED  = 0b0000_0001;
        /// The widget has input focus.
        const FOCUSED  = 0b0000_0010;
        /// The widget is being edited (e.g. a focused control in edit mode).
        const EDITED   = 0b0000_0100;
        /// The pointer is over the widget.
        const HOVERED  = 0b0000_1000;
        /// The widget is being pressed.
        const PRESSED  = 0b0001_0000;
        /// The widget does not accept input.
        const DISABLED = 0b0010_0000;

        // The remaining bit is defined by the embedder.
        const _ = 0b0111_1111;
    }
}

impl StateMask {
    /// The default state: no state bits set.
    pub const DEFAULT: Self = Self::empty();

    /// Returns the number of states this mask requires.
    ///
    /// ```rust
    /// use understory_state_property::StateMask;
    ///
    /// assert_eq!(StateMask::DEFAULT.specificity(), 0);
    /// assert_eq!((StateMask::PRESSED | StateMask::CHECKED).specificity(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub const fn specificity(self) -> u32 {
        self.bits().count_ones()
    }

    /// Returns `true` if every state required by `self` is active in `current`.
    ///
    /// ```rust
    /// use understory_state_property::StateMask;
    ///
    /// let current = StateMask::PRESSED | StateMask::FOCUSED;
    /// assert!(StateMask::DEFAULT.applies_to(current));
    /// assert!(StateMask::PRESSED.applies_to(current));
    /// assert!(!(StateMask::PRESSED | StateMask::CHECKED).applies_to(current));
    /// ```
    #[must_use]
    #[inline]
    pub const fn applies_to(self, current: Self) -> bool {
        self.bits() & !current.bits() == 0
    }
}
