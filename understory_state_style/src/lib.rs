// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory State Style: state-aware style storage and cascade resolution.
//!
//! This crate stores widget style properties keyed by
//! [`PropertyId`](understory_state_property::PropertyId) and
//! [`StateMask`](understory_state_property::StateMask), and resolves the
//! value a widget should use for its current interactive state.
//!
//! ## Core Concepts
//!
//! ### Styles
//!
//! [`Style`] is a flat collection of `(property, state) -> value` entries.
//! A lookup for a requested state considers every entry whose state is a
//! subset of it, and returns the one with the most state bits set.
//!
//! ```rust
//! use understory_state_property::{Color, PropertyId, StateMask};
//! use understory_state_style::Style;
//!
//! const BG_COLOR: PropertyId = PropertyId::new(0x2, 0x6, false);
//!
//! let mut button = Style::new();
//! button.set_color(BG_COLOR, StateMask::DEFAULT, Color::from_rgba8(0x20, 0x20, 0x20, 0xff))?;
//! button.set_color(BG_COLOR, StateMask::PRESSED, Color::from_rgba8(0x60, 0x60, 0x60, 0xff))?;
//!
//! let pressed = button.lookup_color(BG_COLOR, StateMask::PRESSED | StateMask::FOCUSED);
//! assert_eq!(pressed.map(|m| m.specificity), Some(1));
//!
//! let idle = button.lookup_color(BG_COLOR, StateMask::FOCUSED);
//! assert_eq!(idle.map(|m| m.specificity), Some(0));
//! # Ok::<(), understory_state_style::StyleError>(())
//! ```
//!
//! ### Style lists
//!
//! [`StyleList`] is the per-widget cascade: an ordered list of
//! [`SharedStyle`]s plus an owned local style. The most specific match wins;
//! ties go to the local style, then to later added styles.
//!
//! ### Inheritance
//!
//! Properties whose id carries the inherit flag can be resolved through a
//! chain of ancestor lists with [`lookup_inherited`].
//!
//! ## Features
//!
//! - `std` (default): forwards to `understory_state_property/std`.
//! - `libm`: forwards to `understory_state_property/libm` for targets without `std`.
//! - `assert_style`: validate a style after every mutation and panic if an
//!   invariant is broken. Useful in tests and debug builds of embedders.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod entry;
mod error;
mod inherit;
mod list;
mod shared;
mod style;
mod value;

pub use entry::PropertyEntry;
pub use error::{InvariantViolation, StyleError};
pub use inherit::lookup_inherited;
pub use list::{INLINE_STYLES, StyleList};
pub use shared::SharedStyle;
pub use style::{INLINE_ENTRIES, Style};
pub use value::{StyleMatch, StyleValue};
