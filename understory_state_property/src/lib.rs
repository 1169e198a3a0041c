// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory State Property: the vocabulary of state-driven widget styling.
//!
//! This crate defines the leaf types shared by style storage and cascade
//! resolution in `understory_state_style`. It has no behavior of its own
//! beyond encoding and decoding.
//!
//! ## Core Concepts
//!
//! - [`PropertyId`]: a 16-bit id made of a group, an index within the group,
//!   and an inherit flag. The index sub-range encodes the [`ValueCategory`].
//! - [`StateMask`]: a 7-bit set of interactive states (pressed, checked, ...)
//!   a stored value applies under.
//! - [`Value`]: an integer, [`Color`], [`Opacity`] or [`Resource`] handle.
//! - [`PropertyDescriptor`] and [`PropertyCatalog`]: optional names for ids.
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_state_property::{
//!     Opacity, PropertyId, StateMask, Value, ValueCategory,
//! };
//!
//! const BG_OPA: PropertyId = PropertyId::new(0x2, ValueCategory::Opacity.first_index(), false);
//!
//! let value = Value::from(Opacity::COVER);
//! assert_eq!(value.category(), BG_OPA.category());
//!
//! // A value stored for `PRESSED` applies while the widget is pressed and focused.
//! let current = StateMask::PRESSED | StateMask::FOCUSED;
//! assert!(StateMask::PRESSED.applies_to(current));
//! assert_eq!(StateMask::PRESSED.specificity(), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): builds `peniko` with `std`.
//! - `libm`: builds `peniko` with `libm` for targets without `std`.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod catalog;
mod id;
mod state;
mod value;

pub use catalog::{PropertyCatalog, PropertyDescriptor};
pub use id::{PropertyId, ValueCategory};
pub use peniko::Color;
pub use state::StateMask;
pub use value::{Opacity, Resource, Value};
