// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inherited property resolution.

use understory_state_property::{PropertyId, StateMask};

use crate::list::StyleList;
use crate::value::{StyleMatch, StyleValue};

/// Resolves `property` along a chain of style lists, from a widget to the root.
///
/// Each chain item pairs a widget's [`StyleList`] with that widget's current
/// state. The first list is always queried. Ancestors are queried in order,
/// and only when the property [inherits](PropertyId::inherits); the first
/// hit wins.
///
/// The widget tree is not owned here: callers walk their own tree and
/// yield the lists, lazily if they like.
///
/// # Example
///
/// ```rust
/// use understory_state_property::{PropertyId, StateMask};
/// use understory_state_style::{lookup_inherited, StyleList};
///
/// const TEXT_LETTER_SPACE: PropertyId = PropertyId::new(0x8, 0x0, true);
///
/// let mut root = StyleList::new();
/// root.set_local_int(TEXT_LETTER_SPACE, StateMask::DEFAULT, 2)?;
/// let label = StyleList::new();
///
/// let chain = [(&label, StateMask::DEFAULT), (&root, StateMask::DEFAULT)];
/// let found = lookup_inherited::<i16>(chain, TEXT_LETTER_SPACE);
/// assert_eq!(found.map(|m| m.value), Some(2));
/// # Ok::<(), understory_state_style::StyleError>(())
/// ```
#[must_use]
pub fn lookup_inherited<'a, T: StyleValue>(
    chain: impl IntoIterator<Item = (&'a StyleList, StateMask)>,
    property: PropertyId,
) -> Option<StyleMatch<T>> {
    let mut chain = chain.into_iter();
    let (own, state) = chain.next()?;
    if let Some(found) = own.lookup(property, state) {
        return Some(found);
    }
    if !property.inherits() {
        return None;
    }
    chain.find_map(|(ancestor, state)| ancestor.lookup(property, state))
}
