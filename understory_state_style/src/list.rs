// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-widget style cascade.
//!
//! A [`StyleList`] composes the shared styles attached to one widget with the
//! widget's own local overrides, and resolves each property to one value.

use alloc::boxed::Box;
use smallvec::SmallVec;
use understory_state_property::{
    Color, Opacity, PropertyId, Resource, StateMask, Value,
};

use crate::error::{InvariantViolation, StyleError};
use crate::shared::SharedStyle;
use crate::style::Style;
use crate::value::{StyleMatch, StyleValue};

/// Inline capacity for attached shared styles.
pub const INLINE_STYLES: usize = 2;

/// The ordered styles of one widget plus its local overrides.
///
/// Shared styles are attached with [`StyleList::add_style`]; styles added
/// later take precedence over earlier ones. Local overrides are set directly
/// on the list and live in a style the list owns exclusively, created on the
/// first local write.
///
/// # Resolution
///
/// Each constituent style reports its best match (see [`Style::lookup`]).
/// The match with the highest specificity wins across the whole list. Equal
/// specificities are broken by precedence:
///
/// 1. the local style,
/// 2. later added styles,
/// 3. earlier added styles.
///
/// A base style's `PRESSED` entry therefore still beats a later style's
/// unconditional entry while the widget is pressed.
///
/// # Cloning
///
/// `Clone` (and [`StyleList::copy_from`]) deep-copies the local style and
/// shares the attached styles.
///
/// # Example
///
/// ```rust
/// use understory_state_property::{PropertyId, StateMask};
/// use understory_state_style::{SharedStyle, StyleList};
///
/// const BORDER_WIDTH: PropertyId = PropertyId::new(0x3, 0x0, false);
///
/// let base = SharedStyle::default();
/// base.write().set_int(BORDER_WIDTH, StateMask::DEFAULT, 1)?;
/// base.write().set_int(BORDER_WIDTH, StateMask::PRESSED, 4)?;
///
/// let accent = SharedStyle::default();
/// accent.write().set_int(BORDER_WIDTH, StateMask::DEFAULT, 2)?;
///
/// let mut list = StyleList::new();
/// list.add_style(base)?;
/// list.add_style(accent)?;
///
/// let width = |list: &StyleList, state| list.lookup_int(BORDER_WIDTH, state).map(|m| m.value);
///
/// // Later style wins at equal specificity.
/// assert_eq!(width(&list, StateMask::DEFAULT), Some(2));
/// // Higher specificity wins regardless of order.
/// assert_eq!(width(&list, StateMask::PRESSED), Some(4));
///
/// // Local overrides win ties against every added style.
/// list.set_local_int(BORDER_WIDTH, StateMask::DEFAULT, 0)?;
/// assert_eq!(width(&list, StateMask::DEFAULT), Some(0));
/// # Ok::<(), understory_state_style::StyleError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleList {
    /// Attached styles in the order they were added.
    styles: SmallVec<[SharedStyle; INLINE_STYLES]>,
    local: Option<Box<Style>>,
}

impl StyleList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Attached styles
    // =========================================================================

    /// Attaches a shared style with the highest precedence among added styles.
    ///
    /// Duplicates are allowed: a style added twice participates twice, and
    /// its later occurrence sets its tie-break precedence.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Alloc`] if the list cannot grow.
    pub fn add_style(&mut self, style: SharedStyle) -> Result<(), StyleError> {
        self.styles.try_reserve(1)?;
        self.styles.push(style);
        log::trace!("added style, {} attached", self.styles.len());
        Ok(())
    }

    /// Detaches one occurrence of `style`, compared by identity.
    ///
    /// The first occurrence in addition order is removed.
    /// Returns `false` if the style is not attached.
    pub fn remove_style(&mut self, style: &SharedStyle) -> bool {
        let Some(index) = self.styles.iter().position(|s| s.ptr_eq(style)) else {
            return false;
        };
        self.styles.remove(index);
        log::trace!("removed style, {} attached", self.styles.len());
        true
    }

    /// Returns the attached style at `index`, in the order styles were added.
    #[must_use]
    pub fn style(&self, index: usize) -> Option<&SharedStyle> {
        self.styles.get(index)
    }

    /// Returns the number of attached styles, not counting the local style.
    #[must_use]
    #[inline]
    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    /// Returns an iterator over attached styles in the order they were added.
    pub fn styles(&self) -> impl DoubleEndedIterator<Item = &SharedStyle> + '_ {
        self.styles.iter()
    }

    // =========================================================================
    // Local style
    // =========================================================================

    /// Returns `true` if the list has a local style.
    #[must_use]
    #[inline]
    pub fn has_local(&self) -> bool {
        self.local.is_some()
    }

    /// Returns the local style, if one has been created.
    #[must_use]
    #[inline]
    pub fn local(&self) -> Option<&Style> {
        self.local.as_deref()
    }

    fn local_or_insert(&mut self) -> &mut Style {
        self.local.get_or_insert_with(|| {
            log::trace!("creating local style");
            Box::new(Style::new())
        })
    }

    /// Sets a local value, creating the local style if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Alloc`] if the local style cannot grow.
    pub fn set_local(
        &mut self,
        property: PropertyId,
        state: StateMask,
        value: impl Into<Value>,
    ) -> Result<(), StyleError> {
        self.local_or_insert().set(property, state, value)
    }

    /// Sets a local integer value.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Alloc`] if the local style cannot grow.
    #[inline]
    pub fn set_local_int(
        &mut self,
        property: PropertyId,
        state: StateMask,
        value: i16,
    ) -> Result<(), StyleError> {
        self.set_local(property, state, value)
    }

    /// Sets a local color value.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Alloc`] if the local style cannot grow.
    #[inline]
    pub fn set_local_color(
        &mut self,
        property: PropertyId,
        state: StateMask,
        value: Color,
    ) -> Result<(), StyleError> {
        self.set_local(property, state, value)
    }

    /// Sets a local opacity value.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Alloc`] if the local style cannot grow.
    #[inline]
    pub fn set_local_opacity(
        &mut self,
        property: PropertyId,
        state: StateMask,
        value: Opacity,
    ) -> Result<(), StyleError> {
        self.set_local(property, state, value)
    }

    /// Sets a local resource handle.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Alloc`] if the local style cannot grow.
    #[inline]
    pub fn set_local_resource(
        &mut self,
        property: PropertyId,
        state: StateMask,
        value: Resource,
    ) -> Result<(), StyleError> {
        self.set_local(property, state, value)
    }

    /// Removes a local value.
    ///
    /// Returns `true` if a value was removed.
    pub fn remove_local(&mut self, property: PropertyId, state: StateMask) -> bool {
        self.local
            .as_deref_mut()
            .is_some_and(|local| local.remove(property, state))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Detaches every style and drops the local style.
    ///
    /// The detached styles themselves are untouched.
    pub fn reset(&mut self) {
        log::debug!(
            "resetting style list ({} attached, local: {})",
            self.styles.len(),
            self.local.is_some()
        );
        self.styles = SmallVec::new();
        self.local = None;
    }

    /// Replaces this list with a copy of `src`.
    ///
    /// The local style is deep-copied; attached styles are shared.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Alloc`] if storage cannot be allocated. The list
    /// is left unchanged.
    pub fn copy_from(&mut self, src: &Self) -> Result<(), StyleError> {
        let mut styles = SmallVec::new();
        styles.try_reserve(src.styles.len())?;
        styles.extend(src.styles.iter().cloned());

        let local = match src.local.as_deref() {
            Some(src_local) => {
                let mut local = Style::new();
                local.copy_from(src_local)?;
                Some(Box::new(local))
            }
            None => None,
        };

        self.styles = styles;
        self.local = local;
        Ok(())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Resolves `property` for the `requested` state across the whole list.
    ///
    /// Returns `None` if no constituent style has an applicable entry.
    ///
    /// # Panics
    ///
    /// Panics if an attached style is borrowed for writing.
    #[must_use]
    pub fn lookup<T: StyleValue>(
        &self,
        property: PropertyId,
        requested: StateMask,
    ) -> Option<StyleMatch<T>> {
        // No entry can require more states than are requested.
        let ceiling = requested.specificity();

        let mut best = self
            .local
            .as_deref()
            .and_then(|local| local.lookup::<T>(property, requested));
        if best.as_ref().is_some_and(|m| m.specificity == ceiling) {
            return best;
        }

        // Highest precedence first; only a strictly better match replaces.
        for style in self.styles.iter().rev() {
            let Some(found) = style.read().lookup::<T>(property, requested) else {
                continue;
            };
            if best
                .as_ref()
                .is_none_or(|current| found.specificity > current.specificity)
            {
                let complete = found.specificity == ceiling;
                best = Some(found);
                if complete {
                    break;
                }
            }
        }
        best
    }

    /// Resolves an integer property.
    #[must_use]
    #[inline]
    pub fn lookup_int(&self, property: PropertyId, requested: StateMask) -> Option<StyleMatch<i16>> {
        self.lookup(property, requested)
    }

    /// Resolves a color property.
    #[must_use]
    #[inline]
    pub fn lookup_color(
        &self,
        property: PropertyId,
        requested: StateMask,
    ) -> Option<StyleMatch<Color>> {
        self.lookup(property, requested)
    }

    /// Resolves an opacity property.
    #[must_use]
    #[inline]
    pub fn lookup_opacity(
        &self,
        property: PropertyId,
        requested: StateMask,
    ) -> Option<StyleMatch<Opacity>> {
        self.lookup(property, requested)
    }

    /// Resolves a resource property.
    #[must_use]
    #[inline]
    pub fn lookup_resource(
        &self,
        property: PropertyId,
        requested: StateMask,
    ) -> Option<StyleMatch<Resource>> {
        self.lookup(property, requested)
    }

    /// Validates the local style and every attached style.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Panics
    ///
    /// Panics if an attached style is borrowed for writing.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if let Some(local) = self.local.as_deref() {
            local.validate()?;
        }
        self.styles.iter().try_for_each(|style| style.read().validate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: PropertyId = PropertyId::new(0x0, 0x0, false);
    const BG_COLOR: PropertyId = PropertyId::new(0x2, 0x6, false);

    fn shared_with(entries: &[(StateMask, i16)]) -> SharedStyle {
        let shared = SharedStyle::default();
        for &(state, value) in entries {
            shared.write().set_int(RADIUS, state, value).unwrap();
        }
        shared
    }

    fn radius(list: &StyleList, state: StateMask) -> Option<i16> {
        list.lookup_int(RADIUS, state).map(|m| m.value)
    }

    #[test]
    fn empty_list_finds_nothing() {
        let list = StyleList::new();
        assert_eq!(list.style_count(), 0);
        assert!(!list.has_local());
        assert!(radius(&list, StateMask::all()).is_none());
    }

    #[test]
    fn later_style_wins_ties() {
        let a = shared_with(&[(StateMask::DEFAULT, 1)]);
        let b = shared_with(&[(StateMask::DEFAULT, 2)]);

        let mut list = StyleList::new();
        list.add_style(a.clone()).unwrap();
        list.add_style(b.clone()).unwrap();
        assert_eq!(radius(&list, StateMask::DEFAULT), Some(2));

        let mut reversed = StyleList::new();
        reversed.add_style(b).unwrap();
        reversed.add_style(a).unwrap();
        assert_eq!(radius(&reversed, StateMask::DEFAULT), Some(1));
    }

    #[test]
    fn specificity_beats_addition_order() {
        let base = shared_with(&[(StateMask::PRESSED, 10)]);
        let top = shared_with(&[(StateMask::DEFAULT, 20)]);

        let mut list = StyleList::new();
        list.add_style(base).unwrap();
        list.add_style(top).unwrap();

        let found = list.lookup_int(RADIUS, StateMask::PRESSED).unwrap();
        assert_eq!((found.value, found.specificity), (10, 1));
        assert_eq!(radius(&list, StateMask::DEFAULT), Some(20));
    }

    #[test]
    fn specificity_beats_local_style() {
        let base = shared_with(&[(StateMask::PRESSED | StateMask::FOCUSED, 30)]);

        let mut list = StyleList::new();
        list.add_style(base).unwrap();
        list.set_local_int(RADIUS, StateMask::PRESSED, 5).unwrap();

        let both = StateMask::PRESSED | StateMask::FOCUSED;
        assert_eq!(radius(&list, both), Some(30));
        assert_eq!(radius(&list, StateMask::PRESSED), Some(5));
    }

    #[test]
    fn local_wins_ties() {
        let a = shared_with(&[(StateMask::DEFAULT, 1)]);

        let mut list = StyleList::new();
        list.set_local_int(RADIUS, StateMask::DEFAULT, 7).unwrap();
        list.add_style(a).unwrap();
        assert_eq!(radius(&list, StateMask::DEFAULT), Some(7));
    }

    #[test]
    fn local_style_is_created_lazily() {
        let mut list = StyleList::new();
        assert!(list.local().is_none());
        assert!(!list.remove_local(RADIUS, StateMask::DEFAULT));

        list.set_local_color(BG_COLOR, StateMask::DEFAULT, Color::from_rgba8(1, 2, 3, 255))
            .unwrap();
        assert!(list.has_local());
        assert_eq!(list.local().map(Style::len), Some(1));

        assert!(list.remove_local(BG_COLOR, StateMask::DEFAULT));
        assert!(list.lookup_color(BG_COLOR, StateMask::DEFAULT).is_none());
    }

    #[test]
    fn remove_style_by_identity() {
        let a = shared_with(&[(StateMask::DEFAULT, 1)]);
        let b = shared_with(&[(StateMask::DEFAULT, 2)]);
        let stranger = shared_with(&[(StateMask::DEFAULT, 3)]);

        let mut list = StyleList::new();
        list.add_style(a.clone()).unwrap();
        list.add_style(b.clone()).unwrap();

        assert!(!list.remove_style(&stranger));
        assert_eq!(list.style_count(), 2);

        assert!(list.remove_style(&b));
        assert_eq!(list.style_count(), 1);
        assert!(list.style(0).unwrap().ptr_eq(&a));
        assert_eq!(radius(&list, StateMask::DEFAULT), Some(1));

        assert!(!list.remove_style(&b));
    }

    #[test]
    fn duplicate_style_participates_twice() {
        let a = shared_with(&[(StateMask::DEFAULT, 1)]);
        let b = shared_with(&[(StateMask::DEFAULT, 2)]);

        let mut list = StyleList::new();
        list.add_style(a.clone()).unwrap();
        list.add_style(b.clone()).unwrap();
        list.add_style(a.clone()).unwrap();
        assert_eq!(list.style_count(), 3);
        assert_eq!(radius(&list, StateMask::DEFAULT), Some(1));

        // The earliest occurrence goes first, leaving [b, a].
        assert!(list.remove_style(&a));
        assert_eq!(list.style_count(), 2);
        assert!(list.style(0).unwrap().ptr_eq(&b));
        assert!(list.style(1).unwrap().ptr_eq(&a));
        assert_eq!(radius(&list, StateMask::DEFAULT), Some(1));

        assert!(list.remove_style(&a));
        assert_eq!(radius(&list, StateMask::DEFAULT), Some(2));
    }

    #[test]
    fn shared_mutation_is_visible() {
        let a = shared_with(&[(StateMask::DEFAULT, 1)]);
        let mut list = StyleList::new();
        list.add_style(a.clone()).unwrap();

        a.write().set_int(RADIUS, StateMask::DEFAULT, 8).unwrap();
        assert_eq!(radius(&list, StateMask::DEFAULT), Some(8));

        a.write().reset();
        assert!(radius(&list, StateMask::DEFAULT).is_none());
    }

    #[test]
    fn reset_returns_to_empty() {
        let a = shared_with(&[(StateMask::DEFAULT, 1)]);
        let mut list = StyleList::new();
        list.add_style(a.clone()).unwrap();
        list.set_local_int(RADIUS, StateMask::PRESSED, 2).unwrap();

        list.reset();
        assert_eq!(list.style_count(), 0);
        assert!(!list.has_local());
        assert!(radius(&list, StateMask::PRESSED).is_none());

        // The detached style is not destroyed.
        assert_eq!(a.read().len(), 1);
        assert_eq!(a.handle_count(), 1);

        list.add_style(a).unwrap();
        assert_eq!(radius(&list, StateMask::PRESSED), Some(1));
    }

    #[test]
    fn clone_copies_local_and_shares_styles() {
        let a = shared_with(&[(StateMask::DEFAULT, 1)]);
        let mut list = StyleList::new();
        list.add_style(a.clone()).unwrap();
        list.set_local_int(RADIUS, StateMask::PRESSED, 5).unwrap();

        let mut copy = list.clone();
        assert!(copy.style(0).unwrap().ptr_eq(&a));

        copy.set_local_int(RADIUS, StateMask::PRESSED, 6).unwrap();
        assert_eq!(radius(&list, StateMask::PRESSED), Some(5));
        assert_eq!(radius(&copy, StateMask::PRESSED), Some(6));

        a.write().set_int(RADIUS, StateMask::DEFAULT, 9).unwrap();
        assert_eq!(radius(&list, StateMask::DEFAULT), Some(9));
        assert_eq!(radius(&copy, StateMask::DEFAULT), Some(9));
    }

    #[test]
    fn copy_from_replaces_contents() {
        let a = shared_with(&[(StateMask::DEFAULT, 1)]);
        let b = shared_with(&[(StateMask::DEFAULT, 2)]);

        let mut src = StyleList::new();
        src.add_style(a.clone()).unwrap();

        let mut dst = StyleList::new();
        dst.add_style(b).unwrap();
        dst.set_local_int(RADIUS, StateMask::DEFAULT, 3).unwrap();

        dst.copy_from(&src).unwrap();
        assert_eq!(dst.style_count(), 1);
        assert!(dst.style(0).unwrap().ptr_eq(&a));
        assert!(!dst.has_local());
        assert_eq!(radius(&dst, StateMask::DEFAULT), Some(1));
    }

    #[test]
    fn lookup_skips_other_categories() {
        let a = SharedStyle::default();
        a.write()
            .set_color(BG_COLOR, StateMask::DEFAULT, Color::from_rgba8(9, 9, 9, 255))
            .unwrap();
        let mut list = StyleList::new();
        list.add_style(a).unwrap();

        assert!(list.lookup_int(BG_COLOR, StateMask::DEFAULT).is_none());
        assert!(list.lookup_color(BG_COLOR, StateMask::DEFAULT).is_some());
    }

    #[test]
    fn validate_covers_every_style() {
        let mut list = StyleList::new();
        list.add_style(shared_with(&[(StateMask::DEFAULT, 1)]))
            .unwrap();
        list.set_local_int(RADIUS, StateMask::DEFAULT, 2).unwrap();
        assert_eq!(list.validate(), Ok(()));
    }
}
