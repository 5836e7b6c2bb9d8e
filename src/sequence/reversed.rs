//! A borrowed, reversed view of a sequence.

use std::iter::Rev;

use super::Sequence;

/// A view of a [`Sequence`] whose elements appear back to front.
///
/// Created by [`reverse`](super::reverse). The view only borrows the
/// original, so it is `Copy` and shares the original's thread-safety.
///
/// Searching a `Reversed` view from the front is searching the original from
/// the back; indices found in the view are mapped back with
/// [`mirror_index`](super::mirror_index).
///
/// # Examples
///
/// ```
/// use lambars_search::sequence::{Sequence, reverse};
///
/// let values = [1, 3, 4];
/// let reversed = reverse(&values[..]);
/// assert_eq!(reversed.size(), 3);
/// assert_eq!(reversed.elements().next(), Some(&4));
///
/// // Reversing twice restores the original order.
/// let restored: Vec<i32> = reverse(&reversed).elements().copied().collect();
/// assert_eq!(restored, vec![1, 3, 4]);
/// ```
#[derive(Debug)]
pub struct Reversed<'a, S: ?Sized> {
    sequence: &'a S,
}

impl<'a, S: ?Sized> Reversed<'a, S> {
    /// Creates a reversed view of `sequence`.
    #[inline]
    pub const fn new(sequence: &'a S) -> Self {
        Self { sequence }
    }
}

impl<S: ?Sized> Clone for Reversed<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Reversed<'_, S> {}

impl<S: Sequence + ?Sized> Sequence for Reversed<'_, S> {
    type Element = S::Element;
    type Elements<'a>
        = Rev<S::Elements<'a>>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.sequence.elements().rev()
    }

    #[inline]
    fn size(&self) -> usize {
        self.sequence.size()
    }
}

static_assertions::assert_impl_all!(Reversed<'static, [i32]>: Sequence, Copy, Send, Sync);
static_assertions::assert_impl_all!(Reversed<'static, str>: Sequence, Copy, Send, Sync);
