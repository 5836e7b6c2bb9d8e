//! Generic sequences.
//!
//! The search functions are written once against [`Sequence`]: an ordered,
//! finite collection that can be walked from either end and knows its size.
//! Slices, arrays, `Vec`, `VecDeque`, `LinkedList`, `str` and `String` all
//! implement it, and so does the [`Reversed`] view returned by [`reverse`].
//!
//! # Helpers
//!
//! - [`size_of`]: Number of elements in a sequence
//! - [`reverse`]: A reversed view that borrows the original
//! - [`mirror_index`]: Maps an index in a reversed view back to the original
//! - [`appender`]: An append-only sink over any `Extend` container
//!
//! # Examples
//!
//! ```
//! use lambars_search::sequence::{Sequence, mirror_index, reverse, size_of};
//!
//! let values = vec![1, 3, 4, 6, 9];
//! let reversed = reverse(&values);
//!
//! let backwards: Vec<i32> = reversed.elements().copied().collect();
//! assert_eq!(backwards, vec![9, 6, 4, 3, 1]);
//!
//! // 6 sits at index 1 of the reversed view and at index 3 of the original.
//! assert_eq!(mirror_index(size_of(&values), 1), 3);
//! ```

mod reversed;
#[cfg(feature = "smallvec")]
mod small_vector;
mod std_impls;

pub use reversed::Reversed;

use std::borrow::Borrow;

/// An ordered, finite sequence of elements.
///
/// Elements are produced by a double-ended iterator so that a sequence can be
/// scanned from the front or from the back. The iterator's items only need to
/// borrow as `&Element`: slices yield `&T`, strings yield `char` by value.
///
/// # Laws
///
/// - `elements().count() == size()`
/// - `elements().rev()` yields the same elements as `elements()`, in the
///   opposite order
/// - Walking the elements never mutates the sequence
///
/// # Examples
///
/// ```
/// use lambars_search::sequence::Sequence;
///
/// let text = "haha";
/// assert_eq!(text.size(), 4);
/// assert_eq!(text.elements().rev().next(), Some('a'));
///
/// let values = [1, 2, 3];
/// assert_eq!(values.elements().next(), Some(&1));
/// ```
pub trait Sequence {
    /// The type of the elements in the sequence.
    type Element;

    /// The iterator over the elements, front to back.
    type Elements<'a>: DoubleEndedIterator<Item: Borrow<Self::Element>> + Clone
    where
        Self: 'a;

    /// Returns an iterator over the elements, front to back.
    fn elements(&self) -> Self::Elements<'_>;

    /// Returns the number of elements.
    ///
    /// This is O(1) for every implementation except `str` and `String`,
    /// which count their chars. Callers compute it once per search.
    fn size(&self) -> usize;

    /// Returns whether the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Returns the number of elements in `sequence`.
///
/// # Examples
///
/// ```
/// use lambars_search::sequence::size_of;
///
/// assert_eq!(size_of(&[1, 3, 4]), 3);
/// assert_eq!(size_of("oh, hahaha!"), 11);
/// ```
#[inline]
pub fn size_of<S: Sequence + ?Sized>(sequence: &S) -> usize {
    sequence.size()
}

/// Returns a view of `sequence` with its elements in the opposite order.
///
/// The view borrows `sequence`; nothing is copied and the original is left
/// untouched.
///
/// # Examples
///
/// ```
/// use lambars_search::sequence::{Sequence, reverse};
///
/// let text = String::from("oh!");
/// let reversed: String = reverse(&text).elements().collect();
/// assert_eq!(reversed, "!ho");
/// assert_eq!(text, "oh!");
/// ```
#[inline]
pub const fn reverse<S: Sequence + ?Sized>(sequence: &S) -> Reversed<'_, S> {
    Reversed::new(sequence)
}

/// Maps an index found in a reversed view of a sequence of `size` elements
/// back to the index of the same element in the original order.
///
/// This is the only place the mirror formula `size - (index + 1)` is written.
///
/// `index` must be smaller than `size`.
///
/// # Examples
///
/// ```
/// use lambars_search::sequence::mirror_index;
///
/// assert_eq!(mirror_index(5, 0), 4);
/// assert_eq!(mirror_index(5, 4), 0);
/// ```
#[inline]
pub const fn mirror_index(size: usize, index: usize) -> usize {
    debug_assert!(index < size);
    size - (index + 1)
}

/// Returns a sink that appends every value it receives to `container`, in
/// call order.
///
/// Any `Extend` container works, so callers choose the result representation.
///
/// # Examples
///
/// ```
/// use lambars_search::sequence::appender;
/// use std::collections::LinkedList;
///
/// let mut indices = LinkedList::new();
/// {
///     let mut push = appender(&mut indices);
///     push(2);
///     push(3);
/// }
/// assert_eq!(indices.into_iter().collect::<Vec<_>>(), vec![2, 3]);
/// ```
#[inline]
pub fn appender<T, C: Extend<T>>(container: &mut C) -> impl FnMut(T) {
    move |value| container.extend(std::iter::once(value))
}
