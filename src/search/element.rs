//! First and last match by predicate.

use super::as_element;
use crate::sequence::{Sequence, mirror_index, reverse};
use crate::typeclass::lift;

/// Returns the first element of `xs` that satisfies `predicate`.
///
/// Elements are tested front to back; the scan stops at the first match.
///
/// # Examples
///
/// ```
/// use lambars_search::search::find_first_by;
///
/// let is_even = |n: &i32| n % 2 == 0;
/// assert_eq!(find_first_by(is_even, &[1, 3, 4, 6, 9]), Some(4));
/// assert_eq!(find_first_by(is_even, &[1, 3, 5, 7, 9]), None);
/// ```
pub fn find_first_by<S, P>(predicate: P, xs: &S) -> Option<S::Element>
where
    S: Sequence + ?Sized,
    S::Element: Clone,
    P: Fn(&S::Element) -> bool,
{
    xs.elements()
        .find(|item| predicate(as_element(item)))
        .map(|item| as_element::<S::Element, _>(&item).clone())
}

/// Returns the last element of `xs` that satisfies `predicate`.
///
/// This is [`find_first_by`] applied to the reversed view of `xs`.
///
/// # Examples
///
/// ```
/// use lambars_search::search::find_last_by;
///
/// let is_even = |n: &i32| n % 2 == 0;
/// assert_eq!(find_last_by(is_even, &[1, 3, 4, 6, 9]), Some(6));
/// assert_eq!(find_last_by(is_even, &[1, 3, 5, 7, 9]), None);
/// ```
pub fn find_last_by<S, P>(predicate: P, xs: &S) -> Option<S::Element>
where
    S: Sequence + ?Sized,
    S::Element: Clone,
    P: Fn(&S::Element) -> bool,
{
    find_first_by(predicate, &reverse(xs))
}

/// Returns the index of the first element of `xs` that satisfies
/// `predicate`.
///
/// # Examples
///
/// ```
/// use lambars_search::search::find_first_idx_by;
///
/// let is_even = |n: &i32| n % 2 == 0;
/// assert_eq!(find_first_idx_by(is_even, &[1, 3, 4, 6, 9]), Some(2));
/// assert_eq!(find_first_idx_by(is_even, &[1, 3, 5, 7, 9]), None);
/// ```
pub fn find_first_idx_by<S, P>(predicate: P, xs: &S) -> Option<usize>
where
    S: Sequence + ?Sized,
    P: Fn(&S::Element) -> bool,
{
    xs.elements().position(|item| predicate(as_element(&item)))
}

/// Returns the index of the last element of `xs` that satisfies `predicate`.
///
/// The first match in the reversed view is found with
/// [`find_first_idx_by`] and mapped back with
/// [`mirror_index`](crate::sequence::mirror_index). The mapping is lifted
/// over the `Option`, so a miss is returned untouched.
///
/// # Examples
///
/// ```
/// use lambars_search::search::find_last_idx_by;
///
/// let is_even = |n: &i32| n % 2 == 0;
/// assert_eq!(find_last_idx_by(is_even, &[1, 3, 4, 6, 9]), Some(3));
/// assert_eq!(find_last_idx_by(is_even, &[1, 3, 5, 7, 9]), None);
/// ```
pub fn find_last_idx_by<S, P>(predicate: P, xs: &S) -> Option<usize>
where
    S: Sequence + ?Sized,
    P: Fn(&S::Element) -> bool,
{
    let size = xs.size();
    let to_original_index = lift(move |index| mirror_index(size, index));
    to_original_index(find_first_idx_by(predicate, &reverse(xs)))
}
