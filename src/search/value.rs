//! First and last index of a given value.
//!
//! Both searches build the predicate "equals `x`" by fixing the first
//! operand of [`is_equal`] and delegate to the predicate searches.

use super::element::{find_first_idx_by, find_last_idx_by};
use crate::compose::{bind_first, is_equal};
use crate::sequence::Sequence;

/// Returns the index of the first element of `xs` equal to `x`.
///
/// # Examples
///
/// ```
/// use lambars_search::search::find_first_idx;
///
/// assert_eq!(find_first_idx(&4, &[1, 3, 4, 4, 9]), Some(2));
/// assert_eq!(find_first_idx(&4, &[1, 3, 5, 7, 9]), None);
/// ```
pub fn find_first_idx<S>(x: &S::Element, xs: &S) -> Option<usize>
where
    S: Sequence + ?Sized,
    S::Element: PartialEq,
{
    find_first_idx_by(bind_first(is_equal::<S::Element>, x), xs)
}

/// Returns the index of the last element of `xs` equal to `x`.
///
/// # Examples
///
/// ```
/// use lambars_search::search::find_last_idx;
///
/// assert_eq!(find_last_idx(&4, &[1, 3, 4, 4, 9]), Some(3));
/// assert_eq!(find_last_idx(&4, &[1, 3, 5, 7, 9]), None);
/// ```
pub fn find_last_idx<S>(x: &S::Element, xs: &S) -> Option<usize>
where
    S: Sequence + ?Sized,
    S::Element: PartialEq,
{
    find_last_idx_by(bind_first(is_equal::<S::Element>, x), xs)
}
