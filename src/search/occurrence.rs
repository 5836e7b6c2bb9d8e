//! All indices matching a predicate or a value.

use super::as_element;
use crate::compose::{bind_first, is_equal};
use crate::sequence::{Sequence, appender};

/// Returns the index of every element of `xs` that satisfies `predicate`,
/// in ascending order.
///
/// `xs` is scanned once, front to back. The result container is chosen by
/// the caller.
///
/// # Examples
///
/// ```
/// use lambars_search::search::find_all_idxs_by;
/// use std::collections::LinkedList;
///
/// let is_even = |n: &i32| n % 2 == 0;
///
/// let indices: Vec<usize> = find_all_idxs_by(is_even, &[1, 3, 4, 6, 9]);
/// assert_eq!(indices, vec![2, 3]);
///
/// let none: LinkedList<usize> = find_all_idxs_by(is_even, &[1, 3, 5]);
/// assert!(none.is_empty());
/// ```
pub fn find_all_idxs_by<C, S, P>(predicate: P, xs: &S) -> C
where
    C: Default + Extend<usize>,
    S: Sequence + ?Sized,
    P: Fn(&S::Element) -> bool,
{
    let mut result = C::default();
    {
        let mut push = appender(&mut result);
        for (index, item) in xs.elements().enumerate() {
            if predicate(as_element(&item)) {
                push(index);
            }
        }
    }
    result
}

/// Returns the index of every element of `xs` equal to `x`, in ascending
/// order.
///
/// # Examples
///
/// ```
/// use lambars_search::search::find_all_idxs_of;
///
/// let indices: Vec<usize> = find_all_idxs_of(&4, &[1, 3, 4, 4, 9]);
/// assert_eq!(indices, vec![2, 3]);
/// ```
pub fn find_all_idxs_of<C, S>(x: &S::Element, xs: &S) -> C
where
    C: Default + Extend<usize>,
    S: Sequence + ?Sized,
    S::Element: PartialEq,
{
    find_all_idxs_by(bind_first(is_equal::<S::Element>, x), xs)
}
