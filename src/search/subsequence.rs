//! Occurrences of a token (a subsequence) inside a longer sequence.
//!
//! A token of size `m` occurs at index `i` of `xs` when the `m` elements of
//! `xs` starting at `i` are equal, in order, to the token's elements. The
//! candidate starts are `0..=size(xs) - m`.
//!
//! An empty token occurs at every index `0..=size(xs)`, including the one
//! just past the last element.

use super::as_element;
use crate::sequence::{Sequence, appender};

/// Returns `true` when every element of `token` equals the element at the
/// same offset of `window`.
///
/// `window` must hold at least as many elements as `token`.
fn window_matches<T, S>(token: &T, window: S::Elements<'_>) -> bool
where
    T: Sequence<Element = S::Element> + ?Sized,
    S: Sequence + ?Sized,
    S::Element: PartialEq,
{
    token.elements().zip(window).all(|(expected, actual)| {
        let expected: &T::Element = as_element(&expected);
        let actual: &S::Element = as_element(&actual);
        expected == actual
    })
}

/// Returns every index at which `token` occurs in `xs`, overlapping
/// occurrences included, in ascending order.
///
/// A token longer than `xs` yields an empty result without scanning.
///
/// Each candidate start is compared naively, so the cost is
/// O(size(xs) × size(token)). [`find_all_instances_of_kmp`] returns the same
/// indices in linear time.
///
/// [`find_all_instances_of_kmp`]: super::find_all_instances_of_kmp
///
/// # Examples
///
/// ```
/// use lambars_search::search::find_all_instances_of;
///
/// let matches: Vec<usize> = find_all_instances_of("haha", "oh, hahaha!");
/// assert_eq!(matches, vec![4, 6]);
///
/// let overlapping: Vec<usize> = find_all_instances_of(&[1, 1], &[1, 1, 1]);
/// assert_eq!(overlapping, vec![0, 1]);
///
/// let too_long: Vec<usize> = find_all_instances_of("hahaha", "haha");
/// assert!(too_long.is_empty());
/// ```
pub fn find_all_instances_of<C, T, S>(token: &T, xs: &S) -> C
where
    C: Default + Extend<usize>,
    T: Sequence<Element = S::Element> + ?Sized,
    S: Sequence + ?Sized,
    S::Element: PartialEq,
{
    instances_of_sized(token, token.size(), xs)
}

/// Overlapping scan with the token's size already measured.
fn instances_of_sized<C, T, S>(token: &T, token_size: usize, xs: &S) -> C
where
    C: Default + Extend<usize>,
    T: Sequence<Element = S::Element> + ?Sized,
    S: Sequence + ?Sized,
    S::Element: PartialEq,
{
    let size = xs.size();
    if token_size > size {
        return C::default();
    }

    let last_possible_idx = size - token_size;
    let mut result = C::default();
    {
        let mut push = appender(&mut result);
        let mut window = xs.elements();
        let mut idx = 0;
        loop {
            if window_matches::<T, S>(token, window.clone()) {
                push(idx);
            }
            // last_possible_idx itself is a candidate; stop only after checking it.
            if idx == last_possible_idx {
                break;
            }
            window.next();
            idx += 1;
        }
    }
    result
}

/// Returns the leftmost-greedy set of non-overlapping occurrences of
/// `token` in `xs`, in ascending order.
///
/// The overlapping occurrences are walked in order; the first is kept and
/// each later one is kept only if it starts at or after the end of the last
/// kept occurrence.
///
/// # Examples
///
/// ```
/// use lambars_search::search::find_all_instances_of_non_overlapping;
///
/// let matches: Vec<usize> = find_all_instances_of_non_overlapping("haha", "oh, hahaha!");
/// assert_eq!(matches, vec![4]);
///
/// let matches: Vec<usize> = find_all_instances_of_non_overlapping("aa", "aaaaa");
/// assert_eq!(matches, vec![0, 2]);
/// ```
pub fn find_all_instances_of_non_overlapping<C, T, S>(token: &T, xs: &S) -> C
where
    C: Default + Extend<usize>,
    T: Sequence<Element = S::Element> + ?Sized,
    S: Sequence + ?Sized,
    S::Element: PartialEq,
{
    let token_size = token.size();
    let overlapping_instances: Vec<usize> = instances_of_sized(token, token_size, xs);

    let mut result = C::default();
    {
        let mut push = appender(&mut result);
        let mut last_kept: Option<usize> = None;
        for idx in overlapping_instances {
            if last_kept.is_none_or(|kept| kept + token_size <= idx) {
                push(idx);
                last_kept = Some(idx);
            }
        }
    }
    result
}
