//! Knuth–Morris–Pratt subsequence search.
//!
//! The prefix table holds, for each prefix of the token, the length of its
//! longest proper prefix that is also a suffix. On a mismatch the scan falls
//! back through the table instead of re-reading `xs`, so each element of
//! `xs` is consumed once.

use super::as_element;
use crate::sequence::{Sequence, appender};

/// Builds the prefix table of `pattern`.
///
/// `table[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it.
fn prefix_table<E: PartialEq>(pattern: &[&E]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut matched = 0;
    for position in 1..pattern.len() {
        while matched > 0 && pattern[position] != pattern[matched] {
            matched = table[matched - 1];
        }
        if pattern[position] == pattern[matched] {
            matched += 1;
        }
        table[position] = matched;
    }
    table
}

/// Returns every index at which `token` occurs in `xs`, overlapping
/// occurrences included, in ascending order.
///
/// Produces exactly the indices of
/// [`find_all_instances_of`](super::find_all_instances_of), including for an
/// empty token (every index `0..=size(xs)`) and for a token longer than `xs`
/// (nothing), in O(size(xs) + size(token)) comparisons.
///
/// The token's elements are buffered once; `xs` is walked front to back
/// exactly once.
///
/// # Examples
///
/// ```
/// use lambars_search::search::find_all_instances_of_kmp;
///
/// let matches: Vec<usize> = find_all_instances_of_kmp("haha", "oh, hahaha!");
/// assert_eq!(matches, vec![4, 6]);
///
/// let matches: Vec<usize> = find_all_instances_of_kmp(&[1, 2, 1], &[1, 2, 1, 2, 1]);
/// assert_eq!(matches, vec![0, 2]);
/// ```
pub fn find_all_instances_of_kmp<C, T, S>(token: &T, xs: &S) -> C
where
    C: Default + Extend<usize>,
    T: Sequence<Element = S::Element> + ?Sized,
    S: Sequence + ?Sized,
    S::Element: PartialEq,
{
    let token_items: Vec<_> = token.elements().collect();
    let pattern: Vec<&S::Element> = token_items
        .iter()
        .map(|item| -> &S::Element { as_element::<T::Element, _>(item) })
        .collect();

    let mut result = C::default();
    {
        let mut push = appender(&mut result);

        if pattern.is_empty() {
            (0..=xs.size()).for_each(&mut push);
        } else {
            let table = prefix_table(&pattern);
            let mut matched = 0;
            for (position, item) in xs.elements().enumerate() {
                let element: &S::Element = as_element(&item);
                while matched > 0 && pattern[matched] != element {
                    matched = table[matched - 1];
                }
                if pattern[matched] == element {
                    matched += 1;
                }
                if matched == pattern.len() {
                    push(position + 1 - matched);
                    matched = table[matched - 1];
                }
            }
        }
    }
    result
}
