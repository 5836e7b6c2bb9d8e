//! Search over generic sequences.
//!
//! Every function here is pure: it borrows its inputs and returns a freshly
//! built result. "Not found" is an ordinary outcome, reported as `None` for
//! single results and as an empty container for multi-results.
//!
//! # Overview
//!
//! - Element/index search by predicate: [`find_first_by`], [`find_last_by`],
//!   [`find_first_idx_by`], [`find_last_idx_by`]
//! - Index search by value: [`find_first_idx`], [`find_last_idx`]
//! - All matching indices: [`find_all_idxs_by`], [`find_all_idxs_of`]
//! - Subsequence search: [`find_all_instances_of`],
//!   [`find_all_instances_of_non_overlapping`], [`find_all_instances_of_kmp`]
//!
//! # Searching from the end
//!
//! The "last" searches do not scan backwards themselves. They run the
//! forward search on a [`reverse`](crate::sequence::reverse)d view and map
//! the index back with [`mirror_index`](crate::sequence::mirror_index),
//! lifted over the `Option` so that a miss stays a miss:
//!
//! ```text
//! find_last_idx_by(p, xs) = lift(|i| size(xs) - (i + 1))(find_first_idx_by(p, reverse(xs)))
//! ```
//!
//! # Result containers
//!
//! Multi-result searches are generic over any `C: Default + Extend<usize>`,
//! so the caller picks `Vec`, `VecDeque`, `LinkedList` or `SmallVec`.
//! Indices are always appended in ascending order.
//!
//! # Examples
//!
//! ```
//! use lambars_search::search::{find_all_idxs_by, find_first_idx_by, find_last_idx};
//!
//! let is_even = |n: &i32| n % 2 == 0;
//! assert_eq!(find_first_idx_by(is_even, &[1, 3, 5, 7, 9]), None);
//!
//! let evens: Vec<usize> = find_all_idxs_by(is_even, &[1, 3, 4, 6, 9]);
//! assert_eq!(evens, vec![2, 3]);
//!
//! assert_eq!(find_last_idx(&4, &[1, 3, 4, 4, 9]), Some(3));
//! ```

mod element;
mod occurrence;
mod prefix_table;
mod subsequence;
mod value;

pub use element::{find_first_by, find_first_idx_by, find_last_by, find_last_idx_by};
pub use occurrence::{find_all_idxs_by, find_all_idxs_of};
pub use prefix_table::find_all_instances_of_kmp;
pub use subsequence::{find_all_instances_of, find_all_instances_of_non_overlapping};
pub use value::{find_first_idx, find_last_idx};

use std::borrow::Borrow;

/// Views an item yielded by `Sequence::elements` as the element it stands for.
#[inline]
fn as_element<E, I: Borrow<E>>(item: &I) -> &E {
    item.borrow()
}
