//! # lambars-search
//!
//! Point-free search over generic sequences, built on `Option` as a functor
//! and on small predicate combinators.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor) for `Option` and the
//!   [`lift`](typeclass::lift) combinator
//! - **Function Composition**: [`bind_first`](compose::bind_first) and
//!   [`is_equal`](compose::is_equal)
//! - **Sequences**: the [`Sequence`](sequence::Sequence) abstraction over
//!   slices, vectors, deques, linked lists and strings, plus a reversed view
//! - **Search**: first/last match by predicate or value, all matching
//!   indices, and overlapping or non-overlapping subsequence search
//!
//! "Not found" is never a sentinel: single results are `Option<_>` and
//! multi-results are an empty container.
//!
//! ## Feature Flags
//!
//! - `typeclass`: `TypeConstructor`, `Functor`, `lift`
//! - `compose`: Predicate combinators
//! - `sequence`: The `Sequence` trait and its implementations
//! - `search`: The search functions (enables the three above)
//! - `smallvec`: `Sequence` for `SmallVec`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_search::prelude::*;
//!
//! let is_even = |n: &i32| n % 2 == 0;
//! assert_eq!(find_first_idx_by(is_even, &[1, 3, 4, 6, 9]), Some(2));
//! assert_eq!(find_last_idx_by(is_even, &[1, 3, 4, 6, 9]), Some(3));
//!
//! let matches: Vec<usize> = find_all_instances_of("haha", "oh, hahaha!");
//! assert_eq!(matches, vec![4, 6]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and search functions.
///
/// # Usage
///
/// ```rust
/// use lambars_search::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "search")]
    pub use crate::search::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "search")]
pub mod search;
