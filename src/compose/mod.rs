//! Function composition utilities for building predicates point-free.
//!
//! The search functions take unary predicates. Value-based searches derive
//! theirs from a binary test by fixing one operand:
//!
//! ```text
//! bind_first(f, a)(b) = f(a, b)
//! ```
//!
//! # Examples
//!
//! ```
//! use lambars_search::compose::{bind_first, is_equal};
//!
//! let equals_h = bind_first(is_equal, &'h');
//! let count = "oh, hahaha!".chars().filter(|c| equals_h(c)).count();
//! assert_eq!(count, 4);
//! ```

mod utils;

pub use utils::{bind_first, is_equal};
