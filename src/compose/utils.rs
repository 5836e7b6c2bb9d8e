//! Predicate combinators.
//!
//! - [`is_equal`]: The equality test as a plain binary function
//! - [`bind_first`]: Fixes the first argument of a binary function,
//!   producing a unary one
//!
//! Together they build the "equals x" predicate used by the value-based
//! searches:
//!
//! ```
//! use lambars_search::compose::{bind_first, is_equal};
//!
//! let equals_four = bind_first(is_equal, &4);
//! assert!(equals_four(&4));
//! assert!(!equals_four(&5));
//! ```

/// Returns `true` when both arguments are equal.
///
/// This is `PartialEq::eq` as a free function, so it can be passed where a
/// binary predicate is expected.
///
/// # Examples
///
/// ```
/// use lambars_search::compose::is_equal;
///
/// assert!(is_equal(&'a', &'a'));
/// assert!(is_equal("haha", "haha"));
/// assert!(!is_equal(&[1, 2][..], &[2, 1][..]));
/// ```
#[inline]
pub fn is_equal<T: PartialEq + ?Sized>(first: &T, second: &T) -> bool {
    first == second
}

/// Fixes the first argument of a binary function.
///
/// Given `function(a, b)` and a fixed `a`, returns `|b| function(a, b)`.
/// The fixed value is borrowed, so the returned function can be called any
/// number of times without cloning it.
///
/// # Type Parameters
///
/// * `A` - The type of the fixed first argument
/// * `B` - The type of the remaining argument
/// * `C` - The return type of the function
/// * `F` - The binary function type
///
/// # Examples
///
/// ```
/// use lambars_search::compose::bind_first;
///
/// fn starts_with(prefix: &str, text: &str) -> bool {
///     text.starts_with(prefix)
/// }
///
/// let is_greeting = bind_first(starts_with, "hello");
/// assert!(is_greeting("hello, world"));
/// assert!(!is_greeting("goodbye"));
/// ```
#[inline]
pub fn bind_first<A, B, C, F>(function: F, fixed: &A) -> impl Fn(&B) -> C
where
    A: ?Sized,
    B: ?Sized,
    F: Fn(&A, &B) -> C,
{
    move |value: &B| function(fixed, value)
}
