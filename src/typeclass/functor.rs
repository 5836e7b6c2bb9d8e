//! Functor type class - mapping over optional results.
//!
//! A `Functor` lets a function reach the value inside a container without
//! changing the container's shape. For `Option` this means an empty result
//! stays empty and the function is never called for it.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Lifting
//!
//! [`lift`] turns a plain function `A -> B` into a function
//! `Option<A> -> Option<B>`. The search functions use it to remap an index
//! found in a reversed view back into the original view.
//!
//! ```rust
//! use lambars_search::typeclass::lift;
//!
//! let mirror_in_five = lift(|index: usize| 5 - (index + 1));
//! assert_eq!(mirror_in_five(Some(1)), Some(3));
//!
//! let mirror_in_five = lift(|index: usize| 5 - (index + 1));
//! assert_eq!(mirror_in_five(None), None);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use lambars_search::typeclass::Functor;
///
/// let found: Option<usize> = Some(2);
/// assert_eq!(found.fmap(|index| index + 10), Some(12));
///
/// let missing: Option<usize> = None;
/// assert_eq!(missing.fmap(|index| index + 10), None);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value(s)
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

/// Lifts a function over plain values into a function over `Option`s.
///
/// The returned function yields `None` for `None` without calling
/// `function`, and `Some(function(value))` otherwise.
///
/// # Examples
///
/// ```rust
/// use lambars_search::typeclass::lift;
///
/// let describe = lift(|index: usize| format!("found at {index}"));
/// assert_eq!(describe(Some(4)), Some("found at 4".to_string()));
/// ```
#[inline]
pub fn lift<A, B, F>(function: F) -> impl FnOnce(Option<A>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    move |value| value.fmap(function)
}
