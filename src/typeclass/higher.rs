//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Search results are carried as `Option<_>` and remapped without being
//! unwrapped: an `Option<usize>` found in a reversed view becomes an
//! `Option<usize>` in the original view. [`TypeConstructor`] names the
//! "same container, different payload" relationship that makes such a
//! remapping expressible generically.
//!
//! # Example
//!
//! ```rust
//! use lambars_search::typeclass::TypeConstructor;
//!
//! fn forget_payload<T: TypeConstructor>(_value: T) -> T::WithType<()>
//! where
//!     T::WithType<()>: Default,
//! {
//!     Default::default()
//! }
//!
//! let found: Option<usize> = Some(3);
//! assert_eq!(forget_payload(found), None);
//! ```

/// A trait representing a type constructor.
///
/// It allows abstracting over a type constructor such as `Option<_>` while
/// changing the type it is applied to.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Option<usize>` this is `usize`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The resulting type is itself a type constructor, so transformations
    /// can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
