//! Type class traits for optional search results.
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Functor`]: Mapping over container values
//! - [`lift`]: Turning `A -> B` into `Option<A> -> Option<B>`
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, which lets `Functor` be stated once for any container.
//!
//! # Examples
//!
//! ```rust
//! use lambars_search::typeclass::{Functor, lift};
//!
//! let found: Option<usize> = Some(1);
//! assert_eq!(found.fmap(|index| index + 1), Some(2));
//!
//! let shift = lift(|index: usize| index + 1);
//! assert_eq!(shift(None), None);
//! ```

mod functor;
mod higher;

pub use functor::{Functor, lift};
pub use higher::TypeConstructor;
