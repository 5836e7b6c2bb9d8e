#![cfg(feature = "typeclass")]
//! Property-based tests for `Functor` on `Option` and for `lift`.
//!
//! - **Identity Law**: `lift(|x| x)(fa) == fa`
//! - **Composition Law**: `lift(g)(lift(f)(fa)) == lift(|x| g(f(x)))(fa)`
//! - **Emptiness**: `lift(f)(None) == None` without calling `f`
//! - **Agreement**: `lift(f)(fa) == fa.fmap(f)`

use lambars_search::typeclass::{Functor, lift};
use proptest::prelude::*;
use std::cell::Cell;

proptest! {
    #[test]
    fn prop_lift_identity_law(value in any::<Option<usize>>()) {
        let identity = lift(|x: usize| x);
        prop_assert_eq!(identity(value), value);
    }

    #[test]
    fn prop_lift_composition_law(value in any::<Option<usize>>()) {
        let function1 = |n: usize| n.wrapping_add(1);
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = lift(function2)(lift(function1)(value));
        let right = lift(move |x| function2(function1(x)))(value);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_lift_agrees_with_fmap(value in any::<Option<u32>>()) {
        let describe = |n: u32| n.to_string();
        prop_assert_eq!(lift(describe)(value), value.fmap(describe));
    }

    #[test]
    fn prop_lift_mirror_stays_in_bounds(size in 1usize..1000, seed in any::<usize>()) {
        let index = seed % size;
        let mirrored = lift(move |i: usize| size - (i + 1))(Some(index));

        prop_assert!(mirrored.is_some_and(|i| i < size));
    }
}

#[test]
fn lift_skips_function_for_none() {
    let calls = Cell::new(0);
    let counted = lift(|n: usize| {
        calls.set(calls.get() + 1);
        n
    });

    assert_eq!(counted(None), None);
    assert_eq!(calls.get(), 0);
}

#[test]
fn prelude_keeps_std_option_replace() {
    #[allow(unused_imports)]
    use lambars_search::prelude::*;

    let mut slot = Some(1);
    let old = slot.replace(2);

    assert_eq!(old, Some(1));
    assert_eq!(slot, Some(2));
}
