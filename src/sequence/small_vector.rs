//! `Sequence` for `SmallVec`, enabled by the `smallvec` feature.
//!
//! `SmallVec` also implements `Default + Extend`, so it works as a result
//! container for the multi-occurrence searches without extra glue.

use smallvec::{Array, SmallVec};
use std::slice;

use super::Sequence;

impl<A: Array> Sequence for SmallVec<A> {
    type Element = A::Item;
    type Elements<'a>
        = slice::Iter<'a, A::Item>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}
