//! `Sequence` implementations for standard library collections.

use std::collections::{LinkedList, VecDeque, linked_list, vec_deque};
use std::slice;
use std::str::Chars;

use super::Sequence;

// =============================================================================
// Contiguous collections
// =============================================================================

impl<T> Sequence for [T] {
    type Element = T;
    type Elements<'a>
        = slice::Iter<'a, T>
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

impl<T, const N: usize> Sequence for [T; N] {
    type Element = T;
    type Elements<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<T> Sequence for Vec<T> {
    type Element = T;
    type Elements<'a>
        = slice::Iter<'a, T>
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

// =============================================================================
// Linked and ring-buffer collections
// =============================================================================

impl<T> Sequence for VecDeque<T> {
    type Element = T;
    type Elements<'a>
        = vec_deque::Iter<'a, T>
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

impl<T> Sequence for LinkedList<T> {
    type Element = T;
    type Elements<'a>
        = linked_list::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    /// `LinkedList` tracks its length, so this is O(1).
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Strings (sequences of chars)
// =============================================================================

impl Sequence for str {
    type Element = char;
    type Elements<'a>
        = Chars<'a>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.chars()
    }

    /// Counts chars, so this is O(n) in the byte length.
    #[inline]
    fn size(&self) -> usize {
        self.chars().count()
    }
}

impl Sequence for String {
    type Element = char;
    type Elements<'a>
        = Chars<'a>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.chars()
    }

    #[inline]
    fn size(&self) -> usize {
        self.as_str().size()
    }
}
