//! Borrowed little-endian word sequences.
//!
//! Neither type owns or allocates anything: callers hand in a pre-sized
//! buffer, and the view never outlives the call it was made for. [`Canvas`]
//! is the exclusively-mutable flavor; exclusivity is exactly `&mut`, so no
//! runtime check is needed.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Deref;

use ref_cast::RefCast;

use crate::{Element, Signum};

/// A read-only view of little-endian digits: the value `Σ self[i]·base^i`.
///
/// Dereferences to the underlying digit slice.
#[derive(RefCast)]
#[repr(transparent)]
pub struct Body<E: Element>(pub(crate) [E]);

/// An exclusively-mutable [`Body`].
#[derive(RefCast)]
#[repr(transparent)]
pub struct Canvas<E: Element>(pub(crate) [E]);

impl<E: Element> Body<E> {
    #[inline]
    pub fn new(words: &[E]) -> &Self {
        Self::ref_cast(words)
    }

    /// View of the first `count` words of `buffer`; panics on a short
    /// buffer, which is a calling-convention violation rather than data.
    #[inline]
    pub fn with_count(buffer: &[E], count: usize) -> &Self {
        Self::ref_cast(&buffer[..count])
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|digit| digit.is_zero())
    }

    /// 0 if zero, else index + 1 of the last non-zero digit.
    pub fn significant_len(&self) -> usize {
        self.0
            .iter()
            .enumerate()
            .rev()
            .find(|(_, digit)| !digit.is_zero())
            .map(|(i, _)| i + 1)
            .unwrap_or(0)
    }

    /// The view without trailing zero digits.
    #[inline]
    pub fn significant(&self) -> &Self {
        Self::ref_cast(&self.0[..self.significant_len()])
    }

    #[inline]
    pub fn leading(&self) -> Option<E> {
        self.0.last().copied()
    }

    /// Three-way comparison of the represented values; lengths may differ.
    pub fn compared(&self, other: &Self) -> Signum {
        let l_m = self.significant_len();
        let l_n = other.significant_len();
        match l_m.cmp(&l_n) {
            Ordering::Equal => {}
            not_equal => return not_equal.into(),
        }

        // little-endian: comparison starts at the last digit
        for i in (0..l_m).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => (),
                not_equal => return not_equal.into(),
            }
        }
        Signum::Zero
    }
}

impl<E: Element> Canvas<E> {
    #[inline]
    pub fn new(words: &mut [E]) -> &mut Self {
        Self::ref_cast_mut(words)
    }

    /// Mutable view of the first `count` words of `buffer`.
    #[inline]
    pub fn with_count(buffer: &mut [E], count: usize) -> &mut Self {
        Self::ref_cast_mut(&mut buffer[..count])
    }

    #[inline]
    pub fn as_body(&self) -> &Body<E> {
        Body::ref_cast(&self.0)
    }

    #[inline]
    pub fn fill(&mut self, digit: E) {
        for slot in self.0.iter_mut() {
            *slot = digit;
        }
    }
}

impl<E: Element> Deref for Body<E> {
    type Target = [E];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<E: Element> Deref for Canvas<E> {
    type Target = Body<E>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_body()
    }
}

impl<E: Element> PartialEq for Body<E> {
    fn eq(&self, other: &Self) -> bool {
        self.compared(other).is_zero()
    }
}

impl<E: Element> fmt::Debug for Body<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<E: Element> fmt::Debug for Canvas<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_body(), f)
    }
}
