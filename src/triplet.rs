//! The fixed triple-width composite integer.
//!
//! `Triplet` mostly exists to give 3-by-2 division something to stand on:
//! trial products, corrections and the final remainder of
//! [`division3212`](crate::arithmetic::divide::division3212) are all
//! three-word arithmetic.

use core::cmp::Ordering;

use num_traits::{ConstOne, ConstZero, Zero};

use crate::{Doublet, Element, Fallible, Signum, Word};

/// Three base words as one integer: `low + mid·2^BITS + high·2^(2·BITS)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Triplet<B: Word> {
    pub low: B::Magnitude,
    pub mid: B::Magnitude,
    pub high: B,
}

impl<B: Word> Triplet<B> {
    #[inline]
    pub const fn new(low: B::Magnitude, mid: B::Magnitude, high: B) -> Self {
        Self { low, mid, high }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.low.is_zero() && self.mid.is_zero() && self.high.is_zero()
    }

    /// `self + rhs`; the flag is the flavor-correct overflow of the high word.
    #[inline]
    pub fn plus(self, rhs: Self) -> Fallible<Self> {
        let (low, carry) = self.low.carrying_add(rhs.low, false);
        let (mid, carry) = self.mid.carrying_add(rhs.mid, carry);
        let (high, error) = self.high.carrying_add(rhs.high, carry);
        Fallible::flagged(Self { low, mid, high }, error)
    }

    /// `self - rhs`, mirroring [`Self::plus`].
    #[inline]
    pub fn minus(self, rhs: Self) -> Fallible<Self> {
        let (low, borrow) = self.low.borrowing_sub(rhs.low, false);
        let (mid, borrow) = self.mid.borrowing_sub(rhs.mid, borrow);
        let (high, error) = self.high.borrowing_sub(rhs.high, borrow);
        Fallible::flagged(Self { low, mid, high }, error)
    }

    /// One's complement, plus one if `increment`; the overflow rule matches
    /// [`Doublet::complement`].
    pub fn complement(self, increment: bool) -> Fallible<Self> {
        let one = if increment {
            B::Magnitude::ONE
        } else {
            B::Magnitude::ZERO
        };
        let (low, carry) = (!self.low).carrying_add(one, false);
        let (mid, carry) = (!self.mid).carrying_add(B::Magnitude::ZERO, carry);
        let (high, flag) = (!self.high).carrying_add(B::ZERO, carry);
        let error = increment && if B::SIGNED { flag } else { !flag };
        Fallible::flagged(Self { low, mid, high }, error)
    }

    /// Three-way comparison, most significant word first.
    #[inline]
    pub fn compared(self, rhs: Self) -> Signum {
        match self.high.cmp(&rhs.high) {
            Ordering::Equal => match self.mid.cmp(&rhs.mid) {
                Ordering::Equal => self.low.cmp(&rhs.low).into(),
                not_equal => not_equal.into(),
            },
            not_equal => not_equal.into(),
        }
    }
}

impl<E: Element> Triplet<E> {
    /// Exact 2×1 product: `lhs · rhs` cannot overflow three words.
    pub fn widening(lhs: Doublet<E>, rhs: E) -> Self {
        let (low, carry) = lhs.low.carrying_mul(rhs, E::ZERO);
        let (mid, high) = lhs.high.carrying_mul(rhs, carry);
        Self { low, mid, high }
    }

    /// The two low words, valid once `high` is known zero.
    #[inline]
    pub(crate) fn into_doublet(self) -> Doublet<E> {
        debug_assert!(self.high.is_zero());
        Doublet::new(self.low, self.mid)
    }
}

impl<B: Word> Ord for Triplet<B> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compared(*other).into()
    }
}

impl<B: Word> PartialOrd for Triplet<B> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn carry_rides_through_the_middle() {
        let a = Triplet::new(u8::MAX, u8::MAX, 0u8);
        let one = Triplet::new(1, 0, 0u8);
        assert_eq!(a.plus(one), Fallible::new(Triplet::new(0, 0, 1)));
        assert_eq!(
            Triplet::new(0, 0, 1u8).minus(one),
            Fallible::new(a)
        );

        let top = Triplet::new(u8::MAX, u8::MAX, u8::MAX);
        assert!(top.plus(one).error);
    }

    #[test]
    fn widening() {
        // 0xFFFF * 0xFF == 0xFEFF01
        let product = Triplet::widening(Doublet::<u8>::new(0xFF, 0xFF), 0xFF);
        assert_eq!(product, Triplet::new(0x01, 0xFF, 0xFE));

        assert_eq!(
            Triplet::widening(Doublet::<u8>::new(0, 0), 0xFF),
            Triplet::<u8>::new(0, 0, 0)
        );
    }

    #[test]
    fn compared() {
        let a = Triplet::new(9u8, 1, 0u8);
        let b = Triplet::new(0u8, 2, 0u8);
        assert_eq!(a.compared(b), Signum::Negative);
        assert_eq!(b.compared(a), Signum::Positive);
        assert!(a < b);
    }

    #[test]
    fn complement() {
        let minus_one = Triplet::new(u8::MAX, u8::MAX, -1i8);
        assert_eq!(minus_one.complement(true), Fallible::new(Triplet::new(1, 0, 0)));
    }
}
