//! The fixed double-width composite integer.

use core::cmp::Ordering;

use num_traits::{ConstOne, ConstZero, Zero};

use crate::arithmetic::divide::division2111;
use crate::{Division, Divisor, Element, Fallible, Signum, Word};

/// Two base words as one integer: `low + high·2^BITS`.
///
/// Field order is little-endian by significance; signedness is carried by
/// `B`, the `low` field is always unsigned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Doublet<B: Word> {
    pub low: B::Magnitude,
    pub high: B,
}

impl<B: Word> Doublet<B> {
    #[inline]
    pub const fn new(low: B::Magnitude, high: B) -> Self {
        Self { low, high }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.low.is_zero() && self.high.is_zero()
    }

    /// Bit-preserving cast from the unsigned layout.
    #[inline]
    pub fn from_bits(bits: Doublet<B::Magnitude>) -> Self {
        Self {
            low: bits.low,
            high: B::from_bits(bits.high),
        }
    }

    /// Bit-preserving cast to the unsigned layout.
    #[inline]
    pub fn to_bits(self) -> Doublet<B::Magnitude> {
        Doublet {
            low: self.low,
            high: self.high.to_bits(),
        }
    }

    /// `self + rhs`; the flag reports the flavor-correct overflow of the
    /// high word.
    #[inline]
    pub fn plus(self, rhs: Self) -> Fallible<Self> {
        let (low, carry) = self.low.carrying_add(rhs.low, false);
        let (high, error) = self.high.carrying_add(rhs.high, carry);
        Fallible::flagged(Self { low, high }, error)
    }

    /// `self - rhs`, mirroring [`Self::plus`].
    #[inline]
    pub fn minus(self, rhs: Self) -> Fallible<Self> {
        let (low, borrow) = self.low.borrowing_sub(rhs.low, false);
        let (high, error) = self.high.borrowing_sub(rhs.high, borrow);
        Fallible::flagged(Self { low, high }, error)
    }

    /// One's complement, plus one if `increment`.
    ///
    /// With `increment` this is two's-complement negation: for signed `B` it
    /// overflows exactly on `MIN`, for unsigned `B` on everything but zero.
    pub fn complement(self, increment: bool) -> Fallible<Self> {
        let one = if increment {
            B::Magnitude::ONE
        } else {
            B::Magnitude::ZERO
        };
        let (low, carry) = (!self.low).carrying_add(one, false);
        let (high, flag) = (!self.high).carrying_add(B::ZERO, carry);
        let error = increment && if B::SIGNED { flag } else { !flag };
        Fallible::flagged(Self { low, high }, error)
    }

    /// `-self`.
    #[inline]
    pub fn negated(self) -> Fallible<Self> {
        self.complement(true)
    }

    /// Magnitude of the represented value, dropping the sign.
    pub fn unsigned_abs(self) -> Doublet<B::Magnitude> {
        let bits = self.to_bits();
        if self.high.is_negative() {
            // MIN complements to its own (correct) magnitude pattern
            bits.complement(true).value
        } else {
            bits
        }
    }

    /// Reattach a sign to a magnitude; the flag reports values out of `B`'s
    /// doublet range. The value is always the wrapped two's complement.
    pub fn from_sign_magnitude(magnitude: Doublet<B::Magnitude>, negative: bool) -> Fallible<Self> {
        if negative {
            let value = Self::from_bits(magnitude.complement(true).value);
            let error = !value.high.is_negative() && !magnitude.is_zero();
            Fallible::flagged(value, error)
        } else {
            let value = Self::from_bits(magnitude);
            Fallible::flagged(value, value.high.is_negative())
        }
    }

    /// Exact full-width product of two base words.
    pub fn widening(lhs: B, rhs: B) -> Self {
        let (low, high) = lhs.unsigned_abs().widening_mul(rhs.unsigned_abs());
        let magnitude = Doublet::new(low, high);
        if lhs.is_negative() != rhs.is_negative() {
            Self::from_bits(magnitude.complement(true).value)
        } else {
            Self::from_bits(magnitude)
        }
    }

    /// Fixed-width product: the wrapped low two words, flagged when the true
    /// product does not fit.
    pub fn multiplication(self, rhs: Self) -> Fallible<Self> {
        let negative = self.high.is_negative() != rhs.high.is_negative();
        let (magnitude, spill) = self.unsigned_abs().overflowing_mul22(rhs.unsigned_abs());
        Self::from_sign_magnitude(magnitude, negative).veto(spill)
    }

    /// 2-by-1 division by a proven-nonzero word; quotient overflow is the
    /// only failure left (see [`division2111`] for the wrapped values).
    #[inline]
    pub fn division(self, divisor: Divisor<B>) -> Fallible<Division<B, B>> {
        division2111(self, divisor.get())
    }

    /// Three-way comparison, high word first.
    #[inline]
    pub fn compared(self, rhs: Self) -> Signum {
        match self.high.cmp(&rhs.high) {
            Ordering::Equal => self.low.cmp(&rhs.low).into(),
            not_equal => not_equal.into(),
        }
    }
}

impl<E: Element> Doublet<E> {
    /// Wrapped 2×2 product and whether anything spilled past two words.
    pub(crate) fn overflowing_mul22(self, rhs: Self) -> (Self, bool) {
        let (x0, x1) = self.low.widening_mul(rhs.low);
        let (y0, y1) = self.low.widening_mul(rhs.high);
        let (z0, z1) = self.high.widening_mul(rhs.low);

        let (high, c1) = x1.carrying_add(y0, false);
        let (high, c2) = high.carrying_add(z0, false);

        let spill = c1
            | c2
            | !y1.is_zero()
            | !z1.is_zero()
            | (!self.high.is_zero() & !rhs.high.is_zero());
        (Self { low: x0, high }, spill)
    }
}

impl<B: Word> Ord for Doublet<B> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compared(*other).into()
    }
}

impl<B: Word> PartialOrd for Doublet<B> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plus_and_minus() {
        //    3  MAX
        // +  5    7
        // ---------
        //    9    6
        let a = Doublet::new(u64::MAX, 3u64);
        let b = Doublet::new(7, 5u64);
        let sum = a.plus(b);
        assert_eq!(sum, Fallible::new(Doublet::new(6, 9)));
        assert_eq!(sum.value.minus(b), Fallible::new(a));

        let top = Doublet::new(u64::MAX, u64::MAX);
        assert_eq!(top.plus(Doublet::new(1, 0)).into_parts().1, true);
        assert_eq!(Doublet::new(0, 0u64).minus(Doublet::new(1, 0)).into_parts().1, true);
    }

    #[test]
    fn signed_plus() {
        // -1 + 1 == 0, no overflow
        let minus_one = Doublet::new(u8::MAX, -1i8);
        let one = Doublet::new(1, 0i8);
        assert_eq!(minus_one.plus(one), Fallible::new(Doublet::new(0, 0)));

        // MAX + 1 overflows
        let max = Doublet::new(u8::MAX, i8::MAX);
        assert_eq!(max.plus(one).into_parts().1, true);
    }

    #[test]
    fn complement() {
        // unsigned negation only fits for zero
        let zero = Doublet::new(0u32, 0u32);
        assert_eq!(zero.negated(), Fallible::new(zero));
        assert!(Doublet::<u32>::new(5, 0).negated().error);

        // the signed flavor holds -5 exactly
        let minus_five = Doublet::<i32>::new(5, 0).negated();
        assert_eq!(minus_five, Fallible::new(Doublet::new(u32::MAX - 4, -1)));

        // -1 negates to 1 exactly
        let minus_one = Doublet::new(u8::MAX, -1i8);
        assert_eq!(minus_one.negated(), Fallible::new(Doublet::new(1, 0)));

        // signed MIN has no negation
        let min = Doublet::new(0, i8::MIN);
        let negated = min.negated();
        assert_eq!(negated.value, min);
        assert!(negated.error);
    }

    #[test]
    fn unsigned_abs() {
        let minus_156 = Doublet::new(100, -1i8);
        assert_eq!(minus_156.unsigned_abs(), Doublet::new(156, 0u8));
        assert_eq!(Doublet::new(0, i8::MIN).unsigned_abs(), Doublet::new(0, 0x80u8));
    }

    #[test]
    fn widening() {
        assert_eq!(Doublet::widening(u8::MAX, u8::MAX), Doublet::new(1, 0xFE));
        assert_eq!(Doublet::widening(-2i8, 3), Doublet::new(0xFA, -1));
        assert_eq!(Doublet::widening(i8::MIN, i8::MIN), Doublet::new(0, 0x40));
    }

    #[test]
    fn multiplication() {
        // 0x01FF * 0x0203 == 0x403FD, which spills past two bytes
        let a = Doublet::new(0xFF, 0x01u8);
        let b = Doublet::new(0x03, 0x02u8);
        let product = a.multiplication(b);
        assert_eq!(product.value, Doublet::new(0xFD, 0x03));
        assert!(product.error);

        // -2 * 3 == -6 in doublet-of-i8
        let minus_two = Doublet::new(0xFE, -1i8);
        let three = Doublet::new(3, 0i8);
        assert_eq!(
            minus_two.multiplication(three),
            Fallible::new(Doublet::new(0xFA, -1))
        );
    }

    #[test]
    fn compared() {
        let small = Doublet::new(u8::MAX, 0u8);
        let big = Doublet::new(0, 1u8);
        assert_eq!(small.compared(big), Signum::Negative);
        assert_eq!(big.compared(small), Signum::Positive);
        assert!(small.compared(small).is_zero());
        assert!(small < big);

        // signed: high word dominates with its sign
        let negative = Doublet::new(0, -1i8);
        let positive = Doublet::new(0, 0i8);
        assert_eq!(negative.compared(positive), Signum::Negative);
    }
}
