//! The element contract: fixed-width machine words as multi-precision digits.
//!
//! [`Element`] is the unsigned digit type the word-array engine is generic
//! over; [`Word`] additionally admits the signed flavors, which only show up
//! as the `Base` of a [`Doublet`](crate::Doublet)/[`Triplet`](crate::Triplet).
//!
//! Everything is monomorphized; there is no dispatch on the hot paths.

use core::fmt::Debug;

use num_traits::ops::overflowing::{OverflowingAdd, OverflowingMul, OverflowingSub};
use num_traits::{
    CheckedDiv, CheckedRem, ConstOne, ConstZero, PrimInt, WrappingAdd, WrappingNeg, WrappingShl,
    WrappingShr, WrappingSub,
};

/// A fixed-width machine integer, signed or unsigned.
///
/// The bit width is a power of two, at least 8. `Magnitude` is the unsigned
/// type sharing the bit pattern; for unsigned implementors it is `Self`.
pub trait Word:
    'static
    + Copy
    + Default
    + Debug
    + PrimInt
    + ConstZero
    + ConstOne
    + WrappingAdd
    + WrappingSub
    + WrappingNeg
    + WrappingShl
    + WrappingShr
    + OverflowingAdd
    + OverflowingSub
    + OverflowingMul
    + CheckedDiv
    + CheckedRem
{
    /// The unsigned type with the same width and bit pattern.
    type Magnitude: Element;

    /// Bit width.
    const BITS: u32;
    /// Whether this is a two's-complement signed type.
    const SIGNED: bool;
    /// Most significant bit set, all others clear.
    const MSB: Self;
    /// Least significant bit set, all others clear.
    const LSB: Self;

    /// Bit-preserving cast from the magnitude type.
    fn from_bits(bits: Self::Magnitude) -> Self;

    /// Bit-preserving cast to the magnitude type.
    fn to_bits(self) -> Self::Magnitude;

    /// `false` for every unsigned value.
    fn is_negative(self) -> bool;

    /// Absolute value as magnitude; `MIN` maps to `MSB` without overflow.
    fn unsigned_abs(self) -> Self::Magnitude;

    /// `self + rhs + carry`, with the flavor-correct overflow indication.
    ///
    /// For unsigned words the flag is the carry-out; for signed words it is
    /// the usual XOR-composed signed overflow, and must not be fed into a
    /// more significant digit.
    fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool);

    /// `self - rhs - borrow`, mirroring [`Self::carrying_add`].
    fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool);
}

/// An unsigned [`Word`]: the digit of the multi-precision representation.
///
/// Adds the two-digit primitives everything wider is built from. All of them
/// go through the next wider primitive type, which exists for every
/// implementor (`usize` is at most 64 bits on the targets we care about).
pub trait Element: Word<Magnitude = Self> + num_traits::Unsigned {
    /// Full product `self * rhs` as `(low, high)`.
    fn widening_mul(self, rhs: Self) -> (Self, Self);

    /// `self * rhs + carry` as `(low, high)`; cannot overflow two digits.
    fn carrying_mul(self, rhs: Self, carry: Self) -> (Self, Self);

    /// `self * rhs + carry + add` as `(low, high)`; still fits two digits,
    /// since `(B-1)² + 2(B-1) = B² - 1`. This is the digit step of
    /// multiply-accumulate.
    fn carrying_mul_add(self, rhs: Self, carry: Self, add: Self) -> (Self, Self);

    /// Divide the two-digit value `hi:lo` by `divisor`, returning
    /// `(quotient, remainder)`.
    ///
    /// The caller must ensure `hi < divisor`, so that the quotient fits one
    /// digit (this matches what the x86 divide instruction does).
    ///
    /// REMARK: This is Knuth's operation c0), "memorizing the multiplication
    /// table in reverse."
    fn div2by1(hi: Self, lo: Self, divisor: Self) -> (Self, Self);
}

macro_rules! impl_unsigned_element {
    ($($E:ty => $W:ty),* $(,)?) => {$(
        impl Word for $E {
            type Magnitude = $E;

            const BITS: u32 = 8 * core::mem::size_of::<$E>() as u32;
            const SIGNED: bool = false;
            const MSB: Self = 1 << (8 * core::mem::size_of::<$E>() - 1);
            const LSB: Self = 1;

            #[inline]
            fn from_bits(bits: $E) -> Self {
                bits
            }

            #[inline]
            fn to_bits(self) -> $E {
                self
            }

            #[inline]
            fn is_negative(self) -> bool {
                false
            }

            #[inline]
            fn unsigned_abs(self) -> $E {
                self
            }

            #[inline]
            fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
                let (a, o1) = self.overflowing_add(rhs);
                let (b, o2) = a.overflowing_add(carry as $E);
                (b, o1 | o2)
            }

            #[inline]
            fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
                let (a, o1) = self.overflowing_sub(rhs);
                let (b, o2) = a.overflowing_sub(borrow as $E);
                (b, o1 | o2)
            }
        }

        impl Element for $E {
            #[inline]
            fn widening_mul(self, rhs: Self) -> (Self, Self) {
                let wide = (self as $W) * (rhs as $W);
                (wide as $E, (wide >> (8 * core::mem::size_of::<$E>())) as $E)
            }

            #[inline]
            fn carrying_mul(self, rhs: Self, carry: Self) -> (Self, Self) {
                let wide = (self as $W) * (rhs as $W) + carry as $W;
                (wide as $E, (wide >> (8 * core::mem::size_of::<$E>())) as $E)
            }

            #[inline]
            fn carrying_mul_add(self, rhs: Self, carry: Self, add: Self) -> (Self, Self) {
                let wide = (self as $W) * (rhs as $W) + carry as $W + add as $W;
                (wide as $E, (wide >> (8 * core::mem::size_of::<$E>())) as $E)
            }

            #[inline]
            fn div2by1(hi: Self, lo: Self, divisor: Self) -> (Self, Self) {
                debug_assert!(hi < divisor);

                let wide = ((hi as $W) << (8 * core::mem::size_of::<$E>())) | lo as $W;
                let divisor = divisor as $W;

                ((wide / divisor) as $E, (wide % divisor) as $E)
            }
        }
    )*}
}

impl_unsigned_element! {
    u8 => u16,
    u16 => u32,
    u32 => u64,
    u64 => u128,
    usize => u128,
}

macro_rules! impl_signed_word {
    ($($S:ty => $M:ty),* $(,)?) => {$(
        impl Word for $S {
            type Magnitude = $M;

            const BITS: u32 = 8 * core::mem::size_of::<$S>() as u32;
            const SIGNED: bool = true;
            const MSB: Self = <$S>::MIN;
            const LSB: Self = 1;

            #[inline]
            fn from_bits(bits: $M) -> Self {
                bits as $S
            }

            #[inline]
            fn to_bits(self) -> $M {
                self as $M
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn unsigned_abs(self) -> $M {
                // MIN wraps to itself, whose bit pattern is the magnitude
                self.wrapping_abs() as $M
            }

            #[inline]
            fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
                let (a, o1) = self.overflowing_add(rhs);
                let (b, o2) = a.overflowing_add(carry as $S);
                // both overflowing is impossible; one overflow undone by the
                // other means no overflow at all
                (b, o1 != o2)
            }

            #[inline]
            fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
                let (a, o1) = self.overflowing_sub(rhs);
                let (b, o2) = a.overflowing_sub(borrow as $S);
                (b, o1 != o2)
            }
        }
    )*}
}

impl_signed_word! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    isize => usize,
}

#[cfg(test)]
mod test {
    #![allow(unstable_name_collisions)] // the unstable inherent carrying_add etc.

    use super::*;

    #[test]
    fn carrying_add_chains() {
        //    3  MAX    (a = 3·2^64 + 2^64 - 1)
        // +  5    7    (b = 5·2^64 + 7)
        // ---------
        //    9    6
        let (sum0, carry) = u64::MAX.carrying_add(7, false);
        assert_eq!((sum0, carry), (6, true));
        let (sum1, carry) = 3u64.carrying_add(5, carry);
        assert_eq!((sum1, carry), (9, false));
    }

    #[test]
    fn borrowing_sub_chains() {
        let (diff0, borrow) = 6u64.borrowing_sub(7, false);
        assert_eq!((diff0, borrow), (u64::MAX, true));
        let (diff1, borrow) = 9u64.borrowing_sub(5, borrow);
        assert_eq!((diff1, borrow), (3, false));
    }

    #[test]
    fn signed_overflow_flavor() {
        // adding a carry can undo the first overflow
        assert_eq!(i8::MAX.carrying_add(i8::MIN, true), (0, false));
        assert_eq!(i8::MAX.carrying_add(0, true), (i8::MIN, true));
        assert_eq!(i8::MIN.borrowing_sub(0, true), (i8::MAX, true));
    }

    #[test]
    fn widening_mul() {
        assert_eq!(u8::MAX.widening_mul(u8::MAX), (1, 0xFE));
        assert_eq!(u8::MAX.carrying_mul(u8::MAX, u8::MAX), (0, u8::MAX));
        assert_eq!(
            u8::MAX.carrying_mul_add(u8::MAX, u8::MAX, u8::MAX),
            (u8::MAX, u8::MAX)
        );
        assert_eq!(1_000_000_000u32.widening_mul(10), (1410065408, 2));
    }

    #[test]
    fn div2by1() {
        assert_eq!(u8::div2by1(0x7F, 0xFF, 0x80), (0xFF, 0x7F));
        assert_eq!(u32::div2by1(1, 1, 2), (0x8000_0000, 1));
    }

    #[test]
    fn unsigned_abs() {
        assert_eq!(Word::unsigned_abs(i8::MIN), 0x80u8);
        assert_eq!(Word::unsigned_abs(-1i32), 1u32);
        assert_eq!(i8::from_bits(0x80), i8::MIN);
    }

    #[test]
    fn constants() {
        assert_eq!(u8::MSB, 0x80);
        assert_eq!(<i16 as Word>::MSB, i16::MIN);
        assert_eq!(<u64 as Word>::BITS, 64);
        assert!(<i32 as Word>::SIGNED);
        assert!(!<u32 as Word>::SIGNED);
    }
}
