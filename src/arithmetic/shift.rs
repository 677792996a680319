//! Sub-word bit shifts.
//!
//! Note that "left" means "higher number".

use core::ops::{Shl, Shr};

use crate::{Canvas, Doublet, Element};

impl<E: Element> Canvas<E> {
    /// Shift left in place by `bits < E::BITS`, returning the bits shifted
    /// out of the last word.
    pub fn shl_bits(&mut self, bits: u32) -> E {
        debug_assert!(bits < E::BITS);
        if bits == 0 {
            return E::ZERO;
        }

        let mut carry = E::ZERO;
        for elem in self.0.iter_mut() {
            let new_carry = *elem >> (E::BITS - bits) as usize;
            *elem = (*elem << bits as usize) | carry;
            carry = new_carry;
        }
        carry
    }

    /// Shift right in place by `bits < E::BITS`, returning the bits shifted
    /// out of the first word (left-aligned in the returned element).
    pub fn shr_bits(&mut self, bits: u32) -> E {
        debug_assert!(bits < E::BITS);
        if bits == 0 {
            return E::ZERO;
        }

        let mut borrow = E::ZERO;
        for elem in self.0.iter_mut().rev() {
            let new_borrow = *elem << (E::BITS - bits) as usize;
            *elem = (*elem >> bits as usize) | borrow;
            borrow = new_borrow;
        }
        borrow
    }
}

impl<E: Element> Shl<u32> for Doublet<E> {
    type Output = Self;

    /// Truncating shift by `bits < 2·E::BITS`.
    fn shl(self, bits: u32) -> Self {
        debug_assert!(bits < 2 * E::BITS);
        if bits == 0 {
            self
        } else if bits < E::BITS {
            Self {
                low: self.low << bits as usize,
                high: (self.high << bits as usize) | (self.low >> (E::BITS - bits) as usize),
            }
        } else {
            Self {
                low: E::ZERO,
                high: self.low << (bits - E::BITS) as usize,
            }
        }
    }
}

impl<E: Element> Shr<u32> for Doublet<E> {
    type Output = Self;

    /// Truncating shift by `bits < 2·E::BITS`.
    fn shr(self, bits: u32) -> Self {
        debug_assert!(bits < 2 * E::BITS);
        if bits == 0 {
            self
        } else if bits < E::BITS {
            Self {
                low: (self.low >> bits as usize) | (self.high << (E::BITS - bits) as usize),
                high: self.high >> bits as usize,
            }
        } else {
            Self {
                low: self.high >> (bits - E::BITS) as usize,
                high: E::ZERO,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{Canvas, Doublet};

    #[test]
    fn shl_bits() {
        let mut digits = [0x8000_0001u32, 0x0000_0001];
        let x = Canvas::new(&mut digits);
        assert_eq!(x.shl_bits(4), 0);
        assert_eq!(digits, [0x0000_0010, 0x0000_0018]);

        let mut digits = [0x8000_0000u32, 0xC000_0000];
        let x = Canvas::new(&mut digits);
        assert_eq!(x.shl_bits(1), 1);
        assert_eq!(digits, [0, 0x8000_0001]);
    }

    #[test]
    fn shr_bits() {
        let mut digits = [0x0000_0012u32, 0x0000_0018];
        let x = Canvas::new(&mut digits);
        assert_eq!(x.shr_bits(4), 0x2000_0000);
        assert_eq!(digits, [0x8000_0001, 0x0000_0001]);
    }

    #[test]
    fn shift_zero() {
        let mut digits = [0xDEAD_BEEFu32, 0x0123_4567];
        let x = Canvas::new(&mut digits);
        assert_eq!(x.shl_bits(0), 0);
        assert_eq!(x.shr_bits(0), 0);
        assert_eq!(digits, [0xDEAD_BEEF, 0x0123_4567]);
    }

    #[test]
    fn doublet_shifts() {
        let x = Doublet::<u8>::new(0b1001_0110, 0b0000_0001);
        assert_eq!(x << 3, Doublet::new(0b1011_0000, 0b0000_1100));
        assert_eq!(x >> 3, Doublet::new(0b0011_0010, 0));
        assert_eq!(x << 9, Doublet::new(0, 0b0010_1100));
        assert_eq!(x >> 9, Doublet::new(0, 0));
    }
}
