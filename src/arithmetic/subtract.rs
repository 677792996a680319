//! In-place subtraction on a [`Canvas`].

use crate::{Body, Canvas, Element, Fallible};

impl<E: Element> Canvas<E> {
    /// `self -= element + borrow`, little-endian.
    ///
    /// The difference wraps modulo `base^len`; the error flag is the borrow
    /// out of the last word.
    pub fn decrement(&mut self, element: E, borrow: bool) -> Fallible<()> {
        let mut pending = element;
        let mut borrow = borrow;

        for slot in self.0.iter_mut() {
            if pending.is_zero() && !borrow {
                return Fallible::new(());
            }
            let (difference, b) = slot.borrowing_sub(pending, borrow);
            *slot = difference;
            pending = E::ZERO;
            borrow = b;
        }
        Fallible::flagged((), !pending.is_zero() || borrow)
    }

    /// `self -= subtrahend + borrow`, term by term; `self` must be at least
    /// as long as `subtrahend`, the tail absorbs the residual borrow.
    pub fn decrement_by(&mut self, subtrahend: &Body<E>, borrow: bool) -> Fallible<()> {
        debug_assert!(self.0.len() >= subtrahend.len());

        let mut borrow = borrow;
        let (lo, hi) = self.0.split_at_mut(subtrahend.len());

        for (a, b) in lo.iter_mut().zip(subtrahend.iter()) {
            let (difference, b_out) = a.borrowing_sub(*b, borrow);
            *a = difference;
            borrow = b_out;
        }

        if borrow {
            for a in hi.iter_mut() {
                let (difference, b_out) = a.borrowing_sub(E::ZERO, true);
                *a = difference;
                borrow = b_out;
                if !borrow {
                    break;
                }
            }
        }

        Fallible::flagged((), borrow)
    }

    /// `self -= body·times + plus`, the borrow mirror of
    /// [`increment_mul`](Self::increment_mul) and the submultiplication step
    /// of long division. `self` must be at least one word longer than `body`,
    /// so the tail absorbs the last product carry; the error flag is the
    /// borrow out of the last word.
    pub fn decrement_mul(&mut self, body: &Body<E>, times: E, plus: E) -> Fallible<()> {
        debug_assert!(self.0.len() >= body.len() + 1);

        let mut product_carry = plus;
        let mut borrow = false;
        let (lo, hi) = self.0.split_at_mut(body.len());

        for (a, b) in lo.iter_mut().zip(body.iter()) {
            let (lo_product, hi_product) = b.carrying_mul(times, product_carry);
            product_carry = hi_product;
            let (difference, b_out) = a.borrowing_sub(lo_product, borrow);
            *a = difference;
            borrow = b_out;
        }

        for a in hi.iter_mut() {
            if product_carry.is_zero() && !borrow {
                return Fallible::new(());
            }
            let (difference, b_out) = a.borrowing_sub(product_carry, borrow);
            *a = difference;
            product_carry = E::ZERO;
            borrow = b_out;
        }

        Fallible::flagged((), !product_carry.is_zero() || borrow)
    }
}

#[cfg(test)]
mod test {
    use crate::{Body, Canvas};

    #[test]
    fn decrement() {
        let mut digits = [0u32, 0, 1];
        let x = Canvas::new(&mut digits);
        assert!(!x.decrement(1, false).error);
        assert_eq!(digits, [0xFFFF_FFFF, 0xFFFF_FFFF, 0]);
    }

    #[test]
    fn decrement_past_zero() {
        let mut digits = [0u32; 3];
        let x = Canvas::new(&mut digits);
        assert!(x.decrement(1, false).error);
        assert_eq!(digits, [0xFFFF_FFFF; 3]);
    }

    #[test]
    fn decrement_by() {
        let mut digits = [8u32, 6, 1];
        let x = Canvas::new(&mut digits);
        assert!(!x.decrement_by(Body::new(&[5, 7]), false).error);
        assert_eq!(digits, [3, 0xFFFF_FFFF, 0]);
    }

    #[test]
    fn decrement_mul() {
        // 0x0101_0101 - 0xFF·0x0101 = 0x0100_0102
        let mut digits = [0x01u8, 0x01, 0x01, 0x01];
        let x = Canvas::new(&mut digits);
        assert!(!x.decrement_mul(Body::new(&[0x01, 0x01]), 0xFF, 0).error);
        assert_eq!(digits, [0x02, 0x01, 0x00, 0x01]);
    }

    #[test]
    fn decrement_mul_undoes_increment_mul() {
        let mut digits = [0x11u8, 0x22, 0x33, 0x44];
        let before = digits;
        let x = Canvas::new(&mut digits);
        assert!(!x.increment_mul(Body::new(&[0x9A, 0xBC]), 0x77, 0x05).error);
        assert!(!x.decrement_mul(Body::new(&[0x9A, 0xBC]), 0x77, 0x05).error);
        assert_eq!(digits, before);
    }

    #[test]
    fn decrement_mul_underflow() {
        let mut digits = [0x00u8, 0x01, 0x00];
        let x = Canvas::new(&mut digits);
        // 0x0100 - 3·0x80 wraps past zero
        let outcome = x.decrement_mul(Body::new(&[0x80]), 3, 0);
        assert!(outcome.error);
        assert_eq!(digits, [0x80, 0xFF, 0xFF]);
    }
}
