//! In-place addition on a [`Canvas`].

use crate::{Body, Canvas, Element, Fallible};

impl<E: Element> Canvas<E> {
    /// `self += element + carry`, little-endian.
    ///
    /// The sum wraps modulo `base^len`; the error flag is the carry out of
    /// the last word.
    pub fn increment(&mut self, element: E, carry: bool) -> Fallible<()> {
        let mut pending = element;
        let mut carry = carry;

        for slot in self.0.iter_mut() {
            if pending.is_zero() && !carry {
                return Fallible::new(());
            }
            let (sum, c) = slot.carrying_add(pending, carry);
            *slot = sum;
            pending = E::ZERO;
            carry = c;
        }
        Fallible::flagged((), !pending.is_zero() || carry)
    }

    /// `self += summand + carry`, term by term; `self` must be at least as
    /// long as `summand`, the tail absorbs the residual carry.
    pub fn increment_by(&mut self, summand: &Body<E>, carry: bool) -> Fallible<()> {
        debug_assert!(self.0.len() >= summand.len());

        let mut carry = carry;
        let (lo, hi) = self.0.split_at_mut(summand.len());

        for (a, b) in lo.iter_mut().zip(summand.iter()) {
            let (sum, c) = a.carrying_add(*b, carry);
            *a = sum;
            carry = c;
        }

        if carry {
            for a in hi.iter_mut() {
                let (sum, c) = a.carrying_add(E::ZERO, true);
                *a = sum;
                carry = c;
                if !carry {
                    break;
                }
            }
        }

        Fallible::flagged((), carry)
    }
}

#[cfg(test)]
mod test {
    use crate::{Body, Canvas};

    #[test]
    fn increment() {
        let mut digits = [0xFFFF_FFFFu32, 0xFFFF_FFFF, 0, 0];
        let x = Canvas::new(&mut digits);
        assert!(!x.increment(1, false).error);
        assert_eq!(digits, [0, 0, 1, 0]);
    }

    #[test]
    fn increment_saturated() {
        let mut digits = [!0u32; 4];
        let x = Canvas::new(&mut digits);
        assert!(x.increment(1, false).error);
        assert_eq!(digits, [0; 4]);

        // carry flag alone behaves like adding one
        let mut digits = [0u32; 4];
        let x = Canvas::new(&mut digits);
        assert!(!x.increment(0, true).error);
        assert_eq!(digits, [1, 0, 0, 0]);
    }

    #[test]
    fn increment_by() {
        let mut digits = [3u32, 0xFFFF_FFFF, 0, 0];
        let x = Canvas::new(&mut digits);
        assert!(!x.increment_by(Body::new(&[5, 7]), false).error);
        assert_eq!(digits, [8, 6, 1, 0]);
    }

    #[test]
    fn increment_by_overflowing() {
        let mut digits = [!0u8, !0];
        let x = Canvas::new(&mut digits);
        let outcome = x.increment_by(Body::new(&[0, 1]), false);
        assert!(outcome.error);
        assert_eq!(digits, [0xFF, 0]);
    }

    #[test]
    fn round_trip() {
        let mut digits = [0x89AB_CDEFu32, 0x0123_4567, 0xDEAD_BEEF];
        let original = digits;

        let x = Canvas::new(&mut digits);
        assert!(!x.increment_by(Body::new(&[17, 4]), false).error);
        assert!(!x.decrement_by(Body::new(&[17, 4]), false).error);
        assert_eq!(digits, original);
    }
}
