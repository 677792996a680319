//! Schoolbook multiplication into a caller-provided [`Canvas`].

use crate::{Body, Canvas, Doublet, Element, Fallible};

impl<E: Element> Canvas<E> {
    /// `self += body·times + plus`, the multiply-accumulate row of
    /// schoolbook multiplication. `self` must be at least one word longer
    /// than `body`, so the tail absorbs the last product carry.
    pub fn increment_mul(&mut self, body: &Body<E>, times: E, plus: E) -> Fallible<()> {
        debug_assert!(self.0.len() >= body.len() + 1);

        let mut product_carry = plus;
        let mut carry = false;
        let (lo, hi) = self.0.split_at_mut(body.len());

        for (a, b) in lo.iter_mut().zip(body.iter()) {
            let (lo_product, hi_product) = b.carrying_mul_add(times, *a, product_carry);
            *a = lo_product;
            product_carry = hi_product;
        }

        for a in hi.iter_mut() {
            if product_carry.is_zero() && !carry {
                return Fallible::new(());
            }
            let (sum, c) = a.carrying_add(product_carry, carry);
            *a = sum;
            product_carry = E::ZERO;
            carry = c;
        }

        Fallible::flagged((), !product_carry.is_zero() || carry)
    }

    /// `self = lhs·rhs + extra`; `self` must be exactly
    /// `lhs.len() + rhs.len()` words, which always fits the full product
    /// plus a word-sized addend.
    pub fn long_multiply(&mut self, lhs: &Body<E>, rhs: &Body<E>, extra: E) {
        debug_assert_eq!(self.0.len(), lhs.len() + rhs.len());

        self.fill(E::ZERO);
        let outcome = self.increment(extra, false);
        debug_assert!(!outcome.error);

        for (j, &multiplier) in rhs.iter().enumerate() {
            let row = Canvas::new(&mut self.0[j..]);
            let outcome = row.increment_mul(lhs, multiplier, E::ZERO);
            debug_assert!(!outcome.error);
        }
    }

    /// `self = operand² + extra`, doing each cross product once.
    /// `self` must be exactly `2·operand.len()` words.
    pub fn long_square(&mut self, operand: &Body<E>, extra: E) {
        debug_assert_eq!(self.0.len(), 2 * operand.len());

        self.fill(E::ZERO);

        // off-diagonal products, each counted once
        for j in 1..operand.len() {
            let row = Canvas::new(&mut self.0[2 * j - 1..]);
            let outcome = row.increment_mul(
                Body::new(&operand[j..]),
                operand[j - 1],
                E::ZERO,
            );
            debug_assert!(!outcome.error);
        }

        // doubled, then the diagonal squares on top
        let spilled = self.shl_bits(1);
        debug_assert!(spilled.is_zero());

        for (j, &digit) in operand.iter().enumerate() {
            let square = Doublet::widening(digit, digit);
            let row = Canvas::new(&mut self.0[2 * j..]);
            let outcome = row.increment_by(Body::new(&[square.low, square.high]), false);
            debug_assert!(!outcome.error);
        }

        let outcome = self.increment(extra, false);
        debug_assert!(!outcome.error);
    }
}

#[cfg(test)]
mod test {
    use crate::{Body, Canvas};

    #[test]
    fn increment_mul() {
        // 1-row multiply-accumulate agrees with a 1-digit long multiply
        let mut accumulated = [0x9000_0000u32, 1, 0];
        let x = Canvas::new(&mut accumulated);
        assert!(!x.increment_mul(Body::new(&[0x8000_0001, 3]), 2, 5).error);

        let mut product = [0u32; 3];
        Canvas::new(&mut product).long_multiply(Body::new(&[0x8000_0001, 3]), Body::new(&[2]), 5);

        let mut expected = [0x9000_0000u32, 1, 0];
        assert!(!Canvas::new(&mut expected).increment_by(Body::new(&product), false).error);

        assert_eq!(accumulated, expected);
    }

    #[test]
    fn long_multiply() {
        let mut product = [0u32; 8];
        let x = Canvas::new(&mut product);
        x.long_multiply(Body::new(&[1, 2, 3, 4]), Body::new(&[1, 2, 3, 4]), 5);
        assert_eq!(product, [6, 4, 10, 20, 25, 24, 16, 0]);
    }

    #[test]
    fn long_square() {
        let mut squared = [0u32; 8];
        let x = Canvas::new(&mut squared);
        x.long_square(Body::new(&[1, 2, 3, 4]), 5);
        assert_eq!(squared, [6, 4, 10, 20, 25, 24, 16, 0]);
    }

    #[test]
    fn square_matches_multiply() {
        let operand = [0xDEAD_BEEFu32, 0x0123_4567, 0xFFFF_FFFF];

        let mut product = [0u32; 6];
        Canvas::new(&mut product).long_multiply(Body::new(&operand), Body::new(&operand), 0);

        let mut squared = [0u32; 6];
        Canvas::new(&mut squared).long_square(Body::new(&operand), 0);

        assert_eq!(product, squared);
    }
}
