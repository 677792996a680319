//! Division kernels, from single words up to long division.
//!
//! The fixed-size kernels never panic and never divide by zero at the
//! machine level: failure cases are reported through
//! [`Fallible`][crate::Fallible], with a well-defined wrapped value (see the
//! individual functions). The multi-word route is Knuth, TAOCP vol 2
//! section 4.3.1, algorithm D(ivision), with the quotient digit estimated
//! from the top three dividend words and top two divisor words.

use crate::{Body, Canvas, Division, Divisor, Doublet, Element, Fallible, Signum, Triplet, Word};

/// 1-by-1 division, truncating toward zero.
///
/// Fails on a zero divisor (quotient: zero if signed, the dividend if not;
/// remainder: the dividend) and on signed `MIN / -1` (quotient wraps to
/// `MIN`, remainder is zero).
pub fn division1111<B: Word>(dividend: B, divisor: B) -> Fallible<Division<B, B>> {
    match (dividend.checked_div(&divisor), dividend.checked_rem(&divisor)) {
        (Some(quotient), Some(remainder)) => Fallible::new(Division::new(quotient, remainder)),
        _ => {
            if divisor.is_zero() {
                let quotient = if B::SIGNED { B::ZERO } else { dividend };
                Fallible::failure(Division::new(quotient, dividend))
            } else {
                // MIN / -1: the quotient wraps back to MIN itself
                Fallible::failure(Division::new(dividend, B::ZERO))
            }
        }
    }
}

/// The unsigned core of [`division2111`]; `divisor` is non-zero.
fn magnitude_division2111<E: Element>(
    dividend: Doublet<E>,
    divisor: E,
) -> Fallible<Division<E, E>> {
    if dividend.high >= divisor {
        // quotient needs two words; wrap it, the remainder stays exact
        let (quotient, remainder) = E::div2by1(dividend.high % divisor, dividend.low, divisor);
        Fallible::failure(Division::new(quotient, remainder))
    } else {
        let (quotient, remainder) = E::div2by1(dividend.high, dividend.low, divisor);
        Fallible::new(Division::new(quotient, remainder))
    }
}

/// 2-by-1 division: two-word dividend, one-word divisor, one-word quotient.
///
/// Truncates toward zero; the remainder takes the dividend's sign. Fails on
/// a zero divisor (quotient: the low word if unsigned, zero if signed;
/// remainder: the low word), and whenever the true quotient does not fit a
/// single word, in which case both results wrap but the remainder is exact.
pub fn division2111<B: Word>(dividend: Doublet<B>, divisor: B) -> Fallible<Division<B, B>> {
    if divisor.is_zero() {
        let quotient = if B::SIGNED {
            B::ZERO
        } else {
            B::from_bits(dividend.low)
        };
        return Fallible::failure(Division::new(quotient, B::from_bits(dividend.low)));
    }

    let negative = dividend.high.is_negative() != divisor.is_negative();
    let raw = magnitude_division2111(dividend.unsigned_abs(), divisor.unsigned_abs());
    let Division {
        quotient,
        remainder,
    } = raw.value;

    let out_of_range = if !B::SIGNED {
        false
    } else if negative {
        quotient > B::min_value().unsigned_abs()
    } else {
        quotient > B::max_value().to_bits()
    };

    let quotient = if negative {
        B::from_bits(quotient).wrapping_neg()
    } else {
        B::from_bits(quotient)
    };
    let remainder = if dividend.high.is_negative() {
        B::from_bits(remainder).wrapping_neg()
    } else {
        B::from_bits(remainder)
    };

    Fallible::flagged(Division::new(quotient, remainder), raw.error || out_of_range)
}

/// Knuth's step D3: estimate one quotient digit from the top three dividend
/// words against a two-word divisor whose top bit is set.
///
/// Requires `high <= divisor.high`; the estimate is off by at most one in
/// excess, which the caller repairs after submultiplication.
pub(crate) fn approximate_quotient<E: Element>(high: E, mid: E, low: E, divisor: Doublet<E>) -> E {
    debug_assert!(!(divisor.high & E::MSB).is_zero());
    debug_assert!(high <= divisor.high);

    let (mut quotient, mut remainder) = if high == divisor.high {
        let (remainder, overflow) = mid.overflowing_add(&divisor.high);
        if overflow {
            // remainder already exceeds one word, no refinement possible
            return E::max_value();
        }
        (E::max_value(), remainder)
    } else {
        E::div2by1(high, mid, divisor.high)
    };

    loop {
        let product = Doublet::widening(quotient, divisor.low);
        if product.compared(Doublet::new(low, remainder)) != Signum::Positive {
            return quotient;
        }
        quotient = quotient - E::ONE;
        let (next, overflow) = remainder.overflowing_add(&divisor.high);
        if overflow {
            return quotient;
        }
        remainder = next;
    }
}

/// 3-by-2 division: three-word dividend, normalized two-word divisor,
/// one-word quotient.
///
/// Requires the divisor's top bit set and the dividend's upper two words
/// strictly below the divisor, so quotient and remainder always fit and
/// the operation cannot fail.
pub fn division3212<E: Element>(dividend: Triplet<E>, divisor: Doublet<E>) -> Division<E, Doublet<E>> {
    debug_assert!(!(divisor.high & E::MSB).is_zero());
    debug_assert!(
        Doublet::new(dividend.mid, dividend.high).compared(divisor) == Signum::Negative
    );

    let mut quotient = approximate_quotient(dividend.high, dividend.mid, dividend.low, divisor);
    let difference = dividend.minus(Triplet::widening(divisor, quotient));

    let remainder = if difference.error {
        // estimate was one too large; add the divisor back
        quotient = quotient - E::ONE;
        let addback = difference
            .value
            .plus(Triplet::new(divisor.low, divisor.high, E::ZERO));
        debug_assert!(addback.error, "carry must cancel the borrow");
        addback.value
    } else {
        difference.value
    };

    Division::new(quotient, remainder.into_doublet())
}

/// 2-by-2 division: everything two words wide.
///
/// Truncates; the quotient always fits the dividend's width, so the only
/// failure is a zero divisor, which leaves the dividend in both results.
pub fn division2222<E: Element>(
    dividend: Doublet<E>,
    divisor: Doublet<E>,
) -> Fallible<Division<Doublet<E>, Doublet<E>>> {
    if divisor.is_zero() {
        return Fallible::failure(Division::new(dividend, dividend));
    }

    if divisor.high.is_zero() {
        let divisor = divisor.low;
        let (high, carried) = (dividend.high / divisor, dividend.high % divisor);
        let (low, remainder) = E::div2by1(carried, dividend.low, divisor);
        return Fallible::new(Division::new(
            Doublet::new(low, high),
            Doublet::new(remainder, E::ZERO),
        ));
    }

    // normalize so the divisor's top bit is set; the spilled dividend bits
    // become the third word
    let shift = divisor.high.leading_zeros();
    let divisor = divisor << shift;
    let spill = if shift == 0 {
        E::ZERO
    } else {
        dividend.high >> (E::BITS - shift) as usize
    };
    let shifted = dividend << shift;

    let Division {
        quotient,
        remainder,
    } = division3212(Triplet::new(shifted.low, shifted.high, spill), divisor);

    Fallible::new(Division::new(
        Doublet::new(quotient, E::ZERO),
        remainder >> shift,
    ))
}

impl<E: Element> Body<E> {
    /// The remainder modulo a proven-nonzero single word.
    pub fn remainder(&self, divisor: Divisor<E>) -> E {
        let modulus = divisor.get();
        let mut remainder = E::ZERO;

        // run down the digits, carrying the remainder along
        for digit in self.0[..self.significant_len()].iter().rev() {
            let (_, r) = E::div2by1(remainder, *digit, modulus);
            remainder = r;
        }
        remainder
    }
}

impl<E: Element> Canvas<E> {
    /// Divides in place by a proven-nonzero single word, leaving the
    /// quotient in the canvas and returning the remainder.
    pub fn quotient_remainder(&mut self, divisor: Divisor<E>) -> E {
        let modulus = divisor.get();
        let mut remainder = E::ZERO;

        let l = self.significant_len();
        for digit in self.0[..l].iter_mut().rev() {
            let (quotient, r) = E::div2by1(remainder, *digit, modulus);
            *digit = quotient;
            remainder = r;
        }
        remainder
    }
}

/// Multi-word long division, in place.
///
/// On entry `remainder` holds the dividend and must have at least one more
/// word than its significant length; `quotient` must hold at least
/// `remainder words - divisor words + 1` words. On exit the remainder is in
/// `remainder`, the quotient in `quotient`, and `divisor` is restored to
/// its original value (it is normalized in place during the run).
///
/// Fails only on a zero divisor, leaving the dividend in `remainder` and a
/// zero quotient.
pub fn long_div_rem<E: Element>(
    remainder: &mut Canvas<E>,
    divisor: &mut Canvas<E>,
    quotient: &mut Canvas<E>,
) -> Fallible<()> {
    quotient.fill(E::ZERO);

    let divisor_len = divisor.significant_len();
    if divisor_len == 0 {
        return Fallible::failure(());
    }

    let dividend_len = remainder.significant_len();
    debug_assert!(remainder.0.len() > dividend_len, "no spare word");
    debug_assert!(quotient.0.len() + divisor_len > dividend_len);

    if divisor_len == 1 {
        let modulus = divisor.0[0];
        let mut carried = E::ZERO;
        for i in (0..dividend_len).rev() {
            let (digit, r) = E::div2by1(carried, remainder.0[i], modulus);
            quotient.0[i] = digit;
            carried = r;
        }
        remainder.fill(E::ZERO);
        remainder.0[0] = carried;
        return Fallible::new(());
    }

    if remainder.as_body().compared(divisor.as_body()) == Signum::Negative {
        // dividend < divisor: it already is the remainder
        return Fallible::new(());
    }

    // normalize: divisor's top bit set, dividend shifted along (the spare
    // word absorbs the spill)
    let shift = divisor.0[divisor_len - 1].leading_zeros();
    let spill = Canvas::with_count(&mut divisor.0, divisor_len).shl_bits(shift);
    debug_assert!(spill.is_zero());
    let spill = remainder.shl_bits(shift);
    debug_assert!(spill.is_zero());

    let top = Doublet::new(divisor.0[divisor_len - 2], divisor.0[divisor_len - 1]);
    let quotient_len = dividend_len - divisor_len + 1;

    for j in (0..quotient_len).rev() {
        let mut digit = approximate_quotient(
            remainder.0[j + divisor_len],
            remainder.0[j + divisor_len - 1],
            remainder.0[j + divisor_len - 2],
            top,
        );

        let window = Canvas::new(&mut remainder.0[j..j + divisor_len + 1]);
        let body = Body::with_count(&divisor.0, divisor_len);
        if window.decrement_mul(body, digit, E::ZERO).error {
            // estimate was one too large; add the divisor back
            digit = digit - E::ONE;
            let addback = window.increment_by(body, false);
            debug_assert!(addback.error, "carry must cancel the borrow");
        }
        quotient.0[j] = digit;
    }

    // denormalize the remainder, restore the divisor
    let spill = remainder.shr_bits(shift);
    debug_assert!(spill.is_zero());
    let spill = Canvas::with_count(&mut divisor.0, divisor_len).shr_bits(shift);
    debug_assert!(spill.is_zero());

    Fallible::new(())
}
