//! Overflow as data, not as exceptions.
//!
//! Intermediate overflow in a sub-step is often expected when composing wide
//! operations out of narrow ones, so it must be aggregated, not unwound.

use crate::{Error, Result};

/// The uniform return shape of every operation that can overflow.
///
/// `error == false` means `value` is the exact mathematical result;
/// `error == true` means `value` is the documented truncated/wrapped result
/// and the true result did not fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fallible<T> {
    pub value: T,
    pub error: bool,
}

impl<T> Fallible<T> {
    /// An exact result.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value, error: false }
    }

    /// A truncated/wrapped result.
    #[inline]
    pub const fn failure(value: T) -> Self {
        Self { value, error: true }
    }

    #[inline]
    pub const fn flagged(value: T, error: bool) -> Self {
        Self { value, error }
    }

    /// Transform the value, keeping the flag.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fallible<U> {
        Fallible {
            value: f(self.value),
            error: self.error,
        }
    }

    /// Fold another error indication in; flags compose by OR.
    #[inline]
    pub fn veto(self, error: bool) -> Self {
        Self {
            value: self.value,
            error: self.error | error,
        }
    }

    #[inline]
    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.error)
    }

    /// The exact value, or [`Error`] if the flag is set.
    #[inline]
    pub fn ok(self) -> Result<T> {
        if self.error {
            Err(Error)
        } else {
            Ok(self.value)
        }
    }
}

/// Quotient and remainder, the payload of every division.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Division<Q, R> {
    pub quotient: Q,
    pub remainder: R,
}

impl<Q, R> Division<Q, R> {
    #[inline]
    pub const fn new(quotient: Q, remainder: R) -> Self {
        Self { quotient, remainder }
    }
}
