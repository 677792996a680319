#![cfg_attr(not(test), no_std)]

//! Multi-precision binary integer arithmetic over caller-supplied word
//! buffers.
//!
//! Nothing here allocates: multi-word integers are little-endian slices of
//! machine words, viewed read-only as [`Body`] or exclusively-mutable as
//! [`Canvas`], and every operation works in place on a buffer the caller
//! sized. Overflow is data, not a panic: operations that can overflow
//! return [`Fallible`], carrying both the wrapped value and the flag.
//!
//! The division kernels ([`division1111`] through [`division3212`] and
//! [`long_div_rem`]) never divide by zero at the machine level; zero
//! divisors and quotient overflows come back as flagged, documented
//! fallback values instead.

pub mod arithmetic;
mod divisor;
mod doublet;
mod element;
mod error;
mod fallible;
mod numbers;
mod signum;
mod triplet;

pub use arithmetic::divide::{
    division1111, division2111, division2222, division3212, long_div_rem,
};
pub use divisor::Divisor;
pub use doublet::Doublet;
pub use element::{Element, Word};
pub use error::{Error, Result};
pub use fallible::{Division, Fallible};
pub use numbers::{Body, Canvas};
pub use signum::Signum;
pub use triplet::Triplet;
