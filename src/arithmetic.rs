//! Word-level arithmetic on [`Body`][crate::Body] and [`Canvas`][crate::Canvas].
//!
//! All operations are in-place on a caller-provided canvas. Carries and
//! borrows that fall off the end of the canvas are reported via
//! [`Fallible`][crate::Fallible], never silently dropped; the wrapped result
//! is left in the canvas either way.

pub mod shift;
pub mod add;
pub mod subtract;
pub mod multiply;
pub mod divide;
