/// There is but one – failure 🤪.
///
/// The interesting failure information lives in the data
/// ([`Fallible`](crate::Fallible)'s flag, [`Divisor`](crate::Divisor)'s
/// `None`); this type only exists so results can cross a `?` boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Error;

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
