use crate::Word;

/// A proven-nonzero word.
///
/// The single gate turning "divide by a possibly-zero value" into "divide by
/// a nonzero value": none of the width-specialized division kernels behind
/// this wrapper need a zero-divisor branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Divisor<T: Word>(T);

impl<T: Word> Divisor<T> {
    /// `None` iff `value` is zero.
    #[inline]
    pub fn new(value: T) -> Option<Self> {
        if value.is_zero() {
            None
        } else {
            Some(Self(value))
        }
    }

    #[inline]
    pub fn get(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nonzero_gate() {
        assert!(Divisor::new(0u32).is_none());
        assert_eq!(Divisor::new(17u32).unwrap().get(), 17);
        assert!(Divisor::new(0i8).is_none());
        assert_eq!(Divisor::new(-1i8).unwrap().get(), -1);
    }
}
