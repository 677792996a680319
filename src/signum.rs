use core::cmp::Ordering;

/// Three-way comparison result.
///
/// Every composite comparison produces one of these; equality is
/// `Signum::Zero`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signum {
    Negative,
    Zero,
    Positive,
}

impl Signum {
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Signum::Zero)
    }

    #[inline]
    pub const fn negated(self) -> Self {
        match self {
            Signum::Negative => Signum::Positive,
            Signum::Zero => Signum::Zero,
            Signum::Positive => Signum::Negative,
        }
    }
}

impl From<Ordering> for Signum {
    #[inline]
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Signum::Negative,
            Ordering::Equal => Signum::Zero,
            Ordering::Greater => Signum::Positive,
        }
    }
}

impl From<Signum> for Ordering {
    #[inline]
    fn from(signum: Signum) -> Self {
        match signum {
            Signum::Negative => Ordering::Less,
            Signum::Zero => Ordering::Equal,
            Signum::Positive => Ordering::Greater,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn negated() {
        assert_eq!(Signum::Negative.negated(), Signum::Positive);
        assert_eq!(Signum::Zero.negated(), Signum::Zero);
        assert!(Signum::from(Ordering::Equal).is_zero());
    }
}
