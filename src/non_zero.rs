//! Wrapper type for non-zero operands.

use crate::{Accumulator, Word};
use subtle::{Choice, ConstantTimeEq};

/// Wrapper type for non-zero integers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NonZero<T>(T);

impl NonZero<Word> {
    /// The value `1`.
    pub const ONE: Self = Self(1);

    /// Create a new non-zero word.
    ///
    /// Panics if the value is zero.
    pub const fn new_unwrap(n: Word) -> Self {
        assert!(n != 0, "invalid value: zero");
        Self(n)
    }

    /// Returns the truthy value if `self == 1`.
    pub fn is_one(&self) -> Choice {
        self.0.ct_eq(&Self::ONE.0)
    }

    /// Returns the inner value.
    pub const fn get(self) -> Word {
        self.0
    }

    /// Load into an accumulator register.
    pub const fn to_accumulator(self) -> Accumulator {
        Accumulator::from_word(self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::NonZero;

    #[test]
    fn new_unwrap() {
        assert_eq!(NonZero::new_unwrap(7).get(), 7);
        assert_eq!(NonZero::new_unwrap(1), NonZero::ONE);
    }

    #[test]
    fn is_one() {
        assert!(bool::from(NonZero::ONE.is_one()));
        assert!(bool::from(NonZero::new_unwrap(1).is_one()));
        assert!(!bool::from(NonZero::new_unwrap(u32::MAX).is_one()));
        assert!(!bool::from(NonZero::new_unwrap(2).is_one()));
    }

    #[test]
    #[should_panic(expected = "invalid value: zero")]
    fn new_unwrap_zero() {
        NonZero::new_unwrap(0);
    }
}
