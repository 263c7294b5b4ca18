//! Latched operands and the fast-path pre-check.

use crate::{Error, NonZero, Outcome, Word, ZeroOperand};

/// A `(dividend, divisor)` pair, latched for the duration of one computation.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Operands {
    dividend: Word,
    divisor: Word,
}

/// Result of evaluating the pre-check on a pair of [`Operands`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Precheck {
    /// The division resolves without iterating.
    Resolved(Outcome),

    /// The iterative machine is needed: `1 < divisor < dividend`.
    Iterate {
        /// Latched dividend.
        dividend: NonZero<Word>,
        /// Latched divisor.
        divisor: NonZero<Word>,
    },
}

impl Operands {
    /// Latch a pair of operands.
    pub const fn new(dividend: Word, divisor: Word) -> Self {
        Self { dividend, divisor }
    }

    /// The latched dividend.
    pub const fn dividend(&self) -> Word {
        self.dividend
    }

    /// The latched divisor.
    pub const fn divisor(&self) -> Word {
        self.divisor
    }

    /// Evaluate the fast paths, in priority order:
    ///
    /// 1. a zero operand is an error (this covers `0 / 0`),
    /// 2. `divisor == dividend` yields `1`,
    /// 3. `divisor == 1` yields the dividend,
    /// 4. `divisor > dividend` yields `0`.
    pub fn precheck(&self) -> Precheck {
        if let Some(which) = ZeroOperand::classify(self.dividend, self.divisor) {
            return Precheck::Resolved(Err(Error::ZeroOperand(which)));
        }

        // both operands are non-zero from here on
        let dividend = NonZero::new_unwrap(self.dividend);
        let divisor = NonZero::new_unwrap(self.divisor);

        if divisor == dividend {
            return Precheck::Resolved(Ok(1));
        }
        if bool::from(divisor.is_one()) {
            return Precheck::Resolved(Ok(dividend.get()));
        }
        if divisor > dividend {
            return Precheck::Resolved(Ok(0));
        }

        Precheck::Iterate { dividend, divisor }
    }
}
