//! Error types.

use crate::Word;
use core::fmt;

/// Which operand of a division was zero.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum ZeroOperand {
    /// `0 / x` with `x != 0`.
    Dividend,
    /// `x / 0` with `x != 0`.
    Divisor,
    /// `0 / 0`.
    Both,
}

impl ZeroOperand {
    /// Classify a pair of operands, returning `None` if neither is zero.
    pub const fn classify(dividend: Word, divisor: Word) -> Option<Self> {
        match (dividend == 0, divisor == 0) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::Dividend),
            (false, true) => Some(Self::Divisor),
            (false, false) => None,
        }
    }
}

/// Errors produced while loading, stepping or decoding the division engine.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// The dividend, the divisor, or both were zero.
    ZeroOperand(ZeroOperand),

    /// An accumulator sum did not fit in `W+3` bits.
    AccumulatorOverflow,

    /// A computation is in flight; operands can't be latched until it completes or is cancelled.
    Busy,

    /// The previous result has not been consumed yet.
    ResultPending,

    /// No computation was loaded and no result is pending.
    NotLoaded,

    /// The tick budget was spent before the computation completed.
    TickBudgetExhausted,

    /// An encoded register did not fit in `W+3` bits.
    InvalidEncoding,
}

impl Error {
    /// Legacy error value written to the result register on a zero operand.
    ///
    /// NOTE: this is also a valid quotient (e.g. `0xBAD1DEA / 1`), so it can't be used to tell
    /// errors apart from results. Prefer matching on [`Error::ZeroOperand`].
    pub const SENTINEL: Word = 0x0BAD_1DEA;
}

impl fmt::Display for ZeroOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dividend => "dividend is zero",
            Self::Divisor => "divisor is zero",
            Self::Both => "dividend and divisor are zero",
        })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroOperand(which) => write!(f, "invalid division: {which}"),
            Self::AccumulatorOverflow => f.write_str("accumulator register overflowed"),
            Self::Busy => f.write_str("division engine is busy"),
            Self::ResultPending => f.write_str("previous result has not been consumed"),
            Self::NotLoaded => f.write_str("no computation loaded"),
            Self::TickBudgetExhausted => f.write_str("tick budget exhausted"),
            Self::InvalidEncoding => f.write_str("register encoding out of range"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{Error, ZeroOperand};

    #[test]
    fn classify() {
        assert_eq!(ZeroOperand::classify(0, 0), Some(ZeroOperand::Both));
        assert_eq!(ZeroOperand::classify(0, 5), Some(ZeroOperand::Dividend));
        assert_eq!(ZeroOperand::classify(5, 0), Some(ZeroOperand::Divisor));
        assert_eq!(ZeroOperand::classify(5, 5), None);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn display() {
        use alloc::string::ToString;

        assert_eq!(
            Error::ZeroOperand(ZeroOperand::Divisor).to_string(),
            "invalid division: divisor is zero"
        );
        assert_eq!(Error::Busy.to_string(), "division engine is busy");
    }

    #[test]
    fn sentinel_fits_word() {
        assert_eq!(Error::SENTINEL, 195_894_762);
    }
}
