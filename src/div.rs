//! One-shot division helpers.

use crate::{Engine, Error, Observer, Outcome, Stats, Word};

/// Computes `dividend / divisor`, truncating.
///
/// Fails with [`Error::ZeroOperand`] if either operand is zero.
///
/// ```
/// use expdiv::{Error, ZeroOperand, divide};
///
/// assert_eq!(divide(28, 4), Ok(7));
/// assert_eq!(divide(3, 4), Ok(0));
/// assert_eq!(divide(5, 0), Err(Error::ZeroOperand(ZeroOperand::Divisor)));
/// ```
pub fn divide(dividend: Word, divisor: Word) -> Outcome {
    divide_observed(dividend, divisor, ()).0
}

/// Computes `dividend / divisor`, also returning the number of ticks spent in each state.
pub fn divide_with_stats(dividend: Word, divisor: Word) -> Result<(Word, Stats), Error> {
    let mut engine = Engine::new();
    engine.load(dividend, divisor)?;
    let quotient = engine.run()?;
    Ok((quotient, engine.stats()))
}

/// Computes `dividend / divisor`, reporting every transition to `observer`.
///
/// Returns the outcome along with the observer.
pub fn divide_observed<O: Observer>(dividend: Word, divisor: Word, observer: O) -> (Outcome, O) {
    let mut engine = Engine::with_observer(observer);
    let outcome = engine.load(dividend, divisor).and_then(|()| engine.run());
    (outcome, engine.into_observer())
}

/// Computes `dividend / divisor`, encoding errors as [`Error::SENTINEL`].
///
/// This matches the result register of the hardware unit. The sentinel is also a legitimate
/// quotient, so callers which need to detect errors should use [`divide`] instead.
///
/// ```
/// use expdiv::{Error, divide_sentinel};
///
/// assert_eq!(divide_sentinel(0, 0), Error::SENTINEL);
/// assert_eq!(divide_sentinel(Error::SENTINEL, 1), Error::SENTINEL);
/// ```
pub fn divide_sentinel(dividend: Word, divisor: Word) -> Word {
    divide(dividend, divisor).unwrap_or(Error::SENTINEL)
}
