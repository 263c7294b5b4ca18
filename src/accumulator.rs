//! Bounded accumulator registers.

use crate::{
    Error, Word,
    word::{ACC_BITS, ACC_MAX, WideWord, choice_from_wide_ge},
};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "zeroize")]
use zeroize::DefaultIsZeroes;

/// A `W+3`-bit accumulator register.
///
/// Sums are checked against [`ACC_MAX`]: an accumulator can never hold a value which would not
/// fit in the register of the hardware datapath.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Accumulator(WideWord);

impl Accumulator {
    /// The value `0`.
    pub const ZERO: Self = Self(0);

    /// The value `1`.
    pub const ONE: Self = Self(1);

    /// Maximum value this register can express.
    pub const MAX: Self = Self(ACC_MAX);

    /// Size of the register in bits.
    pub const BITS: u32 = ACC_BITS;

    /// Size of the encoded register in bytes.
    pub const BYTES: usize = size_of::<WideWord>();

    /// Load a [`Word`] into an accumulator.
    pub const fn from_word(word: Word) -> Self {
        Self(word as WideWord)
    }

    /// Create an accumulator from a wide value, checking it fits in [`Self::BITS`].
    pub const fn new(value: WideWord) -> Option<Self> {
        if value <= ACC_MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the register contents.
    pub const fn get(self) -> WideWord {
        self.0
    }

    /// Narrow to a [`Word`], if the value fits.
    pub fn to_word(self) -> Option<Word> {
        Word::try_from(self.0).ok()
    }

    /// Computes `self + rhs`, returning none if the sum does not fit in the register.
    pub fn checked_add(&self, rhs: &Self) -> CtOption<Self> {
        // Operands are at most `ACC_BITS` wide, so the wide sum cannot wrap.
        let sum = self.0 + rhs.0;
        CtOption::new(Self(sum), choice_from_wide_ge(ACC_MAX, sum))
    }

    /// Computes `self + self`.
    pub fn checked_double(&self) -> CtOption<Self> {
        self.checked_add(self)
    }

    /// Returns the truthy value if `self >= rhs`.
    pub fn ct_ge(&self, rhs: &Self) -> Choice {
        choice_from_wide_ge(self.0, rhs.0)
    }

    /// Serialize as little endian bytes.
    pub const fn to_le_bytes(self) -> [u8; Self::BYTES] {
        self.0.to_le_bytes()
    }

    /// Decode from little endian bytes, rejecting values wider than [`Self::BITS`].
    pub fn from_le_bytes(bytes: [u8; Self::BYTES]) -> Result<Self, Error> {
        Self::new(WideWord::from_le_bytes(bytes)).ok_or(Error::InvalidEncoding)
    }
}

/// Lift a checked sum into the engine's error channel.
pub(crate) fn overflow_checked(sum: CtOption<Accumulator>) -> Result<Accumulator, Error> {
    Option::<Accumulator>::from(sum).ok_or(Error::AccumulatorOverflow)
}

impl ConditionallySelectable for Accumulator {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(WideWord::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Accumulator {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(feature = "zeroize")]
impl DefaultIsZeroes for Accumulator {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::Accumulator;
    use crate::{Error, Word};

    #[test]
    fn checked_add_within_bound() {
        let a = Accumulator::from_word(Word::MAX);
        let sum = a.checked_add(&a);
        assert!(bool::from(sum.is_some()));
        assert_eq!(sum.unwrap().get(), 2 * u64::from(Word::MAX));
    }

    #[test]
    fn checked_add_overflow() {
        assert!(bool::from(
            Accumulator::MAX.checked_add(&Accumulator::ONE).is_none()
        ));
        assert!(bool::from(Accumulator::MAX.checked_double().is_none()));
        assert!(bool::from(
            Accumulator::MAX.checked_add(&Accumulator::ZERO).is_some()
        ));
    }

    #[test]
    fn new_rejects_wide_values() {
        assert_eq!(Accumulator::new(1 << Accumulator::BITS), None);
        assert_eq!(Accumulator::new((1 << Accumulator::BITS) - 1), Some(Accumulator::MAX));
    }

    #[test]
    fn le_bytes() {
        let a = Accumulator::from_word(0x0BAD_1DEA);
        assert_eq!(Accumulator::from_le_bytes(a.to_le_bytes()), Ok(a));
        assert_eq!(
            Accumulator::from_le_bytes([0xff; Accumulator::BYTES]),
            Err(Error::InvalidEncoding)
        );
    }

    #[test]
    fn to_word() {
        assert_eq!(Accumulator::from_word(Word::MAX).to_word(), Some(Word::MAX));
        assert_eq!(Accumulator::MAX.to_word(), None);
    }
}
