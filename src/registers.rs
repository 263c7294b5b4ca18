//! The engine's interim-accumulation registers.

use crate::{
    Accumulator, Error, NonZero, Word,
    accumulator::overflow_checked,
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

#[cfg(feature = "zeroize")]
use zeroize::DefaultIsZeroes;

/// Register file of the division engine.
///
/// Every transition which touches the registers preserves
/// `total_interim == total_counter * divisor`.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Registers {
    /// Contribution the next exponential step would commit.
    pub(crate) interim_expo: Accumulator,
    /// Multiple of the divisor that `interim_expo` represents.
    pub(crate) counter: Accumulator,
    /// Sum of all committed `interim_expo` contributions.
    pub(crate) total_interim: Accumulator,
    /// Sum of all committed `counter` contributions: the quotient so far.
    pub(crate) total_counter: Accumulator,
}

impl Registers {
    /// Size of the encoded register file in bytes.
    pub const BYTES: usize = 4 * Accumulator::BYTES;

    /// Registers as initialized on entry to the `Start` state.
    pub const fn start(divisor: NonZero<Word>) -> Self {
        let divisor = divisor.to_accumulator();
        Self {
            interim_expo: divisor,
            counter: Accumulator::ONE,
            total_interim: divisor,
            total_counter: Accumulator::ONE,
        }
    }

    /// Restart exponential growth from the current totals.
    pub const fn restart(&self, divisor: NonZero<Word>) -> Self {
        Self {
            interim_expo: divisor.to_accumulator(),
            counter: Accumulator::ONE,
            total_interim: self.total_interim,
            total_counter: self.total_counter,
        }
    }

    /// `total_interim` if the pending exponential contribution were committed.
    pub fn next_total_interim(&self) -> Result<Accumulator, Error> {
        overflow_checked(self.total_interim.checked_add(&self.interim_expo))
    }

    /// `total_interim` plus one more multiple of the base divisor.
    pub fn total_interim_plus(&self, divisor: NonZero<Word>) -> Result<Accumulator, Error> {
        overflow_checked(self.total_interim.checked_add(&divisor.to_accumulator()))
    }

    /// Commit the pending exponential contribution, doubling the step size.
    ///
    /// `next_total_interim` must be the value returned by [`Registers::next_total_interim`].
    pub fn commit(&self, next_total_interim: Accumulator) -> Result<Self, Error> {
        Ok(Self {
            interim_expo: overflow_checked(self.interim_expo.checked_double())?,
            counter: overflow_checked(self.counter.checked_double())?,
            total_interim: next_total_interim,
            // the counter is accumulated before it doubles
            total_counter: overflow_checked(self.total_counter.checked_add(&self.counter))?,
        })
    }

    /// Current exponential step size.
    pub const fn interim_expo(&self) -> Accumulator {
        self.interim_expo
    }

    /// Current step multiplier.
    pub const fn counter(&self) -> Accumulator {
        self.counter
    }

    /// Multiples of the divisor used up so far.
    pub const fn total_interim(&self) -> Accumulator {
        self.total_interim
    }

    /// Accumulated quotient.
    pub const fn total_counter(&self) -> Accumulator {
        self.total_counter
    }

    /// Read the accumulated quotient out as a [`Word`].
    pub fn quotient(&self) -> Result<Word, Error> {
        self.total_counter.to_word().ok_or(Error::AccumulatorOverflow)
    }

    /// Check `total_interim == total_counter * divisor` and `interim_expo == counter * divisor`.
    ///
    /// Uses a multiplication, so it's only meant for assertions and tests.
    pub fn invariant_holds(&self, divisor: Word) -> bool {
        let divisor = u64::from(divisor);
        let scaled = |n: Accumulator| n.get().checked_mul(divisor);

        scaled(self.total_counter) == Some(self.total_interim.get())
            && scaled(self.counter) == Some(self.interim_expo.get())
    }

    /// Serialize as little endian bytes, in declaration order.
    pub fn to_le_bytes(&self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        let regs = [
            self.interim_expo,
            self.counter,
            self.total_interim,
            self.total_counter,
        ];

        for (chunk, reg) in out.chunks_exact_mut(Accumulator::BYTES).zip(regs) {
            chunk.copy_from_slice(&reg.to_le_bytes());
        }

        out
    }

    /// Decode from little endian bytes.
    ///
    /// Fails with [`Error::InvalidEncoding`] if any register does not fit in `W+3` bits.
    pub fn from_le_bytes(bytes: [u8; Self::BYTES]) -> Result<Self, Error> {
        let mut regs = [Accumulator::ZERO; 4];

        for (reg, chunk) in regs.iter_mut().zip(bytes.chunks_exact(Accumulator::BYTES)) {
            let mut buf = [0u8; Accumulator::BYTES];
            buf.copy_from_slice(chunk);
            *reg = Accumulator::from_le_bytes(buf)?;
        }

        let [interim_expo, counter, total_interim, total_counter] = regs;
        Ok(Self {
            interim_expo,
            counter,
            total_interim,
            total_counter,
        })
    }
}

impl ConditionallySelectable for Registers {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            interim_expo: Accumulator::conditional_select(&a.interim_expo, &b.interim_expo, choice),
            counter: Accumulator::conditional_select(&a.counter, &b.counter, choice),
            total_interim: Accumulator::conditional_select(
                &a.total_interim,
                &b.total_interim,
                choice,
            ),
            total_counter: Accumulator::conditional_select(
                &a.total_counter,
                &b.total_counter,
                choice,
            ),
        }
    }
}

impl ConstantTimeEq for Registers {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.interim_expo.ct_eq(&other.interim_expo)
            & self.counter.ct_eq(&other.counter)
            & self.total_interim.ct_eq(&other.total_interim)
            & self.total_counter.ct_eq(&other.total_counter)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Registers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut buffer = [0u8; Self::BYTES];
        serdect::array::deserialize_hex_or_bin(&mut buffer, deserializer)?;

        Self::from_le_bytes(buffer).map_err(D::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Registers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serdect::array::serialize_hex_lower_or_bin(&self.to_le_bytes(), serializer)
    }
}

#[cfg(feature = "zeroize")]
impl DefaultIsZeroes for Registers {}
