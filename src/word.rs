//! `Word` is the operand and result type of the engine: the `W`-bit register width of the
//! hardware datapath.

use subtle::{Choice, ConstantTimeGreater};

/// Operand and result type.
pub type Word = u32;

/// Storage type for [`Accumulator`][`crate::Accumulator`] registers.
///
/// Must be strictly wider than [`ACC_BITS`].
pub type WideWord = u64;

/// Width of a [`Word`] in bits.
pub const BITS: u32 = Word::BITS;

/// Headroom carried by accumulator registers over [`BITS`].
pub const ACC_MARGIN_BITS: u32 = 3;

/// Width of an accumulator register in bits.
pub const ACC_BITS: u32 = BITS + ACC_MARGIN_BITS;

/// Largest value an accumulator register can hold.
pub const ACC_MAX: WideWord = (1 << ACC_BITS) - 1;

/// Returns the truthy value if `x >= y` and the falsy value otherwise.
#[inline]
pub(crate) fn choice_from_wide_ge(x: WideWord, y: WideWord) -> Choice {
    !y.ct_gt(&x)
}
