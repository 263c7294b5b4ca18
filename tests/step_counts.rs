//! Regression table of tick counts.
//!
//! Any change to these numbers changes the cost model of the engine.

use expdiv::{Error, Stats, Word, ZeroOperand, divide_with_stats};

/// `(dividend, divisor, quotient, ticks, exponential, check, runs)`
const TABLE: &[(Word, Word, Word, u64, u64, u64, u64)] = &[
    (28, 4, 7, 10, 6, 2, 2),
    (5421, 3, 1807, 47, 39, 6, 6),
    (0xFFFF_FFFF, 3, 1_431_655_765, 275, 257, 16, 16),
    (113, 2, 56, 26, 19, 5, 5),
    (100, 7, 14, 15, 10, 3, 3),
    (1000, 10, 100, 27, 20, 5, 5),
    (1023, 2, 511, 22, 18, 2, 2),
    (0xFFFF_FFFF, 2, 0x7FFF_FFFF, 66, 62, 2, 2),
    (0xFFFF_FFFF, 0xFFFF_FFFE, 1, 4, 1, 1, 1),
    (6, 4, 1, 4, 1, 1, 1),
    (3, 2, 1, 4, 1, 1, 1),
];

#[test]
fn iterative_path() {
    for &(dividend, divisor, quotient, ticks, exponential, check, runs) in TABLE {
        assert_eq!(
            divide_with_stats(dividend, divisor),
            Ok((
                quotient,
                Stats {
                    ticks,
                    exponential,
                    check,
                    runs,
                }
            )),
            "{dividend} / {divisor}"
        );
    }
}

#[test]
fn fast_paths_take_one_tick() {
    let one_tick = |q| Ok((q, Stats { ticks: 1, ..Stats::default() }));

    assert_eq!(divide_with_stats(12, 1), one_tick(12));
    assert_eq!(divide_with_stats(Word::MAX, 1), one_tick(Word::MAX));
    assert_eq!(divide_with_stats(77, 77), one_tick(1));
    assert_eq!(divide_with_stats(4, 5), one_tick(0));
}

#[test]
fn zero_operands() {
    for (dividend, divisor, which) in [
        (0, 5, ZeroOperand::Dividend),
        (5, 0, ZeroOperand::Divisor),
        (0, 0, ZeroOperand::Both),
    ] {
        assert_eq!(
            divide_with_stats(dividend, divisor),
            Err(Error::ZeroOperand(which))
        );
    }
}

/// Exponential runs grow with the bit length of the quotient; the ticks within the runs are what
/// push the total towards its square.
#[test]
fn runs_bounded_by_quotient_bits() {
    for &(dividend, divisor, quotient, ticks, exponential, _, runs) in TABLE {
        let bits = u64::from(Word::BITS - quotient.leading_zeros());
        assert!(runs <= bits, "{dividend} / {divisor}");
        assert!(exponential <= runs * (bits + 1), "{dividend} / {divisor}");
        assert!(ticks <= 2 + exponential + runs, "{dividend} / {divisor}");
    }
}
