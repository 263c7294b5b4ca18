//! Step-counted unsigned integer division by exponential search.
//!
//! # About
//! This crate models a division unit built as a clocked state machine which has
//! neither a divider nor a multiplier: the quotient is found with addition,
//! doubling and comparison only. Each tick of the machine is one discrete unit of
//! work, and the machine is designed to need few of them: the step size doubles
//! while it still fits in the dividend, and restarts from the divisor once it
//! overshoots.
//!
//! # Usage
//! ```
//! use expdiv::{Engine, State};
//!
//! // one-shot
//! assert_eq!(expdiv::divide(5421, 3), Ok(1807));
//!
//! // tick by tick
//! let mut engine = Engine::new();
//! engine.load(28, 4)?;
//! while engine.tick()? != State::Idle {}
//! assert_eq!(engine.take_result(), Some(Ok(7)));
//! assert_eq!(engine.stats().ticks, 10);
//! # Ok::<(), expdiv::Error>(())
//! ```
//!
//! # Errors
//! Dividing by zero or dividing zero is reported as
//! [`Error::ZeroOperand`]. The hardware unit instead writes the sentinel
//! [`Error::SENTINEL`] to its result register; [`divide_sentinel`] reproduces
//! that encoding, but the sentinel is indistinguishable from the quotient
//! `0xBAD1DEA`.
//!
//! # Features
//! - `alloc` (default): [`Recorder`], an [`Observer`] which keeps a full trace.
//! - `serde`: serialization for [`Registers`].
//! - `zeroize`: scrub registers on cancellation.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod accumulator;
mod div;
mod engine;
mod error;
mod non_zero;
mod operands;
mod registers;
mod trace;
mod word;

pub use crate::{
    accumulator::Accumulator,
    div::{divide, divide_observed, divide_sentinel, divide_with_stats},
    engine::{Engine, Iteration, Machine, State, Stats},
    error::{Error, ZeroOperand},
    non_zero::NonZero,
    operands::{Operands, Precheck},
    registers::Registers,
    trace::{Observer, Transition},
    word::{ACC_BITS, ACC_MARGIN_BITS, ACC_MAX, BITS, WideWord, Word},
};
pub use subtle;

#[cfg(feature = "alloc")]
pub use crate::trace::Recorder;

#[cfg(feature = "zeroize")]
pub use zeroize;

/// Value of the result register: a quotient, or the reason there is none.
pub type Outcome = Result<Word, Error>;
