//! The four-state exponential-search division machine.

use crate::{Error, NonZero, Operands, Outcome, Precheck, Registers, Word};
use core::fmt;
use subtle::ConditionallySelectable;

/// Control state of the division engine.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum State {
    /// Ready to latch a new pair of operands.
    #[default]
    Idle,
    /// Operands are latched; the next tick evaluates the pre-check and initializes the registers.
    Start,
    /// Doubling the step size while the dividend still covers it.
    Exponential,
    /// Deciding whether another exponential run fits.
    Check,
    /// The accumulated quotient is ready to be written to the result register.
    Done,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "IDLE",
            Self::Start => "START",
            Self::Exponential => "EXPONENTIAL",
            Self::Check => "CHECK",
            Self::Done => "DONE",
        })
    }
}

/// Operands and registers of a computation on the iterative path.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Iteration {
    dividend: NonZero<Word>,
    divisor: NonZero<Word>,
    registers: Registers,
}

impl Iteration {
    fn with_registers(self, registers: Registers) -> Self {
        debug_assert!(registers.invariant_holds(self.divisor.get()));
        debug_assert!(registers.total_interim.get() <= u64::from(self.dividend.get()));
        Self { registers, ..self }
    }
}

/// Complete state record of the engine.
///
/// [`Machine::step`] consumes a record and returns the next one; nothing is mutated in place, in
/// the same way a clocked register only takes its new value on the tick.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Machine {
    /// See [`State::Idle`].
    #[default]
    Idle,
    /// See [`State::Start`].
    Start(Operands),
    /// See [`State::Exponential`].
    Exponential(Iteration),
    /// See [`State::Check`].
    Check(Iteration),
    /// See [`State::Done`].
    Done(Iteration),
}

impl Machine {
    /// Latch operands, beginning a new computation.
    pub const fn load(operands: Operands) -> Self {
        Self::Start(operands)
    }

    /// Control state tag.
    pub const fn state(&self) -> State {
        match self {
            Self::Idle => State::Idle,
            Self::Start(_) => State::Start,
            Self::Exponential(_) => State::Exponential,
            Self::Check(_) => State::Check,
            Self::Done(_) => State::Done,
        }
    }

    /// Operands latched by the current computation, if any.
    pub const fn operands(&self) -> Option<Operands> {
        match self {
            Self::Idle => None,
            Self::Start(operands) => Some(*operands),
            Self::Exponential(it) | Self::Check(it) | Self::Done(it) => {
                Some(Operands::new(it.dividend.get(), it.divisor.get()))
            }
        }
    }

    /// Register file, once initialized.
    pub const fn registers(&self) -> Option<&Registers> {
        match self {
            Self::Exponential(it) | Self::Check(it) | Self::Done(it) => Some(&it.registers),
            Self::Idle | Self::Start(_) => None,
        }
    }

    #[cfg(feature = "zeroize")]
    pub(crate) fn registers_mut(&mut self) -> Option<&mut Registers> {
        match self {
            Self::Exponential(it) | Self::Check(it) | Self::Done(it) => Some(&mut it.registers),
            Self::Idle | Self::Start(_) => None,
        }
    }

    /// Advance by exactly one transition.
    ///
    /// Returns the next state record, and the value written to the result register if this
    /// transition writes it. The result register is written once per computation: on the
    /// `Start` tick when a fast path resolves the division, otherwise on the `Done` tick.
    pub fn step(self) -> Result<(Self, Option<Outcome>), Error> {
        match self {
            Self::Idle => Ok((self, None)),
            Self::Start(operands) => Ok(match operands.precheck() {
                Precheck::Resolved(outcome) => (Self::Idle, Some(outcome)),
                Precheck::Iterate { dividend, divisor } => {
                    let it = Iteration {
                        dividend,
                        divisor,
                        registers: Registers::start(divisor),
                    };
                    (Self::Exponential(it), None)
                }
            }),
            Self::Exponential(it) => {
                let held = it.registers;
                let next = held.next_total_interim()?;
                let committed = held.commit(next)?;
                let fits = it.dividend.to_accumulator().ct_ge(&next);

                // Both register sets are computed every tick; `fits` selects which is latched.
                let it = it.with_registers(Registers::conditional_select(&held, &committed, fits));

                if bool::from(fits) {
                    Ok((Self::Exponential(it), None))
                } else {
                    Ok((Self::Check(it), None))
                }
            }
            Self::Check(it) => {
                let regs = it.registers;
                let next = regs.total_interim_plus(it.divisor)?;

                if bool::from(it.dividend.to_accumulator().ct_ge(&next)) {
                    let registers = regs.restart(it.divisor);
                    Ok((Self::Exponential(it.with_registers(registers)), None))
                } else {
                    Ok((Self::Done(it), None))
                }
            }
            Self::Done(it) => Ok((Self::Idle, Some(Ok(it.registers.quotient()?)))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{Machine, State};
    use crate::{Error, Operands, ZeroOperand};

    /// Step until a result is written, collecting `(state, total_interim, total_counter)`.
    fn trace(dividend: u32, divisor: u32) -> ([(State, u64, u64); 16], usize, crate::Outcome) {
        let mut out = [(State::Idle, 0, 0); 16];
        let mut len = 0;
        let mut machine = Machine::load(Operands::new(dividend, divisor));

        loop {
            let (next, written) = machine.step().unwrap();
            let (ti, tc) = next
                .registers()
                .map(|r| (r.total_interim().get(), r.total_counter().get()))
                .unwrap_or_default();
            out[len] = (next.state(), ti, tc);
            len += 1;
            machine = next;

            if let Some(outcome) = written {
                assert_eq!(machine.state(), State::Idle);
                return (out, len, outcome);
            }
        }
    }

    #[test]
    fn walkthrough_28_by_4() {
        let (steps, len, outcome) = trace(28, 4);
        assert_eq!(outcome, Ok(7));
        assert_eq!(
            &steps[..len],
            &[
                (State::Exponential, 4, 1),
                (State::Exponential, 8, 2),
                (State::Exponential, 16, 4),
                (State::Check, 16, 4),
                (State::Exponential, 16, 4),
                (State::Exponential, 20, 5),
                (State::Exponential, 28, 7),
                (State::Check, 28, 7),
                (State::Done, 28, 7),
                (State::Idle, 0, 0),
            ]
        );
    }

    #[test]
    fn fast_path_is_one_transition() {
        for (dividend, divisor, expected) in [
            (0, 5, Err(Error::ZeroOperand(ZeroOperand::Dividend))),
            (5, 0, Err(Error::ZeroOperand(ZeroOperand::Divisor))),
            (0, 0, Err(Error::ZeroOperand(ZeroOperand::Both))),
            (12, 1, Ok(12)),
            (9, 9, Ok(1)),
            (3, 9, Ok(0)),
        ] {
            let (_, len, outcome) = trace(dividend, divisor);
            assert_eq!(len, 1);
            assert_eq!(outcome, expected);
        }
    }

    #[test]
    fn idle_is_stable() {
        let (next, written) = Machine::Idle.step().unwrap();
        assert_eq!(next, Machine::Idle);
        assert_eq!(written, None);
    }

    #[test]
    fn check_restarts_exponential_run() {
        let (steps, len, _) = trace(28, 4);
        let restart = steps[..len]
            .windows(2)
            .position(|w| w[0].0 == State::Check && w[1].0 == State::Exponential);
        assert_eq!(restart, Some(3));
    }

    #[test]
    fn operands_are_latched() {
        let mut machine = Machine::load(Operands::new(113, 2));
        while machine.state() != State::Done {
            assert_eq!(machine.operands(), Some(Operands::new(113, 2)));
            machine = machine.step().unwrap().0;
        }
        assert_eq!(machine.operands(), Some(Operands::new(113, 2)));
    }
}
