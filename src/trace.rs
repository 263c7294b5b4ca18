//! Transition tracing.
//!
//! The engine reports every tick to an [`Observer`]. Observers see the state record after the
//! transition, so an observer can check the register invariant at every observation point
//! without the engine itself multiplying anything.

use crate::{Operands, Outcome, Registers, State};
use core::fmt;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// One tick of the division engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Transition {
    /// Tick number within the current computation, starting at `1`.
    pub tick: u64,
    /// State before the tick.
    pub from: State,
    /// State after the tick.
    pub to: State,
    /// Operands latched by the computation.
    pub operands: Operands,
    /// Registers after the tick, while the iterative machine is running.
    pub registers: Option<Registers>,
    /// Value written to the result register on this tick, if any.
    pub result: Option<Outcome>,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} / {} tick {}] {} -> {}",
            self.operands.dividend(),
            self.operands.divisor(),
            self.tick,
            self.from,
            self.to
        )?;

        if let Some(regs) = &self.registers {
            write!(
                f,
                " interim_expo={} counter={} total_interim={} total_counter={}",
                regs.interim_expo(),
                regs.counter(),
                regs.total_interim(),
                regs.total_counter()
            )?;
        }

        match &self.result {
            Some(Ok(quotient)) => write!(f, " result={quotient}"),
            Some(Err(err)) => write!(f, " error=\"{err}\""),
            None => Ok(()),
        }
    }
}

/// Receives a [`Transition`] for every tick of an [`Engine`][`crate::Engine`].
pub trait Observer {
    /// Called after each transition.
    fn on_transition(&mut self, transition: &Transition);
}

/// Discards all transitions.
impl Observer for () {
    #[inline(always)]
    fn on_transition(&mut self, _: &Transition) {}
}

impl<F> Observer for F
where
    F: FnMut(&Transition),
{
    fn on_transition(&mut self, transition: &Transition) {
        self(transition)
    }
}

/// Observer which keeps every transition.
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    transitions: Vec<Transition>,
}

#[cfg(feature = "alloc")]
impl Recorder {
    /// Create an empty recorder.
    pub const fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Recorded transitions, oldest first.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Forget all recorded transitions.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Check the recorded trace:
    ///
    /// - `total_interim == total_counter * divisor` after every tick of the iterative machine,
    /// - `total_interim` strictly increases on every committed exponential step,
    /// - `total_interim` never exceeds the dividend.
    pub fn invariant_holds(&self) -> bool {
        let mut prev: Option<&Registers> = None;

        for t in &self.transitions {
            let Some(regs) = &t.registers else {
                prev = None;
                continue;
            };

            if !regs.invariant_holds(t.operands.divisor())
                || regs.total_interim().get() > u64::from(t.operands.dividend())
            {
                return false;
            }

            if let Some(prev) = prev {
                let committed = t.from == State::Exponential && t.to == State::Exponential;
                if committed && regs.total_interim() <= prev.total_interim() {
                    return false;
                }
            }

            prev = Some(regs);
        }

        true
    }
}

#[cfg(feature = "alloc")]
impl Observer for Recorder {
    fn on_transition(&mut self, transition: &Transition) {
        self.transitions.push(*transition);
    }
}
