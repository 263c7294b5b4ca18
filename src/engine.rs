//! Resumable division engine.
//!
//! [`Engine`] owns the latched operands, the register file and the result register of a single
//! division unit. It is driven one tick at a time with [`Engine::tick`], or to completion with
//! [`Engine::run`]. Divisions which need to proceed concurrently each need their own engine.

mod machine;
mod stats;

pub use self::{
    machine::{Iteration, Machine, State},
    stats::Stats,
};

use crate::{Error, Observer, Operands, Outcome, Registers, Transition, Word};
use core::mem;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// A single division unit.
#[derive(Clone, Debug, Default)]
pub struct Engine<O = ()> {
    machine: Machine,
    result: Option<Outcome>,
    stats: Stats,
    observer: O,
}

impl Engine {
    /// Create an idle engine.
    pub const fn new() -> Self {
        Self::with_observer(())
    }
}

impl<O> Engine<O> {
    /// Create an idle engine which reports every tick to `observer`.
    pub const fn with_observer(observer: O) -> Self {
        Self {
            machine: Machine::Idle,
            result: None,
            stats: Stats {
                ticks: 0,
                exponential: 0,
                check: 0,
                runs: 0,
            },
            observer,
        }
    }

    /// Current control state.
    pub const fn state(&self) -> State {
        self.machine.state()
    }

    /// Whether a computation is in flight.
    pub const fn is_busy(&self) -> bool {
        !matches!(self.machine, Machine::Idle)
    }

    /// Operands latched by the in-flight computation.
    pub const fn operands(&self) -> Option<Operands> {
        self.machine.operands()
    }

    /// Register file of the in-flight computation, once initialized.
    pub const fn registers(&self) -> Option<&Registers> {
        self.machine.registers()
    }

    /// Tick counts of the current (or most recently completed) computation.
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Consume the engine, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Read the result register without consuming it.
    ///
    /// `None` until the computation writes its result.
    pub const fn result(&self) -> Option<Outcome> {
        self.result
    }

    /// Consume the result register, allowing the next computation to be loaded.
    pub fn take_result(&mut self) -> Option<Outcome> {
        self.result.take()
    }

    /// Latch `dividend` and `divisor` and begin a new computation.
    ///
    /// Fails with [`Error::Busy`] while a computation is in flight, and with
    /// [`Error::ResultPending`] until the previous result has been taken.
    pub fn load(&mut self, dividend: Word, divisor: Word) -> Result<(), Error> {
        if self.is_busy() {
            return Err(Error::Busy);
        }
        if self.result.is_some() {
            return Err(Error::ResultPending);
        }

        self.machine = Machine::load(Operands::new(dividend, divisor));
        self.stats = Stats::default();
        Ok(())
    }

    /// Abort the in-flight computation without writing a result.
    ///
    /// Returns whether a computation was in flight. A result written by an already-completed
    /// computation is left in place.
    pub fn cancel(&mut self) -> bool {
        let busy = self.is_busy();

        #[cfg(feature = "zeroize")]
        if let Some(regs) = self.machine.registers_mut() {
            regs.zeroize();
        }

        self.machine = Machine::Idle;
        busy
    }
}

impl<O: Observer> Engine<O> {
    /// Advance by one transition, returning the state after the tick.
    ///
    /// Ticking an idle engine does nothing. If the transition fails the computation is
    /// abandoned and the engine is left idle with no result.
    pub fn tick(&mut self) -> Result<State, Error> {
        let machine = mem::take(&mut self.machine);
        let Some(operands) = machine.operands() else {
            return Ok(State::Idle);
        };
        let from = machine.state();

        let (next, written) = machine.step()?;
        let to = next.state();
        self.stats.record(from, to);
        self.observer.on_transition(&Transition {
            tick: self.stats.ticks,
            from,
            to,
            operands,
            registers: next.registers().copied(),
            result: written,
        });

        if written.is_some() {
            self.result = written;
        }

        self.machine = next;
        Ok(to)
    }

    /// Tick until the in-flight computation completes, then consume its result.
    pub fn run(&mut self) -> Result<Word, Error> {
        while self.is_busy() {
            self.tick()?;
        }

        self.take_result().ok_or(Error::NotLoaded)?
    }

    /// Like [`Engine::run`], but cancel the computation if it has not completed after
    /// `max_ticks` ticks.
    pub fn run_bounded(&mut self, max_ticks: u64) -> Result<Word, Error> {
        let mut spent = 0;

        while self.is_busy() {
            if spent == max_ticks {
                self.cancel();
                return Err(Error::TickBudgetExhausted);
            }

            self.tick()?;
            spent += 1;
        }

        self.take_result().ok_or(Error::NotLoaded)?
    }
}

#[cfg(feature = "zeroize")]
impl<O> Zeroize for Engine<O> {
    fn zeroize(&mut self) {
        self.cancel();
        self.result = None;
        self.stats = Stats::default();
    }
}
