//! Step accounting.

use super::State;

/// Number of ticks a computation spent in each control state.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Stats {
    /// Ticks from latching the operands until the result register was written.
    pub ticks: u64,
    /// Ticks spent in [`State::Exponential`], including the tick which overshoots.
    pub exponential: u64,
    /// Ticks spent in [`State::Check`].
    pub check: u64,
    /// Number of exponential runs: one, plus one for every restart from [`State::Check`].
    pub runs: u64,
}

impl Stats {
    pub(crate) fn record(&mut self, from: State, to: State) {
        self.ticks += 1;

        match from {
            State::Exponential => self.exponential += 1,
            State::Check => self.check += 1,
            State::Idle | State::Start | State::Done => {}
        }

        if to == State::Exponential && from != State::Exponential {
            self.runs += 1;
        }
    }
}
