//! The mutable state tree, mirroring the pattern algebra one-for-one.
//!
//! `State` is a closed sum type dispatched by `match`, not a trait object —
//! every node kind shares the same three-operation surface (`start`,
//! `process_ended`, `status`) and the compiler checks that every variant is
//! handled everywhere.

use crate::alternative::AlternativeState;
use crate::command::CommandState;
use crate::error::EngineError;
use crate::parallelization::ParallelizationState;
use crate::reactor::{ExitStatus, Pid};
use crate::repetition::RepetitionState;
use crate::sequence::SequenceState;
use crate::status::Status;

/// A running instance of some [`crate::pattern::Pattern`].
#[derive(Debug)]
pub enum State {
    Command(CommandState),
    Sequence(SequenceState),
    Parallelization(ParallelizationState),
    Alternative(AlternativeState),
    Repetition(RepetitionState),
    #[cfg(test)]
    Fake(fake::FakeState),
}

impl State {
    pub fn start(&mut self) -> Result<(), EngineError> {
        match self {
            State::Command(s) => s.start(),
            State::Sequence(s) => s.start(),
            State::Parallelization(s) => s.start(),
            State::Alternative(s) => s.start(),
            State::Repetition(s) => s.start(),
            #[cfg(test)]
            State::Fake(s) => s.start(),
        }
    }

    pub fn process_ended(&mut self, pid: Pid, exit_status: ExitStatus) -> Result<(), EngineError> {
        match self {
            State::Command(s) => s.process_ended(pid, exit_status),
            State::Sequence(s) => s.process_ended(pid, exit_status),
            State::Parallelization(s) => s.process_ended(pid, exit_status),
            State::Alternative(s) => s.process_ended(pid, exit_status),
            State::Repetition(s) => s.process_ended(pid, exit_status),
            #[cfg(test)]
            State::Fake(s) => s.process_ended(pid, exit_status),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            State::Command(s) => s.status(),
            State::Sequence(s) => s.status(),
            State::Parallelization(s) => s.status(),
            State::Alternative(s) => s.status(),
            State::Repetition(s) => s.status(),
            #[cfg(test)]
            State::Fake(s) => s.status(),
        }
    }
}
