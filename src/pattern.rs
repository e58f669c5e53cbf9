//! The immutable pattern algebra — the static description of a workflow.
//!
//! A [`Pattern`] is a plain recursive value with no runtime state; the
//! mutable counterpart produced by [`Pattern::instantiate`] lives in
//! [`crate::state`].

use serde::{Deserialize, Serialize};

use crate::alternative::AlternativeState;
use crate::command::CommandState;
use crate::parallelization::ParallelizationState;
use crate::repetition::RepetitionState;
use crate::sequence::SequenceState;
use crate::state::State;

/// A workflow fragment: sequence, parallelization, alternative (exclusive
/// choice), repetition (guarded loop), or a leaf command.
///
/// Serializes as a tagged object, e.g. `{"type": "command", "command": ["ls", "-l"]}`,
/// matching the wire shape described by the system this engine replaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Pattern {
    Sequence { children: Vec<Pattern> },
    Parallelization { children: Vec<Pattern> },
    Alternative { children: Vec<Pattern> },
    Repetition {
        child: Box<Pattern>,
        exit: Box<Pattern>,
    },
    Command { command: Vec<String> },

    /// Test-only leaf: behaves like a `Command` with a caller-chosen pid but
    /// never spawns a process. Lets composite unit tests drive `process_ended`
    /// deterministically instead of waiting on real OS exits.
    #[cfg(test)]
    #[serde(skip)]
    Fake { pid: crate::reactor::Pid },
}

impl Pattern {
    pub fn sequence(children: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Sequence {
            children: children.into_iter().collect(),
        }
    }

    pub fn parallelization(children: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Parallelization {
            children: children.into_iter().collect(),
        }
    }

    pub fn alternative(children: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Alternative {
            children: children.into_iter().collect(),
        }
    }

    pub fn repetition(child: Pattern, exit: Pattern) -> Self {
        Pattern::Repetition {
            child: Box::new(child),
            exit: Box::new(exit),
        }
    }

    pub fn command<S: Into<String>>(argv: impl IntoIterator<Item = S>) -> Self {
        Pattern::Command {
            command: argv.into_iter().map(Into::into).collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn fake(pid: crate::reactor::Pid) -> Self {
        Pattern::Fake { pid }
    }

    /// Build a fresh, NEW state tree rooted at this pattern.
    pub fn instantiate(&self) -> State {
        match self {
            Pattern::Sequence { .. } => State::Sequence(SequenceState::new(self.clone())),
            Pattern::Parallelization { .. } => {
                State::Parallelization(ParallelizationState::new(self.clone()))
            }
            Pattern::Alternative { .. } => State::Alternative(AlternativeState::new(self.clone())),
            Pattern::Repetition { .. } => State::Repetition(RepetitionState::new(self.clone())),
            Pattern::Command { .. } => State::Command(CommandState::new(self.clone())),
            #[cfg(test)]
            Pattern::Fake { pid } => State::Fake(crate::state::fake::FakeState::with_pid(*pid)),
        }
    }
}
