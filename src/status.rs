//! The four-value status lattice every state node reports through.

use serde::{Deserialize, Serialize};

/// Status of a state node.
///
/// `New` and `Running` are transient; `Succeeded` and `Failed` are terminal
/// for every node except [`crate::repetition::RepetitionState`], which may
/// re-enter `Running` after a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    New,
    Running,
    Succeeded,
    Failed,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Succeeded | Status::Failed)
    }
}
