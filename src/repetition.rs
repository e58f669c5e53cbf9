//! Repetition: a guarded loop. `child` and `exit` race each other; the
//! combination of their outcomes decides whether the node restarts, and
//! with what final status.

use crate::error::EngineError;
use crate::pattern::Pattern;
use crate::reactor::{ExitStatus, Pid};
use crate::state::State;
use crate::status::Status;

#[derive(Debug)]
pub struct RepetitionState {
    pattern: Pattern,
    started: bool,
    child: Option<Box<State>>,
    exit: Option<Box<State>>,
}

impl RepetitionState {
    pub(crate) fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            started: false,
            child: None,
            exit: None,
        }
    }

    fn patterns(&self) -> (&Pattern, &Pattern) {
        match &self.pattern {
            Pattern::Repetition { child, exit } => (child, exit),
            _ => unreachable!("RepetitionState must wrap a Pattern::Repetition"),
        }
    }

    fn spawn_pair(&mut self) -> Result<(), EngineError> {
        let (child_pattern, exit_pattern) = self.patterns();
        let mut child = child_pattern.clone().instantiate();
        child.start()?;
        let mut exit = exit_pattern.clone().instantiate();
        exit.start()?;
        self.child = Some(Box::new(child));
        self.exit = Some(Box::new(exit));
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.started {
            panic!("Repetition::start called twice");
        }
        self.started = true;
        self.spawn_pair()
    }

    pub fn process_ended(
        &mut self,
        pid: Pid,
        exit_status: ExitStatus,
    ) -> Result<(), EngineError> {
        if !self.started {
            panic!("Repetition::process_ended called before start");
        }
        let child = self.child.as_mut().expect("Repetition always holds a child after start");
        let exit = self.exit.as_mut().expect("Repetition always holds an exit after start");
        child.process_ended(pid, exit_status)?;
        exit.process_ended(pid, exit_status)?;

        if child.status() == Status::Succeeded && exit.status() == Status::Failed {
            tracing::debug!("repetition restarting child/exit pair");
            self.spawn_pair()?;
        }
        Ok(())
    }

    pub fn status(&self) -> Status {
        let (Some(child), Some(exit)) = (&self.child, &self.exit) else {
            return Status::New;
        };
        match (child.status(), exit.status()) {
            (Status::Succeeded, Status::Succeeded) => Status::Failed,
            (Status::Failed, Status::Failed) => Status::Failed,
            (Status::Failed, Status::Succeeded) => Status::Succeeded,
            // (Succeeded, Failed) only exists mid-`process_ended`, before the
            // synchronous restart replaces both children below.
            _ => Status::Running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fails_fast_when_both_fail() {
        let mut state =
            RepetitionState::new(Pattern::repetition(Pattern::fake(1), Pattern::fake(2)));
        state.start().unwrap();
        state.process_ended(1, ExitStatus::from_exit_code(1)).unwrap();
        state.process_ended(2, ExitStatus::from_exit_code(1)).unwrap();
        assert_eq!(state.status(), Status::Failed);
    }

    #[test]
    fn succeeds_when_exit_wins() {
        let mut state =
            RepetitionState::new(Pattern::repetition(Pattern::fake(1), Pattern::fake(2)));
        state.start().unwrap();
        state.process_ended(1, ExitStatus::from_exit_code(1)).unwrap();
        state.process_ended(2, ExitStatus::from_exit_code(0)).unwrap();
        assert_eq!(state.status(), Status::Succeeded);
    }

    #[test]
    fn fails_when_both_succeed() {
        let mut state =
            RepetitionState::new(Pattern::repetition(Pattern::fake(1), Pattern::fake(2)));
        state.start().unwrap();
        state.process_ended(1, ExitStatus::from_exit_code(0)).unwrap();
        state.process_ended(2, ExitStatus::from_exit_code(0)).unwrap();
        assert_eq!(state.status(), Status::Failed);
    }

    #[test]
    fn restarts_with_fresh_children_when_child_wins() {
        let mut state =
            RepetitionState::new(Pattern::repetition(Pattern::fake(1), Pattern::fake(2)));
        state.start().unwrap();

        let child_before = state.child.as_deref().unwrap() as *const State;
        let exit_before = state.exit.as_deref().unwrap() as *const State;

        state.process_ended(1, ExitStatus::from_exit_code(0)).unwrap();
        state.process_ended(2, ExitStatus::from_exit_code(1)).unwrap();

        assert_eq!(state.status(), Status::Running, "restarted pair is running");
        let child_after = state.child.as_deref().unwrap() as *const State;
        let exit_after = state.exit.as_deref().unwrap() as *const State;
        assert_ne!(child_before, child_after, "child must be a fresh instance");
        assert_ne!(exit_before, exit_after, "exit must be a fresh instance");
    }

    #[test]
    #[should_panic(expected = "called twice")]
    fn start_twice_panics() {
        let mut state =
            RepetitionState::new(Pattern::repetition(Pattern::fake(1), Pattern::fake(2)));
        state.start().unwrap();
        state.start().unwrap();
    }
}
