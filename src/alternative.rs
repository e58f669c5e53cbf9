//! Alternative: start every child at once, succeed only if exactly one of
//! them does.

use crate::error::EngineError;
use crate::pattern::Pattern;
use crate::reactor::{ExitStatus, Pid};
use crate::state::State;
use crate::status::Status;

#[derive(Debug)]
pub struct AlternativeState {
    pattern: Pattern,
    started: bool,
    children: Vec<State>,
}

impl AlternativeState {
    pub(crate) fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            started: false,
            children: Vec::new(),
        }
    }

    fn child_patterns(&self) -> &[Pattern] {
        match &self.pattern {
            Pattern::Alternative { children } => children,
            _ => unreachable!("AlternativeState must wrap a Pattern::Alternative"),
        }
    }

    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.started {
            panic!("Alternative::start called twice");
        }
        self.started = true;
        for pattern in self.child_patterns().to_vec() {
            let mut child = pattern.instantiate();
            child.start()?;
            self.children.push(child);
        }
        Ok(())
    }

    pub fn process_ended(
        &mut self,
        pid: Pid,
        exit_status: ExitStatus,
    ) -> Result<(), EngineError> {
        if !self.started {
            panic!("Alternative::process_ended called before start");
        }
        for child in &mut self.children {
            child.process_ended(pid, exit_status)?;
        }
        Ok(())
    }

    pub fn status(&self) -> Status {
        if !self.started {
            return Status::New;
        }
        if self.children.is_empty() {
            return Status::Failed;
        }
        if self.children.iter().any(|c| c.status() == Status::Running) {
            return Status::Running;
        }
        let succeeded = self
            .children
            .iter()
            .filter(|c| c.status() == Status::Succeeded)
            .count();
        if succeeded == 1 {
            Status::Succeeded
        } else {
            Status::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_alternative_fails_on_start() {
        let mut state = AlternativeState::new(Pattern::alternative([]));
        assert_eq!(state.status(), Status::New);
        state.start().unwrap();
        assert_eq!(state.status(), Status::Failed);
    }

    #[test]
    fn exactly_one_success_succeeds() {
        let mut state =
            AlternativeState::new(Pattern::alternative([Pattern::fake(1), Pattern::fake(2)]));
        state.start().unwrap();

        state.process_ended(1, ExitStatus::from_exit_code(1)).unwrap();
        assert_eq!(state.status(), Status::Running);

        state.process_ended(2, ExitStatus::from_exit_code(0)).unwrap();
        assert_eq!(state.status(), Status::Succeeded);
    }

    #[test]
    fn two_successes_fail_the_node() {
        let mut state =
            AlternativeState::new(Pattern::alternative([Pattern::fake(1), Pattern::fake(2)]));
        state.start().unwrap();
        state.process_ended(1, ExitStatus::from_exit_code(0)).unwrap();
        state.process_ended(2, ExitStatus::from_exit_code(0)).unwrap();
        assert_eq!(state.status(), Status::Failed);
    }

    #[test]
    fn all_fail_fails_the_node() {
        let mut state =
            AlternativeState::new(Pattern::alternative([Pattern::fake(1), Pattern::fake(2)]));
        state.start().unwrap();
        state.process_ended(1, ExitStatus::from_exit_code(1)).unwrap();
        state.process_ended(2, ExitStatus::from_exit_code(1)).unwrap();
        assert_eq!(state.status(), Status::Failed);
    }
}
