//! Parallelization: start every child at once, succeed only if all of them
//! do.

use crate::error::EngineError;
use crate::pattern::Pattern;
use crate::reactor::{ExitStatus, Pid};
use crate::state::State;
use crate::status::Status;

#[derive(Debug)]
pub struct ParallelizationState {
    pattern: Pattern,
    started: bool,
    children: Vec<State>,
}

impl ParallelizationState {
    pub(crate) fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            started: false,
            children: Vec::new(),
        }
    }

    fn child_patterns(&self) -> &[Pattern] {
        match &self.pattern {
            Pattern::Parallelization { children } => children,
            _ => unreachable!("ParallelizationState must wrap a Pattern::Parallelization"),
        }
    }

    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.started {
            panic!("Parallelization::start called twice");
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
            panic!("Parallelization::process_ended called before start");
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
            return Status::Succeeded;
        }
        if self.children.iter().any(|c| c.status() == Status::Running) {
            return Status::Running;
        }
        if self.children.iter().all(|c| c.status() == Status::Succeeded) {
            Status::Succeeded
        } else {
            Status::Failed
        }
    }
}
