//! Sequence: run children one after another, stopping at the first that
//! doesn't succeed.

use crate::error::EngineError;
use crate::pattern::Pattern;
use crate::reactor::{ExitStatus, Pid};
use crate::state::State;
use crate::status::Status;

#[derive(Debug)]
pub struct SequenceState {
    pattern: Pattern,
    started: bool,
    next_child: usize,
    active: Option<Box<State>>,
}

impl SequenceState {
    pub(crate) fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            started: false,
            next_child: 0,
            active: None,
        }
    }

    fn children(&self) -> &[Pattern] {
        match &self.pattern {
            Pattern::Sequence { children } => children,
            _ => unreachable!("SequenceState must wrap a Pattern::Sequence"),
        }
    }

    /// Instantiate and start children in order until one doesn't succeed
    /// immediately, or the list is exhausted.
    fn advance(&mut self) -> Result<(), EngineError> {
        let children = self.children().to_vec();
        loop {
            if self.next_child >= children.len() {
                self.active = None;
                return Ok(());
            }

            let mut child = children[self.next_child].instantiate();
            self.next_child += 1;
            child.start()?;
            let succeeded = child.status() == Status::Succeeded;
            self.active = Some(Box::new(child));
            if !succeeded {
                return Ok(());
            }
        }
    }

    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.started {
            panic!("Sequence::start called twice");
        }
        self.started = true;
        self.advance()
    }

    pub fn process_ended(
        &mut self,
        pid: Pid,
        exit_status: ExitStatus,
    ) -> Result<(), EngineError> {
        if !self.started {
            panic!("Sequence::process_ended called before start");
        }
        let Some(active) = self.active.as_mut() else {
            return Ok(());
        };
        active.process_ended(pid, exit_status)?;
        if active.status() == Status::Succeeded {
            self.advance()?;
        }
        Ok(())
    }

    pub fn status(&self) -> Status {
        match &self.active {
            Some(active) => active.status(),
            None if self.started => Status::Succeeded,
            None => Status::New,
        }
    }
}
