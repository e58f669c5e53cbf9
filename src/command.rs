//! Leaf pattern: owns exactly one OS process.

use crate::error::EngineError;
use crate::pattern::Pattern;
use crate::reactor::{ExitStatus, Pid};
use crate::status::Status;

/// State of a `Command` leaf.
///
/// Never restarts: once `status` leaves `Running` it is terminal for the
/// lifetime of this node.
#[derive(Debug)]
pub struct CommandState {
    pattern: Pattern,
    pid: Option<Pid>,
    status: Status,
}

impl CommandState {
    pub(crate) fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            pid: None,
            status: Status::New,
        }
    }

    fn argv(&self) -> &[String] {
        match &self.pattern {
            Pattern::Command { command } => command,
            _ => unreachable!("CommandState must wrap a Pattern::Command"),
        }
    }

    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.status != Status::New {
            panic!("Command::start called twice");
        }

        let argv = self.argv().to_vec();
        let (program, args) = argv
            .split_first()
            .expect("Command pattern must carry a non-empty argv");

        tracing::debug!(?argv, "spawning command");
        let child = std::process::Command::new(program)
            .args(args)
            .spawn()
            .map_err(|source| EngineError::Spawn { argv, source })?;

        self.pid = Some(child.id());
        self.status = Status::Running;
        Ok(())
    }

    pub fn process_ended(
        &mut self,
        pid: Pid,
        exit_status: ExitStatus,
    ) -> Result<(), EngineError> {
        if self.status == Status::New {
            panic!("Command::process_ended called before start");
        }
        if self.pid != Some(pid) {
            return Ok(());
        }

        self.status = if exit_status.success() {
            Status::Succeeded
        } else {
            Status::Failed
        };
        tracing::debug!(pid, status = ?self.status, "command exited");
        self.pid = None;
        Ok(())
    }

    pub fn status(&self) -> Status {
        self.status
    }
}
