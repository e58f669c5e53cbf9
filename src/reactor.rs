//! The Process Reactor: the single blocking call in the whole engine.
//!
//! `wait_any_child` reaps whichever child process exits next, decodes its
//! raw wait status, and hands `(pid, status)` back to the driver. Every
//! other operation in this crate is synchronous and non-blocking; this is
//! the one suspension point (§5 of the design).

use crate::error::EngineError;

/// OS process id, as returned by `std::process::Child::id`.
pub type Pid = u32;

/// Decoded exit status of a reaped child.
///
/// Wraps the raw status word `waitpid` hands back; [`ExitStatus::success`]
/// applies the engine's exit-code rule (zero is success, anything else —
/// including signal termination — is failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus(i32);

impl ExitStatus {
    #[cfg(unix)]
    fn from_raw(raw: libc::c_int) -> Self {
        Self(raw)
    }

    #[cfg(unix)]
    pub fn success(self) -> bool {
        libc::WIFEXITED(self.0) && libc::WEXITSTATUS(self.0) == 0
    }

    #[cfg(not(unix))]
    pub fn success(self) -> bool {
        self.0 == 0
    }

    /// Build a status directly from an exit code, for tests that don't
    /// want to go through a real `waitpid`.
    #[cfg(test)]
    pub fn from_exit_code(code: i32) -> Self {
        #[cfg(unix)]
        {
            // WIFEXITED/WEXITSTATUS encoding: low byte 0, code in the next byte.
            Self((code & 0xff) << 8)
        }
        #[cfg(not(unix))]
        {
            Self(code)
        }
    }
}

/// Block until any child of the current process exits, returning its pid
/// and decoded exit status.
///
/// Retries internally on `EINTR`; any other OS error is fatal (see
/// [`EngineError::Wait`]).
#[cfg(unix)]
pub fn wait_any_child() -> Result<(Pid, ExitStatus), EngineError> {
    loop {
        let mut raw_status: libc::c_int = 0;
        let pid = unsafe { libc::waitpid(-1, &mut raw_status, 0) };
        if pid == -1 {
            let err = std::io::Error::last_os_error();
            if err.kind() == std::io::ErrorKind::Interrupted {
                continue;
            }
            return Err(EngineError::Wait(err));
        }
        tracing::debug!(pid, raw_status, "reaped child");
        return Ok((pid as Pid, ExitStatus::from_raw(raw_status)));
    }
}

#[cfg(not(unix))]
pub fn wait_any_child() -> Result<(Pid, ExitStatus), EngineError> {
    Err(EngineError::Wait(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "wait_any_child is only implemented for unix targets",
    )))
}
