//! Fatal, OS-facing failure modes.
//!
//! Programming-invariant violations (`start` called twice, `process_ended`
//! delivered before `start`) are not modeled here — they are `panic!`s,
//! per the propagation policy: they can never legitimately happen through
//! this crate's public API, so there is nothing a caller could usefully
//! recover from.

use thiserror::Error;

/// Fatal conditions that abort a running workflow.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to spawn process for argv {argv:?}: {source}")]
    Spawn {
        argv: Vec<String>,
        #[source]
        source: std::io::Error,
    },

    #[error("wait_any_child failed: {0}")]
    Wait(#[source] std::io::Error),
}
