//! The driver loop: instantiate a pattern, start it, and pump OS exit
//! events into it until it reaches a terminal status.

use crate::error::EngineError;
use crate::pattern::Pattern;
use crate::reactor::wait_any_child;
use crate::status::Status;

/// Run a workflow pattern to completion.
///
/// This is the only function in the crate that blocks: it calls
/// [`wait_any_child`] in a loop until the root node is no longer `Running`.
pub fn run(pattern: &Pattern) -> Result<Status, EngineError> {
    let mut state = pattern.instantiate();
    tracing::info!("starting workflow");
    state.start()?;

    while state.status() == Status::Running {
        let (pid, exit_status) = wait_any_child()?;
        state.process_ended(pid, exit_status)?;
    }

    let status = state.status();
    tracing::info!(?status, "workflow finished");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_of_true_succeeds() {
        let pattern = Pattern::sequence([Pattern::command(["true"]), Pattern::command(["true"])]);
        assert_eq!(run(&pattern).unwrap(), Status::Succeeded);
    }

    #[test]
    fn sequence_stops_at_first_failure() {
        let pattern = Pattern::sequence([
            Pattern::command(["false"]),
            Pattern::command(["sh", "-c", "exit 7"]),
        ]);
        assert_eq!(run(&pattern).unwrap(), Status::Failed);
    }

    #[test]
    fn empty_sequence_succeeds_without_waiting() {
        assert_eq!(run(&Pattern::sequence([])).unwrap(), Status::Succeeded);
    }

    #[test]
    fn empty_alternative_fails_without_waiting() {
        assert_eq!(run(&Pattern::alternative([])).unwrap(), Status::Failed);
    }

    #[test]
    fn parallelization_waits_for_every_child() {
        let pattern = Pattern::parallelization([
            Pattern::command(["true"]),
            Pattern::command(["sh", "-c", "exit 0"]),
        ]);
        assert_eq!(run(&pattern).unwrap(), Status::Succeeded);
    }

    #[test]
    fn parallelization_fails_if_any_child_fails() {
        let pattern = Pattern::parallelization([Pattern::command(["true"]), Pattern::command(["false"])]);
        assert_eq!(run(&pattern).unwrap(), Status::Failed);
    }

    #[test]
    fn alternative_succeeds_when_exactly_one_child_succeeds() {
        let pattern = Pattern::alternative([Pattern::command(["false"]), Pattern::command(["true"])]);
        assert_eq!(run(&pattern).unwrap(), Status::Succeeded);
    }

    #[test]
    fn repetition_succeeds_when_exit_wins_the_first_round() {
        // The restart path itself (child succeeds, exit fails, so the pair
        // restarts in place) is covered by the fake-driven unit tests in
        // `repetition.rs`; here we only need real processes to exercise a
        // single round end-to-end.
        let pattern = Pattern::repetition(Pattern::command(["false"]), Pattern::command(["true"]));
        assert_eq!(run(&pattern).unwrap(), Status::Succeeded);
    }
}
