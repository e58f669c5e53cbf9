//! Hierarchical workflow engine: composes OS processes into sequence,
//! parallelization, alternative, and repetition patterns, and drives them
//! to completion off a single blocking `wait_any_child` loop.

pub mod alternative;
pub mod command;
pub mod driver;
pub mod error;
pub mod parallelization;
pub mod pattern;
pub mod reactor;
pub mod repetition;
pub mod sequence;
pub mod state;
pub mod status;

pub use driver::run;
pub use error::EngineError;
pub use pattern::Pattern;
pub use status::Status;
