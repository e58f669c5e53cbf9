//! Minimal driver binary: load one pattern file, run it, exit with a
//! matching status code. Not a general-purpose CLI — just enough to drive
//! the engine from a shell.

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use procflow::{Pattern, Status};

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: procflow-run <pattern.yaml>")?;

    let source = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let pattern: Pattern = serde_yaml::from_str(&source).with_context(|| format!("parsing {path}"))?;

    let status = procflow::run(&pattern)?;
    println!("{status:?}");

    Ok(match status {
        Status::Succeeded => ExitCode::SUCCESS,
        Status::Failed => ExitCode::FAILURE,
        Status::New | Status::Running => {
            unreachable!("run() only returns a terminal status")
        }
    })
}
