//! Runtime layer talking to the outside world
//!
//! This module handles:
//! - Running external processes with timeouts
//! - Classifying shadcn CLI output
//! - The typed shadcn CLI façade
//! - Fetching definitions from the remote registry

pub mod classify;
pub mod process;
pub mod registry;
pub mod shadcn;

#[cfg(test)]
mod shadcn_test;

pub use classify::classify;
pub use process::{run_command, CommandExecutor, ProcessRunner, RunOptions, TIMEOUT_MESSAGE};
pub use registry::{RegistryClient, RegistrySource};
pub use shadcn::{
    AddOptions, CommandOutcome, CompositeOutcome, DiffOptions, InitOptions, ProjectReport,
    ShadcnCli,
};
