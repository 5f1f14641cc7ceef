//! Core types shared across the crate
//!
//! This module provides:
//! - The library error type and `Result` alias
//! - Server configuration and its TOML loader
//! - Data types for command results and registry items

pub mod config;
pub mod error;
pub mod types;

pub use config::{CliSettings, Config, ConfigBuilder, RegistrySettings};
pub use error::{Error, RegistryFetchError, Result};
pub use types::{
    ClassifiedResult, CssVars, EntityKind, Framework, IndexEntry, ProjectInfo, ProjectStatus,
    RawCommandResult, RegistryFile, RegistryItem, Style, TailwindSection,
};
