//! Static catalog of known components and blocks
//!
//! This module handles:
//! - Name validation before any network or process I/O
//! - Category listing and free-text search
//! - Fallback metadata when the registry cannot be reached

pub mod blocks;
pub mod components;

pub use blocks::{BlockCategory, BlockMeta};
pub use components::{ComponentCategory, ComponentMeta};

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
