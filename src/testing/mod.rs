//! Test support shared across module tests

pub mod mocks;

pub use mocks::{failure, registry_item, success, MockExecutor, MockRegistry};
