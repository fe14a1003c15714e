//! Shared helpers for integration tests.

pub mod chunks;
pub mod synthetic;
