//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in `ports`
//! and the parsers for the text those external systems produce.

pub mod parsers;
pub mod runner;

// Re-export main types for convenience
pub use runner::SystemCommandRunner;
