//! chartkit core
//!
//! Shared plumbing for the chartkit crates: hash collections, logging setup,
//! math re-exports and profiling scopes.

pub mod alloc;
pub mod logging;
pub mod math;
pub mod profiling;
