#![allow(dead_code)] // each harness uses a different slice of the helpers
//! Shared test utilities for jobsift integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top
//! of each harness file. All helpers are deterministic; no clocks, no
//! randomness.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
