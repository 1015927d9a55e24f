//! jobsift-core — core library for jobsift.
//!
//! This crate holds the deterministic heart of the application: the record
//! normalizer, the title categorizer, and the dataset they feed. The TUI
//! and the CSV loader live in sibling crates and depend on this one.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► Normalizer ──► Dataset ──► UI
//! ```
//!
//! Everything here is synchronous and pure: the normalizer is a batch map
//! over in-memory rows, run once per load, and the dataset is immutable
//! afterwards.

pub mod category;
pub mod config;
pub mod normalizer;
pub mod store;
pub mod types;

pub use store::{Dataset, SalaryPoint, Selection};
pub use types::{JobCategory, NormalizedRecord, RawRecord, RATING_SENTINEL, SALARY_SENTINEL};
