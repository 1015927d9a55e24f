//! jobsift — terminal dashboard for exploring job-listing CSVs.
//!
//! This crate re-exports the pipeline layers so integration tests and
//! downstream tooling can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► Normalizer ──► Dataset ──► UI
//! ```
//!
//! The loader ([`jobsift_data`]) reads raw rows from a CSV. The normalizer
//! ([`jobsift_core::normalizer`]) turns each row's free-text fields into
//! structured columns — salary bounds in thousands, company name and
//! rating, cleaned title, assigned category — without ever failing a row.
//! The [`Dataset`] is the immutable, queryable collection the UI renders.

pub use jobsift_core::{
    category, config, normalizer, store, types, Dataset, JobCategory, NormalizedRecord, RawRecord,
    SalaryPoint, Selection, RATING_SENTINEL, SALARY_SENTINEL,
};
pub use jobsift_data::{load_csv, LoadError, REQUIRED_COLUMNS};
