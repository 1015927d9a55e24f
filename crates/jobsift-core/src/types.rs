//! Core types for jobsift.
//!
//! This module defines the data structures shared across all pipeline
//! layers: the [`RawRecord`] as read from the CSV, the [`NormalizedRecord`]
//! the normalizer produces, and the closed [`JobCategory`] set.

/// Sentinel for a salary bound that could not be extracted.
///
/// Distinct from a genuine zero: downstream code must filter sentinel rows
/// before any numeric aggregation.
pub const SALARY_SENTINEL: i32 = -1;

/// Sentinel for a company rating that could not be extracted.
pub const RATING_SENTINEL: f64 = -1.0;

/// One row of the source CSV, untouched.
///
/// All three fields are free-form text; the normalizer carries the full
/// burden of turning them into something structured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Job title, possibly with a trailing parenthetical, e.g.
    /// `"Data Scientist (Remote)"`.
    pub title: String,
    /// Salary estimate text, e.g. `"$53K-$91K (Glassdoor est.)"`.
    pub salary_text: String,
    /// Company name and rating, newline-joined, e.g.
    /// `"Tecolote Research\n3.8"`.
    pub company_text: String,
}

/// A fully normalised listing, one per [`RawRecord`], same order.
///
/// Every field is a pure function of the corresponding raw field. Salary
/// bounds use [`SALARY_SENTINEL`] and the rating uses [`RATING_SENTINEL`]
/// when extraction fails; the row itself always survives.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    /// Cleaned title: parenthetical suffix dropped, whitespace trimmed.
    pub title: String,
    /// Category assigned from the cleaned title.
    pub category: JobCategory,
    /// Company name (text before the newline, or the whole field).
    pub company: String,
    /// Company rating, or [`RATING_SENTINEL`].
    pub rating: f64,
    /// Lower salary bound in thousands, or [`SALARY_SENTINEL`].
    pub min_salary_k: i32,
    /// Upper salary bound in thousands, or [`SALARY_SENTINEL`].
    pub max_salary_k: i32,
    /// Arithmetic mean of the two bounds. Equals `-1.0` only when both
    /// bounds are the sentinel.
    pub mean_salary_k: f64,
}

impl NormalizedRecord {
    /// True when both salary bounds carry real values.
    pub fn has_salary(&self) -> bool {
        self.min_salary_k != SALARY_SENTINEL && self.max_salary_k != SALARY_SENTINEL
    }

    /// True when the company rating carries a real value.
    pub fn has_rating(&self) -> bool {
        self.rating != RATING_SENTINEL
    }
}

/// Coarse job-title grouping, assigned by the keyword rules in
/// [`category`](crate::category).
///
/// The set is closed: every record gets exactly one variant, with
/// [`JobCategory::Other`] as the default bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JobCategory {
    DataScientist,
    SeniorDataScientist,
    JuniorDataScientist,
    PrincipalLead,
    DataEngineer,
    MachineLearning,
    ManagerDirector,
    Analyst,
    Other,
}

impl JobCategory {
    /// Every variant, in declaration order. Used by the histogram filter
    /// cycle and by tests asserting set membership.
    pub const ALL: [JobCategory; 9] = [
        JobCategory::DataScientist,
        JobCategory::SeniorDataScientist,
        JobCategory::JuniorDataScientist,
        JobCategory::PrincipalLead,
        JobCategory::DataEngineer,
        JobCategory::MachineLearning,
        JobCategory::ManagerDirector,
        JobCategory::Analyst,
        JobCategory::Other,
    ];

    /// The display label, as a static string.
    pub fn label(self) -> &'static str {
        match self {
            JobCategory::DataScientist => "Data Scientist",
            JobCategory::SeniorDataScientist => "Senior Data Scientist",
            JobCategory::JuniorDataScientist => "Junior Data Scientist",
            JobCategory::PrincipalLead => "Principal/Lead Data Scientist",
            JobCategory::DataEngineer => "Data Engineer",
            JobCategory::MachineLearning => "Machine Learning Specialist",
            JobCategory::ManagerDirector => "Manager/Director",
            JobCategory::Analyst => "Analyst",
            JobCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for JobCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
