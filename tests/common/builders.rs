//! Test builders — ergonomic constructors for [`RawRecord`] fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use jobsift_core::RawRecord;

/// Fluent builder for [`RawRecord`] test fixtures.
///
/// # Example
///
/// ```rust,ignore
/// let row = RawRecordBuilder::new("Data Scientist")
///     .salary("$53K-$91K (Glassdoor est.)")
///     .company("Tecolote Research", 3.8)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RawRecordBuilder {
    title: String,
    salary_text: String,
    company_text: String,
}

impl RawRecordBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            salary_text: String::new(),
            company_text: String::new(),
        }
    }

    /// Set the salary field verbatim.
    pub fn salary(mut self, text: impl Into<String>) -> Self {
        self.salary_text = text.into();
        self
    }

    /// Set a well-formed company field: `"<name>\n<rating>"`.
    pub fn company(mut self, name: &str, rating: f64) -> Self {
        self.company_text = format!("{name}\n{rating}");
        self
    }

    /// Set the company field verbatim (for malformed shapes).
    pub fn company_raw(mut self, text: impl Into<String>) -> Self {
        self.company_text = text.into();
        self
    }

    pub fn build(self) -> RawRecord {
        RawRecord {
            title: self.title,
            salary_text: self.salary_text,
            company_text: self.company_text,
        }
    }
}
