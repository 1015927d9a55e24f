//! Shared assertions over normalised records.

use jobsift_core::{JobCategory, NormalizedRecord, SALARY_SENTINEL};

/// Assert the structural invariants every normalised record must satisfy,
/// regardless of how messy its raw fields were:
/// - the category is a member of the closed set
/// - the mean is the arithmetic mean of the bounds
/// - a point estimate or sentinel pair is internally consistent
/// - the cleaned title carries no parenthetical and no edge whitespace
pub fn assert_record_invariants(rec: &NormalizedRecord) {
    assert!(
        JobCategory::ALL.contains(&rec.category),
        "category {:?} outside the closed set",
        rec.category
    );

    assert_eq!(
        rec.mean_salary_k,
        (rec.min_salary_k + rec.max_salary_k) as f64 / 2.0,
        "mean out of sync with bounds for {:?}",
        rec
    );

    // Sentinels only ever appear as a pair.
    assert_eq!(
        rec.min_salary_k == SALARY_SENTINEL,
        rec.max_salary_k == SALARY_SENTINEL,
        "half-sentinel salary pair in {:?}",
        rec
    );

    assert!(!rec.title.contains('('), "uncleaned title {:?}", rec.title);
    assert_eq!(rec.title, rec.title.trim(), "untrimmed title {:?}", rec.title);
}
