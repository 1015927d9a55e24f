//! Category assignment — ordered keyword rules over cleaned job titles.
//!
//! Two passes. The first is a flat priority-ordered table (first match
//! wins) with one special case in front of it: a case-sensitive
//! `"Machine Learning"` test that pre-empts everything, so ML-titled roles
//! are never reclassified by a later seniority keyword. The second pass
//! re-examines titles that landed in the generic `Data Scientist` bucket
//! and upgrades them when a seniority keyword is present — the table tests
//! `"Data Scientist"` before `"Senior"`, so "Senior Data Scientist" would
//! otherwise stay generic.

use crate::types::JobCategory;

/// Pass-1 rule table. Keywords are matched as case-insensitive substrings
/// of the cleaned title, in this exact order; the order is contractual.
const RULES: &[(&[&str], JobCategory)] = &[
    (&["data scientist"], JobCategory::DataScientist),
    (&["senior", "sr"], JobCategory::SeniorDataScientist),
    (&["junior", "jr", "entry level"], JobCategory::JuniorDataScientist),
    (&["principal", "lead"], JobCategory::PrincipalLead),
    (&["data engineer"], JobCategory::DataEngineer),
    (&["manager", "director"], JobCategory::ManagerDirector),
    (&["analyst"], JobCategory::Analyst),
];

/// Pass-2 refinement table, applied only to the generic
/// [`JobCategory::DataScientist`] bucket.
const REFINEMENTS: &[(&[&str], JobCategory)] = &[
    (&["junior", "entry level"], JobCategory::JuniorDataScientist),
    (&["senior", "sr"], JobCategory::SeniorDataScientist),
    (&["principal", "lead"], JobCategory::PrincipalLead),
    (&["manager", "director"], JobCategory::ManagerDirector),
];

/// Assign a category to a cleaned title.
///
/// Always returns a member of the closed set; titles matching nothing get
/// [`JobCategory::Other`].
pub fn categorize(title: &str) -> JobCategory {
    // ML pre-empts all other keywords, case-sensitively.
    if title.contains("Machine Learning") {
        return JobCategory::MachineLearning;
    }

    let lower = title.to_lowercase();
    let assigned = first_match(RULES, &lower).unwrap_or(JobCategory::Other);

    if assigned == JobCategory::DataScientist {
        first_match(REFINEMENTS, &lower).unwrap_or(assigned)
    } else {
        assigned
    }
}

fn first_match(table: &[(&[&str], JobCategory)], lower: &str) -> Option<JobCategory> {
    table
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|&(_, category)| category)
}
