//! Static listing corpora used across harnesses.
//!
//! Each corpus is a `&'static [..]` of representative field values taken
//! from the Glassdoor export shape the loader expects.

use super::builders::RawRecordBuilder;
use jobsift_core::RawRecord;

/// Salary strings carrying a two-amount range, with expected bounds.
pub const CORPUS_RANGES: &[(&str, (i32, i32))] = &[
    ("$53K-$91K (Glassdoor est.)", (53, 91)),
    ("$79K-$131K (Glassdoor est.)", (79, 131)),
    ("$110K-$163K (Employer est.)", (110, 163)),
    ("$31k-$56k", (31, 56)),
    ("Employer Provided Salary: $120K-$140K", (120, 140)),
];

/// Salary strings carrying a single amount (point estimates).
pub const CORPUS_POINTS: &[(&str, i32)] = &[
    ("$90K (Employer est.)", 90),
    ("$200K+", 200),
    ("about $75k per year", 75),
];

/// Salary strings with nothing extractable.
pub const CORPUS_UNPARSEABLE: &[&str] = &[
    "Unknown",
    "",
    "Competitive",
    "$53-$91",
    "53K-91K",
    "Per Hour: $21-$34",
];

/// Titles with the category label the two-pass rules must assign.
pub const CORPUS_TITLES: &[(&str, &str)] = &[
    ("Data Scientist", "Data Scientist"),
    ("Senior Data Scientist", "Senior Data Scientist"),
    ("Sr. Data Scientist", "Senior Data Scientist"),
    ("Junior Data Scientist", "Junior Data Scientist"),
    ("Entry Level Data Scientist", "Junior Data Scientist"),
    ("Principal Data Scientist", "Principal/Lead Data Scientist"),
    ("Business Intelligence Lead", "Principal/Lead Data Scientist"),
    ("Data Engineer", "Data Engineer"),
    ("Machine Learning Engineer", "Machine Learning Specialist"),
    ("Senior Machine Learning Engineer", "Machine Learning Specialist"),
    ("Analytics Manager", "Manager/Director"),
    ("Director of Data Science", "Manager/Director"),
    ("Business Analyst", "Analyst"),
    ("Random Title", "Other"),
];

/// A realistic mixed batch: well-formed rows, point estimates, missing
/// ratings, unparseable salaries, parenthetical titles.
pub fn corpus_rows() -> Vec<RawRecord> {
    vec![
        RawRecordBuilder::new("Data Scientist")
            .salary("$53K-$91K (Glassdoor est.)")
            .company("Tecolote Research", 3.8)
            .build(),
        RawRecordBuilder::new("Senior Data Scientist (Remote)")
            .salary("$110K-$163K (Employer est.)")
            .company("University of Maryland Medical System", 3.4)
            .build(),
        RawRecordBuilder::new("Data Scientist (Contract)")
            .salary("$90K (Employer est.)")
            .company("KnowBe4", 4.8)
            .build(),
        RawRecordBuilder::new("Machine Learning Engineer")
            .salary("$79K-$131K (Glassdoor est.)")
            .company("Affinity Solutions", 2.9)
            .build(),
        RawRecordBuilder::new("Data Engineer")
            .salary("$56K-$97K (Glassdoor est.)")
            .company_raw("Audentes Therapeutics")
            .build(),
        RawRecordBuilder::new("Analytics Manager")
            .salary("Unknown")
            .company("GNY Insurance", 3.5)
            .build(),
        RawRecordBuilder::new("Business Analyst (Entry Level) (Hybrid)")
            .salary("$31k-$56k")
            .company_raw("1904labs\nnot rated")
            .build(),
        RawRecordBuilder::new("Research Scientist")
            .salary("$120K-$140K")
            .company("CyrusOne", 4.1)
            .build(),
    ]
}

/// The `corpus_rows` batch serialised in the CSV shape the loader expects:
/// header contract columns plus an ignored extra column, and quoted
/// embedded newlines in the company field.
pub fn corpus_csv() -> String {
    let mut out = String::from("Job Title,Salary Estimate,Company Name,Location\n");
    for row in corpus_rows() {
        out.push_str(&format!(
            "\"{}\",\"{}\",\"{}\",Anywhere\n",
            row.title, row.salary_text, row.company_text
        ));
    }
    out
}
