//! Normalizer — turns raw CSV text fields into structured
//! [`NormalizedRecord`](crate::NormalizedRecord) values.
//!
//! Extraction is best-effort and never fails a row: a field the extractors
//! cannot parse gets its sentinel and the record survives in full. The
//! whole layer is a pure batch map — no state between rows, so running it
//! twice over the same input yields identical output.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::category::categorize;
use crate::types::{NormalizedRecord, RawRecord, RATING_SENTINEL, SALARY_SENTINEL};

/// Matches a currency amount in thousands: `$53K`, `$91k`.
static SALARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+)[Kk]").expect("salary pattern must compile"));

/// A data-quality condition detected during normalisation.
///
/// Distinct from "field absent": the field was present and structurally
/// valid but a sub-value could not be parsed. Surfaced as a warning log;
/// the stored value falls back to the matching sentinel so downstream
/// sentinel filtering stays single-path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldIssue {
    /// The company field split into name + rating, but the rating part is
    /// not a number.
    #[error("company rating is not numeric: {0:?}")]
    UnparsableRating(String),
}

/// Extract `(min, max)` salary bounds in thousands from free-form text.
///
/// Scans for every `$<digits>K` occurrence in textual order:
/// - no match: `(-1, -1)`
/// - one match: that amount as both bounds (a point estimate)
/// - two or more matches: the first two, in textual order — the source
///   data convention lists the lower figure first, so no re-sorting
///
/// Qualifier text around the amounts ("(Employer est.)" and the like)
/// never affects the match count. Digit runs too long for `i32` are
/// skipped rather than panicking.
pub fn extract_salary(salary_text: &str) -> (i32, i32) {
    let amounts: Vec<i32> = SALARY_RE
        .captures_iter(salary_text)
        .filter_map(|cap| cap[1].parse().ok())
        .take(2)
        .collect();

    match amounts[..] {
        [] => (SALARY_SENTINEL, SALARY_SENTINEL),
        [single] => (single, single),
        [first, second, ..] => (first, second),
    }
}

/// Split a company field into `(name, rating)`.
///
/// The field convention is `"<name>\n<rating>"`. Exactly two newline parts
/// yield the trimmed name and the parsed rating; any other shape returns
/// the untouched input as the name with the rating sentinel.
pub fn extract_company(company_text: &str) -> (String, f64) {
    let parts: Vec<&str> = company_text.split('\n').collect();
    if parts.len() != 2 {
        return (company_text.to_string(), RATING_SENTINEL);
    }

    let name = parts[0].trim().to_string();
    let rating = match parse_rating(parts[1]) {
        Ok(rating) => rating,
        Err(issue) => {
            tracing::warn!(%issue, company = %name, "rating fell back to sentinel");
            RATING_SENTINEL
        }
    };
    (name, rating)
}

fn parse_rating(part: &str) -> Result<f64, FieldIssue> {
    part.trim()
        .parse()
        .map_err(|_| FieldIssue::UnparsableRating(part.to_string()))
}

/// Drop a trailing parenthetical from a title and trim the remainder.
///
/// Everything from the first `(` onward is removed; a title without one is
/// only trimmed.
pub fn clean_title(title_text: &str) -> String {
    let cut = match title_text.find('(') {
        Some(idx) => &title_text[..idx],
        None => title_text,
    };
    cut.trim().to_string()
}

/// Normalise a single record. Pure: the input is untouched and the output
/// depends on nothing but the input.
pub fn normalize(raw: &RawRecord) -> NormalizedRecord {
    let (min_salary_k, max_salary_k) = extract_salary(&raw.salary_text);
    let (company, rating) = extract_company(&raw.company_text);
    let title = clean_title(&raw.title);
    let category = categorize(&title);

    NormalizedRecord {
        category,
        title,
        company,
        rating,
        min_salary_k,
        max_salary_k,
        mean_salary_k: (min_salary_k + max_salary_k) as f64 / 2.0,
    }
}

/// Normalise a batch, preserving count and order.
pub fn normalize_all(rows: &[RawRecord]) -> Vec<NormalizedRecord> {
    rows.iter().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JobCategory;
    use pretty_assertions::assert_eq;

    fn raw(title: &str, salary: &str, company: &str) -> RawRecord {
        RawRecord {
            title: title.to_string(),
            salary_text: salary.to_string(),
            company_text: company.to_string(),
        }
    }

    #[test]
    fn salary_range() {
        assert_eq!(extract_salary("$53K-$91K (Glassdoor est.)"), (53, 91));
    }

    #[test]
    fn salary_point_estimate() {
        assert_eq!(extract_salary("$90K (Employer est.)"), (90, 90));
    }

    #[test]
    fn salary_unparseable() {
        assert_eq!(extract_salary("Unknown"), (-1, -1));
        assert_eq!(extract_salary(""), (-1, -1));
    }

    #[test]
    fn salary_lowercase_marker() {
        assert_eq!(extract_salary("$53k-$91k"), (53, 91));
    }

    #[test]
    fn salary_qualifiers_ignored() {
        // Parenthetical noise must not change the match count.
        assert_eq!(extract_salary("$53K-$91K (Glassdoor est. 2023)"), (53, 91));
    }

    #[test]
    fn salary_more_than_two_uses_first_two() {
        assert_eq!(extract_salary("$53K-$91K (was $120K)"), (53, 91));
    }

    #[test]
    fn salary_no_resorting() {
        // Textual order wins even if the figures are reversed.
        assert_eq!(extract_salary("$91K-$53K"), (91, 53));
    }

    #[test]
    fn salary_overflowing_amount_skipped() {
        assert_eq!(extract_salary("$99999999999K-$91K"), (91, 91));
    }

    #[test]
    fn salary_bare_number_without_marker_ignored() {
        assert_eq!(extract_salary("$53-$91"), (-1, -1));
    }

    #[test]
    fn company_two_parts() {
        assert_eq!(
            extract_company("Tecolote Research\n3.8"),
            ("Tecolote Research".to_string(), 3.8)
        );
    }

    #[test]
    fn company_no_newline() {
        assert_eq!(
            extract_company("Unknown Corp"),
            ("Unknown Corp".to_string(), RATING_SENTINEL)
        );
    }

    #[test]
    fn company_three_parts_left_untouched() {
        assert_eq!(
            extract_company("A\nB\nC"),
            ("A\nB\nC".to_string(), RATING_SENTINEL)
        );
    }

    #[test]
    fn company_bad_rating_falls_back() {
        let (name, rating) = extract_company("Acme\nfour stars");
        assert_eq!(name, "Acme");
        assert_eq!(rating, RATING_SENTINEL);
    }

    #[test]
    fn title_parenthetical_dropped() {
        assert_eq!(clean_title("Data Scientist (Remote)"), "Data Scientist");
    }

    #[test]
    fn title_without_parenthetical_only_trimmed() {
        assert_eq!(clean_title("  Data Engineer  "), "Data Engineer");
    }

    #[test]
    fn title_leading_parenthesis_yields_empty() {
        assert_eq!(clean_title("(Contract) Analyst"), "");
    }

    #[test]
    fn normalize_full_record() {
        let rec = normalize(&raw(
            "Senior Data Scientist (Remote)",
            "$53K-$91K (Glassdoor est.)",
            "Tecolote Research\n3.8",
        ));
        assert_eq!(rec.title, "Senior Data Scientist");
        assert_eq!(rec.category, JobCategory::SeniorDataScientist);
        assert_eq!(rec.company, "Tecolote Research");
        assert_eq!(rec.rating, 3.8);
        assert_eq!((rec.min_salary_k, rec.max_salary_k), (53, 91));
        assert_eq!(rec.mean_salary_k, 72.0);
    }

    #[test]
    fn normalize_unparseable_row_survives() {
        let rec = normalize(&raw("???", "negotiable", "startup"));
        assert_eq!((rec.min_salary_k, rec.max_salary_k), (-1, -1));
        assert_eq!(rec.mean_salary_k, -1.0);
        assert_eq!(rec.rating, RATING_SENTINEL);
        assert_eq!(rec.company, "startup");
        assert_eq!(rec.category, JobCategory::Other);
    }

    #[test]
    fn mean_of_point_estimate_is_the_point() {
        let rec = normalize(&raw("Analyst", "$90K", "X\n4.0"));
        assert_eq!(rec.mean_salary_k, 90.0);
    }

    #[test]
    fn normalize_all_preserves_count_and_order() {
        let rows = vec![
            raw("Data Scientist", "$53K-$91K", "A\n3.8"),
            raw("Analyst", "$90K", "B\n4.1"),
            raw("???", "", ""),
        ];
        let out = normalize_all(&rows);
        assert_eq!(out.len(), rows.len());
        assert_eq!(out[0].company, "A");
        assert_eq!(out[1].company, "B");
    }
}
