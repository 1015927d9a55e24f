//! Dataset — the immutable collection of normalised records.
//!
//! The dataset is the single source of truth; the UI reads from it through
//! the query views here, never from the raw rows directly. Sentinel-valued
//! fields never leave [`Dataset::salary_points`], so chart code cannot
//! accidentally aggregate a `-1`.

use crate::normalizer::normalize_all;
use crate::types::{JobCategory, NormalizedRecord, RawRecord};

/// Which records a chart view should draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every record.
    #[default]
    All,
    /// Only records in one category.
    Category(JobCategory),
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::All => f.write_str("All"),
            Selection::Category(c) => c.fmt(f),
        }
    }
}

/// One scatter/histogram point: `(rating, min_salary_k, max_salary_k)`.
pub type SalaryPoint = (f64, i32, i32);

/// The normalised record collection, built once per load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<NormalizedRecord>,
}

impl Dataset {
    /// Build from raw rows via the normalizer. One output record per
    /// input row, same order.
    pub fn from_raw(rows: &[RawRecord]) -> Self {
        Self {
            records: normalize_all(rows),
        }
    }

    /// Wrap an already-normalised collection (used by tests and builders).
    pub fn new(records: Vec<NormalizedRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Per-category record counts, descending; ties broken by label so the
    /// ordering is deterministic. Categories with no records are omitted.
    pub fn category_counts(&self) -> Vec<(JobCategory, usize)> {
        let mut counts: Vec<(JobCategory, usize)> = JobCategory::ALL
            .iter()
            .map(|&cat| (cat, self.by_category(cat).count()))
            .filter(|&(_, n)| n > 0)
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.label().cmp(b.0.label())));
        counts
    }

    /// Records in one category, original order.
    pub fn by_category(&self, category: JobCategory) -> impl Iterator<Item = &NormalizedRecord> {
        self.records.iter().filter(move |r| r.category == category)
    }

    /// Chart points for a selection, with sentinel rows excluded.
    ///
    /// A point requires both a real rating and a real salary pair; rows
    /// missing either are unknowns, not zeros, and are dropped here so
    /// they can never skew an axis or a bucket.
    pub fn salary_points(&self, selection: Selection) -> Vec<SalaryPoint> {
        self.selected(selection)
            .filter(|r| r.has_salary() && r.has_rating())
            .map(|r| (r.rating, r.min_salary_k, r.max_salary_k))
            .collect()
    }

    /// Salary pairs for a selection, rating not required. Used by the
    /// histogram, which has no rating axis.
    pub fn salary_pairs(&self, selection: Selection) -> Vec<(i32, i32)> {
        self.selected(selection)
            .filter(|r| r.has_salary())
            .map(|r| (r.min_salary_k, r.max_salary_k))
            .collect()
    }

    fn selected(&self, selection: Selection) -> Box<dyn Iterator<Item = &NormalizedRecord> + '_> {
        match selection {
            Selection::All => Box::new(self.records.iter()),
            Selection::Category(cat) => Box::new(self.by_category(cat)),
        }
    }
}
