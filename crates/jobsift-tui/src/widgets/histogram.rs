//! Histogram widget — distribution of min/max salary bounds in fixed-width
//! buckets.
//!
//! Carries its own selection, independent of the category list (the
//! original dashboard had a second dropdown for exactly this), cycled with
//! `←`/`→` while the pane is focused. Bucket width comes from the config
//! and can be changed at runtime with `:bucket <k>`.

use jobsift_core::{Dataset, Selection};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Paragraph, Widget},
};

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct HistogramState {
    /// Cycle order: `All`, then every populated category in count order.
    pub options: Vec<Selection>,
    /// Index into `options`.
    pub index: usize,
    /// Bucket width in thousands.
    pub bucket_k: u16,
}

impl HistogramState {
    pub fn from_dataset(dataset: &Dataset, bucket_k: u16) -> Self {
        let mut options = vec![Selection::All];
        options.extend(
            dataset
                .category_counts()
                .into_iter()
                .map(|(cat, _)| Selection::Category(cat)),
        );
        Self {
            options,
            index: 0,
            bucket_k: bucket_k.max(1),
        }
    }

    /// The active selection. Falls back to `All` so callers never have to
    /// special-case an empty option list.
    pub fn selection(&self) -> Selection {
        self.options
            .get(self.index)
            .copied()
            .unwrap_or(Selection::All)
    }

    /// Reset the filter back to `All` (the `:all` command).
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Handle a navigation event: `←`/`→` cycle the selection, wrapping at
    /// both ends.
    pub fn handle(&mut self, event: &AppEvent) {
        let n = self.options.len();
        if n == 0 {
            return;
        }
        match event {
            AppEvent::Nav(Direction::Left) => {
                self.index = (self.index + n - 1) % n;
                tracing::debug!(selection = %self.selection(), "histogram: cycle left");
            }
            AppEvent::Nav(Direction::Right) => {
                self.index = (self.index + 1) % n;
                tracing::debug!(selection = %self.selection(), "histogram: cycle right");
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Bucketing
// ---------------------------------------------------------------------------

/// Per-bucket counts for the two series. `lower_k` is the inclusive lower
/// bound of the bucket in thousands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketRow {
    pub lower_k: i32,
    pub min_count: u64,
    pub max_count: u64,
}

/// Bucket the salary pairs of a selection. Buckets span
/// `[lower, lower + bucket_k)`; empty buckets between the extremes are
/// kept so the x axis stays linear.
pub fn bucketize(pairs: &[(i32, i32)], bucket_k: u16) -> Vec<BucketRow> {
    if pairs.is_empty() {
        return Vec::new();
    }
    let width = bucket_k.max(1) as i32;
    let bucket_of = |v: i32| v.div_euclid(width);

    let first = pairs
        .iter()
        .map(|&(min, max)| bucket_of(min).min(bucket_of(max)))
        .min()
        .unwrap_or(0);
    let last = pairs
        .iter()
        .map(|&(min, max)| bucket_of(min).max(bucket_of(max)))
        .max()
        .unwrap_or(0);

    let mut rows: Vec<BucketRow> = (first..=last)
        .map(|b| BucketRow {
            lower_k: b * width,
            min_count: 0,
            max_count: 0,
        })
        .collect();
    for &(min, max) in pairs {
        rows[(bucket_of(min) - first) as usize].min_count += 1;
        rows[(bucket_of(max) - first) as usize].max_count += 1;
    }
    rows
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Histogram<'a> {
    state: &'a HistogramState,
    pairs: Vec<(i32, i32)>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Histogram<'a> {
    pub fn new(
        state: &'a HistogramState,
        dataset: &Dataset,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            pairs: dataset.salary_pairs(state.selection()),
            focused,
            theme,
        }
    }

    fn title(&self) -> String {
        format!("Salary Histogram — {} (←/→ to filter)", self.state.selection())
    }
}

impl Widget for Histogram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let title = self.title();
        let block = Block::bordered()
            .title(title.as_str())
            .border_style(border_style);

        let rows = bucketize(&self.pairs, self.state.bucket_k);
        if rows.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Line::from(Span::styled(
                "no salary data in this selection",
                Style::default().add_modifier(Modifier::DIM),
            )))
            .render(inner, buf);
            return;
        }

        let groups: Vec<BarGroup> = rows
            .iter()
            .map(|row| {
                BarGroup::default()
                    .label(Line::from(format!("{}", row.lower_k)))
                    .bars(&[
                        Bar::default().value(row.min_count).style(self.theme.series_min),
                        Bar::default().value(row.max_count).style(self.theme.series_max),
                    ])
            })
            .collect();

        let mut chart = BarChart::default().block(block).bar_width(3).bar_gap(0).group_gap(2);
        for group in groups {
            chart = chart.data(group);
        }
        chart.render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use jobsift_core::{JobCategory, NormalizedRecord};

    fn dataset() -> Dataset {
        let rec = |cat: JobCategory, min: i32, max: i32| NormalizedRecord {
            title: cat.label().to_string(),
            category: cat,
            company: "Acme".to_string(),
            rating: 4.0,
            min_salary_k: min,
            max_salary_k: max,
            mean_salary_k: (min + max) as f64 / 2.0,
        };
        Dataset::new(vec![
            rec(JobCategory::DataScientist, 53, 91),
            rec(JobCategory::DataScientist, 60, 100),
            rec(JobCategory::Analyst, 40, 70),
        ])
    }

    #[test]
    fn cycle_wraps_both_ways() {
        let mut state = HistogramState::from_dataset(&dataset(), 10);
        assert_eq!(state.selection(), Selection::All);
        state.handle(&AppEvent::Nav(Direction::Left));
        // Wrapped to the last category.
        assert_eq!(
            state.selection(),
            Selection::Category(JobCategory::Analyst)
        );
        state.handle(&AppEvent::Nav(Direction::Right));
        assert_eq!(state.selection(), Selection::All);
        state.handle(&AppEvent::Nav(Direction::Right));
        assert_eq!(
            state.selection(),
            Selection::Category(JobCategory::DataScientist)
        );
    }

    #[test]
    fn reset_returns_to_all() {
        let mut state = HistogramState::from_dataset(&dataset(), 10);
        state.handle(&AppEvent::Nav(Direction::Right));
        state.reset();
        assert_eq!(state.selection(), Selection::All);
    }

    #[test]
    fn buckets_span_extremes_without_gaps() {
        let rows = bucketize(&[(53, 91), (60, 100), (40, 70)], 10);
        assert_eq!(rows.first().map(|r| r.lower_k), Some(40));
        assert_eq!(rows.last().map(|r| r.lower_k), Some(100));
        // Linear axis: one row per 10K step.
        assert_eq!(rows.len(), 7);
    }

    #[test]
    fn bucket_counts_split_min_and_max() {
        let rows = bucketize(&[(53, 91), (55, 58)], 10);
        let row_50 = rows.iter().find(|r| r.lower_k == 50).expect("bucket 50");
        assert_eq!(row_50.min_count, 2);
        assert_eq!(row_50.max_count, 1); // 58 lands here, 91 does not
    }

    #[test]
    fn empty_pairs_no_rows() {
        assert!(bucketize(&[], 10).is_empty());
    }

    #[test]
    fn zero_bucket_width_clamped() {
        // Degenerate config value must not divide by zero.
        let rows = bucketize(&[(5, 7)], 0);
        assert_eq!(rows.len(), 3);
    }
}
