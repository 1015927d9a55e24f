//! Distribution widget — category share of the whole dataset.
//!
//! One row per category: label, a proportional bar in the category's
//! colour, and the count (with percentage when enabled). This is the
//! terminal rendition of the original pie chart; display-only, never
//! focused.

use jobsift_core::JobCategory;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::theme::Theme;

/// Longest label is "Principal/Lead Data Scientist" (29 chars); keep the
/// label column just wide enough for it.
const LABEL_WIDTH: usize = 30;

pub struct DistributionChart<'a> {
    counts: &'a [(JobCategory, usize)],
    total: usize,
    show_percentages: bool,
    theme: &'a Theme,
}

impl<'a> DistributionChart<'a> {
    pub fn new(
        counts: &'a [(JobCategory, usize)],
        total: usize,
        show_percentages: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            counts,
            total,
            show_percentages,
            theme,
        }
    }
}

impl Widget for DistributionChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Job Distribution")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.total == 0 {
            Paragraph::new(Line::from(Span::styled(
                "empty dataset",
                Style::default().add_modifier(Modifier::DIM),
            )))
            .render(inner, buf);
            return;
        }

        // Space left for the bar after label and the count column.
        let count_width = 12; // " 123 (45.6%)"
        let bar_width = (inner.width as usize)
            .saturating_sub(LABEL_WIDTH + count_width)
            .max(4);
        let max_count = self
            .counts
            .iter()
            .map(|&(_, n)| n)
            .max()
            .unwrap_or(1)
            .max(1);

        let lines: Vec<Line> = self
            .counts
            .iter()
            .map(|&(cat, count)| {
                let filled = (count * bar_width).div_ceil(max_count).min(bar_width);
                let pct = count as f64 * 100.0 / self.total as f64;
                let tail = if self.show_percentages {
                    format!(" {count} ({pct:.1}%)")
                } else {
                    format!(" {count}")
                };
                Line::from(vec![
                    Span::raw(format!("{:<LABEL_WIDTH$}", cat.label())),
                    Span::styled("█".repeat(filled), self.theme.category_style(cat.label())),
                    Span::styled(tail, Style::default().add_modifier(Modifier::DIM)),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
