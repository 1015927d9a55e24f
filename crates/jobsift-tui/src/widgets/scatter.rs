//! Scatter chart widget — company rating vs salary bounds.
//!
//! Draws two point series (min and max salary estimate) against the
//! company rating for whichever selection the category list has active.
//! Data arrives pre-filtered through [`Dataset::salary_points`], so no
//! sentinel can reach an axis.

use jobsift_core::SalaryPoint;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Chart, Dataset as ChartDataset, GraphType, Paragraph, Widget},
};

use crate::theme::Theme;

/// Rating axis bounds. Ratings are a 1–5 star scale; fixed bounds keep the
/// x axis comparable across selections.
const RATING_BOUNDS: [f64; 2] = [0.0, 5.0];

/// Display-only: the chart follows the category-list cursor, so it never
/// takes focus itself.
pub struct ScatterChart<'a> {
    points: &'a [SalaryPoint],
    title: String,
    theme: &'a Theme,
}

impl<'a> ScatterChart<'a> {
    pub fn new(points: &'a [SalaryPoint], selection_label: &str, theme: &'a Theme) -> Self {
        Self {
            points,
            title: format!("Salary vs Rating — {selection_label}"),
            theme,
        }
    }
}

impl Widget for ScatterChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(self.title.as_str())
            .border_style(self.theme.border_unfocused);

        if self.points.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Line::from(Span::styled(
                "no rated listings in this selection",
                Style::default().add_modifier(Modifier::DIM),
            )))
            .render(inner, buf);
            return;
        }

        let min_series: Vec<(f64, f64)> = self
            .points
            .iter()
            .map(|&(rating, min, _)| (rating, min as f64))
            .collect();
        let max_series: Vec<(f64, f64)> = self
            .points
            .iter()
            .map(|&(rating, _, max)| (rating, max as f64))
            .collect();

        let y_bounds = salary_bounds(self.points);

        let datasets = vec![
            ChartDataset::default()
                .name("Min $K")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(self.theme.series_min)
                .data(&min_series),
            ChartDataset::default()
                .name("Max $K")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(self.theme.series_max)
                .data(&max_series),
        ];

        Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title("Rating")
                    .style(self.theme.axis)
                    .bounds(RATING_BOUNDS)
                    .labels(["0", "2.5", "5"]),
            )
            .y_axis(
                Axis::default()
                    .title("Salary ($K)")
                    .style(self.theme.axis)
                    .bounds(y_bounds)
                    .labels([
                        format!("{:.0}", y_bounds[0]),
                        format!("{:.0}", (y_bounds[0] + y_bounds[1]) / 2.0),
                        format!("{:.0}", y_bounds[1]),
                    ]),
            )
            .render(area, buf);
    }
}

/// Y bounds covering every point, padded a little so markers on the
/// extremes stay clear of the frame.
fn salary_bounds(points: &[SalaryPoint]) -> [f64; 2] {
    let mut lo = i32::MAX;
    let mut hi = i32::MIN;
    for &(_, min, max) in points {
        lo = lo.min(min);
        hi = hi.max(max);
    }
    let pad = (((hi - lo) as f64) * 0.05).max(1.0);
    [(lo as f64 - pad).max(0.0), hi as f64 + pad]
}
