//! Header widget — the 1-line strip at the top of the screen.
//!
//! Shows the dataset summary on the left; keybinding hints (`q:quit
//! ?:help  ::cmd`) are right-aligned in the same row.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct Header<'a> {
    listings: usize,
    categories: usize,
    _theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(listings: usize, categories: usize, theme: &'a Theme) -> Self {
        Self {
            listings,
            categories,
            _theme: theme,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let summary = Line::from(vec![
            Span::styled(" jobsift ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("— {} listings in {} categories", self.listings, self.categories),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);
        buf.set_line(area.x, area.y, &summary, area.width);

        // Keybinding hints at the right edge
        let hint = " q:quit  ?:help  ::cmd ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
