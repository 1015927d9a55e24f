//! Category list widget — the selector pane on the left.
//!
//! One row per category present in the dataset, ordered by count
//! (descending), with an `All` row pinned on top. The cursor row is the
//! selection that drives the scatter chart.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the cursor.

use crate::event::{AppEvent, Direction};
use jobsift_core::{Dataset, Selection};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// One selectable row: a selection and the number of records behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub selection: Selection,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct CategoryListState {
    pub entries: Vec<CategoryEntry>,
    /// Index of the cursor row.
    pub cursor: usize,
}

impl CategoryListState {
    /// Build the row list from a dataset: `All` first, then every
    /// populated category in count order.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut entries = vec![CategoryEntry {
            selection: Selection::All,
            count: dataset.len(),
        }];
        entries.extend(dataset.category_counts().into_iter().map(|(cat, count)| {
            CategoryEntry {
                selection: Selection::Category(cat),
                count,
            }
        }));
        Self { entries, cursor: 0 }
    }

    /// The selection under the cursor. Falls back to `All` for an empty
    /// list so callers never have to special-case it.
    pub fn selected(&self) -> Selection {
        self.entries
            .get(self.cursor)
            .map(|e| e.selection)
            .unwrap_or(Selection::All)
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "categories: cursor up");
            }
            AppEvent::Nav(Direction::Down) => {
                let max = self.entries.len().saturating_sub(1);
                if self.cursor < max {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "categories: cursor down");
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct CategoryList<'a> {
    state: &'a CategoryListState,
    focused: bool,
    theme: &'a crate::theme::Theme,
}

impl<'a> CategoryList<'a> {
    pub fn new(
        state: &'a CategoryListState,
        focused: bool,
        theme: &'a crate::theme::Theme,
    ) -> Self {
        Self {
            state,
            focused,
            theme,
        }
    }
}

impl Widget for CategoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title("Categories")
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .map(|entry| {
                let label = entry.selection.to_string();
                let count = entry.count.to_string();
                // Label left, count right-aligned within the pane.
                let pad = width
                    .saturating_sub(label.chars().count() + count.len() + 1)
                    .max(1);
                let label_style = match entry.selection {
                    Selection::All => Style::default().add_modifier(Modifier::BOLD),
                    Selection::Category(cat) => self.theme.category_style(cat.label()),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(label, label_style),
                    Span::raw(" ".repeat(pad)),
                    Span::styled(count, Style::default().add_modifier(Modifier::DIM)),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(self.theme.selection_highlight);

        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
