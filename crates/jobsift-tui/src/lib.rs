//! jobsift TUI — ratatui application shell.
//!
//! The binary builds a [`jobsift_core::Dataset`] and hands it to [`run`];
//! everything from there on is presentation: widgets read the dataset
//! through its query views and never mutate it.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

/// Start the TUI over an already-normalised dataset.
///
/// Loads the user config (falling back to built-in defaults if the file is
/// unreadable) and the default theme, then hands control to the event
/// loop until the user quits.
pub fn run(dataset: jobsift_core::Dataset) -> anyhow::Result<()> {
    let config = jobsift_core::config::Config::load()
        .unwrap_or_else(|_| jobsift_core::config::Config::defaults());
    let theme = theme::Theme::load_default();
    App::new(dataset, config, theme).run()
}
