//! Ratatui widgets for the jobsift TUI.

pub mod category_list;
pub mod command_bar;
pub mod distribution;
pub mod header;
pub mod help;
pub mod histogram;
pub mod scatter;
