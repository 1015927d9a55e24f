//! Configuration types for jobsift.
//!
//! [`Config::load`] reads `~/.config/jobsift/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
show_percentages      = true
category_pane_width_pct = 28
histogram_bucket_k    = 10

[keybindings]
toggle_focus    = "Tab"
cycle_filter    = "h/l"
command         = ":"
help            = "?"
quit            = "q"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/jobsift/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_show_percentages")]
    pub show_percentages: bool,
    #[serde(default = "default_category_pane_width_pct")]
    pub category_pane_width_pct: u16,
    #[serde(default = "default_histogram_bucket_k")]
    pub histogram_bucket_k: u16,
}

fn default_show_percentages() -> bool { true }
fn default_category_pane_width_pct() -> u16 { 28 }
fn default_histogram_bucket_k() -> u16 { 10 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_percentages: default_show_percentages(),
            category_pane_width_pct: default_category_pane_width_pct(),
            histogram_bucket_k: default_histogram_bucket_k(),
        }
    }
}

/// `[keybindings]` section of `config.toml`.
///
/// Documentation of the defaults the event mapper hardcodes; kept in the
/// file so users see the bindings next to the rest of their settings.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_toggle_focus")]
    pub toggle_focus: String,
    #[serde(default = "default_cycle_filter")]
    pub cycle_filter: String,
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default = "default_help")]
    pub help: String,
    #[serde(default = "default_quit")]
    pub quit: String,
}

fn default_toggle_focus() -> String { "Tab".to_string() }
fn default_cycle_filter() -> String { "h/l".to_string() }
fn default_command() -> String { ":".to_string() }
fn default_help() -> String { "?".to_string() }
fn default_quit() -> String { "q".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            toggle_focus: default_toggle_focus(),
            cycle_filter: default_cycle_filter(),
            command: default_command(),
            help: default_help(),
            quit: default_quit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/jobsift/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not
    /// exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("jobsift")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
