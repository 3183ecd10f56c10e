use serde::Deserialize;

/// High-level app configuration, flattened from the TOML tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Rows kept free of page text (top margin, status footer, padding).
    pub reserved_rows: u16,
    /// Columns subtracted from each half of the screen to get the page width.
    pub page_padding: u16,
    pub margin_top: u16,
    pub margin_left: u16,
    /// Blank columns between the left and the right page.
    pub gutter: u16,
    pub show_status: bool,
    pub end_jump: EndJumpPolicy,
    pub keys: KeyBindings,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        use crate::config::defaults;
        AppConfig {
            reserved_rows: defaults::default_reserved_rows(),
            page_padding: defaults::default_page_padding(),
            margin_top: defaults::default_margin_top(),
            margin_left: defaults::default_margin_left(),
            gutter: defaults::default_gutter(),
            show_status: defaults::default_show_status(),
            end_jump: EndJumpPolicy::default(),
            keys: KeyBindings::default(),
            log_level: defaults::default_log_level(),
        }
    }
}

/// Shortcut strings, e.g. `"q"`, `"right"` or `"ctrl+n"`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct KeyBindings {
    #[serde(default = "crate::config::defaults::default_key_quit")]
    pub quit: String,
    #[serde(default = "crate::config::defaults::default_key_next_spread")]
    pub next_spread: String,
    #[serde(default = "crate::config::defaults::default_key_previous_spread")]
    pub previous_spread: String,
    #[serde(default = "crate::config::defaults::default_key_jump_end")]
    pub jump_end: String,
    #[serde(default = "crate::config::defaults::default_key_jump_start")]
    pub jump_start: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crate::config::defaults;
        KeyBindings {
            quit: defaults::default_key_quit(),
            next_spread: defaults::default_key_next_spread(),
            previous_spread: defaults::default_key_previous_spread(),
            jump_end: defaults::default_key_jump_end(),
            jump_start: defaults::default_key_jump_start(),
        }
    }
}

/// Where "jump to end" lands when the page count is even.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EndJumpPolicy {
    /// Land on the very last page, even if that leaves it alone on the left.
    #[default]
    LastPage,
    /// Land on the last even index so spreads stay paired.
    EvenAligned,
}

impl std::fmt::Display for EndJumpPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EndJumpPolicy::LastPage => "last-page",
            EndJumpPolicy::EvenAligned => "even-aligned",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
