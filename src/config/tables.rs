use super::defaults;
use super::models::{AppConfig, EndJumpPolicy, KeyBindings, LogLevel};
use serde::Deserialize;

/// On-disk shape of `config.toml`: one table per concern.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    layout: LayoutConfig,
    #[serde(default)]
    keys: KeyBindings,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            reserved_rows: tables.layout.reserved_rows,
            page_padding: tables.layout.page_padding,
            margin_top: tables.layout.margin_top,
            margin_left: tables.layout.margin_left,
            gutter: tables.layout.gutter,
            show_status: tables.layout.show_status,
            end_jump: tables.layout.end_jump,
            keys: tables.keys,
            log_level: tables.logging.log_level,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LayoutConfig {
    #[serde(default = "defaults::default_reserved_rows")]
    reserved_rows: u16,
    #[serde(default = "defaults::default_page_padding")]
    page_padding: u16,
    #[serde(default = "defaults::default_margin_top")]
    margin_top: u16,
    #[serde(default = "defaults::default_margin_left")]
    margin_left: u16,
    #[serde(default = "defaults::default_gutter")]
    gutter: u16,
    #[serde(default = "defaults::default_show_status")]
    show_status: bool,
    #[serde(default)]
    end_jump: EndJumpPolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            reserved_rows: defaults::default_reserved_rows(),
            page_padding: defaults::default_page_padding(),
            margin_top: defaults::default_margin_top(),
            margin_left: defaults::default_margin_left(),
            gutter: defaults::default_gutter(),
            show_status: defaults::default_show_status(),
            end_jump: EndJumpPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
