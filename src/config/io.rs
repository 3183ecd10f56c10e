use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            debug!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

/// Parse a TOML document into an [`AppConfig`].
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("Failed to parse config TOML")?;
    Ok(tables.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EndJumpPolicy, LogLevel};

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.reserved_rows, 4);
        assert_eq!(config.gutter, 6);
        assert_eq!(config.keys.quit, "q");
        assert_eq!(config.end_jump, EndJumpPolicy::LastPage);
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = parse_config(
            r#"
            [layout]
            margin_left = 5
            end_jump = "even-aligned"

            [keys]
            quit = "ctrl+q"

            [logging]
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.margin_left, 5);
        assert_eq!(config.margin_top, 2);
        assert_eq!(config.end_jump, EndJumpPolicy::EvenAligned);
        assert_eq!(config.keys.quit, "ctrl+q");
        assert_eq!(config.keys.next_spread, "right");
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn rejects_unknown_enum_values() {
        assert!(parse_config("[layout]\nend_jump = \"sideways\"\n").is_err());
    }

    #[test]
    fn layout_toggles_and_bindings_parse() {
        let config = parse_config(
            "[layout]\nshow_status = false\ngutter = 0\n\n[keys]\njump_start = \"g\"\n",
        )
        .unwrap();
        assert!(!config.show_status);
        assert_eq!(config.gutter, 0);
        assert_eq!(config.keys.jump_start, "g");
        assert_eq!(config.keys.jump_end, "end");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/definitely/not/here/config.toml"));
        assert_eq!(config, AppConfig::default());
    }
}
