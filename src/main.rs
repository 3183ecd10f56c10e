//! Entry point for the terminal EPUB reader.
//!
//! Responsibilities here are intentionally minimal:
//! - Validate the single path argument.
//! - Load user configuration from `conf/config.toml`.
//! - Load the EPUB text via `epub_loader`.
//! - Hand the document to the reader loop in `app`.

mod app;
mod config;
mod epub_loader;
mod pagination;

use crate::app::run_app;
use crate::config::load_config;
use crate::epub_loader::{is_epub, load_document};
use anyhow::Result;
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{error, info, warn};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const CONFIG_PATH: &str = "conf/config.toml";
const LOG_FILE_NAME: &str = "epubread.log";

fn main() {
    let epub_path = match parse_args(env::args_os().skip(1)) {
        Ok(path) => path,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    let reload_handle = init_tracing();
    if let Err(err) = run(&epub_path, &reload_handle) {
        error!("{err:?}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(epub_path: &Path, reload_handle: &ReloadHandle) -> Result<()> {
    let config = load_config(Path::new(CONFIG_PATH));
    if env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        set_log_level(reload_handle, config.log_level.as_filter_str());
    }
    info!(
        path = %epub_path.display(),
        level = %config.log_level,
        end_jump = %config.end_jump,
        "Starting EPUB reader"
    );
    let document = load_document(epub_path)?;
    run_app(&document, &config)?;
    info!("Reader session ended");
    Ok(())
}

/// Reasons the reader refuses to start.
#[derive(Debug, Clone, PartialEq, Eq)]
enum UsageError {
    MissingPath,
    UnsupportedFormat(PathBuf),
    NotFound(PathBuf),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingPath => write!(f, "Usage: epubread <path-to-book.epub>"),
            UsageError::UnsupportedFormat(path) => {
                write!(f, "Files format NOT supported: '{}'", path.display())
            }
            UsageError::NotFound(path) => write!(f, "File NOT found: '{}'", path.display()),
        }
    }
}

impl std::error::Error for UsageError {}

fn parse_args(mut args: impl Iterator<Item = OsString>) -> Result<PathBuf, UsageError> {
    let path = PathBuf::from(args.next().ok_or(UsageError::MissingPath)?);
    if !is_epub(&path) {
        return Err(UsageError::UnsupportedFormat(path));
    }
    if !path.is_file() {
        return Err(UsageError::NotFound(path));
    }
    Ok(path)
}

/// Logs go to a file: stdout belongs to the reader screen.
fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    let log_path = env::temp_dir().join(LOG_FILE_NAME);
    let writer = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(io::sink),
    };
    tracing_subscriber::registry()
        .with(
            tracing_fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(writer)
                .with_filter(filter_layer),
        )
        .init();
    info!(
        path = %log_path.display(),
        "Logging initialized; override level with config.log_level or RUST_LOG"
    );
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(items: &[&str]) -> impl Iterator<Item = OsString> {
        items
            .iter()
            .map(OsString::from)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn missing_argument_prints_usage() {
        let err = parse_args(args(&[])).unwrap_err();
        assert_eq!(err, UsageError::MissingPath);
        assert!(err.to_string().starts_with("Usage:"));
    }

    #[test]
    fn rejects_wrong_suffix_before_checking_existence() {
        let err = parse_args(args(&["/no/such/book.pdf"])).unwrap_err();
        assert_eq!(err.to_string(), "Files format NOT supported: '/no/such/book.pdf'");
    }

    #[test]
    fn rejects_missing_file() {
        let err = parse_args(args(&["/no/such/book.epub"])).unwrap_err();
        assert_eq!(err.to_string(), "File NOT found: '/no/such/book.epub'");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_reported_not_panicked() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"book\xff.epub".to_vec());
        let err = parse_args(vec![raw].into_iter()).unwrap_err();
        assert!(matches!(err, UsageError::NotFound(_)));
        assert!(err.to_string().starts_with("File NOT found: 'book"));
    }

    #[test]
    fn rejects_directory_with_epub_suffix() {
        let dir = env::temp_dir().join(format!("epubread-dir-{}.epub", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let err = parse_args(args(&[dir.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, UsageError::NotFound(_)));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn accepts_existing_epub_file() {
        let file = env::temp_dir().join(format!("epubread-args-{}.epub", std::process::id()));
        fs::write(&file, b"not really a zip").unwrap();
        let parsed = parse_args(args(&[file.to_str().unwrap()])).unwrap();
        assert_eq!(parsed, file);
        fs::remove_file(&file).unwrap();
    }
}
