//! Configuration loading for the terminal reader.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! defaults that reproduce the classic two-page layout, so the reader can
//! always launch.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::load_config;
pub use models::{AppConfig, EndJumpPolicy, KeyBindings, LogLevel};
