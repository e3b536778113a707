//! Configuration module for Audio Scribe.
//!
//! Provides `AppConfig` (top-level settings), the backend connection config,
//! `AppPaths` for cross-platform data directories, and TOML persistence via
//! `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, BackendConfig, UiConfig};
