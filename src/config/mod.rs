//! Configuration loading and parsing for pathman.
//!
//! This module handles:
//! - TOML config file parsing
//! - Locating `~/.config/pathman/config.toml`
//! - Resolving config values against built-in defaults

pub mod loader;
pub mod parser;
pub mod types;

pub use loader::{config_dir, config_path, ensure_config_dir, load_or_default, load_settings};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, Settings};
