//! Pathman - CLI tool for managing PATH entries in shell rc files.
//!
//! This library provides the core functionality for pathman, including:
//! - Shell detection and rc file location
//! - Idempotent add/remove of `export PATH="..."` lines
//! - Optional backups and re-sourcing of the edited file
//! - Configuration file loading with silent fallback to defaults
//!
//! # Example
//!
//! ```no_run
//! use pathman::config::load_settings;
//! use pathman::{Pathman, Shell};
//!
//! let home = dirs::home_dir().unwrap();
//! let settings = load_settings(&home).unwrap();
//! let shell = Shell::detect().unwrap();
//! let pathman = Pathman::for_home(shell, &home, settings);
//!
//! let outcome = pathman.add("/opt/tool/bin", Some(false), None).unwrap();
//! println!("{:?}", outcome.change);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod exec;
pub mod rcfile;
pub mod shell;

pub use engine::{Change, Outcome, PathAction, Pathman, SourceStatus};
pub use error::{PathmanError, Result};
pub use shell::Shell;
