use std::path::PathBuf;

/// Library-level structured errors for pathman.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum PathmanError {
	#[error("SHELL environment variable not found or unsupported")]
	ShellNotFound,

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,

	#[error("Failed to remove directory '{directory}' from PATH: Directory not found in PATH")]
	DirectoryNotFound { directory: String },

	#[error("Failed to read RC file: {path}")]
	FileReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write RC file: {path}")]
	FileWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to back up RC file to {backup}")]
	BackupError {
		backup: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to source RC file: {reason}")]
	SourceFailure { reason: String },

	#[error("Failed to create config directory: {path}")]
	ConfigDirError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

/// Result type alias using PathmanError.
pub type Result<T> = std::result::Result<T, PathmanError>;
