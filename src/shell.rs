//! Shell detection and rc file naming.

use crate::error::{PathmanError, Result};
use std::path::{Path, PathBuf};

/// Shells pathman knows how to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
	Bash,
	Zsh,
}

impl Shell {
	/// All supported shells, in the order they are tried during detection.
	pub const ALL: [Shell; 2] = [Shell::Bash, Shell::Zsh];

	/// Get the shell's name as it appears at the end of its executable path.
	pub fn as_str(&self) -> &'static str {
		match self {
			Shell::Bash => "bash",
			Shell::Zsh => "zsh",
		}
	}

	/// Match an executable path such as `/usr/local/bin/bash` by suffix.
	pub fn from_shell_path(shell_path: &str) -> Option<Shell> {
		Shell::ALL
			.into_iter()
			.find(|shell| shell_path.ends_with(shell.as_str()))
	}

	/// Detect the user's shell from the `SHELL` environment variable.
	pub fn detect() -> Result<Shell> {
		let shell_path = std::env::var("SHELL").map_err(|_| PathmanError::ShellNotFound)?;
		let shell = Shell::from_shell_path(&shell_path).ok_or(PathmanError::ShellNotFound)?;
		tracing::debug!(shell_path = %shell_path, shell = shell.as_str(), "detected shell");
		Ok(shell)
	}

	/// Name of the rc file this shell reads, relative to `home`.
	///
	/// Zsh prefers `.zprofile` when present, otherwise `.zshrc` (even if it
	/// does not exist yet).
	pub fn rc_file_name(&self, home: &Path) -> &'static str {
		match self {
			Shell::Bash => ".bashrc",
			Shell::Zsh => {
				if home.join(".zprofile").exists() {
					".zprofile"
				} else {
					".zshrc"
				}
			}
		}
	}

	/// Fixed location of the shell binary used for sourcing.
	pub fn binary(&self) -> PathBuf {
		PathBuf::from("/bin").join(self.as_str())
	}
}

impl std::fmt::Display for Shell {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
