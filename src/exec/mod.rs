//! Shell execution for pathman.
//!
//! This module handles:
//! - Sourcing an rc file in a child shell
//! - Capturing the child's output and exit status

use crate::error::{PathmanError, Result};
use crate::shell::Shell;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Captured result of sourcing an rc file.
#[derive(Debug)]
pub struct SourceOutput {
	/// Exit status of the child shell.
	pub status: ExitStatus,

	/// Standard output followed by standard error.
	pub output: String,
}

impl SourceOutput {
	pub fn success(&self) -> bool {
		self.status.success()
	}
}

/// Build the `source '<path>'` command line, quoting the path for the shell.
pub fn source_command(path: &Path) -> String {
	let path = path.to_string_lossy().replace('\'', r"'\''");
	format!("source '{path}'")
}

/// Run `source <path>` in a child `shell` and wait for it to exit.
///
/// The captured output is returned whatever the exit status; only a failure
/// to launch the shell is an error here.
pub fn source_file(shell: Shell, path: &Path) -> Result<SourceOutput> {
	let binary = shell.binary();
	let command = source_command(path);
	tracing::debug!(shell = %binary.display(), command = %command, "sourcing rc file");

	let output = Command::new(&binary)
		.arg("-c")
		.arg(&command)
		.stdin(Stdio::null())
		.output()
		.map_err(|e| PathmanError::SourceFailure {
			reason: format!("could not launch {}: {e}", binary.display()),
		})?;

	let mut merged = String::from_utf8_lossy(&output.stdout).into_owned();
	merged.push_str(&String::from_utf8_lossy(&output.stderr));

	Ok(SourceOutput {
		status: output.status,
		output: merged,
	})
}
