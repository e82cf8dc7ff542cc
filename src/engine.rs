use crate::config::Settings;
use crate::error::{PathmanError, Result};
use crate::exec::source_file;
use crate::rcfile;
use crate::shell::Shell;
use std::path::{Path, PathBuf};

/// Change requested against the rc file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathAction {
	Add(String),
	Remove(String),
}

impl PathAction {
	pub fn directory(&self) -> &str {
		match self {
			PathAction::Add(dir) | PathAction::Remove(dir) => dir,
		}
	}
}

/// What happened to the rc file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
	Added,
	Removed,
	/// The directory was already on PATH; the rc file was not written.
	AlreadyPresent,
}

/// Whether the edited rc file was sourced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
	/// Sourced in a child shell; holds its captured output.
	Sourced(String),
	/// Sourcing was not requested; the user has to `source` the file.
	Manual(PathBuf),
	/// No edit was made, so there was nothing to source.
	Skipped,
}

/// Result of a successful add or remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
	pub change: Change,
	pub backup: Option<PathBuf>,
	pub source: SourceStatus,
}

/// Shell, rc file and defaults, resolved once per process.
#[derive(Debug, Clone)]
pub struct Pathman {
	shell: Shell,
	rc_path: PathBuf,
	settings: Settings,
}

impl Pathman {
	pub fn new(shell: Shell, rc_path: PathBuf, settings: Settings) -> Self {
		Pathman {
			shell,
			rc_path,
			settings,
		}
	}

	/// Resolve the rc file for `shell` under `home`, honouring the configured override.
	pub fn for_home(shell: Shell, home: &Path, settings: Settings) -> Self {
		let rc_path = rcfile::resolve_rc_path(shell, settings.rc_file_override.as_deref(), home);
		tracing::debug!(rc_path = %rc_path.display(), "resolved rc file");
		Pathman::new(shell, rc_path, settings)
	}

	pub fn shell(&self) -> Shell {
		self.shell
	}

	pub fn rc_path(&self) -> &Path {
		&self.rc_path
	}

	/// Add `directory` to PATH. `None` falls back to the configured defaults.
	pub fn add(
		&self,
		directory: &str,
		sourcing: Option<bool>,
		backup: Option<bool>,
	) -> Result<Outcome> {
		self.modify(
			&PathAction::Add(directory.to_string()),
			self.settings.resolve_sourcing(sourcing),
			self.settings.resolve_backup(backup),
		)
	}

	/// Remove `directory` from PATH. `None` falls back to the configured defaults.
	pub fn remove(
		&self,
		directory: &str,
		sourcing: Option<bool>,
		backup: Option<bool>,
	) -> Result<Outcome> {
		self.modify(
			&PathAction::Remove(directory.to_string()),
			self.settings.resolve_sourcing(sourcing),
			self.settings.resolve_backup(backup),
		)
	}

	/// Apply `action` to the rc file.
	///
	/// The edit is durable before sourcing starts; a sourcing failure is
	/// reported without reverting it.
	pub fn modify(&self, action: &PathAction, sourcing: bool, backup: bool) -> Result<Outcome> {
		let content = rcfile::read_rc_file(&self.rc_path)?;
		let directory = action.directory();

		let (edited, change, backup) = match action {
			PathAction::Add(_) => {
				let backup = self.backup_if(backup)?;
				if rcfile::contains_directory(&content, directory) {
					tracing::debug!(directory, "directory already in PATH");
					return Ok(Outcome {
						change: Change::AlreadyPresent,
						backup,
						source: SourceStatus::Skipped,
					});
				}
				(rcfile::append_directory(&content, directory), Change::Added, backup)
			}
			PathAction::Remove(_) => {
				let edited = rcfile::remove_directory(&content, directory).ok_or_else(|| {
					PathmanError::DirectoryNotFound {
						directory: directory.to_string(),
					}
				})?;
				(edited, Change::Removed, self.backup_if(backup)?)
			}
		};

		rcfile::write_rc_file(&self.rc_path, &edited)?;
		tracing::info!(directory, rc_path = %self.rc_path.display(), ?change, "updated rc file");

		let source = if sourcing {
			SourceStatus::Sourced(self.source()?)
		} else {
			SourceStatus::Manual(self.rc_path.clone())
		};

		Ok(Outcome {
			change,
			backup,
			source,
		})
	}

	fn backup_if(&self, requested: bool) -> Result<Option<PathBuf>> {
		if requested {
			rcfile::backup_rc_file(&self.rc_path).map(Some)
		} else {
			Ok(None)
		}
	}

	/// Source the rc file in a child shell, failing on launch error or non-zero exit.
	fn source(&self) -> Result<String> {
		let result = source_file(self.shell, &self.rc_path)?;
		if !result.success() {
			let mut reason = match result.status.code() {
				Some(code) => format!("{} exited with status {code}", self.shell),
				None => format!("{} was terminated by a signal", self.shell),
			};
			let output = result.output.trim();
			if !output.is_empty() {
				reason.push_str(": ");
				reason.push_str(output);
			}
			return Err(PathmanError::SourceFailure { reason });
		}
		tracing::debug!(output = %result.output, "sourced rc file");
		Ok(result.output)
	}
}
