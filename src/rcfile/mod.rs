//! RC file handling for pathman.
//!
//! This module handles:
//! - Locating the rc file and its backup
//! - Matching and editing `export PATH="..."` lines
//! - Reading, backing up and atomically rewriting the file

pub mod locator;
pub mod matcher;

pub use locator::{backup_path, resolve_rc_path};
pub use matcher::{
	PathAssignment, append_directory, assignments, contains_directory, remove_directory,
};

use crate::error::{PathmanError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read the whole rc file as text.
pub fn read_rc_file(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).map_err(|source| PathmanError::FileReadError {
		path: path.to_path_buf(),
		source,
	})
}

/// Copy `path` to its `.bak` sibling, replacing any earlier backup.
pub fn backup_rc_file(path: &Path) -> Result<PathBuf> {
	let backup = backup_path(path);
	std::fs::copy(path, &backup).map_err(|source| PathmanError::BackupError {
		backup: backup.clone(),
		source,
	})?;
	tracing::debug!(from = %path.display(), to = %backup.display(), "backed up rc file");
	Ok(backup)
}

/// Replace the contents of `path` with `content`.
///
/// The content goes to a temporary file in the same directory which is then
/// renamed over `path`, so a failed write leaves the original untouched.
/// A symlinked rc file is followed and its target rewritten, keeping the link.
pub fn write_rc_file(path: &Path, content: &str) -> Result<()> {
	let target = resolve_symlink(path);
	let path = target.as_path();
	let to_write_error = |source: std::io::Error| PathmanError::FileWriteError {
		path: path.to_path_buf(),
		source,
	};

	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(to_write_error)?;
	tmp.write_all(content.as_bytes()).map_err(to_write_error)?;
	tmp.as_file().sync_all().map_err(to_write_error)?;

	if let Ok(metadata) = std::fs::metadata(path) {
		std::fs::set_permissions(tmp.path(), metadata.permissions()).map_err(to_write_error)?;
	}

	tmp.persist(path).map_err(|e| to_write_error(e.error))?;
	tracing::debug!(path = %path.display(), bytes = content.len(), "wrote rc file");
	Ok(())
}

/// Follow `path` to its final target if it is a symlink.
fn resolve_symlink(path: &Path) -> PathBuf {
	let is_symlink = std::fs::symlink_metadata(path)
		.map(|metadata| metadata.file_type().is_symlink())
		.unwrap_or(false);

	if is_symlink && let Ok(target) = std::fs::canonicalize(path) {
		tracing::debug!(
			link = %path.display(),
			target = %target.display(),
			"following symlinked rc file"
		);
		return target;
	}
	path.to_path_buf()
}
