use crate::shell::Shell;
use std::path::{Path, PathBuf};

/// Resolve the absolute rc file path for `shell` under `home`.
///
/// An override is joined to `home` as given, so an absolute override replaces
/// `home` entirely. Existence is not checked here.
pub fn resolve_rc_path(shell: Shell, rc_file_override: Option<&str>, home: &Path) -> PathBuf {
	match rc_file_override {
		Some(name) => home.join(name),
		None => home.join(shell.rc_file_name(home)),
	}
}

/// Sibling path holding the backup of `rc_path`, with the extension set to `bak`.
pub fn backup_path(rc_path: &Path) -> PathBuf {
	rc_path.with_extension("bak")
}
