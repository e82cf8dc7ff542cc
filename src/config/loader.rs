use crate::config::parser::parse_config_file;
use crate::config::types::{Config, Settings};
use crate::error::{PathmanError, Result};
use std::path::{Path, PathBuf};

/// Directory holding pathman's config under `home`.
pub fn config_dir(home: &Path) -> PathBuf {
	home.join(".config").join("pathman")
}

/// Get the path to the user's config file.
pub fn config_path(home: &Path) -> PathBuf {
	config_dir(home).join("config.toml")
}

/// Create the config directory if it does not exist yet.
///
/// The config file itself is never created.
pub fn ensure_config_dir(home: &Path) -> Result<PathBuf> {
	let dir = config_dir(home);
	if !dir.exists() {
		std::fs::create_dir_all(&dir).map_err(|source| PathmanError::ConfigDirError {
			path: dir.clone(),
			source,
		})?;
		tracing::debug!(path = %dir.display(), "created config directory");
	}
	Ok(dir)
}

/// Load the config at `path`, falling back to defaults.
///
/// A missing, empty, unreadable or unparseable file yields [`Config::default`]
/// rather than an error.
pub fn load_or_default(path: &Path) -> Config {
	if !path.exists() {
		tracing::debug!(path = %path.display(), "no config file, using defaults");
		return Config::default();
	}

	match parse_config_file(path) {
		Ok(config) => config,
		Err(e) => {
			tracing::debug!(path = %path.display(), error = %e, "ignoring config file");
			Config::default()
		}
	}
}

/// Ensure the config directory exists and resolve the effective settings.
pub fn load_settings(home: &Path) -> Result<Settings> {
	ensure_config_dir(home)?;
	Ok(Settings::from(load_or_default(&config_path(home))))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_config_path() {
		let path = config_path(Path::new("/home/user"));
		assert_eq!(path, PathBuf::from("/home/user/.config/pathman/config.toml"));
	}

	#[test]
	fn test_load_settings_creates_dir_but_not_file() {
		let home = tempfile::tempdir().unwrap();

		let settings = load_settings(home.path()).unwrap();

		assert_eq!(settings, Settings::default());
		assert!(config_dir(home.path()).is_dir());
		assert!(!config_path(home.path()).exists());
	}

	#[test]
	fn test_load_or_default_empty_file() {
		let home = tempfile::tempdir().unwrap();
		ensure_config_dir(home.path()).unwrap();
		let path = config_path(home.path());
		fs::write(&path, "  \n").unwrap();

		let settings = Settings::from(load_or_default(&path));
		assert!(settings.auto_source);
		assert!(!settings.backup);
	}

	#[test]
	fn test_load_or_default_unparseable_file() {
		let home = tempfile::tempdir().unwrap();
		ensure_config_dir(home.path()).unwrap();
		let path = config_path(home.path());
		fs::write(&path, "backup = true\nautoSource = [[[").unwrap();

		let settings = Settings::from(load_or_default(&path));
		assert_eq!(settings, Settings::default());
	}

	#[test]
	fn test_load_settings_reads_values() {
		let home = tempfile::tempdir().unwrap();
		ensure_config_dir(home.path()).unwrap();
		fs::write(
			config_path(home.path()),
			"defaultRcFile = \".profile\"\nautoSource = false\nbackup = true\n",
		)
		.unwrap();

		let settings = load_settings(home.path()).unwrap();
		assert_eq!(settings.rc_file_override, Some(".profile".to_string()));
		assert!(!settings.auto_source);
		assert!(settings.backup);
	}
}
