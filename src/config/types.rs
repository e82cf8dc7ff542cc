use serde::Deserialize;

/// Contents of `~/.config/pathman/config.toml`.
///
/// Every key is optional; anything left unset falls back to the built-in
/// defaults when resolved into [`Settings`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
	/// RC file name to edit instead of the shell's default, relative to home.
	#[serde(default, alias = "default-rc-file")]
	pub default_rc_file: Option<String>,

	/// Whether to source the RC file after editing it.
	#[serde(default, alias = "auto-source")]
	pub auto_source: Option<bool>,

	/// Whether to write a `.bak` copy of the RC file before editing it.
	#[serde(default)]
	pub backup: Option<bool>,
}

/// Effective defaults after applying config values over built-in ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub rc_file_override: Option<String>,
	pub auto_source: bool,
	pub backup: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			rc_file_override: None,
			auto_source: true,
			backup: false,
		}
	}
}

impl From<Config> for Settings {
	fn from(config: Config) -> Self {
		let defaults = Settings::default();
		Settings {
			rc_file_override: config.default_rc_file,
			auto_source: config.auto_source.unwrap_or(defaults.auto_source),
			backup: config.backup.unwrap_or(defaults.backup),
		}
	}
}

impl Settings {
	/// Explicit CLI value wins, otherwise the configured default.
	pub fn resolve_sourcing(&self, cli: Option<bool>) -> bool {
		cli.unwrap_or(self.auto_source)
	}

	/// Explicit CLI value wins, otherwise the configured default.
	pub fn resolve_backup(&self, cli: Option<bool>) -> bool {
		cli.unwrap_or(self.backup)
	}
}
