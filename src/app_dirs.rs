//! Where `medibook` looks for its configuration and seed data.
//!
//! Each location can be pinned with an environment variable; otherwise the
//! platform default from `directories` is used.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// File name of the seed data looked up in the data directory.
pub const SEED_FILE_NAME: &str = "doctors.json";

/// A per-user directory the binary reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
	Config,
	Data,
}

impl Location {
	/// Variable that overrides this location. Empty values are ignored.
	#[must_use]
	pub const fn env_var(self) -> &'static str {
		match self {
			Self::Config => "MEDIBOOK_CONFIG_DIR",
			Self::Data => "MEDIBOOK_DATA_DIR",
		}
	}

	/// Resolve the directory, preferring the environment override.
	pub fn resolve(self) -> Result<PathBuf> {
		if let Some(dir) = env::var_os(self.env_var()).filter(|value| !value.is_empty()) {
			return Ok(PathBuf::from(dir));
		}
		let dirs = ProjectDirs::from("org", "medibook", "medibook")
			.context("no home directory to place medibook files in")?;
		Ok(match self {
			Self::Config => dirs.config_local_dir(),
			Self::Data => dirs.data_local_dir(),
		}
		.to_path_buf())
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	Location::Config.resolve()
}

/// Directory that may hold a `doctors.json` seed file.
pub fn get_data_dir() -> Result<PathBuf> {
	Location::Data.resolve()
}

/// Seed file in the data directory, if one exists.
pub fn default_seed_file() -> Option<PathBuf> {
	let path = get_data_dir().ok()?.join(SEED_FILE_NAME);
	path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn locations_have_distinct_overrides() {
		assert_ne!(Location::Config.env_var(), Location::Data.env_var());
	}
}
