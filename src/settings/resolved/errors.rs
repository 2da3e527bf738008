use std::path::PathBuf;

use thiserror::Error;

use super::SettingSource;

/// A resolved setting that cannot be used.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error(
		"log level `{level}` from {origin} is not one of off, error, warn, info, debug, trace"
	)]
	UnknownLogLevel { level: String, origin: SettingSource },
	#[error("doctor directory {} from {origin} does not exist", path.display())]
	MissingSeedFile { path: PathBuf, origin: SettingSource },
}

impl ConfigError {
	/// Configuration key the error refers to.
	pub(crate) fn key(&self) -> &'static str {
		match self {
			Self::UnknownLogLevel { .. } => "logging.level",
			Self::MissingSeedFile { .. } => "directory.seed_file",
		}
	}
}
