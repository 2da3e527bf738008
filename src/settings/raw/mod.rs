use std::env;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

mod directory;
mod logging;
mod ui;

use directory::DirectorySection;
use logging::LoggingSection;
use ui::UiSection;

/// Settings as they appear in `config.toml` and `MEDIBOOK__*` variables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	directory: DirectorySection,
	ui: UiSection,
	logging: LoggingSection,
}

/// Names a setting goes by in each layer.
struct SettingNames {
	flag: &'static str,
	env_var: &'static str,
	key: &'static str,
}

const SEED_FILE: SettingNames = SettingNames {
	flag: "--directory",
	env_var: "MEDIBOOK__DIRECTORY__SEED_FILE",
	key: "directory.seed_file",
};

const LOG_LEVEL: SettingNames = SettingNames {
	flag: "--log-level",
	env_var: "MEDIBOOK__LOGGING__LEVEL",
	key: "logging.level",
};

impl SettingNames {
	/// Layer that supplied a value, if any did.
	fn origin(&self, has_value: bool, from_cli: bool) -> Option<SettingSource> {
		match (has_value, from_cli) {
			(false, _) => None,
			(true, true) => Some(SettingSource::CliFlag(self.flag)),
			(true, false) if env::var_os(self.env_var).is_some() => {
				Some(SettingSource::Environment(self.env_var))
			}
			(true, false) => Some(SettingSource::ConfigKey(self.key)),
		}
	}
}

impl RawConfig {
	/// Let flags given on the command line replace file and env values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.directory.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Fill defaults and check the result.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			seed_file: SEED_FILE.origin(self.directory.seed_file.is_some(), cli.directory.is_some()),
			log_level: LOG_LEVEL.origin(self.logging.level.is_some(), cli.log_level.is_some()),
		};

		let ui = self.ui.finalize();
		let config = ResolvedConfig {
			directory: self.directory.resolve()?,
			title: ui.title,
			initial_query: ui.initial_query,
			specialization: ui.specialization,
			theme: ui.theme,
			list_title: ui.list_title,
			log_level: self.logging.finalize(),
		};

		if let Err(err) = config.validate(&sources) {
			let key = err.key();
			return Err(err).with_context(|| format!("invalid `{key}` setting"));
		}
		Ok(config)
	}
}

#[cfg(test)]
mod tests;
