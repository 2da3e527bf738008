use medibook::logging::parse_level;

use super::{ConfigError, ConfigSources, DirectoryChoice, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if parse_level(&config.log_level).is_none() {
		return Err(ConfigError::UnknownLogLevel {
			level: config.log_level.clone(),
			origin: sources.source_for_log_level(),
		});
	}

	if let DirectoryChoice::Configured(path) = &config.directory
		&& !path.is_file()
	{
		return Err(ConfigError::MissingSeedFile {
			path: path.clone(),
			origin: sources.source_for_seed_file(),
		});
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			directory: DirectoryChoice::Builtin,
			title: None,
			initial_query: String::new(),
			specialization: String::new(),
			theme: None,
			list_title: None,
			log_level: "info".into(),
		}
	}

	#[test]
	fn validation_rejects_unknown_log_level() {
		let config = ResolvedConfig {
			log_level: "chatty".into(),
			..config()
		};
		let sources = ConfigSources {
			log_level: Some(SettingSource::Environment("MEDIBOOK__LOGGING__LEVEL")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key(), "logging.level");
		assert!(matches!(
			&err,
			ConfigError::UnknownLogLevel {
				level,
				origin: SettingSource::Environment(_),
			} if level == "chatty"
		));
	}

	#[test]
	fn validation_rejects_missing_seed_file() {
		let config = ResolvedConfig {
			directory: DirectoryChoice::Configured(PathBuf::from("/nonexistent/doctors.json")),
			..config()
		};
		let sources = ConfigSources {
			seed_file: Some(SettingSource::CliFlag("--directory")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key(), "directory.seed_file");
		assert!(err.to_string().contains("CLI flag `--directory`"));
	}

	#[test]
	fn defaults_pass_validation() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}
}
