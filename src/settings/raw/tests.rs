use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::tempdir;

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::resolved::DirectoryChoice;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"medibook",
		"--directory",
		"/tmp/doctors.json",
		"--title",
		"Clinic",
		"--query",
		"neha",
		"--specialization",
		"Dermatology",
		"--theme",
		"light",
		"--log-level",
		"trace",
	]);

	let mut config = RawConfig::default();
	config.ui.title = Some("From file".into());
	config.logging.level = Some("warn".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.directory.seed_file, Some(PathBuf::from("/tmp/doctors.json")));
	assert_eq!(config.ui.title.as_deref(), Some("Clinic"));
	assert_eq!(config.ui.initial_query.as_deref(), Some("neha"));
	assert_eq!(config.ui.specialization.as_deref(), Some("Dermatology"));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.logging.level.as_deref(), Some("trace"));
}

#[test]
fn file_values_survive_without_cli_flags() {
	let cli = CliArgs::parse_from(["medibook"]);
	let mut config = RawConfig::default();
	config.ui.list_title = Some("Specialists".into());
	config.apply_cli_overrides(&cli);
	assert_eq!(config.ui.list_title.as_deref(), Some("Specialists"));
}

#[test]
fn resolve_uses_configured_seed_file() {
	let dir = tempdir().expect("tempdir");
	let seed = dir.path().join("doctors.json");
	fs::write(&seed, "[]").expect("write seed");

	let cli = CliArgs::parse_from(["medibook", "--directory", seed.to_str().expect("utf8")]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).expect("resolve");

	assert_eq!(resolved.directory, DirectoryChoice::Configured(seed));
	assert_eq!(resolved.log_level, "info");
	assert_eq!(resolved.specialization, "");
}

#[test]
fn resolve_reports_missing_seed_file_with_origin() {
	let cli = CliArgs::parse_from(["medibook", "--directory", "/nonexistent/doctors.json"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).expect_err("missing file");
	let message = format!("{err:#}");
	assert!(message.contains("directory.seed_file"));
	assert!(message.contains("--directory"));
}

#[test]
fn resolve_rejects_unknown_level_from_config_key() {
	let cli = CliArgs::parse_from(["medibook"]);
	let mut config = RawConfig::default();
	config.logging.level = Some("chatty".into());

	let err = config.resolve(&cli).expect_err("bad level");
	assert!(format!("{err:#}").contains("configuration key `logging.level`"));
}

#[test]
fn blank_titles_fall_back_to_defaults() {
	let dir = tempdir().expect("tempdir");
	let seed = dir.path().join("doctors.json");
	fs::write(&seed, "[]").expect("write seed");

	let cli = CliArgs::parse_from(["medibook", "-d", seed.to_str().expect("utf8")]);
	let mut config = RawConfig::default();
	config.ui.title = Some("   ".into());
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).expect("resolve");

	assert_eq!(resolved.title, None);
	assert_eq!(resolved.labels().title, "Find a doctor");
}
