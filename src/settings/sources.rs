use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use medibook::app_dirs;

use crate::cli::CliArgs;

/// Stack the configuration layers, lowest precedence first: discovered
/// files, `--config` files, then `MEDIBOOK__*` variables.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let discovered = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	let optional = discovered
		.into_iter()
		.map(|path| File::from(path).required(false));
	let explicit = cli
		.config
		.iter()
		.map(|path| File::from(path.as_path()).required(true));

	optional
		.chain(explicit)
		.fold(Config::builder(), |builder, file| builder.add_source(file))
		.add_source(Environment::with_prefix("medibook").separator("__").try_parsing(true))
		.build()
		.context("failed to read configuration")
}

/// Files read when present: the user config dir, then the working directory.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = std::env::current_dir().ok().into_iter().flat_map(|cwd| {
		[".medibook.toml", "medibook.toml"].map(|name| cwd.join(name))
	});
	user.into_iter().chain(local).collect()
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".medibook.toml")));
		assert!(files.iter().any(|path| path.ends_with("medibook.toml")));
	}

	#[test]
	fn explicit_config_files_are_merged() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("custom.toml");
		fs::write(&path, "[ui]\ntitle = \"Clinic\"\n").expect("write config");

		let cli = CliArgs::parse_from(["medibook", "--no-config", "--config", path.to_str().expect("utf8")]);
		let config = build_config(&cli).expect("build");
		assert_eq!(config.get_string("ui.title").expect("title"), "Clinic");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let cli = CliArgs::parse_from(["medibook", "--no-config", "--config", "/nonexistent/medibook.toml"]);
		assert!(build_config(&cli).is_err());
	}
}
