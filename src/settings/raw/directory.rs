use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use medibook::app_dirs;
use serde::Deserialize;

use crate::cli::CliArgs;
use crate::settings::resolved::DirectoryChoice;

/// Where doctor records come from, as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DirectorySection {
	pub(super) seed_file: Option<PathBuf>,
}

impl DirectorySection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.directory.clone() {
			self.seed_file = Some(path);
		}
	}

	/// Pick the configured file, then the data directory seed, then the
	/// built-in records.
	pub(super) fn resolve(self) -> Result<DirectoryChoice> {
		if let Some(path) = self.seed_file {
			let path = if path.is_relative() {
				env::current_dir()
					.context("failed to resolve current directory for seed file")?
					.join(path)
			} else {
				path
			};
			return Ok(DirectoryChoice::Configured(path));
		}

		Ok(match app_dirs::default_seed_file() {
			Some(path) => DirectoryChoice::DataDir(path),
			None => DirectoryChoice::Builtin,
		})
	}
}
