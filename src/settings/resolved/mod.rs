use std::path::PathBuf;

use log::LevelFilter;
use medibook::{BuiltinSeed, DirectorySource, JsonFileSource, UiLabels, builtin_records};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where the directory is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryChoice {
	/// A file named by `--directory` or `directory.seed_file`.
	Configured(PathBuf),
	/// `doctors.json` found in the data directory.
	DataDir(PathBuf),
	/// Records compiled into the binary.
	Builtin,
}

impl DirectoryChoice {
	/// Build the record source for this choice.
	pub fn source(&self) -> Box<dyn DirectorySource> {
		match self {
			Self::Configured(path) | Self::DataDir(path) => Box::new(JsonFileSource::new(path.clone())),
			Self::Builtin => Box::new(BuiltinSeed),
		}
	}

	/// Number of built-in records, for the configuration summary.
	fn builtin_count() -> usize {
		builtin_records().len()
	}
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub directory: DirectoryChoice,
	pub title: Option<String>,
	pub initial_query: String,
	/// Empty means every specialization.
	pub specialization: String,
	pub theme: Option<String>,
	pub list_title: Option<String>,
	pub log_level: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// The validated log level.
	pub fn level_filter(&self) -> LevelFilter {
		medibook::logging::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
	}

	/// Labels for the terminal UI with configured overrides applied.
	pub fn labels(&self) -> UiLabels {
		let mut labels = UiLabels::default();
		if let Some(title) = &self.title {
			labels = labels.with_title(title.clone());
		}
		if let Some(list_title) = &self.list_title {
			labels = labels.with_list_title(list_title.clone());
		}
		labels
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
