use std::sync::Arc;

use anyhow::{Context, Result};
use medibook::{
	DirectoryStore, DirectoryUi, DoctorRecord, FilterQuery, SessionOutcome, SpecializationFilter,
	filter,
};

use crate::settings::ResolvedConfig;

/// Coordinates loading the directory and running the interactive UI.
pub(crate) struct DirectoryWorkflow {
	store: DirectoryStore,
	config: ResolvedConfig,
}

impl DirectoryWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let source = config.directory.source();
		let store = DirectoryStore::load(source.as_ref())
			.with_context(|| format!("failed to load the directory from {}", source.describe()))?;
		log::info!("loaded {} doctor(s) from {}", store.len(), source.describe());
		Ok(Self { store, config })
	}

	fn query(&self) -> FilterQuery {
		FilterQuery::new(
			self.config.initial_query.clone(),
			SpecializationFilter::from_value(&self.config.specialization),
		)
	}

	/// Records matching the configured query, in directory order.
	pub(crate) fn list(&self) -> Vec<Arc<DoctorRecord>> {
		filter(self.store.list(), &self.query())
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		let search_ui = DirectoryUiFactory::build(self.store, self.config);
		search_ui.run()
	}
}

/// Helper for translating resolved configuration into a configured
/// [`DirectoryUi`].
struct DirectoryUiFactory {
	ui: DirectoryUi,
}

impl DirectoryUiFactory {
	fn build(store: DirectoryStore, config: ResolvedConfig) -> DirectoryUi {
		let labels = config.labels();
		let ResolvedConfig {
			initial_query,
			specialization,
			theme,
			..
		} = config;

		Self::new(store)
			.with_labels(labels)
			.with_initial_query(initial_query)
			.with_specialization(specialization)
			.with_theme(theme)
			.finish()
	}

	fn new(store: DirectoryStore) -> Self {
		Self {
			ui: DirectoryUi::new(store),
		}
	}

	fn with_labels(mut self, labels: medibook::UiLabels) -> Self {
		self.ui = self.ui.with_labels(labels);
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		self.ui = self.ui.with_initial_query(query);
		self
	}

	fn with_specialization(mut self, specialization: String) -> Self {
		self.ui = self
			.ui
			.with_specialization(SpecializationFilter::from_value(&specialization));
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.ui = self.ui.with_theme_name(&theme);
		}
		self
	}

	fn finish(self) -> DirectoryUi {
		self.ui
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;
	use crate::settings::DirectoryChoice;

	fn config(directory: DirectoryChoice) -> ResolvedConfig {
		ResolvedConfig {
			directory,
			title: None,
			initial_query: String::new(),
			specialization: String::new(),
			theme: None,
			list_title: None,
			log_level: "info".into(),
		}
	}

	#[test]
	fn builtin_directory_lists_both_doctors() {
		let workflow = DirectoryWorkflow::from_config(config(DirectoryChoice::Builtin)).expect("load");
		let names: Vec<_> = workflow.list().iter().map(|record| record.name.clone()).collect();
		assert_eq!(names, vec!["Dr. Rajesh Patel", "Dr. Neha Gupta"]);
	}

	#[test]
	fn list_applies_configured_filters() {
		let mut config = config(DirectoryChoice::Builtin);
		config.specialization = "Dermatology".into();
		let workflow = DirectoryWorkflow::from_config(config).expect("load");
		let list = workflow.list();
		assert_eq!(list.len(), 1);
		assert_eq!(list[0].name, "Dr. Neha Gupta");
	}

	#[test]
	fn seed_file_records_are_loaded() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("doctors.json");
		fs::write(
			&path,
			r#"[{"id": 9, "name": "Dr. Ana Silva", "specialization": "Neurology", "slots": ["Mon 9 AM"]}]"#,
		)
		.expect("write seed");

		let workflow =
			DirectoryWorkflow::from_config(config(DirectoryChoice::Configured(path))).expect("load");
		let list = workflow.list();
		assert_eq!(list.len(), 1);
		assert_eq!(list[0].specialization, "Neurology");
	}

	#[test]
	fn invalid_seed_file_is_reported_with_context() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("doctors.json");
		fs::write(&path, "not json").expect("write seed");

		let err = DirectoryWorkflow::from_config(config(DirectoryChoice::Configured(path)))
			.err()
			.expect("invalid seed");
		assert!(err.to_string().contains("failed to load the directory"));
	}
}
