use anyhow::Result;
use medibook_core::{Clinic, DirectoryStore, FilterQuery, SpecializationFilter};

use crate::App;
use crate::config::UiLabels;
use crate::outcome::SessionOutcome;
use crate::style::Theme;

/// A small builder for configuring the interactive directory before running
/// it.
pub struct DirectoryUi {
	store: DirectoryStore,
	initial_query: String,
	specialization: SpecializationFilter,
	labels: Option<UiLabels>,
	theme: Option<Theme>,
}

impl DirectoryUi {
	/// Create a UI browsing `store`.
	pub fn new(store: DirectoryStore) -> Self {
		Self {
			store,
			initial_query: String::new(),
			specialization: SpecializationFilter::All,
			labels: None,
			theme: None,
		}
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	#[must_use]
	pub fn with_specialization(mut self, specialization: SpecializationFilter) -> Self {
		self.specialization = specialization;
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	/// Use a registered theme. Unknown names keep the default.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match crate::style::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => log::warn!("unknown theme '{name}', keeping the default"),
		}
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Assemble the [`App`] without starting the terminal.
	pub fn build<'a>(self) -> App<'a> {
		let query = FilterQuery::new(self.initial_query, self.specialization);
		let mut app = App::new(Clinic::with_query(self.store, query));
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app
	}

	/// Run the interactive directory with the configured options.
	pub fn run(self) -> Result<SessionOutcome> {
		let mut app = self.build();
		app.run()
	}
}
