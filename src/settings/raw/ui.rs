use serde::Deserialize;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) specialization: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) list_title: Option<String>,
}

/// UI values with defaults filled in.
pub(super) struct FinalizedUi {
	pub(super) title: Option<String>,
	pub(super) initial_query: String,
	pub(super) specialization: String,
	pub(super) theme: Option<String>,
	pub(super) list_title: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(specialization) = cli.specialization.clone() {
			self.specialization = Some(specialization);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self) -> FinalizedUi {
		FinalizedUi {
			title: non_blank(self.title),
			initial_query: self.initial_query.unwrap_or_default(),
			specialization: self
				.specialization
				.map(|value| value.trim().to_string())
				.unwrap_or_default(),
			theme: non_blank(self.theme),
			list_title: non_blank(self.list_title),
		}
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}
