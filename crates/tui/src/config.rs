/// Textual configuration for the directory UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title shown in the prompt row before the search input.
	pub title: String,
	/// Placeholder displayed while the search input is empty.
	pub search_placeholder: String,
	/// Title rendered above the doctor table.
	pub list_title: String,
	/// Message shown when no doctor matches the query.
	pub empty_message: String,
	/// Key hints rendered in the footer.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Find a doctor".to_string(),
			search_placeholder: "Search by name or specialization".to_string(),
			list_title: "Doctors".to_string(),
			empty_message: "No doctors match".to_string(),
			hint: "↑/↓ move · Enter book · Tab specialization · Ctrl+L logs · Esc quit"
				.to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the prompt title.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Replace the table title.
	#[must_use]
	pub fn with_list_title(mut self, title: impl Into<String>) -> Self {
		self.list_title = title.into();
		self
	}

	/// Table title decorated with the visible and total counts.
	#[must_use]
	pub fn list_title_with_counts(&self, visible: usize, total: usize) -> String {
		format!(" {} ({visible}/{total}) ", self.list_title)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn list_title_includes_counts() {
		let labels = UiLabels::default().with_list_title("Specialists");
		assert_eq!(labels.list_title_with_counts(1, 2), " Specialists (1/2) ");
	}
}
