use ratatui::style::{Color, Modifier, Style};

/// Colours for every element of the directory UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Headers, borders and titles.
	pub header: Style,
	/// The highlighted table row and the selected slot.
	pub row_highlight: Style,
	/// Prompt title and specialization selector.
	pub prompt: Style,
	/// Empty states, placeholders and hints.
	pub empty: Style,
	/// Query matches and the focused control.
	pub highlight: Style,
	/// Confirmation dialog.
	pub success: Style,
	/// Blocking notices.
	pub notice: Style,
}

impl Theme {
	/// Border colour shared by tables and dialogs.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	/// Style for the slot currently marked as selected.
	#[must_use]
	pub fn selected_slot_style(&self) -> Style {
		self.row_highlight.add_modifier(Modifier::BOLD)
	}

	/// Style for the slot or button under the keyboard cursor.
	#[must_use]
	pub fn focused_style(&self) -> Style {
		self.highlight.add_modifier(Modifier::REVERSED)
	}
}

/// A theme offered to the registry under a name and optional aliases.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	#[must_use]
	pub fn alias(self, alias: impl Into<String>) -> Self {
		self.aliases([alias.into()])
	}

	#[must_use]
	pub fn aliases<I>(mut self, aliases: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.aliases.extend(aliases.into_iter().map(Into::into));
		self
	}
}

/// A registered theme as reported by [`descriptors`](super::descriptors).
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	pub name: String,
	pub aliases: Vec<String>,
	pub theme: Theme,
}
