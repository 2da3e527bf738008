//! Single-line text inputs backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use tui_textarea::{CursorMove, TextArea};

/// A one-line editable field.
///
/// Line breaks are never inserted: Enter and Ctrl+M are left to the caller so
/// they can submit or move focus.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> QueryInput<'a> {
	/// Create an input holding `initial` with the cursor at the end.
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Set the dimmed text shown while the input is empty.
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>, style: Style) -> Self {
		self.textarea.set_placeholder_text(placeholder);
		self.textarea.set_placeholder_style(style);
		self
	}

	/// Current contents.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key to the input. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Replace the contents, keeping the placeholder.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.textarea.select_all();
		self.textarea.cut();
		self.textarea.insert_str(text.into());
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	/// Draw the input, showing the cursor only when `focused`.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, block: Option<Block<'a>>, focused: bool) {
		let cursor_style = if focused {
			Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor_style);
		if let Some(block) = block {
			self.textarea.set_block(block);
		} else {
			self.textarea.remove_block();
		}
		frame.render_widget(&self.textarea, area);
	}
}

fn is_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
