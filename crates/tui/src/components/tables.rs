use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};

use crate::components::scrollbar::{RowWindow, render_scrollbar};
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
pub(crate) const TABLE_HIGHLIGHT_SPACING: HighlightSpacing = HighlightSpacing::WhenSelected;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: usize = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	/// Column headers.
	pub headers: Vec<String>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Optional title for the bordered table.
	pub title: Option<String>,
	/// Message drawn in place of rows when there are none.
	pub empty_message: Option<String>,
}

/// Default columns of the doctor table.
#[must_use]
pub fn doctor_headers() -> Vec<String> {
	["Name", "Specialization", "Experience", "Fee", "About"]
		.into_iter()
		.map(String::from)
		.collect()
}

/// Default column widths matching [`doctor_headers`].
#[must_use]
pub fn doctor_widths() -> Vec<Constraint> {
	vec![
		Constraint::Min(18),
		Constraint::Length(16),
		Constraint::Length(11),
		Constraint::Length(11),
		Constraint::Fill(1),
	]
}

/// Render the table inside a rounded border.
///
/// The whole table is drawn from `spec` on every call; nothing from the
/// previous frame is reused.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);
	render_configured_table(frame, inner, table_state, scrollbar_state, theme, spec);
}

fn render_configured_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
	spec: TableSpec<'_>,
) {
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(theme.border_style())
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let total_rows = spec.rows.len();
	let window = RowWindow::fit(
		total_rows,
		(area.height as usize).saturating_sub(TABLE_HEADER_ROWS),
	);
	let position = table_state.selected().unwrap_or(0);
	let table_area = render_scrollbar(frame, area, scrollbar_state, window, position, theme);

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(TABLE_HIGHLIGHT_SPACING)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	render_header_separator(frame, table_area, theme);

	if total_rows == 0
		&& let Some(message) = spec.empty_message
	{
		render_empty_message(frame, table_area, &message, theme);
	}
}

/// Rule drawn under the header row, inset by one column on each side.
fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height < 2 || area.width < 3 {
		return;
	}
	let rule = Rect::new(area.x + 1, area.y + 1, area.width - 2, 1);
	let line = Line::from(Span::styled(
		"─".repeat(rule.width as usize),
		theme.border_style(),
	));
	frame.render_widget(Paragraph::new(line), rule);
}

fn render_empty_message(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	let header_height = TABLE_HEADER_ROWS as u16;
	if area.height <= header_height {
		return;
	}
	let message_area = Rect {
		y: area.y + header_height,
		height: area.height - header_height,
		..area
	};
	let empty = Paragraph::new(message.to_string())
		.alignment(Alignment::Center)
		.style(theme.empty);
	frame.render_widget(empty, message_area);
}

#[cfg(test)]
mod tests {
	use medibook_core::{builtin_records, render_cards};
	use ratatui::{Terminal, backend::TestBackend};
	use std::sync::Arc;

	use super::*;
	use crate::components::build_doctor_rows;

	fn draw(spec_rows: usize) -> String {
		let records: Vec<_> = builtin_records().into_iter().map(Arc::new).collect();
		let cards = render_cards(&records[..spec_rows]);
		let theme = crate::style::default_theme();
		let mut terminal = Terminal::new(TestBackend::new(100, 10)).expect("create terminal");
		let mut table_state = TableState::default();
		let mut scrollbar_state = ScrollbarState::default();
		terminal
			.draw(|frame| {
				let spec = TableSpec {
					headers: doctor_headers(),
					widths: doctor_widths(),
					rows: build_doctor_rows(&cards.cards, "", theme.highlight),
					title: Some(" Doctors ".into()),
					empty_message: Some("No doctors match".into()),
				};
				render_table(
					frame,
					frame.area(),
					&mut table_state,
					&mut scrollbar_state,
					spec,
					&theme,
				);
			})
			.expect("render frame");
		terminal
			.backend()
			.buffer()
			.content
			.iter()
			.map(|cell| cell.symbol())
			.collect()
	}

	#[test]
	fn table_shows_headers_and_rows() {
		let rendered = draw(2);
		assert!(rendered.contains("Doctors"));
		assert!(rendered.contains("Specialization"));
		assert!(rendered.contains("Dr. Rajesh Patel"));
		assert!(rendered.contains("Dermatology"));
		assert!(!rendered.contains("No doctors match"));
	}

	#[test]
	fn empty_table_shows_message() {
		let rendered = draw(0);
		assert!(rendered.contains("No doctors match"));
	}
}
