//! Vertical scrollbar for the doctor table and the booking modal.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// How many rows exist versus how many fit on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowWindow {
	pub rows: usize,
	pub visible: usize,
}

impl RowWindow {
	/// Fit `rows` into a viewport `height` rows tall.
	#[must_use]
	pub fn fit(rows: usize, height: usize) -> Self {
		if rows == 0 || height == 0 {
			return Self::default();
		}
		Self {
			rows,
			visible: rows.min(height),
		}
	}

	/// True when some rows are off screen.
	#[must_use]
	pub fn overflows(self) -> bool {
		self.rows > self.visible
	}

	/// Furthest offset the table can scroll to.
	#[must_use]
	pub fn last_offset(self) -> usize {
		self.rows - self.visible
	}
}

/// Draw a scrollbar in the rightmost column of `area` when `window`
/// overflows, tracking `position`.
///
/// Returns the part of `area` left for the table.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	state: &mut ScrollbarState,
	window: RowWindow,
	position: usize,
	theme: &Theme,
) -> Rect {
	if !window.overflows() || area.width == 0 {
		return area;
	}

	*state = state
		.content_length(window.rows)
		.viewport_content_length(window.visible)
		.position(position);

	let column = Rect::new(area.right() - 1, area.y, 1, area.height);
	frame.render_stateful_widget(
		Scrollbar::new(ScrollbarOrientation::VerticalRight)
			.begin_symbol(None)
			.end_symbol(None)
			.thumb_symbol("┃")
			.track_symbol(Some("│"))
			.style(theme.border_style()),
		column,
		state,
	);

	Rect::new(area.x, area.y, area.width - 1, area.height)
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::*;

	#[test]
	fn short_list_fits() {
		let window = RowWindow::fit(2, 10);
		assert_eq!(window.visible, 2);
		assert_eq!(window.last_offset(), 0);
		assert!(!window.overflows());
	}

	#[test]
	fn long_list_overflows() {
		let window = RowWindow::fit(30, 10);
		assert_eq!(window.last_offset(), 20);
		assert!(window.overflows());
	}

	#[test]
	fn empty_inputs_give_empty_window() {
		assert_eq!(RowWindow::fit(0, 5), RowWindow::default());
		assert_eq!(RowWindow::fit(5, 0), RowWindow::default());
	}

	#[test]
	fn scrollbar_takes_one_column_only_when_needed() {
		let theme = crate::style::default_theme();
		let mut terminal = Terminal::new(TestBackend::new(20, 5)).expect("create terminal");
		let mut state = ScrollbarState::default();
		let mut remaining = Vec::new();
		terminal
			.draw(|frame| {
				let area = frame.area();
				remaining.push(render_scrollbar(
					frame,
					area,
					&mut state,
					RowWindow::fit(3, 5),
					0,
					&theme,
				));
				remaining.push(render_scrollbar(
					frame,
					area,
					&mut state,
					RowWindow::fit(12, 5),
					4,
					&theme,
				));
			})
			.expect("render frame");
		assert_eq!(remaining[0].width, 20);
		assert_eq!(remaining[1].width, 19);
	}
}
