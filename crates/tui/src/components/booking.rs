//! Booking modal: doctor detail, slot grid and patient form.

use medibook_core::{DoctorRecord, FormField};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, ScrollbarState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::components::dialog::centered_rect;
use crate::components::scrollbar::{RowWindow, render_scrollbar};
use crate::input::QueryInput;
use crate::style::Theme;

const MODAL_WIDTH: u16 = 76;
const LABEL_WIDTH: u16 = 10;
/// Gap, gap and submit row around the form fields.
const FORM_CHROME_ROWS: usize = 3;
const SLOT_GAP: &str = "  ";
pub(crate) const SUBMIT_LABEL: &str = "[ Confirm Booking ]";

/// Which control of the modal owns the keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingFocus {
	#[default]
	Slots,
	/// Index into the form field list.
	Field(usize),
	Submit,
}

/// Everything needed to draw one frame of the booking modal.
pub struct BookingContext<'a, 'i> {
	pub doctor: &'a DoctorRecord,
	pub selected_slot: Option<&'a str>,
	pub slot_cursor: usize,
	pub focus: BookingFocus,
	pub fields: &'a mut [(FormField, QueryInput<'i>)],
	pub theme: &'a Theme,
}

/// Draw the modal centered in `area`.
///
/// The modal grows with the doctor's detail and slot grid. When `area` is
/// too short, the detail and slots scroll so that the slot under the cursor,
/// or else the selected slot, stays on screen.
pub fn render_booking(frame: &mut Frame, area: Rect, context: BookingContext<'_, '_>) {
	let BookingContext {
		doctor,
		selected_slot,
		slot_cursor,
		focus,
		fields,
		theme,
	} = context;

	// One column stays free for the scrollbar.
	let text_width = usize::from(MODAL_WIDTH.min(area.width)).saturating_sub(3);
	let cursor = (focus == BookingFocus::Slots).then_some(slot_cursor);
	let grid = slot_grid(&doctor.slots, selected_slot, cursor, text_width, theme);

	let mut upper = detail_lines(doctor, text_width, theme);
	upper.push(Line::default());
	upper.push(Line::from(Span::styled("Available slots", theme.header)));
	let grid_top = upper.len();
	let anchor = cursor
		.or_else(|| selected_slot.and_then(|slot| doctor.slots.iter().position(|s| s == slot)))
		.and_then(|index| grid.line_of.get(index))
		.map(|line| grid_top + line);
	upper.extend(grid.lines);

	let footer_rows = fields.len() + FORM_CHROME_ROWS;
	let wanted = upper.len() + footer_rows + 2;
	let rect = centered_rect(MODAL_WIDTH, u16::try_from(wanted).unwrap_or(u16::MAX), area);
	frame.render_widget(Clear, rect);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(format!(" Book {} ", doctor.name))
		.title_bottom(Line::from(" Tab next · Space select slot · Enter submit · Esc close ").style(theme.empty));
	let inner = block.inner(rect);
	frame.render_widget(block, rect);

	let upper_rows = usize::from(inner.height).saturating_sub(footer_rows);
	let sections = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(upper_rows as u16),
			Constraint::Length(1),
			Constraint::Length(fields.len() as u16),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.split(inner);

	let window = RowWindow::fit(upper.len(), upper_rows);
	let offset = scroll_offset(window, anchor);
	let mut scrollbar = ScrollbarState::default();
	let text_area = render_scrollbar(frame, sections[0], &mut scrollbar, window, offset, theme);
	frame.render_widget(
		Paragraph::new(upper).scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0)),
		text_area,
	);

	render_fields(frame, sections[2], fields, focus, theme);

	let submit_style = if focus == BookingFocus::Submit {
		theme.focused_style()
	} else {
		theme.prompt
	};
	let submit = Paragraph::new(Span::styled(SUBMIT_LABEL, submit_style)).alignment(Alignment::Center);
	frame.render_widget(submit, sections[4]);
}

/// First line to show so that `anchor` is visible, preferring the top.
fn scroll_offset(window: RowWindow, anchor: Option<usize>) -> usize {
	if !window.overflows() {
		return 0;
	}
	let wanted = anchor.map_or(0, |line| (line + 1).saturating_sub(window.visible));
	wanted.min(window.last_offset())
}

/// Greedy word wrap to `width` columns. Words wider than a line are split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
	let width = width.max(1);
	let mut lines = Vec::new();
	let mut current = String::new();
	let mut used = 0;
	for word in text.split_whitespace() {
		let word_width = word.width();
		if used > 0 && used + 1 + word_width > width {
			lines.push(std::mem::take(&mut current));
			used = 0;
		}
		if word_width > width {
			for ch in word.chars() {
				let ch_width = ch.width().unwrap_or(0);
				if used > 0 && used + ch_width > width {
					lines.push(std::mem::take(&mut current));
					used = 0;
				}
				current.push(ch);
				used += ch_width;
			}
			continue;
		}
		if used > 0 {
			current.push(' ');
			used += 1;
		}
		current.push_str(word);
		used += word_width;
	}
	if !current.is_empty() {
		lines.push(current);
	}
	lines
}

fn styled_lines(text: &str, width: usize, style: Style) -> impl Iterator<Item = Line<'static>> {
	wrap_text(text, width)
		.into_iter()
		.map(move |line| Line::from(Span::styled(line, style)))
}

/// Doctor header, facts and the full bio, pre-wrapped to `width`.
fn detail_lines(doctor: &DoctorRecord, width: usize, theme: &Theme) -> Vec<Line<'static>> {
	let facts = [
		doctor.specialization.as_str(),
		doctor.experience_label.as_str(),
		doctor.fee_label.as_str(),
	]
	.into_iter()
	.filter(|value| !value.is_empty())
	.collect::<Vec<_>>()
	.join(" · ");

	let mut lines: Vec<Line<'static>> = styled_lines(&doctor.name, width, theme.header).collect();
	lines.extend(styled_lines(&facts, width, Style::default()));
	if !doctor.languages_label.is_empty() {
		let languages = format!("Languages: {}", doctor.languages_label);
		lines.extend(styled_lines(&languages, width, Style::default()));
	}
	if !doctor.availability.is_empty() {
		let availability = format!("Availability: {}", doctor.availability);
		lines.extend(styled_lines(&availability, width, theme.empty));
	}
	lines.extend(styled_lines(&doctor.bio, width, Style::default()));
	lines
}

/// Slot chips laid out in rows no wider than the modal.
pub(crate) struct SlotGrid {
	pub(crate) lines: Vec<Line<'static>>,
	/// Row of `lines` holding each slot, by slot index.
	pub(crate) line_of: Vec<usize>,
}

/// One chip per slot, the selection marked `[x]` and the cursor reversed.
/// Chips never break across rows.
pub(crate) fn slot_grid(
	slots: &[String],
	selected_slot: Option<&str>,
	cursor: Option<usize>,
	width: usize,
	theme: &Theme,
) -> SlotGrid {
	let mut grid = SlotGrid {
		lines: Vec::new(),
		line_of: Vec::with_capacity(slots.len()),
	};
	let mut row: Vec<Span<'static>> = Vec::new();
	let mut used = 0;
	for (index, slot) in slots.iter().enumerate() {
		let selected = selected_slot == Some(slot.as_str());
		let marker = if selected { "[x]" } else { "[ ]" };
		let chip = format!("{marker} {slot}");
		let chip_width = chip.width();

		if used > 0 && used + SLOT_GAP.len() + chip_width > width {
			grid.lines.push(Line::from(std::mem::take(&mut row)));
			used = 0;
		}
		if used > 0 {
			row.push(Span::raw(SLOT_GAP));
			used += SLOT_GAP.len();
		}

		let mut style = if selected {
			theme.selected_slot_style()
		} else {
			Style::default()
		};
		if cursor == Some(index) {
			style = style.patch(theme.focused_style());
		}
		row.push(Span::styled(chip, style));
		used += chip_width;
		grid.line_of.push(grid.lines.len());
	}
	if !row.is_empty() {
		grid.lines.push(Line::from(row));
	}
	grid
}

fn field_label(field: FormField) -> String {
	if field.is_required() {
		format!("{}*", field.label())
	} else {
		field.label().to_string()
	}
}

fn render_fields(
	frame: &mut Frame,
	area: Rect,
	fields: &mut [(FormField, QueryInput<'_>)],
	focus: BookingFocus,
	theme: &Theme,
) {
	let rows = Layout::default()
		.direction(Direction::Vertical)
		.constraints(vec![Constraint::Length(1); fields.len()])
		.split(area);

	for (index, (field, input)) in fields.iter_mut().enumerate() {
		let focused = focus == BookingFocus::Field(index);
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)])
			.split(rows[index]);
		let label_style = if focused { theme.highlight } else { theme.prompt };
		frame.render_widget(
			Paragraph::new(Span::styled(field_label(*field), label_style)),
			columns[0],
		);
		input.render(frame, columns[1], None, focused);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use medibook_core::builtin_records;
	use ratatui::{Terminal, backend::TestBackend};

	fn inputs() -> Vec<(FormField, QueryInput<'static>)> {
		FormField::ALL
			.into_iter()
			.map(|field| (field, QueryInput::default()))
			.collect()
	}

	#[test]
	fn required_fields_are_starred() {
		assert_eq!(field_label(FormField::Name), "Name*");
		assert_eq!(field_label(FormField::Phone), "Phone*");
		assert_eq!(field_label(FormField::Email), "Email");
	}

	#[test]
	fn only_the_selected_slot_is_marked() {
		let theme = Theme::default();
		let slots = vec!["Tue 10 AM".to_string(), "Thu 2 PM".to_string()];
		let grid = slot_grid(&slots, Some("Thu 2 PM"), None, 60, &theme);
		assert_eq!(grid.lines.len(), 1);
		let spans = &grid.lines[0].spans;
		let text: Vec<&str> = spans.iter().map(|span| span.content.as_ref()).collect();
		assert_eq!(text, vec!["[ ] Tue 10 AM", "  ", "[x] Thu 2 PM"]);
		assert_eq!(spans[2].style, theme.selected_slot_style());
	}

	#[test]
	fn slot_chips_wrap_without_splitting() {
		let theme = Theme::default();
		let slots: Vec<String> = (1..=5).map(|day| format!("Day{day} 9 AM")).collect();
		// "[ ] DayN 9 AM" is 13 columns; two chips and a gap fit in 30.
		let grid = slot_grid(&slots, None, None, 30, &theme);
		assert_eq!(grid.lines.len(), 3);
		assert_eq!(grid.line_of, vec![0, 0, 1, 1, 2]);
		for line in &grid.lines {
			assert!(line.width() <= 30);
		}
	}

	#[test]
	fn wrap_text_breaks_on_words_and_splits_long_ones() {
		assert_eq!(wrap_text("senior heart specialist", 12), vec!["senior heart", "specialist"]);
		assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
		assert!(wrap_text("   ", 10).is_empty());
	}

	#[test]
	fn scrolling_keeps_the_anchor_in_view() {
		let window = RowWindow::fit(20, 5);
		assert_eq!(scroll_offset(window, None), 0);
		assert_eq!(scroll_offset(window, Some(3)), 0);
		assert_eq!(scroll_offset(window, Some(12)), 8);
		assert_eq!(scroll_offset(window, Some(19)), 15);
		assert_eq!(scroll_offset(RowWindow::fit(4, 5), Some(3)), 0);
	}

	#[test]
	fn modal_renders_detail_slots_and_form() {
		let mut terminal = Terminal::new(TestBackend::new(90, 24)).expect("create terminal");
		let records = builtin_records();
		let doctor = &records[1];
		let mut fields = inputs();
		let theme = Theme::default();

		terminal
			.draw(|frame| {
				render_booking(
					frame,
					frame.area(),
					BookingContext {
						doctor,
						selected_slot: Some("Sat 11 AM"),
						slot_cursor: 0,
						focus: BookingFocus::Field(0),
						fields: &mut fields,
						theme: &theme,
					},
				);
			})
			.expect("render frame");

		let rendered: String = terminal
			.backend()
			.buffer()
			.content
			.iter()
			.map(|cell| cell.symbol())
			.collect();
		assert!(rendered.contains("Dr. Neha Gupta"));
		assert!(rendered.contains("[x] Sat 11 AM"));
		assert!(rendered.contains("[ ] Tue 10 AM"));
		assert!(rendered.contains("Name*"));
		assert!(rendered.contains("Phone*"));
		assert!(rendered.contains(SUBMIT_LABEL));
	}

	fn busy_doctor() -> DoctorRecord {
		let bio = format!("{} END-OF-BIO", "Consultant with long clinical experience. ".repeat(7));
		DoctorRecord::new(9, "Dr. Busy Person", "Radiology")
			.with_slots((1..=10).map(|day| format!("Day{day} 10:00 AM")))
			.with_bio(bio)
	}

	fn draw_modal(
		(width, height): (u16, u16),
		doctor: &DoctorRecord,
		selected: Option<&str>,
		focus: BookingFocus,
		cursor: usize,
	) -> String {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("create terminal");
		let mut fields = inputs();
		let theme = Theme::default();
		terminal
			.draw(|frame| {
				render_booking(
					frame,
					frame.area(),
					BookingContext {
						doctor,
						selected_slot: selected,
						slot_cursor: cursor,
						focus,
						fields: &mut fields,
						theme: &theme,
					},
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
	fn modal_grows_to_show_every_slot_and_the_whole_bio() {
		let doctor = busy_doctor();
		assert!(doctor.bio.chars().count() > 300);
		let rendered = draw_modal((120, 40), &doctor, Some("Day10 10:00 AM"), BookingFocus::Field(0), 0);

		for day in 1..=9 {
			assert!(rendered.contains(&format!("[ ] Day{day} 10:00 AM")), "slot {day} hidden");
		}
		assert!(rendered.contains("[x] Day10 10:00 AM"));
		assert!(rendered.contains("END-OF-BIO"));
		assert!(rendered.contains(SUBMIT_LABEL));
	}

	#[test]
	fn short_terminal_scrolls_to_the_slot_cursor() {
		let doctor = busy_doctor();
		let rendered = draw_modal((80, 16), &doctor, None, BookingFocus::Slots, 9);

		assert!(rendered.contains("Day10 10:00 AM"));
		assert!(rendered.contains("Name*"));
		assert!(rendered.contains(SUBMIT_LABEL));
	}

	#[test]
	fn short_terminal_scrolls_to_the_selected_slot() {
		let doctor = busy_doctor();
		let rendered = draw_modal((80, 16), &doctor, Some("Day10 10:00 AM"), BookingFocus::Submit, 0);

		assert!(rendered.contains("[x] Day10 10:00 AM"));
	}
}
