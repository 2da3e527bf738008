//! Centered overlays drawn on top of the directory.

use medibook_core::BookingConfirmation;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::style::Theme;

/// Carve a `width` x `height` rectangle out of the middle of `area`, clamped
/// to its bounds.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

/// Draw the "Appointment Booked!" dialog for `confirmation`.
pub fn render_confirmation(
	frame: &mut Frame,
	area: Rect,
	confirmation: &BookingConfirmation,
	theme: &Theme,
) {
	let rect = centered_rect(48, 9, area);
	frame.render_widget(Clear, rect);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.success)
		.title(Line::from(" Appointment Booked! ").alignment(Alignment::Center));
	let inner = block.inner(rect);
	frame.render_widget(block, rect);

	let rows = Layout::default()
		.direction(Direction::Vertical)
		.constraints([Constraint::Min(1), Constraint::Length(1)])
		.split(inner);

	let mut lines = vec![
		Line::from(""),
		Line::from(Span::styled(confirmation.doctor_name.clone(), theme.header)),
		Line::from(format!("Slot: {}", confirmation.slot)),
	];
	if !confirmation.patient.name.trim().is_empty() {
		lines.push(Line::from(format!("Patient: {}", confirmation.patient.name.trim())));
	}
	let body = Paragraph::new(lines).alignment(Alignment::Center);
	frame.render_widget(body, rows[0]);

	let ok = Paragraph::new(Span::styled("[ OK ]", theme.focused_style()))
		.alignment(Alignment::Center);
	frame.render_widget(ok, rows[1]);
}

/// Draw a blocking notice such as a validation failure.
pub fn render_notice(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	let width = (message.chars().count() as u16).saturating_add(8).max(30);
	let rect = centered_rect(width, 5, area);
	frame.render_widget(Clear, rect);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.notice)
		.title(" Notice ");
	let body = Paragraph::new(vec![
		Line::from(Span::styled(message.to_string(), theme.notice)),
		Line::from(Span::styled("press any key", theme.empty)),
	])
	.alignment(Alignment::Center)
	.wrap(Wrap { trim: true })
	.block(block);
	frame.render_widget(body, rect);
}
