use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use crate::components::{
	BookingContext, PromptContext, TableSpec, build_doctor_rows, doctor_headers, doctor_widths,
	render_booking, render_confirmation, render_log_pane, render_notice, render_prompt,
	render_table,
};

const LOG_PANE_HEIGHT: u16 = 8;

impl App<'_> {
	/// Draw one complete frame.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let mut constraints = vec![Constraint::Length(1), Constraint::Min(3)];
		if self.show_logs {
			constraints.push(Constraint::Length(LOG_PANE_HEIGHT));
		}
		constraints.push(Constraint::Length(1));
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints(constraints)
			.split(area);

		let specialization = self.current_specialization().to_string();
		let theme = self.theme;
		render_prompt(
			frame,
			PromptContext {
				input: &mut self.search_input,
				title: &self.ui.title,
				specialization: &specialization,
				focused: self.booking.is_none(),
				area: layout[0],
				theme: &theme,
			},
		);

		self.render_results(frame, layout[1]);
		if self.show_logs {
			render_log_pane(frame, layout[2], &self.log_state, &theme);
		}
		self.render_footer(frame, layout[layout.len() - 1]);

		self.render_overlays(frame, frame.area());
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let theme = self.theme;
		let query = self.clinic.query().text.clone();
		let title = self
			.ui
			.list_title_with_counts(self.clinic.visible().len(), self.clinic.store().len());
		let cards = &self.clinic.visible().cards;
		let spec = TableSpec {
			headers: doctor_headers(),
			widths: doctor_widths(),
			rows: build_doctor_rows(cards, &query, theme.highlight),
			title: Some(title),
			empty_message: Some(self.ui.empty_message.clone()),
		};
		render_table(
			frame,
			area,
			&mut self.table_state,
			&mut self.scrollbar_state,
			spec,
			&theme,
		);
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect) {
		let mut spans = vec![Span::styled(self.ui.hint.clone(), self.theme.empty)];
		if self.bookings_confirmed > 0 {
			spans.push(Span::raw("  "));
			spans.push(Span::styled(
				format!("{} booked", self.bookings_confirmed),
				self.theme.success,
			));
		}
		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}

	fn render_overlays(&mut self, frame: &mut Frame, area: Rect) {
		let theme = self.theme;
		if let Some(pane) = self.booking.as_mut() {
			let selected_slot = self.clinic.booking().selected_slot();
			render_booking(
				frame,
				area,
				BookingContext {
					doctor: &pane.doctor,
					selected_slot,
					slot_cursor: pane.slot_cursor,
					focus: pane.focus,
					fields: &mut pane.fields,
					theme: &theme,
				},
			);
		}
		if let Some(confirmation) = &self.confirmation {
			render_confirmation(frame, area, confirmation, &theme);
		}
		if let Some(message) = &self.notice {
			render_notice(frame, area, message, &theme);
		}
	}
}
