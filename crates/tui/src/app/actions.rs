use anyhow::Result;
use medibook_core::BookingError;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::sentence_case;
use crate::components::BookingFocus;
use crate::outcome::SessionOutcome;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome once the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SessionOutcome>> {
		let control = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c') if control => return Ok(Some(self.outcome())),
			KeyCode::Char('l') if control => {
				self.show_logs = !self.show_logs;
				return Ok(None);
			}
			_ => {}
		}

		if self.confirmation.is_some() {
			if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
				self.confirmation = None;
			}
			return Ok(None);
		}
		if self.notice.take().is_some() {
			return Ok(None);
		}

		let outcome = if self.booking.is_some() {
			self.handle_booking_key(key);
			None
		} else {
			self.handle_list_key(key)
		};
		self.drain_booking_events();
		Ok(outcome)
	}

	fn handle_list_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		match key.code {
			KeyCode::Esc => return Some(self.outcome()),
			KeyCode::Enter => self.open_selected(),
			KeyCode::Tab => self.cycle_specialization(true),
			KeyCode::BackTab => self.cycle_specialization(false),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				if self.search_input.input(key) {
					let text = self.search_input.text().to_string();
					self.clinic.set_search_text(text);
					self.sync_selection();
				}
			}
		}
		None
	}

	fn open_selected(&mut self) {
		let Some(card) = self
			.table_state
			.selected()
			.and_then(|index| self.clinic.visible().get(index))
		else {
			return;
		};
		if !card.bookable {
			self.notice = Some(format!("{} has no open slots", card.name));
			return;
		}
		let id = card.id;
		if let Err(error) = self.clinic.open_booking(id) {
			log::debug!("open declined: {error}");
		}
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		let len = self.clinic.visible().len();
		match self.table_state.selected() {
			Some(selected) if selected + 1 < len => self.table_state.select(Some(selected + 1)),
			None if len > 0 => self.table_state.select(Some(0)),
			_ => {}
		}
	}

	fn handle_booking_key(&mut self, key: KeyEvent) {
		let Some(pane) = self.booking.as_mut() else {
			return;
		};
		match key.code {
			KeyCode::Esc => {
				self.clinic.close_booking();
				return;
			}
			KeyCode::Tab => {
				pane.focus_next();
				return;
			}
			KeyCode::BackTab => {
				pane.focus_previous();
				return;
			}
			_ => {}
		}

		match pane.focus {
			BookingFocus::Slots => match key.code {
				KeyCode::Left | KeyCode::Up => pane.move_slot_cursor(-1),
				KeyCode::Right | KeyCode::Down => pane.move_slot_cursor(1),
				KeyCode::Enter | KeyCode::Char(' ') => self.select_cursor_slot(),
				_ => {}
			},
			BookingFocus::Field(_) => {
				if key.code == KeyCode::Enter {
					self.submit_booking();
				} else if let Some(input) = pane.focused_input_mut() {
					input.input(key);
				}
			}
			BookingFocus::Submit => {
				if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
					self.submit_booking();
				}
			}
		}
	}

	fn select_cursor_slot(&mut self) {
		let Some(slot) = self
			.booking
			.as_ref()
			.and_then(|pane| pane.cursor_slot())
			.map(str::to_string)
		else {
			return;
		};
		if let Err(error) = self.clinic.select_slot(&slot) {
			self.notice = Some(sentence_case(&error.to_string()));
		}
	}

	/// Validate the form, then hand it to the session.
	///
	/// Missing required fields are reported before the slot check, leaving
	/// the session untouched.
	fn submit_booking(&mut self) {
		let Some(pane) = self.booking.as_mut() else {
			return;
		};
		let mut form = pane.form();
		if let Err(error) = form.validate() {
			let medibook_core::FormError::MissingField { field } = error;
			pane.focus_field(field);
			self.notice = Some(sentence_case(&error.to_string()));
			return;
		}

		match self.clinic.submit_booking(&mut form) {
			Ok(confirmation) => log::debug!("submitted booking for {confirmation}"),
			Err(BookingError::MissingSlotSelection) => {
				if let Some(pane) = self.booking.as_mut() {
					pane.focus = BookingFocus::Slots;
				}
			}
			Err(error) => self.notice = Some(sentence_case(&error.to_string())),
		}
	}
}
