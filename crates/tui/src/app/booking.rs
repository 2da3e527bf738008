use std::sync::Arc;

use medibook_core::{BookingForm, DoctorRecord, FormField};
use ratatui::style::Style;

use crate::components::BookingFocus;
use crate::input::QueryInput;

/// Widget state of the open booking modal.
///
/// The session itself lives in the clinic; the pane only tracks focus, the
/// slot cursor and the text typed into each field.
pub(crate) struct BookingPane<'a> {
	pub(crate) doctor: Arc<DoctorRecord>,
	pub(crate) focus: BookingFocus,
	pub(crate) slot_cursor: usize,
	pub(crate) fields: Vec<(FormField, QueryInput<'a>)>,
}

impl<'a> BookingPane<'a> {
	pub(crate) fn new(doctor: Arc<DoctorRecord>, placeholder_style: Style) -> Self {
		let fields = FormField::ALL
			.into_iter()
			.map(|field| {
				let input = QueryInput::default().with_placeholder(field.placeholder(), placeholder_style);
				(field, input)
			})
			.collect();
		Self {
			doctor,
			focus: BookingFocus::Slots,
			slot_cursor: 0,
			fields,
		}
	}

	/// Move focus forward: slots, each field in order, then the submit button.
	pub(crate) fn focus_next(&mut self) {
		self.focus = match self.focus {
			BookingFocus::Slots if !self.fields.is_empty() => BookingFocus::Field(0),
			BookingFocus::Slots => BookingFocus::Submit,
			BookingFocus::Field(index) if index + 1 < self.fields.len() => {
				BookingFocus::Field(index + 1)
			}
			BookingFocus::Field(_) => BookingFocus::Submit,
			BookingFocus::Submit => BookingFocus::Slots,
		};
	}

	pub(crate) fn focus_previous(&mut self) {
		let last_field = self.fields.len().checked_sub(1);
		self.focus = match self.focus {
			BookingFocus::Slots => BookingFocus::Submit,
			BookingFocus::Field(0) => BookingFocus::Slots,
			BookingFocus::Field(index) => BookingFocus::Field(index - 1),
			BookingFocus::Submit => match last_field {
				Some(index) => BookingFocus::Field(index),
				None => BookingFocus::Slots,
			},
		};
	}

	/// Move the slot cursor by `delta`, wrapping at both ends.
	pub(crate) fn move_slot_cursor(&mut self, delta: isize) {
		let len = self.doctor.slots.len();
		if len == 0 {
			return;
		}
		let current = self.slot_cursor.min(len - 1) as isize;
		self.slot_cursor = (current + delta).rem_euclid(len as isize) as usize;
	}

	/// Slot label under the cursor.
	pub(crate) fn cursor_slot(&self) -> Option<&str> {
		self.doctor.slots.get(self.slot_cursor).map(String::as_str)
	}

	pub(crate) fn focused_input_mut(&mut self) -> Option<&mut QueryInput<'a>> {
		match self.focus {
			BookingFocus::Field(index) => self.fields.get_mut(index).map(|(_, input)| input),
			_ => None,
		}
	}

	/// Collect the typed values into a form.
	pub(crate) fn form(&self) -> BookingForm {
		let mut form = BookingForm::default();
		for (field, input) in &self.fields {
			*form.value_mut(*field) = input.text().to_string();
		}
		form
	}

	/// Put focus on `field`, used after a validation failure.
	pub(crate) fn focus_field(&mut self, field: FormField) {
		if let Some(index) = self.fields.iter().position(|(candidate, _)| *candidate == field) {
			self.focus = BookingFocus::Field(index);
		}
	}
}
