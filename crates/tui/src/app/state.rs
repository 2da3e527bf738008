//! Core state container for the terminal front end.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use log::LevelFilter;
use medibook_core::{
	BookingConfirmation, BookingEvent, Clinic, FilterQuery, SpecializationFilter,
};
use ratatui::widgets::{ScrollbarState, TableState};
use tui_logger::TuiWidgetState;

use super::BookingPane;
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::outcome::SessionOutcome;
use crate::style::{Theme, default_theme};

/// Aggregate state shared across the terminal UI.
///
/// Booking overlays are driven by the events the clinic emits: the app
/// subscribes once at construction and drains the queued events after every
/// action.
pub struct App<'a> {
	pub(crate) clinic: Clinic,
	/// Text input widget for the search filter.
	pub search_input: QueryInput<'a>,
	pub(crate) specialization_index: usize,
	pub(crate) table_state: TableState,
	pub(crate) scrollbar_state: ScrollbarState,
	pub(crate) booking: Option<BookingPane<'a>>,
	pub(crate) notice: Option<String>,
	pub(crate) confirmation: Option<BookingConfirmation>,
	pub(crate) ui: UiLabels,
	/// Active colour theme.
	pub theme: Theme,
	pub(crate) show_logs: bool,
	pub(crate) log_state: TuiWidgetState,
	pub(crate) bookings_confirmed: usize,
	events: Rc<RefCell<VecDeque<BookingEvent>>>,
	list_changed: Rc<Cell<bool>>,
}

impl<'a> App<'a> {
	/// Wrap `clinic`, showing whatever query it already carries.
	pub fn new(mut clinic: Clinic) -> Self {
		let events = Rc::new(RefCell::new(VecDeque::new()));
		{
			let events = Rc::clone(&events);
			clinic.on_booking_event(move |event: &BookingEvent| {
				events.borrow_mut().push_back(event.clone());
			});
		}
		let list_changed = Rc::new(Cell::new(false));
		{
			let list_changed = Rc::clone(&list_changed);
			clinic.on_render(move |_| list_changed.set(true));
		}

		let query = clinic.query().clone();
		let specialization_index = clinic
			.specializations()
			.iter()
			.position(|option| *option == query.specialization)
			.unwrap_or(0);
		let ui = UiLabels::default();
		let theme = default_theme();
		let search_input =
			QueryInput::new(query.text.clone()).with_placeholder(ui.search_placeholder.clone(), theme.empty);

		let mut app = Self {
			clinic,
			search_input,
			specialization_index,
			table_state: TableState::default(),
			scrollbar_state: ScrollbarState::default(),
			booking: None,
			notice: None,
			confirmation: None,
			ui,
			theme,
			show_logs: false,
			log_state: TuiWidgetState::new().set_default_display_level(LevelFilter::Info),
			bookings_confirmed: 0,
			events,
			list_changed,
		};
		app.reset_selection();
		app
	}

	#[must_use]
	pub fn clinic(&self) -> &Clinic {
		&self.clinic
	}

	/// Apply a new theme.
	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.search_input = QueryInput::new(self.search_input.text().to_string())
			.with_placeholder(self.ui.search_placeholder.clone(), theme.empty);
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
		self.search_input = QueryInput::new(self.search_input.text().to_string())
			.with_placeholder(self.ui.search_placeholder.clone(), self.theme.empty);
	}

	/// Replace the search text and re-filter.
	pub fn set_search_text(&mut self, text: impl Into<String>) {
		let text = text.into();
		self.search_input.set_text(text.clone());
		self.clinic.set_search_text(text);
		self.sync_selection();
	}

	/// Select `specialization` if the directory offers it. Returns whether
	/// the selector moved.
	pub fn set_specialization(&mut self, specialization: &SpecializationFilter) -> bool {
		let Some(index) = self
			.clinic
			.specializations()
			.iter()
			.position(|option| option == specialization)
		else {
			log::warn!("specialization {specialization} is not offered by the directory");
			return false;
		};
		self.apply_specialization(index);
		true
	}

	pub(crate) fn cycle_specialization(&mut self, forward: bool) {
		let count = self.clinic.specializations().len();
		if count == 0 {
			return;
		}
		let next = if forward {
			(self.specialization_index + 1) % count
		} else {
			(self.specialization_index + count - 1) % count
		};
		self.apply_specialization(next);
	}

	fn apply_specialization(&mut self, index: usize) {
		self.specialization_index = index;
		let specialization = self
			.clinic
			.specializations()
			.get(index)
			.cloned()
			.unwrap_or_default();
		self.clinic.set_specialization(specialization);
		self.sync_selection();
	}

	/// The selector option currently applied.
	pub(crate) fn current_specialization(&self) -> SpecializationFilter {
		self.clinic.query().specialization.clone()
	}

	/// Reset the highlighted row after the list view was rebuilt.
	pub(crate) fn sync_selection(&mut self) {
		if self.list_changed.replace(false) {
			self.reset_selection();
		}
	}

	fn reset_selection(&mut self) {
		let selected = (!self.clinic.visible().is_empty()).then_some(0);
		self.table_state.select(selected);
		self.scrollbar_state = self.scrollbar_state.position(0);
	}

	/// Apply queued booking events to the overlays.
	pub(crate) fn drain_booking_events(&mut self) {
		loop {
			let Some(event) = self.events.borrow_mut().pop_front() else {
				break;
			};
			self.apply_booking_event(event);
		}
	}

	fn apply_booking_event(&mut self, event: BookingEvent) {
		match event {
			BookingEvent::Opened { doctor } => {
				self.booking = Some(BookingPane::new(doctor, self.theme.empty));
			}
			BookingEvent::OpenDeclined { error, .. } => {
				self.notice = Some(sentence_case(&error.to_string()));
			}
			BookingEvent::SlotSelected { slot, .. } => {
				log::debug!("slot {slot} selected");
			}
			BookingEvent::SubmitRejected { error } => {
				self.notice = Some(sentence_case(&error.to_string()));
			}
			BookingEvent::Confirmed(confirmation) => {
				self.booking = None;
				self.bookings_confirmed += 1;
				self.confirmation = Some(confirmation);
			}
			BookingEvent::Cancelled { .. } => {
				self.booking = None;
			}
		}
	}

	/// Summary handed back to the caller when the UI exits.
	#[must_use]
	pub fn outcome(&self) -> SessionOutcome {
		let FilterQuery {
			text,
			specialization,
		} = self.clinic.query();
		SessionOutcome {
			query: text.clone(),
			specialization: specialization.value().to_string(),
			bookings_confirmed: self.bookings_confirmed,
		}
	}
}

/// Upper-case the first character of a message.
pub(crate) fn sentence_case(message: &str) -> String {
	let mut chars = message.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
