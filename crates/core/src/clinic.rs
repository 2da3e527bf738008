use std::sync::Arc;

use crate::booking::{BookingConfirmation, BookingForm, BookingSession, BookingState};
use crate::engine::FilterEngine;
use crate::error::BookingError;
use crate::events::{BookingEvent, ListenerId};
use crate::filter::{FilterQuery, SpecializationFilter, specialization_options};
use crate::record::{DoctorId, DoctorRecord};
use crate::store::DirectoryStore;
use crate::view::CardList;

/// Owning context for one interactive session.
///
/// Holds the directory, the filter engine and the booking session so that
/// front ends receive every piece of state through a single value.
#[derive(Debug)]
pub struct Clinic {
	store: DirectoryStore,
	engine: FilterEngine,
	session: BookingSession,
	specializations: Vec<SpecializationFilter>,
}

impl Clinic {
	/// Create a context showing the whole directory.
	pub fn new(store: DirectoryStore) -> Self {
		Self::with_query(store, FilterQuery::default())
	}

	/// Create a context with an initial query already applied.
	pub fn with_query(store: DirectoryStore, query: FilterQuery) -> Self {
		let specializations = specialization_options(store.list());
		let mut engine = FilterEngine::new(query);
		engine.refresh(&store);
		Self {
			store,
			engine,
			session: BookingSession::default(),
			specializations,
		}
	}

	#[must_use]
	pub fn store(&self) -> &DirectoryStore {
		&self.store
	}

	#[must_use]
	pub fn query(&self) -> &FilterQuery {
		self.engine.query()
	}

	/// Cards currently shown in the list view.
	#[must_use]
	pub fn visible(&self) -> &CardList {
		self.engine.visible()
	}

	/// Selector options: "all" plus every specialization in the store.
	#[must_use]
	pub fn specializations(&self) -> &[SpecializationFilter] {
		&self.specializations
	}

	pub fn set_search_text(&mut self, text: impl Into<String>) -> &CardList {
		self.engine.set_text(&self.store, text)
	}

	pub fn set_specialization(&mut self, specialization: SpecializationFilter) -> &CardList {
		self.engine.set_specialization(&self.store, specialization)
	}

	pub fn set_query(&mut self, query: FilterQuery) -> &CardList {
		self.engine.set_query(&self.store, query)
	}

	/// Re-render the list view without changing the query.
	pub fn refresh(&mut self) -> &CardList {
		self.engine.refresh(&self.store)
	}

	#[must_use]
	pub fn booking(&self) -> &BookingState {
		self.session.state()
	}

	pub fn open_booking(&mut self, id: DoctorId) -> Result<Arc<DoctorRecord>, BookingError> {
		self.session.open(&self.store, id)
	}

	pub fn select_slot(&mut self, slot: &str) -> Result<(), BookingError> {
		self.session.select_slot(slot)
	}

	pub fn submit_booking(
		&mut self,
		form: &mut BookingForm,
	) -> Result<BookingConfirmation, BookingError> {
		self.session.submit(form)
	}

	pub fn close_booking(&mut self) {
		self.session.close();
	}

	/// Register a list-view render callback.
	pub fn on_render<F>(&mut self, callback: F) -> ListenerId
	where
		F: FnMut(&CardList) + 'static,
	{
		self.engine.on_render(callback)
	}

	/// Register a booking transition callback.
	pub fn on_booking_event<F>(&mut self, callback: F) -> ListenerId
	where
		F: FnMut(&BookingEvent) + 'static,
	{
		self.session.on_event(callback)
	}
}

impl Default for Clinic {
	fn default() -> Self {
		Self::new(DirectoryStore::seeded())
	}
}
