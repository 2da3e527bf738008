//! Booking session state machine.
//!
//! ```text
//! Closed --open--> Open(doctor) --select--> SlotSelected(doctor, slot)
//!   ^                 |  ^                      |   |
//!   |                 |  +---- (open again) ----+   | select (replace)
//!   +---- close ------+-------- close / submit -----+
//! ```

mod confirmation;
mod form;

use std::sync::Arc;

pub use confirmation::BookingConfirmation;
pub use form::{BookingForm, FormField};

use crate::error::BookingError;
use crate::events::{BookingEvent, ListenerId, Listeners};
use crate::record::{DoctorId, DoctorRecord};
use crate::store::DirectoryStore;

/// Where the session currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookingState {
	#[default]
	Closed,
	Open {
		doctor: Arc<DoctorRecord>,
	},
	SlotSelected {
		doctor: Arc<DoctorRecord>,
		slot: String,
	},
}

impl BookingState {
	/// The doctor being booked, if a session is open.
	#[must_use]
	pub fn doctor(&self) -> Option<&Arc<DoctorRecord>> {
		match self {
			Self::Closed => None,
			Self::Open { doctor } | Self::SlotSelected { doctor, .. } => Some(doctor),
		}
	}

	#[must_use]
	pub fn selected_slot(&self) -> Option<&str> {
		match self {
			Self::SlotSelected { slot, .. } => Some(slot),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		!matches!(self, Self::Closed)
	}
}

/// The single live booking interaction.
#[derive(Debug, Default)]
pub struct BookingSession {
	state: BookingState,
	listeners: Listeners<BookingEvent>,
}

impl BookingSession {
	#[must_use]
	pub fn state(&self) -> &BookingState {
		&self.state
	}

	/// Whether `slot` is the one currently marked as selected.
	#[must_use]
	pub fn is_selected(&self, slot: &str) -> bool {
		self.state.selected_slot() == Some(slot)
	}

	/// Start booking `id`, discarding any session in progress.
	///
	/// Unknown ids and doctors without slots are declined and leave the
	/// current state untouched.
	pub fn open(
		&mut self,
		store: &DirectoryStore,
		id: DoctorId,
	) -> Result<Arc<DoctorRecord>, BookingError> {
		let doctor = match store.find_by_id(id) {
			Ok(doctor) if doctor.is_bookable() => Arc::clone(doctor),
			Ok(doctor) => {
				log::info!("declined to open booking for {}: no open slots", doctor.name);
				let error = BookingError::NotBookable {
					id,
					name: doctor.name.clone(),
				};
				return Err(self.decline(id, error));
			}
			Err(_) => {
				log::warn!("declined to open booking for unknown doctor id {id}");
				return Err(self.decline(id, BookingError::RecordNotFound { id }));
			}
		};

		if let Some(previous) = self.state.doctor() {
			log::debug!("discarding booking in progress for {}", previous.name);
		}
		log::debug!("opened booking for {} ({})", doctor.name, doctor.id);
		self.state = BookingState::Open {
			doctor: Arc::clone(&doctor),
		};
		self.listeners.emit(&BookingEvent::Opened {
			doctor: Arc::clone(&doctor),
		});
		Ok(doctor)
	}

	fn decline(&mut self, id: DoctorId, error: BookingError) -> BookingError {
		self.listeners.emit(&BookingEvent::OpenDeclined {
			id,
			error: error.clone(),
		});
		error
	}

	/// Mark `slot` as the tentative selection, replacing any earlier one.
	pub fn select_slot(&mut self, slot: &str) -> Result<(), BookingError> {
		let doctor = self.state.doctor().ok_or(BookingError::NoActiveSession)?;
		if !doctor.offers_slot(slot) {
			return Err(BookingError::UnknownSlot {
				slot: slot.to_string(),
				doctor: doctor.name.clone(),
			});
		}
		if self.is_selected(slot) {
			return Ok(());
		}

		let doctor = Arc::clone(doctor);
		let id = doctor.id;
		self.state = BookingState::SlotSelected {
			doctor,
			slot: slot.to_string(),
		};
		self.listeners.emit(&BookingEvent::SlotSelected {
			doctor: id,
			slot: slot.to_string(),
		});
		Ok(())
	}

	/// Confirm the booking.
	///
	/// On success the form's contents move into the confirmation, leaving the
	/// form empty, and the session closes. Without a selected slot the call
	/// fails with [`BookingError::MissingSlotSelection`] and nothing changes.
	pub fn submit(&mut self, form: &mut BookingForm) -> Result<BookingConfirmation, BookingError> {
		let (doctor, slot) = match &self.state {
			BookingState::Closed => return Err(BookingError::NoActiveSession),
			BookingState::Open { .. } => {
				let error = BookingError::MissingSlotSelection;
				self.listeners.emit(&BookingEvent::SubmitRejected {
					error: error.clone(),
				});
				return Err(error);
			}
			BookingState::SlotSelected { doctor, slot } => (Arc::clone(doctor), slot.clone()),
		};

		let confirmation = BookingConfirmation {
			doctor_id: doctor.id,
			doctor_name: doctor.name.clone(),
			slot,
			patient: std::mem::take(form),
		};
		self.state = BookingState::Closed;
		log::info!(
			"booking confirmed: doctor={} slot={:?} patient={:?} phone={:?} email={:?} concern={:?}",
			confirmation.doctor_name,
			confirmation.slot,
			confirmation.patient.name,
			confirmation.patient.phone,
			confirmation.patient.email,
			confirmation.patient.concern,
		);
		self.listeners
			.emit(&BookingEvent::Confirmed(confirmation.clone()));
		Ok(confirmation)
	}

	/// Dismiss the session unconditionally.
	pub fn close(&mut self) {
		let previous = std::mem::take(&mut self.state);
		if let Some(doctor) = previous.doctor() {
			log::debug!("closed booking for {} without confirming", doctor.name);
			self.listeners
				.emit(&BookingEvent::Cancelled { doctor: doctor.id });
		}
	}

	/// Alias of [`close`](Self::close).
	pub fn cancel(&mut self) {
		self.close();
	}

	/// Register a callback for every session transition.
	pub fn on_event<F>(&mut self, callback: F) -> ListenerId
	where
		F: FnMut(&BookingEvent) + 'static,
	{
		self.listeners.subscribe(callback)
	}

	pub fn remove_listener(&mut self, id: ListenerId) -> bool {
		self.listeners.unsubscribe(id)
	}
}

#[cfg(test)]
mod tests;
