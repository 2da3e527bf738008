//! Observer registry used to notify presentation surfaces.

use std::fmt;
use std::sync::Arc;

use crate::booking::BookingConfirmation;
use crate::error::BookingError;
use crate::record::{DoctorId, DoctorRecord};

/// Handle returned by [`Listeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered set of callbacks for one event type.
///
/// Callbacks run synchronously, in subscription order, on the thread that
/// emits the event.
pub struct Listeners<E> {
	next_id: u64,
	entries: Vec<(ListenerId, Box<dyn FnMut(&E)>)>,
}

impl<E> Default for Listeners<E> {
	fn default() -> Self {
		Self {
			next_id: 0,
			entries: Vec::new(),
		}
	}
}

impl<E> fmt::Debug for Listeners<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Listeners")
			.field("count", &self.entries.len())
			.finish()
	}
}

impl<E> Listeners<E> {
	pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
	where
		F: FnMut(&E) + 'static,
	{
		let id = ListenerId(self.next_id);
		self.next_id += 1;
		self.entries.push((id, Box::new(callback)));
		id
	}

	/// Remove a callback. Returns `false` if it was not registered.
	pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
		let before = self.entries.len();
		self.entries.retain(|(entry, _)| *entry != id);
		self.entries.len() != before
	}

	pub fn emit(&mut self, event: &E) {
		for (_, callback) in &mut self.entries {
			callback(event);
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Transitions reported by the [`BookingSession`](crate::BookingSession).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEvent {
	/// A session opened; every slot is selectable and none is selected.
	Opened { doctor: Arc<DoctorRecord> },
	/// An open request was declined: the id is unknown or the doctor has no
	/// slots.
	OpenDeclined { id: DoctorId, error: BookingError },
	/// `slot` is now the only highlighted slot.
	SlotSelected { doctor: DoctorId, slot: String },
	/// Submission was refused; the session stays as it was.
	SubmitRejected { error: BookingError },
	/// The booking succeeded and the session closed.
	Confirmed(BookingConfirmation),
	/// The session was dismissed without booking.
	Cancelled { doctor: DoctorId },
}
