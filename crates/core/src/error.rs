use std::path::PathBuf;

use thiserror::Error;

use crate::record::DoctorId;

/// Errors raised while building or querying the [`DirectoryStore`](crate::DirectoryStore).
#[derive(Debug, Error)]
pub enum DirectoryError {
	/// A lookup referenced an id that is not part of the directory.
	#[error("no doctor with id {id} in the directory")]
	RecordNotFound { id: DoctorId },

	/// Two records share the same identifier.
	#[error("doctor id {id} appears more than once")]
	DuplicateId { id: DoctorId },

	/// Seed data could not be read or decoded.
	#[error("failed to load doctor records from {path}: {reason}")]
	Source { path: PathBuf, reason: String },
}

/// Errors raised by [`BookingSession`](crate::BookingSession) transitions.
///
/// Every variant leaves the session state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
	/// `submit` was called before any slot was chosen.
	#[error("please select a slot")]
	MissingSlotSelection,

	/// `open` referenced an id that is not in the directory.
	#[error("no doctor with id {id} in the directory")]
	RecordNotFound { id: DoctorId },

	/// The doctor is listed but offers no slots to book.
	#[error("{name} has no open slots")]
	NotBookable { id: DoctorId, name: String },

	/// A slot or submit action arrived while no session was open.
	#[error("no booking is in progress")]
	NoActiveSession,

	/// The slot label is not offered by the open doctor.
	#[error("slot '{slot}' is not offered by {doctor}")]
	UnknownSlot { slot: String, doctor: String },
}

/// Required form fields rejected by [`BookingForm::validate`](crate::BookingForm::validate).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
	#[error("{field} is required")]
	MissingField { field: crate::booking::FormField },
}
