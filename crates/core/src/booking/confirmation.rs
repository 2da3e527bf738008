use std::fmt;

use serde::Serialize;

use super::BookingForm;
use crate::record::DoctorId;

/// Result of a successful submission. Shown once and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
	pub doctor_id: DoctorId,
	pub doctor_name: String,
	pub slot: String,
	pub patient: BookingForm,
}

impl fmt::Display for BookingConfirmation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} at {}", self.doctor_name, self.slot)
	}
}
