use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a doctor within the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorId(pub u32);

impl fmt::Display for DoctorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<u32> for DoctorId {
	fn from(value: u32) -> Self {
		Self(value)
	}
}

/// One doctor as listed in the directory.
///
/// Records are created once when the store is populated and shared read-only
/// afterwards. All labels are display strings; none of them is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRecord {
	pub id: DoctorId,
	pub name: String,
	pub specialization: String,
	#[serde(rename = "experience", default)]
	pub experience_label: String,
	#[serde(rename = "languages", default)]
	pub languages_label: String,
	#[serde(rename = "fee", default)]
	pub fee_label: String,
	/// Shown to the user only; never checked when booking.
	#[serde(default)]
	pub availability: String,
	#[serde(default)]
	pub bio: String,
	#[serde(rename = "image", default)]
	pub image_url: String,
	/// Slot labels in display order.
	pub slots: Vec<String>,
}

impl DoctorRecord {
	/// Create a record with the given identity and empty display labels.
	pub fn new(id: impl Into<DoctorId>, name: impl Into<String>, specialization: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			specialization: specialization.into(),
			experience_label: String::new(),
			languages_label: String::new(),
			fee_label: String::new(),
			availability: String::new(),
			bio: String::new(),
			image_url: String::new(),
			slots: Vec::new(),
		}
	}

	pub fn with_slots<I, S>(mut self, slots: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.slots = slots.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
		self.bio = bio.into();
		self
	}

	/// Whether `slot` is one of this doctor's offered labels.
	#[must_use]
	pub fn offers_slot(&self, slot: &str) -> bool {
		self.slots.iter().any(|candidate| candidate == slot)
	}

	/// Whether the UI may start a booking for this doctor.
	#[must_use]
	pub fn is_bookable(&self) -> bool {
		!self.slots.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_reference_field_names() {
		let json = r#"{
			"id": 7,
			"name": "Dr. Test",
			"specialization": "Neurology",
			"experience": "3 years",
			"languages": "English",
			"fee": "₹400",
			"availability": "Available",
			"bio": "Short bio.",
			"image": "https://placehold.co/200x200",
			"slots": ["Mon 9 AM"]
		}"#;
		let record: DoctorRecord = serde_json::from_str(json).expect("record");
		assert_eq!(record.id, DoctorId(7));
		assert_eq!(record.experience_label, "3 years");
		assert_eq!(record.image_url, "https://placehold.co/200x200");
		assert!(record.offers_slot("Mon 9 AM"));
		assert!(!record.offers_slot("mon 9 am"));
	}
}
