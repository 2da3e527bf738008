use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Inputs of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
	Name,
	Email,
	Phone,
	Concern,
}

impl FormField {
	/// Fields in the order the form shows them.
	pub const ALL: [FormField; 4] = [Self::Name, Self::Email, Self::Phone, Self::Concern];

	#[must_use]
	pub fn is_required(self) -> bool {
		matches!(self, Self::Name | Self::Phone)
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Name => "Name",
			Self::Email => "Email",
			Self::Phone => "Phone",
			Self::Concern => "Concern",
		}
	}

	#[must_use]
	pub fn placeholder(self) -> &'static str {
		match self {
			Self::Name => "Your Name",
			Self::Email => "Email (optional)",
			Self::Phone => "Phone Number",
			Self::Concern => "Describe concern...",
		}
	}
}

impl fmt::Display for FormField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Patient details captured by the booking form. Values are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
	pub name: String,
	pub phone: String,
	pub email: String,
	pub concern: String,
}

impl BookingForm {
	pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			phone: phone.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn value(&self, field: FormField) -> &str {
		match field {
			FormField::Name => &self.name,
			FormField::Email => &self.email,
			FormField::Phone => &self.phone,
			FormField::Concern => &self.concern,
		}
	}

	pub fn value_mut(&mut self, field: FormField) -> &mut String {
		match field {
			FormField::Name => &mut self.name,
			FormField::Email => &mut self.email,
			FormField::Phone => &mut self.phone,
			FormField::Concern => &mut self.concern,
		}
	}

	/// Required-field check performed by the form layer before submission.
	///
	/// Whitespace-only values count as empty.
	pub fn validate(&self) -> Result<(), FormError> {
		match FormField::ALL
			.into_iter()
			.filter(|field| field.is_required())
			.find(|field| self.value(*field).trim().is_empty())
		{
			Some(field) => Err(FormError::MissingField { field }),
			None => Ok(()),
		}
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		FormField::ALL
			.into_iter()
			.all(|field| self.value(field).is_empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn name_and_phone_are_required() {
		let err = BookingForm::default().validate().unwrap_err();
		assert_eq!(err, FormError::MissingField { field: FormField::Name });

		let err = BookingForm::new("A", "  ").validate().unwrap_err();
		assert_eq!(err, FormError::MissingField { field: FormField::Phone });
		assert_eq!(err.to_string(), "Phone is required");
	}

	#[test]
	fn optional_fields_may_stay_empty() {
		assert!(BookingForm::new("A", "123").validate().is_ok());
	}

	#[test]
	fn clear_resets_every_field() {
		let mut form = BookingForm {
			name: "A".into(),
			phone: "1".into(),
			email: "a@example.com".into(),
			concern: "rash".into(),
		};
		form.clear();
		assert!(form.is_empty());
	}
}
