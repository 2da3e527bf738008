use serde::Serialize;

/// Summary of an interactive session, returned when the UI exits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	/// Search text in effect when the user left.
	pub query: String,
	/// Specialization selector value; empty means every specialization.
	pub specialization: String,
	/// Number of bookings confirmed during the session.
	pub bookings_confirmed: usize,
}
