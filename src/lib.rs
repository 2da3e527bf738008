//! Crate exports for building and running the `medibook` doctor directory.
//!
//! The root module re-exports the directory model from `medibook-core` and the
//! terminal front end from `medibook-tui` so embedders can configure the
//! application without digging through the workspace.

pub mod app_dirs;
pub mod logging;

pub use medibook_core::{
	BookingConfirmation, BookingError, BookingEvent, BookingForm, BookingSession, BookingState,
	BuiltinSeed, CardList, Clinic, DirectoryError, DirectorySource, DirectoryStore, DoctorCard,
	DoctorId, DoctorRecord, FilterEngine, FilterQuery, FormError, FormField, JsonFileSource,
	SpecializationFilter, builtin_records, filter, render_cards, specialization_options,
};
pub use medibook_tui::{
	App, DirectoryUi, SessionOutcome, Theme, UiLabels, builtin_themes, default_theme, run,
};

/// Theme registry of the terminal UI.
pub mod theme {
	pub use medibook_tui::style::{ThemeDescriptor, by_name, descriptors, names};
}
