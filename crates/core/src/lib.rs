//! Core types for the `medibook` doctor directory.
//!
//! The crate is split along the three pieces of behaviour the front end drives:
//! the immutable [`DirectoryStore`], the [`FilterEngine`] that derives the
//! visible card list, and the [`BookingSession`] state machine. [`Clinic`] owns
//! all three so front ends receive a single context object instead of reaching
//! for globals.

pub mod booking;
pub mod clinic;
pub mod engine;
pub mod error;
pub mod events;
pub mod filter;
pub mod record;
pub mod seed;
pub mod store;
pub mod view;

pub use booking::{BookingConfirmation, BookingForm, BookingSession, BookingState, FormField};
pub use clinic::Clinic;
pub use engine::FilterEngine;
pub use error::{BookingError, DirectoryError, FormError};
pub use events::{BookingEvent, ListenerId, Listeners};
pub use filter::{FilterQuery, SpecializationFilter, filter, specialization_options};
pub use record::{DoctorId, DoctorRecord};
pub use seed::{BuiltinSeed, DirectorySource, JsonFileSource, builtin_records};
pub use store::DirectoryStore;
pub use view::{BIO_EXCERPT_CHARS, CardList, DoctorCard, render_cards};
