//! Application state and behaviour for the interactive directory.
//!
//! [`App`] owns the [`Clinic`](medibook_core::Clinic) context and the widget
//! state around it. The implementation is split into state construction,
//! key handling, the booking pane and rendering.

mod actions;
mod booking;
mod render;
mod state;

pub(crate) use booking::BookingPane;
pub use state::App;
