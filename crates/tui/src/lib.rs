//! Interactive terminal UI for the `medibook` doctor directory.
//!
//! This crate contains the full TUI application: the builder, event loop,
//! rendering pipeline and state management, plus the reusable widgets and
//! style definitions that power it.

mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod runtime;
pub mod style;

pub use app::App;
pub use builder::DirectoryUi;
pub use config::UiLabels;
pub use outcome::SessionOutcome;
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::{Theme, builtin_themes, default_theme};
