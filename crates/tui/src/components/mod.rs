//! UI building blocks shared across rendering and state modules.

/// Booking modal: doctor detail, slot grid and patient form.
pub mod booking;
/// Centered dialogs for confirmations and notices.
pub mod dialog;
/// Operational log pane.
pub mod logs;
/// Search prompt and specialization selector.
pub mod prompt;
/// Table row construction and query highlighting.
pub mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use booking::{BookingContext, BookingFocus, render_booking};
pub use dialog::{centered_rect, render_confirmation, render_notice};
pub use logs::render_log_pane;
pub use prompt::{PromptContext, render_prompt};
pub use rows::build_doctor_rows;
pub use scrollbar::{RowWindow, render_scrollbar};
pub use tables::{TableSpec, doctor_headers, doctor_widths, render_table};
