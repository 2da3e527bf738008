//! Logging bootstrap.
//!
//! Records go through the `log` facade into `tui-logger`, which buffers them
//! for the log pane of the terminal UI.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the `tui-logger` sink and apply `level`.
///
/// The sink is installed at most once per process; later calls only adjust
/// the level.
pub fn initialize(level: LevelFilter) {
	INIT.call_once(|| {
		if let Err(err) = tui_logger::init_logger(LevelFilter::Trace) {
			eprintln!("medibook: log capture unavailable: {err:?}");
		}
	});
	tui_logger::set_default_level(level);
	log::set_max_level(level);
}

/// Parse a level name such as `info` or `DEBUG`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	value.trim().parse().ok()
}
