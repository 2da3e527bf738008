use std::sync::Arc;

use anyhow::Result;
use medibook::theme::ThemeDescriptor;
use medibook::{DoctorRecord, SessionOutcome};
use serde_json::json;

use super::OutputFormat;

/// Plain-text summary of an interactive session.
pub(crate) fn format_outcome_plain(outcome: &SessionOutcome) -> String {
	let specialization = if outcome.specialization.is_empty() {
		"all"
	} else {
		outcome.specialization.as_str()
	};
	format!(
		"{} booking(s) confirmed (query: '{}', specialization: {specialization})",
		outcome.bookings_confirmed, outcome.query
	)
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the session outcome in the chosen format.
pub(crate) fn print_outcome(format: OutputFormat, outcome: &SessionOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", format_outcome_plain(outcome)),
		OutputFormat::Json => println!("{}", format_outcome_json(outcome)?),
	}
	Ok(())
}

/// One line per theme: its name, then any aliases in parentheses.
pub(crate) fn format_themes(themes: &[ThemeDescriptor]) -> Vec<String> {
	themes
		.iter()
		.map(|theme| match theme.aliases.as_slice() {
			[] => theme.name.clone(),
			aliases => format!("{} ({})", theme.name, aliases.join(", ")),
		})
		.collect()
}

/// One line per record: id, name, specialization and fee separated by tabs.
pub(crate) fn format_directory_plain(records: &[Arc<DoctorRecord>]) -> String {
	records
		.iter()
		.map(|record| {
			format!(
				"{}\t{}\t{}\t{}",
				record.id, record.name, record.specialization, record.fee_label
			)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

pub(crate) fn format_directory_json(records: &[Arc<DoctorRecord>]) -> Result<String> {
	let payload: Vec<_> = records
		.iter()
		.map(|record| {
			json!({
				"id": record.id,
				"name": record.name,
				"specialization": record.specialization,
				"fee": record.fee_label,
			})
		})
		.collect();
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the filtered directory for `--list`.
pub(crate) fn print_directory(format: OutputFormat, records: &[Arc<DoctorRecord>]) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			if records.is_empty() {
				println!("No doctors match");
			} else {
				println!("{}", format_directory_plain(records));
			}
		}
		OutputFormat::Json => println!("{}", format_directory_json(records)?),
	}
	Ok(())
}
