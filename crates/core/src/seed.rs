//! Sources that populate the directory at startup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DirectoryError;
use crate::record::{DoctorId, DoctorRecord};

/// Produces the records a [`DirectoryStore`](crate::DirectoryStore) is built from.
///
/// Both bundled sources are synchronous. A networked source would implement the
/// same trait and be awaited by the caller before the store is constructed.
pub trait DirectorySource {
	/// Human-readable description used in logs and configuration summaries.
	fn describe(&self) -> String;

	/// Load every record, in display order.
	fn load(&self) -> Result<Vec<DoctorRecord>, DirectoryError>;
}

/// The fixed data set bundled with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSeed;

impl DirectorySource for BuiltinSeed {
	fn describe(&self) -> String {
		"built-in seed".to_string()
	}

	fn load(&self) -> Result<Vec<DoctorRecord>, DirectoryError> {
		Ok(builtin_records())
	}
}

/// A JSON array of records on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
	path: PathBuf,
}

impl JsonFileSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn error(&self, reason: impl ToString) -> DirectoryError {
		DirectoryError::Source {
			path: self.path.clone(),
			reason: reason.to_string(),
		}
	}
}

impl DirectorySource for JsonFileSource {
	fn describe(&self) -> String {
		self.path.display().to_string()
	}

	fn load(&self) -> Result<Vec<DoctorRecord>, DirectoryError> {
		let contents = fs::read_to_string(&self.path).map_err(|err| self.error(err))?;
		serde_json::from_str(&contents).map_err(|err| self.error(err))
	}
}

/// Records shipped with the application.
#[must_use]
pub fn builtin_records() -> Vec<DoctorRecord> {
	vec![
		DoctorRecord {
			id: DoctorId(1),
			name: "Dr. Rajesh Patel".into(),
			specialization: "Cardiology".into(),
			experience_label: "15 years".into(),
			languages_label: "English, Hindi, Gujarati, Marathi".into(),
			fee_label: "₹500-1000".into(),
			availability: "Available".into(),
			bio: "Senior cardiologist with experience at AIIMS Delhi. Specializes in coronary interventions and pacemaker implants.".into(),
			image_url: "https://placehold.co/200x200".into(),
			slots: vec![
				"Mon 10:00 AM".into(),
				"Tue 9:30 AM".into(),
				"Wed 11:00 AM".into(),
				"Fri 10:30 AM".into(),
			],
		},
		DoctorRecord {
			id: DoctorId(2),
			name: "Dr. Neha Gupta".into(),
			specialization: "Dermatology".into(),
			experience_label: "9 years".into(),
			languages_label: "English, Hindi".into(),
			fee_label: "₹600".into(),
			availability: "Available".into(),
			bio: "Cosmetic dermatologist specializing in skin rejuvenation treatments.".into(),
			image_url: "https://placehold.co/200x200".into(),
			slots: vec!["Tue 10 AM".into(), "Thu 2 PM".into(), "Sat 11 AM".into()],
		},
	]
}
