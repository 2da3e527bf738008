use std::collections::HashMap;
use std::sync::Arc;

use crate::error::DirectoryError;
use crate::record::{DoctorId, DoctorRecord};
use crate::seed::{BuiltinSeed, DirectorySource};

/// Immutable set of doctor records for the session.
///
/// Records are shared as `Arc`s so booking sessions and rendered cards can hold
/// onto a doctor without copying it. Insertion order is the display order.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
	records: Vec<Arc<DoctorRecord>>,
	by_id: HashMap<DoctorId, usize>,
}

impl DirectoryStore {
	/// Build a store, rejecting duplicate ids.
	///
	/// Records without slots are kept; they are listed but cannot be booked.
	pub fn from_records(records: Vec<DoctorRecord>) -> Result<Self, DirectoryError> {
		let mut by_id = HashMap::with_capacity(records.len());
		let mut stored = Vec::with_capacity(records.len());
		for (index, record) in records.into_iter().enumerate() {
			if by_id.insert(record.id, index).is_some() {
				return Err(DirectoryError::DuplicateId { id: record.id });
			}
			stored.push(Arc::new(record));
		}
		Ok(Self {
			records: stored,
			by_id,
		})
	}

	/// Populate a store from any [`DirectorySource`].
	pub fn load(source: &dyn DirectorySource) -> Result<Self, DirectoryError> {
		let records = source.load()?;
		let store = Self::from_records(records)?;
		log::debug!(
			"loaded {} doctor records from {}",
			store.len(),
			source.describe()
		);
		Ok(store)
	}

	/// Store populated from the bundled seed data.
	pub fn seeded() -> Self {
		Self::load(&BuiltinSeed).unwrap_or_else(|err| {
			log::warn!("built-in seed rejected, starting with an empty directory: {err}");
			Self::empty()
		})
	}

	pub fn empty() -> Self {
		Self {
			records: Vec::new(),
			by_id: HashMap::new(),
		}
	}

	/// Every record in insertion order.
	#[must_use]
	pub fn list(&self) -> &[Arc<DoctorRecord>] {
		&self.records
	}

	/// Exact-match lookup by id.
	pub fn find_by_id(&self, id: DoctorId) -> Result<&Arc<DoctorRecord>, DirectoryError> {
		self.by_id
			.get(&id)
			.and_then(|index| self.records.get(*index))
			.ok_or(DirectoryError::RecordNotFound { id })
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::seed::builtin_records;

	#[test]
	fn list_preserves_insertion_order() {
		let store = DirectoryStore::seeded();
		let ids: Vec<_> = store.list().iter().map(|record| record.id).collect();
		assert_eq!(ids, vec![DoctorId(1), DoctorId(2)]);
	}

	#[test]
	fn find_by_id_resolves_known_records() {
		let store = DirectoryStore::seeded();
		let record = store.find_by_id(DoctorId(2)).expect("record");
		assert_eq!(record.name, "Dr. Neha Gupta");
	}

	#[test]
	fn find_by_id_reports_missing_records() {
		let store = DirectoryStore::seeded();
		let err = store.find_by_id(DoctorId(999)).unwrap_err();
		assert!(matches!(err, DirectoryError::RecordNotFound { id } if id == DoctorId(999)));
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let mut records = builtin_records();
		records[1].id = DoctorId(1);
		let err = DirectoryStore::from_records(records).unwrap_err();
		assert!(matches!(err, DirectoryError::DuplicateId { id } if id == DoctorId(1)));
	}

	#[test]
	fn records_without_slots_are_listed() {
		let mut records = builtin_records();
		records.push(DoctorRecord::new(3, "Dr. On Leave", "Radiology"));
		let store = DirectoryStore::from_records(records).expect("store");

		assert_eq!(store.len(), 3);
		let on_leave = store.find_by_id(DoctorId(3)).expect("record");
		assert!(!on_leave.is_bookable());
	}

	#[test]
	fn seeded_store_matches_builtin_records() {
		assert_eq!(DirectoryStore::seeded().len(), builtin_records().len());
	}
}
