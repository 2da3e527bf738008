//! Predicate used to derive the visible subset of the directory.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::record::DoctorRecord;

/// Category restriction applied on top of the free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SpecializationFilter {
	#[default]
	All,
	Only(String),
}

impl SpecializationFilter {
	/// Interpret a selector value, where the empty string means "all".
	#[must_use]
	pub fn from_value(value: &str) -> Self {
		if value.is_empty() {
			Self::All
		} else {
			Self::Only(value.to_string())
		}
	}

	/// The selector value, empty for [`SpecializationFilter::All`].
	#[must_use]
	pub fn value(&self) -> &str {
		match self {
			Self::All => "",
			Self::Only(value) => value,
		}
	}

	/// Exact, case-sensitive comparison against a record's category.
	#[must_use]
	pub fn matches(&self, specialization: &str) -> bool {
		match self {
			Self::All => true,
			Self::Only(value) => value == specialization,
		}
	}
}

impl fmt::Display for SpecializationFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::All => f.write_str("All specializations"),
			Self::Only(value) => f.write_str(value),
		}
	}
}

/// Current search inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
	pub text: String,
	pub specialization: SpecializationFilter,
}

impl FilterQuery {
	pub fn new(text: impl Into<String>, specialization: SpecializationFilter) -> Self {
		Self {
			text: text.into(),
			specialization,
		}
	}

	pub fn text(text: impl Into<String>) -> Self {
		Self::new(text, SpecializationFilter::All)
	}

	/// Whether the query lets every record through.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text.is_empty() && self.specialization == SpecializationFilter::All
	}

	fn accepts(&self, needle: &str, record: &DoctorRecord) -> bool {
		let text_match = needle.is_empty()
			|| record.name.to_lowercase().contains(needle)
			|| record.specialization.to_lowercase().contains(needle);
		text_match && self.specialization.matches(&record.specialization)
	}
}

/// Stable filter over `all`: the result keeps input order.
///
/// The text predicate is a case-insensitive substring match against the name or
/// the specialization; the specialization predicate is exact.
#[must_use]
pub fn filter(all: &[Arc<DoctorRecord>], query: &FilterQuery) -> Vec<Arc<DoctorRecord>> {
	let needle = query.text.to_lowercase();
	all.iter()
		.filter(|record| query.accepts(&needle, record))
		.cloned()
		.collect()
}

/// Selector options: "all" followed by each distinct specialization in
/// first-seen order.
#[must_use]
pub fn specialization_options(all: &[Arc<DoctorRecord>]) -> Vec<SpecializationFilter> {
	let mut seen = HashSet::new();
	let mut options = vec![SpecializationFilter::All];
	for record in all {
		if seen.insert(record.specialization.as_str()) {
			options.push(SpecializationFilter::Only(record.specialization.clone()));
		}
	}
	options
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::record::DoctorId;

	fn directory() -> Vec<Arc<DoctorRecord>> {
		[
			DoctorRecord::new(1, "Dr. Rajesh Patel", "Cardiology"),
			DoctorRecord::new(2, "Dr. Neha Gupta", "Dermatology"),
			DoctorRecord::new(3, "Dr. Anil Mehta", "Cardiology"),
			DoctorRecord::new(4, "Dr. Sara Khan", "Pediatrics"),
		]
		.into_iter()
		.map(Arc::new)
		.collect()
	}

	fn ids(records: &[Arc<DoctorRecord>]) -> Vec<DoctorId> {
		records.iter().map(|record| record.id).collect()
	}

	#[test]
	fn empty_query_is_identity() {
		let all = directory();
		assert_eq!(filter(&all, &FilterQuery::default()), all);
	}

	#[test]
	fn specialization_filter_keeps_only_exact_matches() {
		let all = directory();
		for option in specialization_options(&all).into_iter().skip(1) {
			let query = FilterQuery::new("", option.clone());
			let result = filter(&all, &query);
			let expected = all
				.iter()
				.filter(|record| record.specialization == option.value())
				.count();
			assert_eq!(result.len(), expected);
			assert!(result.iter().all(|record| record.specialization == option.value()));
		}
	}

	#[test]
	fn specialization_filter_is_case_sensitive() {
		let all = directory();
		let query = FilterQuery::new("", SpecializationFilter::from_value("cardiology"));
		assert!(filter(&all, &query).is_empty());
	}

	#[test]
	fn text_match_ignores_case() {
		let all = directory();
		let upper = filter(&all, &FilterQuery::text("DR. NEHA"));
		let lower = filter(&all, &FilterQuery::text("dr. neha"));
		assert_eq!(upper, lower);
		assert_eq!(ids(&upper), vec![DoctorId(2)]);
	}

	#[test]
	fn text_matches_specialization_substring() {
		let all = directory();
		let result = filter(&all, &FilterQuery::text("cardio"));
		assert_eq!(ids(&result), vec![DoctorId(1), DoctorId(3)]);
	}

	#[test]
	fn text_and_specialization_combine() {
		let all = directory();
		let query = FilterQuery::new("anil", SpecializationFilter::from_value("Cardiology"));
		assert_eq!(ids(&filter(&all, &query)), vec![DoctorId(3)]);

		let query = FilterQuery::new("neha", SpecializationFilter::from_value("Cardiology"));
		assert!(filter(&all, &query).is_empty());
	}

	#[test]
	fn options_list_distinct_specializations_in_first_seen_order() {
		let options = specialization_options(&directory());
		let values: Vec<_> = options.iter().map(SpecializationFilter::value).collect();
		assert_eq!(values, vec!["", "Cardiology", "Dermatology", "Pediatrics"]);
	}

	#[test]
	fn unusual_text_is_accepted_as_is() {
		let all = directory();
		assert!(filter(&all, &FilterQuery::text("<script>")).is_empty());
		assert_eq!(filter(&all, &FilterQuery::text(" ")).len(), all.len());
	}
}
