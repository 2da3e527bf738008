//! Declarative list view derived from a filtered directory slice.

use std::sync::Arc;

use crate::record::{DoctorId, DoctorRecord};

/// Number of bio characters shown on a list card.
pub const BIO_EXCERPT_CHARS: usize = 80;

/// One visual unit of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCard {
	/// Target of the card's single "Book" action.
	pub id: DoctorId,
	pub name: String,
	pub specialization: String,
	pub experience: String,
	pub fee: String,
	pub bio_excerpt: String,
	pub image_url: String,
	/// False for doctors without slots; their Book action is disabled.
	pub bookable: bool,
}

impl DoctorCard {
	fn from_record(record: &DoctorRecord) -> Self {
		Self {
			id: record.id,
			name: record.name.clone(),
			specialization: record.specialization.clone(),
			experience: record.experience_label.clone(),
			fee: record.fee_label.clone(),
			bio_excerpt: bio_excerpt(&record.bio),
			image_url: record.image_url.clone(),
			bookable: record.is_bookable(),
		}
	}
}

/// The complete content of the list view.
///
/// A `CardList` always describes the whole view; surfaces discard whatever they
/// showed before and draw it from scratch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardList {
	pub cards: Vec<DoctorCard>,
}

impl CardList {
	#[must_use]
	pub fn len(&self) -> usize {
		self.cards.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.cards.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&DoctorCard> {
		self.cards.get(index)
	}

	/// Position of the card for `id`, if visible.
	#[must_use]
	pub fn position(&self, id: DoctorId) -> Option<usize> {
		self.cards.iter().position(|card| card.id == id)
	}
}

/// Build the list view for `list`. Pure: equal input gives equal output.
#[must_use]
pub fn render_cards(list: &[Arc<DoctorRecord>]) -> CardList {
	CardList {
		cards: list.iter().map(|record| DoctorCard::from_record(record)).collect(),
	}
}

fn bio_excerpt(bio: &str) -> String {
	let mut excerpt: String = bio.chars().take(BIO_EXCERPT_CHARS).collect();
	excerpt.push_str("...");
	excerpt
}
