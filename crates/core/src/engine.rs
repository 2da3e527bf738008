use crate::events::{ListenerId, Listeners};
use crate::filter::{FilterQuery, SpecializationFilter, filter};
use crate::store::DirectoryStore;
use crate::view::{CardList, render_cards};

/// Keeps the current query and re-renders the list view whenever it changes.
///
/// Every refresh rebuilds the [`CardList`] from the store and hands the whole
/// list to the registered render callbacks; nothing is patched in place.
#[derive(Debug, Default)]
pub struct FilterEngine {
	query: FilterQuery,
	visible: CardList,
	renders: Listeners<CardList>,
}

impl FilterEngine {
	pub fn new(query: FilterQuery) -> Self {
		Self {
			query,
			..Self::default()
		}
	}

	#[must_use]
	pub fn query(&self) -> &FilterQuery {
		&self.query
	}

	/// The list view produced by the last refresh.
	#[must_use]
	pub fn visible(&self) -> &CardList {
		&self.visible
	}

	pub fn set_text(&mut self, store: &DirectoryStore, text: impl Into<String>) -> &CardList {
		self.query.text = text.into();
		self.refresh(store)
	}

	pub fn set_specialization(
		&mut self,
		store: &DirectoryStore,
		specialization: SpecializationFilter,
	) -> &CardList {
		self.query.specialization = specialization;
		self.refresh(store)
	}

	pub fn set_query(&mut self, store: &DirectoryStore, query: FilterQuery) -> &CardList {
		self.query = query;
		self.refresh(store)
	}

	/// Recompute the visible list from scratch and notify render callbacks.
	pub fn refresh(&mut self, store: &DirectoryStore) -> &CardList {
		let matches = filter(store.list(), &self.query);
		self.visible = render_cards(&matches);
		log::trace!(
			"rendered {} of {} doctors for query {:?}",
			self.visible.len(),
			store.len(),
			self.query
		);
		self.renders.emit(&self.visible);
		&self.visible
	}

	/// Register a callback that receives every freshly rendered list.
	pub fn on_render<F>(&mut self, callback: F) -> ListenerId
	where
		F: FnMut(&CardList) + 'static,
	{
		self.renders.subscribe(callback)
	}

	pub fn remove_render_listener(&mut self, id: ListenerId) -> bool {
		self.renders.unsubscribe(id)
	}
}
