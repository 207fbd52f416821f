//! Explicit per-container item model.
//!
//! The rendered list derives from this store, never the other way round.
//! Entries are held in an insertion-ordered id index; replies live only
//! inside their parent's subtree and leave with it. The store holds at most
//! one paging affordance at any time.

use indexmap::IndexMap;
use ripple_gateway::{EntryId, FeedEntry, FeedReply, PagingAffordance};

/// Insertion-ordered entry collection plus paging and placeholder state.
#[derive(Debug, Default)]
pub struct FeedStore {
	entries: IndexMap<EntryId, FeedEntry>,
	paging: Option<PagingAffordance>,
	/// "No items yet" marker, rendered when the list is empty.
	placeholder: bool,
	/// Whether at least one server fragment has been merged; end-of-feed
	/// is only meaningful afterwards.
	synced: bool,
}

impl FeedStore {
	/// Creates an empty, never-synced store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Installs the initial server-rendered content.
	pub fn hydrate(&mut self, entries: Vec<FeedEntry>, paging: Option<PagingAffordance>) {
		self.placeholder = entries.is_empty();
		self.entries = entries.into_iter().map(|e| (e.id.clone(), e)).collect();
		self.paging = paging;
		self.synced = true;
	}

	/// Category-switch merge: discards the old set wholesale.
	pub fn replace_all(&mut self, entries: Vec<FeedEntry>, paging: Option<PagingAffordance>) {
		self.hydrate(entries, paging);
	}

	/// Page merge: appends entries and installs the fragment's affordance.
	///
	/// An absent affordance marks the end of the feed. An id re-sent by the
	/// server replaces the stored entry in place; the store does not defend
	/// against server-caused duplicates.
	pub fn append_page(&mut self, entries: Vec<FeedEntry>, paging: Option<PagingAffordance>) {
		for entry in entries {
			self.entries.insert(entry.id.clone(), entry);
		}
		self.paging = paging;
		self.synced = true;
	}

	/// Comment merge: puts the new entry first, removing any "no items"
	/// placeholder.
	pub fn prepend(&mut self, entry: FeedEntry) {
		self.placeholder = false;
		self.entries.shift_insert(0, entry.id.clone(), entry);
	}

	/// Reply merge under the parent matched by the reply's echoed parent
	/// id. Returns `false` when the parent is no longer present.
	pub fn append_reply(&mut self, reply: FeedReply) -> bool {
		match self.entries.get_mut(&reply.parent) {
			Some(parent) => {
				parent.replies.push(reply);
				true
			}
			None => false,
		}
	}

	/// Delete merge: removes the entry subtree, list order preserved.
	///
	/// Returns the number of nested replies that left with the entry, or
	/// `None` when the entry was not present.
	pub fn remove(&mut self, id: &EntryId) -> Option<usize> {
		self.entries.shift_remove(id).map(|e| e.replies.len())
	}

	/// Takes the paging affordance, leaving the loading-placeholder state.
	pub fn take_paging(&mut self) -> Option<PagingAffordance> {
		self.paging.take()
	}

	/// Puts a previously taken affordance back (failure recovery).
	pub fn restore_paging(&mut self, paging: Option<PagingAffordance>) {
		self.paging = paging;
	}

	/// The current paging affordance, if more pages exist.
	pub fn paging(&self) -> Option<&PagingAffordance> {
		self.paging.as_ref()
	}

	/// Number of top-level entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the store holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Whether the entry is currently rendered.
	pub fn contains(&self, id: &EntryId) -> bool {
		self.entries.contains_key(id)
	}

	/// Entry ids in render order.
	pub fn entry_ids(&self) -> Vec<EntryId> {
		self.entries.keys().cloned().collect()
	}

	/// The entry with the given id.
	pub fn entry(&self, id: &EntryId) -> Option<&FeedEntry> {
		self.entries.get(id)
	}

	/// Number of replies under an entry, `None` when the entry is absent.
	pub fn reply_count(&self, id: &EntryId) -> Option<usize> {
		self.entries.get(id).map(|e| e.replies.len())
	}

	/// Whether the "no items yet" placeholder is showing.
	pub fn has_placeholder(&self) -> bool {
		self.placeholder
	}

	/// Whether the feed has reached its last page: no affordance remains
	/// after at least one merge.
	pub fn is_end_of_feed(&self) -> bool {
		self.synced && self.paging.is_none()
	}
}
