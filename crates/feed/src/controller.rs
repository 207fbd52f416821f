//! Per-container feed controller.
//!
//! Owns one container's state (active category, item store, pending-fetch
//! flag) and orchestrates category switches and page fetches. All state
//! lives behind a lock that is only held across synchronous sections; the
//! gateway awaits happen with the lock released, so handlers interleave
//! freely and a sequence number decides which response may touch the state.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use ripple_gateway::{
	EntryId, FeedEntry, FeedGateway, PageFragment, PagingAffordance,
};
use url::Url;

use crate::composer::Composer;
use crate::config::{CategoryId, ContainerId, FeedConfig, FeedKind};
use crate::error::{FeedError, FeedErrorKind, Result};
use crate::events::{EventSink, FeedEvent};
use crate::store::FeedStore;

/// Observable fetch state of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
	/// No page or category fetch in flight.
	Idle,
	/// The paging region shows the loading placeholder.
	Loading,
}

/// Outcome of a category switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
	/// The list was replaced with the fetched fragment.
	Switched {
		/// Entries in the new set.
		entries: usize,
	},
	/// The selected category was already active; no request was issued.
	AlreadyActive,
	/// A newer fetch superseded this one; the response was discarded.
	Stale,
}

/// Outcome of a page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
	/// The fragment's entries were appended.
	Appended {
		/// Entries appended to the list.
		appended: usize,
		/// Whether the response carried no further affordance.
		end_of_feed: bool,
	},
	/// A fetch was already pending; nothing was issued.
	AlreadyLoading,
	/// No affordance exists; the feed has no more pages.
	EndOfFeed,
	/// A newer fetch superseded this one; the response was discarded.
	Stale,
}

pub(crate) struct ContainerState {
	pub(crate) active_category: CategoryId,
	pub(crate) pending_fetch: bool,
	/// Monotonic fetch sequence; a completion only applies when its
	/// captured value still matches.
	pub(crate) fetch_seq: u64,
	pub(crate) loading: LoadingState,
	pub(crate) last_error: Option<FeedErrorKind>,
	pub(crate) store: FeedStore,
	pub(crate) composer: Composer,
	pub(crate) reply_composers: HashMap<EntryId, Composer>,
}

/// One feed container's controller; bind one per container marker.
///
/// Containers on the same page are fully independent: each controller owns
/// its own store, composers, and event sink.
pub struct FeedController {
	config: FeedConfig,
	gateway: Arc<dyn FeedGateway>,
	events: EventSink,
	state: RwLock<ContainerState>,
}

impl FeedController {
	/// Binds a controller to a container marker.
	pub fn bind(config: FeedConfig, gateway: Arc<dyn FeedGateway>) -> Self {
		Self {
			config,
			gateway,
			events: EventSink::new(),
			state: RwLock::new(ContainerState {
				active_category: CategoryId::all(),
				pending_fetch: false,
				fetch_seq: 0,
				loading: LoadingState::Idle,
				last_error: None,
				store: FeedStore::new(),
				composer: Composer::new(),
				reply_composers: HashMap::new(),
			}),
		}
	}

	/// Installs the initial server-rendered content.
	pub fn hydrate(&self, entries: Vec<FeedEntry>, paging: Option<PagingAffordance>) {
		self.state.write().store.hydrate(entries, paging);
	}

	/// The container id scoping events and diagnostics.
	pub fn container_id(&self) -> &ContainerId {
		&self.config.container
	}

	/// Which vocabulary this container speaks.
	pub fn kind(&self) -> FeedKind {
		self.config.kind
	}

	/// Whether the binding marker opted into scroll-driven paging.
	pub fn infinite_scroll_enabled(&self) -> bool {
		self.config.infinite_scroll
	}

	/// Registers a subscriber for this container's events.
	pub fn subscribe(&self, subscriber: impl Fn(&FeedEvent) + Send + Sync + 'static) {
		self.events.subscribe(subscriber);
	}

	/// The currently active category filter.
	pub fn active_category(&self) -> CategoryId {
		self.state.read().active_category.clone()
	}

	/// Whether a page or category fetch is in flight.
	pub fn pending_fetch(&self) -> bool {
		self.state.read().pending_fetch
	}

	/// Observable loading state of the paging region.
	pub fn loading_state(&self) -> LoadingState {
		self.state.read().loading
	}

	/// Kind of the most recent failure, cleared by the next success.
	pub fn last_error(&self) -> Option<FeedErrorKind> {
		self.state.read().last_error
	}

	/// Number of rendered top-level entries.
	pub fn len(&self) -> usize {
		self.state.read().store.len()
	}

	/// Whether the list holds no entries.
	pub fn is_empty(&self) -> bool {
		self.state.read().store.is_empty()
	}

	/// Entry ids in render order.
	pub fn entry_ids(&self) -> Vec<EntryId> {
		self.state.read().store.entry_ids()
	}

	/// Whether the entry is currently rendered.
	pub fn contains(&self, id: &EntryId) -> bool {
		self.state.read().store.contains(id)
	}

	/// Number of replies under an entry, `None` when the entry is absent.
	pub fn reply_count(&self, id: &EntryId) -> Option<usize> {
		self.state.read().store.reply_count(id)
	}

	/// Whether a "load more" affordance is present.
	pub fn has_paging(&self) -> bool {
		self.state.read().store.paging().is_some()
	}

	/// URL of the current paging affordance.
	pub fn paging_url(&self) -> Option<Url> {
		self.state.read().store.paging().map(|p| p.url.clone())
	}

	/// Whether the "no items yet" placeholder is showing.
	pub fn has_placeholder(&self) -> bool {
		self.state.read().store.has_placeholder()
	}

	/// Whether the feed has reached its last page.
	pub fn is_end_of_feed(&self) -> bool {
		self.state.read().store.is_end_of_feed()
	}

	/// Switches the active category filter and replaces the list from the
	/// category's fragment.
	///
	/// Switching to the already-active category is a no-op: no request is
	/// issued and the list is unchanged. A switch supersedes any in-flight
	/// fetch; the superseded response is discarded as stale. On failure the
	/// previously held affordance is restored and the error kind recorded.
	pub async fn switch_category(&self, category: &CategoryId) -> Result<SwitchOutcome> {
		let (seq, url, stashed) = {
			let mut state = self.state.write();
			if state.active_category == *category {
				return Ok(SwitchOutcome::AlreadyActive);
			}
			let target = self
				.config
				.category(category)
				.ok_or_else(|| FeedError::UnknownCategory(category.clone()))?;
			// Exactly one category is active at a time.
			state.active_category = category.clone();
			state.fetch_seq += 1;
			state.pending_fetch = true;
			state.loading = LoadingState::Loading;
			let stashed = state.store.take_paging();
			(state.fetch_seq, target.url.clone(), stashed)
		};

		tracing::debug!(
			container = %self.config.container,
			category = %category,
			"feed.category_fetch issued"
		);
		let fetched = self.gateway.fetch_fragment(&url).await;

		let mut state = self.state.write();
		if state.fetch_seq != seq {
			// A newer fetch owns the container state now.
			return Ok(SwitchOutcome::Stale);
		}
		state.pending_fetch = false;
		state.loading = LoadingState::Idle;
		match fetched {
			Ok(PageFragment { raw, entries, paging }) => {
				let count = entries.len();
				state.store.replace_all(entries, paging);
				state.last_error = None;
				drop(state);
				self.events.emit(&FeedEvent::ContentUpdated {
					container: self.config.container.clone(),
					raw,
				});
				Ok(SwitchOutcome::Switched { entries: count })
			}
			Err(source) => {
				state.store.restore_paging(stashed);
				state.last_error = Some(FeedErrorKind::CategoryFetch);
				drop(state);
				let err = FeedError::Gateway {
					kind: FeedErrorKind::CategoryFetch,
					source,
				};
				tracing::warn!(
					container = %self.config.container,
					category = %category,
					error = %err,
					"feed.category_fetch failed"
				);
				Err(err)
			}
		}
	}

	/// Activates the "load more" affordance: fetches the next page and
	/// appends its entries.
	///
	/// A no-op while a fetch is pending or when no affordance exists.
	/// End-of-feed is reached precisely when the response carries no
	/// affordance. On failure the prior affordance is restored.
	pub async fn fetch_next_page(&self) -> Result<PageOutcome> {
		let (seq, prior) = {
			let mut state = self.state.write();
			if state.pending_fetch {
				return Ok(PageOutcome::AlreadyLoading);
			}
			let Some(affordance) = state.store.take_paging() else {
				return Ok(PageOutcome::EndOfFeed);
			};
			state.fetch_seq += 1;
			state.pending_fetch = true;
			state.loading = LoadingState::Loading;
			(state.fetch_seq, affordance)
		};

		tracing::debug!(
			container = %self.config.container,
			url = %prior.url,
			"feed.page_fetch issued"
		);
		let fetched = self.gateway.fetch_fragment(&prior.url).await;

		let mut state = self.state.write();
		if state.fetch_seq != seq {
			return Ok(PageOutcome::Stale);
		}
		state.pending_fetch = false;
		state.loading = LoadingState::Idle;
		match fetched {
			Ok(PageFragment { raw, entries, paging }) => {
				let appended = entries.len();
				let end_of_feed = paging.is_none();
				state.store.append_page(entries, paging);
				state.last_error = None;
				drop(state);
				self.events.emit(&FeedEvent::ContentUpdated {
					container: self.config.container.clone(),
					raw,
				});
				Ok(PageOutcome::Appended {
					appended,
					end_of_feed,
				})
			}
			Err(source) => {
				state.store.restore_paging(Some(prior));
				state.last_error = Some(FeedErrorKind::PageFetch);
				drop(state);
				let err = FeedError::Gateway {
					kind: FeedErrorKind::PageFetch,
					source,
				};
				tracing::warn!(
					container = %self.config.container,
					error = %err,
					"feed.page_fetch failed"
				);
				Err(err)
			}
		}
	}

	pub(crate) fn gateway(&self) -> &Arc<dyn FeedGateway> {
		&self.gateway
	}

	pub(crate) fn events(&self) -> &EventSink {
		&self.events
	}

	pub(crate) fn state(&self) -> &RwLock<ContainerState> {
		&self.state
	}
}

impl std::fmt::Debug for FeedController {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FeedController")
			.field("container", &self.config.container)
			.field("kind", &self.config.kind)
			.finish_non_exhaustive()
	}
}
