//! Outgoing container-scoped notifications.
//!
//! External page logic (analytics, widget re-initialization, scrolling)
//! subscribes here; the engine never touches the page itself.

use std::sync::Arc;

use parking_lot::RwLock;
use ripple_gateway::EntryId;

use crate::composer::ComposerTarget;
use crate::config::ContainerId;

/// A notification emitted by a feed container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
	/// Fired after every successful page or category merge, carrying the
	/// raw fetched payload.
	ContentUpdated {
		/// The container that merged new content.
		container: ContainerId,
		/// The undecoded response payload.
		raw: String,
	},
	/// Fired after a successful reply merge so the embedder can scroll the
	/// parent's reply region into view.
	RevealReplies {
		/// The container the reply landed in.
		container: ContainerId,
		/// The parent entry whose reply region grew.
		parent: EntryId,
	},
	/// Fired when a confirmed submission cleared its composer, releasing
	/// input focus.
	ComposerCleared {
		/// The container owning the composer.
		container: ContainerId,
		/// Which composer was cleared.
		target: ComposerTarget,
	},
}

type Subscriber = Arc<dyn Fn(&FeedEvent) + Send + Sync>;

/// Synchronous fan-out registry of event subscribers.
///
/// Emission happens on the emitting task; subscribers must not block.
#[derive(Default)]
pub struct EventSink {
	subscribers: RwLock<Vec<Subscriber>>,
}

impl EventSink {
	/// Creates an empty sink.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a subscriber for all events of this container.
	pub fn subscribe(&self, subscriber: impl Fn(&FeedEvent) + Send + Sync + 'static) {
		self.subscribers.write().push(Arc::new(subscriber));
	}

	/// Delivers an event to every subscriber.
	pub fn emit(&self, event: &FeedEvent) {
		// Clone out of the lock so a subscriber may re-subscribe.
		let subscribers = self.subscribers.read().clone();
		for subscriber in subscribers {
			subscriber(event);
		}
	}
}

impl std::fmt::Debug for EventSink {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventSink")
			.field("subscribers", &self.subscribers.read().len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;

	#[test]
	fn emits_to_every_subscriber() {
		let sink = EventSink::new();
		let hits = Arc::new(AtomicUsize::new(0));
		for _ in 0..3 {
			let hits = Arc::clone(&hits);
			sink.subscribe(move |_| {
				hits.fetch_add(1, Ordering::SeqCst);
			});
		}

		sink.emit(&FeedEvent::ContentUpdated {
			container: ContainerId::new("c"),
			raw: String::new(),
		});
		assert_eq!(hits.load(Ordering::SeqCst), 3);
	}
}
