//! Feed synchronization engine.
//!
//! Client-side controller for a paginated, filterable activity/notification
//! feed: it keeps an explicit item model in sync with a remote
//! fragment-serving source and coordinates mutations (delete, comment,
//! reply) against it.
//!
//! * [`FeedController`] — one per container marker: category switching,
//!   page fetches, a sequence-numbered staleness guard, and the mutation
//!   protocols.
//! * [`FeedStore`] — the insertion-ordered entry collection the view
//!   renders from.
//! * [`ScrollTrigger`] — edge-triggered infinite scroll over an injected
//!   visibility oracle.
//! * [`EventSink`] — container-scoped notifications for external page
//!   logic.
//!
//! Transport lives in `ripple-gateway`; viewport math in `ripple-viewport`.

#![warn(missing_docs)]

pub mod composer;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod mutations;
pub mod scroll;
pub mod store;

pub use composer::{Composer, ComposerTarget};
pub use config::{Category, CategoryId, ContainerId, FeedConfig, FeedKind};
pub use controller::{FeedController, LoadingState, PageOutcome, SwitchOutcome};
pub use error::{FeedError, FeedErrorKind, Result};
pub use events::{EventSink, FeedEvent};
pub use mutations::MutationOutcome;
pub use scroll::{ScrollOutcome, ScrollTrigger};
pub use store::FeedStore;

pub use ripple_gateway::{
	EntryId, FeedEntry, FeedGateway, FeedReply, FormPayload, FormResponse, PageFragment,
	PagingAffordance,
};
