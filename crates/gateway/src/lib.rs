//! Remote feed gateway.
//!
//! This crate owns everything that crosses the wire between the feed engine
//! and the fragment-serving remote source:
//! * wire types for decoded page fragments and mutation responses
//! * [`FormPayload`], the serialized form state mutations submit
//! * the [`FeedGateway`] trait the engine calls through
//! * [`HttpGateway`], the reqwest-backed production adapter
//!
//! The gateway performs no retries and applies no timeout policy of its own;
//! an in-flight request always runs to completion or transport failure.

#![warn(missing_docs)]

pub mod error;
pub mod http;
pub mod payload;
pub mod remote;
pub mod wire;

pub use error::{GatewayError, Result};
pub use http::HttpGateway;
pub use payload::FormPayload;
pub use remote::FeedGateway;
pub use wire::{EntryId, FeedEntry, FeedReply, FormResponse, PageFragment, PagingAffordance};
