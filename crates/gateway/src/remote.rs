//! The gateway trait the feed engine calls through.

use async_trait::async_trait;
use url::Url;

use crate::error::Result;
use crate::payload::FormPayload;
use crate::wire::{FormResponse, PageFragment};

/// Issues requests against server-provided URLs and form actions.
///
/// Implementations must not retry or reorder: the engine's staleness guard
/// assumes each call maps to exactly one request. [`crate::HttpGateway`] is
/// the production implementation; tests substitute scripted doubles.
#[async_trait]
pub trait FeedGateway: Send + Sync {
	/// Fetches a page or category fragment from `url`.
	async fn fetch_fragment(&self, url: &Url) -> Result<PageFragment>;

	/// Submits a mutation form to `action`.
	///
	/// Non-success statuses are returned as data in the [`FormResponse`];
	/// only transport and decode problems are errors.
	async fn submit_form(&self, action: &Url, payload: &FormPayload) -> Result<FormResponse>;
}
