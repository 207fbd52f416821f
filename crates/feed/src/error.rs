//! Feed error taxonomy.
//!
//! Failures are distinguished by which operation produced them, not by HTTP
//! status detail. Every failure is logged with the container id, recorded in
//! the container's observable `last_error`, and surfaced to the caller as
//! `Err`; nothing retries.

use std::fmt;

use ripple_gateway::GatewayError;
use thiserror::Error;

use crate::config::CategoryId;

/// The operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
	/// A "load more" page fetch failed.
	PageFetch,
	/// A category-switch fetch failed.
	CategoryFetch,
	/// A delete submission was rejected or failed.
	Delete,
	/// A comment submission was rejected or failed.
	CommentSubmit,
	/// A reply submission was rejected or failed.
	ReplySubmit,
}

impl FeedErrorKind {
	/// Stable name used in diagnostics.
	pub fn as_str(&self) -> &'static str {
		match self {
			FeedErrorKind::PageFetch => "page_fetch",
			FeedErrorKind::CategoryFetch => "category_fetch",
			FeedErrorKind::Delete => "delete",
			FeedErrorKind::CommentSubmit => "comment_submit",
			FeedErrorKind::ReplySubmit => "reply_submit",
		}
	}
}

impl fmt::Display for FeedErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Errors surfaced by feed operations.
#[derive(Debug, Error)]
pub enum FeedError {
	/// The gateway failed before a usable response arrived.
	#[error("{kind} failed: {source}")]
	Gateway {
		/// The operation that issued the request.
		kind: FeedErrorKind,
		/// The underlying gateway failure.
		#[source]
		source: GatewayError,
	},

	/// The server answered a mutation with a non-success status.
	#[error("{kind} rejected with status {status}")]
	Rejected {
		/// The operation that issued the request.
		kind: FeedErrorKind,
		/// The status the server answered with.
		status: u16,
	},

	/// A successful mutation response carried no rendered fragment to merge.
	#[error("{kind} response carried no fragment")]
	MissingFragment {
		/// The operation that issued the request.
		kind: FeedErrorKind,
	},

	/// A category switch named a tab the container does not offer.
	#[error("unknown category: {0}")]
	UnknownCategory(CategoryId),
}

impl FeedError {
	/// The operation kind, when the error belongs to one.
	pub fn kind(&self) -> Option<FeedErrorKind> {
		match self {
			FeedError::Gateway { kind, .. }
			| FeedError::Rejected { kind, .. }
			| FeedError::MissingFragment { kind } => Some(*kind),
			FeedError::UnknownCategory(_) => None,
		}
	}
}

/// Result type for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;
