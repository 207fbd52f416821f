//! Gateway error types.

use thiserror::Error;

/// Errors produced while talking to the remote feed source.
#[derive(Debug, Error)]
pub enum GatewayError {
	/// The transport failed before a response was obtained.
	#[error("transport failure: {0}")]
	Transport(String),

	/// The response body could not be decoded as a fragment.
	#[error("malformed fragment body: {0}")]
	Decode(#[from] serde_json::Error),

	/// A fragment fetch was rejected with a non-success status.
	///
	/// Only GET fetches surface this; mutation responses carry their status
	/// as data because the mutation protocols branch on it.
	#[error("fragment fetch rejected with status {0}")]
	Status(u16),
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
