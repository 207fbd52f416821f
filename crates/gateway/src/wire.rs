//! Decoded wire types.
//!
//! The remote source renders entries server-side and ships them as
//! fragments. A fragment body is JSON: an `entries` list (each entry a
//! rendered blob plus its nested replies) and an optional `paging` object
//! whose presence means more pages exist. Mutation responses carry the
//! HTTP status plus an optional rendered `entry` or `reply` fragment.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

/// Server-assigned stable identifier of a feed entry or reply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
	/// Wraps a raw id string.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// The raw id string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for EntryId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for EntryId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl From<String> for EntryId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

/// A rendered top-level feed entry and its nested replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
	/// Stable server-assigned id, unique within a container.
	pub id: EntryId,
	/// The rendered entry fragment, opaque to the engine.
	pub html: String,
	/// Replies rendered inside this entry's reply region.
	#[serde(default)]
	pub replies: Vec<FeedReply>,
}

/// A rendered reply belonging to one parent entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedReply {
	/// Stable server-assigned id.
	pub id: EntryId,
	/// Id of the entry this reply renders under.
	pub parent: EntryId,
	/// The rendered reply fragment, opaque to the engine.
	pub html: String,
}

/// The "load more" control: an opaque next-page URL.
///
/// Presence is equivalent to "more pages exist"; a fragment without one
/// marks the end of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingAffordance {
	/// Opaque URL the next page is fetched from.
	pub url: Url,
}

/// A decoded GET response: the item-list region plus the optional paging
/// region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFragment {
	/// The undecoded payload, carried on the content-updated event.
	pub raw: String,
	/// Entries in server order.
	pub entries: Vec<FeedEntry>,
	/// The next-page affordance, absent on the last page.
	pub paging: Option<PagingAffordance>,
}

#[derive(Deserialize)]
struct PageBody {
	#[serde(default)]
	entries: Vec<FeedEntry>,
	#[serde(default)]
	paging: Option<PagingAffordance>,
}

impl PageFragment {
	/// Decodes a raw fragment payload, keeping the raw text alongside.
	pub fn decode(raw: String) -> Result<Self> {
		let body: PageBody = serde_json::from_str(&raw)?;
		Ok(Self {
			raw,
			entries: body.entries,
			paging: body.paging,
		})
	}
}

/// A decoded POST response.
///
/// The status is data, not an error: mutation protocols branch on it
/// (200 for deletes, 200/202 for comment and reply submissions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResponse {
	/// HTTP status the server answered with.
	pub status: u16,
	/// Rendered entry fragment on a successful comment submission.
	pub entry: Option<FeedEntry>,
	/// Rendered reply fragment on a successful reply submission; carries
	/// the echoed parent id used to locate the insertion point.
	pub reply: Option<FeedReply>,
}

#[derive(Default, Deserialize)]
struct FormBody {
	#[serde(default)]
	entry: Option<FeedEntry>,
	#[serde(default)]
	reply: Option<FeedReply>,
}

impl FormResponse {
	/// Decodes a mutation response body.
	///
	/// Decoding is lenient: failure responses often carry no body or a
	/// non-JSON error page, and the protocols only need the status then.
	pub fn decode(status: u16, raw: &str) -> Self {
		let body: FormBody = serde_json::from_str(raw).unwrap_or_default();
		Self {
			status,
			entry: body.entry,
			reply: body.reply,
		}
	}

	/// A response carrying only a status, no fragment.
	pub fn status_only(status: u16) -> Self {
		Self {
			status,
			entry: None,
			reply: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn decodes_fragment_with_paging() {
		let raw = r#"{
			"entries": [
				{"id": "a1", "html": "<li>first</li>", "replies": [
					{"id": "r1", "parent": "a1", "html": "<li>re</li>"}
				]},
				{"id": "a2", "html": "<li>second</li>"}
			],
			"paging": {"url": "https://feed.test/activities/?p=2"}
		}"#;
		let fragment = PageFragment::decode(raw.to_string()).unwrap();

		assert_eq!(fragment.entries.len(), 2);
		assert_eq!(fragment.entries[0].replies.len(), 1);
		assert_eq!(fragment.entries[1].replies.len(), 0);
		assert_eq!(
			fragment.paging.as_ref().map(|p| p.url.as_str()),
			Some("https://feed.test/activities/?p=2")
		);
		assert_eq!(fragment.raw, raw);
	}

	#[test]
	fn missing_paging_means_last_page() {
		let fragment = PageFragment::decode(r#"{"entries": []}"#.to_string()).unwrap();
		assert!(fragment.paging.is_none());
	}

	#[test]
	fn rejects_malformed_fragment() {
		assert!(PageFragment::decode("<html>not json</html>".to_string()).is_err());
	}

	#[test]
	fn form_response_decodes_leniently() {
		let ok = FormResponse::decode(200, r#"{"entry": {"id": "c9", "html": "<li>hi</li>"}}"#);
		assert_eq!(ok.status, 200);
		assert_eq!(ok.entry.as_ref().map(|e| e.id.as_str()), Some("c9"));
		assert!(ok.reply.is_none());

		// Error pages are not JSON; only the status survives.
		let failed = FormResponse::decode(500, "<html>boom</html>");
		assert_eq!(failed, FormResponse::status_only(500));
	}
}
