//! Container binding configuration.
//!
//! A feed container is identified by a structural marker on the page; the
//! marker's configuration attributes deserialize into [`FeedConfig`].
//! Activities and notifications are two instantiations of the same engine:
//! [`FeedKind`] selects diagnostic vocabulary only.

use std::fmt;

use serde::Deserialize;
use url::Url;

/// Which vocabulary a container speaks. All engine logic is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
	/// Activity feed containers.
	Activities,
	/// Notification feed containers.
	Notifications,
}

impl FeedKind {
	/// Singular noun used in diagnostics.
	pub fn noun(&self) -> &'static str {
		match self {
			FeedKind::Activities => "activity",
			FeedKind::Notifications => "notification",
		}
	}
}

/// Identifier scoping one embedded feed widget.
///
/// Multiple containers on one page are fully independent; the id scopes
/// events and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
	/// Wraps a raw container id.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// The raw id string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ContainerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ContainerId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

/// Identifier of a category/type filter tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
	/// Wraps a raw category id.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// The unfiltered default category.
	pub fn all() -> Self {
		Self::new("all")
	}

	/// The raw id string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for CategoryId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for CategoryId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

/// One selectable category tab and the URL its filtered page is fetched
/// from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
	/// Filter identifier, unique within the container.
	pub id: CategoryId,
	/// GET endpoint returning the filtered fragment.
	pub url: Url,
	/// Display label; informational only.
	#[serde(default)]
	pub label: String,
}

/// Configuration read from a container's binding marker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
	/// Which vocabulary this container speaks.
	pub kind: FeedKind,
	/// Identifier scoping events and diagnostics.
	pub container: ContainerId,
	/// Opt-in flag for scroll-driven paging. Also requires the visibility
	/// oracle capability at bind time.
	#[serde(default)]
	pub infinite_scroll: bool,
	/// Category tabs offered by the container.
	#[serde(default)]
	pub categories: Vec<Category>,
}

impl FeedConfig {
	/// Looks up a category tab by id.
	pub fn category(&self, id: &CategoryId) -> Option<&Category> {
		self.categories.iter().find(|c| c.id == *id)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn deserializes_marker_attributes() {
		let config: FeedConfig = serde_json::from_str(
			r#"{
				"kind": "activities",
				"container": "profile-feed",
				"infinite_scroll": true,
				"categories": [
					{"id": "all", "url": "https://feed.test/activities/", "label": "All"},
					{"id": "comments", "url": "https://feed.test/activities/?type=comment"}
				]
			}"#,
		)
		.unwrap();

		assert_eq!(config.kind, FeedKind::Activities);
		assert!(config.infinite_scroll);
		assert_eq!(config.categories.len(), 2);
		assert!(config.category(&CategoryId::all()).is_some());
		assert!(config.category(&CategoryId::new("mentions")).is_none());
	}

	#[test]
	fn infinite_scroll_defaults_off() {
		let config: FeedConfig = serde_json::from_str(
			r#"{"kind": "notifications", "container": "inbox"}"#,
		)
		.unwrap();
		assert!(!config.infinite_scroll);
		assert!(config.categories.is_empty());
	}
}
