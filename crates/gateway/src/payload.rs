//! Serialized form state submitted by mutations.

use crate::wire::EntryId;

/// Field name carrying the composer text.
pub const FIELD_TEXT: &str = "text";
/// Field name carrying the parent entry id of a reply.
pub const FIELD_PARENT_ID: &str = "pid";
/// Field name carrying the target entry id of a delete.
pub const FIELD_TARGET_ID: &str = "nid";

/// Ordered form fields, serialized as the mutation request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
	pairs: Vec<(String, String)>,
}

impl FormPayload {
	/// Creates an empty payload.
	pub fn new() -> Self {
		Self::default()
	}

	/// Payload for a comment submission.
	pub fn comment(text: impl Into<String>) -> Self {
		Self::new().with_field(FIELD_TEXT, text)
	}

	/// Payload for a reply submission bound to its parent entry.
	pub fn reply(parent: &EntryId, text: impl Into<String>) -> Self {
		Self::new()
			.with_field(FIELD_PARENT_ID, parent.as_str())
			.with_field(FIELD_TEXT, text)
	}

	/// Payload for a delete submission naming its target entry.
	pub fn delete(target: &EntryId) -> Self {
		Self::new().with_field(FIELD_TARGET_ID, target.as_str())
	}

	/// Appends a field, builder style.
	pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.pairs.push((name.into(), value.into()));
		self
	}

	/// First value of the named field, if present.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}

	/// The composer text field.
	pub fn text(&self) -> Option<&str> {
		self.get(FIELD_TEXT)
	}

	/// The parent entry id field of a reply payload.
	pub fn parent_id(&self) -> Option<EntryId> {
		self.get(FIELD_PARENT_ID).map(EntryId::from)
	}

	/// The target entry id field of a delete payload.
	pub fn target_id(&self) -> Option<EntryId> {
		self.get(FIELD_TARGET_ID).map(EntryId::from)
	}

	/// All fields in submission order.
	pub fn pairs(&self) -> &[(String, String)] {
		&self.pairs
	}
}
