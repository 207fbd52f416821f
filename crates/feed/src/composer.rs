//! Input state for comment and reply forms.
//!
//! The engine owns the text and focus state the page previously kept on the
//! DOM. A submission with empty trimmed text is suppressed before any
//! request is created; on success the composer is cleared, on failure the
//! text is retained.

use ripple_gateway::EntryId;

/// Text and focus state of one comment or reply form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
	text: String,
	focused: bool,
}

impl Composer {
	/// Creates an empty, unfocused composer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the composer text.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = text.into();
	}

	/// The current raw text.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Marks the composer focused.
	pub fn focus(&mut self) {
		self.focused = true;
	}

	/// Releases focus.
	pub fn blur(&mut self) {
		self.focused = false;
	}

	/// Whether the composer currently holds focus.
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// The trimmed text to submit, or `None` when nothing but whitespace
	/// was entered (submission suppressed).
	pub fn trimmed(&self) -> Option<String> {
		let trimmed = self.text.trim();
		if trimmed.is_empty() {
			None
		} else {
			Some(trimmed.to_owned())
		}
	}

	/// Clears the text and releases focus, after a confirmed submission.
	pub fn clear(&mut self) {
		self.text.clear();
		self.focused = false;
	}
}

/// Which composer a cleared-event refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerTarget {
	/// The container's top-level comment form.
	Comment,
	/// The reply form bound to one parent entry.
	Reply(EntryId),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn whitespace_only_text_is_suppressed() {
		let mut composer = Composer::new();
		composer.set_text("   \n\t ");
		assert_eq!(composer.trimmed(), None);

		composer.set_text("  hello  ");
		assert_eq!(composer.trimmed(), Some("hello".to_owned()));
		// Suppression check does not consume the text.
		assert_eq!(composer.text(), "  hello  ");
	}

	#[test]
	fn clear_resets_text_and_focus() {
		let mut composer = Composer::new();
		composer.set_text("draft");
		composer.focus();

		composer.clear();
		assert_eq!(composer.text(), "");
		assert!(!composer.is_focused());
	}
}
