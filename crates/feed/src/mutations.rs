//! Mutation coordination: delete, comment, reply.
//!
//! All three share one shape: validate, submit, merge the server-confirmed
//! fragment on success, record and log on failure. No local change is
//! applied before server confirmation, so there is no rollback path;
//! failure leaves prior state intact.

use ripple_gateway::{EntryId, FormPayload, FormResponse};
use url::Url;

use crate::composer::{Composer, ComposerTarget};
use crate::controller::FeedController;
use crate::error::{FeedError, FeedErrorKind, Result};
use crate::events::FeedEvent;

/// Statuses a comment or reply submission treats as confirmed.
const SUBMIT_ACCEPTED: [u16; 2] = [200, 202];
/// Status a delete submission treats as confirmed.
const DELETE_ACCEPTED: u16 = 200;

/// Outcome of a mutation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
	/// The entry subtree was removed.
	Deleted {
		/// Nested replies that left with the entry.
		replies_removed: usize,
	},
	/// The new comment entry was prepended.
	CommentPosted,
	/// The new reply was appended under its parent.
	ReplyPosted,
	/// Trimmed input text was empty; no request was issued.
	EmptyInput,
	/// The reply's parent was deleted while the request was in flight;
	/// the confirmed fragment was dropped.
	ParentMissing,
}

impl FeedController {
	/// Replaces the top-level comment composer text.
	pub fn set_comment_text(&self, text: impl Into<String>) {
		self.state().write().composer.set_text(text);
	}

	/// The top-level comment composer's current text.
	pub fn comment_text(&self) -> String {
		self.state().read().composer.text().to_owned()
	}

	/// Marks the top-level comment composer focused.
	pub fn focus_comment(&self) {
		self.state().write().composer.focus();
	}

	/// Whether the top-level comment composer holds focus.
	pub fn comment_focused(&self) -> bool {
		self.state().read().composer.is_focused()
	}

	/// Replaces the reply composer text for one parent entry.
	pub fn set_reply_text(&self, parent: &EntryId, text: impl Into<String>) {
		self.state()
			.write()
			.reply_composers
			.entry(parent.clone())
			.or_insert_with(Composer::new)
			.set_text(text);
	}

	/// The reply composer text for one parent entry.
	pub fn reply_text(&self, parent: &EntryId) -> String {
		self.state()
			.read()
			.reply_composers
			.get(parent)
			.map(|c| c.text().to_owned())
			.unwrap_or_default()
	}

	/// Submits a delete-confirmation form for one entry.
	///
	/// On status 200 the entry's rendered subtree leaves the list entirely,
	/// nested replies included. Any other status leaves the list unchanged
	/// and records the failure.
	pub async fn delete_entry(&self, target: &EntryId, action: &Url) -> Result<MutationOutcome> {
		let payload = FormPayload::delete(target);
		let response = self.submit(FeedErrorKind::Delete, action, &payload).await?;

		if response.status != DELETE_ACCEPTED {
			return Err(self.reject(FeedErrorKind::Delete, response.status));
		}

		let mut state = self.state().write();
		let removed = state.store.remove(target);
		state.reply_composers.remove(target);
		state.last_error = None;
		drop(state);

		match removed {
			Some(replies_removed) => {
				tracing::debug!(
					container = %self.container_id(),
					target = %target,
					replies = replies_removed,
					"feed.delete merged"
				);
				Ok(MutationOutcome::Deleted { replies_removed })
			}
			None => {
				// Confirmed, but the subtree already left the list.
				tracing::debug!(
					container = %self.container_id(),
					target = %target,
					"feed.delete target already absent"
				);
				Ok(MutationOutcome::Deleted { replies_removed: 0 })
			}
		}
	}

	/// Submits the top-level comment form.
	///
	/// Empty trimmed text suppresses the submission with no request. On
	/// status 200/202 the confirmed entry fragment is prepended (removing a
	/// prior "no items" placeholder), the composer is cleared and focus
	/// released. On failure the composer text is retained.
	pub async fn post_comment(&self, action: &Url) -> Result<MutationOutcome> {
		let Some(text) = self.state().read().composer.trimmed() else {
			return Ok(MutationOutcome::EmptyInput);
		};

		let payload = FormPayload::comment(text);
		let response = self
			.submit(FeedErrorKind::CommentSubmit, action, &payload)
			.await?;

		if !SUBMIT_ACCEPTED.contains(&response.status) {
			return Err(self.reject(FeedErrorKind::CommentSubmit, response.status));
		}
		let Some(entry) = response.entry else {
			return Err(self.record(FeedError::MissingFragment {
				kind: FeedErrorKind::CommentSubmit,
			}));
		};

		let mut state = self.state().write();
		state.store.prepend(entry);
		state.composer.clear();
		state.last_error = None;
		drop(state);

		self.events().emit(&FeedEvent::ComposerCleared {
			container: self.container_id().clone(),
			target: ComposerTarget::Comment,
		});
		Ok(MutationOutcome::CommentPosted)
	}

	/// Submits the reply form bound to one parent entry.
	///
	/// Same empty-text suppression as comments. On status 200/202 the
	/// confirmed reply fragment is appended under the parent matched by the
	/// echoed id, the reply composer is cleared, and the embedder is asked
	/// to reveal the reply region. A reply whose parent has since been
	/// deleted is dropped with a diagnostic.
	pub async fn post_reply(&self, parent: &EntryId, action: &Url) -> Result<MutationOutcome> {
		let trimmed = {
			let state = self.state().read();
			state.reply_composers.get(parent).and_then(|c| c.trimmed())
		};
		let Some(text) = trimmed else {
			return Ok(MutationOutcome::EmptyInput);
		};

		let payload = FormPayload::reply(parent, text);
		let response = self
			.submit(FeedErrorKind::ReplySubmit, action, &payload)
			.await?;

		if !SUBMIT_ACCEPTED.contains(&response.status) {
			return Err(self.reject(FeedErrorKind::ReplySubmit, response.status));
		}
		let Some(reply) = response.reply else {
			return Err(self.record(FeedError::MissingFragment {
				kind: FeedErrorKind::ReplySubmit,
			}));
		};

		// The echoed parent id locates the insertion point.
		let reply_parent = reply.parent.clone();
		let mut state = self.state().write();
		if !state.store.append_reply(reply) {
			drop(state);
			tracing::warn!(
				container = %self.container_id(),
				parent = %reply_parent,
				noun = self.kind().noun(),
				"feed.reply parent no longer present; fragment dropped"
			);
			return Ok(MutationOutcome::ParentMissing);
		}
		if let Some(composer) = state.reply_composers.get_mut(parent) {
			composer.clear();
		}
		state.last_error = None;
		drop(state);

		self.events().emit(&FeedEvent::RevealReplies {
			container: self.container_id().clone(),
			parent: reply_parent,
		});
		self.events().emit(&FeedEvent::ComposerCleared {
			container: self.container_id().clone(),
			target: ComposerTarget::Reply(parent.clone()),
		});
		Ok(MutationOutcome::ReplyPosted)
	}

	/// Submits a form through the gateway, mapping transport failures into
	/// the operation's error kind.
	async fn submit(
		&self,
		kind: FeedErrorKind,
		action: &Url,
		payload: &FormPayload,
	) -> Result<FormResponse> {
		self.gateway()
			.submit_form(action, payload)
			.await
			.map_err(|source| self.record(FeedError::Gateway { kind, source }))
	}

	/// Records a rejected-status failure.
	fn reject(&self, kind: FeedErrorKind, status: u16) -> FeedError {
		self.record(FeedError::Rejected { kind, status })
	}

	/// Records a failure in observable state and the diagnostic log.
	fn record(&self, err: FeedError) -> FeedError {
		if let Some(kind) = err.kind() {
			self.state().write().last_error = Some(kind);
			tracing::warn!(
				container = %self.container_id(),
				operation = kind.as_str(),
				noun = self.kind().noun(),
				error = %err,
				"feed.mutation failed"
			);
		}
		err
	}
}
