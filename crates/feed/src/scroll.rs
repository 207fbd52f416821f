//! Edge-triggered infinite-scroll trigger.
//!
//! Synthesizes the same activation a "load more" click would produce, but
//! only on the invisible-to-visible transition of the affordance — a latch
//! keyed by the affordance URL prevents refiring on every scroll tick while
//! the control stays in view, and a replaced affordance (new URL) arms the
//! trigger again.

use std::sync::Arc;

use parking_lot::Mutex;
use ripple_viewport::{Rect, Visibility, VisibilityOracle};
use url::Url;

use crate::controller::{FeedController, PageOutcome};
use crate::error::Result;

/// Outcome of one scroll-event evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollOutcome {
	/// No affordance is present; nothing to trigger.
	Inactive,
	/// The affordance is not in view.
	NotVisible,
	/// The affordance is in view but already triggered this visit.
	StillVisible,
	/// The trigger activated the page fetch.
	Triggered(PageOutcome),
}

/// Scroll listener for one infinite-scroll-enabled container.
pub struct ScrollTrigger {
	controller: Arc<FeedController>,
	oracle: Arc<dyn VisibilityOracle>,
	/// URL already fired for while continuously visible; `None` once the
	/// affordance leaves view.
	fired_for: Mutex<Option<Url>>,
}

impl ScrollTrigger {
	/// Binds a trigger to a container.
	///
	/// Returns `None` unless the container opted into infinite scroll AND
	/// the oracle capability is present — without it, paging silently stays
	/// manual.
	pub fn bind(
		controller: Arc<FeedController>,
		oracle: Option<Arc<dyn VisibilityOracle>>,
	) -> Option<Self> {
		if !controller.infinite_scroll_enabled() {
			return None;
		}
		let oracle = oracle?;
		Some(Self {
			controller,
			oracle,
			fired_for: Mutex::new(None),
		})
	}

	/// Re-evaluates visibility for one scroll event.
	///
	/// `affordance` is the current document bounds of the "load more"
	/// control as measured by the embedder.
	pub async fn on_scroll(&self, affordance: Rect) -> Result<ScrollOutcome> {
		let Some(url) = self.controller.paging_url() else {
			*self.fired_for.lock() = None;
			return Ok(ScrollOutcome::Inactive);
		};

		if !self.oracle.is_in_view(affordance, Visibility::Full) {
			*self.fired_for.lock() = None;
			return Ok(ScrollOutcome::NotVisible);
		}

		{
			let mut fired_for = self.fired_for.lock();
			if fired_for.as_ref() == Some(&url) {
				return Ok(ScrollOutcome::StillVisible);
			}
			*fired_for = Some(url);
		}

		let outcome = self.controller.fetch_next_page().await?;
		Ok(ScrollOutcome::Triggered(outcome))
	}
}

impl std::fmt::Debug for ScrollTrigger {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ScrollTrigger")
			.field("container", self.controller.container_id())
			.finish_non_exhaustive()
	}
}
