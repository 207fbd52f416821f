//! Viewport visibility math and the visibility oracle seam.
//!
//! The feed engine never inspects layout itself; it asks an injected
//! [`VisibilityOracle`] whether a given affordance is currently on screen.
//! [`ViewportOracle`] is the stock implementation: the embedder pushes the
//! current scroll window into it and the oracle answers from pure geometry.

#![warn(missing_docs)]

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Absolute bounds of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
	/// Offset of the element's top edge from the document top.
	pub top: f64,
	/// Rendered height of the element.
	pub height: f64,
}

impl Rect {
	/// Creates bounds from a top offset and a height.
	pub fn new(top: f64, height: f64) -> Self {
		Self { top, height }
	}

	/// Offset of the element's bottom edge from the document top.
	pub fn bottom(&self) -> f64 {
		self.top + self.height
	}
}

/// The currently scrolled window onto the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
	/// Scroll offset of the window's top edge.
	pub scroll_top: f64,
	/// Visible height of the window.
	pub height: f64,
}

impl Viewport {
	/// Creates a viewport from a scroll offset and a height.
	pub fn new(scroll_top: f64, height: f64) -> Self {
		Self { scroll_top, height }
	}

	/// Document offset of the window's bottom edge.
	pub fn bottom(&self) -> f64 {
		self.scroll_top + self.height
	}
}

/// Which part of the element must fall inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
	/// The whole element is inside the viewport.
	Full,
	/// The element's top edge is inside the viewport.
	Top,
	/// The element's bottom edge is inside the viewport.
	Bottom,
}

/// Answers whether `bounds` is visible within `viewport` under `mode`.
///
/// Edges count as visible (all comparisons are inclusive).
pub fn in_view(bounds: Rect, viewport: Viewport, mode: Visibility) -> bool {
	match mode {
		Visibility::Bottom => {
			bounds.bottom() <= viewport.bottom() && bounds.bottom() >= viewport.scroll_top
		}
		Visibility::Top => {
			bounds.top <= viewport.bottom() && bounds.top >= viewport.scroll_top
		}
		Visibility::Full => {
			bounds.top >= viewport.scroll_top && bounds.bottom() <= viewport.bottom()
		}
	}
}

/// Capability the feed engine consumes to decide scroll-driven paging.
///
/// Optional at binding time: a container bound without an oracle degrades
/// to manual paging.
pub trait VisibilityOracle: Send + Sync {
	/// Whether the element at `bounds` is currently visible under `mode`.
	fn is_in_view(&self, bounds: Rect, mode: Visibility) -> bool;
}

/// Stock oracle backed by an embedder-maintained [`Viewport`].
#[derive(Debug)]
pub struct ViewportOracle {
	current: RwLock<Viewport>,
}

impl ViewportOracle {
	/// Creates an oracle with an initial viewport.
	pub fn new(viewport: Viewport) -> Self {
		Self {
			current: RwLock::new(viewport),
		}
	}

	/// Replaces the current viewport; called by the embedder on scroll and
	/// resize.
	pub fn set_viewport(&self, viewport: Viewport) {
		*self.current.write() = viewport;
	}

	/// Returns the viewport the oracle currently answers from.
	pub fn viewport(&self) -> Viewport {
		*self.current.read()
	}
}

impl VisibilityOracle for ViewportOracle {
	fn is_in_view(&self, bounds: Rect, mode: Visibility) -> bool {
		in_view(bounds, self.viewport(), mode)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const VIEW: Viewport = Viewport {
		scroll_top: 100.0,
		height: 500.0,
	};

	#[test]
	fn full_requires_both_edges_inside() {
		assert!(in_view(Rect::new(200.0, 100.0), VIEW, Visibility::Full));
		// Top edge above the window.
		assert!(!in_view(Rect::new(50.0, 100.0), VIEW, Visibility::Full));
		// Bottom edge below the window.
		assert!(!in_view(Rect::new(550.0, 100.0), VIEW, Visibility::Full));
	}

	#[test]
	fn top_mode_only_needs_the_top_edge() {
		// Bottom hangs below the window but the top edge is inside.
		assert!(in_view(Rect::new(550.0, 400.0), VIEW, Visibility::Top));
		assert!(!in_view(Rect::new(700.0, 100.0), VIEW, Visibility::Top));
	}

	#[test]
	fn bottom_mode_only_needs_the_bottom_edge() {
		// Top starts above the window but the bottom edge is inside.
		assert!(in_view(Rect::new(0.0, 200.0), VIEW, Visibility::Bottom));
		assert!(!in_view(Rect::new(0.0, 50.0), VIEW, Visibility::Bottom));
	}

	#[test]
	fn edges_are_inclusive() {
		// Element exactly filling the window counts as fully visible.
		assert!(in_view(Rect::new(100.0, 500.0), VIEW, Visibility::Full));
	}

	#[test]
	fn oracle_tracks_viewport_updates() {
		let oracle = ViewportOracle::new(VIEW);
		let below = Rect::new(700.0, 50.0);
		assert!(!oracle.is_in_view(below, Visibility::Full));

		oracle.set_viewport(Viewport::new(400.0, 500.0));
		assert!(oracle.is_in_view(below, Visibility::Full));
	}
}
