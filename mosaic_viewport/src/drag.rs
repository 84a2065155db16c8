// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan gesture tracking.

use kurbo::{Point, Vec2};

/// Turns a stream of pointer positions into scroll deltas while a
/// drag-to-pan gesture is active.
///
/// The canvas follows the pointer: dragging right reveals content to the
/// left, so the returned deltas are the *negated* pointer movement, ready to
/// feed into [`CanvasViewport::scroll_by`](crate::CanvasViewport::scroll_by).
///
/// A gesture is `begin` → any number of `move_to` → `finish`. Moves outside
/// an active gesture return `None` so hosts can route pointer events
/// unconditionally.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanDrag {
    last: Option<Point>,
}

impl PanDrag {
    /// Starts a gesture at the given pointer position.
    ///
    /// Starting while a gesture is active re-anchors it; no delta is lost
    /// because deltas are always relative to the previous position.
    pub fn begin(&mut self, at: Point) {
        self.last = Some(at);
    }

    /// Feeds a pointer move, returning the scroll delta it implies.
    ///
    /// Returns `None` when no gesture is active.
    pub fn move_to(&mut self, at: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(at);
        Some(last - at)
    }

    /// Ends the gesture.
    pub fn finish(&mut self) {
        self.last = None;
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }
}
