// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized viewport input events.

use kurbo::{Point, Size, Vec2};

/// Direction of a keyboard/arrow-button nudge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NudgeDirection {
    /// Reveal content above the view.
    Up,
    /// Reveal content below the view.
    Down,
    /// Reveal content left of the view.
    Left,
    /// Reveal content right of the view.
    Right,
}

/// One normalized viewport input.
///
/// Hosts translate their raw event stream — scroll events, pointer
/// captures, wheel deltas, key presses, toolbar clicks — into these variants
/// and feed them to [`Gallery::handle_input`](crate::Gallery::handle_input).
/// Each event is processed against the current viewport state in arrival
/// order; dropping intermediate events under load only skips intermediate
/// windows, never corrupts state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Absolute scroll to a position (e.g. a scrollbar jump).
    ScrollTo(Point),
    /// Relative scroll by a delta (e.g. a scroll event).
    ScrollBy(Vec2),
    /// A drag-to-pan gesture began at this pointer position.
    DragStart(Point),
    /// The pointer moved during a drag-to-pan gesture.
    DragMove(Point),
    /// The drag-to-pan gesture ended.
    DragEnd,
    /// A wheel event. With the zoom modifier held the vertical delta zooms
    /// (up zooms in); otherwise the delta scrolls.
    Wheel {
        /// Wheel delta in device pixels.
        delta: Vec2,
        /// Whether the host's zoom modifier key was held.
        zoom_modifier: bool,
    },
    /// A directional nudge: pages the view by half a screen.
    Nudge(NudgeDirection),
    /// One zoom-in step (e.g. a `+` toolbar button).
    ZoomIn,
    /// One zoom-out step (e.g. a `-` toolbar button).
    ZoomOut,
    /// The host view was resized.
    Resize(Size),
}
