// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic Viewport: the camera state of an infinite media canvas.
//!
//! A [`CanvasViewport`] is the single mutable record of where the user is
//! looking: a scroll origin, a viewport size, and a uniform scale factor. It
//! lives for the whole session and is mutated by every pan, scroll, and zoom
//! input; tile resolution reads it as a snapshot and never writes it.
//!
//! The crate also provides [`PanDrag`], the small state machine that turns a
//! stream of pointer positions into scroll deltas while a drag-to-pan
//! gesture is active. (Momentum/inertia after release is a host concern and
//! intentionally absent.)
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use mosaic_viewport::{CanvasViewport, PanDrag};
//!
//! let mut viewport = CanvasViewport::new(Size::new(800.0, 600.0));
//! viewport.scroll_to(Point::new(2500.0, 2500.0));
//!
//! // One zoom-in click: scale multiplies by the step ratio.
//! viewport.zoom_in();
//! assert!((viewport.scale() - 1.1).abs() < 1e-12);
//!
//! // Drag-to-pan: content follows the pointer, so scroll moves opposite.
//! let mut drag = PanDrag::default();
//! drag.begin(Point::new(100.0, 100.0));
//! if let Some(delta) = drag.move_to(Point::new(112.0, 95.0)) {
//!     viewport.scroll_by(delta);
//! }
//! assert_eq!(viewport.origin(), Point::new(2488.0, 2505.0));
//! drag.finish();
//! ```

#![no_std]

mod drag;
mod viewport;

pub use drag::PanDrag;
pub use viewport::{CanvasViewport, DEFAULT_ZOOM_STEP};
