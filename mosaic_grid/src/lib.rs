// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic Grid: the tile coordinate space of an infinite media canvas.
//!
//! This crate is the pure-math layer between a viewport (a pixel rectangle
//! plus a zoom factor) and the integer grid of tiles behind it. It answers
//! two questions, and nothing else:
//!
//! - Which grid coordinates are in view? ([`GridMetrics::visible_window`])
//! - Where does one grid cell land on the canvas? ([`GridMetrics::cell_frame`])
//!
//! Both answers are derived from the same [`GridMetrics`], so the window
//! computation and cell placement are always inverses of each other.
//!
//! The crate deliberately does **not** own any tile state, content, or
//! presentation. Hosts are expected to:
//!
//! - Maintain viewport state (scroll origin, size, scale) themselves.
//! - Call [`GridMetrics::visible_window`] whenever that state changes.
//! - Diff the returned [`CoordWindow`] against their materialized tile set to
//!   decide what to create or destroy (see `mosaic_tiles`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use mosaic_grid::{GridCoord, GridMetrics};
//!
//! // 150px tiles with a 2px gap and a 2-tile prefetch buffer.
//! let metrics = GridMetrics::new(150.0, 2.0).with_buffer_margin(2);
//!
//! // An 800x600 viewport scrolled to the world origin, unzoomed.
//! let window = metrics.visible_window(Point::ZERO, Size::new(800.0, 600.0), 1.0);
//!
//! // Stride is 152: ceil(800 / 152) = 6 columns, ceil(600 / 152) = 4 rows,
//! // expanded by the buffer margin on every side.
//! assert_eq!((window.col_min, window.col_max), (-2, 8));
//! assert_eq!((window.row_min, window.row_max), (-2, 6));
//! assert!(window.contains(GridCoord::new(0, 0)));
//!
//! // Cell placement is the inverse mapping.
//! let frame = metrics.cell_frame(GridCoord::new(1, 0), 1.0);
//! assert_eq!(frame.x0, 152.0);
//! assert_eq!(frame.width(), 150.0);
//! ```
//!
//! ## Zoom modes
//!
//! Gallery implementations disagree on what "zoom" means, so the choice is an
//! explicit [`ZoomMode`] rather than a baked-in behavior:
//!
//! - [`ZoomMode::RescaleLayout`]: the tile pixel size changes with the zoom
//!   factor; the viewport origin stays in document pixels. Zooming out shrinks
//!   the stride, so the same pixel rectangle spans more grid coordinates.
//! - [`ZoomMode::CameraOnly`]: the layout is fixed in world units and the
//!   zoom factor only widens or narrows the world span covered by the
//!   viewport. Cell frames are returned in world units and the host's camera
//!   transform applies the scale at render time.
//!
//! Under both modes, halving the scale doubles the coordinate span of the
//! visible window for the same pixel rectangle.
//!
//! All geometry uses [`kurbo`] types. The crate is `no_std` compatible.

#![no_std]

mod coord;
mod metrics;
mod window;

pub use coord::GridCoord;
pub use metrics::{GridMetrics, MAX_SCALE, MIN_SCALE, ZoomMode};
pub use window::{CoordWindow, Coords};
