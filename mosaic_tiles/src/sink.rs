// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The presentation seam between the tile set and the host renderer.

use kurbo::Rect;
use mosaic_catalog::MediaRef;
use mosaic_grid::GridCoord;

/// Creates and destroys the visual element behind each tile.
///
/// Implementations own the entire presentation side: DOM nodes, scene-graph
/// items, GPU sprites — whatever the host renders with. The tile set only
/// requires that:
///
/// - [`create`](Self::create) returns a handle for the new element, placed
///   at the given frame (document pixels or world units, depending on the
///   grid's zoom mode).
/// - [`destroy`](Self::destroy) releases that element. The handle is passed
///   by value, so each one is destroyed at most once by construction.
///
/// Sinks are called synchronously from reconciliation, in deterministic
/// order (evictions first, then materializations in row-major window order),
/// and must not call back into the tile set.
pub trait RenderSink {
    /// Opaque identifier for one created element.
    type Handle;

    /// Creates the presentation element for a freshly materialized tile.
    fn create(&mut self, coord: GridCoord, frame: Rect, content: &MediaRef) -> Self::Handle;

    /// Destroys a previously created element.
    fn destroy(&mut self, handle: Self::Handle);
}
