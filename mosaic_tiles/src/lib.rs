// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic Tiles: the materialized tile set behind an infinite canvas.
//!
//! A [`TileSet`] owns the one piece of mutable state at the center of tile
//! virtualization: the mapping from grid coordinate to materialized tile.
//! Each reconciliation pass diffs that mapping against the desired
//! [`CoordWindow`](mosaic_grid::CoordWindow) for the current viewport and
//! turns the difference into create/destroy calls on a host-provided
//! [`RenderSink`].
//!
//! The contract is deliberately narrow:
//!
//! - At most one tile per coordinate, always. Materializing a resident
//!   coordinate is a silent no-op, so the pass can run on every scroll tick
//!   without duplicate-creation hazards.
//! - An empty catalog defers materialization instead of failing: the
//!   coordinate is simply skipped this pass and picked up on a later one,
//!   once content exists.
//! - Eviction is configurable ([`EvictionPolicy`]) because the source
//!   gallery variants disagree: most let tiles accumulate forever, at least
//!   one reclaims everything outside the buffered window.
//! - The sink's handle is opaque. The tile set stores it and hands it back
//!   on eviction, and guarantees each handle is destroyed at most once (the
//!   handle moves into [`RenderSink::destroy`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Rect;
//! use mosaic_catalog::{AssignStrategy, ContentAssigner, ListingEntry, MediaCatalog, MediaRef};
//! use mosaic_grid::{CoordWindow, GridCoord, GridMetrics};
//! use mosaic_tiles::{EvictionPolicy, RenderSink, TileSet};
//!
//! // A sink that just counts live presentation elements.
//! #[derive(Default)]
//! struct Counting(usize);
//! impl RenderSink for Counting {
//!     type Handle = ();
//!     fn create(&mut self, _: GridCoord, _: Rect, _: &MediaRef) {
//!         self.0 += 1;
//!     }
//!     fn destroy(&mut self, _: ()) {
//!         self.0 -= 1;
//!     }
//! }
//!
//! let metrics = GridMetrics::new(150.0, 2.0);
//! let mut catalog = MediaCatalog::new();
//! let ticket = catalog.begin_fetch();
//! catalog.install(ticket, [ListingEntry::new("a.jpg", "https://x/a.jpg")], Duration::ZERO);
//! let mut assigner = ContentAssigner::new(AssignStrategy::FillOrder);
//!
//! let mut sink = Counting::default();
//! let mut tiles = TileSet::new(EvictionPolicy::ActiveWindow);
//!
//! let window = CoordWindow::new(0, 2, 0, 1);
//! let plan = tiles.reconcile(&window);
//! assert_eq!(plan.to_materialize.len(), 6);
//! tiles.apply(&plan, &metrics, 1.0, &mut assigner, &catalog, &mut sink);
//! assert_eq!(tiles.len(), 6);
//! assert_eq!(sink.0, 6);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod sink;
mod tile_set;

pub use sink::RenderSink;
pub use tile_set::{ApplyStats, EvictionPolicy, ReconcilePlan, Tile, TileSet};
