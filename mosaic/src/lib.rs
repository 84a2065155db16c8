// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic: an infinite-canvas media gallery engine.
//!
//! Mosaic lays a remote media catalog out on an endless 2D grid and keeps
//! only the tiles near the viewport materialized, creating and destroying
//! presentation elements as the user pans, scrolls, and zooms. This crate is
//! the wiring layer over the four cores:
//!
//! - [`mosaic_viewport`]: scroll/zoom camera state and drag tracking.
//! - [`mosaic_grid`]: viewport → coordinate-window resolution (pure math).
//! - [`mosaic_catalog`]: catalog snapshots and content assignment.
//! - [`mosaic_tiles`]: the materialized tile set and its reconciliation.
//!
//! A [`Gallery`] owns all of that state explicitly — there are no module
//! globals — and exposes exactly two entry points to the host:
//!
//! - [`Gallery::handle_input`] for normalized viewport inputs (scroll, drag,
//!   wheel, nudge, zoom, resize). Every input runs one reconciliation pass
//!   against the *current* viewport snapshot, so arbitrarily many
//!   intermediate states can be dropped under load without harm.
//! - [`Gallery::on_catalog_loaded`] (or the shuffling variant) for completed
//!   catalog fetches. Fetching itself stays in the host: the engine only
//!   issues tickets and installs results, rejecting stale completions.
//!
//! Everything presentation-side goes through the host's
//! [`RenderSink`] implementation, and the engine never blocks, spawns, or
//! reads a clock.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Rect, Size};
//! use mosaic::{
//!     Gallery, GalleryConfig, GridCoord, InputEvent, ListingEntry, MediaRef, RenderSink,
//! };
//!
//! // A toy sink that stores live tiles in a vector.
//! #[derive(Default)]
//! struct VecSink {
//!     next: u64,
//!     live: Vec<(u64, GridCoord, String)>,
//! }
//! impl RenderSink for VecSink {
//!     type Handle = u64;
//!     fn create(&mut self, coord: GridCoord, _frame: Rect, content: &MediaRef) -> u64 {
//!         self.next += 1;
//!         self.live.push((self.next, coord, content.url.clone()));
//!         self.next
//!     }
//!     fn destroy(&mut self, handle: u64) {
//!         self.live.retain(|(h, ..)| *h != handle);
//!     }
//! }
//!
//! let mut gallery = Gallery::new(GalleryConfig::default(), VecSink::default());
//! gallery.handle_input(InputEvent::Resize(Size::new(1024.0, 768.0)));
//!
//! // Nothing materializes until a catalog snapshot arrives.
//! assert!(gallery.sink().live.is_empty());
//!
//! let ticket = gallery.begin_catalog_fetch();
//! // ... the host fetches the listing asynchronously, then:
//! gallery.on_catalog_loaded(
//!     ticket,
//!     [
//!         ListingEntry::new("a.jpg", "https://cdn.example/a.jpg"),
//!         ListingEntry::new("b.mp4", "https://cdn.example/b.mp4"),
//!     ],
//!     Duration::ZERO,
//! );
//! assert!(!gallery.sink().live.is_empty());
//!
//! // Panning keeps the materialized set pinned to the view.
//! gallery.handle_input(InputEvent::ScrollBy((800.0, 0.0).into()));
//! gallery.handle_input(InputEvent::ZoomOut);
//! ```
//!
//! This crate is `no_std` and uses `alloc` through its component crates.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod input;

pub use config::GalleryConfig;
pub use engine::Gallery;
pub use input::{InputEvent, NudgeDirection};

pub use mosaic_catalog::{
    AssignStrategy, Assignment, ContentAssigner, FetchTicket, ListingEntry, MediaCatalog,
    MediaKind, MediaRef,
};
pub use mosaic_grid::{CoordWindow, GridCoord, GridMetrics, ZoomMode};
pub use mosaic_tiles::{ApplyStats, EvictionPolicy, ReconcilePlan, RenderSink, Tile, TileSet};
pub use mosaic_viewport::{CanvasViewport, PanDrag};
