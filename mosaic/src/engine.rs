// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gallery engine: explicit state plus the host-facing event interface.

use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use kurbo::Vec2;
use rand::Rng;

use mosaic_catalog::{ContentAssigner, FetchTicket, ListingEntry, MediaCatalog};
use mosaic_grid::{CoordWindow, GridCoord, GridMetrics};
use mosaic_tiles::{ApplyStats, ReconcilePlan, RenderSink, TileSet};
use mosaic_viewport::{CanvasViewport, PanDrag};

use crate::{GalleryConfig, InputEvent, NudgeDirection};

/// An infinite-canvas media gallery.
///
/// `Gallery` owns every piece of session state — viewport, drag gesture,
/// grid metrics, tile set, content assigner, and catalog — and drives them
/// from two host-facing entry points: [`handle_input`] for viewport events
/// and [`on_catalog_loaded`] for completed fetches. Both funnel into one
/// reconciliation pass that resolves the current viewport to a coordinate
/// window and diffs the tile set against it.
///
/// The engine is single-threaded and non-blocking by construction: it never
/// reads a clock (time arrives as data), never performs I/O (the catalog
/// fetch is a ticket/install handshake), and calls the [`RenderSink`]
/// synchronously from reconciliation.
///
/// [`handle_input`]: Gallery::handle_input
/// [`on_catalog_loaded`]: Gallery::on_catalog_loaded
pub struct Gallery<S: RenderSink> {
    config: GalleryConfig,
    metrics: GridMetrics,
    viewport: CanvasViewport,
    drag: PanDrag,
    tiles: TileSet<S::Handle>,
    assigner: ContentAssigner,
    catalog: MediaCatalog,
    sink: S,
    last_window: Option<CoordWindow>,
}

impl<S: RenderSink> Gallery<S> {
    /// Creates a gallery from configuration and a render sink.
    ///
    /// The viewport starts scrolled to the world center so the grid extends
    /// in every direction. No tiles exist until the first reconciliation
    /// pass runs with a non-empty catalog.
    #[must_use]
    pub fn new(config: GalleryConfig, sink: S) -> Self {
        let metrics = GridMetrics::new(config.tile_size, config.gap_size)
            .with_buffer_margin(config.buffer_margin)
            .with_world_center(config.world_center())
            .with_zoom_mode(config.zoom_mode);
        let mut viewport = CanvasViewport::new(config.view_size);
        viewport.set_zoom_step(config.zoom_step);
        viewport.scroll_to(config.world_center().to_point());

        let mut catalog = MediaCatalog::new();
        if let Some(ttl) = config.catalog_ttl {
            catalog = catalog.with_ttl(ttl);
        }

        Self {
            metrics,
            viewport,
            drag: PanDrag::default(),
            tiles: TileSet::new(config.eviction_policy),
            assigner: ContentAssigner::new(config.assign_strategy),
            catalog,
            sink,
            last_window: None,
            config,
        }
    }

    /// Applies one normalized input event and reconciles.
    ///
    /// Events mutate the viewport (or the drag gesture) first; the pass then
    /// reads the resulting snapshot, so only the latest state matters and
    /// high-frequency input is safe to feed through unfiltered.
    pub fn handle_input(&mut self, event: InputEvent) -> ApplyStats {
        match event {
            InputEvent::ScrollTo(origin) => self.viewport.scroll_to(origin),
            InputEvent::ScrollBy(delta) => self.viewport.scroll_by(delta),
            InputEvent::DragStart(at) => self.drag.begin(at),
            InputEvent::DragMove(at) => {
                if let Some(delta) = self.drag.move_to(at) {
                    self.viewport.scroll_by(delta);
                }
            }
            InputEvent::DragEnd => self.drag.finish(),
            InputEvent::Wheel {
                delta,
                zoom_modifier,
            } => {
                if zoom_modifier {
                    if delta.y < 0.0 {
                        self.viewport.zoom_in();
                    } else if delta.y > 0.0 {
                        self.viewport.zoom_out();
                    }
                } else {
                    self.viewport.scroll_by(delta);
                }
            }
            InputEvent::Nudge(direction) => {
                let nudge = self.viewport.nudge_amount();
                let delta = match direction {
                    NudgeDirection::Up => Vec2::new(0.0, -nudge.height),
                    NudgeDirection::Down => Vec2::new(0.0, nudge.height),
                    NudgeDirection::Left => Vec2::new(-nudge.width, 0.0),
                    NudgeDirection::Right => Vec2::new(nudge.width, 0.0),
                };
                self.viewport.scroll_by(delta);
            }
            InputEvent::ZoomIn => self.viewport.zoom_in(),
            InputEvent::ZoomOut => self.viewport.zoom_out(),
            InputEvent::Resize(size) => self.viewport.set_size(size),
        }
        self.reconcile()
    }

    /// Resolves the current viewport to a window and diffs the tile set
    /// against it.
    ///
    /// Normally invoked through [`Gallery::handle_input`] and the catalog
    /// callbacks; exposed for hosts that change state out of band (for
    /// example after swapping the sink's underlying surface).
    pub fn reconcile(&mut self) -> ApplyStats {
        let window = self.metrics.visible_window(
            self.viewport.origin(),
            self.viewport.size(),
            self.viewport.scale(),
        );
        let plan = self.tiles.reconcile(&window);
        let stats = self.apply(&plan);
        self.last_window = Some(window);
        stats
    }

    /// Materializes an initial block of tiles around the starting position.
    ///
    /// Call once after construction (and typically after the first catalog
    /// install) to fill the screen before any input arrives. The block is a
    /// square of the configured radius centered on the window the current
    /// viewport resolves to; the pass only adds tiles, never evicts.
    pub fn prime(&mut self) -> ApplyStats {
        let window = self.metrics.visible_window(
            self.viewport.origin(),
            self.viewport.size(),
            self.viewport.scale(),
        );
        let center = GridCoord::new(
            (window.col_min + window.col_max) / 2,
            (window.row_min + window.row_max) / 2,
        );
        let block = CoordWindow::centered(center, self.config.initial_fill_radius);
        let plan = ReconcilePlan {
            to_materialize: block
                .coords()
                .filter(|coord| !self.tiles.contains(*coord))
                .collect(),
            to_evict: Vec::new(),
        };
        self.apply(&plan)
    }

    /// Issues a ticket for a catalog fetch the host is about to start.
    pub fn begin_catalog_fetch(&mut self) -> FetchTicket {
        self.catalog.begin_fetch()
    }

    /// Installs a completed catalog fetch and reconciles.
    ///
    /// Returns `false` if the ticket lost the race against a newer fetch;
    /// the gallery is untouched in that case. On success the fill-order
    /// counter restarts and a reconciliation pass runs immediately, so
    /// coordinates that were deferred while the catalog was empty
    /// materialize without waiting for the next input event.
    pub fn on_catalog_loaded<I>(&mut self, ticket: FetchTicket, listing: I, now: Duration) -> bool
    where
        I: IntoIterator<Item = ListingEntry>,
    {
        if !self.catalog.install(ticket, listing, now) {
            return false;
        }
        self.assigner.reset();
        self.reconcile();
        true
    }

    /// Like [`Gallery::on_catalog_loaded`], but applies the shuffle-once
    /// permutation before the snapshot is first used.
    pub fn on_catalog_loaded_shuffled<I, R>(
        &mut self,
        ticket: FetchTicket,
        listing: I,
        now: Duration,
        rng: &mut R,
    ) -> bool
    where
        I: IntoIterator<Item = ListingEntry>,
        R: Rng + ?Sized,
    {
        if !self.catalog.install(ticket, listing, now) {
            return false;
        }
        self.catalog.shuffle(rng);
        self.assigner.reset();
        self.reconcile();
        true
    }

    /// Returns `true` when the catalog TTL has lapsed and the host should
    /// start a refresh fetch.
    #[must_use]
    pub fn needs_catalog_refresh(&self, now: Duration) -> bool {
        self.catalog.is_stale(now)
    }

    /// The current viewport state.
    #[must_use]
    pub fn viewport(&self) -> &CanvasViewport {
        &self.viewport
    }

    /// The grid metrics derived from configuration.
    #[must_use]
    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    /// The materialized tile set.
    #[must_use]
    pub fn tiles(&self) -> &TileSet<S::Handle> {
        &self.tiles
    }

    /// The current catalog snapshot.
    #[must_use]
    pub fn catalog(&self) -> &MediaCatalog {
        &self.catalog
    }

    /// The render sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the render sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// The window produced by the most recent reconciliation pass, if any.
    #[must_use]
    pub fn last_window(&self) -> Option<CoordWindow> {
        self.last_window
    }

    fn apply(&mut self, plan: &ReconcilePlan) -> ApplyStats {
        self.tiles.apply(
            plan,
            &self.metrics,
            self.viewport.scale(),
            &mut self.assigner,
            &self.catalog,
            &mut self.sink,
        )
    }
}

impl<S: RenderSink> fmt::Debug for Gallery<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gallery")
            .field("viewport", &self.viewport)
            .field("resident_tiles", &self.tiles.len())
            .field("catalog_entries", &self.catalog.len())
            .field("last_window", &self.last_window)
            .finish_non_exhaustive()
    }
}
