// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The materialized tile set and its reconciliation against desired windows.

use alloc::vec::Vec;

use hashbrown::HashMap;
use mosaic_catalog::{ContentAssigner, MediaCatalog, MediaRef};
use mosaic_grid::{CoordWindow, GridCoord, GridMetrics};

use crate::RenderSink;

/// What happens to tiles that fall outside the desired window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Evict any resident coordinate outside the buffered window on the next
    /// reconciliation pass. Keeps the tile set proportional to the window.
    #[default]
    ActiveWindow,
    /// Never evict: tiles accumulate for the whole session. Matches the
    /// majority of source gallery variants; memory grows with the area ever
    /// visited.
    AppendOnly,
}

/// One materialized grid cell.
///
/// A tile pairs a coordinate with the content assigned at materialization
/// time and the presentation handle the sink returned for it. The content is
/// an owned snapshot: a later catalog refresh does not retroactively change
/// what an already-materialized tile shows.
#[derive(Clone, Debug)]
pub struct Tile<H> {
    coord: GridCoord,
    content_index: u64,
    content: MediaRef,
    handle: H,
}

impl<H> Tile<H> {
    /// The tile's grid coordinate.
    #[must_use]
    pub fn coord(&self) -> GridCoord {
        self.coord
    }

    /// The catalog index the content was resolved from (before modulo).
    #[must_use]
    pub fn content_index(&self) -> u64 {
        self.content_index
    }

    /// The media reference assigned to this tile.
    #[must_use]
    pub fn content(&self) -> &MediaRef {
        &self.content
    }

    /// The sink's handle for the tile's presentation element.
    #[must_use]
    pub fn handle(&self) -> &H {
        &self.handle
    }
}

/// The difference between the current tile set and a desired window.
///
/// Produced by [`TileSet::reconcile`]; consumed by [`TileSet::apply`].
/// `to_materialize` is in row-major window order, `to_evict` is sorted, so a
/// plan is deterministic for a given tile set and window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Coordinates in the window with no resident tile.
    pub to_materialize: Vec<GridCoord>,
    /// Resident coordinates no longer in the window.
    pub to_evict: Vec<GridCoord>,
}

impl ReconcilePlan {
    /// Returns `true` when the plan changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_materialize.is_empty() && self.to_evict.is_empty()
    }
}

/// Counters describing what one [`TileSet::apply`] pass actually did.
///
/// `deferred` counts materializations skipped because the catalog was empty;
/// those coordinates stay absent and are retried by later passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Tiles created this pass.
    pub materialized: usize,
    /// Tiles destroyed this pass.
    pub evicted: usize,
    /// Materializations skipped for lack of catalog content.
    pub deferred: usize,
}

/// The set of currently materialized tiles, keyed uniquely by coordinate.
///
/// All mutation goes through [`materialize`], [`evict`], and [`apply`], which
/// keep the one-tile-per-coordinate invariant and route presentation changes
/// through the host's [`RenderSink`]. Reconciliation cost is proportional to
/// the window size plus the resident set, never to the number of tiles ever
/// created.
///
/// [`materialize`]: TileSet::materialize
/// [`evict`]: TileSet::evict
/// [`apply`]: TileSet::apply
#[derive(Debug)]
pub struct TileSet<H> {
    tiles: HashMap<GridCoord, Tile<H>>,
    policy: EvictionPolicy,
}

impl<H> Default for TileSet<H> {
    fn default() -> Self {
        Self::new(EvictionPolicy::default())
    }
}

impl<H> TileSet<H> {
    /// Creates an empty tile set with the given eviction policy.
    #[must_use]
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            tiles: HashMap::new(),
            policy,
        }
    }

    /// The configured eviction policy.
    #[must_use]
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Number of resident tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` when no tiles are resident.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns `true` if a tile is resident at `coord`.
    #[must_use]
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.tiles.contains_key(&coord)
    }

    /// The resident tile at `coord`, if any.
    #[must_use]
    pub fn get(&self, coord: GridCoord) -> Option<&Tile<H>> {
        self.tiles.get(&coord)
    }

    /// Iterates the resident tiles in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile<H>> {
        self.tiles.values()
    }

    /// Diffs the tile set against a desired window.
    ///
    /// Pure with respect to the tile set: nothing is created or destroyed
    /// until the plan is applied. Under [`EvictionPolicy::AppendOnly`] the
    /// evict half is always empty.
    #[must_use]
    pub fn reconcile(&self, window: &CoordWindow) -> ReconcilePlan {
        let to_materialize = window
            .coords()
            .filter(|coord| !self.tiles.contains_key(coord))
            .collect();
        let mut to_evict: Vec<GridCoord> = match self.policy {
            EvictionPolicy::AppendOnly => Vec::new(),
            EvictionPolicy::ActiveWindow => self
                .tiles
                .keys()
                .filter(|coord| !window.contains(**coord))
                .copied()
                .collect(),
        };
        // Map iteration order is arbitrary; sort so plans are reproducible.
        to_evict.sort_unstable();
        ReconcilePlan {
            to_materialize,
            to_evict,
        }
    }

    /// Materializes a tile at `coord` if absent and content is available.
    ///
    /// Returns `Some(true)` when a tile was created, `Some(false)` for the
    /// idempotent already-resident case, and `None` when the catalog had no
    /// content to assign (the deferred case).
    pub fn materialize<S>(
        &mut self,
        coord: GridCoord,
        metrics: &GridMetrics,
        scale: f64,
        assigner: &mut ContentAssigner,
        catalog: &MediaCatalog,
        sink: &mut S,
    ) -> Option<bool>
    where
        S: RenderSink<Handle = H>,
    {
        if self.tiles.contains_key(&coord) {
            return Some(false);
        }
        let assignment = assigner.assign(catalog, coord)?;
        let content = assignment.content.clone();
        let frame = metrics.cell_frame(coord, scale);
        let handle = sink.create(coord, frame, &content);
        self.tiles.insert(
            coord,
            Tile {
                coord,
                content_index: assignment.index,
                content,
                handle,
            },
        );
        Some(true)
    }

    /// Evicts the tile at `coord`, destroying its presentation element.
    ///
    /// Returns `false` (and does nothing) when no tile is resident there.
    pub fn evict<S>(&mut self, coord: GridCoord, sink: &mut S) -> bool
    where
        S: RenderSink<Handle = H>,
    {
        match self.tiles.remove(&coord) {
            Some(tile) => {
                sink.destroy(tile.handle);
                true
            }
            None => false,
        }
    }

    /// Applies a reconciliation plan: evictions first, then
    /// materializations in the plan's order.
    pub fn apply<S>(
        &mut self,
        plan: &ReconcilePlan,
        metrics: &GridMetrics,
        scale: f64,
        assigner: &mut ContentAssigner,
        catalog: &MediaCatalog,
        sink: &mut S,
    ) -> ApplyStats
    where
        S: RenderSink<Handle = H>,
    {
        let mut stats = ApplyStats::default();
        for &coord in &plan.to_evict {
            if self.evict(coord, sink) {
                stats.evicted += 1;
            }
        }
        for &coord in &plan.to_materialize {
            match self.materialize(coord, metrics, scale, assigner, catalog, sink) {
                Some(true) => stats.materialized += 1,
                Some(false) => {}
                None => stats.deferred += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::time::Duration;

    use kurbo::Rect;
    use mosaic_catalog::{
        AssignStrategy, ContentAssigner, ListingEntry, MediaCatalog, MediaRef,
    };
    use mosaic_grid::{CoordWindow, GridCoord, GridMetrics};

    use super::{ApplyStats, EvictionPolicy, TileSet};
    use crate::RenderSink;

    /// Records every sink call; handles are unique sequence numbers.
    #[derive(Default)]
    struct RecordingSink {
        next_handle: u64,
        created: Vec<(GridCoord, Rect, String)>,
        destroyed: Vec<u64>,
    }

    impl RenderSink for RecordingSink {
        type Handle = u64;

        fn create(&mut self, coord: GridCoord, frame: Rect, content: &MediaRef) -> u64 {
            self.next_handle += 1;
            self.created.push((coord, frame, content.url.clone()));
            self.next_handle
        }

        fn destroy(&mut self, handle: u64) {
            self.destroyed.push(handle);
        }
    }

    fn catalog_of(count: usize) -> MediaCatalog {
        let mut catalog = MediaCatalog::new();
        let ticket = catalog.begin_fetch();
        let entries: Vec<ListingEntry> = (0..count)
            .map(|i| ListingEntry::new("x.jpg", alloc::format!("https://cdn.example/{i}.jpg")))
            .collect();
        catalog.install(ticket, entries, Duration::ZERO);
        catalog
    }

    fn fixture() -> (GridMetrics, MediaCatalog, ContentAssigner, RecordingSink) {
        (
            GridMetrics::new(150.0, 2.0),
            catalog_of(3),
            ContentAssigner::new(AssignStrategy::FillOrder),
            RecordingSink::default(),
        )
    }

    #[test]
    fn growing_the_window_materializes_only_the_difference() {
        let (metrics, catalog, mut assigner, mut sink) = fixture();
        let mut tiles = TileSet::new(EvictionPolicy::ActiveWindow);

        let small = CoordWindow::new(0, 1, 0, 1);
        let plan = tiles.reconcile(&small);
        tiles.apply(&plan, &metrics, 1.0, &mut assigner, &catalog, &mut sink);
        assert_eq!(tiles.len(), 4);

        let large = CoordWindow::new(-1, 2, -1, 2);
        assert!(large.contains_window(&small));
        let plan = tiles.reconcile(&large);
        // 16 cells total, 4 already resident.
        assert_eq!(plan.to_materialize.len(), 12);
        assert!(plan.to_evict.is_empty());
        for coord in &plan.to_materialize {
            assert!(!small.contains(*coord), "{coord} was already materialized");
        }

        let stats = tiles.apply(&plan, &metrics, 1.0, &mut assigner, &catalog, &mut sink);
        assert_eq!(stats.materialized, 12);
        assert_eq!(tiles.len(), 16);
        assert_eq!(sink.created.len(), 16);
    }

    #[test]
    fn materialize_is_idempotent() {
        let (metrics, catalog, mut assigner, mut sink) = fixture();
        let mut tiles = TileSet::default();
        let coord = GridCoord::new(2, 3);

        let first = tiles.materialize(coord, &metrics, 1.0, &mut assigner, &catalog, &mut sink);
        let second = tiles.materialize(coord, &metrics, 1.0, &mut assigner, &catalog, &mut sink);
        assert_eq!(first, Some(true));
        assert_eq!(second, Some(false));
        assert_eq!(tiles.len(), 1);
        assert_eq!(sink.created.len(), 1, "one materialize-event only");
    }

    #[test]
    fn empty_catalog_defers_then_succeeds() {
        let (metrics, _, mut assigner, mut sink) = fixture();
        let empty = MediaCatalog::new();
        let mut tiles = TileSet::<u64>::default();
        let coord = GridCoord::ORIGIN;

        assert_eq!(
            tiles.materialize(coord, &metrics, 1.0, &mut assigner, &empty, &mut sink),
            None
        );
        assert!(tiles.is_empty());
        assert!(sink.created.is_empty());

        // Same coordinate, once content exists: succeeds transparently.
        let catalog = catalog_of(1);
        assert_eq!(
            tiles.materialize(coord, &metrics, 1.0, &mut assigner, &catalog, &mut sink),
            Some(true)
        );
        assert_eq!(tiles.len(), 1);
    }

    #[test]
    fn active_window_policy_evicts_out_of_window_tiles() {
        let (metrics, catalog, mut assigner, mut sink) = fixture();
        let mut tiles = TileSet::new(EvictionPolicy::ActiveWindow);

        let here = CoordWindow::new(0, 1, 0, 0);
        let plan = tiles.reconcile(&here);
        tiles.apply(&plan, &metrics, 1.0, &mut assigner, &catalog, &mut sink);

        // Pan far enough that the windows are disjoint.
        let there = CoordWindow::new(10, 11, 0, 0);
        let plan = tiles.reconcile(&there);
        assert_eq!(plan.to_evict.len(), 2);
        let stats = tiles.apply(&plan, &metrics, 1.0, &mut assigner, &catalog, &mut sink);
        assert_eq!(
            stats,
            ApplyStats {
                materialized: 2,
                evicted: 2,
                deferred: 0
            }
        );
        assert_eq!(tiles.len(), 2);
        assert!(!tiles.contains(GridCoord::new(0, 0)));
        assert_eq!(sink.destroyed.len(), 2);

        // Every resident tile is inside the latest window.
        for tile in tiles.iter() {
            assert!(there.contains(tile.coord()), "{} leaked", tile.coord());
        }
    }

    #[test]
    fn append_only_policy_never_evicts() {
        let (metrics, catalog, mut assigner, mut sink) = fixture();
        let mut tiles = TileSet::new(EvictionPolicy::AppendOnly);

        let here = CoordWindow::new(0, 1, 0, 0);
        let plan = tiles.reconcile(&here);
        tiles.apply(&plan, &metrics, 1.0, &mut assigner, &catalog, &mut sink);
        let there = CoordWindow::new(10, 11, 0, 0);
        let plan = tiles.reconcile(&there);
        assert!(plan.to_evict.is_empty());
        tiles.apply(&plan, &metrics, 1.0, &mut assigner, &catalog, &mut sink);

        assert_eq!(tiles.len(), 4);
        assert!(sink.destroyed.is_empty());
    }

    #[test]
    fn evict_tolerates_absent_coordinates() {
        let (_, _, _, mut sink) = fixture();
        let mut tiles = TileSet::<u64>::default();
        assert!(!tiles.evict(GridCoord::new(5, 5), &mut sink));
        assert!(sink.destroyed.is_empty());
    }

    #[test]
    fn handles_are_destroyed_exactly_once() {
        let (metrics, catalog, mut assigner, mut sink) = fixture();
        let mut tiles = TileSet::default();
        let coord = GridCoord::ORIGIN;

        tiles.materialize(coord, &metrics, 1.0, &mut assigner, &catalog, &mut sink);
        assert!(tiles.evict(coord, &mut sink));
        assert!(!tiles.evict(coord, &mut sink));
        assert_eq!(sink.destroyed, [1]);
    }

    #[test]
    fn tiles_are_placed_at_their_cell_frame() {
        let (metrics, catalog, mut assigner, mut sink) = fixture();
        let mut tiles = TileSet::default();
        let coord = GridCoord::new(3, -2);

        tiles.materialize(coord, &metrics, 1.0, &mut assigner, &catalog, &mut sink);
        let (created_coord, frame, _) = &sink.created[0];
        assert_eq!(*created_coord, coord);
        assert_eq!(*frame, metrics.cell_frame(coord, 1.0));
    }

    #[test]
    fn sequential_content_follows_fill_order() {
        let (metrics, catalog, mut assigner, mut sink) = fixture();
        let mut tiles = TileSet::default();
        for col in 0..4 {
            tiles.materialize(
                GridCoord::new(col, 0),
                &metrics,
                1.0,
                &mut assigner,
                &catalog,
                &mut sink,
            );
        }
        let urls: Vec<&str> = sink.created.iter().map(|(_, _, url)| url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://cdn.example/0.jpg",
                "https://cdn.example/1.jpg",
                "https://cdn.example/2.jpg",
                "https://cdn.example/0.jpg",
            ]
        );
    }

    #[test]
    fn coordinate_hash_content_survives_an_evict_cycle() {
        let (metrics, catalog, _, mut sink) = fixture();
        let mut assigner = ContentAssigner::new(AssignStrategy::CoordinateHash);
        let mut tiles = TileSet::default();
        let coord = GridCoord::new(4, 1);

        tiles.materialize(coord, &metrics, 1.0, &mut assigner, &catalog, &mut sink);
        let before = tiles.get(coord).unwrap().content().clone();
        tiles.evict(coord, &mut sink);
        tiles.materialize(coord, &metrics, 1.0, &mut assigner, &catalog, &mut sink);
        let after = tiles.get(coord).unwrap().content().clone();
        assert_eq!(before, after);
    }
}
