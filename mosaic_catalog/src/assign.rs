// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate-to-content assignment strategies.

use mosaic_grid::GridCoord;

use crate::{MediaCatalog, MediaRef};

/// How grid coordinates map to catalog indices.
///
/// Source gallery variants genuinely diverge here, and the two behaviors
/// have different idempotence properties, so the choice is explicit
/// configuration rather than an implementation detail:
///
/// - [`FillOrder`](Self::FillOrder) reproduces the common "global counter"
///   variant: content is handed out in catalog order as tiles materialize,
///   regardless of where they are. Re-materializing a coordinate after an
///   eviction yields the *next* entry, not the one it had before.
/// - [`CoordinateHash`](Self::CoordinateHash) derives the index from the
///   coordinate itself (`|col + row|`), so a coordinate shows the same entry
///   every time it materializes within one catalog snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AssignStrategy {
    /// Insertion-order fill from a running counter.
    #[default]
    FillOrder,
    /// Index derived from the coordinate; stable across evictions.
    CoordinateHash,
}

/// A resolved assignment: the catalog index that was used and the entry it
/// landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment<'a> {
    /// Index before reduction modulo the catalog length.
    pub index: u64,
    /// The assigned media reference, borrowed from the catalog snapshot.
    pub content: &'a MediaRef,
}

/// Maps grid coordinates to media references through an [`AssignStrategy`].
///
/// The assigner owns the fill-order counter and nothing else; catalog data
/// is borrowed per call. Under [`AssignStrategy::FillOrder`] the counter
/// advances only on a successful assignment, so attempts against an empty
/// catalog consume nothing and the eventual retry starts from the front of
/// the catalog.
#[derive(Clone, Debug, Default)]
pub struct ContentAssigner {
    strategy: AssignStrategy,
    next_index: u64,
}

impl ContentAssigner {
    /// Creates an assigner with the given strategy and a zeroed counter.
    #[must_use]
    pub fn new(strategy: AssignStrategy) -> Self {
        Self {
            strategy,
            next_index: 0,
        }
    }

    /// The configured strategy.
    #[must_use]
    pub fn strategy(&self) -> AssignStrategy {
        self.strategy
    }

    /// The index the next successful assignment would use for `coord`.
    ///
    /// Pure: calling this does not advance the fill-order counter.
    #[must_use]
    pub fn index_for(&self, coord: GridCoord) -> u64 {
        match self.strategy {
            AssignStrategy::FillOrder => self.next_index,
            // The coordinate hash of the source variants: cheap, symmetric,
            // and stable. Anti-diagonal neighbors collide, which is harmless
            // for presentation and keeps the mapping easy to reason about.
            AssignStrategy::CoordinateHash => coord.col.wrapping_add(coord.row).unsigned_abs(),
        }
    }

    /// Resolves an index against a catalog snapshot: `catalog[index % len]`.
    ///
    /// Returns `None` on an empty catalog; callers treat that as "no
    /// content yet" and retry on a later pass.
    #[must_use]
    pub fn resolve<'a>(&self, catalog: &'a MediaCatalog, index: u64) -> Option<&'a MediaRef> {
        let len = catalog.len() as u64;
        if len == 0 {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "index % len < len, which came from a usize"
        )]
        let slot = (index % len) as usize;
        catalog.get(slot)
    }

    /// Assigns content for a materializing coordinate.
    ///
    /// On success, returns the index used and the entry it resolved to, and
    /// (under fill order) advances the counter. On an empty catalog returns
    /// `None` and leaves the counter untouched.
    pub fn assign<'a>(
        &mut self,
        catalog: &'a MediaCatalog,
        coord: GridCoord,
    ) -> Option<Assignment<'a>> {
        let index = self.index_for(coord);
        let content = self.resolve(catalog, index)?;
        if self.strategy == AssignStrategy::FillOrder {
            self.next_index += 1;
        }
        Some(Assignment { index, content })
    }

    /// Current fill-order counter position.
    #[must_use]
    pub fn fill_position(&self) -> u64 {
        self.next_index
    }

    /// Rewinds the fill-order counter to the front of the catalog.
    ///
    /// Hosts typically call this when a refresh installs a new snapshot, so
    /// fill order restarts from the new catalog's first entry.
    pub fn reset(&mut self) {
        self.next_index = 0;
    }
}
