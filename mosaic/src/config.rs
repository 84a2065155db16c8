// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gallery configuration.

use core::time::Duration;

use kurbo::{Size, Vec2};
use mosaic_catalog::AssignStrategy;
use mosaic_grid::ZoomMode;
use mosaic_tiles::EvictionPolicy;
use mosaic_viewport::DEFAULT_ZOOM_STEP;

/// Layout, policy, and cadence settings for a [`Gallery`](crate::Gallery).
///
/// The defaults reproduce the classic infinite-gallery setup: 150px tiles
/// with a 2px gap, a 2-tile prefetch buffer, a 5000px scroll world entered
/// at its center, and a 5-minute catalog TTL. Behavioral choices that real
/// gallery variants disagree on — zoom interpretation, eviction, content
/// assignment — are explicit fields rather than baked-in defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    /// Tile edge length, in layout units.
    pub tile_size: f64,
    /// Gap between adjacent tiles, in layout units.
    pub gap_size: f64,
    /// Prefetch buffer margin, in whole tiles per side.
    pub buffer_margin: i64,
    /// Edge length of the square scroll world; the grid origin sits at its
    /// center so coordinates extend in every direction.
    pub world_size: f64,
    /// Initial viewport size; hosts should follow up with
    /// [`InputEvent::Resize`](crate::InputEvent::Resize) once the real view
    /// dimensions are known.
    pub view_size: Size,
    /// Chebyshev radius of the initial fill block around the starting
    /// position (see [`Gallery::prime`](crate::Gallery::prime)).
    pub initial_fill_radius: i64,
    /// Multiplicative ratio applied per zoom step.
    pub zoom_step: f64,
    /// How the zoom factor is interpreted by layout.
    pub zoom_mode: ZoomMode,
    /// What happens to tiles that leave the buffered window.
    pub eviction_policy: EvictionPolicy,
    /// How grid coordinates map to catalog content.
    pub assign_strategy: AssignStrategy,
    /// Catalog snapshot time-to-live; `None` disables refresh prompting.
    pub catalog_ttl: Option<Duration>,
}

impl GalleryConfig {
    /// The world-center offset implied by `world_size`.
    #[must_use]
    pub fn world_center(&self) -> Vec2 {
        Vec2::new(self.world_size / 2.0, self.world_size / 2.0)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            tile_size: 150.0,
            gap_size: 2.0,
            buffer_margin: 2,
            world_size: 5000.0,
            view_size: Size::new(800.0, 600.0),
            initial_fill_radius: 5,
            zoom_step: DEFAULT_ZOOM_STEP,
            zoom_mode: ZoomMode::default(),
            eviction_policy: EvictionPolicy::default(),
            assign_strategy: AssignStrategy::default(),
            catalog_ttl: Some(Duration::from_secs(300)),
        }
    }
}
