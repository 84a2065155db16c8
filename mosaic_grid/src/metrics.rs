// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid metrics: stride math, window resolution, and cell placement.

use kurbo::{Point, Rect, Size, Vec2};

use crate::{CoordWindow, GridCoord};

/// Smallest scale factor the grid math will accept.
///
/// Zoom steps are multiplicative (a host typically applies `x1.1` / `/1.1`
/// per click), so without a floor an unbounded zoom-out would drive the
/// effective stride toward zero and the visible window toward infinity.
pub const MIN_SCALE: f64 = 1e-3;

/// Largest scale factor the grid math will accept.
pub const MAX_SCALE: f64 = 1e3;

/// Smallest accepted tile size, in layout units.
const MIN_TILE_SIZE: f64 = 1.0;

/// How a zoom factor is interpreted by the grid math.
///
/// Both interpretations appear in real infinite-canvas galleries; the mode is
/// an explicit configuration so window resolution and cell placement always
/// agree on one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// Zoom rescales the layout itself: cell frames are in document pixels
    /// and the stride is multiplied by the scale factor. The viewport origin
    /// is a document-pixel scroll offset.
    #[default]
    RescaleLayout,
    /// Zoom only moves the camera: the layout is fixed in world units and the
    /// scale factor widens or narrows the world span covered by the viewport.
    /// Cell frames are in world units; the host applies the camera transform.
    CameraOnly,
}

/// Layout parameters of the tile grid.
///
/// `GridMetrics` is a plain value: construct it once from configuration and
/// share it between window resolution and cell placement. All methods are
/// pure, so the same inputs always produce the same window or frame.
///
/// Degenerate geometry is rejected at the boundary rather than propagated:
/// the constructor clamps the tile size to a positive minimum and the gap to
/// a non-negative value, and every method clamps the scale factor into
/// `[MIN_SCALE, MAX_SCALE]`. The effective stride is therefore always
/// positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    tile_size: f64,
    gap_size: f64,
    buffer_margin: i64,
    world_center: Vec2,
    zoom_mode: ZoomMode,
}

impl GridMetrics {
    /// Creates metrics for square tiles of `tile_size` separated by
    /// `gap_size`, with no buffer margin and the world center at the origin.
    ///
    /// Non-finite or too-small tile sizes fall back to a 1-unit tile;
    /// non-finite or negative gaps fall back to zero.
    #[must_use]
    pub fn new(tile_size: f64, gap_size: f64) -> Self {
        let tile_size = if tile_size.is_finite() && tile_size >= MIN_TILE_SIZE {
            tile_size
        } else {
            MIN_TILE_SIZE
        };
        let gap_size = if gap_size.is_finite() && gap_size > 0.0 {
            gap_size
        } else {
            0.0
        };
        Self {
            tile_size,
            gap_size,
            buffer_margin: 0,
            world_center: Vec2::ZERO,
            zoom_mode: ZoomMode::default(),
        }
    }

    /// Sets the prefetch buffer margin, in whole tiles per side.
    ///
    /// The visible window is expanded by this many coordinates in every
    /// direction so that panning reveals already-materialized tiles.
    /// Negative margins are treated as zero.
    #[must_use]
    pub fn with_buffer_margin(mut self, margin: i64) -> Self {
        self.buffer_margin = margin.max(0);
        self
    }

    /// Sets the world-center offset.
    ///
    /// Cell `(0, 0)` is placed at this offset, which lets a host park the
    /// grid origin in the middle of a large scroll area so that negative
    /// coordinates stay addressable.
    #[must_use]
    pub fn with_world_center(mut self, center: Vec2) -> Self {
        self.world_center = center;
        self
    }

    /// Sets the zoom interpretation used by window resolution and placement.
    #[must_use]
    pub fn with_zoom_mode(mut self, mode: ZoomMode) -> Self {
        self.zoom_mode = mode;
        self
    }

    /// Tile edge length, in layout units.
    #[must_use]
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Gap between adjacent tiles, in layout units.
    #[must_use]
    pub fn gap_size(&self) -> f64 {
        self.gap_size
    }

    /// Prefetch buffer margin, in whole tiles per side.
    #[must_use]
    pub fn buffer_margin(&self) -> i64 {
        self.buffer_margin
    }

    /// World-center offset applied to cell placement.
    #[must_use]
    pub fn world_center(&self) -> Vec2 {
        self.world_center
    }

    /// The configured zoom interpretation.
    #[must_use]
    pub fn zoom_mode(&self) -> ZoomMode {
        self.zoom_mode
    }

    /// Unscaled distance between adjacent cell origins: tile size plus gap.
    #[must_use]
    pub fn base_stride(&self) -> f64 {
        self.tile_size + self.gap_size
    }

    /// Effective distance between adjacent cell origins at the given scale.
    ///
    /// Always positive: the scale is clamped into `[MIN_SCALE, MAX_SCALE]`
    /// first, and under [`ZoomMode::CameraOnly`] the stride ignores the scale
    /// entirely.
    #[must_use]
    pub fn stride(&self, scale: f64) -> f64 {
        match self.zoom_mode {
            ZoomMode::RescaleLayout => self.base_stride() * clamp_scale(scale),
            ZoomMode::CameraOnly => self.base_stride(),
        }
    }

    /// Resolves the inclusive window of grid coordinates covered by a
    /// viewport, expanded by the buffer margin.
    ///
    /// `origin` is the viewport's scroll position and `size` its extent, both
    /// in the layout space selected by the zoom mode (document pixels for
    /// [`ZoomMode::RescaleLayout`], world units for [`ZoomMode::CameraOnly`]).
    ///
    /// The bounds follow the floor/ceil convention: the minimum column is
    /// `floor(x / stride)` and the maximum is `ceil((x + width) / stride)`,
    /// each pushed outward by the buffer margin. Negative sizes are treated
    /// as empty extents.
    #[must_use]
    pub fn visible_window(&self, origin: Point, size: Size, scale: f64) -> CoordWindow {
        let scale = clamp_scale(scale);
        let stride = self.stride(scale);
        let width = size.width.max(0.0);
        let height = size.height.max(0.0);

        let x = origin.x - self.world_center.x;
        let y = origin.y - self.world_center.y;
        // Under CameraOnly the viewport extent is in device pixels while the
        // layout is in world units, so the covered span grows as scale drops.
        let (far_x, far_y) = match self.zoom_mode {
            ZoomMode::RescaleLayout => (x + width, y + height),
            ZoomMode::CameraOnly => (x + width / scale, y + height / scale),
        };

        let margin = self.buffer_margin;
        CoordWindow {
            col_min: floor_div(x, stride) - margin,
            col_max: ceil_div(far_x, stride) + margin,
            row_min: floor_div(y, stride) - margin,
            row_max: ceil_div(far_y, stride) + margin,
        }
    }

    /// Pixel (or world-unit) frame of one grid cell at the given scale.
    ///
    /// Placement uses the same stride as [`GridMetrics::visible_window`], so
    /// every cell whose frame touches a viewport rectangle is contained in
    /// that viewport's window. (The converse over-approximates: the ceil
    /// bound can include one extra cell past the far edges, which is what
    /// masks pop-in while panning.)
    #[must_use]
    pub fn cell_frame(&self, coord: GridCoord, scale: f64) -> Rect {
        let scale = clamp_scale(scale);
        let stride = self.stride(scale);
        let edge = match self.zoom_mode {
            ZoomMode::RescaleLayout => self.tile_size * scale,
            ZoomMode::CameraOnly => self.tile_size,
        };
        let origin = Point::new(
            self.world_center.x + coord.col as f64 * stride,
            self.world_center.y + coord.row as f64 * stride,
        );
        Rect::from_origin_size(origin, Size::new(edge, edge))
    }
}

fn clamp_scale(scale: f64) -> f64 {
    if scale.is_finite() {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    } else {
        1.0
    }
}

/// `floor(value / divisor)` as an integer coordinate, without `std` floats.
fn floor_div(value: f64, divisor: f64) -> i64 {
    let q = value / divisor;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "saturating cast; quotient is corrected to the true floor below"
    )]
    let t = q as i64;
    if (t as f64) > q { t - 1 } else { t }
}

/// `ceil(value / divisor)` as an integer coordinate, without `std` floats.
fn ceil_div(value: f64, divisor: f64) -> i64 {
    let q = value / divisor;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "saturating cast; quotient is corrected to the true ceiling below"
    )]
    let t = q as i64;
    if (t as f64) < q { t + 1 } else { t }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{GridMetrics, MAX_SCALE, MIN_SCALE, ZoomMode, ceil_div, floor_div};
    use crate::GridCoord;

    fn reference_metrics() -> GridMetrics {
        GridMetrics::new(150.0, 2.0).with_buffer_margin(2)
    }

    #[test]
    fn floor_and_ceil_handle_negative_quotients() {
        assert_eq!(floor_div(-1.0, 152.0), -1);
        assert_eq!(ceil_div(-1.0, 152.0), 0);
        assert_eq!(floor_div(0.0, 152.0), 0);
        assert_eq!(ceil_div(0.0, 152.0), 0);
        assert_eq!(floor_div(304.0, 152.0), 2);
        assert_eq!(ceil_div(304.5, 152.0), 3);
    }

    #[test]
    fn window_matches_reference_scenario() {
        // 800x600 viewport at the origin, stride 152: six columns and four
        // rows strictly cover the pixels, buffered by two on every side.
        let window =
            reference_metrics().visible_window(Point::ZERO, Size::new(800.0, 600.0), 1.0);
        assert_eq!(window.col_min, -2);
        assert_eq!(window.col_max, 8);
        assert_eq!(window.row_min, -2);
        assert_eq!(window.row_max, 6);
    }

    #[test]
    fn window_is_pure() {
        let metrics = reference_metrics();
        let origin = Point::new(1234.5, -678.9);
        let size = Size::new(1024.0, 768.0);
        let a = metrics.visible_window(origin, size, 0.7);
        let b = metrics.visible_window(origin, size, 0.7);
        assert_eq!(a, b);
    }

    #[test]
    fn halving_scale_doubles_window_span() {
        let metrics = GridMetrics::new(150.0, 2.0);
        let size = Size::new(800.0, 600.0);

        let full = metrics.visible_window(Point::ZERO, size, 1.0);
        let half = metrics.visible_window(Point::ZERO, size, 0.5);
        // ceil(800 / 76) = 11 vs ceil(800 / 152) = 6.
        assert_eq!(full.col_max, 6);
        assert_eq!(half.col_max, 11);
        assert!(half.count() > full.count());

        // CameraOnly reaches the same span by widening the world coverage.
        let camera = GridMetrics::new(150.0, 2.0).with_zoom_mode(ZoomMode::CameraOnly);
        let camera_half = camera.visible_window(Point::ZERO, size, 0.5);
        assert_eq!(camera_half.col_max, 11);
    }

    #[test]
    fn world_center_shifts_the_window() {
        let metrics = GridMetrics::new(150.0, 2.0).with_world_center(Vec2::new(2500.0, 2500.0));
        let window = metrics.visible_window(Point::new(2500.0, 2500.0), Size::new(152.0, 152.0), 1.0);
        assert_eq!((window.col_min, window.row_min), (0, 0));
        assert_eq!((window.col_max, window.row_max), (1, 1));
    }

    #[test]
    fn degenerate_inputs_are_clamped() {
        // Zero/negative/NaN tile sizes cannot produce a non-positive stride.
        assert!(GridMetrics::new(0.0, -3.0).base_stride() > 0.0);
        assert!(GridMetrics::new(f64::NAN, f64::NAN).base_stride() > 0.0);

        let metrics = reference_metrics();
        assert!(metrics.stride(0.0) > 0.0);
        assert!(metrics.stride(-4.0) > 0.0);
        assert!(metrics.stride(f64::INFINITY).is_finite());

        // Scale clamping bounds the window even for absurd zoom requests.
        let tiny = metrics.visible_window(Point::ZERO, Size::new(800.0, 600.0), 0.0);
        let floor = metrics.visible_window(Point::ZERO, Size::new(800.0, 600.0), MIN_SCALE);
        assert_eq!(tiny, floor);
        let huge = metrics.visible_window(Point::ZERO, Size::new(800.0, 600.0), f64::MAX);
        let ceil = metrics.visible_window(Point::ZERO, Size::new(800.0, 600.0), MAX_SCALE);
        assert_eq!(huge, ceil);
    }

    #[test]
    fn cell_frame_scales_with_layout_zoom() {
        let metrics = GridMetrics::new(150.0, 2.0);
        let frame = metrics.cell_frame(GridCoord::new(2, -1), 2.0);
        assert_eq!(frame.x0, 2.0 * 152.0 * 2.0);
        assert_eq!(frame.y0, -1.0 * 152.0 * 2.0);
        assert_eq!(frame.width(), 300.0);

        let camera = GridMetrics::new(150.0, 2.0).with_zoom_mode(ZoomMode::CameraOnly);
        let fixed = camera.cell_frame(GridCoord::new(2, -1), 2.0);
        assert_eq!(fixed.x0, 2.0 * 152.0);
        assert_eq!(fixed.width(), 150.0);
    }

    #[test]
    fn every_visible_cell_is_inside_the_window() {
        let metrics = GridMetrics::new(150.0, 2.0);
        let origin = Point::new(300.0, 450.0);
        let size = Size::new(640.0, 480.0);
        let viewport = kurbo::Rect::from_origin_size(origin, size);
        let window = metrics.visible_window(origin, size, 1.0);

        // Sweep a region strictly larger than the window and check that no
        // cell intersecting the viewport falls outside it: the window may
        // over-approximate at the far edges, but it never misses a cell.
        for col in (window.col_min - 2)..=(window.col_max + 2) {
            for row in (window.row_min - 2)..=(window.row_max + 2) {
                let coord = GridCoord::new(col, row);
                let frame = metrics.cell_frame(coord, 1.0);
                let visible = frame.x0 < viewport.x1
                    && frame.x1 > viewport.x0
                    && frame.y0 < viewport.y1
                    && frame.y1 > viewport.y0;
                if visible {
                    assert!(window.contains(coord), "visible cell {coord} missing");
                }
            }
        }
    }
}
