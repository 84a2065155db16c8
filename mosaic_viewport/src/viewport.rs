// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Default multiplicative ratio applied per zoom step.
///
/// One zoom-in click multiplies the scale by this ratio; one zoom-out click
/// divides by it.
pub const DEFAULT_ZOOM_STEP: f64 = 1.1;

/// Default lower scale bound.
const DEFAULT_MIN_SCALE: f64 = 1e-3;

/// Default upper scale bound.
const DEFAULT_MAX_SCALE: f64 = 1e3;

/// Scroll-and-zoom state of an infinite canvas.
///
/// The viewport tracks a scroll `origin` (the document/world position of the
/// view's top-left corner), the view `size` in device pixels, and a uniform
/// `scale` factor. Step zooming is multiplicative, matching zoom-button UIs,
/// and the scale is always clamped into a positive range: repeated zoom-out
/// clicks converge on the minimum instead of degenerating toward zero.
///
/// The viewport is deliberately unclamped in space — the canvas is infinite,
/// so every origin is valid, including negative ones.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasViewport {
    origin: Point,
    size: Size,
    scale: f64,
    min_scale: f64,
    max_scale: f64,
    zoom_step: f64,
}

impl CanvasViewport {
    /// Creates a viewport of the given device size at the origin, unzoomed.
    ///
    /// The scale starts at `1.0`, clamped into `[1e-3, 1e3]`, with the
    /// default step ratio of [`DEFAULT_ZOOM_STEP`].
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size: non_negative(size),
            scale: 1.0,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }

    /// Current scroll origin.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Current view size in device pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The visible rectangle: origin extended by the view size.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Jumps the scroll origin to an absolute position.
    pub fn scroll_to(&mut self, origin: Point) {
        if origin.is_finite() {
            self.origin = origin;
        }
    }

    /// Moves the scroll origin by a delta.
    pub fn scroll_by(&mut self, delta: Vec2) {
        self.scroll_to(self.origin + delta);
    }

    /// Updates the view size, e.g. after a host window resize.
    ///
    /// Negative components are treated as zero; the origin and scale are
    /// unaffected.
    pub fn set_size(&mut self, size: Size) {
        if size.is_finite() {
            self.size = non_negative(size);
        }
    }

    /// Sets the scale factor directly, clamped into the configured range.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = scale.clamp(self.min_scale, self.max_scale);
        }
    }

    /// Sets the scale bounds, normalizing them so `min <= max`, and
    /// re-clamps the current scale into the new range.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale.max(f64::MIN_POSITIVE);
        self.max_scale = max_scale.max(self.min_scale);
        self.set_scale(self.scale);
    }

    /// Sets the multiplicative zoom step ratio.
    ///
    /// Ratios at or below `1.0` (or non-finite ones) are ignored: a step
    /// must strictly magnify in one direction and shrink in the other.
    pub fn set_zoom_step(&mut self, ratio: f64) {
        if ratio.is_finite() && ratio > 1.0 {
            self.zoom_step = ratio;
        }
    }

    /// One zoom-in step: multiplies the scale by the step ratio.
    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale * self.zoom_step);
    }

    /// One zoom-out step: divides the scale by the step ratio.
    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale / self.zoom_step);
    }

    /// Scroll delta for one directional nudge: half the view extent.
    ///
    /// This matches arrow-button navigation: each press pages the view by
    /// half a screen in the pressed direction.
    #[must_use]
    pub fn nudge_amount(&self) -> Size {
        self.size * 0.5
    }
}

fn non_negative(size: Size) -> Size {
    Size::new(size.width.max(0.0), size.height.max(0.0))
}
