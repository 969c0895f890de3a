// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay sizing and centering arithmetic.

use kurbo::{Point, Size};

/// Fraction of a viewport axis an overlay may occupy when it does not fit.
pub const VIEWPORT_FILL: f64 = 0.9;

/// Responsive overlay geometry.
///
/// The overlay's *maximum* size — the preferred or content-measured size
/// supplied at open — is captured once. The effective size then follows the
/// viewport: any axis whose viewport extent does not exceed the maximum is
/// clamped to [`VIEWPORT_FILL`] of the viewport (floored to whole pixels),
/// and returns to the maximum when the viewport grows past it again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayLayout {
    max_size: Size,
    opened_viewport: Size,
    size: Size,
}

impl OverlayLayout {
    /// Computes the layout for an overlay opening in `viewport` with the
    /// given preferred size.
    #[must_use]
    pub fn open(preferred: Size, viewport: Size) -> Self {
        Self {
            max_size: preferred,
            opened_viewport: viewport,
            size: fit_size(viewport, preferred),
        }
    }

    /// Returns the maximum size captured at open.
    #[must_use]
    pub const fn max_size(&self) -> Size {
        self.max_size
    }

    /// Returns the viewport size captured at open.
    #[must_use]
    pub const fn opened_viewport(&self) -> Size {
        self.opened_viewport
    }

    /// Returns the current effective overlay size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Re-derives the effective size for a new viewport.
    ///
    /// Each axis is handled independently, so a window that grows wide but
    /// stays short restores the full width while keeping the height clamped.
    pub fn viewport_resized(&mut self, viewport: Size) {
        self.size = fit_size(viewport, self.max_size);
    }

    /// Returns the origin that centers the overlay in `viewport`.
    ///
    /// The half-extents of the overlay are floored to whole pixels, matching
    /// the classic 50%-plus-negative-margin centering.
    #[must_use]
    pub fn origin(&self, viewport: Size) -> Point {
        Point::new(
            viewport.width * 0.5 - floor_px(self.size.width * 0.5),
            viewport.height * 0.5 - floor_px(self.size.height * 0.5),
        )
    }
}

fn fit_size(viewport: Size, max: Size) -> Size {
    Size::new(
        fit_axis(viewport.width, max.width),
        fit_axis(viewport.height, max.height),
    )
}

/// One axis of the responsive rule: the maximum extent when the viewport is
/// strictly larger, otherwise [`VIEWPORT_FILL`] of the viewport.
fn fit_axis(viewport_extent: f64, max_extent: f64) -> f64 {
    if viewport_extent > max_extent {
        max_extent
    } else {
        floor_px(viewport_extent * VIEWPORT_FILL)
    }
}

/// Floors a non-negative pixel value by integer truncation. Non-finite and
/// negative inputs collapse to zero.
fn floor_px(value: f64) -> f64 {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "truncation toward zero is the floor of a non-negative pixel count"
    )]
    {
        (value as u64) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_size_is_kept_when_the_viewport_is_larger() {
        let layout = OverlayLayout::open(Size::new(600.0, 400.0), Size::new(1280.0, 800.0));
        assert_eq!(layout.size(), Size::new(600.0, 400.0));
        assert_eq!(layout.max_size(), Size::new(600.0, 400.0));
    }

    #[test]
    fn cramped_axes_clamp_to_ninety_percent() {
        // 500px-wide viewport cannot hold a 600px overlay.
        let layout = OverlayLayout::open(Size::new(600.0, 400.0), Size::new(500.0, 800.0));
        assert_eq!(layout.size(), Size::new(450.0, 400.0));

        // Both axes cramped.
        let layout = OverlayLayout::open(Size::new(600.0, 400.0), Size::new(500.0, 300.0));
        assert_eq!(layout.size(), Size::new(450.0, 270.0));
    }

    #[test]
    fn equal_viewport_counts_as_cramped() {
        // The rule is strictly-greater, so an exact fit still clamps.
        let layout = OverlayLayout::open(Size::new(600.0, 400.0), Size::new(600.0, 400.0));
        assert_eq!(layout.size(), Size::new(540.0, 360.0));
    }

    #[test]
    fn clamped_extent_is_floored_to_whole_pixels() {
        let layout = OverlayLayout::open(Size::new(600.0, 400.0), Size::new(455.0, 300.0));
        // 455 * 0.9 = 409.5, 300 * 0.9 = 270.0.
        assert_eq!(layout.size(), Size::new(409.0, 270.0));
    }

    #[test]
    fn growing_viewport_restores_the_maximum_per_axis() {
        let mut layout = OverlayLayout::open(Size::new(600.0, 400.0), Size::new(500.0, 300.0));
        assert_eq!(layout.size(), Size::new(450.0, 270.0));

        // Wider but still short: width restores, height stays clamped.
        layout.viewport_resized(Size::new(1280.0, 300.0));
        assert_eq!(layout.size(), Size::new(600.0, 270.0));

        layout.viewport_resized(Size::new(1280.0, 800.0));
        assert_eq!(layout.size(), Size::new(600.0, 400.0));
    }

    #[test]
    fn shrinking_viewport_tracks_ninety_percent() {
        let mut layout = OverlayLayout::open(Size::new(600.0, 400.0), Size::new(1280.0, 800.0));

        layout.viewport_resized(Size::new(400.0, 800.0));
        assert_eq!(layout.size(), Size::new(360.0, 400.0));

        layout.viewport_resized(Size::new(321.0, 200.0));
        assert_eq!(layout.size(), Size::new(288.0, 180.0));
    }

    #[test]
    fn origin_centers_with_floored_half_extents() {
        let layout = OverlayLayout::open(Size::new(600.0, 400.0), Size::new(1280.0, 800.0));
        assert_eq!(layout.origin(Size::new(1280.0, 800.0)), Point::new(340.0, 200.0));

        // Odd size: the half-extent floors, biasing one pixel down-right.
        let layout = OverlayLayout::open(Size::new(601.0, 401.0), Size::new(1280.0, 800.0));
        assert_eq!(layout.origin(Size::new(1280.0, 800.0)), Point::new(340.0, 200.0));
    }

    #[test]
    fn opened_viewport_is_a_snapshot() {
        let mut layout = OverlayLayout::open(Size::new(600.0, 400.0), Size::new(1280.0, 800.0));
        layout.viewport_resized(Size::new(500.0, 300.0));
        assert_eq!(layout.opened_viewport(), Size::new(1280.0, 800.0));
    }
}
