// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip origin computation with edge flipping.

use kurbo::{Point, Size, Vec2};

/// How close to the right/bottom viewport edge a tooltip may sit, in logical
/// pixels, before it flips to the other side of its base.
pub const EDGE_MARGIN: f64 = 20.0;

/// Extra clearance applied between the tooltip and its base when flipping.
pub const FLIP_GAP: f64 = 10.0;

/// Where a tooltip takes its base position from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Offset from the anchor element's origin.
    Anchor,
    /// Offset from the pointer position at reveal time, then fixed.
    #[default]
    PointerFixed,
    /// Offset from the pointer, tracking every move while shown.
    PointerFollow,
}

/// Computes the on-screen origin for a tooltip.
///
/// The tooltip starts at `base + offset`. On each axis independently, if its
/// far edge would land within [`EDGE_MARGIN`] of the viewport's far edge —
/// `viewport` being the visible size and `scroll` the document scroll offset
/// behind `base` — the tooltip flips to the other side of `base`, backing
/// off by the offset and [`FLIP_GAP`].
#[must_use]
pub fn place(base: Point, offset: Vec2, tip: Size, viewport: Size, scroll: Vec2) -> Point {
    let mut x = base.x + offset.x;
    let mut y = base.y + offset.y;

    if tip.width + x - scroll.x >= viewport.width - EDGE_MARGIN {
        x = x - tip.width - offset.x - FLIP_GAP;
    }
    if tip.height + y - scroll.y >= viewport.height - EDGE_MARGIN {
        y = y - tip.height - offset.y - FLIP_GAP;
    }

    Point::new(x, y)
}
