// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_fitbox --heading-base-level=0

//! Trellis Fitbox: cover/contain fitting for image cells.
//!
//! An image cell shows content of one aspect ratio inside a box of another.
//! The two classic layouts are:
//!
//! - [`FitMode::Contain`]: scale the content as large as possible while
//!   keeping all of it inside the cell, centering it and padding the short
//!   axis.
//! - [`FitMode::Cover`]: scale the content just enough to fill the cell
//!   entirely, centering it and cropping the overflowing axis.
//!
//! [`fit`] computes the scaled content box and its offset within the cell;
//! the host applies those as the sizes and margins of whatever element
//! displays the content. For cover layouts, [`visible_rect`] reports which
//! region of the content survives the crop, which is what a host needs to
//! draw from a source image directly.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use trellis_fitbox::{FitMode, fit};
//!
//! let cell = Size::new(100.0, 100.0);
//! let image = Size::new(400.0, 200.0);
//!
//! // Contain: the wide image fits the cell width and letterboxes.
//! let fitted = fit(cell, image, FitMode::Contain);
//! assert_eq!(fitted.size, Size::new(100.0, 50.0));
//! assert_eq!(fitted.offset.y, 25.0);
//!
//! // Cover: the image fills the cell and bleeds out horizontally.
//! let fitted = fit(cell, image, FitMode::Cover);
//! assert_eq!(fitted.size, Size::new(200.0, 100.0));
//! assert_eq!(fitted.offset.x, -50.0);
//! ```
//!
//! All sizes are in the host's logical pixels, kept as `f64`; hosts round at
//! the style boundary. This crate is `no_std`.

#![no_std]

use kurbo::{Rect, Size, Vec2};

/// How content is scaled to its cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FitMode {
    /// Fill the cell entirely, cropping content that overflows.
    Cover,
    /// Show all of the content, padding the cell's short axis.
    #[default]
    Contain,
}

/// The scaled content box produced by [`fit`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FittedBox {
    /// Scaled content size.
    pub size: Size,
    /// Offset of the content box's origin from the cell's origin. Both
    /// components are non-negative padding under [`FitMode::Contain`] and
    /// non-positive crop margins under [`FitMode::Cover`].
    pub offset: Vec2,
}

impl FittedBox {
    /// A zero-size fit at the cell origin, used for degenerate inputs.
    pub const EMPTY: Self = Self {
        size: Size::ZERO,
        offset: Vec2::ZERO,
    };

    /// Returns the content box as a rectangle in cell coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.offset.to_point(), self.size)
    }
}

/// Fits `content` into `cell` under the given mode.
///
/// The content scales uniformly — by the smaller cell/content ratio for
/// [`FitMode::Contain`], the larger for [`FitMode::Cover`] — and centers on
/// both axes. Degenerate inputs (a zero, negative, or non-finite dimension
/// on either size) produce [`FittedBox::EMPTY`] rather than propagating NaN.
#[must_use]
pub fn fit(cell: Size, content: Size, mode: FitMode) -> FittedBox {
    if !is_usable(cell) || !is_usable(content) {
        return FittedBox::EMPTY;
    }

    let horizontal = cell.width / content.width;
    let vertical = cell.height / content.height;
    let scale = match mode {
        FitMode::Contain => horizontal.min(vertical),
        FitMode::Cover => horizontal.max(vertical),
    };

    let size = Size::new(content.width * scale, content.height * scale);
    let offset = Vec2::new(
        (cell.width - size.width) / 2.0,
        (cell.height - size.height) / 2.0,
    );
    FittedBox { size, offset }
}

/// Returns the region of `content`, in content coordinates, left visible
/// when `content` covers `cell`.
///
/// Under [`FitMode::Contain`] everything is visible, so this is only
/// interesting for cover layouts: the result is the centered window with the
/// cell's aspect ratio. Degenerate inputs produce [`Rect::ZERO`].
#[must_use]
pub fn visible_rect(cell: Size, content: Size) -> Rect {
    if !is_usable(cell) || !is_usable(content) {
        return Rect::ZERO;
    }

    let scale = (cell.width / content.width).max(cell.height / content.height);
    let width = cell.width / scale;
    let height = cell.height / scale;
    let x0 = (content.width - width) / 2.0;
    let y0 = (content.height - height) / 2.0;
    Rect::new(x0, y0, x0 + width, y0 + height)
}

fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
