// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_overlay --heading-base-level=0

//! Trellis Overlay: modal overlay sizing, centering, and dismissal state.
//!
//! A modal overlay is a window-like container shown over the page that waits
//! for dismissal. This crate models its state without touching a document:
//!
//! - [`OverlayLayout`] captures the viewport and the overlay's maximum size
//!   at open time, clamps the overlay to 90% of any viewport axis it does
//!   not fit, re-derives the size when the viewport changes, and centers the
//!   overlay with floored half-extents.
//! - [`Overlay`] is the lifecycle: it owns the layout, a [`DismissPolicy`]
//!   describing which inputs dismiss, a debounced resize gate (viewport
//!   resize storms coalesce behind a 250ms quiet period), and an optional
//!   scroll lock that reports the position to restore when the document
//!   scrolls underneath the overlay.
//!
//! Inputs map to transition values rather than callbacks: pointer and key
//! input return an optional [`DismissReason`] the host reacts to, and resize
//! polling returns whether the layout changed. The host owns showing,
//! hiding, and destroying the actual elements.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use trellis_overlay::{DismissPolicy, DismissReason, Overlay, PointerTarget};
//!
//! let viewport = Size::new(1280.0, 800.0);
//! let mut overlay = Overlay::open(
//!     Size::new(600.0, 400.0),
//!     viewport,
//!     DismissPolicy::default(),
//!     Some(Point::ZERO),
//! );
//!
//! // The preferred size fits, so it is used as-is, centered.
//! assert_eq!(overlay.layout().size(), Size::new(600.0, 400.0));
//! assert_eq!(overlay.layout().origin(viewport), Point::new(340.0, 200.0));
//!
//! // Clicks on the content do nothing; escape dismisses.
//! assert_eq!(overlay.on_pointer(PointerTarget::Content), None);
//! assert_eq!(overlay.on_escape(), Some(DismissReason::EscapeKey));
//! assert!(overlay.is_dismissed());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod layout;
mod state;

pub use layout::{OverlayLayout, VIEWPORT_FILL};
pub use state::{DismissPolicy, DismissReason, Overlay, PointerTarget, RESIZE_QUIET_MS};
