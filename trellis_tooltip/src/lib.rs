// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_tooltip --heading-base-level=0

//! Trellis Tooltip: tooltip placement and hover-reveal state.
//!
//! A tooltip is a small overlay revealed after the pointer rests on an
//! anchor, positioned near the anchor or the pointer, and hidden the moment
//! the pointer leaves. This crate models that lifecycle headlessly:
//!
//! - [`place`] computes the tooltip origin from a base position, the
//!   configured offsets, the tooltip's measured size, and the viewport,
//!   flipping the tooltip back across its base when it would crowd the
//!   right or bottom viewport edge.
//! - [`Tooltip`] tracks the hover lifecycle: pointer enter arms a delayed
//!   reveal, pointer leave cancels and hides, and pointer moves reposition
//!   only in [`Placement::PointerFollow`] mode while shown.
//!
//! The host owns the tooltip element itself: it reacts to
//! [`TooltipEvent::Reveal`] by writing content and measuring, then asks
//! [`Tooltip::position`] where to put the result. Timestamps are host
//! `u64` milliseconds, as in `trellis_timing`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use trellis_tooltip::{Tooltip, TooltipConfig, TooltipEvent};
//!
//! let mut tip = Tooltip::new(TooltipConfig {
//!     delay: 100,
//!     ..TooltipConfig::default()
//! });
//!
//! // Pointer comes to rest at (40, 40) at t=0.
//! tip.pointer_enter(Point::new(40.0, 40.0), 0);
//! assert_eq!(tip.poll(50), None);
//! assert_eq!(tip.poll(100), Some(TooltipEvent::Reveal));
//!
//! // Host measured the tooltip at 120x30; place it in an 800x600 viewport.
//! let origin = tip.position(Size::new(120.0, 30.0), Size::new(800.0, 600.0), Vec2::ZERO);
//! assert_eq!(origin, Point::new(60.0, 60.0));
//!
//! // Pointer leaves: hide immediately.
//! assert_eq!(tip.pointer_leave(), Some(TooltipEvent::Hide));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod hover;
mod place;

pub use hover::{Tooltip, TooltipConfig, TooltipEvent};
pub use place::{EDGE_MARGIN, FLIP_GAP, Placement, place};
