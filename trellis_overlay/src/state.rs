// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay lifecycle: dismissal, debounced resize, and scroll lock.

use bitflags::bitflags;
use kurbo::{Point, Size};
use trellis_timing::Debounce;

use crate::layout::OverlayLayout;

/// Quiet period for coalescing viewport-resize storms, in milliseconds.
pub const RESIZE_QUIET_MS: u64 = 250;

bitflags! {
    /// Inputs allowed to dismiss the overlay.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DismissPolicy: u8 {
        /// The escape key dismisses.
        const ESCAPE_KEY = 1 << 0;
        /// A click on the backdrop shade dismisses.
        const BACKDROP_CLICK = 1 << 1;
        /// A click on a close/dismiss control dismisses.
        const CLOSE_CONTROL = 1 << 2;
    }
}

impl Default for DismissPolicy {
    /// Escape and close controls dismiss; backdrop clicks are opt-in.
    fn default() -> Self {
        Self::ESCAPE_KEY | Self::CLOSE_CONTROL
    }
}

/// Why an overlay was dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    /// The escape key was pressed.
    EscapeKey,
    /// The backdrop shade was clicked.
    BackdropClick,
    /// A close/dismiss control was activated.
    CloseControl,
}

/// What a pointer event landed on, as classified by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The backdrop shade behind the overlay.
    Backdrop,
    /// A close/dismiss control inside the overlay.
    CloseControl,
    /// The overlay content itself.
    Content,
}

/// Lifecycle state for one open overlay.
///
/// Created by [`Overlay::open`], which also derives the initial
/// [`OverlayLayout`]. Input callbacks return the transition the host must
/// apply; once dismissed, the overlay ignores all further input.
#[derive(Clone, Copy, Debug)]
pub struct Overlay {
    layout: OverlayLayout,
    policy: DismissPolicy,
    resize: Debounce,
    scroll_origin: Option<Point>,
    dismissed: bool,
}

impl Overlay {
    /// Opens an overlay with the given preferred size in `viewport`.
    ///
    /// `scroll_lock` is the document scroll position captured at open, or
    /// `None` to leave the document scrollable underneath.
    #[must_use]
    pub fn open(
        preferred: Size,
        viewport: Size,
        policy: DismissPolicy,
        scroll_lock: Option<Point>,
    ) -> Self {
        Self {
            layout: OverlayLayout::open(preferred, viewport),
            policy,
            resize: Debounce::new(RESIZE_QUIET_MS),
            scroll_origin: scroll_lock,
            dismissed: false,
        }
    }

    /// Returns the current layout.
    #[must_use]
    pub const fn layout(&self) -> &OverlayLayout {
        &self.layout
    }

    /// Returns the dismiss policy chosen at open.
    #[must_use]
    pub const fn policy(&self) -> DismissPolicy {
        self.policy
    }

    /// Returns `true` once the overlay has been dismissed.
    #[must_use]
    pub const fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Classifies a pointer press against the dismiss policy.
    ///
    /// Returns the dismissal to apply, if any. Content clicks never
    /// dismiss; backdrop clicks dismiss only when
    /// [`DismissPolicy::BACKDROP_CLICK`] was granted.
    pub fn on_pointer(&mut self, target: PointerTarget) -> Option<DismissReason> {
        if self.dismissed {
            return None;
        }
        let reason = match target {
            PointerTarget::CloseControl if self.policy.contains(DismissPolicy::CLOSE_CONTROL) => {
                DismissReason::CloseControl
            }
            PointerTarget::Backdrop if self.policy.contains(DismissPolicy::BACKDROP_CLICK) => {
                DismissReason::BackdropClick
            }
            _ => return None,
        };
        self.dismissed = true;
        Some(reason)
    }

    /// Handles an escape key press.
    ///
    /// Dismissals are one-shot: a second escape on an already-dismissed
    /// overlay returns `None`.
    pub fn on_escape(&mut self) -> Option<DismissReason> {
        if self.dismissed || !self.policy.contains(DismissPolicy::ESCAPE_KEY) {
            return None;
        }
        self.dismissed = true;
        Some(DismissReason::EscapeKey)
    }

    /// Dismisses the overlay from host code (a programmatic close).
    ///
    /// Returns `true` if this call performed the dismissal.
    pub fn dismiss(&mut self) -> bool {
        if self.dismissed {
            return false;
        }
        self.dismissed = true;
        true
    }

    /// Records a viewport-resize event at time `now`.
    ///
    /// The layout does not change yet; resize storms coalesce behind
    /// [`RESIZE_QUIET_MS`] and apply on a later [`Overlay::poll_resize`].
    pub fn viewport_resized(&mut self, now: u64) {
        if !self.dismissed {
            self.resize.trigger(now);
        }
    }

    /// Applies a pending debounced resize once its quiet period elapses.
    ///
    /// Returns `true` when the layout was re-derived for `viewport`; the
    /// host should then re-apply size and origin.
    pub fn poll_resize(&mut self, now: u64, viewport: Size) -> bool {
        if self.dismissed || !self.resize.poll(now) {
            return false;
        }
        self.layout.viewport_resized(viewport);
        true
    }

    /// Re-derives the layout immediately, bypassing the debounce.
    ///
    /// This is the open-time path; it also cancels any pending debounced
    /// deadline so the same resize is not applied twice.
    pub fn resize_now(&mut self, viewport: Size) {
        self.resize.cancel();
        self.layout.viewport_resized(viewport);
    }

    /// Classifies a document scroll while the overlay is open.
    ///
    /// Returns the scroll position to restore when the overlay holds a
    /// scroll lock and the scroll originated outside it, `None` otherwise.
    #[must_use]
    pub fn on_scroll(&self, from_inside: bool) -> Option<Point> {
        if self.dismissed || from_inside {
            return None;
        }
        self.scroll_origin
    }
}
