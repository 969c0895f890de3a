// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-session state and the pointer-family capability flag.

/// Pointer-event family the host wired at construction time.
///
/// Touch-capable hosts subscribe `touchstart`/`touchmove`/`touchend`-style
/// events, mouse hosts their `mouse*` counterparts. The choice is made once
/// at setup and recorded here so that the rest of the host integration never
/// has to probe the event type per callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerFamily {
    /// Mouse-style pointer events.
    #[default]
    Mouse,
    /// Touch-style pointer events.
    Touch,
}

/// Transient state for one in-progress reorder gesture.
///
/// A session exists from pointer-down to pointer-up and is replaced wholesale
/// whenever the gesture advances; "no active session" is the `None` of the
/// surrounding `Option`, never a sentinel value inside the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    index: usize,
    reference: f64,
    extent: f64,
}

impl DragSession {
    pub(crate) const fn new(index: usize, reference: f64, extent: f64) -> Self {
        Self {
            index,
            reference,
            extent,
        }
    }

    /// Returns the index of the item currently being dragged.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the pointer coordinate displacement is measured against.
    ///
    /// This starts at the pointer-down coordinate and re-bases to the pointer
    /// position of the most recent update that moved the item, so deltas are
    /// relative to the last swap rather than cumulative over the gesture.
    #[must_use]
    pub const fn reference(&self) -> f64 {
        self.reference
    }

    /// Returns the item extent (row height, for a vertical list) captured at
    /// pointer-down.
    #[must_use]
    pub const fn extent(&self) -> f64 {
        self.extent
    }
}
