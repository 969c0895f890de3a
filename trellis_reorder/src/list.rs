// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reorderable list model and its drag operations.

use alloc::vec::Vec;

use crate::session::{DragSession, PointerFamily};
use crate::source::{HostSource, SourceError};

/// An ordered sequence of labels that can be reordered by a pointer drag.
///
/// The model order is the display order. A drag gesture moves one item at a
/// time through a chain of adjacent transpositions; all other items keep
/// their relative order, and the model length never changes.
///
/// All mutation happens synchronously inside the host's event callbacks;
/// there is no interior threading or deferral. Hosts re-render from
/// [`ReorderList::items`] (or [`ReorderList::snapshot`]) after any update
/// that reports movement.
#[derive(Clone, Debug)]
pub struct ReorderList<T> {
    model: Vec<T>,
    session: Option<DragSession>,
    pointer_family: PointerFamily,
}

impl<T> ReorderList<T> {
    /// Creates a list over a caller-provided model.
    ///
    /// The model may be empty and may contain duplicate labels; items are
    /// identified by position only.
    #[must_use]
    pub const fn new(model: Vec<T>) -> Self {
        Self {
            model,
            session: None,
            pointer_family: PointerFamily::Mouse,
        }
    }

    /// Creates a list over a caller-provided model, recording the
    /// pointer-event family the host wired.
    #[must_use]
    pub const fn with_pointer_family(model: Vec<T>, pointer_family: PointerFamily) -> Self {
        Self {
            model,
            session: None,
            pointer_family,
        }
    }

    /// Creates a list whose initial model is extracted from a host document.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`SourceError`] when the host reference does
    /// not resolve to a usable list. This is the only fallible construction
    /// path; see [`ReorderList::new`] for in-memory models.
    pub fn from_source<S>(source: &S) -> Result<Self, SourceError>
    where
        S: HostSource<T> + ?Sized,
    {
        source.extract().map(Self::new)
    }

    /// Returns the number of items in the model.
    #[must_use]
    pub fn len(&self) -> usize {
        self.model.len()
    }

    /// Returns `true` if the model holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    /// Returns the model in display order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.model
    }

    /// Returns the pointer-event family chosen at construction.
    #[must_use]
    pub const fn pointer_family(&self) -> PointerFamily {
        self.pointer_family
    }

    /// Returns the active drag session, if a gesture is in progress.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Returns the index of the item being dragged, if any.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.session.map(|session| session.index())
    }

    /// Returns `true` while a drag gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Begins a drag gesture on the item at `index`.
    ///
    /// `pointer` is the pointer coordinate along the list axis at
    /// pointer-down and `extent` is the dragged item's extent along that
    /// axis (its height, for a vertical list). An out-of-range `index` is
    /// clamped to the last item.
    ///
    /// Returns `true` if a session started. The call is a silent no-op —
    /// returning `false` — while another session is active, when the model
    /// is empty, or when `pointer` or `extent` is unusable (non-finite, or
    /// a non-positive extent).
    pub fn begin_drag(&mut self, index: usize, pointer: f64, extent: f64) -> bool {
        if self.session.is_some() || self.model.is_empty() {
            return false;
        }
        if !pointer.is_finite() || !extent.is_finite() || extent <= 0.0 {
            return false;
        }

        let index = index.min(self.model.len() - 1);
        self.session = Some(DragSession::new(index, pointer, extent));
        true
    }

    /// Advances the drag gesture to a new pointer coordinate.
    ///
    /// The displacement from the session's reference coordinate converts to
    /// a signed whole count of item extents; each unit becomes one swap with
    /// the immediate neighbor in the travel direction, stopping at the list
    /// ends. After any movement the reference re-bases to `pointer`, so the
    /// next update measures from the last swap rather than from
    /// pointer-down.
    ///
    /// Returns `None` when no session is active, otherwise the signed number
    /// of positions the active item moved (`Some(0)` for sub-extent motion,
    /// which changes nothing).
    pub fn update_drag(&mut self, pointer: f64) -> Option<isize> {
        let session = self.session?;
        let displacement = pointer - session.reference();
        if !displacement.is_finite() {
            return Some(0);
        }

        let magnitude = if displacement < 0.0 {
            -displacement
        } else {
            displacement
        };
        let steps = magnitude / session.extent();
        let direction: isize = if displacement > 0.0 { 1 } else { -1 };
        // The travel is capped at the model length: the swap loop clamps at
        // the list ends anyway, and the cap keeps the cast in range.
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_precision_loss,
            reason = "steps is non-negative and capped at the model length before the cast"
        )]
        let step_count = if steps >= self.model.len() as f64 {
            self.model.len()
        } else {
            steps as usize
        };
        if step_count == 0 {
            return Some(0);
        }

        let mut index = session.index();
        let mut moved: isize = 0;
        for _ in 0..step_count {
            let Some(next) = neighbor(index, direction, self.model.len()) else {
                break;
            };
            self.model.swap(index, next);
            index = next;
            moved += direction;
        }

        if moved != 0 {
            self.session = Some(DragSession::new(index, pointer, session.extent()));
        }
        Some(moved)
    }

    /// Ends the drag gesture, retaining the current model order.
    ///
    /// Returns `true` if a session was active. Safe to call when idle.
    pub fn end_drag(&mut self) -> bool {
        self.session.take().is_some()
    }
}

impl<T: Clone> ReorderList<T> {
    /// Returns a copy of the model in display order.
    ///
    /// The copy does not observe later reordering; take a fresh snapshot
    /// after each gesture.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.model.clone()
    }
}

impl<T> Default for ReorderList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Returns the index adjacent to `index` in `direction`, or `None` at the
/// list ends.
fn neighbor(index: usize, direction: isize, len: usize) -> Option<usize> {
    if direction > 0 {
        let next = index + 1;
        (next < len).then_some(next)
    } else {
        index.checked_sub(1)
    }
}
