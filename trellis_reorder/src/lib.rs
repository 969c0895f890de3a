// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_reorder --heading-base-level=0

//! Trellis Reorder: a drag-to-reorder list model.
//!
//! This crate models the state behind a sortable list widget: an ordered
//! sequence of opaque labels that the user rearranges by dragging a row along
//! the list axis. The crate owns only the model and the gesture arithmetic;
//! the host owns the actual rows, the event wiring, and re-rendering after
//! each mutation.
//!
//! The core type is [`ReorderList`], which tracks:
//!
//! - The **model**: a `Vec<T>` whose order is the display order. Labels are
//!   opaque; items are identified purely by position and duplicates are fine.
//! - The **drag session**: transient per-gesture state (active index,
//!   reference pointer coordinate, item extent) that exists only between
//!   [`ReorderList::begin_drag`] and [`ReorderList::end_drag`]. At most one
//!   session is active per list.
//!
//! Reordering happens in whole item-extents: each time the pointer has moved
//! a full item extent away from the session's reference coordinate, the
//! active item swaps with its immediate neighbor in that direction and the
//! reference re-bases to the current pointer. A fast pointer move can apply
//! several such adjacent transpositions in a single update; items other than
//! the active one never change relative order. Sub-extent movement is a
//! no-op, so high-frequency pointer-move callbacks are cheap.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_reorder::ReorderList;
//!
//! let mut list = ReorderList::new(vec!["A", "B", "C", "D"]);
//!
//! // Pointer down on the first row; rows are 20px tall.
//! list.begin_drag(0, 100.0, 20.0);
//!
//! // 25px of downward travel: one full extent, one adjacent swap.
//! assert_eq!(list.update_drag(125.0), Some(1));
//! assert_eq!(list.items(), &["B", "A", "C", "D"]);
//! assert_eq!(list.active_index(), Some(1));
//!
//! // Another full extent in the same direction.
//! assert_eq!(list.update_drag(145.0), Some(1));
//! assert_eq!(list.items(), &["B", "C", "A", "D"]);
//!
//! // Release: the post-drag order is retained.
//! list.end_drag();
//! assert_eq!(list.snapshot(), vec!["B", "C", "A", "D"]);
//! ```
//!
//! ## Host integration
//!
//! The host decides which pointer-event family to wire (mouse or touch) once
//! at setup and records it as a [`PointerFamily`] capability flag; the model
//! never probes per event. Hosts that derive the initial model from an
//! existing document list implement [`HostSource`] and construct through
//! [`ReorderList::from_source`], which is the only fallible path: runtime
//! drag arithmetic never errors, it clamps.
//!
//! All coordinates live on a single host-chosen axis (typically page-space Y,
//! in logical pixels). This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod list;
mod session;
mod source;

pub use list::ReorderList;
pub use session::{DragSession, PointerFamily};
pub use source::{HostSource, SourceError};
