// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side model sources and their construction errors.

use alloc::vec::Vec;

/// Error produced when a host source cannot supply an initial model.
///
/// These are configuration errors: they surface at construction time and the
/// list is never instantiated. Once a list exists, drag arithmetic clamps
/// instead of erroring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceError {
    /// The host reference did not resolve to anything.
    Unresolved,
    /// The host reference resolved, but not to a list of items.
    NotAList,
}

impl core::fmt::Display for SourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unresolved => f.write_str("host reference did not resolve to any element"),
            Self::NotAList => f.write_str("host reference did not resolve to a list of items"),
        }
    }
}

impl core::error::Error for SourceError {}

/// A host-side source of initial labels.
///
/// Implement this for whatever the host uses to locate an existing list —
/// a document selector, a retained-tree node handle — and extract one label
/// per list item, in display order. An empty list is a valid extraction; a
/// reference that resolves to nothing, or to something that is not a list,
/// is a [`SourceError`].
///
/// Closures and functions returning `Result<Vec<T>, SourceError>` implement
/// this trait, so simple hosts do not need a dedicated type:
///
/// ```rust
/// use trellis_reorder::{ReorderList, SourceError};
///
/// // A real host would query its document here.
/// fn rows() -> Result<Vec<&'static str>, SourceError> {
///     Ok(vec!["first", "second"])
/// }
///
/// let list = ReorderList::from_source(&rows).unwrap();
/// assert_eq!(list.len(), 2);
///
/// fn missing() -> Result<Vec<&'static str>, SourceError> {
///     Err(SourceError::Unresolved)
/// }
///
/// assert!(ReorderList::from_source(&missing).is_err());
/// ```
pub trait HostSource<T> {
    /// Resolves the host reference and extracts the labels of its items.
    fn extract(&self) -> Result<Vec<T>, SourceError>;
}

impl<T, F> HostSource<T> for F
where
    F: Fn() -> Result<Vec<T>, SourceError>,
{
    fn extract(&self) -> Result<Vec<T>, SourceError> {
        self()
    }
}
