//! Vertex identifier for adjacency-list graphs.
//!
//! This module provides the [`VertexId`] type, the dense integer handle every graph,
//! traversal state and algorithm result in this crate is indexed by. External names are
//! resolved into this id space once, at construction time, by the
//! [`VertexMap`](crate::graph::VertexMap).

use std::fmt;

/// A strongly-typed, dense vertex identifier.
///
/// `VertexId` wraps a `usize` in the range `0..capacity`. Ids are stable once assigned and
/// are used directly as indices into per-vertex storage (edge sequences, traversal state,
/// low-link and component arrays).
///
/// # Examples
///
/// ```rust
/// use grlib::VertexId;
///
/// let v = VertexId::new(3);
/// assert_eq!(v.index(), 3);
/// assert_eq!(format!("{v}"), "v3");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw vertex index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index value of this vertex identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}
