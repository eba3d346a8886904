//! Per-vertex traversal bookkeeping shared by DFS and BFS.
//!
//! A [`TraversalState`] is created fresh for every algorithm invocation and owned by it
//! alone. Hooks receive it mutably so they can read timestamps and parent links and raise
//! the early-termination flag; everything else is only written by the traversal engine.

use crate::graph::{Graph, VertexId};

/// Bookkeeping for a single vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexState {
    /// The vertex has been reached
    pub discovered: bool,
    /// All out-edges of the vertex have been explored
    pub processed: bool,
    /// Clock value when the vertex was entered (0 if never entered)
    pub entry_time: usize,
    /// Clock value when the vertex was left (0 if never left)
    pub exit_time: usize,
    /// The vertex it was discovered from, `None` for traversal roots
    pub parent: Option<VertexId>,
}

/// Traversal state for every vertex slot of a graph.
///
/// The clock advances once when a vertex is entered and once when it is left, so for every
/// vertex that has been left `entry_time < exit_time`, and for a DFS tree edge `x -> y`
/// `entry(x) < entry(y) < exit(y) < exit(x)`.
///
/// # Panics
///
/// The per-vertex accessors panic if given an id outside the graph the state was created
/// for. Hooks only ever receive valid ids.
#[derive(Debug, Clone)]
pub struct TraversalState {
    vertices: Vec<VertexState>,
    time: usize,
    terminated: bool,
}

impl TraversalState {
    /// Creates a fresh state for `capacity` vertex slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            vertices: vec![VertexState::default(); capacity],
            time: 0,
            terminated: false,
        }
    }

    /// Creates a fresh state sized for `graph`.
    #[must_use]
    pub fn for_graph<W>(graph: &Graph<W>) -> Self {
        Self::new(graph.capacity())
    }

    /// Returns the bookkeeping record of `v`.
    #[must_use]
    pub fn vertex(&self, v: VertexId) -> &VertexState {
        &self.vertices[v.index()]
    }

    /// Returns `true` once `v` has been reached.
    #[must_use]
    pub fn is_discovered(&self, v: VertexId) -> bool {
        self.vertices[v.index()].discovered
    }

    /// Returns `true` once every out-edge of `v` has been explored.
    #[must_use]
    pub fn is_processed(&self, v: VertexId) -> bool {
        self.vertices[v.index()].processed
    }

    /// Returns the clock value at which `v` was entered.
    #[must_use]
    pub fn entry_time(&self, v: VertexId) -> usize {
        self.vertices[v.index()].entry_time
    }

    /// Returns the clock value at which `v` was left.
    #[must_use]
    pub fn exit_time(&self, v: VertexId) -> usize {
        self.vertices[v.index()].exit_time
    }

    /// Returns the vertex `v` was discovered from, or `None` for roots and unreached vertices.
    #[must_use]
    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        self.vertices[v.index()].parent
    }

    /// Returns the current clock value.
    #[must_use]
    pub fn time(&self) -> usize {
        self.time
    }

    /// Returns the number of vertex slots tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no vertex slots are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Requests early termination.
    ///
    /// The traversal stops before the next hook would be invoked; the multi-source drivers
    /// launch no further roots.
    pub fn terminate(&mut self) {
        self.terminated = true;
    }

    /// Returns `true` if early termination was requested.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Walks parent links from `v` up to `ancestor`.
    ///
    /// This is how a cycle is rebuilt from a back edge `x -> y`: `path_to(y, x)` yields the
    /// tree path `y, ..., x`, which the back edge closes.
    ///
    /// # Returns
    ///
    /// The path in root-to-leaf order, both ends included, or `None` if `ancestor` is not on
    /// the parent chain of `v`.
    #[must_use]
    pub fn path_to(&self, ancestor: VertexId, v: VertexId) -> Option<Vec<VertexId>> {
        let mut path = vec![v];
        let mut current = v;

        while current != ancestor {
            current = self.parent(current)?;
            path.push(current);
        }

        path.reverse();
        Some(path)
    }

    /// Iterates over the ids of all discovered vertices.
    pub fn discovered(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, vs)| vs.discovered)
            .map(|(i, _)| VertexId::new(i))
    }

    pub(crate) fn mark_discovered(&mut self, v: VertexId) {
        self.vertices[v.index()].discovered = true;
    }

    pub(crate) fn set_parent(&mut self, v: VertexId, parent: VertexId) {
        self.vertices[v.index()].parent = Some(parent);
    }

    /// Ticks the clock and stamps the entry time of `v`.
    pub(crate) fn enter(&mut self, v: VertexId) {
        self.time += 1;
        self.vertices[v.index()].entry_time = self.time;
    }

    /// Marks `v` processed, ticks the clock and stamps its exit time.
    pub(crate) fn leave(&mut self, v: VertexId) {
        self.time += 1;
        let vs = &mut self.vertices[v.index()];
        vs.processed = true;
        vs.exit_time = self.time;
    }
}
