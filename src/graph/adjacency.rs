//! Adjacency-list graph representation.
//!
//! [`Graph`] stores, for every vertex id, the ordered sequence of its out-edges. Insertion
//! order is preserved and is the order in which traversals later visit the edges, which
//! makes every traversal in this crate deterministic.
//!
//! The graph is built once and then treated as read-only by the traversal engine and the
//! algorithms. Undirected graphs are represented by storing both directions of every edge;
//! callers building an undirected graph by hand insert the reverse edge themselves.
//!
//! # Examples
//!
//! ```rust
//! use grlib::{Edge, Graph, VertexId};
//!
//! let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
//!
//! let mut graph: Graph<i32> = Graph::new(3, true);
//! graph.insert_edge(a, Edge::new(b, 7));
//! graph.insert_edge(a, Edge::new(c, 2));
//!
//! assert_eq!(graph.edge_count(), 2);
//! let targets: Vec<VertexId> = graph.successors(a).collect();
//! assert_eq!(targets, vec![b, c]);
//! assert_eq!(graph.edges(a)[0].payload, 7);
//! ```

use std::fmt;

use crate::{
    graph::{VertexId, VertexMap},
    Error, Result,
};

/// Number of vertex slots a graph built from [`GraphOptions::default`] starts with.
pub const DEFAULT_CAPACITY: usize = 16;

/// Construction options for a [`Graph`].
///
/// # Examples
///
/// ```rust
/// use grlib::{Graph, GraphOptions};
///
/// let options = GraphOptions::default().with_capacity(64).directed(true);
/// let graph: Graph = Graph::with_options(options);
///
/// assert_eq!(graph.capacity(), 64);
/// assert!(graph.is_directed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Number of preallocated vertex slots
    pub capacity: usize,
    /// Whether edges are one-way
    pub directed: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            directed: false,
        }
    }
}

impl GraphOptions {
    /// Sets the number of preallocated vertex slots.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets whether the graph is directed.
    #[must_use]
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}

/// An out-edge: the target vertex plus an application payload (e.g. a weight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W = ()> {
    /// Target vertex of the edge
    pub target: VertexId,
    /// Application payload carried by the edge
    pub payload: W,
}

impl<W> Edge<W> {
    /// Creates an edge pointing at `target` that carries `payload`.
    #[must_use]
    pub const fn new(target: VertexId, payload: W) -> Self {
        Self { target, payload }
    }
}

/// Adjacency-list graph indexed by [`VertexId`].
///
/// # Type Parameters
///
/// * `W` - The edge payload type, `()` when edges carry no data
///
/// # Capacity
///
/// The capacity is the number of vertex slots, i.e. the size of the valid id range
/// `0..capacity`. It grows (never shrinks) when an edge mentions an id beyond it; every id
/// referenced by a stored edge is below the capacity.
#[derive(Debug, Clone)]
pub struct Graph<W = ()> {
    /// Out-edge sequence of every vertex slot
    pub(crate) adjacency: Vec<Vec<Edge<W>>>,
    /// Total number of stored edges
    edge_count: usize,
    /// Whether edges are one-way
    directed: bool,
    /// Names of the vertices, if the graph was built from named edges
    names: VertexMap,
}

impl<W> Default for Graph<W> {
    fn default() -> Self {
        Self::with_options(GraphOptions::default())
    }
}

impl<W> Graph<W> {
    /// Creates an empty graph with `capacity` vertex slots.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of preallocated vertex slots
    /// * `directed` - Whether edges are one-way
    #[must_use]
    pub fn new(capacity: usize, directed: bool) -> Self {
        Self::with_options(GraphOptions {
            capacity,
            directed,
        })
    }

    /// Creates an empty graph from construction options.
    #[must_use]
    pub fn with_options(options: GraphOptions) -> Self {
        let mut adjacency = Vec::with_capacity(options.capacity);
        adjacency.resize_with(options.capacity, Vec::new);

        Self {
            adjacency,
            edge_count: 0,
            directed: options.directed,
            names: VertexMap::with_capacity(options.capacity),
        }
    }

    /// Appends `edge` to the out-edge sequence of `x`.
    ///
    /// Storage grows when `x` or the edge target lie beyond the current capacity.
    ///
    /// # Arguments
    ///
    /// * `x` - Source vertex
    /// * `edge` - The out-edge to append
    pub fn insert_edge(&mut self, x: VertexId, edge: Edge<W>) {
        self.reserve_vertex(x.index().max(edge.target.index()));
        self.adjacency[x.index()].push(edge);
        self.edge_count += 1;
    }

    /// Appends an edge `x -> y` carrying the default payload.
    pub fn add_edge(&mut self, x: VertexId, y: VertexId)
    where
        W: Default,
    {
        self.insert_edge(x, Edge::new(y, W::default()));
    }

    /// Grows the vertex storage so that `index` is a valid slot.
    ///
    /// The new size is `max(2 * index, index + 1)`, which always covers `index`, including
    /// the `0` and `1` cases where plain doubling would not grow at all.
    fn reserve_vertex(&mut self, index: usize) {
        if index < self.adjacency.len() {
            return;
        }

        let new_len = (2 * index).max(index + 1);
        self.adjacency.resize_with(new_len, Vec::new);
    }

    /// Returns the out-edges of `x` in insertion order.
    ///
    /// Ids beyond the capacity have no edges.
    #[must_use]
    pub fn edges(&self, x: VertexId) -> &[Edge<W>] {
        self.adjacency.get(x.index()).map_or(&[], Vec::as_slice)
    }

    /// Returns the targets of the out-edges of `x` in insertion order.
    pub fn successors(&self, x: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.edges(x).iter().map(|edge| edge.target)
    }

    /// Returns the number of vertex slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the total number of stored edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if edges are one-way.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns `true` if `x` has no out-edges.
    ///
    /// The multi-source drivers never launch a traversal root at such a vertex.
    #[must_use]
    pub fn is_isolated(&self, x: VertexId) -> bool {
        self.edges(x).is_empty()
    }

    /// Iterates over all vertex ids `0..capacity`.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.adjacency.len()).map(VertexId::new)
    }

    /// Returns `Ok(())` if `x` is a valid id of this graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfRange`] if `x` is not below the capacity.
    pub fn check_vertex(&self, x: VertexId) -> Result<()> {
        if x.index() < self.adjacency.len() {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                id: x,
                capacity: self.adjacency.len(),
            })
        }
    }

    /// Returns the vertex name table.
    #[must_use]
    pub fn names(&self) -> &VertexMap {
        &self.names
    }

    /// Returns the vertex name table for registration of names.
    pub fn names_mut(&mut self) -> &mut VertexMap {
        &mut self.names
    }

    /// Returns the name of vertex `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfRange`] if `id` has no name.
    pub fn name_of(&self, id: VertexId) -> Result<&str> {
        self.names.name(id)
    }

    /// Returns the id of the vertex called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertexName`] if no vertex has that name.
    pub fn id_of(&self, name: &str) -> Result<VertexId> {
        self.names.index(name)
    }

    /// Formats a vertex by name, falling back to its id.
    pub(crate) fn label(&self, id: VertexId) -> String {
        match self.names.name(id) {
            Ok(name) => format!("\"{name}\""),
            Err(_) => id.to_string(),
        }
    }
}

impl<W> fmt::Display for Graph<W> {
    /// Prints one line per vertex with out-edges: `"A": "B" -> "C" -> $`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in self.vertex_ids() {
            if self.is_isolated(x) {
                continue;
            }

            write!(f, "{}: ", self.label(x))?;
            for y in self.successors(x) {
                write!(f, "{} -> ", self.label(y))?;
            }
            writeln!(f, "$")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: Graph = Graph::new(4, false);
        assert_eq!(graph.capacity(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.is_directed());
        assert!(graph.vertex_ids().all(|x| graph.is_isolated(x)));
    }

    #[test]
    fn test_default_options() {
        let graph: Graph = Graph::default();
        assert_eq!(graph.capacity(), DEFAULT_CAPACITY);
        assert!(!graph.is_directed());
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut graph: Graph<u32> = Graph::new(4, true);
        graph.insert_edge(v(0), Edge::new(v(3), 30));
        graph.insert_edge(v(0), Edge::new(v(1), 10));
        graph.insert_edge(v(0), Edge::new(v(2), 20));

        let targets: Vec<VertexId> = graph.successors(v(0)).collect();
        assert_eq!(targets, vec![v(3), v(1), v(2)]);

        let weights: Vec<u32> = graph.edges(v(0)).iter().map(|e| e.payload).collect();
        assert_eq!(weights, vec![30, 10, 20]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_growth_from_zero_capacity() {
        let mut graph: Graph = Graph::new(0, true);
        graph.add_edge(v(0), v(0));
        assert!(graph.capacity() >= 1);

        graph.add_edge(v(1), v(0));
        assert!(graph.capacity() >= 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_growth_covers_source() {
        let mut graph: Graph = Graph::new(2, true);
        graph.add_edge(v(9), v(0));
        assert_eq!(graph.capacity(), 18);
        assert_eq!(graph.edges(v(9)).len(), 1);
    }

    #[test]
    fn test_growth_covers_target() {
        let mut graph: Graph = Graph::new(2, true);
        graph.add_edge(v(0), v(5));
        assert!(graph.capacity() > 5);
        assert!(graph.check_vertex(v(5)).is_ok());
    }

    #[test]
    fn test_capacity_never_shrinks() {
        let mut graph: Graph = Graph::new(32, true);
        graph.add_edge(v(1), v(2));
        assert_eq!(graph.capacity(), 32);
    }

    #[test]
    fn test_edges_beyond_capacity_are_empty() {
        let graph: Graph = Graph::new(2, true);
        assert!(graph.edges(v(100)).is_empty());
        assert!(graph.is_isolated(v(100)));
    }

    #[test]
    fn test_check_vertex() {
        let graph: Graph = Graph::new(3, true);
        assert!(graph.check_vertex(v(2)).is_ok());
        assert_eq!(
            graph.check_vertex(v(3)),
            Err(Error::VertexOutOfRange {
                id: v(3),
                capacity: 3
            })
        );
    }

    #[test]
    fn test_edge_carries_target_and_payload() {
        let edge = Edge::new(v(4), "weight");
        assert_eq!(edge.target, v(4));
        assert_eq!(edge.payload, "weight");
        assert_eq!(edge, Edge::new(v(4), "weight"));

        let mut graph: Graph<&str> = Graph::new(5, true);
        graph.insert_edge(v(0), edge);
        assert_eq!(graph.edges(v(0)), &[Edge::new(v(4), "weight")]);
    }

    #[test]
    fn test_name_accessors() {
        let mut graph: Graph = Graph::new(2, true);
        let a = graph.names_mut().push("A").unwrap();
        let b = graph.names_mut().push("B").unwrap();
        graph.add_edge(a, b);

        assert_eq!(graph.id_of("B").unwrap(), b);
        assert_eq!(graph.name_of(a).unwrap(), "A");
        assert!(graph.id_of("C").is_err());
    }

    #[test]
    fn test_display_with_names() {
        let mut graph: Graph = Graph::new(3, true);
        let a = graph.names_mut().push("A").unwrap();
        let b = graph.names_mut().push("B").unwrap();
        let c = graph.names_mut().push("C").unwrap();
        graph.add_edge(a, b);
        graph.add_edge(a, c);
        graph.add_edge(b, c);

        assert_eq!(
            graph.to_string(),
            "\"A\": \"B\" -> \"C\" -> $\n\"B\": \"C\" -> $\n"
        );
    }

    #[test]
    fn test_display_without_names() {
        let mut graph: Graph = Graph::new(2, true);
        graph.add_edge(v(0), v(1));
        assert_eq!(graph.to_string(), "v0: v1 -> $\n");
    }
}
