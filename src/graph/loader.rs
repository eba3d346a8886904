//! Building graphs from named edge descriptions.
//!
//! Graph description parsers are not part of this crate. Whatever reads the description
//! hands over its result through the [`GraphSource`] trait: a directedness flag, the declared
//! vertex names and an ordered stream of `(source name, target name)` pairs. [`EdgeList`] is
//! the in-memory implementation.
//!
//! Names are translated into dense ids by the graph's [`VertexMap`](crate::VertexMap) while
//! edges are inserted, so the resulting graph never refers to names during traversal.
//!
//! # Examples
//!
//! ```rust
//! use grlib::{EdgeList, Graph};
//!
//! let source = EdgeList::new(true)
//!     .with_edge("A", "B")
//!     .with_edge("B", "C");
//!
//! let graph: Graph = Graph::from_source(&source);
//! let a = graph.id_of("A")?;
//! let b = graph.id_of("B")?;
//!
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.successors(a).collect::<Vec<_>>(), vec![b]);
//! # Ok::<(), grlib::Error>(())
//! ```

use std::collections::HashSet;

use crate::graph::{Edge, Graph};

/// Supplier of a named graph description.
///
/// Implemented by anything able to produce named vertices and edges, e.g. a file parser.
pub trait GraphSource {
    /// Returns `true` if the described edges are one-way.
    fn is_directed(&self) -> bool;

    /// Returns the number of distinct vertices in the description.
    fn vertex_count(&self) -> usize;

    /// Returns the declared vertex names in declaration order.
    ///
    /// Declared vertices are assigned ids before any edge is read, so vertices without edges
    /// still receive an id.
    fn vertex_names(&self) -> impl Iterator<Item = &str>;

    /// Returns the `(source name, target name)` pairs in description order.
    fn edge_pairs(&self) -> impl Iterator<Item = (&str, &str)>;
}

/// An in-memory, ordered list of named edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    directed: bool,
    vertices: Vec<String>,
    edges: Vec<(String, String)>,
}

impl EdgeList {
    /// Creates an empty edge list.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declares a vertex, which receives an id even if no edge mentions it.
    pub fn push_vertex(&mut self, name: impl Into<String>) {
        self.vertices.push(name.into());
    }

    /// Appends the edge `source -> target`.
    pub fn push_edge(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.edges.push((source.into(), target.into()));
    }

    /// Builder form of [`EdgeList::push_vertex`].
    #[must_use]
    pub fn with_vertex(mut self, name: impl Into<String>) -> Self {
        self.push_vertex(name);
        self
    }

    /// Builder form of [`EdgeList::push_edge`].
    #[must_use]
    pub fn with_edge(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.push_edge(source, target);
        self
    }
}

impl GraphSource for EdgeList {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> usize {
        let mut seen: HashSet<&str> = self.vertices.iter().map(String::as_str).collect();
        for (source, target) in &self.edges {
            seen.insert(source);
            seen.insert(target);
        }
        seen.len()
    }

    fn vertex_names(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(String::as_str)
    }

    fn edge_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }
}

impl<W: Default> Graph<W> {
    /// Builds a graph from a named description.
    ///
    /// Declared vertex names are registered first, in declaration order; names first seen in
    /// an edge pair are registered when that pair is read. Each pair inserts `x -> y`, and for
    /// undirected sources also `y -> x`. Edges carry the default payload.
    ///
    /// # Arguments
    ///
    /// * `source` - The named graph description
    #[must_use]
    pub fn from_source<S: GraphSource>(source: &S) -> Self {
        let mut graph = Graph::new(source.vertex_count().max(1), source.is_directed());

        for name in source.vertex_names() {
            graph.names_mut().get_or_push(name);
        }

        for (source_name, target_name) in source.edge_pairs() {
            let x = graph.names_mut().get_or_push(source_name);
            let y = graph.names_mut().get_or_push(target_name);

            graph.insert_edge(x, Edge::new(y, W::default()));
            if !graph.is_directed() {
                graph.insert_edge(y, Edge::new(x, W::default()));
            }
        }

        log::debug!(
            "Built {} graph with {} vertices and {} edges",
            if graph.is_directed() { "directed" } else { "undirected" },
            graph.names().len(),
            graph.edge_count()
        );

        graph
    }
}
