use thiserror::Error;

use crate::graph::VertexId;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Traversal hooks return [`crate::Result`], so every failure raised inside a hook travels
/// back to the caller of the algorithm entry point as one of these variants. The engine never
/// retries or swallows an error: the first `Err` stops the traversal and no further hook is
/// invoked.
///
/// # Error Categories
///
/// ## Lookup Errors
/// - [`Error::UnknownVertexName`] - A name was never registered in the vertex map
/// - [`Error::VertexOutOfRange`] - An id lies outside the valid id range
/// - [`Error::DuplicateVertexName`] - A name was registered twice
///
/// ## Algorithm Outcomes
/// - [`Error::CycleDetected`] - A topological order was requested for a cyclic graph
/// - [`Error::UnclassifiableEdge`] - The DFS edge classifier found an inconsistent state
/// - [`Error::Traversal`] - A caller-supplied hook aborted the traversal
///
/// # Examples
///
/// ```rust
/// use grlib::{algorithms::topological_sort, Error, Graph, VertexId};
///
/// let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
/// let mut graph: Graph = Graph::new(3, true);
/// graph.add_edge(a, b);
/// graph.add_edge(b, c);
/// graph.add_edge(c, a);
///
/// match topological_sort(&graph, a) {
///     Err(Error::CycleDetected { from, to }) => println!("back edge {from} -> {to}"),
///     Err(e) => return Err(e),
///     Ok(order) => println!("order: {order:?}"),
/// }
/// # Ok::<(), grlib::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested vertex name has no id assigned.
    #[error("Unknown vertex name - {0}")]
    UnknownVertexName(String),

    /// A vertex id outside of the valid range was supplied.
    ///
    /// # Fields
    ///
    /// * `id` - The offending vertex id
    /// * `capacity` - The number of valid ids at the time of the call
    #[error("Vertex {id} is out of range (capacity {capacity})")]
    VertexOutOfRange {
        /// The offending vertex id
        id: VertexId,
        /// The number of valid ids at the time of the call
        capacity: usize,
    },

    /// A vertex name was pushed into the vertex map a second time.
    #[error("Vertex name already mapped - {0}")]
    DuplicateVertexName(String),

    /// A directed cycle was observed while computing a topological order.
    ///
    /// The edge `from -> to` is the back edge that closed the cycle; `to` is an ancestor of
    /// `from` on the active DFS path.
    #[error("Directed cycle found through back edge {from} -> {to}, no topological order exists")]
    CycleDetected {
        /// Source vertex of the back edge
        from: VertexId,
        /// Target vertex of the back edge (an ancestor of `from`)
        to: VertexId,
    },

    /// An edge matched none of the four DFS edge categories.
    ///
    /// This signals broken traversal bookkeeping (inconsistent timestamps or parent links)
    /// and is not something an algorithm can recover from.
    #[error("Cannot classify edge {from} -> {to}")]
    UnclassifiableEdge {
        /// Source vertex of the edge
        from: VertexId,
        /// Target vertex of the edge
        to: VertexId,
    },

    /// A traversal hook reported a failure.
    #[error("Traversal aborted - {0}")]
    Traversal(String),
}
