//! Topological ordering of directed acyclic graphs.
//!
//! A DFS forest finishes every vertex after all of its descendants, so the finish order read
//! backwards places every edge source before its target. A back edge means the graph has a
//! directed cycle and no such order exists.
//!
//! # Key Functions
//!
//! - [`topological_sort`] - Raw finish order, the form consumers that replay it backwards expect
//! - [`topological_order`] - The same order reversed, sources first
//!
//! # Examples
//!
//! ```rust
//! use grlib::{algorithms::topological_order, EdgeList, Graph};
//!
//! let source = EdgeList::new(true)
//!     .with_edge("shirt", "tie")
//!     .with_edge("tie", "jacket")
//!     .with_edge("trousers", "jacket");
//! let graph: Graph = Graph::from_source(&source);
//!
//! let order = topological_order(&graph, graph.id_of("shirt")?)?;
//! let names: Vec<&str> = order.iter().map(|&v| graph.name_of(v)).collect::<Result<_, _>>()?;
//!
//! assert_eq!(names, vec!["trousers", "shirt", "tie", "jacket"]);
//! # Ok::<(), grlib::Error>(())
//! ```

use crate::{
    graph::{
        algorithms::{
            classify::{classify_edge, EdgeKind},
            traversal::dfs_forest_from,
            Hooks, TraversalState,
        },
        Graph, VertexId,
    },
    Error, Result,
};

/// Computes the DFS finish order of `graph`.
///
/// The first root is `start`; the remaining non-isolated vertices are covered in ascending id
/// order. Vertices no root reaches are appended afterwards in ascending id order, so the
/// result always holds every vertex slot exactly once.
///
/// Read in reverse, the result is a topological order: for every edge `u -> v`, `v` appears
/// before `u` in the returned sequence.
///
/// # Arguments
///
/// * `graph` - A directed graph
/// * `start` - The first traversal root
///
/// # Errors
///
/// - [`Error::VertexOutOfRange`] if `start` is not a vertex of `graph`
/// - [`Error::CycleDetected`] on the first back edge, which closes a directed cycle
pub fn topological_sort<W>(graph: &Graph<W>, start: VertexId) -> Result<Vec<VertexId>> {
    graph.check_vertex(start)?;

    let mut finished = Vec::with_capacity(graph.capacity());
    let mut state = TraversalState::for_graph(graph);
    let mut hooks = Hooks::new()
        .on_edge(|x, y, state| match classify_edge(x, y, state)? {
            EdgeKind::Back => Err(Error::CycleDetected { from: x, to: y }),
            _ => Ok(()),
        })
        .on_vertex_late(|v, _| {
            finished.push(v);
            Ok(())
        });

    if let Err(error) = dfs_forest_from(graph, Some(start), &mut state, &mut hooks) {
        log::debug!("Topological sort failed: {error}");
        return Err(error);
    }
    drop(hooks);

    finished.extend(graph.vertex_ids().filter(|&v| !state.is_discovered(v)));

    log::debug!("Topologically sorted {} vertices", finished.len());
    Ok(finished)
}

/// Computes a topological order of `graph`, sources first.
///
/// This is [`topological_sort`] reversed.
///
/// # Errors
///
/// See [`topological_sort`].
pub fn topological_order<W>(graph: &Graph<W>, start: VertexId) -> Result<Vec<VertexId>> {
    let mut order = topological_sort(graph, start)?;
    order.reverse();
    Ok(order)
}
