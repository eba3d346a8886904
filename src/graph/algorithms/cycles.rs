//! Cycle detection via DFS back edges.
//!
//! A graph contains a cycle reachable from a traversal root exactly when the DFS forest has
//! a back edge. [`detect_cycles`] reports every back edge of the forest once, in discovery
//! order; the caller rebuilds the cycle itself from parent links with
//! [`TraversalState::path_to`].
//!
//! In undirected graphs the edge leading back to a vertex's own DFS parent is the reverse
//! copy of the tree edge that discovered it and is not reported.

use crate::{
    graph::{
        algorithms::{
            classify::{classify_edge, EdgeKind},
            traversal::dfs_forest_from,
            Hooks, TraversalState,
        },
        Graph, VertexId,
    },
    Result,
};

/// Reports every back edge of a DFS forest over `graph`.
///
/// The first root is `start`, launched even if it has no out-edges, so back edges reachable
/// from it are reported first. The remaining non-isolated vertices are covered in ascending
/// id order. The callback may call [`TraversalState::terminate`] to stop after the first
/// cycle.
///
/// In undirected graphs the edge `x -> parent(x)` is the reverse copy of the tree edge that
/// discovered `x` and is not reported. Only back edges closing a cycle of three or more
/// vertices, and self loops, reach the callback.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `start` - The first traversal root
/// * `on_cycle_found` - Called with the back edge `x -> y` and the traversal state
///
/// # Returns
///
/// The number of back edges reported.
///
/// # Errors
///
/// Returns [`crate::Error::VertexOutOfRange`] if `start` is not a vertex of `graph`, or the
/// first error returned by `on_cycle_found`.
///
/// # Examples
///
/// ```rust
/// use grlib::{algorithms::detect_cycles, Graph, VertexId};
///
/// let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
/// let mut graph: Graph = Graph::new(3, true);
/// graph.add_edge(a, b);
/// graph.add_edge(b, c);
/// graph.add_edge(c, a);
///
/// let mut cycles = Vec::new();
/// let found = detect_cycles(&graph, a, |x, y, state| {
///     cycles.push(state.path_to(y, x).unwrap_or_default());
///     Ok(())
/// })?;
///
/// assert_eq!(found, 1);
/// assert_eq!(cycles, vec![vec![a, b, c]]);
/// # Ok::<(), grlib::Error>(())
/// ```
pub fn detect_cycles<W, F>(graph: &Graph<W>, start: VertexId, mut on_cycle_found: F) -> Result<usize>
where
    F: FnMut(VertexId, VertexId, &mut TraversalState) -> Result<()>,
{
    graph.check_vertex(start)?;
    log::debug!("Searching for cycles from {}", graph.label(start));

    let directed = graph.is_directed();
    let mut found = 0;
    let mut state = TraversalState::for_graph(graph);
    let mut hooks = Hooks::new().on_edge(|x, y, state| {
        if classify_edge(x, y, state)? != EdgeKind::Back {
            return Ok(());
        }
        if !directed && state.parent(x) == Some(y) {
            return Ok(());
        }

        log::trace!("Back edge {x} -> {y}");
        found += 1;
        on_cycle_found(x, y, state)
    });

    dfs_forest_from(graph, Some(start), &mut state, &mut hooks)?;
    drop(hooks);

    log::debug!("Found {found} back edges");
    Ok(found)
}

/// Returns `true` if `graph` contains a cycle reachable from any traversal root.
///
/// Stops at the first back edge.
///
/// # Errors
///
/// Returns [`crate::Error::UnclassifiableEdge`] if traversal bookkeeping is inconsistent.
pub fn has_cycle<W>(graph: &Graph<W>) -> Result<bool> {
    let Some(start) = graph.vertex_ids().find(|&x| !graph.is_isolated(x)) else {
        return Ok(false);
    };

    let found = detect_cycles(graph, start, |_, _, state| {
        state.terminate();
        Ok(())
    })?;
    Ok(found > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test::{diamond, disjoint_triangles, undirected, v},
        Error,
    };

    fn back_edges(graph: &Graph, start: VertexId) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        detect_cycles(graph, start, |x, y, _| {
            edges.push((x.index(), y.index()));
            Ok(())
        })
        .unwrap();
        edges
    }

    #[test]
    fn test_acyclic_reports_nothing() {
        assert!(back_edges(&diamond(), v(0)).is_empty());
        assert!(!has_cycle(&diamond()).unwrap());
    }

    #[test]
    fn test_three_cycle() {
        let mut graph: Graph = Graph::new(3, true);
        graph.add_edge(v(0), v(1));
        graph.add_edge(v(1), v(2));
        graph.add_edge(v(2), v(0));

        assert_eq!(back_edges(&graph, v(0)), vec![(2, 0)]);
        assert!(has_cycle(&graph).unwrap());
    }

    #[test]
    fn test_self_loop() {
        let mut graph: Graph = Graph::new(1, true);
        graph.add_edge(v(0), v(0));
        assert_eq!(back_edges(&graph, v(0)), vec![(0, 0)]);
    }

    #[test]
    fn test_every_independent_back_edge_reported() {
        assert_eq!(back_edges(&disjoint_triangles(), v(0)), vec![(2, 0), (5, 3)]);
    }

    #[test]
    fn test_cycle_path_reconstruction() {
        // 0 -> 1 -> 2 -> 3 -> 1
        let mut graph: Graph = Graph::new(4, true);
        graph.add_edge(v(0), v(1));
        graph.add_edge(v(1), v(2));
        graph.add_edge(v(2), v(3));
        graph.add_edge(v(3), v(1));

        let mut paths = Vec::new();
        detect_cycles(&graph, v(0), |x, y, state| {
            paths.push(state.path_to(y, x));
            Ok(())
        })
        .unwrap();

        assert_eq!(paths, vec![Some(vec![v(1), v(2), v(3)])]);
    }

    #[test]
    fn test_start_is_first_root() {
        // Cycle 1 <-> 2 reached from 2 first
        let mut graph: Graph = Graph::new(3, true);
        graph.add_edge(v(0), v(1));
        graph.add_edge(v(1), v(2));
        graph.add_edge(v(2), v(1));

        assert_eq!(back_edges(&graph, v(2)), vec![(1, 2)]);
        assert_eq!(back_edges(&graph, v(0)), vec![(2, 1)]);
    }

    #[test]
    fn test_isolated_start_is_still_launched() {
        // 2 has no out-edges but is the requested start
        let mut graph: Graph = Graph::new(3, true);
        graph.add_edge(v(0), v(1));
        graph.add_edge(v(1), v(0));

        let mut roots = Vec::new();
        detect_cycles(&graph, v(2), |_, y, state| {
            roots.push(state.is_discovered(v(2)));
            assert_eq!(y, v(0));
            Ok(())
        })
        .unwrap();
        assert_eq!(roots, vec![true]);
    }

    #[test]
    fn test_undirected_ignores_parent_edge() {
        let path = undirected(3, &[(0, 1), (1, 2)]);
        assert!(back_edges(&path, v(0)).is_empty());

        let triangle = undirected(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(back_edges(&triangle, v(0)).len(), 1);
    }

    #[test]
    fn test_terminate_after_first_cycle() {
        let graph = disjoint_triangles();
        let found = detect_cycles(&graph, v(0), |_, _, state| {
            state.terminate();
            Ok(())
        })
        .unwrap();
        assert_eq!(found, 1);
    }

    #[test]
    fn test_callback_error_propagates() {
        let graph = disjoint_triangles();
        let result = detect_cycles(&graph, v(0), |x, y, _| {
            Err(Error::Traversal(format!("cycle through {x} and {y}")))
        });
        assert_eq!(
            result,
            Err(Error::Traversal("cycle through v2 and v0".to_string()))
        );
    }

    #[test]
    fn test_start_out_of_range() {
        let graph = diamond();
        assert!(matches!(
            detect_cycles(&graph, v(10), |_, _, _| Ok(())),
            Err(Error::VertexOutOfRange { .. })
        ));
    }
}
