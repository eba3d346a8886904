//! Instrumented depth-first and breadth-first traversal.
//!
//! Both engines visit every vertex reachable from a root exactly once, maintain the
//! [`TraversalState`] bookkeeping (discovery and processing flags, entry and exit
//! timestamps, parent links) and call the three [`Visitor`] hooks along the way.
//!
//! # Engines
//!
//! - [`run_dfs`] - Depth-first traversal from a single root
//! - [`run_bfs`] - Breadth-first traversal from a single root
//! - [`dfs_forest`] / [`bfs_forest`] - Multi-source drivers covering disconnected graphs
//!
//! # Hook Order
//!
//! DFS explores one out-edge fully before the next. For an edge `x -> y` to an undiscovered
//! vertex it records `parent(y) = x`, calls `on_edge(x, y)` and then descends into `y`. For an
//! edge to an already discovered vertex, `on_edge` is called only if `y` is not yet processed
//! or the graph is directed. `on_vertex_late` fires once all out-edges are exhausted.
//!
//! BFS dequeues vertices in FIFO order. On dequeue it fires `on_vertex_early`, then scans the
//! out-edges, firing `on_edge` when the target is unprocessed or the graph is directed and
//! enqueueing undiscovered targets, then marks the vertex processed and fires
//! `on_vertex_late`.
//!
//! # Early Termination
//!
//! A hook may call [`TraversalState::terminate`]. The flag is checked before every further
//! hook invocation; once set, the traversal returns without calling any more hooks and the
//! drivers launch no further roots.
//!
//! # Stack Depth
//!
//! The DFS keeps an explicit stack of `(vertex, next edge position)` frames rather than
//! recursing, so arbitrarily deep graphs do not exhaust the call stack. Entry and exit
//! timestamps and hook order are identical to the recursive formulation.

use std::collections::VecDeque;

use crate::{
    graph::{
        algorithms::{TraversalState, Visitor},
        Graph, VertexId,
    },
    Result,
};

/// Runs a depth-first traversal rooted at `start`.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The root vertex
/// * `visitor` - The hooks to invoke
///
/// # Returns
///
/// The final traversal state.
///
/// # Errors
///
/// Returns [`crate::Error::VertexOutOfRange`] if `start` is not a vertex of `graph`, or the
/// first error returned by a hook.
///
/// # Examples
///
/// ```rust
/// use grlib::{algorithms::{run_dfs, Hooks}, Graph, VertexId};
///
/// let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
/// let mut graph: Graph = Graph::new(3, true);
/// graph.add_edge(a, b);
/// graph.add_edge(b, c);
///
/// let state = run_dfs(&graph, a, &mut Hooks::new())?;
///
/// // Tree edges nest properly
/// assert!(state.entry_time(a) < state.entry_time(b));
/// assert!(state.exit_time(b) < state.exit_time(a));
/// assert_eq!(state.parent(c), Some(b));
/// # Ok::<(), grlib::Error>(())
/// ```
pub fn run_dfs<W, V>(graph: &Graph<W>, start: VertexId, visitor: &mut V) -> Result<TraversalState>
where
    V: Visitor + ?Sized,
{
    graph.check_vertex(start)?;

    let mut state = TraversalState::for_graph(graph);
    dfs_from(graph, start, &mut state, visitor)?;
    Ok(state)
}

/// Runs a breadth-first traversal rooted at `start`.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The root vertex
/// * `visitor` - The hooks to invoke
///
/// # Returns
///
/// The final traversal state.
///
/// # Errors
///
/// Returns [`crate::Error::VertexOutOfRange`] if `start` is not a vertex of `graph`, or the
/// first error returned by a hook.
pub fn run_bfs<W, V>(graph: &Graph<W>, start: VertexId, visitor: &mut V) -> Result<TraversalState>
where
    V: Visitor + ?Sized,
{
    graph.check_vertex(start)?;

    let mut state = TraversalState::for_graph(graph);
    bfs_from(graph, start, &mut state, visitor)?;
    Ok(state)
}

/// Runs depth-first traversals until every non-isolated vertex is processed.
///
/// Vertex ids are scanned in ascending order and a new root is launched at every vertex
/// that is still undiscovered and has at least one out-edge. The state is shared across
/// roots, so no vertex is visited twice. Vertices without out-edges that no root reaches are
/// left undiscovered.
///
/// # Errors
///
/// Returns the first error returned by a hook.
pub fn dfs_forest<W, V>(graph: &Graph<W>, visitor: &mut V) -> Result<TraversalState>
where
    V: Visitor + ?Sized,
{
    let mut state = TraversalState::for_graph(graph);
    drive(graph, None, &mut state, visitor, dfs_from)?;
    Ok(state)
}

/// Runs breadth-first traversals until every non-isolated vertex is processed.
///
/// Roots are chosen exactly as in [`dfs_forest`].
///
/// # Errors
///
/// Returns the first error returned by a hook.
pub fn bfs_forest<W, V>(graph: &Graph<W>, visitor: &mut V) -> Result<TraversalState>
where
    V: Visitor + ?Sized,
{
    let mut state = TraversalState::for_graph(graph);
    drive(graph, None, &mut state, visitor, bfs_from)?;
    Ok(state)
}

/// Runs the multi-source DFS driver, launching the first root at `first` when given.
pub(crate) fn dfs_forest_from<W, V>(
    graph: &Graph<W>,
    first: Option<VertexId>,
    state: &mut TraversalState,
    visitor: &mut V,
) -> Result<()>
where
    V: Visitor + ?Sized,
{
    drive(graph, first, state, visitor, dfs_from)
}

fn drive<W, V, F>(
    graph: &Graph<W>,
    first: Option<VertexId>,
    state: &mut TraversalState,
    visitor: &mut V,
    engine: F,
) -> Result<()>
where
    V: Visitor + ?Sized,
    F: Fn(&Graph<W>, VertexId, &mut TraversalState, &mut V) -> Result<()>,
{
    // An explicit first root is launched even if it has no out-edges
    if let Some(root) = first {
        log::trace!("Launching traversal root {root}");
        engine(graph, root, state, visitor)?;
    }

    for root in graph.vertex_ids() {
        if state.is_terminated() {
            log::trace!("Traversal terminated early, skipping remaining roots");
            break;
        }

        if state.is_discovered(root) || graph.is_isolated(root) {
            continue;
        }

        log::trace!("Launching traversal root {root}");
        engine(graph, root, state, visitor)?;
    }

    Ok(())
}

/// Explicit-stack DFS from `root` over a shared state.
pub(crate) fn dfs_from<W, V>(
    graph: &Graph<W>,
    root: VertexId,
    state: &mut TraversalState,
    visitor: &mut V,
) -> Result<()>
where
    V: Visitor + ?Sized,
{
    if state.is_terminated() {
        return Ok(());
    }

    // Frames hold the vertex and the position of its next unexplored out-edge
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    state.mark_discovered(root);
    state.enter(root);
    visitor.on_vertex_early(root, state)?;
    stack.push((root, 0));

    while let Some(frame) = stack.last_mut() {
        if state.is_terminated() {
            return Ok(());
        }

        let (x, position) = *frame;
        match graph.edges(x).get(position) {
            Some(edge) => {
                frame.1 += 1;
                let y = edge.target;

                if !state.is_discovered(y) {
                    state.set_parent(y, x);
                    visitor.on_edge(x, y, state)?;
                    if state.is_terminated() {
                        return Ok(());
                    }

                    state.mark_discovered(y);
                    state.enter(y);
                    visitor.on_vertex_early(y, state)?;
                    stack.push((y, 0));
                } else if !state.is_processed(y) || graph.is_directed() {
                    visitor.on_edge(x, y, state)?;
                }
            }
            None => {
                stack.pop();
                state.leave(x);
                visitor.on_vertex_late(x, state)?;
            }
        }
    }

    Ok(())
}

/// Queue-driven BFS from `root` over a shared state.
pub(crate) fn bfs_from<W, V>(
    graph: &Graph<W>,
    root: VertexId,
    state: &mut TraversalState,
    visitor: &mut V,
) -> Result<()>
where
    V: Visitor + ?Sized,
{
    let mut queue = VecDeque::new();
    state.mark_discovered(root);
    queue.push_back(root);

    while let Some(x) = queue.pop_front() {
        if state.is_terminated() {
            return Ok(());
        }

        state.enter(x);
        visitor.on_vertex_early(x, state)?;

        for y in graph.successors(x) {
            if state.is_terminated() {
                return Ok(());
            }

            if !state.is_processed(y) || graph.is_directed() {
                visitor.on_edge(x, y, state)?;
            }

            if !state.is_discovered(y) {
                state.mark_discovered(y);
                state.set_parent(y, x);
                queue.push_back(y);
            }
        }

        if state.is_terminated() {
            return Ok(());
        }

        state.leave(x);
        visitor.on_vertex_late(x, state)?;
    }

    Ok(())
}
