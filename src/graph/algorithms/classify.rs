//! DFS edge classification.
//!
//! During a depth-first traversal every reported edge `x -> y` falls into one of four
//! categories, decided from the state of `y` at the moment the edge is reported:
//!
//! | Kind      | Condition                                           |
//! |-----------|-----------------------------------------------------|
//! | `Tree`    | `parent(y) == x`                                    |
//! | `Back`    | `y` discovered but not yet processed                |
//! | `Forward` | `y` processed and `entry(y) > entry(x)`             |
//! | `Cross`   | `y` processed and `entry(y) < entry(x)`             |
//!
//! The rules are tested in that order, so a tree edge is never misread as a back edge even
//! though its target is active when the hook fires. In undirected graphs only tree and back
//! edges occur.
//!
//! Classification is only meaningful from inside an `on_edge` hook of a DFS. BFS parent
//! links and timestamps do not satisfy the nesting the rules rely on.

use std::fmt;

use strum::{EnumCount, EnumIter};

use crate::{
    graph::{
        algorithms::{traversal::dfs_forest, Hooks, TraversalState},
        Graph, VertexId,
    },
    Error, Result,
};

/// Category of a DFS edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum EdgeKind {
    /// Edge that discovered its target
    Tree,
    /// Edge to an ancestor that is still active
    Back,
    /// Edge to an already processed descendant
    Forward,
    /// Edge to an already processed vertex in another subtree
    Cross,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgeKind::Tree => "tree",
            EdgeKind::Back => "back",
            EdgeKind::Forward => "forward",
            EdgeKind::Cross => "cross",
        };
        f.write_str(name)
    }
}

/// Classifies the edge `x -> y` from the current traversal state.
///
/// # Arguments
///
/// * `x` - The edge source, the vertex currently being explored
/// * `y` - The edge target
/// * `state` - The DFS state at the time the edge is reported
///
/// # Errors
///
/// Returns [`Error::UnclassifiableEdge`] if none of the rules applies. This only happens
/// when called outside a DFS edge hook.
///
/// # Examples
///
/// ```rust
/// use grlib::{algorithms::{classify_edge, run_dfs, EdgeKind, Hooks}, Graph, VertexId};
///
/// let (a, b) = (VertexId::new(0), VertexId::new(1));
/// let mut graph: Graph = Graph::new(2, true);
/// graph.add_edge(a, b);
/// graph.add_edge(b, a);
///
/// let mut kinds = Vec::new();
/// let mut hooks = Hooks::new().on_edge(|x, y, state| {
///     kinds.push(classify_edge(x, y, state)?);
///     Ok(())
/// });
/// run_dfs(&graph, a, &mut hooks)?;
/// drop(hooks);
///
/// assert_eq!(kinds, vec![EdgeKind::Tree, EdgeKind::Back]);
/// # Ok::<(), grlib::Error>(())
/// ```
pub fn classify_edge(x: VertexId, y: VertexId, state: &TraversalState) -> Result<EdgeKind> {
    if state.parent(y) == Some(x) {
        return Ok(EdgeKind::Tree);
    }

    if state.is_discovered(y) && !state.is_processed(y) {
        return Ok(EdgeKind::Back);
    }

    if state.is_processed(y) {
        if state.entry_time(y) > state.entry_time(x) {
            return Ok(EdgeKind::Forward);
        }
        if state.entry_time(y) < state.entry_time(x) {
            return Ok(EdgeKind::Cross);
        }
    }

    log::warn!("Unclassified edge {x} -> {y}");
    Err(Error::UnclassifiableEdge { from: x, to: y })
}

/// Per-kind edge counts of a complete DFS forest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeCensus {
    counts: [usize; EdgeKind::COUNT],
}

impl EdgeCensus {
    /// Returns the number of edges of `kind`.
    #[must_use]
    pub fn count(&self, kind: EdgeKind) -> usize {
        self.counts[kind as usize]
    }

    /// Returns the total number of classified edges.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    fn record(&mut self, kind: EdgeKind) {
        self.counts[kind as usize] += 1;
    }
}

/// Classifies every edge reported by a DFS forest over `graph`.
///
/// # Errors
///
/// Returns [`Error::UnclassifiableEdge`] if an edge cannot be classified.
///
/// # Examples
///
/// ```rust
/// use grlib::{algorithms::{edge_census, EdgeKind}, Graph, VertexId};
///
/// let v = VertexId::new;
/// let mut graph: Graph = Graph::new(4, true);
/// graph.add_edge(v(0), v(1));
/// graph.add_edge(v(0), v(2));
/// graph.add_edge(v(1), v(3));
/// graph.add_edge(v(2), v(3));
///
/// let census = edge_census(&graph)?;
/// assert_eq!(census.count(EdgeKind::Tree), 3);
/// assert_eq!(census.count(EdgeKind::Cross), 1);
/// # Ok::<(), grlib::Error>(())
/// ```
pub fn edge_census<W>(graph: &Graph<W>) -> Result<EdgeCensus> {
    let mut census = EdgeCensus::default();
    let mut hooks = Hooks::new().on_edge(|x, y, state| {
        census.record(classify_edge(x, y, state)?);
        Ok(())
    });
    dfs_forest(graph, &mut hooks)?;
    drop(hooks);

    log::debug!(
        "Classified {} edges: {} tree, {} back, {} forward, {} cross",
        census.total(),
        census.count(EdgeKind::Tree),
        census.count(EdgeKind::Back),
        census.count(EdgeKind::Forward),
        census.count(EdgeKind::Cross)
    );

    Ok(census)
}
