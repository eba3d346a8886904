//! Strongly connected components via low-link propagation.
//!
//! This module computes the strongly connected components of a graph with a single DFS
//! forest, in the manner of Tarjan's algorithm. Vertices stay on an explicit active stack
//! until the root of their component finishes, at which point the whole component is popped
//! and labelled.
//!
//! # Low Links
//!
//! `low[v]` holds the earliest-entered vertex known to be reachable from the DFS subtree of
//! `v` that may still belong to the component of `v`. It starts as `v` itself and is lowered
//!
//! - by a back edge `x -> y`, since `y` is an active ancestor of `x`
//! - by a cross edge `x -> y` whose target has no component yet, since `y` then still sits
//!   on the active stack below the root of the component of `x`
//! - by a finished child, whose low link is handed to its parent
//!
//! A vertex whose low link is still itself when it finishes is the root of a component.
//! Cross edges to already labelled vertices lead into finished components and are ignored,
//! as are tree and forward edges.
//!
//! # Labels
//!
//! Labels run from 1 to the component count without gaps. A component is labelled when its
//! root finishes, so labels follow the reverse topological order of the condensation: a
//! component never has edges into a component with a higher label. Vertex slots no traversal
//! root reaches are labelled as singletons after the forest is complete.
//!
//! # Examples
//!
//! ```rust
//! use grlib::{algorithms::compute_sccs, EdgeList, Graph};
//!
//! let source = EdgeList::new(true)
//!     .with_edge("a", "b")
//!     .with_edge("b", "a")
//!     .with_edge("b", "c");
//! let graph: Graph = Graph::from_source(&source);
//!
//! let components = compute_sccs(&graph)?;
//! let (a, b, c) = (graph.id_of("a")?, graph.id_of("b")?, graph.id_of("c")?);
//!
//! assert_eq!(components.count(), 2);
//! assert!(components.same_component(a, b));
//! assert!(!components.same_component(a, c));
//! // The sink component finishes first
//! assert_eq!(components.label(c), Some(1));
//! # Ok::<(), grlib::Error>(())
//! ```

use crate::{
    graph::{
        algorithms::{
            classify::{classify_edge, EdgeKind},
            traversal::dfs_forest,
            TraversalState, Visitor,
        },
        Graph, VertexId,
    },
    Result,
};

/// The strongly connected components of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    count: usize,
    labels: Vec<usize>,
}

impl Components {
    /// Returns the number of components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the label of every vertex slot, indexed by vertex id.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Returns the label of `v`, or `None` if `v` is not a vertex of the graph.
    #[must_use]
    pub fn label(&self, v: VertexId) -> Option<usize> {
        self.labels.get(v.index()).copied()
    }

    /// Returns `true` if `a` and `b` are mutually reachable.
    #[must_use]
    pub fn same_component(&self, a: VertexId, b: VertexId) -> bool {
        match (self.label(a), self.label(b)) {
            (Some(la), Some(lb)) => la == lb,
            _ => false,
        }
    }

    /// Returns the vertices labelled `label` in ascending id order.
    #[must_use]
    pub fn members(&self, label: usize) -> Vec<VertexId> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == label)
            .map(|(i, _)| VertexId::new(i))
            .collect()
    }

    /// Returns all components, the component labelled `n` at position `n - 1`.
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<VertexId>> {
        let mut groups = vec![Vec::new(); self.count];
        for (i, &label) in self.labels.iter().enumerate() {
            groups[label - 1].push(VertexId::new(i));
        }
        groups
    }

    /// Splits into the component count and the per-vertex label array.
    #[must_use]
    pub fn into_parts(self) -> (usize, Vec<usize>) {
        (self.count, self.labels)
    }
}

/// Low-link bookkeeping driven by the DFS hooks.
struct SccVisitor {
    low: Vec<VertexId>,
    labels: Vec<Option<usize>>,
    active: Vec<VertexId>,
    count: usize,
}

impl SccVisitor {
    fn new(capacity: usize) -> Self {
        Self {
            low: (0..capacity).map(VertexId::new).collect(),
            labels: vec![None; capacity],
            active: Vec::new(),
            count: 0,
        }
    }

    /// Lowers `low[x]` to `candidate` if `candidate` was entered earlier.
    fn lower(&mut self, x: VertexId, candidate: VertexId, state: &TraversalState) {
        if state.entry_time(candidate) < state.entry_time(self.low[x.index()]) {
            self.low[x.index()] = candidate;
        }
    }

    /// Pops the active stack down to `root` and labels the popped vertices.
    fn pop_component(&mut self, root: VertexId) {
        self.count += 1;
        while let Some(t) = self.active.pop() {
            self.labels[t.index()] = Some(self.count);
            if t == root {
                break;
            }
        }
    }

    fn finish(mut self) -> Components {
        let mut singletons = 0;
        let labels = self
            .labels
            .into_iter()
            .map(|label| {
                label.unwrap_or_else(|| {
                    self.count += 1;
                    singletons += 1;
                    self.count
                })
            })
            .collect();

        if singletons > 0 {
            log::trace!("Labelled {singletons} unreached vertices as singletons");
        }

        Components {
            count: self.count,
            labels,
        }
    }
}

impl Visitor for SccVisitor {
    fn on_vertex_early(&mut self, v: VertexId, _: &mut TraversalState) -> Result<()> {
        self.active.push(v);
        Ok(())
    }

    fn on_edge(&mut self, x: VertexId, y: VertexId, state: &mut TraversalState) -> Result<()> {
        match classify_edge(x, y, state)? {
            EdgeKind::Back => self.lower(x, y, state),
            EdgeKind::Cross if self.labels[y.index()].is_none() => self.lower(x, y, state),
            _ => {}
        }
        Ok(())
    }

    fn on_vertex_late(&mut self, v: VertexId, state: &mut TraversalState) -> Result<()> {
        if self.low[v.index()] == v {
            self.pop_component(v);
        }

        if let Some(parent) = state.parent(v) {
            let low = self.low[v.index()];
            self.lower(parent, low, state);
        }
        Ok(())
    }
}

/// Computes the strongly connected components of `graph`.
///
/// For undirected graphs these are the connected components.
///
/// # Returns
///
/// The component count and a label in `1..=count` for every vertex slot. Two vertices share
/// a label exactly when each is reachable from the other.
///
/// # Errors
///
/// Returns [`crate::Error::UnclassifiableEdge`] if traversal bookkeeping is inconsistent.
pub fn compute_sccs<W>(graph: &Graph<W>) -> Result<Components> {
    let mut visitor = SccVisitor::new(graph.capacity());
    dfs_forest(graph, &mut visitor)?;

    let components = visitor.finish();
    log::debug!(
        "Found {} strongly connected components over {} vertices",
        components.count(),
        components.labels().len()
    );
    Ok(components)
}
