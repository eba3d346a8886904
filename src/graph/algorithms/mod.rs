//! Instrumented traversals and the algorithms built on them.
//!
//! The traversal engines maintain per-vertex state and call three hooks while they run.
//! Every algorithm here is a configuration of those hooks plus a small amount of state of its
//! own.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`run_dfs`] - Depth-first traversal from one root
//! - [`run_bfs`] - Breadth-first traversal from one root
//! - [`dfs_forest`] / [`bfs_forest`] - Traversals covering every non-isolated vertex
//!
//! ## Edge Classification
//!
//! - [`classify_edge`] - Tree, back, forward or cross, from inside a DFS edge hook
//! - [`edge_census`] - Per-kind edge counts of a whole DFS forest
//!
//! ## Cycle Detection
//!
//! - [`detect_cycles`] - Report every back edge of a DFS forest
//! - [`has_cycle`] - Check whether any cycle exists
//!
//! ## Topological Ordering
//!
//! - [`topological_sort`] - DFS finish order, or the back edge that prevents one
//! - [`topological_order`] - The finish order reversed
//!
//! ## Strongly Connected Components
//!
//! - [`compute_sccs`] - Tarjan-style low-link labelling
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal, custom hooks |
//! | Cycle Detection | O(V + E) | Deadlock and recursion checks |
//! | Topological Sort | O(V + E) | Dependency ordering |
//! | SCC | O(V + E) | Mutual reachability, condensation |
//!
//! # Examples
//!
//! ```rust
//! use grlib::{algorithms, Graph, VertexId};
//!
//! let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
//! let mut graph: Graph = Graph::new(3, true);
//! graph.add_edge(a, b);
//! graph.add_edge(b, c);
//!
//! assert_eq!(algorithms::topological_order(&graph, a)?, vec![a, b, c]);
//! assert!(!algorithms::has_cycle(&graph)?);
//!
//! graph.add_edge(c, a);
//! assert!(algorithms::has_cycle(&graph)?);
//! assert_eq!(algorithms::compute_sccs(&graph)?.count(), 1);
//! # Ok::<(), grlib::Error>(())
//! ```

mod classify;
mod cycles;
mod scc;
mod state;
mod topological;
mod traversal;
mod visitor;

pub use classify::{classify_edge, edge_census, EdgeCensus, EdgeKind};
pub use cycles::{detect_cycles, has_cycle};
pub use scc::{compute_sccs, Components};
pub use state::{TraversalState, VertexState};
pub use topological::{topological_order, topological_sort};
pub use traversal::{bfs_forest, dfs_forest, run_bfs, run_dfs};
pub use visitor::{Hooks, Visitor};
