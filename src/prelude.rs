//! # grlib Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! of the grlib library. Import it to get quick access to graph construction, the traversal
//! engines and the algorithms.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all grlib operations
pub use crate::Error;

/// The result type used throughout grlib, including traversal hooks
pub use crate::Result;

// ================================================================================================
// Graph Construction
// ================================================================================================

/// Graph storage and construction options
pub use crate::graph::{Edge, Graph, GraphOptions};

/// Vertex identifiers and the name table
pub use crate::graph::{VertexId, VertexMap};

/// Named graph descriptions
pub use crate::graph::{EdgeList, GraphSource};

// ================================================================================================
// Traversal
// ================================================================================================

/// Traversal engines
pub use crate::algorithms::{bfs_forest, dfs_forest, run_bfs, run_dfs};

/// Hook interfaces and traversal bookkeeping
pub use crate::algorithms::{Hooks, TraversalState, Visitor};

/// Edge classification
pub use crate::algorithms::{classify_edge, EdgeKind};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Cycle detection
pub use crate::algorithms::{detect_cycles, has_cycle};

/// Topological ordering
pub use crate::algorithms::{topological_order, topological_sort};

/// Strongly connected components
pub use crate::algorithms::{compute_sccs, Components};
