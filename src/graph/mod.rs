//! Graph representation and traversal-based algorithms.
//!
//! # Architecture
//!
//! - [`VertexId`] - Dense integer handle for vertices
//! - [`VertexMap`] - Bidirectional table between external names and ids
//! - [`Graph`] - Adjacency lists of [`Edge`]s indexed by vertex id
//! - [`GraphSource`] / [`EdgeList`] - Named edge descriptions a graph is built from
//! - [`algorithms`] - Instrumented DFS/BFS and the algorithms configured on top of them
//!
//! Graphs are built once and are read-only afterwards. Every algorithm invocation owns a
//! fresh [`algorithms::TraversalState`], so results never depend on earlier runs.

mod adjacency;
mod loader;
mod names;
mod vertex;

pub mod algorithms;

pub use adjacency::{Edge, Graph, GraphOptions, DEFAULT_CAPACITY};
pub use loader::{EdgeList, GraphSource};
pub use names::VertexMap;
pub use vertex::VertexId;
