// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # grlib
//!
//! Instrumented graph traversal and the classical algorithms built on it.
//!
//! `grlib` provides depth-first and breadth-first traversals that maintain precise per-vertex
//! bookkeeping (discovery and processing flags, entry and exit timestamps, parent links) and
//! expose three hooks while they run. Cycle detection, topological ordering and strongly
//! connected components are all written as configurations of those hooks.
//!
//! ## Features
//!
//! - **Deterministic traversal** - Edges are visited in insertion order, so every run is reproducible
//! - **Explicit-stack DFS** - Graph depth never translates into call-stack depth
//! - **Typed outcomes** - Hooks return [`Result`]; a cycle or a failed lookup is a value, not an unwind
//! - **Named vertices** - External names are resolved into dense ids once, at construction time
//! - **Early termination** - Any hook can stop the traversal through the shared state
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use grlib::prelude::*;
//!
//! let source = EdgeList::new(true)
//!     .with_edge("A", "B")
//!     .with_edge("A", "C")
//!     .with_edge("B", "D")
//!     .with_edge("C", "D");
//! let graph: Graph = Graph::from_source(&source);
//!
//! let order = topological_order(&graph, graph.id_of("A")?)?;
//! assert_eq!(graph.name_of(order[0])?, "A");
//! assert_eq!(graph.name_of(order[3])?, "D");
//! # Ok::<(), grlib::Error>(())
//! ```
//!
//! ### Custom Hooks
//!
//! ```rust
//! use grlib::{algorithms::{classify_edge, run_dfs, EdgeKind, Hooks}, Graph, VertexId};
//!
//! let v = VertexId::new;
//! let mut graph: Graph = Graph::new(3, true);
//! graph.add_edge(v(0), v(1));
//! graph.add_edge(v(1), v(2));
//! graph.add_edge(v(2), v(0));
//!
//! let mut back_edges = Vec::new();
//! let mut hooks = Hooks::new().on_edge(|x, y, state| {
//!     if classify_edge(x, y, state)? == EdgeKind::Back {
//!         back_edges.push((x, y));
//!     }
//!     Ok(())
//! });
//! let state = run_dfs(&graph, v(0), &mut hooks)?;
//! drop(hooks);
//!
//! assert_eq!(back_edges, vec![(v(2), v(0))]);
//! assert_eq!(state.parent(v(2)), Some(v(1)));
//! # Ok::<(), grlib::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Vertex ids, the name table, the adjacency-list graph and graph sources
//! - [`algorithms`] - Traversal engines, edge classification, cycles, ordering, components
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: one `debug` line per algorithm run and `trace`
//! lines for traversal roots, back edges and early termination. Install any logger
//! implementation to see them.

pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use grlib::prelude::*;
///
/// let mut graph: Graph = Graph::new(2, true);
/// graph.add_edge(VertexId::new(0), VertexId::new(1));
/// assert_eq!(compute_sccs(&graph)?.count(), 2);
/// # Ok::<(), grlib::Error>(())
/// ```
pub mod prelude;

/// Graph storage, vertex naming and the traversal algorithms.
///
/// # Key Types
///
/// - [`graph::Graph`] - Adjacency-list graph with per-edge payloads
/// - [`graph::VertexMap`] - Name ↔ id table
/// - [`graph::EdgeList`] - In-memory named edge description
pub mod graph;

pub use graph::algorithms;

/// `grlib` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`]. Traversal hooks return it as well.
pub type Result<T> = std::result::Result<T, Error>;

/// `grlib` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

pub use graph::{Edge, EdgeList, Graph, GraphOptions, GraphSource, VertexId, VertexMap};
