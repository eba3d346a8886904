//! Graph fixtures and a recording visitor shared by the unit tests.

use crate::{
    graph::{
        algorithms::{TraversalState, Visitor},
        Graph, VertexId,
    },
    Result,
};

pub fn v(i: usize) -> VertexId {
    VertexId::new(i)
}

/// Directed `0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3`, inserted in that order.
pub fn diamond() -> Graph {
    let mut graph = Graph::new(4, true);
    graph.add_edge(v(0), v(1));
    graph.add_edge(v(0), v(2));
    graph.add_edge(v(1), v(3));
    graph.add_edge(v(2), v(3));
    graph
}

/// Directed 3-cycles `0 -> 1 -> 2 -> 0` and `3 -> 4 -> 5 -> 3`.
pub fn disjoint_triangles() -> Graph {
    let mut graph = Graph::new(6, true);
    for base in [0, 3] {
        graph.add_edge(v(base), v(base + 1));
        graph.add_edge(v(base + 1), v(base + 2));
        graph.add_edge(v(base + 2), v(base));
    }
    graph
}

/// Undirected graph over `n` slots, both directions inserted per pair.
pub fn undirected(n: usize, pairs: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new(n, false);
    for &(x, y) in pairs {
        graph.add_edge(v(x), v(y));
        graph.add_edge(v(y), v(x));
    }
    graph
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Early(usize),
    Edge(usize, usize),
    Late(usize),
}

/// Records every hook invocation in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Visitor for Recorder {
    fn on_vertex_early(&mut self, v: VertexId, _: &mut TraversalState) -> Result<()> {
        self.events.push(Event::Early(v.index()));
        Ok(())
    }

    fn on_edge(&mut self, x: VertexId, y: VertexId, _: &mut TraversalState) -> Result<()> {
        self.events.push(Event::Edge(x.index(), y.index()));
        Ok(())
    }

    fn on_vertex_late(&mut self, v: VertexId, _: &mut TraversalState) -> Result<()> {
        self.events.push(Event::Late(v.index()));
        Ok(())
    }
}
