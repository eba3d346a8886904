//! Traversal extension points.
//!
//! Every algorithm in this crate is a configuration of the three hooks of [`Visitor`] plus a
//! little state of its own; the DFS and BFS engines know nothing about cycles, orders or
//! components.
//!
//! Hooks return [`Result`]. An `Err` stops the traversal immediately and is handed to the
//! caller of the entry point unchanged, so expected outcomes such as "cycle found" travel as
//! typed values instead of unwinding through caller code.

use crate::{
    graph::{algorithms::TraversalState, VertexId},
    Result,
};

/// Callbacks invoked by the traversal engine.
///
/// All methods default to doing nothing.
///
/// # Examples
///
/// ```rust
/// use grlib::{
///     algorithms::{run_dfs, TraversalState, Visitor},
///     Graph, Result, VertexId,
/// };
///
/// #[derive(Default)]
/// struct Preorder(Vec<VertexId>);
///
/// impl Visitor for Preorder {
///     fn on_vertex_early(&mut self, v: VertexId, _: &mut TraversalState) -> Result<()> {
///         self.0.push(v);
///         Ok(())
///     }
/// }
///
/// let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
/// let mut graph: Graph = Graph::new(3, true);
/// graph.add_edge(a, b);
/// graph.add_edge(b, c);
///
/// let mut preorder = Preorder::default();
/// run_dfs(&graph, a, &mut preorder)?;
/// assert_eq!(preorder.0, vec![a, b, c]);
/// # Ok::<(), grlib::Error>(())
/// ```
pub trait Visitor {
    /// Called when `v` is entered, after its entry time is stamped.
    ///
    /// # Errors
    ///
    /// Any error aborts the traversal and is returned to the caller.
    fn on_vertex_early(&mut self, v: VertexId, state: &mut TraversalState) -> Result<()> {
        let _ = (v, state);
        Ok(())
    }

    /// Called for the edge `x -> y`.
    ///
    /// # Errors
    ///
    /// Any error aborts the traversal and is returned to the caller.
    fn on_edge(&mut self, x: VertexId, y: VertexId, state: &mut TraversalState) -> Result<()> {
        let _ = (x, y, state);
        Ok(())
    }

    /// Called when `v` is left, after it is marked processed and its exit time is stamped.
    ///
    /// # Errors
    ///
    /// Any error aborts the traversal and is returned to the caller.
    fn on_vertex_late(&mut self, v: VertexId, state: &mut TraversalState) -> Result<()> {
        let _ = (v, state);
        Ok(())
    }
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn on_vertex_early(&mut self, v: VertexId, state: &mut TraversalState) -> Result<()> {
        (**self).on_vertex_early(v, state)
    }

    fn on_edge(&mut self, x: VertexId, y: VertexId, state: &mut TraversalState) -> Result<()> {
        (**self).on_edge(x, y, state)
    }

    fn on_vertex_late(&mut self, v: VertexId, state: &mut TraversalState) -> Result<()> {
        (**self).on_vertex_late(v, state)
    }
}

type VertexHook<'a> = Box<dyn FnMut(VertexId, &mut TraversalState) -> Result<()> + 'a>;
type EdgeHook<'a> = Box<dyn FnMut(VertexId, VertexId, &mut TraversalState) -> Result<()> + 'a>;

/// A [`Visitor`] assembled from closures.
///
/// Unset hooks do nothing. Closures may borrow caller state for the lifetime `'a`.
///
/// # Examples
///
/// ```rust
/// use grlib::{algorithms::{run_bfs, Hooks}, Graph, VertexId};
///
/// let (a, b) = (VertexId::new(0), VertexId::new(1));
/// let mut graph: Graph = Graph::new(2, true);
/// graph.add_edge(a, b);
///
/// let mut edges = Vec::new();
/// let mut hooks = Hooks::new().on_edge(|x, y, _| {
///     edges.push((x, y));
///     Ok(())
/// });
/// run_bfs(&graph, a, &mut hooks)?;
/// drop(hooks);
///
/// assert_eq!(edges, vec![(a, b)]);
/// # Ok::<(), grlib::Error>(())
/// ```
#[derive(Default)]
pub struct Hooks<'a> {
    early: Option<VertexHook<'a>>,
    edge: Option<EdgeHook<'a>>,
    late: Option<VertexHook<'a>>,
}

impl<'a> Hooks<'a> {
    /// Creates a bundle with no hooks set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hook invoked when a vertex is entered.
    #[must_use]
    pub fn on_vertex_early<F>(mut self, hook: F) -> Self
    where
        F: FnMut(VertexId, &mut TraversalState) -> Result<()> + 'a,
    {
        self.early = Some(Box::new(hook));
        self
    }

    /// Sets the hook invoked for every reported edge.
    #[must_use]
    pub fn on_edge<F>(mut self, hook: F) -> Self
    where
        F: FnMut(VertexId, VertexId, &mut TraversalState) -> Result<()> + 'a,
    {
        self.edge = Some(Box::new(hook));
        self
    }

    /// Sets the hook invoked when a vertex is left.
    #[must_use]
    pub fn on_vertex_late<F>(mut self, hook: F) -> Self
    where
        F: FnMut(VertexId, &mut TraversalState) -> Result<()> + 'a,
    {
        self.late = Some(Box::new(hook));
        self
    }
}

impl Visitor for Hooks<'_> {
    fn on_vertex_early(&mut self, v: VertexId, state: &mut TraversalState) -> Result<()> {
        match self.early.as_mut() {
            Some(hook) => hook(v, state),
            None => Ok(()),
        }
    }

    fn on_edge(&mut self, x: VertexId, y: VertexId, state: &mut TraversalState) -> Result<()> {
        match self.edge.as_mut() {
            Some(hook) => hook(x, y, state),
            None => Ok(()),
        }
    }

    fn on_vertex_late(&mut self, v: VertexId, state: &mut TraversalState) -> Result<()> {
        match self.late.as_mut() {
            Some(hook) => hook(v, state),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_empty_hooks_do_nothing() {
        let mut hooks = Hooks::new();
        let mut state = TraversalState::new(1);
        let v = VertexId::new(0);

        assert!(Visitor::on_vertex_early(&mut hooks, v, &mut state).is_ok());
        assert!(Visitor::on_edge(&mut hooks, v, v, &mut state).is_ok());
        assert!(Visitor::on_vertex_late(&mut hooks, v, &mut state).is_ok());
    }

    #[test]
    fn test_hooks_forward_calls() {
        let mut calls = Vec::new();
        {
            let mut hooks = Hooks::new().on_vertex_late(|v, _| {
                calls.push(v.index());
                Ok(())
            });
            let mut state = TraversalState::new(3);
            Visitor::on_vertex_late(&mut hooks, VertexId::new(2), &mut state).unwrap();
            Visitor::on_vertex_late(&mut hooks, VertexId::new(1), &mut state).unwrap();
        }
        assert_eq!(calls, vec![2, 1]);
    }

    #[test]
    fn test_hook_error_is_returned() {
        let mut hooks =
            Hooks::new().on_edge(|_, _, _| Err(Error::Traversal("stop".to_string())));
        let mut state = TraversalState::new(1);
        let v = VertexId::new(0);

        assert_eq!(
            Visitor::on_edge(&mut hooks, v, v, &mut state),
            Err(Error::Traversal("stop".to_string()))
        );
    }

    #[test]
    fn test_hook_can_terminate() {
        let mut hooks = Hooks::new().on_vertex_early(|_, state| {
            state.terminate();
            Ok(())
        });
        let mut state = TraversalState::new(1);
        Visitor::on_vertex_early(&mut hooks, VertexId::new(0), &mut state).unwrap();
        assert!(state.is_terminated());
    }
}
