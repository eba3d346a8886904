//! Property tests checking the algorithms against brute-force reachability.

use grlib::{algorithms::dfs_forest, prelude::*};
use proptest::prelude::*;

/// Random directed graph as `(vertex count, edge list)`.
fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..9).prop_flat_map(|n| (Just(n), proptest::collection::vec((0..n, 0..n), 0..24)))
}

/// Random DAG: every edge points from a lower to a higher id.
fn arb_dag() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    arb_graph().prop_map(|(n, edges)| {
        let edges = edges
            .into_iter()
            .filter(|(x, y)| x != y)
            .map(|(x, y)| (x.min(y), x.max(y)))
            .collect();
        (n, edges)
    })
}

fn build(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new(n, true);
    for &(x, y) in edges {
        graph.add_edge(VertexId::new(x), VertexId::new(y));
    }
    graph
}

/// `closure[i][j]` is `true` if a path of length at least one leads from `i` to `j`.
fn transitive_closure(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut closure = vec![vec![false; n]; n];
    for &(x, y) in edges {
        closure[x][y] = true;
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if closure[i][k] && closure[k][j] {
                    closure[i][j] = true;
                }
            }
        }
    }
    closure
}

fn has_directed_cycle(n: usize, edges: &[(usize, usize)]) -> bool {
    let closure = transitive_closure(n, edges);
    (0..n).any(|i| closure[i][i])
}

proptest! {
    #[test]
    fn test_scc_labels_match_mutual_reachability((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        let components = compute_sccs(&graph).unwrap();
        let closure = transitive_closure(n, &edges);

        // Labels are gap-free
        for label in 1..=components.count() {
            prop_assert!(!components.members(label).is_empty());
        }

        for i in 0..n {
            for j in 0..n {
                let mutual = i == j || (closure[i][j] && closure[j][i]);
                let same = components.same_component(VertexId::new(i), VertexId::new(j));
                prop_assert_eq!(mutual, same, "vertices {} and {}", i, j);
            }
        }
    }

    #[test]
    fn test_scc_labels_follow_reverse_topological_order((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        let components = compute_sccs(&graph).unwrap();

        for &(x, y) in &edges {
            let lx = components.label(VertexId::new(x)).unwrap();
            let ly = components.label(VertexId::new(y)).unwrap();
            prop_assert!(lx >= ly, "edge {} -> {} goes from {} up to {}", x, y, lx, ly);
        }
    }

    #[test]
    fn test_dfs_timestamps_nest((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        let state = dfs_forest(&graph, &mut Hooks::new()).unwrap();

        for v in state.discovered().collect::<Vec<_>>() {
            prop_assert!(state.entry_time(v) < state.exit_time(v));
            if let Some(p) = state.parent(v) {
                prop_assert!(state.entry_time(p) < state.entry_time(v));
                prop_assert!(state.exit_time(v) < state.exit_time(p));
            }
        }
    }

    #[test]
    fn test_topological_order_on_dags((n, edges) in arb_dag()) {
        let graph = build(n, &edges);
        let order = topological_order(&graph, VertexId::new(0)).unwrap();

        let mut position = vec![usize::MAX; n];
        for (i, v) in order.iter().enumerate() {
            prop_assert_eq!(position[v.index()], usize::MAX, "vertex {} listed twice", v);
            position[v.index()] = i;
        }
        // Vertices with no edges are only listed when they are the start
        let mut touched = vec![false; n];
        touched[0] = true;
        for &(x, y) in &edges {
            touched[x] = true;
            touched[y] = true;
        }
        prop_assert_eq!(order.len(), touched.iter().filter(|&&t| t).count());

        for &(x, y) in &edges {
            prop_assert!(position[x] < position[y], "edge {} -> {} out of order", x, y);
        }
    }

    #[test]
    fn test_cycle_reports_match_brute_force((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        let cyclic = has_directed_cycle(n, &edges);

        let found = detect_cycles(&graph, VertexId::new(0), |_, _, _| Ok(())).unwrap();
        prop_assert_eq!(found > 0, cyclic);
        prop_assert_eq!(has_cycle(&graph).unwrap(), cyclic);

        let sorted = topological_sort(&graph, VertexId::new(0));
        prop_assert_eq!(matches!(sorted, Err(Error::CycleDetected { .. })), cyclic);
    }

    #[test]
    fn test_forest_drivers_process_each_vertex_once((n, edges) in arb_graph()) {
        let graph = build(n, &edges);

        for use_dfs in [true, false] {
            let mut finished = vec![0usize; n];
            let mut hooks = Hooks::new().on_vertex_late(|v, _| {
                finished[v.index()] += 1;
                Ok(())
            });
            let state = if use_dfs {
                dfs_forest(&graph, &mut hooks).unwrap()
            } else {
                grlib::algorithms::bfs_forest(&graph, &mut hooks).unwrap()
            };
            drop(hooks);

            for v in graph.vertex_ids() {
                if !graph.is_isolated(v) {
                    prop_assert_eq!(finished[v.index()], 1);
                    prop_assert!(state.is_processed(v));
                } else {
                    prop_assert!(finished[v.index()] <= 1);
                }
            }
        }
    }
}
