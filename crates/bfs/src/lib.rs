pub mod generator;
pub mod graph;

use std::collections::VecDeque;

use tracing::debug;

pub use graph::Graph;
pub use graph::LabeledGraph;

/// Distance reported for unreachable vertices.
pub const INF: u32 = u32::MAX;

/// Hop count and vertex path from a source to a target.
///
/// An unreachable target has distance [`INF`] and an empty path. Otherwise
/// the path starts at the source, ends at the target and holds
/// `distance + 1` vertices.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPath<V> {
    pub distance: u32,
    pub path: Vec<V>,
}

impl<V> ShortestPath<V> {
    fn unreachable() -> Self {
        Self {
            distance: INF,
            path: Vec::new(),
        }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance != INF
    }

    pub fn map<U, F: FnMut(V) -> U>(self, f: F) -> ShortestPath<U> {
        ShortestPath {
            distance: self.distance,
            path: self.path.into_iter().map(f).collect(),
        }
    }
}

impl<V: std::fmt::Display> ShortestPath<V> {
    /// `A -> C -> F`.
    pub fn render(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Hop distance from `source` to every vertex, [`INF`] where unreachable.
pub fn bfs_distances(graph: &Graph, source: usize) -> Vec<u32> {
    let n = graph.vertex_count();
    assert!(source < n, "source out of range");

    let mut dist = vec![INF; n];
    let mut queue = VecDeque::with_capacity(n);
    dist[source] = 0;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let next = dist[u] + 1;
        for &v in graph.out_neighbors(u) {
            let v = v as usize;
            if dist[v] == INF {
                dist[v] = next;
                queue.push_back(v);
            }
        }
    }
    dist
}

/// Breadth-first search from `source` that stops once `target` leaves the
/// queue, then walks the predecessor chain back to the source.
pub fn shortest_path(graph: &Graph, source: usize, target: usize) -> ShortestPath<usize> {
    let n = graph.vertex_count();
    assert!(source < n, "source out of range");
    assert!(target < n, "target out of range");

    let mut dist = vec![INF; n];
    let mut pred = vec![usize::MAX; n];
    let mut queue = VecDeque::new();
    dist[source] = 0;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        if u == target {
            break;
        }
        for &v in graph.out_neighbors(u) {
            let v = v as usize;
            if dist[v] == INF {
                dist[v] = dist[u] + 1;
                pred[v] = u;
                queue.push_back(v);
            }
        }
    }

    if dist[target] == INF {
        debug!(source, target, "target unreachable");
        return ShortestPath::unreachable();
    }

    let mut path = Vec::with_capacity(dist[target] as usize + 1);
    let mut cur = target;
    path.push(cur);
    while cur != source {
        cur = pred[cur];
        path.push(cur);
    }
    path.reverse();

    ShortestPath {
        distance: dist[target],
        path,
    }
}

impl LabeledGraph {
    /// Shortest path between two labels; `None` if either label is unknown.
    pub fn shortest_path(&self, source: &str, target: &str) -> Option<ShortestPath<&str>> {
        let Some(s) = self.vertex_id(source) else {
            debug!(source, "unknown source vertex");
            return None;
        };
        let Some(t) = self.vertex_id(target) else {
            debug!(target, "unknown target vertex");
            return None;
        };
        let found = shortest_path(&self.to_graph(), s as usize, t as usize);
        // Every id on the path came from this graph.
        Some(found.map(|v| self.label(v as u32).unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::generator::{ALL_CASES, generate_case};
    use crate::{Graph, INF, LabeledGraph, bfs_distances, shortest_path};

    fn sample_graph() -> LabeledGraph {
        LabeledGraph::from_adjacency([
            ("A", vec!["B", "C"]),
            ("B", vec!["A", "D", "E"]),
            ("C", vec!["A", "F"]),
            ("D", vec!["B"]),
            ("E", vec!["B", "F"]),
            ("F", vec!["C", "E"]),
        ])
    }

    fn random_graph(n: usize, m: usize, seed: u64) -> Graph {
        let mut rng = StdRng::seed_from_u64(seed);
        let edges: Vec<(u32, u32)> = (0..m)
            .map(|_| {
                (
                    rng.random_range(0..n) as u32,
                    rng.random_range(0..n) as u32,
                )
            })
            .collect();
        Graph::from_edges(n, &edges)
    }

    fn floyd_warshall(graph: &Graph) -> Vec<Vec<u32>> {
        let n = graph.vertex_count();
        let mut dist = vec![vec![INF; n]; n];
        for (u, row) in dist.iter_mut().enumerate() {
            row[u] = 0;
            for &v in graph.out_neighbors(u) {
                if v as usize != u {
                    row[v as usize] = 1;
                }
            }
        }
        for k in 0..n {
            for i in 0..n {
                if dist[i][k] == INF {
                    continue;
                }
                for j in 0..n {
                    if dist[k][j] == INF {
                        continue;
                    }
                    let through = dist[i][k] + dist[k][j];
                    if through < dist[i][j] {
                        dist[i][j] = through;
                    }
                }
            }
        }
        dist
    }

    fn assert_valid_path(
        graph: &Graph,
        source: usize,
        target: usize,
        path: &[usize],
        distance: u32,
    ) {
        assert_eq!(path.len(), distance as usize + 1);
        assert_eq!(path.first(), Some(&source));
        assert_eq!(path.last(), Some(&target));
        for pair in path.windows(2) {
            assert!(
                graph.out_neighbors(pair[0]).contains(&(pair[1] as u32)),
                "missing edge {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn sample_path_from_a_to_f() {
        let graph = sample_graph();
        let found = graph.shortest_path("A", "F").expect("known labels");
        assert_eq!(found.distance, 2);
        assert_eq!(found.path, ["A", "C", "F"]);
        assert_eq!(found.render(), "A -> C -> F");
    }

    #[test]
    fn source_equals_target() {
        let graph = sample_graph();
        let found = graph.shortest_path("D", "D").expect("known labels");
        assert_eq!(found.distance, 0);
        assert_eq!(found.path, ["D"]);
    }

    #[test]
    fn unreachable_target_has_infinite_distance() {
        let mut graph = sample_graph();
        graph.add_vertex("G");
        graph.add_edge("G", "A");
        let found = graph.shortest_path("A", "G").expect("known labels");
        assert!(!found.is_reachable());
        assert_eq!(found.distance, INF);
        assert!(found.path.is_empty());
        assert_eq!(found.render(), "");
    }

    #[test]
    fn unknown_labels_are_none() {
        let graph = sample_graph();
        assert_eq!(graph.shortest_path("A", "Z"), None);
        assert_eq!(graph.shortest_path("Z", "A"), None);
    }

    #[test]
    fn edges_to_missing_vertices_add_them() {
        let mut graph = LabeledGraph::new();
        graph.add_undirected_edge("A", "B");
        graph.add_edge("B", "C");
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.labels().collect::<Vec<_>>(), ["A", "B", "C"]);
        let neighbors: Vec<&str> = graph.neighbors("B").into_iter().flatten().collect();
        assert_eq!(neighbors, ["A", "C"]);
        assert_eq!(graph.to_string(), "A -> B \nB -> A C \nC -> \n");
    }

    #[test]
    fn distances_match_floyd_warshall_random() {
        for seed in 0..20_u64 {
            let n = 40;
            let g = random_graph(n, 90, 0xBF5_0000 + seed);
            let all_pairs = floyd_warshall(&g);
            for source in [0, (seed as usize) % n, n - 1] {
                assert_eq!(bfs_distances(&g, source), all_pairs[source], "seed={seed}");
            }
        }
    }

    #[test]
    fn early_exit_path_is_shortest_random() {
        for seed in 0..20_u64 {
            let n = 30;
            let g = random_graph(n, 60, 0xEA51_0000 + seed);
            let all_pairs = floyd_warshall(&g);
            let source = (seed as usize) % n;
            for target in 0..n {
                let found = shortest_path(&g, source, target);
                assert_eq!(found.distance, all_pairs[source][target], "seed={seed}");
                if found.is_reachable() {
                    assert_valid_path(&g, source, target, &found.path, found.distance);
                } else {
                    assert!(found.path.is_empty());
                }
            }
        }
    }

    #[test]
    fn generator_smoke_and_agreement() {
        for (i, case) in ALL_CASES.iter().enumerate() {
            let input = generate_case(*case, 1_024, 0x5EED_0000 + i as u64);
            assert!(input.graph.vertex_count() >= 2, "case={:?}", case);
            let dist = bfs_distances(&input.graph, input.source);
            let found = shortest_path(&input.graph, input.source, input.target);
            assert_eq!(found.distance, dist[input.target], "case={:?}", case);
            if found.is_reachable() {
                assert_valid_path(
                    &input.graph,
                    input.source,
                    input.target,
                    &found.path,
                    found.distance,
                );
            }
        }
    }

    #[test]
    fn csr_round_trips_edges_in_order() {
        let edges = [(0, 2), (1, 0), (0, 1), (2, 2)];
        let g = Graph::from_edges(3, &edges);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.out_degree(0), 2);
        assert_eq!(g.out_neighbors(0), &[2, 1]);
        assert_eq!(g.edges_vec(), vec![(0, 2), (0, 1), (1, 0), (2, 2)]);
    }
}
