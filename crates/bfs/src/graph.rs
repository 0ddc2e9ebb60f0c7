use std::collections::HashMap;
use std::fmt;

/// Unweighted directed graph in compressed sparse row form.
///
/// Neighbors of a vertex keep the order their edges were given in, which
/// fixes the order breadth-first search discovers them.
#[derive(Clone, Debug)]
pub struct Graph {
    vertex_count: usize,
    offsets: Vec<usize>,
    to: Vec<u32>,
}

impl Graph {
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32)]) -> Self {
        let mut out_deg = vec![0_usize; vertex_count];
        for &(from, to) in edges {
            assert!((from as usize) < vertex_count, "from vertex out of range");
            assert!((to as usize) < vertex_count, "to vertex out of range");
            out_deg[from as usize] += 1;
        }

        let mut offsets = vec![0_usize; vertex_count + 1];
        for v in 0..vertex_count {
            offsets[v + 1] = offsets[v] + out_deg[v];
        }

        let mut to = vec![0_u32; edges.len()];
        let mut cursor = offsets[..vertex_count].to_vec();
        for &(from, dst) in edges {
            let idx = cursor[from as usize];
            cursor[from as usize] += 1;
            to[idx] = dst;
        }

        Self {
            vertex_count,
            offsets,
            to,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.to.len()
    }

    #[inline]
    pub fn out_degree(&self, v: usize) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }

    #[inline]
    pub fn out_neighbors(&self, v: usize) -> &[u32] {
        &self.to[self.offsets[v]..self.offsets[v + 1]]
    }

    pub fn edges_vec(&self) -> Vec<(u32, u32)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for u in 0..self.vertex_count {
            for &v in self.out_neighbors(u) {
                edges.push((u as u32, v));
            }
        }
        edges
    }
}

/// Adjacency list keyed by vertex label.
///
/// Vertices are numbered in insertion order. Adding an edge to a label that
/// is not yet known adds that vertex first.
#[derive(Clone, Debug, Default)]
pub struct LabeledGraph {
    labels: Vec<String>,
    ids: HashMap<String, u32>,
    adjacency: Vec<Vec<u32>>,
}

impl LabeledGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(vertex, neighbors)` rows. Every row adds
    /// directed edges only, so an undirected graph lists each edge twice.
    pub fn from_adjacency<'a, I, N>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, N)>,
        N: IntoIterator<Item = &'a str>,
    {
        let mut graph = Self::new();
        for (vertex, neighbors) in rows {
            graph.add_vertex(vertex);
            for neighbor in neighbors {
                graph.add_edge(vertex, neighbor);
            }
        }
        graph
    }

    /// Returns the id of `label`, adding the vertex if it is new.
    pub fn add_vertex(&mut self, label: &str) -> u32 {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.labels.len() as u32;
        self.labels.push(label.to_owned());
        self.ids.insert(label.to_owned(), id);
        self.adjacency.push(Vec::new());
        id
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.adjacency[from as usize].push(to);
    }

    pub fn add_undirected_edge(&mut self, a: &str, b: &str) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn vertex_id(&self, label: &str) -> Option<u32> {
        self.ids.get(label).copied()
    }

    #[inline]
    pub fn label(&self, id: u32) -> Option<&str> {
        self.labels.get(id as usize).map(String::as_str)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Neighbor labels of `label`, or `None` for an unknown vertex.
    pub fn neighbors(&self, label: &str) -> Option<impl Iterator<Item = &str>> {
        let id = self.vertex_id(label)?;
        Some(
            self.adjacency[id as usize]
                .iter()
                .map(|&v| self.labels[v as usize].as_str()),
        )
    }

    pub fn to_graph(&self) -> Graph {
        let edges: Vec<(u32, u32)> = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, neighbors)| neighbors.iter().map(move |&v| (u as u32, v)))
            .collect();
        Graph::from_edges(self.vertex_count(), &edges)
    }
}

/// One line per vertex: `A -> B C `.
impl fmt::Display for LabeledGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, neighbors) in self.labels.iter().zip(&self.adjacency) {
            write!(f, "{label} -> ")?;
            for &v in neighbors {
                write!(f, "{} ", self.labels[v as usize])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
