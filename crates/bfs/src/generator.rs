use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::graph::Graph;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    AlmostLine,
    Grid,
    TwoComponents,
}

pub const ALL_CASES: [GraphCase; 5] = [
    GraphCase::SparseRandom,
    GraphCase::DenseRandom,
    GraphCase::AlmostLine,
    GraphCase::Grid,
    GraphCase::TwoComponents,
];

impl GraphCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::AlmostLine => "almost_line",
            Self::Grid => "grid",
            Self::TwoComponents => "two_components",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: Graph,
    pub source: usize,
    pub target: usize,
}

pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    match case {
        GraphCase::SparseRandom => sparse_random_case(size.max(32), seed, 3),
        GraphCase::DenseRandom => sparse_random_case(floor_sqrt(size).max(16), seed ^ 0xD5D5, 16),
        GraphCase::AlmostLine => almost_line_case(size.max(16), seed),
        GraphCase::Grid => grid_case(size.max(16), seed),
        GraphCase::TwoComponents => two_components_case(size.max(16), seed),
    }
}

fn sparse_random_case(size: usize, seed: u64, edge_factor: usize) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(2);
    let m_target = n.saturating_mul(edge_factor).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v {
            continue;
        }
        push_unique_edge(&mut edges, &mut used, u, v);
    }

    let (source, target) = endpoints(&mut rng, n);
    GeneratedGraph {
        graph: Graph::from_edges(n, &edges),
        source,
        target,
    }
}

/// A long path with short forward skips and random back edges; BFS depth is
/// close to `n / 3`.
fn almost_line_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size;
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for i in 0..(n - 1) {
        push_unique_edge(&mut edges, &mut used, i, i + 1);
    }

    let m_target = n.saturating_mul(2).min(complete_edges(n));
    while edges.len() < m_target {
        let a = rng.random_range(0..(n - 2));
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        let (u, v) = if rng.random_bool(0.5) { (b, a) } else { (a, b) };
        push_unique_edge(&mut edges, &mut used, u, v);
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    for edge in &mut edges {
        edge.0 = perm[edge.0 as usize] as u32;
        edge.1 = perm[edge.1 as usize] as u32;
    }
    edges.shuffle(&mut rng);

    GeneratedGraph {
        graph: Graph::from_edges(n, &edges),
        source: perm[0],
        target: perm[n - 1],
    }
}

fn grid_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = floor_sqrt(size).max(4);
    let n = len * len;
    let mut edges = Vec::with_capacity(n * 4);

    let index = |i: usize, j: usize| -> u32 { (i * len + j) as u32 };
    for i in 0..len {
        for j in 0..len {
            if j + 1 < len {
                edges.push((index(i, j), index(i, j + 1)));
            }
            if i + 1 < len {
                edges.push((index(i, j), index(i + 1, j)));
            }
            if j > 0 {
                edges.push((index(i, j), index(i, j - 1)));
            }
            if i > 0 {
                edges.push((index(i, j), index(i - 1, j)));
            }
        }
    }

    edges.shuffle(&mut rng);
    GeneratedGraph {
        graph: Graph::from_edges(n, &edges),
        source: 0,
        target: n - 1,
    }
}

/// Two random halves with no edge between them; the target is unreachable.
fn two_components_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = size / 2;
    let n = half * 2;
    let m_target = half.saturating_mul(3).min(complete_edges(half));
    let mut edges = Vec::with_capacity(m_target * 2);
    let mut used = HashSet::with_capacity(m_target * 4 + 1);

    for offset in [0, half] {
        let start = edges.len();
        while edges.len() - start < m_target {
            let u = rng.random_range(0..half);
            let v = rng.random_range(0..half);
            if u == v {
                continue;
            }
            push_unique_edge(&mut edges, &mut used, offset + u, offset + v);
        }
    }

    edges.shuffle(&mut rng);
    GeneratedGraph {
        graph: Graph::from_edges(n, &edges),
        source: rng.random_range(0..half),
        target: half + rng.random_range(0..half),
    }
}

fn endpoints(rng: &mut StdRng, n: usize) -> (usize, usize) {
    let source = rng.random_range(0..n);
    let mut target = rng.random_range(0..n);
    if source == target {
        target = (target + 1) % n;
    }
    (source, target)
}

fn push_unique_edge(
    edges: &mut Vec<(u32, u32)>,
    used: &mut HashSet<u64>,
    u: usize,
    v: usize,
) {
    let key = ((u as u64) << 32) | v as u64;
    if used.insert(key) {
        edges.push((u as u32, v as u32));
    }
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}

fn floor_sqrt(n: usize) -> usize {
    let mut x = (n as f64).sqrt() as usize;
    while x * x > n {
        x -= 1;
    }
    while (x + 1) * (x + 1) <= n {
        x += 1;
    }
    x
}
