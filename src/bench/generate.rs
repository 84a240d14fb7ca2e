//! Graph families for benchmarking the analyzer at varying sizes.

use rand::Rng;

use crate::graph::Graph;

/// Benchmark graph families.
///
/// The structured families pin down best and worst cases (a path is all
/// bridges, a cycle has none); the random families carry multi-edge
/// tolerance and mixed structure at two densities.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Category { Path, Cycle, Star, Grid, Sparse, Dense }

impl Category {
    pub(crate) const ALL: [Category; 6] = [
        Category::Path,
        Category::Cycle,
        Category::Star,
        Category::Grid,
        Category::Sparse,
        Category::Dense,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            Category::Path => "path",
            Category::Cycle => "cycle",
            Category::Star => "star",
            Category::Grid => "grid",
            Category::Sparse => "sparse",
            Category::Dense => "dense",
        }
    }

    /// Generate an instance with `n` nodes (the grid rounds down to a
    /// full square).
    pub(crate) fn generate(self, n: usize, rng: &mut impl Rng) -> Graph {
        match self {
            Category::Path => path(n),
            Category::Cycle => cycle(n),
            Category::Star => star(n),
            Category::Grid => grid(n),
            Category::Sparse => random(n, 2 * n, rng),
            Category::Dense => random(n, 4 * n, rng),
        }
    }
}

fn path(n: usize) -> Graph {
    let mut graph = Graph::new(n);
    for u in 1..n { graph.add_edge(u - 1, u) }
    graph
}

fn cycle(n: usize) -> Graph {
    let mut graph = path(n);
    if n > 2 { graph.add_edge(n - 1, 0) }
    graph
}

fn star(n: usize) -> Graph {
    let mut graph = Graph::new(n);
    for leaf in 1..n { graph.add_edge(0, leaf) }
    graph
}

fn grid(n: usize) -> Graph {
    let side = n.isqrt().max(1);
    let mut graph = Graph::new(side * side);
    for row in 0..side {
        for col in 0..side {
            let node = row * side + col;
            if col + 1 < side { graph.add_edge(node, node + 1) }
            if row + 1 < side { graph.add_edge(node, node + side) }
        }
    }
    graph
}

/// Uniform random multigraph: `m` draws of endpoint pairs, self-loops
/// skipped, parallel edges kept. May be disconnected.
fn random(n: usize, m: usize, rng: &mut impl Rng) -> Graph {
    let mut graph = Graph::new(n);
    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v { graph.add_edge(u, v) }
    }
    graph
}
