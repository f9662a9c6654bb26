use crate::gens::{Generator, GeneratorError, NumNodesGen};
use crate::graph::Graph;
use crate::node::NumNodes;
use crate::ops::GraphBackend;
use crate::rng::RandomSource;
use crate::utils::Probability;

/// Directed `G(n,p)`: every ordered pair `(i, j)` with `i != j` receives an
/// edge independently with probability `p` (one `randf` draw per pair).
///
/// `p = 0` yields the empty edge set for any `n`; `p = 1` yields all
/// `n * (n - 1)` directed edges.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
}

impl Gnp {
    /// Creates a new `G(n,p)` generator with `p = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge-inclusion probability.
    pub fn prob(mut self, p: f64) -> Self {
        self.p = p;
        self
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl Generator for Gnp {
    fn generate<B, R>(&self, rng: &mut R) -> Result<Graph<B>, GeneratorError>
    where
        B: GraphBackend,
        R: RandomSource,
    {
        if !self.p.is_valid_probability() {
            return Err(GeneratorError::InvalidProbability { p: self.p });
        }

        let mut g = Graph::new();
        g.add_vertices(self.n);

        for i in 0..self.n {
            for j in 0..self.n {
                if i != j && rng.randf() < self.p {
                    g.add_edge(i, j);
                }
            }
        }

        Ok(g)
    }
}

/// Undirected `G(n)`: every unordered pair `{i, j}` is decided by one
/// [`randb`](crate::rng::RandomSource::randb) coin flip; a present pair is
/// stored once, larger endpoint first, so membership is answered via
/// [`has_edge_undirected`](crate::graph::Graph::has_edge_undirected).
///
/// The inclusion probability is the coin bias the random source was
/// configured with (`with_bias`), not a generator parameter.
#[derive(Debug, Copy, Clone, Default)]
pub struct GnpUndirected {
    n: NumNodes,
}

impl GnpUndirected {
    /// Creates a new undirected uniform-random generator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for GnpUndirected {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl Generator for GnpUndirected {
    fn generate<B, R>(&self, rng: &mut R) -> Result<Graph<B>, GeneratorError>
    where
        B: GraphBackend,
        R: RandomSource,
    {
        let mut g = Graph::new();
        g.add_vertices(self.n);

        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if rng.randb() {
                    g.add_edge(j, i);
                }
            }
        }

        Ok(g)
    }
}
