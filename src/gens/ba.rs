use crate::edge::NumEdges;
use crate::gens::{Generator, GeneratorError, NumNodesGen};
use crate::graph::Graph;
use crate::node::{Node, NumNodes};
use crate::ops::GraphBackend;
use crate::rng::RandomSource;

/// Preferential attachment (Barabási–Albert).
///
/// The first `m0` vertices form a fully connected directed core. Sampling is
/// driven by a degree list: a multiset of vertex ids with one entry per
/// accumulated degree unit, seeded with `m0` copies of each core vertex.
/// Every new vertex draws uniform positions in that list (so the draw is
/// proportional to degree) until `m` distinct targets other than itself are
/// found, connects to all of them and appends both endpoints of each new
/// edge back onto the list.
///
/// The degree list is scratch state of one generator run and is dropped once
/// the graph is built.
///
/// Requires `m <= m0 < n`.
#[derive(Debug, Copy, Clone, Default)]
pub struct BarabasiAlbert {
    n: NumNodes,
    m0: NumNodes,
    m: NumNodes,
}

impl BarabasiAlbert {
    /// Creates a new preferential-attachment generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size of the fully connected initial core.
    pub fn core(mut self, m0: NumNodes) -> Self {
        self.m0 = m0;
        self
    }

    /// Sets the number of edges each new vertex attaches with.
    pub fn attach(mut self, m: NumNodes) -> Self {
        self.m = m;
        self
    }
}

impl NumNodesGen for BarabasiAlbert {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl Generator for BarabasiAlbert {
    fn generate<B, R>(&self, rng: &mut R) -> Result<Graph<B>, GeneratorError>
    where
        B: GraphBackend,
        R: RandomSource,
    {
        let (n, m0, m) = (self.n, self.m0, self.m);
        if m > m0 || m0 >= n {
            return Err(GeneratorError::InvalidCore { m, m0, n });
        }

        let mut g = Graph::new();
        g.add_vertices(m0);

        for i in 0..m0 {
            for j in 0..m0 {
                if i != j {
                    g.add_edge(i, j);
                }
            }
        }

        let mut degree_list: Vec<Node> = Vec::with_capacity((m0 as usize).pow(2));
        for i in 0..m0 {
            for _ in 0..m0 {
                degree_list.push(i);
            }
        }

        g.add_vertices(n - m0);

        let mut targets: Vec<Node> = Vec::with_capacity(m as usize);
        for i in m0..n {
            targets.clear();
            while (targets.len() as NumNodes) < m {
                let pos = rng.randi() % degree_list.len() as u64;
                let chosen = degree_list[pos as usize];
                if chosen != i && !targets.contains(&chosen) {
                    targets.push(chosen);
                }
            }

            for &t in &targets {
                g.add_edge(i, t);
                degree_list.push(t);
                degree_list.push(i);
            }
        }

        Ok(g)
    }
}

/// Relaxed preferential attachment: a directed `O(E)` construction that
/// keeps the power-scaling flavor of [`BarabasiAlbert`] without per-step
/// target deduplication.
///
/// A pool of preferential nodes starts as `0..n`. For edge index `k` the
/// tail is `u = k % n` and the head `v` is drawn uniformly from the pool; on
/// `u != v` the edge `(v, u)` is inserted and `v` re-enters the pool, so
/// frequently chosen heads become ever more likely.
///
/// Duplicate picks of the same pair are not filtered; backends collapse
/// them, so the realized edge count may fall short of `e`.
// TODO: filter duplicate picks so the realized edge count hits e exactly
#[derive(Debug, Copy, Clone, Default)]
pub struct RelaxedBarabasiAlbert {
    n: NumNodes,
    e: NumEdges,
}

impl RelaxedBarabasiAlbert {
    /// Creates a new relaxed preferential-attachment generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of insertion attempts (the edge budget).
    pub fn edges(mut self, e: NumEdges) -> Self {
        self.e = e;
        self
    }
}

impl NumNodesGen for RelaxedBarabasiAlbert {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl Generator for RelaxedBarabasiAlbert {
    fn generate<B, R>(&self, rng: &mut R) -> Result<Graph<B>, GeneratorError>
    where
        B: GraphBackend,
        R: RandomSource,
    {
        let mut g = Graph::new();
        if self.n == 0 {
            return Ok(g);
        }
        g.add_vertices(self.n);

        let mut pool: Vec<Node> = (0..self.n).collect();

        for k in 0..self.e {
            let u = (k % NumEdges::from(self.n)) as Node;
            let v = pool[(rng.randi() % pool.len() as u64) as usize];
            if u != v {
                g.add_edge(v, u);
                pool.push(v);
            }
        }

        Ok(g)
    }
}
