use crate::gens::{Generator, GeneratorError, NumNodesGen};
use crate::graph::Graph;
use crate::node::{Node, NumNodes};
use crate::ops::GraphBackend;
use crate::rng::RandomSource;

/// Small-world model (Watts–Strogatz).
///
/// Starts from a directed ring lattice in which vertex `i` connects to its
/// `k` clockwise successors `(i + 1)..(i + k) mod n`. Each lattice edge is
/// then considered for rewiring with probability `beta`: a uniformly random
/// replacement target is resampled until it differs from the source and is
/// not already connected, and the edge to it is inserted.
///
/// Rewiring *adds* the new edge and leaves the original lattice edge in
/// place. This deliberately diverges from the textbook model, which
/// relocates the edge. With `beta = 0` the result is exactly the
/// deterministic lattice, independent of the random source.
///
/// Requires `k < n`.
#[derive(Debug, Copy, Clone, Default)]
pub struct WattsStrogatz {
    n: NumNodes,
    k: NumNodes,
    beta: f64,
}

impl WattsStrogatz {
    /// Creates a new small-world generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of clockwise lattice neighbors per vertex.
    pub fn neighbors(mut self, k: NumNodes) -> Self {
        self.k = k;
        self
    }

    /// Sets the per-edge rewiring probability.
    pub fn rewiring(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }
}

impl NumNodesGen for WattsStrogatz {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl Generator for WattsStrogatz {
    fn generate<B, R>(&self, rng: &mut R) -> Result<Graph<B>, GeneratorError>
    where
        B: GraphBackend,
        R: RandomSource,
    {
        let (n, k) = (self.n, self.k);
        if k >= n {
            return Err(GeneratorError::InvalidLattice { k, n });
        }

        let mut g = Graph::new();
        g.add_vertices(n);

        for i in 0..n {
            for j in 1..=k {
                let successor = ((u64::from(i) + u64::from(j)) % u64::from(n)) as Node;
                g.add_edge(i, successor);
            }
        }

        for i in 0..n {
            for _ in 1..=k {
                if rng.randf() < self.beta {
                    // a saturated vertex has no free target to rewire to
                    if g.degree_of(i) >= n - 1 {
                        continue;
                    }
                    loop {
                        let target = (rng.randi() % u64::from(n)) as Node;
                        if target != i && !g.has_edge(i, target) {
                            g.add_edge(i, target);
                            break;
                        }
                    }
                }
            }
        }

        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::{AdjMatrix, RangeAdjArray, SortedAdjArray};
    use crate::rng::{PcgSource, XorShiftSource};

    #[test]
    fn beta_zero_is_the_exact_lattice() {
        let (n, k) = (12, 3);

        for seed in [0, 1, 99] {
            let g: Graph<SortedAdjArray> = WattsStrogatz::new()
                .nodes(n)
                .neighbors(k)
                .generate(&mut PcgSource::from_seed(seed))
                .unwrap();

            assert_eq!(g.number_of_edges(), u64::from(n) * u64::from(k));
            for i in 0..n {
                for j in 1..=k {
                    assert!(g.has_edge(i, (i + j) % n));
                }
                assert_eq!(g.degree_of(i), k);
            }
        }
    }

    #[test]
    fn rewiring_only_adds_edges() {
        let (n, k) = (20, 2);
        let g: Graph<AdjMatrix> = WattsStrogatz::new()
            .nodes(n)
            .neighbors(k)
            .rewiring(0.8)
            .generate(&mut XorShiftSource::from_seed(17))
            .unwrap();

        // the lattice survives untouched underneath the rewired edges
        for i in 0..n {
            for j in 1..=k {
                assert!(g.has_edge(i, (i + j) % n));
            }
            assert!(!g.has_edge(i, i));
        }
        assert!(g.number_of_edges() >= u64::from(n) * u64::from(k));
        assert!(g.number_of_edges() <= u64::from(n) * u64::from(2 * k));
    }

    #[test]
    fn saturated_vertices_terminate() {
        // k = n - 1 saturates every vertex in the lattice already
        let (n, k) = (6, 5);
        let g: Graph<RangeAdjArray> = WattsStrogatz::new()
            .nodes(n)
            .neighbors(k)
            .rewiring(1.0)
            .generate(&mut PcgSource::from_seed(4))
            .unwrap();

        assert_eq!(g.number_of_edges(), u64::from(n) * u64::from(k));
    }

    #[test]
    fn too_large_neighborhood_is_rejected() {
        let res = WattsStrogatz::new()
            .nodes(5)
            .neighbors(5)
            .generate::<SortedAdjArray, _>(&mut PcgSource::from_seed(0));
        assert_eq!(
            res.unwrap_err(),
            GeneratorError::InvalidLattice { k: 5, n: 5 }
        );
    }
}
