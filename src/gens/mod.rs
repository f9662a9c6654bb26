/*!
# Random Graph Generators

This module provides builder-style generators for the standard structural
models:

- [`Gnp`] / [`GnpUndirected`]: uniform-random (Erdős–Rényi) graphs,
- [`BarabasiAlbert`]: preferential attachment with a fully connected core,
- [`RelaxedBarabasiAlbert`]: a faster `O(E)` directed preferential variant,
- [`WattsStrogatz`]: small-world ring lattices with stochastic rewiring,
- [`BranchingTree`]: level-wise random branching trees.

The typical workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using the builder methods (e.g., `.nodes(n).prob(p)`).
3. Call [`generate`](Generator::generate) with a
   [`RandomSource`](crate::rng::RandomSource) and a backend choice.

Every generator is a pure function of its parameters and the supplied random
source: no global state, and a seeded source reproduces the graph bit for
bit. Unlike pure edge-stream models, several of these models must query the
partially built graph while sampling (preferential attachment reads the
degree list it grows, rewiring rejects already-connected targets), so
generators drive a [`Graph`](crate::graph::Graph) directly through the
backend contract (`add_vertices`, `add_edge`, `has_edge` and the counters)
and never through backend internals.

Parameter violations are reported as [`GeneratorError`] before any graph
state is allocated; a caller never observes a partially built graph.
*/

use thiserror::Error;

use crate::graph::Graph;
use crate::node::NumNodes;
use crate::ops::GraphBackend;
use crate::rng::RandomSource;

mod ba;
mod gnp;
mod tree;
mod ws;

pub use ba::*;
pub use gnp::*;
pub use tree::*;
pub use ws::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder method across the models and allows a
/// fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the generated graph.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configured random graph generator.
pub trait Generator {
    /// Builds a graph in the chosen backend, drawing all stochastic
    /// decisions from `rng`.
    ///
    /// # Errors
    /// Returns a [`GeneratorError`] if the configured parameters violate the
    /// model's preconditions. Validation happens before any graph state is
    /// allocated.
    fn generate<B, R>(&self, rng: &mut R) -> Result<Graph<B>, GeneratorError>
    where
        B: GraphBackend,
        R: RandomSource;
}

/// Parameter violations of the generator models.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeneratorError {
    /// A probability parameter lies outside `[0, 1]`.
    #[error("probability {p} is not in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Preferential attachment requires `m <= m0 < n`.
    #[error("preferential attachment requires m <= m0 < n (m = {m}, m0 = {m0}, n = {n})")]
    InvalidCore { m: NumNodes, m0: NumNodes, n: NumNodes },

    /// The ring lattice requires `k < n`.
    #[error("ring lattice requires k < n (k = {k}, n = {n})")]
    InvalidLattice { k: NumNodes, n: NumNodes },
}
