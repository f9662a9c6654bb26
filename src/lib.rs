/*!
`dgraphs` is a library for **d**irected graphs under interchangeable storage
backends, paired with generators for the standard random graph models.

# Representation

Vertices are dense indices `0..n` (`Node = u32`); an edge is the ordered pair
`Edge(from, to)` with self-loops rejected everywhere. The logical content of
a graph, its set of directed edges, is fixed; *how* it is stored is not.
Eight storage strategies encode the same relation with different asymptotic
costs for insertion, membership tests, growth and memory (see [`repr`] for
the full list and their trade-offs), and all of them implement the single
[`GraphBackend`](ops::GraphBackend) contract.

The [`Graph`](graph::Graph) facade owns one backend and forwards every
operation, so algorithms are written once and pick their storage through a
type parameter:

```rust
use dgraphs::{gens::*, metrics::degree_sequence, prelude::*, rng::PcgSource};

let mut rng = PcgSource::from_seed(42);
let g: Graph<SortedAdjArray> = BarabasiAlbert::new()
    .nodes(100)
    .core(5)
    .attach(3)
    .generate(&mut rng)
    .unwrap();

assert_eq!(g.number_of_nodes(), 100);
assert_eq!(degree_sequence(&g).len(), 100);
```

# Generators

The [`gens`] module covers uniform-random (Erdős–Rényi, directed and
undirected), preferential attachment (Barabási–Albert plus a relaxed `O(E)`
variant), small-world rewiring (Watts–Strogatz) and random branching trees.
Generators draw all randomness through the [`rng::RandomSource`] capability
set; seeding a source makes every generated graph reproducible bit for bit.

# Scope

The crate provides storage, generation and degree metrics. There are no
traversal or path algorithms, no thread-safety guarantees (a backend is
exclusively owned and must be externally serialized if shared), and
persistence is a pluggable stub boundary (see [`io`]).
*/

pub mod edge;
pub mod gens;
pub mod graph;
pub mod io;
pub mod metrics;
pub mod node;
pub mod ops;
pub mod repr;
pub mod rng;
pub(crate) mod testing;
pub mod utils;

/// Includes definitions for nodes and edges, the backend contract, the graph
/// facade and all storage strategies.
pub mod prelude {
    pub use super::{edge::*, graph::*, node::*, ops::*, repr::*};
}
