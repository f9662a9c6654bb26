/*!
# Graph Storage Strategies

This module defines the eight interchangeable storage backends. All of them
implement the [`GraphBackend`](crate::ops::GraphBackend) contract over a dense
vertex range `0..n` and a directed edge relation; they differ only in how the
relation is encoded, and therefore in what insertion, membership, growth and
memory cost.

## Provided Strategies

| Strategy | Encoding | Sweet spot |
|---|---|---|
| [`AdjArray`] | per-vertex unsorted `Vec` | cheap appends, small degrees |
| [`SortedAdjArray`] | per-vertex sorted `Vec` | read-heavy, cache-friendly |
| [`HashAdjArray`] | per-vertex hash set | high degrees, mixed workloads |
| [`FlatAdjArray`] | one edge pool + offset table | contiguity demo; insertion is deliberately `O(E)` |
| [`AdjMatrix`] | row-major `Vec<Vec<bool>>` | dense graphs, constant-time queries |
| [`FlatAdjMatrix`] | flattened row-major `Vec<bool>` | as above, single allocation |
| [`RangeAdjArray`] | per-vertex `(lo, hi)` runs | near-contiguous target ids |
| [`EdgeHashSet`] | one global set of pairs | free growth, no per-vertex index |

The per-vertex list family shares the [`AdjList`] container, parameterized by
a [`Neighborhood`] storage type.
*/

mod edge_set;
mod flat;
mod list;
mod matrix;
mod neighborhood;
mod range;

pub use edge_set::*;
pub use flat::*;
pub use list::*;
pub use matrix::*;
pub use neighborhood::*;
pub use range::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, NumNodes};
    use crate::ops::GraphBackend;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// One operation of a replayable construction script.
    #[derive(Debug, Clone, Copy)]
    enum Op {
        AddVertices(NumNodes),
        AddEdge(Node, Node),
    }

    fn random_script(seed: u64) -> Vec<Op> {
        let rng = &mut Pcg64Mcg::seed_from_u64(seed);
        let mut ops = Vec::new();
        let mut n = 0u32;

        for _ in 0..4 {
            let grow = rng.random_range(4..10u32);
            n += grow;
            ops.push(Op::AddVertices(grow));

            for _ in 0..rng.random_range(0..3 * n) {
                ops.push(Op::AddEdge(rng.random_range(0..n), rng.random_range(0..n)));
            }
        }
        ops
    }

    fn replay<B: GraphBackend>(ops: &[Op]) -> B {
        let mut g = B::default();
        for op in ops {
            match *op {
                Op::AddVertices(k) => g.add_vertices(k),
                Op::AddEdge(u, v) => g.add_edge(u, v),
            }
        }
        g
    }

    /// Replaying one script against any two strategies must yield identical
    /// answers for every query the contract offers.
    #[test]
    fn all_backends_agree_on_replayed_scripts() {
        for seed in [1, 7, 42] {
            let ops = random_script(seed);

            let reference: AdjArray = replay(&ops);
            let n = reference.number_of_nodes();

            fn agree<B: GraphBackend>(ops: &[Op], reference: &AdjArray, n: NumNodes) {
                let trial: B = replay(ops);
                assert_eq!(trial.number_of_nodes(), n);
                assert_eq!(trial.number_of_edges(), reference.number_of_edges());

                for u in 0..n {
                    assert_eq!(trial.degree_of(u), reference.degree_of(u));
                    for v in 0..n {
                        assert_eq!(trial.has_edge(u, v), reference.has_edge(u, v));
                    }
                }
            }

            agree::<SortedAdjArray>(&ops, &reference, n);
            agree::<HashAdjArray>(&ops, &reference, n);
            agree::<FlatAdjArray>(&ops, &reference, n);
            agree::<AdjMatrix>(&ops, &reference, n);
            agree::<FlatAdjMatrix>(&ops, &reference, n);
            agree::<RangeAdjArray>(&ops, &reference, n);
            agree::<EdgeHashSet>(&ops, &reference, n);
        }
    }
}
