/*!
# Degree Metrics

Read-only reductions over the [`Graph`](crate::graph::Graph) facade. These
consume nothing but the backend contract, so they work unchanged for every
storage strategy.
*/

use itertools::Itertools;

use crate::graph::Graph;
use crate::node::NumNodes;
use crate::ops::GraphBackend;

/// Returns the out-degree of every vertex, indexed by vertex id.
///
/// The result has length `number_of_nodes()`.
pub fn degree_sequence<B>(graph: &Graph<B>) -> Vec<NumNodes>
where
    B: GraphBackend,
{
    graph.vertices().map(|u| graph.degree_of(u)).collect()
}

/// Returns `(degree, multiplicity)` pairs sorted by degree.
pub fn degree_distribution<B>(graph: &Graph<B>) -> Vec<(NumNodes, NumNodes)>
where
    B: GraphBackend,
{
    let mut distr = degree_sequence(graph)
        .into_iter()
        .counts()
        .into_iter()
        .map(|(d, count)| (d, count as NumNodes))
        .collect_vec();
    distr.sort_unstable_by_key(|&(d, _)| d);
    distr
}
