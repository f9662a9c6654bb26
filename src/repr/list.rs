use crate::edge::NumEdges;
use crate::node::{Node, NumNodes};
use crate::ops::{check_vertex, GraphBackend};
use crate::repr::neighborhood::{ArrNeighborhood, HashNeighborhood, Neighborhood, SortedNeighborhood};
use crate::testing::test_backend_contract;

/// Per-vertex adjacency list, generic over the [`Neighborhood`] storage used
/// for each vertex's out-neighbors.
///
/// The concrete strategies [`AdjArray`], [`SortedAdjArray`] and
/// [`HashAdjArray`] are type aliases of this container; the complexity
/// trade-offs live entirely in the neighborhood type.
#[derive(Default, Clone)]
pub struct AdjList<N>
where
    N: Neighborhood,
{
    nbs: Vec<N>,
}

/// Adjacency list over unsorted arrays: `O(deg)` duplicate check plus `O(1)`
/// append on insert, `O(deg)` membership.
pub type AdjArray = AdjList<ArrNeighborhood>;

/// Adjacency list over sorted arrays: `O(deg)` shifting insert,
/// `O(log deg)` membership.
pub type SortedAdjArray = AdjList<SortedNeighborhood>;

/// Adjacency list over per-vertex hash sets: expected `O(1)` insert and
/// membership, higher constant memory.
pub type HashAdjArray = AdjList<HashNeighborhood>;

impl<N> GraphBackend for AdjList<N>
where
    N: Neighborhood,
{
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn number_of_edges(&self) -> NumEdges {
        self.nbs.iter().map(|nbs| NumEdges::from(nbs.len())).sum()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        check_vertex(u, self.number_of_nodes());
        self.nbs[u as usize].len()
    }

    fn add_vertices(&mut self, k: NumNodes) {
        let n = self.nbs.len() + k as usize;
        self.nbs.resize_with(n, N::default);
    }

    fn add_edge(&mut self, u: Node, v: Node) {
        let n = self.number_of_nodes();
        check_vertex(u, n);
        check_vertex(v, n);
        if u == v {
            return;
        }
        self.nbs[u as usize].insert(v);
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        let n = self.number_of_nodes();
        check_vertex(u, n);
        check_vertex(v, n);
        self.nbs[u as usize].contains(v)
    }
}

// ---------- Testing ----------

test_backend_contract!(test_adj_array, AdjArray);
test_backend_contract!(test_sorted_adj_array, SortedAdjArray);
test_backend_contract!(test_hash_adj_array, HashAdjArray);
