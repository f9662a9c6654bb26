use fxhash::FxHashSet;

use crate::edge::NumEdges;
use crate::node::{Node, NumNodes};
use crate::ops::{check_vertex, GraphBackend};
use crate::testing::test_backend_contract;

/// One global hash set of `(from, to)` pairs; the vertex count is just a
/// counter.
///
/// Everything is expected `O(1)`, including `add_vertices`, which makes this
/// the only strategy with free growth. The trade-off surfaces in
/// [`degree_of`](GraphBackend::degree_of), which has no per-vertex index and
/// scans the whole set.
#[derive(Default, Clone)]
pub struct EdgeHashSet {
    edges: FxHashSet<(Node, Node)>,
    n: NumNodes,
}

impl GraphBackend for EdgeHashSet {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        check_vertex(u, self.n);
        self.edges.iter().filter(|&&(from, _)| from == u).count() as NumNodes
    }

    fn add_vertices(&mut self, k: NumNodes) {
        self.n += k;
    }

    fn add_edge(&mut self, u: Node, v: Node) {
        check_vertex(u, self.n);
        check_vertex(v, self.n);
        if u == v {
            return;
        }
        self.edges.insert((u, v));
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        check_vertex(u, self.n);
        check_vertex(v, self.n);
        self.edges.contains(&(u, v))
    }
}

// ---------- Testing ----------

test_backend_contract!(test_edge_hash_set, EdgeHashSet);
