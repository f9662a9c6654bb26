use crate::edge::NumEdges;
use crate::node::{Node, NumNodes};
use crate::ops::{check_vertex, GraphBackend};
use crate::testing::test_backend_contract;

/// All adjacency lists packed into one contiguous edge pool, with a
/// per-vertex offset table marking where each vertex's segment starts.
///
/// Inserting into the middle of the pool shifts every later segment and bumps
/// every later offset, so `add_edge` is `O(E)` in the worst case. This is the
/// deliberate baseline for what a naive append-with-shift costs; do not
/// "upgrade" it, a compacted layout with cheap inserts is a different
/// strategy.
#[derive(Default, Clone)]
pub struct FlatAdjArray {
    edges: Vec<Node>,
    /// `offsets[u]` = start of vertex `u`'s segment in `edges`
    offsets: Vec<usize>,
}

impl FlatAdjArray {
    /// Half-open range of vertex `u`'s segment in the edge pool.
    fn segment(&self, u: Node) -> (usize, usize) {
        let start = self.offsets[u as usize];
        let end = self
            .offsets
            .get(u as usize + 1)
            .copied()
            .unwrap_or(self.edges.len());
        (start, end)
    }
}

impl GraphBackend for FlatAdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.offsets.len() as NumNodes
    }

    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        check_vertex(u, self.number_of_nodes());
        let (start, end) = self.segment(u);
        (end - start) as NumNodes
    }

    fn add_vertices(&mut self, k: NumNodes) {
        // fresh vertices own an empty segment at the end of the pool
        let end = self.edges.len();
        let n = self.offsets.len() + k as usize;
        self.offsets.resize(n, end);
    }

    fn add_edge(&mut self, u: Node, v: Node) {
        let n = self.number_of_nodes();
        check_vertex(u, n);
        check_vertex(v, n);
        if u == v {
            return;
        }

        let (start, end) = self.segment(u);
        if self.edges[start..end].contains(&v) {
            return;
        }

        self.edges.insert(end, v);
        for offset in &mut self.offsets[u as usize + 1..] {
            *offset += 1;
        }
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        let n = self.number_of_nodes();
        check_vertex(u, n);
        check_vertex(v, n);
        let (start, end) = self.segment(u);
        self.edges[start..end].contains(&v)
    }
}

// ---------- Testing ----------

test_backend_contract!(test_flat_adj_array, FlatAdjArray);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_stay_consistent_under_shifts() {
        let mut g = FlatAdjArray::default();
        g.add_vertices(4);

        // insert out of vertex order so every later segment shifts
        g.add_edge(3, 0);
        g.add_edge(1, 2);
        g.add_edge(0, 3);
        g.add_edge(1, 0);
        g.add_edge(3, 1);

        assert_eq!(g.degree_of(0), 1);
        assert_eq!(g.degree_of(1), 2);
        assert_eq!(g.degree_of(2), 0);
        assert_eq!(g.degree_of(3), 2);

        assert!(g.has_edge(0, 3));
        assert!(g.has_edge(1, 2));
        assert!(g.has_edge(1, 0));
        assert!(g.has_edge(3, 0));
        assert!(g.has_edge(3, 1));
        assert!(!g.has_edge(2, 1));
    }

    #[test]
    fn last_vertex_appends_at_pool_end() {
        let mut g = FlatAdjArray::default();
        g.add_vertices(2);
        g.add_edge(1, 0);
        assert!(g.has_edge(1, 0));
        assert_eq!(g.number_of_edges(), 1);
    }
}
