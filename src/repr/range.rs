use crate::edge::NumEdges;
use crate::node::{Node, NumNodes};
use crate::ops::{check_vertex, GraphBackend};
use crate::testing::test_backend_contract;

/// Run-length compressed adjacency: each vertex stores its out-neighbors as
/// inclusive `(lo, hi)` runs of consecutive target ids.
///
/// When targets arrive in ascending contiguous order the last run simply
/// extends, so insertion is `O(1)` amortized and memory is proportional to
/// the number of distinct runs rather than the number of edges. Scattered
/// targets degrade to one run each, at which point membership's `O(runs)`
/// scan is no better than an unsorted list. Runs are never merged after the
/// fact; `(2,2)` then `(4,4)` then a later `3` yields three runs, not one.
#[derive(Default, Clone)]
pub struct RangeAdjArray {
    runs: Vec<Vec<(Node, Node)>>,
}

impl RangeAdjArray {
    fn covered(&self, u: Node, v: Node) -> bool {
        self.runs[u as usize]
            .iter()
            .any(|&(lo, hi)| lo <= v && v <= hi)
    }
}

impl GraphBackend for RangeAdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.runs.len() as NumNodes
    }

    fn number_of_edges(&self) -> NumEdges {
        self.runs
            .iter()
            .flatten()
            .map(|&(lo, hi)| NumEdges::from(hi - lo) + 1)
            .sum()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        check_vertex(u, self.number_of_nodes());
        self.runs[u as usize]
            .iter()
            .map(|&(lo, hi)| hi - lo + 1)
            .sum()
    }

    fn add_vertices(&mut self, k: NumNodes) {
        let n = self.runs.len() + k as usize;
        self.runs.resize_with(n, Vec::new);
    }

    fn add_edge(&mut self, u: Node, v: Node) {
        let n = self.number_of_nodes();
        check_vertex(u, n);
        check_vertex(v, n);
        if u == v || self.covered(u, v) {
            return;
        }

        let row = &mut self.runs[u as usize];
        match row.last_mut() {
            Some(last) if last.1 + 1 == v => last.1 = v,
            _ => row.push((v, v)),
        }
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        let n = self.number_of_nodes();
        check_vertex(u, n);
        check_vertex(v, n);
        self.covered(u, v)
    }
}

// ---------- Testing ----------

test_backend_contract!(test_range_adj_array, RangeAdjArray);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_targets_extend_the_last_run() {
        let mut g = RangeAdjArray::default();
        g.add_vertices(8);

        for v in [1, 2, 3, 5, 6] {
            g.add_edge(0, v);
        }

        assert_eq!(g.runs[0], vec![(1, 3), (5, 6)]);
        assert_eq!(g.degree_of(0), 5);
        assert_eq!(g.number_of_edges(), 5);
        assert!(g.has_edge(0, 2));
        assert!(!g.has_edge(0, 4));
    }

    #[test]
    fn duplicate_inside_a_run_does_not_split_counts() {
        let mut g = RangeAdjArray::default();
        g.add_vertices(5);

        g.add_edge(1, 2);
        g.add_edge(1, 3);
        g.add_edge(1, 2);
        g.add_edge(1, 3);

        assert_eq!(g.runs[1], vec![(2, 3)]);
        assert_eq!(g.number_of_edges(), 2);
    }

    #[test]
    fn skipped_target_opens_a_fresh_run() {
        let mut g = RangeAdjArray::default();
        g.add_vertices(10);

        g.add_edge(0, 2);
        g.add_edge(0, 4);
        g.add_edge(0, 3);

        // 3 lands between existing runs; they are not merged
        assert_eq!(g.runs[0], vec![(2, 2), (4, 4), (3, 3)]);
        assert_eq!(g.degree_of(0), 3);
    }
}
