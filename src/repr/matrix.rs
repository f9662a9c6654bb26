use crate::edge::NumEdges;
use crate::node::{Node, NumNodes};
use crate::ops::{check_vertex, GraphBackend};
use crate::testing::test_backend_contract;

/// Dense row-major adjacency matrix (`Vec<Vec<bool>>`).
///
/// Insert and membership are `O(1)`; the price is `O(n^2)` memory and an
/// `O(n^2)` growth step, since every existing row is extended and the matrix
/// gains fresh rows. Callers that grow in many small increments pay that
/// quadratic cost each time.
#[derive(Default, Clone)]
pub struct AdjMatrix {
    rows: Vec<Vec<bool>>,
    num_edges: NumEdges,
}

impl GraphBackend for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        check_vertex(u, self.number_of_nodes());
        self.rows[u as usize].iter().filter(|&&b| b).count() as NumNodes
    }

    fn add_vertices(&mut self, k: NumNodes) {
        let n = self.rows.len() + k as usize;
        for row in &mut self.rows {
            row.resize(n, false);
        }
        self.rows.resize_with(n, || vec![false; n]);
    }

    fn add_edge(&mut self, u: Node, v: Node) {
        let n = self.number_of_nodes();
        check_vertex(u, n);
        check_vertex(v, n);
        if u == v {
            return;
        }

        let slot = &mut self.rows[u as usize][v as usize];
        if !*slot {
            *slot = true;
            self.num_edges += 1;
        }
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        let n = self.number_of_nodes();
        check_vertex(u, n);
        check_vertex(v, n);
        self.rows[u as usize][v as usize]
    }
}

/// Dense adjacency matrix flattened into a single row-major `Vec<bool>`.
///
/// Same `O(1)` insert/membership profile as [`AdjMatrix`] with one
/// allocation instead of `n`; growth allocates a fresh `n'^2` buffer and
/// copies the old square into place.
#[derive(Default, Clone)]
pub struct FlatAdjMatrix {
    bits: Vec<bool>,
    n: usize,
    num_edges: NumEdges,
}

impl GraphBackend for FlatAdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n as NumNodes
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        check_vertex(u, self.number_of_nodes());
        let start = u as usize * self.n;
        self.bits[start..start + self.n]
            .iter()
            .filter(|&&b| b)
            .count() as NumNodes
    }

    fn add_vertices(&mut self, k: NumNodes) {
        if k == 0 {
            return;
        }

        let old_n = self.n;
        self.n += k as usize;

        let mut bits = vec![false; self.n * self.n];
        for i in 0..old_n {
            bits[i * self.n..i * self.n + old_n]
                .copy_from_slice(&self.bits[i * old_n..(i + 1) * old_n]);
        }
        self.bits = bits;
    }

    fn add_edge(&mut self, u: Node, v: Node) {
        let n = self.number_of_nodes();
        check_vertex(u, n);
        check_vertex(v, n);
        if u == v {
            return;
        }

        let slot = &mut self.bits[u as usize * self.n + v as usize];
        if !*slot {
            *slot = true;
            self.num_edges += 1;
        }
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        let n = self.number_of_nodes();
        check_vertex(u, n);
        check_vertex(v, n);
        self.bits[u as usize * self.n + v as usize]
    }
}

// ---------- Testing ----------

test_backend_contract!(test_adj_matrix, AdjMatrix);
test_backend_contract!(test_flat_adj_matrix, FlatAdjMatrix);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_matrix_growth_reindexes_old_square() {
        let mut g = FlatAdjMatrix::default();
        g.add_vertices(3);
        g.add_edge(0, 1);
        g.add_edge(2, 0);
        g.add_edge(1, 2);

        // growth changes the row stride; all old cells must survive the copy
        g.add_vertices(2);
        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(2, 0));
        assert!(g.has_edge(1, 2));
        assert!(!g.has_edge(1, 0));
        assert_eq!(g.number_of_edges(), 3);

        g.add_edge(4, 3);
        assert!(g.has_edge(4, 3));
        assert_eq!(g.number_of_edges(), 4);
    }
}
