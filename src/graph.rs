use std::fmt;
use std::io;
use std::ops::Range;
use std::path::Path;

use itertools::Itertools;

use crate::edge::{Edge, NumEdges};
use crate::io::IoAdapter;
use crate::node::{Node, NumNodes};
use crate::ops::GraphBackend;

/// Thin generic facade over one storage backend.
///
/// The graph owns its backend by value (composition, never sharing) and
/// forwards every contract operation verbatim; with the forwards inlined the
/// wrapper costs nothing. Algorithms written against [`Graph<B>`] switch
/// storage strategy by switching the type parameter alone:
///
/// ```rust
/// use dgraphs::prelude::*;
///
/// let mut g: Graph<HashAdjArray> = Graph::new();
/// g.add_vertices(4);
/// g.add_edge(3, 1);
///
/// assert!(g.has_edge(3, 1));
/// assert!(!g.has_edge(1, 3));
/// assert!(g.has_edge_undirected(1, 3));
/// ```
///
/// A backend instance must only ever be mutated through its owning graph;
/// sharing one across threads without external serialization is out of
/// contract.
#[derive(Default, Clone)]
pub struct Graph<B>
where
    B: GraphBackend,
{
    backend: B,
}

impl<B> Graph<B>
where
    B: GraphBackend,
{
    /// Creates an empty graph (no vertices, no edges).
    pub fn new() -> Self {
        Self {
            backend: B::default(),
        }
    }

    /// Read-only access to the owned backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the current number of vertices.
    #[inline]
    pub fn number_of_nodes(&self) -> NumNodes {
        self.backend.number_of_nodes()
    }

    /// Returns the number of distinct directed edges.
    #[inline]
    pub fn number_of_edges(&self) -> NumEdges {
        self.backend.number_of_edges()
    }

    /// Returns the out-degree of `u`.
    /// ** Panics if `u >= n` **
    #[inline]
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.backend.degree_of(u)
    }

    /// Returns an iterator over V.
    pub fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Appends `k` new isolated vertices.
    #[inline]
    pub fn add_vertices(&mut self, k: NumNodes) {
        self.backend.add_vertices(k);
    }

    /// Inserts the directed edge `(u, v)`; self-loops are ignored and
    /// duplicates collapse.
    /// ** Panics if `u >= n || v >= n` **
    #[inline]
    pub fn add_edge(&mut self, u: Node, v: Node) {
        self.backend.add_edge(u, v);
    }

    /// Inserts all edges in the collection.
    /// ** Panics if any endpoint is `>= n` **
    pub fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        for edge in edges {
            let Edge(u, v) = edge.into();
            self.add_edge(u, v);
        }
    }

    /// Returns *true* if the directed edge `(u, v)` is present.
    /// ** Panics if `u >= n || v >= n` **
    #[inline]
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.backend.has_edge(u, v)
    }

    /// Undirected membership for graphs built with one directed edge per
    /// unordered pair, larger endpoint first: canonicalizes the query so the
    /// larger index is the `from` endpoint, then delegates.
    /// ** Panics if `u >= n || v >= n` **
    #[inline]
    pub fn has_edge_undirected(&self, u: Node, v: Node) -> bool {
        let Edge(from, to) = Edge(u, v).normalized();
        self.backend.has_edge(from, to)
    }

    /// Persists the backend to `path` through the given adapter.
    pub fn write_disk<A: IoAdapter>(&self, path: &Path, io: &mut A) -> io::Result<()> {
        self.backend.write_disk(path, io)
    }

    /// Restores the backend from `path` through the given adapter.
    pub fn read_disk<A: IoAdapter>(&mut self, path: &Path, io: &mut A) -> io::Result<()> {
        self.backend.read_disk(path, io)
    }
}

impl<B> fmt::Debug for Graph<B>
where
    B: GraphBackend,
{
    /// Dumps one line per vertex with its out-neighbors, via the read-only
    /// contract only (every backend gets this for free).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.number_of_nodes();
        writeln!(f, "graph on {n} vertices, {} edges", self.number_of_edges())?;
        for u in self.vertices() {
            writeln!(
                f,
                "{u}: {}",
                (0..n).filter(|&v| self.has_edge(u, v)).format(" ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::FileIo;
    use crate::repr::{AdjArray, AdjMatrix};

    #[test]
    fn forwards_to_the_backend() {
        let mut g: Graph<AdjMatrix> = Graph::new();
        assert_eq!(g.number_of_nodes(), 0);

        g.add_vertices(5);
        g.add_edge(4, 2);
        g.add_edge(4, 2);
        g.add_edge(1, 1);

        assert_eq!(g.number_of_nodes(), 5);
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.degree_of(4), 1);
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn bulk_insert_accepts_edges_and_pairs() {
        let mut g: Graph<AdjArray> = Graph::new();
        g.add_vertices(4);
        g.add_edges([Edge(0, 1), Edge(2, 3)]);
        g.add_edges([(1u32, 0u32), (1, 1)]);

        assert_eq!(g.number_of_edges(), 3);
        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(2, 3));
        assert!(g.has_edge(1, 0));
    }

    #[test]
    fn undirected_queries_canonicalize() {
        let mut g: Graph<AdjArray> = Graph::new();
        g.add_vertices(4);

        // one insert per unordered pair, larger endpoint first
        g.add_edge(3, 1);

        assert!(g.has_edge_undirected(1, 3));
        assert!(g.has_edge_undirected(3, 1));
        assert!(g.has_edge(3, 1));
        assert!(!g.has_edge(1, 3));
        assert!(!g.has_edge_undirected(2, 3));
    }

    #[test]
    fn persistence_stubs_are_noops() {
        let mut g: Graph<AdjArray> = Graph::new();
        g.add_vertices(2);
        g.add_edge(1, 0);

        let path = std::env::temp_dir().join(format!("dgraphs-stub-{}", std::process::id()));
        let mut io = FileIo;
        g.write_disk(&path, &mut io).unwrap();
        g.read_disk(&path, &mut io).unwrap();

        // nothing was serialized and nothing was clobbered
        assert!(g.has_edge(1, 0));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn debug_dump_lists_neighbors() {
        let mut g: Graph<AdjArray> = Graph::new();
        g.add_vertices(3);
        g.add_edge(0, 2);
        g.add_edge(0, 1);
        g.add_edge(2, 1);

        let dump = format!("{g:?}");
        assert!(dump.contains("3 vertices"));
        assert!(dump.contains("0: 1 2"));
        assert!(dump.contains("1:"));
        assert!(dump.contains("2: 1"));
    }
}
