/*!
# The Backend Contract

Every storage strategy in [`repr`](crate::repr) implements the single
[`GraphBackend`] trait below. Generators, the [`Graph`](crate::graph::Graph)
facade and the metrics helpers are written exclusively against this contract,
so any backend can be substituted without touching algorithm code.

The contract is deliberately minimal: a dense vertex range `0..n` that only
grows, a directed edge relation without self-loops, and membership/degree
queries. There is no neighbor iteration and no removal; strategies are free to
encode the relation however they like as long as the observable semantics
below hold.
*/

use std::io;
use std::path::Path;

use crate::edge::NumEdges;
use crate::io::IoAdapter;
use crate::node::{Node, NumNodes};

/// Asserts that `u` names an existing vertex.
///
/// All backends funnel their index validation through this check so that an
/// out-of-range vertex id fails loudly at the contract boundary instead of
/// corrupting or misreading the underlying container.
#[inline]
#[track_caller]
pub(crate) fn check_vertex(u: Node, n: NumNodes) {
    assert!(u < n, "vertex {u} is out of bounds for a graph with {n} vertices");
}

/// Uniform contract over a directed graph with dense vertex ids `0..n`.
///
/// Semantics every implementation must provide:
/// - the vertex count only grows; [`add_vertices`](GraphBackend::add_vertices)
///   appends fresh ids and never disturbs existing edges,
/// - self-loop inserts are silently ignored and never stored,
/// - duplicate inserts of the same ordered pair collapse to one edge,
/// - [`has_edge`](GraphBackend::has_edge) answers exact *directed* membership.
///
/// Passing a vertex id `>= number_of_nodes()` to any of the edge operations is
/// a contract violation and panics.
pub trait GraphBackend: Default + Clone {
    /// Returns the current number of vertices.
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of distinct directed edges.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns the out-degree of `u`, ie. the number of edges `(u, v)`.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Appends `k` new isolated vertices with ids `n..n + k`.
    /// `k = 0` is a no-op.
    fn add_vertices(&mut self, k: NumNodes);

    /// Inserts the directed edge `(u, v)`.
    ///
    /// A self-loop request (`u == v`) is silently ignored; re-inserting an
    /// existing edge is a no-op.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node);

    /// Returns *true* if the directed edge `(u, v)` is present.
    /// `has_edge(v, v)` is always *false*.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Persists the backend's edge data to `path` through the given adapter.
    ///
    /// Serialization is an external concern; the default implementation is a
    /// no-op stub that backends override once an on-disk format exists.
    fn write_disk<A: IoAdapter>(&self, _path: &Path, _io: &mut A) -> io::Result<()> {
        Ok(())
    }

    /// Restores the backend's edge data from `path` through the given adapter.
    ///
    /// The default implementation is a no-op stub, mirroring
    /// [`write_disk`](GraphBackend::write_disk).
    fn read_disk<A: IoAdapter>(&mut self, _path: &Path, _io: &mut A) -> io::Result<()> {
        Ok(())
    }
}
