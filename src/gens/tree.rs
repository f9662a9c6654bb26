use crate::gens::{Generator, GeneratorError};
use crate::graph::Graph;
use crate::node::Node;
use crate::ops::GraphBackend;
use crate::rng::RandomSource;

/// Random branching tree.
///
/// Level 0 is the single root vertex `0`. On each of the `levels - 1`
/// following levels, every vertex of the current level independently attempts
/// up to `max_children` children; each attempt succeeds with probability `p`,
/// decided by normalizing a [`randi`](crate::rng::RandomSource::randi) draw
/// to `[0, 1)`. Edges point from parent to child, so the result is a single
/// tree rooted at vertex `0`. Generation stops early once a level produces
/// no children.
///
/// `levels = 0` yields the empty graph; `levels = 1` exactly the root.
#[derive(Debug, Copy, Clone, Default)]
pub struct BranchingTree {
    levels: u32,
    max_children: u32,
    p: f64,
}

impl BranchingTree {
    /// Creates a new branching-tree generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of levels, the root included.
    pub fn levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    /// Sets the number of child attempts per vertex and level.
    pub fn max_children(mut self, max_children: u32) -> Self {
        self.max_children = max_children;
        self
    }

    /// Sets the per-attempt birth probability.
    pub fn prob(mut self, p: f64) -> Self {
        self.p = p;
        self
    }
}

impl Generator for BranchingTree {
    fn generate<B, R>(&self, rng: &mut R) -> Result<Graph<B>, GeneratorError>
    where
        B: GraphBackend,
        R: RandomSource,
    {
        let mut g = Graph::new();
        if self.levels == 0 {
            return Ok(g);
        }

        g.add_vertices(1);

        let mut current: Vec<Node> = vec![0];
        let mut next_vertex: Node = 1;

        for _ in 1..self.levels {
            let mut next = Vec::new();

            for &parent in &current {
                for _ in 0..self.max_children {
                    let r = (rng.randi() as u32) as f64 / 4_294_967_296.0;
                    if r < self.p {
                        g.add_vertices(1);
                        g.add_edge(parent, next_vertex);
                        next.push(next_vertex);
                        next_vertex += 1;
                    }
                }
            }

            if next.is_empty() {
                break;
            }
            current = next;
        }

        Ok(g)
    }
}
