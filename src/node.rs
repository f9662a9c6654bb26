/*!
# Node Representation

Vertices are dense indices: a graph over `n` vertices uses exactly the ids
`0..n`. We choose `Node = u32` as almost all use-cases involve fewer than
`2^32` vertices; this saves space compared to `usize`/`u64` and lets callers
manipulate node values directly without abstracting over them.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;
