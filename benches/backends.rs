//! Compares the storage strategies on the operations their trade-offs hinge
//! on: edge insertion, membership tests and vertex growth. The relative
//! ordering (matrix growth paying its quadratic copy, the flat array paying
//! its global shift, hash strategies staying flat) is the point of having
//! eight backends in the first place.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use dgraphs::gens::{Generator, Gnp, NumNodesGen};
use dgraphs::prelude::*;
use dgraphs::rng::PcgSource;

const NODES: u32 = 500;
const EDGES: usize = 4_000;

fn random_pairs(n: Node, m: usize) -> Vec<(Node, Node)> {
    let rng = &mut Pcg64Mcg::seed_from_u64(42);
    (0..m)
        .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
        .collect()
}

fn build<B: GraphBackend>(n: Node, pairs: &[(Node, Node)]) -> B {
    let mut g = B::default();
    g.add_vertices(n);
    for &(u, v) in pairs {
        g.add_edge(u, v);
    }
    g
}

fn cases<B: GraphBackend>(c: &mut Criterion, prefix: &str) {
    let pairs = random_pairs(NODES, EDGES);

    c.bench_function(&format!("{prefix}/add_edge"), |b| {
        b.iter(|| black_box(build::<B>(NODES, &pairs)))
    });

    let g = build::<B>(NODES, &pairs);
    c.bench_function(&format!("{prefix}/has_edge"), |b| {
        b.iter(|| {
            let mut hits = 0u64;
            for &(u, v) in &pairs {
                hits += u64::from(g.has_edge(u, v));
            }
            black_box(hits)
        })
    });

    c.bench_function(&format!("{prefix}/grow_in_steps"), |b| {
        b.iter(|| {
            let mut g = B::default();
            for _ in 0..50 {
                g.add_vertices(10);
            }
            black_box(g.number_of_nodes())
        })
    });
}

fn backends(c: &mut Criterion) {
    cases::<AdjArray>(c, "adj_array");
    cases::<SortedAdjArray>(c, "sorted_adj_array");
    cases::<HashAdjArray>(c, "hash_adj_array");
    cases::<FlatAdjArray>(c, "flat_adj_array");
    cases::<AdjMatrix>(c, "adj_matrix");
    cases::<FlatAdjMatrix>(c, "flat_adj_matrix");
    cases::<RangeAdjArray>(c, "range_adj_array");
    cases::<EdgeHashSet>(c, "edge_hash_set");
}

fn generators(c: &mut Criterion) {
    c.bench_function("gnp/directed_n200", |b| {
        let model = Gnp::new().nodes(200).prob(0.1);
        b.iter(|| {
            let mut rng = PcgSource::from_seed(7);
            let g: Graph<HashAdjArray> = model.generate(&mut rng).unwrap();
            black_box(g.number_of_edges())
        })
    });
}

criterion_group!(benches, backends, generators);
criterion_main!(benches);
