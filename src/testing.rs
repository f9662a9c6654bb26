/// Contract suite instantiated once per storage strategy.
///
/// Replays seeded random operation scripts against a `Vec<Vec<bool>>` model
/// of the directed edge relation; since every backend must match the model,
/// any two backends agree on every query for every script.
macro_rules! test_backend_contract {
    ($env:ident, $backend:ty) => {
        #[cfg(test)]
        mod $env {
            use super::*;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            #[test]
            fn starts_empty() {
                let g = <$backend>::default();
                assert_eq!(g.number_of_nodes(), 0);
                assert_eq!(g.number_of_edges(), 0);
            }

            #[test]
            fn growth_is_monotone_and_preserving() {
                let mut g = <$backend>::default();
                g.add_vertices(3);
                assert_eq!(g.number_of_nodes(), 3);

                g.add_edge(0, 2);
                g.add_edge(2, 1);

                g.add_vertices(0);
                assert_eq!(g.number_of_nodes(), 3);

                g.add_vertices(4);
                assert_eq!(g.number_of_nodes(), 7);

                // old edges survive growth, new vertices arrive isolated
                assert!(g.has_edge(0, 2));
                assert!(g.has_edge(2, 1));
                assert_eq!(g.number_of_edges(), 2);
                for u in 3..7 {
                    assert_eq!(g.degree_of(u), 0);
                }

                g.add_edge(6, 0);
                assert!(g.has_edge(6, 0));
                assert_eq!(g.number_of_edges(), 3);
            }

            #[test]
            fn edges_are_directed() {
                let mut g = <$backend>::default();
                g.add_vertices(4);

                g.add_edge(1, 3);
                assert!(g.has_edge(1, 3));
                assert!(!g.has_edge(3, 1));

                g.add_edge(3, 1);
                assert!(g.has_edge(3, 1));
                assert_eq!(g.number_of_edges(), 2);
            }

            #[test]
            fn self_loops_are_ignored() {
                let mut g = <$backend>::default();
                g.add_vertices(3);

                for u in 0..3 {
                    g.add_edge(u, u);
                }

                assert_eq!(g.number_of_edges(), 0);
                for u in 0..3 {
                    assert!(!g.has_edge(u, u));
                    assert_eq!(g.degree_of(u), 0);
                }
            }

            #[test]
            fn duplicate_inserts_collapse() {
                let mut g = <$backend>::default();
                g.add_vertices(3);

                for _ in 0..5 {
                    g.add_edge(0, 1);
                    g.add_edge(2, 1);
                }

                assert_eq!(g.number_of_edges(), 2);
                assert_eq!(g.degree_of(0), 1);
                assert_eq!(g.degree_of(2), 1);
            }

            #[test]
            fn matches_model_on_random_scripts() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for _ in 0..10 {
                    let mut g = <$backend>::default();
                    let mut model: Vec<Vec<bool>> = Vec::new();
                    let mut distinct = 0u64;

                    // interleave growth and insertion phases
                    for _ in 0..3 {
                        let grow = rng.random_range(3..12u32);
                        g.add_vertices(grow);

                        let n = model.len() + grow as usize;
                        for row in model.iter_mut() {
                            row.resize(n, false);
                        }
                        model.resize_with(n, || vec![false; n]);

                        for _ in 0..rng.random_range(0..4 * n as u32) {
                            let u = rng.random_range(0..n as u32);
                            let v = rng.random_range(0..n as u32);
                            g.add_edge(u, v);

                            if u != v && !model[u as usize][v as usize] {
                                model[u as usize][v as usize] = true;
                                distinct += 1;
                            }
                        }
                    }

                    let n = model.len() as u32;
                    assert_eq!(g.number_of_nodes(), n);
                    assert_eq!(g.number_of_edges(), distinct);

                    for u in 0..n {
                        let row = &model[u as usize];
                        let degree = row.iter().filter(|&&b| b).count() as u32;
                        assert_eq!(g.degree_of(u), degree);

                        for v in 0..n {
                            assert_eq!(g.has_edge(u, v), row[v as usize]);
                        }
                    }
                }
            }

            #[test]
            #[should_panic]
            fn add_edge_from_unknown_vertex_panics() {
                let mut g = <$backend>::default();
                g.add_vertices(3);
                g.add_edge(3, 0);
            }

            #[test]
            #[should_panic]
            fn add_edge_to_unknown_vertex_panics() {
                let mut g = <$backend>::default();
                g.add_vertices(3);
                g.add_edge(0, 3);
            }

            #[test]
            #[should_panic]
            fn has_edge_out_of_bounds_panics() {
                let mut g = <$backend>::default();
                g.add_vertices(2);
                let _ = g.has_edge(0, 2);
            }

            #[test]
            #[should_panic]
            fn degree_of_out_of_bounds_panics() {
                let g = <$backend>::default();
                let _ = g.degree_of(0);
            }
        }
    };
}

pub(crate) use test_backend_contract;
