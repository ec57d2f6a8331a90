/// Generates randomized consistency tests of the adjacency store and all derived views
/// for a given graph type.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $directed:literal, $weighted:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates `m` random loop-free edges with integral weights in `1..=9` for nodes `0..n`.
            /// Edges may repeat.
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<WeightedEdge> {
                (0..m).filter_map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let w = rng.random_range(1..=9) as Weight;
                    (u != v).then(|| WeightedEdge::new(u, v, w))
                }).collect_vec()
            }

            /// The stored weight of an edge inserted with weight `w`
            fn effective(w: Weight) -> Weight {
                if $weighted { w } else { UNIT_WEIGHT }
            }

            /// The logical edge an inserted edge collapses into
            fn logical(e: Edge) -> Edge {
                if $directed { e } else { e.normalized() }
            }

            fn random_graphs() -> impl Iterator<Item = (NumNodes, Vec<WeightedEdge>, $graph)> {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);
                let mut graphs = Vec::new();

                for n in [2 as NumNodes, 10, 20] {
                    for m in [n / 2, n * 2, n * 5] {
                        for _ in 0..5 {
                            let edges = random_edges(rng, n, m as NumEdges);
                            let graph = <$graph>::from_edges(n, edges.clone()).unwrap();
                            graphs.push((n, edges, graph));
                        }
                    }
                }

                graphs.into_iter()
            }

            #[test]
            fn graph_type() {
                let graph = <$graph>::new(3);
                assert_eq!(graph.is_directed(), $directed);
                assert_eq!(graph.is_weighted(), $weighted);
            }

            $(
                test_graph_ops!($graph<$directed, $weighted>: $trait);
            )*
        }
    };
    ($graph:ident<$directed:literal, $weighted:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.adjacency_list().len(), n as usize);
                assert_eq!(graph.incidence_matrix().number_of_columns(), 0);
                assert!(graph.adjacency_matrix().to_rows().iter().flatten().all(|&w| w == 0.0));
            }
        }
    };
    ($graph:ident<$directed:literal, $weighted:literal>: GraphEdgeEditing) => {
        #[test]
        fn graph_edge_editing() {
            for (n, edges, mut graph) in random_graphs() {
                let mut distinct = edges.iter().map(|e| logical(e.edge)).collect_vec();
                distinct.sort_unstable();
                distinct.dedup();

                assert_eq!(graph.number_of_edges() as usize, distinct.len());
                assert_eq!(graph.ordered_edges(), distinct);

                let m = graph.number_of_edges();
                for u in 0..n {
                    assert!(graph.add_edge(u, u).unwrap_err().is_invalid_argument());
                    assert!(graph.add_edge(u, n).unwrap_err().is_index_out_of_range());
                    assert!(graph.add_edge(n + u, u).unwrap_err().is_index_out_of_range());
                }
                assert_eq!(graph.number_of_edges(), m);
            }
        }
    };
    ($graph:ident<$directed:literal, $weighted:literal>: AdjacencyList) => {
        #[test]
        fn adjacency_list() {
            for (n, edges, graph) in random_graphs() {
                let mut expected: Vec<Vec<(Node, Weight)>> = vec![Vec::new(); n as usize];
                for &WeightedEdge { edge: Edge(u, v), weight } in &edges {
                    expected[u as usize].push((v, effective(weight)));
                    if !$directed {
                        expected[v as usize].push((u, effective(weight)));
                    }
                }
                for nbs in expected.iter_mut() {
                    nbs.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
                }

                let lists = graph.adjacency_list();
                assert_eq!(lists.len(), n as usize);
                for u in 0..n {
                    assert_eq!(lists[u], expected[u as usize][..]);
                    assert_eq!(graph.degree_of(u) as usize, expected[u as usize].len());
                }
            }
        }
    };
    ($graph:ident<$directed:literal, $weighted:literal>: AdjacencyMatrix) => {
        #[test]
        fn adjacency_matrix() {
            for (n, edges, graph) in random_graphs() {
                let mut expected = vec![vec![0.0; n as usize]; n as usize];
                for &WeightedEdge { edge: Edge(u, v), weight } in &edges {
                    expected[u as usize][v as usize] = effective(weight);
                    if !$directed {
                        expected[v as usize][u as usize] = effective(weight);
                    }
                }

                let matrix = graph.adjacency_matrix();
                assert_eq!(matrix.to_rows(), expected);

                for u in 0..n {
                    for v in 0..n {
                        assert_eq!(matrix.has_edge(u, v), graph.has_edge(u, v));
                        if !$directed {
                            assert_eq!(matrix[(u, v)], matrix[(v, u)]);
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$directed:literal, $weighted:literal>: IncidenceMatrix) => {
        #[test]
        fn incidence_matrix() {
            for (n, _, graph) in random_graphs() {
                let matrix = graph.incidence_matrix();
                let edges = graph.ordered_edges();

                assert_eq!(matrix.number_of_nodes(), n);
                assert_eq!(matrix.number_of_columns(), graph.number_of_edges() as usize);
                assert_eq!(matrix.edges(), &edges[..]);

                let rows = matrix.to_signed_rows();
                for (col, &Edge(u, v)) in edges.iter().enumerate() {
                    let column = matrix.column(col).collect_vec();
                    assert_eq!(column.len(), 2);

                    if $directed {
                        assert_eq!(rows[u as usize][col], -1);
                        assert_eq!(rows[v as usize][col], 1);
                    } else {
                        assert!(u < v);
                        assert_eq!(rows[u as usize][col], 1);
                        assert_eq!(rows[v as usize][col], 1);
                    }

                    let nonzero = (0..n).filter(|&w| rows[w as usize][col] != 0).count();
                    assert_eq!(nonzero, 2);
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
