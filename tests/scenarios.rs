use trigraph::{algo::*, prelude::*};

#[test]
fn undirected_two_components() {
    let mut graph = UnGraph::try_new(5).unwrap();
    graph.add_edges([(0, 1), (1, 2), (3, 4)]).unwrap();

    assert_eq!(graph.connected_components(), vec![vec![0, 1, 2], vec![3, 4]]);
    assert_eq!(graph.bfs(0).unwrap(), vec![0, 1, 2]);

    let stats = graph.components_with_stats().unwrap();
    assert_eq!(
        stats,
        vec![
            ComponentStats {
                vertices: vec![0, 1, 2],
                node_count: 3,
                edge_count: 2,
                smallest_vertex: 0,
            },
            ComponentStats {
                vertices: vec![3, 4],
                node_count: 2,
                edge_count: 1,
                smallest_vertex: 3,
            },
        ]
    );
}

#[test]
fn directed_incidence_signs() {
    let graph = GraphConfig::new()
        .vertex_count(3)
        .directed(true)
        .weighted(true)
        .build_with_edges([(0, 1, 4.0), (1, 2, 0.5)])
        .unwrap();

    let incidence = graph.incidence_matrix();
    assert_eq!(incidence.number_of_columns(), 2);
    assert_eq!(incidence.edge_of_column(0), Edge(0, 1));
    assert_eq!(incidence.to_signed_rows(), vec![vec![-1, 0], vec![1, -1], vec![0, 1]]);
}

#[test]
fn adjacency_views_agree() {
    let graph = WeightedUnGraph::from_edges(3, [(2, 0, 1.5), (0, 1, 2.0)]).unwrap();

    let lists = graph.adjacency_list();
    assert_eq!(lists[0], [(1, 2.0), (2, 1.5)]);
    assert_eq!(lists[1], [(0, 2.0)]);

    let matrix = graph.adjacency_matrix();
    assert_eq!(
        matrix.to_rows(),
        vec![vec![0.0, 2.0, 1.5], vec![2.0, 0.0, 0.0], vec![1.5, 0.0, 0.0]]
    );

    let incidence = graph.incidence_matrix();
    assert_eq!(incidence.edges(), &[Edge(0, 1), Edge(0, 2)]);
    assert_eq!(incidence.to_signed_rows(), vec![vec![1, 1], vec![1, 0], vec![0, 1]]);
}

#[test]
fn invalid_calls_fail() {
    assert!(matches!(
        UnGraph::try_new(-1),
        Err(GraphError::InvalidArgument(_))
    ));
    assert!(GraphConfig::new()
        .vertex_count(-1)
        .build()
        .unwrap_err()
        .is_invalid_argument());

    let mut directed = DiGraph::new(5);
    assert!(matches!(
        directed.add_edge(0, 0),
        Err(GraphError::InvalidArgument(_))
    ));
    let mut undirected = WeightedUnGraph::new(5);
    assert!(undirected.add_weighted_edge(3, 3, 2.0).is_err());

    let graph = UnGraph::new(5);
    assert_eq!(
        graph.bfs(99),
        Err(GraphError::IndexOutOfRange {
            vertex: 99,
            vertex_count: 5
        })
    );
    assert!(graph.dfs(99).unwrap_err().is_index_out_of_range());
    assert!(matches!(
        UnGraph::from_edges(5, [(0, 7)]),
        Err(GraphError::IndexOutOfRange { vertex: 7, .. })
    ));
}

#[test]
fn failed_insertion_keeps_graph_unchanged() {
    let mut graph = UnGraph::from_edges(3, [(0, 1)]).unwrap();
    let before = graph.adjacency_list();

    assert!(graph.add_edge(1, 1).is_err());
    assert!(graph.add_edge(1, 3).is_err());

    assert_eq!(graph.adjacency_list(), before);
    assert_eq!(graph.number_of_edges(), 1);
}
