use super::*;

/// A graph whose direction and weighting are chosen at runtime.
///
/// Each variant wraps the corresponding statically-typed [`Graph`] and all operations are
/// forwarded to it, so a `DynGraph` behaves exactly like the graph it wraps.
#[derive(Clone, Debug)]
pub enum DynGraph {
    Undirected(UnGraph),
    Directed(DiGraph),
    WeightedUndirected(WeightedUnGraph),
    WeightedDirected(WeightedDiGraph),
}

macro_rules! dispatch {
    ($self:expr, $graph:ident => $body:expr) => {
        match $self {
            DynGraph::Undirected($graph) => $body,
            DynGraph::Directed($graph) => $body,
            DynGraph::WeightedUndirected($graph) => $body,
            DynGraph::WeightedDirected($graph) => $body,
        }
    };
}

impl DynGraph {
    /// Creates an empty graph with `n` singleton nodes and the given policies
    pub fn new(n: NumNodes, directed: bool, weighted: bool) -> Self {
        match (directed, weighted) {
            (false, false) => Self::Undirected(UnGraph::new(n)),
            (true, false) => Self::Directed(DiGraph::new(n)),
            (false, true) => Self::WeightedUndirected(WeightedUnGraph::new(n)),
            (true, true) => Self::WeightedDirected(WeightedDiGraph::new(n)),
        }
    }

    /// Creates an empty graph from a signed vertex count.
    /// Fails with [`GraphError::InvalidArgument`] if the count is negative.
    pub fn try_new(vertex_count: i64, directed: bool, weighted: bool) -> Result<Self> {
        Ok(Self::new(
            vertex_count_from_signed(vertex_count)?,
            directed,
            weighted,
        ))
    }

    /// Returns the adjacency-store entry of `u`
    /// ** Panics if `u >= n` **
    pub fn neighborhood(&self, u: Node) -> &Neighborhood {
        dispatch!(self, g => g.neighborhood(u))
    }
}

impl GraphType for DynGraph {
    fn is_directed(&self) -> bool {
        dispatch!(self, g => g.is_directed())
    }

    fn is_weighted(&self) -> bool {
        dispatch!(self, g => g.is_weighted())
    }
}

impl GraphNodeOrder for DynGraph {
    fn number_of_nodes(&self) -> NumNodes {
        dispatch!(self, g => g.number_of_nodes())
    }
}

impl GraphEdgeOrder for DynGraph {
    fn number_of_edges(&self) -> NumEdges {
        dispatch!(self, g => g.number_of_edges())
    }
}

impl AdjacencyList for DynGraph {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.neighborhood(u).weighted_neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighborhood(u).num_of_neighbors()
    }
}

impl GraphEdgeEditing for DynGraph {
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<()> {
        dispatch!(self, g => g.add_weighted_edge(u, v, weight))
    }
}

macro_rules! impl_from_graph {
    ($($variant:ident($graph:ty)),*) => {
        $(
            impl From<$graph> for DynGraph {
                fn from(graph: $graph) -> Self {
                    Self::$variant(graph)
                }
            }
        )*
    };
}

impl_from_graph!(
    Undirected(UnGraph),
    Directed(DiGraph),
    WeightedUndirected(WeightedUnGraph),
    WeightedDirected(WeightedDiGraph)
);

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn variants_follow_flags() {
        for directed in [false, true] {
            for weighted in [false, true] {
                let mut graph = DynGraph::new(3, directed, weighted);
                assert_eq!(graph.is_directed(), directed);
                assert_eq!(graph.is_weighted(), weighted);

                graph.add_weighted_edge(0, 1, 4.0).unwrap();
                assert_eq!(graph.has_edge(1, 0), !directed);
                assert_eq!(
                    graph.adjacency_matrix()[(0, 1)],
                    if weighted { 4.0 } else { 1.0 }
                );
                assert_eq!(graph.number_of_edges(), 1);
            }
        }
    }

    #[test]
    fn behaves_like_wrapped_graph() {
        let typed = UnGraph::from_edges(4, [(0, 1), (3, 1)]).unwrap();
        let dynamic = DynGraph::from(typed.clone());

        assert_eq!(dynamic.adjacency_list(), typed.adjacency_list());
        assert_eq!(dynamic.adjacency_matrix(), typed.adjacency_matrix());
        assert_eq!(dynamic.incidence_matrix(), typed.incidence_matrix());
        assert_eq!(
            dynamic.neighbors_of(1).collect_vec(),
            typed.neighbors_of(1).collect_vec()
        );
    }

    #[test]
    fn try_new_rejects_negative_counts() {
        assert!(
            DynGraph::try_new(-1, true, true)
                .unwrap_err()
                .is_invalid_argument()
        );
        assert_eq!(DynGraph::try_new(5, false, false).unwrap().len(), 5);
    }
}
