use std::marker::PhantomData;

use tracing::trace;

use crate::testing::test_graph_ops;

use super::*;

/// A graph over the nodes `0..n` whose edge insertion follows the policies `D` and `W`.
///
/// The adjacency store is the only state; all views are derived via [`Representations`].
#[derive(Clone, Debug)]
pub struct Graph<D: Direction, W: Weighting> {
    nbs: Vec<Neighborhood>,
    num_edges: NumEdges,
    _policy: PhantomData<(D, W)>,
}

/// Undirected graph ignoring edge weights
pub type UnGraph = Graph<Undirected, Unweighted>;

/// Directed graph ignoring edge weights
pub type DiGraph = Graph<Directed, Unweighted>;

/// Undirected graph keeping edge weights
pub type WeightedUnGraph = Graph<Undirected, Weighted>;

/// Directed graph keeping edge weights
pub type WeightedDiGraph = Graph<Directed, Weighted>;

impl<D: Direction, W: Weighting> Graph<D, W> {
    /// Returns the adjacency-store entry of `u`
    /// ** Panics if `u >= n` **
    pub fn neighborhood(&self, u: Node) -> &Neighborhood {
        &self.nbs[u as usize]
    }
}

impl<D: Direction, W: Weighting> GraphType for Graph<D, W> {
    fn is_directed(&self) -> bool {
        D::DIRECTED
    }

    fn is_weighted(&self) -> bool {
        W::WEIGHTED
    }
}

impl<D: Direction, W: Weighting> GraphNodeOrder for Graph<D, W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<D: Direction, W: Weighting> GraphEdgeOrder for Graph<D, W> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<D: Direction, W: Weighting> AdjacencyList for Graph<D, W> {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize].weighted_neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<D: Direction, W: Weighting> GraphNew for Graph<D, W> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Neighborhood::new(); n as usize],
            num_edges: 0,
            _policy: PhantomData,
        }
    }
}

impl<D: Direction, W: Weighting> GraphEdgeEditing for Graph<D, W> {
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::invalid_argument(format!(
                "self-loop at vertex {u} is not allowed"
            )));
        }

        // In undirected graphs `(v, u)` is present iff `(u, v)` is
        if !self.nbs[u as usize].has_neighbor(v) {
            self.num_edges += 1;
        }

        let weight = W::normalize(weight);
        D::store(&mut self.nbs, u, v, weight);
        trace!(u, v, weight, directed = D::DIRECTED, "inserted edge");

        Ok(())
    }
}

test_graph_ops!(
    undirected_unweighted,
    UnGraph,
    false,
    false,
    (GraphNew, GraphEdgeEditing, AdjacencyList, AdjacencyMatrix, IncidenceMatrix)
);
test_graph_ops!(
    directed_unweighted,
    DiGraph,
    true,
    false,
    (GraphNew, GraphEdgeEditing, AdjacencyList, AdjacencyMatrix, IncidenceMatrix)
);
test_graph_ops!(
    undirected_weighted,
    WeightedUnGraph,
    false,
    true,
    (GraphNew, GraphEdgeEditing, AdjacencyList, AdjacencyMatrix, IncidenceMatrix)
);
test_graph_ops!(
    directed_weighted,
    WeightedDiGraph,
    true,
    true,
    (GraphNew, GraphEdgeEditing, AdjacencyList, AdjacencyMatrix, IncidenceMatrix)
);
