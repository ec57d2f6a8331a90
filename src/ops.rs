use std::ops::Range;

use itertools::Itertools;

use crate::{repr::*, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    /// As nodes are never deleted, this is always the full range `0..n`.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `Ok(u)` if `u` is a vertex of the graph and fails with
    /// [`GraphError::IndexOutOfRange`] otherwise
    fn check_vertex(&self, u: Node) -> Result<Node> {
        error::check_vertex(u, self.number_of_nodes())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of logical edges of the graph.
    /// An undirected edge counts once and repeated insertions of the same edge count once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// The two orthogonal properties fixed at construction of every graph
pub trait GraphType {
    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool;

    /// Returns *true* if supplied edge weights are kept.
    /// Otherwise every edge carries [`UNIT_WEIGHT`].
    fn is_weighted(&self) -> bool;
}

/// Traits pertaining getters for neighborhoods & edges of the adjacency store
pub trait AdjacencyList: GraphNodeOrder + GraphType + Sized {
    /// Returns an iterator over `(neighbor, weight)` pairs of a given vertex in insertion order.
    /// ** Panics if `u >= n` **
    ///
    /// For undirected graphs, every edge `{u, v}` shows up at both endpoints.
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over the neighbors of a given vertex in insertion order.
    /// Repeated insertions of the same edge yield the neighbor repeatedly.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the number of entries in the adjacency store of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns all distinct logical edges in sorted order.
    ///
    /// Undirected edges are normalized to `(min, max)`, directed edges keep `(tail, head)`.
    /// This order is also the column order of the incidence matrix.
    fn ordered_edges(&self) -> Vec<Edge> {
        let directed = self.is_directed();
        let mut edges = self
            .vertices()
            .flat_map(|u| self.neighbors_of(u).map(move |v| Edge(u, v)))
            .map(|e| if directed { e } else { e.normalized() })
            .collect_vec();
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// Returns all distinct logical edges in sorted order together with their effective weight
    /// (see [`AdjacencyTest::edge_weight`])
    fn ordered_weighted_edges(&self) -> Vec<WeightedEdge>
    where
        Self: AdjacencyTest,
    {
        self.ordered_edges()
            .into_iter()
            .map(|e| e.with_weight(self.edge_weight(e.0, e.1).unwrap_or(UNIT_WEIGHT)))
            .collect()
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: AdjacencyList {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.neighbors_of(u).any(|w| w == v)
    }

    /// Returns the weight of edge `(u, v)` if it exists.
    /// If the edge was inserted multiple times, the most recent weight wins.
    /// ** Panics if `u >= n` **
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight> {
        self.weighted_neighbors_of(u)
            .filter(|&(w, _)| w == v)
            .last()
            .map(|(_, weight)| if self.is_weighted() { weight } else { UNIT_WEIGHT })
    }
}

impl<G: AdjacencyList> AdjacencyTest for G {}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;

    /// Creates an empty graph from a signed vertex count.
    /// Fails with [`GraphError::InvalidArgument`] if the count is negative or too large.
    fn try_new(vertex_count: i64) -> Result<Self> {
        Ok(Self::new(vertex_count_from_signed(vertex_count)?))
    }
}

/// Converts a signed vertex count into [`NumNodes`]
pub(crate) fn vertex_count_from_signed(vertex_count: i64) -> Result<NumNodes> {
    if vertex_count < 0 {
        return Err(GraphError::invalid_argument(format!(
            "vertex count must be non-negative, got {vertex_count}"
        )));
    }

    NumNodes::try_from(vertex_count)
        .ok()
        .filter(|&n| n != INVALID_NODE)
        .ok_or_else(|| {
            GraphError::invalid_argument(format!("vertex count {vertex_count} is too large"))
        })
}

/// Provides functions to insert edges. There is no way to remove an edge.
pub trait GraphEdgeEditing {
    /// Adds the edge *(u,v)* with the given weight to the graph.
    /// Unweighted graphs store [`UNIT_WEIGHT`] instead of `weight`.
    ///
    /// Fails with [`GraphError::IndexOutOfRange`] if `u >= n || v >= n`
    /// and with [`GraphError::InvalidArgument`] if `u == v`.
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<()>;

    /// Adds the edge *(u,v)* with weight [`UNIT_WEIGHT`].
    /// Fails exactly as [`GraphEdgeEditing::add_weighted_edge`].
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.add_weighted_edge(u, v, UNIT_WEIGHT)
    }

    /// Adds all edges in the collection and stops at the first edge that cannot be inserted.
    /// Edges preceding the failing one remain inserted.
    fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge>,
    {
        for WeightedEdge {
            edge: Edge(u, v),
            weight,
        } in edges.into_iter().map(Into::into)
        {
            self.add_weighted_edge(u, v, weight)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and a collection of (weighted) edges
    fn from_edges<I>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<I>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}

/// The three interchangeable views on a graph.
///
/// Every call derives a fresh, owned value from the current adjacency store.
/// Nothing is cached, so a view never goes stale and mutating it never affects the graph.
pub trait Representations: AdjacencyList {
    /// Returns every neighborhood sorted by `(neighbor, weight)`
    fn adjacency_list(&self) -> NeighborLists {
        NeighborLists::from_graph(self)
    }

    /// Returns the dense `n x n` matrix of edge weights
    fn adjacency_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from_graph(self)
    }

    /// Returns the `n x m` matrix with one column per distinct logical edge
    fn incidence_matrix(&self) -> IncidenceMatrix {
        IncidenceMatrix::from_graph(self)
    }
}

impl<G: AdjacencyList> Representations for G {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_vertex_counts() {
        assert_eq!(vertex_count_from_signed(0), Ok(0));
        assert_eq!(vertex_count_from_signed(7), Ok(7));
        assert!(vertex_count_from_signed(-1).unwrap_err().is_invalid_argument());
        assert!(
            vertex_count_from_signed(i64::from(u32::MAX))
                .unwrap_err()
                .is_invalid_argument()
        );
    }
}
