/*!
Per-component statistics.

The edge count of every component is derived twice: once from the adjacency matrix and once
from the incidence matrix. Both views are derived from the same adjacency store, so the counts
must agree; a disagreement is reported as [`GraphError::InternalConsistencyFault`] instead of
returning a possibly wrong result.
*/

use std::cmp::Ordering;

use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::{error, instrument, trace};

use super::*;

/// Summary of a single connected component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentStats {
    /// The members of the component in increasing order
    pub vertices: Vec<Node>,
    pub node_count: NumNodes,
    /// Undirected edges count once, directed edges count once per orientation
    pub edge_count: NumEdges,
    pub smallest_vertex: Node,
}

impl ComponentStats {
    /// Orders components by size: more nodes first, then more edges first,
    /// then by smallest member
    pub fn cmp_by_size(&self, other: &Self) -> Ordering {
        other
            .node_count
            .cmp(&self.node_count)
            .then_with(|| other.edge_count.cmp(&self.edge_count))
            .then_with(|| self.smallest_vertex.cmp(&other.smallest_vertex))
    }

    /// Returns the number of edges per node pair of the component.
    /// Singletons have a density of `0.0`.
    pub fn density(&self, directed: bool) -> f64 {
        let n = self.node_count as f64;
        let pairs = if directed {
            n * (n - 1.0)
        } else {
            n * (n - 1.0) / 2.0
        };
        if pairs > 0.0 {
            self.edge_count as f64 / pairs
        } else {
            0.0
        }
    }
}

/// Counts the edges with both endpoints in `members` using the adjacency matrix
fn edges_by_adjacency(matrix: &AdjacencyMatrix, members: &NodeBitSet, directed: bool) -> NumEdges {
    members
        .iter_set_bits()
        .map(|u| {
            matrix
                .neighbors_of(u)
                .filter(|&v| members.get_bit(v) && (directed || u < v))
                .count() as NumEdges
        })
        .sum()
}

/// Counts the distinct edges with both endpoints in `members` using the incidence matrix
fn edges_by_incidence(matrix: &IncidenceMatrix, members: &NodeBitSet) -> NumEdges {
    let mut edges = FxHashSet::default();

    for col in 0..matrix.number_of_columns() {
        let endpoints = matrix
            .column(col)
            .filter(|&(w, _)| members.get_bit(w))
            .collect_vec();

        let edge = match endpoints[..] {
            [(u, Incidence::Tail), (v, Incidence::Head)] => Edge(u, v),
            [(v, Incidence::Head), (u, Incidence::Tail)] => Edge(u, v),
            [(u, Incidence::Endpoint), (v, Incidence::Endpoint)] => Edge(u, v).normalized(),
            _ => continue,
        };
        edges.insert(edge);
    }

    edges.len() as NumEdges
}

/// Returns the agreed edge count of the component starting at `smallest_vertex` or fails with
/// [`GraphError::InternalConsistencyFault`] if both derivations disagree
fn check_edge_counts(
    smallest_vertex: Node,
    adjacency_edges: NumEdges,
    incidence_edges: NumEdges,
) -> Result<NumEdges> {
    if adjacency_edges == incidence_edges {
        return Ok(adjacency_edges);
    }

    error!(
        smallest_vertex,
        adjacency_edges, incidence_edges, "edge counts of component disagree"
    );
    Err(GraphError::InternalConsistencyFault {
        smallest_vertex,
        adjacency_edges,
        incidence_edges,
    })
}

/// Provides statistics on the connected components of a graph.
pub trait ComponentStatistics: Connectivity {
    /// Returns one [`ComponentStats`] per connected component, ordered by
    /// [`ComponentStats::cmp_by_size`].
    ///
    /// Fails with [`GraphError::InternalConsistencyFault`] if the adjacency and incidence views
    /// disagree on the number of edges of any component.
    ///
    /// # Examples
    /// ```
    /// use trigraph::{prelude::*, algo::*};
    ///
    /// let g = UnGraph::from_edges(5, [(3, 4), (0, 1), (1, 2)]).unwrap();
    /// let stats = g.components_with_stats().unwrap();
    ///
    /// assert_eq!(stats[0].vertices, vec![0, 1, 2]);
    /// assert_eq!(stats[0].edge_count, 2);
    /// assert_eq!(stats[1].smallest_vertex, 3);
    /// ```
    #[instrument(level = "debug", skip_all, fields(nodes = self.number_of_nodes()))]
    fn components_with_stats(&self) -> Result<Vec<ComponentStats>> {
        let directed = self.is_directed();
        let adjacency = self.adjacency_matrix();
        let incidence = self.incidence_matrix();

        let components = sort_components(ConnectedComponents::new(&incidence).collect_vec());

        let mut stats = Vec::with_capacity(components.len());
        for vertices in components {
            let members =
                NodeBitSet::new_with_bits_set(self.number_of_nodes(), vertices.iter().copied());
            let smallest_vertex = vertices[0];

            let edge_count = check_edge_counts(
                smallest_vertex,
                edges_by_adjacency(&adjacency, &members, directed),
                edges_by_incidence(&incidence, &members),
            )?;

            trace!(
                smallest_vertex,
                nodes = vertices.len(),
                edges = edge_count,
                "component"
            );
            stats.push(ComponentStats {
                node_count: vertices.len() as NumNodes,
                edge_count,
                smallest_vertex,
                vertices,
            });
        }

        stats.sort_by(ComponentStats::cmp_by_size);
        Ok(stats)
    }
}

impl<G: Connectivity> ComponentStatistics for G {}
