use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use crate::Node;

/// Weights are stored as plain `f64`. Unweighted graphs store `1.0` for every edge.
pub type Weight = f64;

/// The weight every edge of an unweighted graph carries
pub const UNIT_WEIGHT: Weight = 1.0;

/// An edge is defined by two nodes/endpoints.
/// Whether it is directed is decided by the graph it belongs to.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a weight to the edge
    pub fn with_weight(self, weight: Weight) -> WeightedEdge {
        WeightedEdge { edge: self, weight }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An [`Edge`] together with its weight.
///
/// Ordering compares the endpoints first and falls back to [`f64::total_cmp`] on the weight,
/// so weighted edges can be sorted deterministically even in the presence of `NaN`.
#[derive(Copy, Clone, Debug)]
pub struct WeightedEdge {
    pub edge: Edge,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(u: Node, v: Node, weight: Weight) -> Self {
        Edge(u, v).with_weight(weight)
    }
}

impl PartialEq for WeightedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WeightedEdge {}

impl PartialOrd for WeightedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeightedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.edge
            .cmp(&other.edge)
            .then_with(|| self.weight.total_cmp(&other.weight))
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.edge.0, self.edge.1, self.weight)
    }
}

impl From<Edge> for WeightedEdge {
    fn from(edge: Edge) -> Self {
        edge.with_weight(UNIT_WEIGHT)
    }
}

impl From<(Node, Node)> for WeightedEdge {
    fn from(value: (Node, Node)) -> Self {
        Edge::from(value).into()
    }
}

impl From<&(Node, Node)> for WeightedEdge {
    fn from(value: &(Node, Node)) -> Self {
        Edge::from(value).into()
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_and_reverse() {
        let e = Edge(4, 1);
        assert!(!e.is_normalized());
        assert_eq!(e.normalized(), Edge(1, 4));
        assert_eq!(e.reverse(), Edge(1, 4));
        assert!(Edge(2, 2).is_loop());
        assert_eq!(format!("{e}"), "(4,1)");
    }

    #[test]
    fn weighted_edges_sort_by_endpoints_then_weight() {
        let mut edges = vec![
            WeightedEdge::new(1, 2, 3.0),
            WeightedEdge::new(0, 5, 9.0),
            WeightedEdge::new(1, 2, -1.0),
        ];
        edges.sort();
        assert_eq!(
            edges,
            vec![
                WeightedEdge::new(0, 5, 9.0),
                WeightedEdge::new(1, 2, -1.0),
                WeightedEdge::new(1, 2, 3.0),
            ]
        );
    }

    #[test]
    fn unit_weight_conversion() {
        let e: WeightedEdge = (3, 4).into();
        assert_eq!(e.weight, UNIT_WEIGHT);
        assert_eq!(e.edge, Edge(3, 4));
    }
}
