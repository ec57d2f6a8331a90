use std::{
    fmt::{Display, Formatter},
    ops::Index,
};

use super::*;

/// Adjacency-matrix view: a dense `n x n` matrix where cell `(u, v)` holds the weight of
/// edge `(u, v)` or `0.0` if there is no such edge.
///
/// Presence of an edge is tracked separately from its weight, so an edge of weight `0.0`
/// (or a negative weight) in a weighted graph is still reported by [`AdjacencyMatrix::has_edge`]
/// and traversed by all algorithms. Only [`AdjacencyMatrix::to_rows`] loses this distinction.
///
/// # Example
/// ```
/// use trigraph::prelude::*;
///
/// let g = WeightedUnGraph::from_edges(3, [(0, 1, 2.5)]).unwrap();
/// let m = g.adjacency_matrix();
///
/// assert_eq!(m[(0, 1)], 2.5);
/// assert_eq!(m[(1, 0)], 2.5);
/// assert!(!m.has_edge(1, 2));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
    n: NumNodes,
    weights: Vec<Weight>,
    present: Vec<NodeBitSet>,
}

impl AdjacencyMatrix {
    /// Creates a matrix over `n` nodes without any edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            weights: vec![0.0; n as usize * n as usize],
            present: vec![NodeBitSet::new(n); n as usize],
        }
    }

    /// Derives the view from the adjacency store of `graph`.
    /// If an edge was inserted multiple times, its most recent weight is used.
    pub fn from_graph<G: AdjacencyList>(graph: &G) -> Self {
        let weighted = graph.is_weighted();
        let mut matrix = Self::new(graph.number_of_nodes());

        for u in graph.vertices() {
            for (v, w) in graph.weighted_neighbors_of(u) {
                matrix.set(u, v, if weighted { w } else { UNIT_WEIGHT });
            }
        }

        matrix
    }

    fn cell(&self, u: Node, v: Node) -> usize {
        assert!(v < self.n, "column {v} is out of range [0, {})", self.n);
        u as usize * self.n as usize + v as usize
    }

    fn set(&mut self, u: Node, v: Node, weight: Weight) {
        let cell = self.cell(u, v);
        self.weights[cell] = weight;
        self.present[u as usize].set_bit(v);
    }

    /// Returns the number of rows (and columns)
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns *true* if the edge `(u, v)` exists.
    /// ** Panics if `u >= n` **
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.present[u as usize].get_bit(v)
    }

    /// Returns the weight of `(u, v)` or `0.0` if the edge does not exist
    /// ** Panics if `u >= n || v >= n` **
    pub fn weight(&self, u: Node, v: Node) -> Weight {
        self.weights[self.cell(u, v)]
    }

    /// Returns row `u`, i.e. the weights of all edges leaving `u`
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Weight] {
        let begin = u as usize * self.n as usize;
        &self.weights[begin..begin + self.n as usize]
    }

    /// Returns all `v` with an edge `(u, v)` in increasing order
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.present[u as usize].iter_set_bits()
    }

    /// Returns the number of (ordered) node pairs `(u, v)` with an edge.
    /// For undirected graphs every edge is counted twice.
    pub fn number_of_entries(&self) -> usize {
        self.present.iter().map(|row| row.cardinality() as usize).sum()
    }

    /// Returns the matrix as plain rows
    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        (0..self.n).map(|u| self.row(u).to_vec()).collect()
    }
}

impl Index<(Node, Node)> for AdjacencyMatrix {
    type Output = Weight;

    /// ** Panics if `u >= n || v >= n` **
    fn index(&self, (u, v): (Node, Node)) -> &Self::Output {
        &self.weights[self.cell(u, v)]
    }
}

impl Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for u in 0..self.n {
            let row = self.row(u);
            for (i, w) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
