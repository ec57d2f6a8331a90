use std::iter::FusedIterator;

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Provides the weakly connected components of a graph.
pub trait Connectivity: Representations {
    /// Partitions all nodes into maximal connected subsets, ignoring edge direction.
    ///
    /// Each component is sorted increasingly and components are sorted by their smallest
    /// member. Isolated nodes form singleton components.
    ///
    /// # Examples
    /// ```
    /// use trigraph::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges(5, [(1, 0), (3, 4)]).unwrap();
    /// assert_eq!(g.connected_components(), vec![vec![0, 1], vec![2], vec![3, 4]]);
    /// ```
    fn connected_components(&self) -> Vec<Vec<Node>> {
        let matrix = self.incidence_matrix();
        let components = sort_components(ConnectedComponents::new(&matrix).collect_vec());
        debug!(
            nodes = self.number_of_nodes(),
            components = components.len(),
            "computed connected components"
        );
        components
    }

    /// Returns the number of connected components
    fn number_of_connected_components(&self) -> usize {
        ConnectedComponents::new(&self.incidence_matrix()).count()
    }

    /// Returns *true* if the graph has at most one connected component
    fn is_connected(&self) -> bool {
        self.number_of_connected_components() <= 1
    }
}

impl<G: Representations> Connectivity for G {}

/// Iterator over the connected components of the graph an [`IncidenceMatrix`] was derived from.
///
/// Components are discovered by walking edge columns: from a node `u`, every column `u` is
/// incident to leads to the opposite endpoint(s) of that column. Tails lead to heads and heads
/// lead to tails, so directed graphs yield their weakly connected components.
///
/// Components are yielded in order of their smallest node; their members are unordered.
pub struct ConnectedComponents<'a> {
    matrix: &'a IncidenceMatrix,
    visited: NodeBitSet,
    stack: Vec<Node>,
    next_root: Node,
}

impl<'a> ConnectedComponents<'a> {
    pub fn new(matrix: &'a IncidenceMatrix) -> Self {
        Self {
            matrix,
            visited: NodeBitSet::new(matrix.number_of_nodes()),
            stack: Vec::new(),
            next_root: 0,
        }
    }
}

impl Iterator for ConnectedComponents<'_> {
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let matrix = self.matrix;
        let n = matrix.number_of_nodes();
        while self.next_root < n && self.visited.get_bit(self.next_root) {
            self.next_root += 1;
        }
        if self.next_root == n {
            return None;
        }

        let root = self.next_root;
        self.visited.set_bit(root);
        self.stack.push(root);

        let mut component = vec![root];
        while let Some(u) = self.stack.pop() {
            for col in matrix.columns_at(u) {
                for v in matrix.opposite_endpoints(col, u) {
                    if !self.visited.set_bit(v) {
                        component.push(v);
                        self.stack.push(v);
                    }
                }
            }
        }

        Some(component)
    }
}

impl FusedIterator for ConnectedComponents<'_> {}

/// Sorts the nodes in each component increasingly and then the components by their first node.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a.first().cmp(&b.first()));
    components
}
