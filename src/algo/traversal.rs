/*!
Graph traversals over the adjacency-matrix view.

This module provides:
- [`MatrixBfs`] and [`MatrixDfs`], lazy iterators over an [`AdjacencyMatrix`] that yield
  nodes in discovery order,
- the [`Traversal`] trait exposing `bfs` / `dfs` directly as methods on graphs.

Both traversals consider the neighbors of a node in increasing id order.
The depth-first search keeps an explicit stack of frames instead of recursing, so the
depth of the search is only bounded by available memory.
*/

use std::collections::VecDeque;

use tracing::debug;

use super::*;

/// Common interface for querying the visited-state of a traversal.
pub trait TraversalState {
    /// Returns the set of nodes discovered so far
    fn visited(&self) -> &NodeBitSet;

    /// Checks if a given node `u` has already been discovered
    fn did_visit_node(&self, u: Node) -> bool {
        self.visited().get_bit(u)
    }
}

/// Breadth-first search over an [`AdjacencyMatrix`].
///
/// Every node is marked when it is enqueued, so each reachable node is yielded exactly once.
pub struct MatrixBfs<'a> {
    matrix: &'a AdjacencyMatrix,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a> MatrixBfs<'a> {
    /// Creates a new search starting at `start`.
    /// Fails with [`GraphError::IndexOutOfRange`] if `start` is not a node of the matrix.
    pub fn new(matrix: &'a AdjacencyMatrix, start: Node) -> Result<Self> {
        let start = error::check_vertex(start, matrix.number_of_nodes())?;
        let mut visited = NodeBitSet::new(matrix.number_of_nodes());
        visited.set_bit(start);

        Ok(Self {
            matrix,
            visited,
            queue: VecDeque::from([start]),
        })
    }
}

impl TraversalState for MatrixBfs<'_> {
    fn visited(&self) -> &NodeBitSet {
        &self.visited
    }
}

impl Iterator for MatrixBfs<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.matrix.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let undiscovered = self.visited.number_of_bits() - self.visited.cardinality();
        (
            self.queue.len(),
            Some(self.queue.len() + undiscovered as usize),
        )
    }
}

/// A node on the stack of [`MatrixDfs`] together with the smallest neighbor id that was not
/// yet considered.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: Node,
    next_candidate: Node,
}

/// Depth-first search over an [`AdjacencyMatrix`].
///
/// Produces the same order as the recursive formulation: each node descends into its
/// smallest unvisited neighbor and only continues with the next one after that subtree is
/// fully explored.
pub struct MatrixDfs<'a> {
    matrix: &'a AdjacencyMatrix,
    visited: NodeBitSet,
    stack: Vec<Frame>,
    start: Option<Node>,
}

impl<'a> MatrixDfs<'a> {
    /// Creates a new search starting at `start`.
    /// Fails with [`GraphError::IndexOutOfRange`] if `start` is not a node of the matrix.
    pub fn new(matrix: &'a AdjacencyMatrix, start: Node) -> Result<Self> {
        let start = error::check_vertex(start, matrix.number_of_nodes())?;
        let mut visited = NodeBitSet::new(matrix.number_of_nodes());
        visited.set_bit(start);

        Ok(Self {
            matrix,
            visited,
            stack: Vec::new(),
            start: Some(start),
        })
    }

    /// Returns the current depth of the search, i.e. the length of the path from the start
    /// node to the most recently yielded node that is still being explored
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    fn enter(&mut self, u: Node) -> Node {
        self.stack.push(Frame {
            node: u,
            next_candidate: 0,
        });
        u
    }
}

impl TraversalState for MatrixDfs<'_> {
    fn visited(&self) -> &NodeBitSet {
        &self.visited
    }
}

impl Iterator for MatrixDfs<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(self.enter(start));
        }

        while let Some(frame) = self.stack.last_mut() {
            let visited = &self.visited;
            let candidate = self
                .matrix
                .neighbors_of(frame.node)
                .find(|&v| v >= frame.next_candidate && !visited.get_bit(v));

            match candidate {
                Some(v) => {
                    frame.next_candidate = v + 1;
                    self.visited.set_bit(v);
                    return Some(self.enter(v));
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

/// Provides BFS and DFS directly on graphs.
///
/// Both derive a fresh [`AdjacencyMatrix`] and traverse it; see [`MatrixBfs`] and
/// [`MatrixDfs`] to traverse an existing matrix lazily.
pub trait Traversal: Representations {
    /// Returns all nodes reachable from `start` in **breadth-first order**.
    /// Fails with [`GraphError::IndexOutOfRange`] if `start >= n`.
    ///
    /// Traversal follows edge presence, not the sign of the weight: edges of weight `0.0`
    /// or below are traversed like any other edge.
    ///
    /// # Examples
    /// ```
    /// use trigraph::{prelude::*, algo::*};
    ///
    /// let g = UnGraph::from_edges(4, [(0, 2), (0, 1), (1, 3)]).unwrap();
    /// assert_eq!(g.bfs(0).unwrap(), vec![0, 1, 2, 3]);
    /// ```
    fn bfs(&self, start: Node) -> Result<Vec<Node>> {
        self.check_vertex(start)?;
        let matrix = self.adjacency_matrix();
        let order: Vec<Node> = MatrixBfs::new(&matrix, start)?.collect();
        debug!(start, reached = order.len(), "bfs finished");
        Ok(order)
    }

    /// Returns all nodes reachable from `start` in **depth-first order**.
    /// Fails with [`GraphError::IndexOutOfRange`] if `start >= n`.
    ///
    /// # Examples
    /// ```
    /// use trigraph::{prelude::*, algo::*};
    ///
    /// let g = UnGraph::from_edges(4, [(0, 2), (0, 1), (1, 3)]).unwrap();
    /// assert_eq!(g.dfs(0).unwrap(), vec![0, 1, 3, 2]);
    /// ```
    fn dfs(&self, start: Node) -> Result<Vec<Node>> {
        self.check_vertex(start)?;
        let matrix = self.adjacency_matrix();
        let order: Vec<Node> = MatrixDfs::new(&matrix, start)?.collect();
        debug!(start, reached = order.len(), "dfs finished");
        Ok(order)
    }

    /// Returns *true* if there is a (directed) path from `u` to `v`.
    /// Fails with [`GraphError::IndexOutOfRange`] if `u >= n || v >= n`.
    fn is_reachable(&self, u: Node, v: Node) -> Result<bool> {
        self.check_vertex(v)?;
        Ok(self.bfs(u)?.contains(&v))
    }
}

impl<G: Representations> Traversal for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph =
            UnGraph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]).unwrap();

        assert_eq!(graph.bfs(1).unwrap(), vec![1, 0, 2, 5, 4, 3]);
        assert_eq!(graph.bfs(3).unwrap(), vec![3, 4, 2, 5, 1, 0]);
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = UnGraph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]).unwrap();

        assert_eq!(graph.dfs(1).unwrap(), vec![1, 0, 5, 4, 3, 2]);
        assert_eq!(graph.dfs(5).unwrap(), vec![5, 0, 1, 2, 4, 3]);
    }

    #[test]
    fn dfs_backtracks_before_next_sibling() {
        // 0 -> {1, 2}, 1 -> 3, 3 -> 2
        let graph = DiGraph::from_edges(4, [(0, 1), (0, 2), (1, 3), (3, 2)]).unwrap();

        assert_eq!(graph.dfs(0).unwrap(), vec![0, 1, 3, 2]);
        assert_eq!(graph.bfs(0).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn directed_traversals_follow_orientation() {
        let graph = DiGraph::from_edges(4, [(0, 1), (2, 1), (1, 3)]).unwrap();

        assert_eq!(graph.bfs(0).unwrap(), vec![0, 1, 3]);
        assert_eq!(graph.dfs(2).unwrap(), vec![2, 1, 3]);
        assert_eq!(graph.bfs(3).unwrap(), vec![3]);
        assert!(graph.is_reachable(2, 3).unwrap());
        assert!(!graph.is_reachable(3, 0).unwrap());
    }

    #[test]
    fn disconnected_graph_reaches_only_component() {
        let graph = UnGraph::from_edges(5, [(0, 1), (1, 2), (3, 4)]).unwrap();

        assert_eq!(graph.bfs(0).unwrap(), vec![0, 1, 2]);
        assert_eq!(graph.dfs(4).unwrap(), vec![4, 3]);
    }

    #[test]
    fn weights_do_not_affect_traversal() {
        let graph =
            WeightedUnGraph::from_edges(3, [(0, 2, 0.0), (0, 1, -4.0), (1, 2, 9.0)]).unwrap();

        assert_eq!(graph.bfs(2).unwrap(), vec![2, 0, 1]);
        assert_eq!(graph.dfs(2).unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn start_out_of_range() {
        let graph = UnGraph::new(5);
        assert_eq!(
            graph.bfs(99),
            Err(GraphError::IndexOutOfRange {
                vertex: 99,
                vertex_count: 5
            })
        );
        assert!(graph.dfs(5).unwrap_err().is_index_out_of_range());
        assert!(graph.is_reachable(0, 5).unwrap_err().is_index_out_of_range());
        assert!(UnGraph::new(0).bfs(0).is_err());
    }

    #[test]
    fn lazy_iterators_track_state() {
        let graph = UnGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let matrix = graph.adjacency_matrix();

        let mut bfs = MatrixBfs::new(&matrix, 0).unwrap();
        assert_eq!(bfs.next(), Some(0));
        assert!(bfs.did_visit_node(1));
        assert!(!bfs.did_visit_node(2));
        assert_eq!(bfs.size_hint(), (1, Some(3)));
        assert_eq!(bfs.collect_vec(), vec![1, 2, 3]);

        let mut dfs = MatrixDfs::new(&matrix, 0).unwrap();
        assert_eq!(dfs.by_ref().take(3).collect_vec(), vec![0, 1, 2]);
        assert_eq!(dfs.depth(), 2);
        assert!(!dfs.did_visit_node(3));
        assert_eq!(dfs.next(), Some(3));
        assert_eq!(dfs.next(), None);
    }

    #[test]
    fn dfs_handles_long_paths() {
        let n: Node = 2_000;
        let graph = DiGraph::from_edges(n, (1..n).map(|u| (u - 1, u))).unwrap();
        let matrix = graph.adjacency_matrix();

        let order = MatrixDfs::new(&matrix, 0).unwrap().collect_vec();
        assert_eq!(order, (0..n).collect_vec());
    }
}
