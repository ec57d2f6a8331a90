use std::{
    fmt::{Display, Formatter},
    ops::Index,
};

use super::*;

/// The role a node plays in an edge, i.e. the content of a single incidence-matrix cell
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Incidence {
    /// The node is not an endpoint of the edge
    #[default]
    None,
    /// The node is the source of a directed edge (`-1`)
    Tail,
    /// The node is the target of a directed edge (`+1`)
    Head,
    /// The node is one of the two endpoints of an undirected edge (`+1`)
    Endpoint,
}

impl Incidence {
    /// Returns the signed integer representation of the cell
    pub fn sign(self) -> i8 {
        match self {
            Self::None => 0,
            Self::Tail => -1,
            Self::Head | Self::Endpoint => 1,
        }
    }

    /// Returns *true* if the node is an endpoint of the edge
    pub fn is_incident(self) -> bool {
        self != Self::None
    }

    /// Returns the role of the opposite endpoint of the same edge
    pub fn opposite(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Tail => Self::Head,
            Self::Head => Self::Tail,
            Self::Endpoint => Self::Endpoint,
        }
    }
}

impl Display for Incidence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sign())
    }
}

/// Incidence-matrix view: `n` rows, one column per distinct logical edge.
///
/// Columns are ordered by their edge, i.e. lexicographically by `(tail, head)` for directed
/// graphs and by `(min, max)` for undirected graphs. An undirected edge is stored at both of
/// its endpoints in the adjacency store but still yields exactly one column.
///
/// # Example
/// ```
/// use trigraph::prelude::*;
///
/// let g = DiGraph::from_edges(3, [(1, 2), (0, 1)]).unwrap();
/// let m = g.incidence_matrix();
///
/// assert_eq!(m.edges(), &[Edge(0, 1), Edge(1, 2)]);
/// assert_eq!(m.to_signed_rows(), vec![vec![-1, 0], vec![1, -1], vec![0, 1]]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncidenceMatrix {
    n: NumNodes,
    edges: Vec<Edge>,
    cells: Vec<Incidence>,
}

impl IncidenceMatrix {
    /// Derives the view from the adjacency store of `graph`
    pub fn from_graph<G: AdjacencyList>(graph: &G) -> Self {
        Self::from_ordered_edges(
            graph.number_of_nodes(),
            graph.ordered_edges(),
            graph.is_directed(),
        )
    }

    /// Builds the matrix from distinct, sorted, loop-free edges
    fn from_ordered_edges(n: NumNodes, edges: Vec<Edge>, directed: bool) -> Self {
        let m = edges.len();
        let mut cells = vec![Incidence::None; n as usize * m];

        for (col, &Edge(u, v)) in edges.iter().enumerate() {
            debug_assert!(u != v);
            let (at_u, at_v) = if directed {
                (Incidence::Tail, Incidence::Head)
            } else {
                (Incidence::Endpoint, Incidence::Endpoint)
            };
            cells[u as usize * m + col] = at_u;
            cells[v as usize * m + col] = at_v;
        }

        Self { n, edges, cells }
    }

    /// Returns the number of rows
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the number of columns, i.e. the number of distinct logical edges
    pub fn number_of_columns(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edge of every column in column order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the edge represented by column `col`
    /// ** Panics if `col >= m` **
    pub fn edge_of_column(&self, col: usize) -> Edge {
        self.edges[col]
    }

    /// Returns the cell at row `u` and column `col`
    /// ** Panics if `u >= n || col >= m` **
    pub fn get(&self, u: Node, col: usize) -> Incidence {
        self[(u, col)]
    }

    /// Returns row `u`
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Incidence] {
        let m = self.number_of_columns();
        let begin = u as usize * m;
        &self.cells[begin..begin + m]
    }

    /// Returns all columns in which `u` is an endpoint in increasing order
    /// ** Panics if `u >= n` **
    pub fn columns_at(&self, u: Node) -> impl Iterator<Item = usize> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| cell.is_incident().then_some(col))
    }

    /// Returns all non-empty cells of column `col` as `(node, role)` pairs by increasing node.
    /// ** Panics if `col >= m` **
    pub fn column(&self, col: usize) -> impl Iterator<Item = (Node, Incidence)> + '_ {
        assert!(col < self.number_of_columns());
        (0..self.n).filter_map(move |w| {
            let cell = self.get(w, col);
            cell.is_incident().then_some((w, cell))
        })
    }

    /// Returns the endpoints of column `col` that are opposite to `u`.
    ///
    /// The opposite role is read from the cell of `u`: a tail leads to heads, a head to tails
    /// and an undirected endpoint to the other endpoint. Hence direction is ignored.
    /// If `u` is not incident to `col`, nothing is returned.
    /// ** Panics if `u >= n || col >= m` **
    pub fn opposite_endpoints(&self, col: usize, u: Node) -> impl Iterator<Item = Node> + '_ {
        let role = self.get(u, col);
        let wanted = role.opposite();
        self.column(col)
            .filter(move |&(w, cell)| role.is_incident() && w != u && cell == wanted)
            .map(|(w, _)| w)
    }

    /// Returns the matrix as plain rows of `-1 / 0 / +1`
    pub fn to_signed_rows(&self) -> Vec<Vec<i8>> {
        (0..self.n)
            .map(|u| self.row(u).iter().map(|cell| cell.sign()).collect())
            .collect()
    }
}

impl Index<(Node, usize)> for IncidenceMatrix {
    type Output = Incidence;

    /// ** Panics if `u >= n || col >= m` **
    fn index(&self, (u, col): (Node, usize)) -> &Self::Output {
        assert!(col < self.number_of_columns());
        &self.cells[u as usize * self.number_of_columns() + col]
    }
}

impl Display for IncidenceMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for u in 0..self.n {
            for (i, cell) in self.row(u).iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>2}", cell.sign())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn directed_columns_mark_tail_and_head() {
        let graph = DiGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let matrix = graph.incidence_matrix();

        assert_eq!(matrix.number_of_columns(), 2);
        assert_eq!(matrix.edge_of_column(0), Edge(0, 1));
        assert_eq!(matrix.get(0, 0), Incidence::Tail);
        assert_eq!(matrix.get(1, 0), Incidence::Head);
        assert_eq!(matrix.get(2, 0), Incidence::None);
        assert_eq!(matrix[(0, 0)].sign(), -1);
        assert_eq!(matrix[(1, 0)].sign(), 1);
    }

    #[test]
    fn undirected_edge_yields_single_column() {
        let graph = UnGraph::from_edges(4, [(3, 1), (1, 3), (0, 2), (2, 1)]).unwrap();
        let matrix = graph.incidence_matrix();

        assert_eq!(matrix.edges(), &[Edge(0, 2), Edge(1, 2), Edge(1, 3)]);
        assert_eq!(
            matrix.to_signed_rows(),
            vec![
                vec![1, 0, 0],
                vec![0, 1, 1],
                vec![1, 1, 0],
                vec![0, 0, 1]
            ]
        );
        assert!(matrix.row(1).iter().all(|&c| c != Incidence::Tail));
    }

    #[test]
    fn antiparallel_directed_edges_are_distinct_columns() {
        let graph = DiGraph::from_edges(2, [(1, 0), (0, 1), (1, 0)]).unwrap();
        let matrix = graph.incidence_matrix();

        assert_eq!(matrix.edges(), &[Edge(0, 1), Edge(1, 0)]);
        assert_eq!(matrix.to_signed_rows(), vec![vec![-1, 1], vec![1, -1]]);
    }

    #[test]
    fn walking_columns() {
        let graph = DiGraph::from_edges(4, [(0, 1), (2, 1), (1, 3)]).unwrap();
        let matrix = graph.incidence_matrix();
        // columns: (0,1), (1,3), (2,1)

        assert_eq!(matrix.columns_at(1).collect_vec(), vec![0, 1, 2]);
        assert_eq!(matrix.columns_at(3).collect_vec(), vec![1]);

        assert_eq!(matrix.opposite_endpoints(0, 1).collect_vec(), vec![0]);
        assert_eq!(matrix.opposite_endpoints(0, 0).collect_vec(), vec![1]);
        assert_eq!(matrix.opposite_endpoints(2, 1).collect_vec(), vec![2]);
        assert_eq!(matrix.opposite_endpoints(1, 3).collect_vec(), vec![1]);
        assert_eq!(matrix.opposite_endpoints(1, 0).count(), 0);

        assert_eq!(
            matrix.column(2).collect_vec(),
            vec![(1, Incidence::Head), (2, Incidence::Tail)]
        );
    }

    #[test]
    fn incidence_roles() {
        assert_eq!(Incidence::Tail.opposite(), Incidence::Head);
        assert_eq!(Incidence::Head.opposite(), Incidence::Tail);
        assert_eq!(Incidence::Endpoint.opposite(), Incidence::Endpoint);
        assert!(!Incidence::None.is_incident());
        assert_eq!(Incidence::default().sign(), 0);
    }

    #[test]
    fn display() {
        let graph = DiGraph::from_edges(2, [(0, 1)]).unwrap();
        assert_eq!(format!("{}", graph.incidence_matrix()), "-1\n 1\n");
    }

    #[test]
    fn no_nodes_no_columns() {
        let graph = UnGraph::new(0);
        let matrix = graph.incidence_matrix();
        assert_eq!(matrix.number_of_columns(), 0);
        assert!(matrix.to_signed_rows().is_empty());
    }
}
