use std::ops::Index;

use super::*;

/// Adjacency-list view: for every node, its `(neighbor, weight)` pairs sorted by
/// neighbor id and then weight.
///
/// The ordering is independent of insertion order, so two graphs with the same multiset
/// of edges always produce equal views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeighborLists {
    lists: Vec<Vec<(Node, Weight)>>,
}

impl NeighborLists {
    /// Derives the view from the adjacency store of `graph`
    pub fn from_graph<G: AdjacencyList>(graph: &G) -> Self {
        let weighted = graph.is_weighted();
        let lists = graph
            .vertices()
            .map(|u| {
                let mut nbs: Vec<(Node, Weight)> = graph
                    .weighted_neighbors_of(u)
                    .map(|(v, w)| (v, if weighted { w } else { UNIT_WEIGHT }))
                    .collect();
                nbs.sort_by(|(u, wu), (v, wv)| u.cmp(v).then_with(|| wu.total_cmp(wv)));
                nbs
            })
            .collect();

        Self { lists }
    }

    /// Returns the number of nodes, i.e. the number of lists
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns the sorted neighbors of `u` (if `u` is a node)
    pub fn get(&self, u: Node) -> Option<&[(Node, Weight)]> {
        self.lists.get(u as usize).map(Vec::as_slice)
    }

    /// Iterates over all nodes together with their sorted neighborhoods
    pub fn iter(&self) -> impl Iterator<Item = (Node, &[(Node, Weight)])> + '_ {
        self.lists
            .iter()
            .enumerate()
            .map(|(u, nbs)| (u as Node, nbs.as_slice()))
    }

    /// Consumes the view and returns the plain lists
    pub fn into_inner(self) -> Vec<Vec<(Node, Weight)>> {
        self.lists
    }
}

impl Index<Node> for NeighborLists {
    type Output = [(Node, Weight)];

    /// ** Panics if `u >= n` **
    fn index(&self, u: Node) -> &Self::Output {
        &self.lists[u as usize]
    }
}
