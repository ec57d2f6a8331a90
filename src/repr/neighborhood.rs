use std::{iter::Copied, slice::Iter};

use super::*;

/// The adjacency-store entry of a single node: an ordered sequence of `(neighbor, weight)` pairs.
///
/// Entries are only ever appended, so the sequence reflects insertion order.
/// Repeated insertions of the same edge are kept as separate entries.
#[derive(Clone, Debug, Default)]
pub struct Neighborhood {
    entries: Vec<(Node, Weight)>,
}

/// Iterator over the `(neighbor, weight)` pairs of a [`Neighborhood`]
pub type WeightedNeighborIter<'a> = Copied<Iter<'a, (Node, Weight)>>;

impl Neighborhood {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries in the Neighborhood
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.entries.len() as NumNodes
    }

    /// Returns an iterator over all `(neighbor, weight)` pairs in insertion order
    pub fn weighted_neighbors(&self) -> WeightedNeighborIter<'_> {
        self.entries.iter().copied()
    }

    /// Returns an iterator over all neighbors in insertion order
    pub fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.entries.iter().map(|&(v, _)| v)
    }

    /// Returns *true* if `v` is in the Neighborhood
    pub fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Appends an entry without checking whether `v` is already present
    pub fn add_neighbor(&mut self, v: Node, weight: Weight) {
        self.entries.push((v, weight));
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut nbs = Neighborhood::new();
        nbs.add_neighbor(3, 1.0);
        nbs.add_neighbor(1, 4.0);
        nbs.add_neighbor(3, 0.5);

        assert_eq!(nbs.num_of_neighbors(), 3);
        assert_eq!(nbs.neighbors().collect_vec(), vec![3, 1, 3]);
        assert!(nbs.has_neighbor(1));
        assert!(!nbs.has_neighbor(2));
        assert_eq!(
            nbs.weighted_neighbors().collect_vec(),
            vec![(3, 1.0), (1, 4.0), (3, 0.5)]
        );
    }
}
