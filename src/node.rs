/*!
# Node Representation

We choose `Node = u32` as the graphs handled here are small and densely numbered.
Vertices of a graph with `n` nodes are exactly `0..n`, so a node doubles as a row index
into every derived matrix.
*/

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Fixed-size BitSet with one bit per node.
///
/// Used as the visited-set of all traversals and as the membership mask of components.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct NodeBitSet(FixedBitSet);

impl NodeBitSet {
    /// Creates a BitSet over `n` nodes with no bit set
    pub fn new(n: NumNodes) -> Self {
        Self(FixedBitSet::with_capacity(n as usize))
    }

    /// Creates a BitSet over `n` nodes with exactly the provided nodes set
    /// ** Panics if any node is `>= n` **
    pub fn new_with_bits_set<I>(n: NumNodes, bits: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut set = Self::new(n);
        set.set_bits(bits);
        set
    }

    /// Returns the number of nodes this BitSet was created for
    pub fn number_of_bits(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Sets bit `u` and returns *true* if it was set before.
    /// ** Panics if `u >= n` **
    pub fn set_bit(&mut self, u: Node) -> bool {
        self.0.put(u as usize)
    }

    /// Sets all provided bits
    pub fn set_bits<I>(&mut self, bits: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for u in bits {
            self.set_bit(u);
        }
    }

    /// Returns *true* if bit `u` is set.
    /// Out-of-range nodes are reported as unset.
    pub fn get_bit(&self, u: Node) -> bool {
        self.0.contains(u as usize)
    }

    /// Returns the number of set bits
    pub fn cardinality(&self) -> NumNodes {
        self.0.count_ones(..) as NumNodes
    }

    /// Returns *true* if every bit is set
    pub fn are_all_set(&self) -> bool {
        self.cardinality() == self.number_of_bits()
    }

    /// Returns the smallest node whose bit is not set (if any)
    pub fn first_unset(&self) -> Option<Node> {
        (0..self.0.len())
            .find(|&u| !self.0.contains(u))
            .map(|u| u as Node)
    }

    /// Iterates over all set bits in increasing order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.ones().map(|u| u as Node)
    }
}

impl std::fmt::Debug for NodeBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter_set_bits()).finish()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn set_and_query() {
        let mut set = NodeBitSet::new(5);
        assert_eq!(set.cardinality(), 0);
        assert!(!set.set_bit(3));
        assert!(set.set_bit(3));
        assert!(set.get_bit(3));
        assert!(!set.get_bit(4));
        assert!(!set.get_bit(17));
        assert_eq!(set.first_unset(), Some(0));

        set.set_bits([0, 1, 2, 4]);
        assert!(set.are_all_set());
        assert_eq!(set.first_unset(), None);
        assert_eq!(set.iter_set_bits().collect_vec(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_set_is_all_set() {
        let set = NodeBitSet::new(0);
        assert!(set.are_all_set());
        assert_eq!(set.first_unset(), None);
    }
}
