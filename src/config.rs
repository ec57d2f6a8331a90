/*!
# Graph Configuration

[`GraphConfig`] collects the three properties fixed at construction of a graph and builds a
[`DynGraph`] from them. Setters can be chained; validation is deferred to [`GraphConfig::build`].

```rust
use trigraph::prelude::*;

let graph = GraphConfig::new()
    .vertex_count(4)
    .directed(true)
    .build()
    .unwrap();

assert!(graph.is_directed());
assert!(!graph.is_weighted());
assert_eq!(graph.number_of_nodes(), 4);

assert!(GraphConfig::new().vertex_count(-1).build().is_err());
```
*/

use tracing::debug;

use crate::{ops::*, repr::DynGraph, *};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GraphConfig {
    vertex_count: i64,
    directed: bool,
    weighted: bool,
}

impl GraphConfig {
    /// Creates a configuration for an undirected, unweighted graph without nodes
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the number of nodes
    pub fn vertex_count(mut self, vertex_count: i64) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Updates whether edges have an orientation
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Updates whether supplied edge weights are kept
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Builds an empty graph.
    /// Fails with [`GraphError::InvalidArgument`] if the vertex count is negative.
    pub fn build(&self) -> Result<DynGraph> {
        let graph = DynGraph::try_new(self.vertex_count, self.directed, self.weighted)?;
        debug!(
            vertex_count = self.vertex_count,
            directed = self.directed,
            weighted = self.weighted,
            "built graph"
        );
        Ok(graph)
    }

    /// Builds a graph and inserts all provided edges.
    /// Fails on the first edge that cannot be inserted.
    pub fn build_with_edges<I>(&self, edges: I) -> Result<DynGraph>
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge>,
    {
        let mut graph = self.build()?;
        graph.add_edges(edges)?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let graph = GraphConfig::new().build().unwrap();
        assert!(graph.is_empty());
        assert!(!graph.is_directed());
        assert!(!graph.is_weighted());
    }

    #[test]
    fn setters_chain() {
        let config = GraphConfig::new()
            .vertex_count(3)
            .directed(true)
            .weighted(true);
        let graph = config.build_with_edges([(0, 1, 0.5), (2, 1, 2.0)]).unwrap();

        assert!(matches!(graph, DynGraph::WeightedDirected(_)));
        assert_eq!(graph.edge_weight(2, 1), Some(2.0));
        assert_eq!(graph.edge_weight(1, 2), None);
    }

    #[test]
    fn flags_select_variant() {
        let build = |directed, weighted| {
            GraphConfig::new()
                .vertex_count(2)
                .directed(directed)
                .weighted(weighted)
                .build_with_edges([(0, 1, 3.0)])
                .unwrap()
        };

        assert!(matches!(build(false, false), DynGraph::Undirected(_)));
        assert!(matches!(build(true, false), DynGraph::Directed(_)));
        assert!(matches!(build(false, true), DynGraph::WeightedUndirected(_)));
        assert!(matches!(build(true, true), DynGraph::WeightedDirected(_)));

        assert!(build(false, false).has_edge(1, 0));
        assert!(!build(true, true).has_edge(1, 0));
        assert_eq!(build(true, false).edge_weight(0, 1), Some(UNIT_WEIGHT));
    }

    #[test]
    fn invalid_configurations_fail_at_build() {
        let config = GraphConfig::new().vertex_count(-1);
        assert!(config.build().unwrap_err().is_invalid_argument());

        let err = GraphConfig::new()
            .vertex_count(2)
            .build_with_edges([(0, 2)])
            .unwrap_err();
        assert!(err.is_index_out_of_range());
    }
}
