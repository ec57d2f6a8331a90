/*!
`trigraph` is a small graph library that keeps a single adjacency store per graph and derives
three interchangeable views from it on demand:
- an **adjacency list** ([`NeighborLists`](crate::repr::NeighborLists)),
- an **adjacency matrix** ([`AdjacencyMatrix`](crate::repr::AdjacencyMatrix)),
- an **incidence matrix** ([`IncidenceMatrix`](crate::repr::IncidenceMatrix)).

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
The node set is fixed at construction; nodes are never added or removed afterwards.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` and attach a `f64` weight
via [`WeightedEdge`](crate::edge::WeightedEdge) where needed.

### Directed vs Undirected

Every graph fixes two properties at construction:

- In an **undirected** graph, `Edge(u, v)` is treated as equivalent to `Edge(v, u)` and stored at both endpoints.
- In a **directed** graph, the edge has orientation and is only stored at its tail.
- In an **unweighted** graph, every edge carries weight `1.0` regardless of the weight supplied.

Self-loops are rejected. Inserting the same edge twice is allowed: the adjacency list shows
both entries while both matrices collapse them into one logical edge carrying the most recent weight.

# Design

Functionality is provided via traits implemented on the graph itself, e.g. `graph.bfs(start)` or
`graph.components_with_stats()`. Derived views are never cached, so they always reflect the
current adjacency store.

Graphs whose properties are only known at runtime are built with the
[`GraphConfig`](crate::config::GraphConfig) builder.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all graph types,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(start_node)`),
  DFS, connected components and per-component statistics,
- [`config`] includes the builder for graphs whose properties are chosen at runtime.

In most use-cases, `use trigraph::{prelude::*, algo::*};` suffices for your needs.

```rust
use trigraph::{prelude::*, algo::*};

let mut graph = UnGraph::new(5);
graph.add_edges([(0, 1), (1, 2), (3, 4)]).unwrap();

assert_eq!(graph.bfs(0).unwrap(), vec![0, 1, 2]);
assert_eq!(graph.connected_components(), vec![vec![0, 1, 2], vec![3, 4]]);
assert_eq!(graph.incidence_matrix().number_of_columns(), 3);
```
*/

pub mod algo;
pub mod config;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::{GraphError, Result};
pub use node::*;

/// `trigraph::prelude` includes definitions for nodes and edges, errors, all basic graph operation traits as well as all graph types.
pub mod prelude {
    pub use super::{
        config::GraphConfig,
        edge::*,
        error::{GraphError, Result},
        node::*,
        ops::*,
        repr::*,
    };
}
