/*!
# Graph Representations

A graph is stored exactly once, as an adjacency store (see [`Neighborhood`]).
The three views a caller can ask for are derived from it on every request:

- [`NeighborLists`]: every neighborhood, sorted by `(neighbor, weight)`,
- [`AdjacencyMatrix`]: a dense `n x n` matrix of edge weights,
- [`IncidenceMatrix`]: an `n x m` matrix with one column per logical edge.

## Provided Graphs

[`Graph`] is parameterized by two independent insertion policies:
a [`Direction`] ([`Directed`] / [`Undirected`]) and a [`Weighting`] ([`Weighted`] / [`Unweighted`]).
The four combinations are available as [`UnGraph`], [`DiGraph`], [`WeightedUnGraph`] and
[`WeightedDiGraph`]. If the policies are only known at runtime, use [`DynGraph`]
(or the [`GraphConfig`](crate::config::GraphConfig) builder).
*/

use std::fmt::Debug;

use crate::{ops::*, *};

mod dynamic;
mod graph;
mod incidence;
mod lists;
mod matrix;
mod neighborhood;

pub use dynamic::*;
pub use graph::*;
pub use incidence::*;
pub use lists::*;
pub use matrix::*;
pub use neighborhood::*;

/// Edge-insertion policy concerning the orientation of edges
pub trait Direction: Copy + Clone + Debug + Default + 'static {
    /// *true* if edges have an orientation
    const DIRECTED: bool;

    /// Stores the edge `(u, v)` in the adjacency store
    fn store(nbs: &mut [Neighborhood], u: Node, v: Node, weight: Weight);
}

/// Edges are stored only at their tail
#[derive(Copy, Clone, Debug, Default)]
pub struct Directed;

/// Edges are stored at both endpoints
#[derive(Copy, Clone, Debug, Default)]
pub struct Undirected;

impl Direction for Directed {
    const DIRECTED: bool = true;

    fn store(nbs: &mut [Neighborhood], u: Node, v: Node, weight: Weight) {
        nbs[u as usize].add_neighbor(v, weight);
    }
}

impl Direction for Undirected {
    const DIRECTED: bool = false;

    fn store(nbs: &mut [Neighborhood], u: Node, v: Node, weight: Weight) {
        nbs[u as usize].add_neighbor(v, weight);
        nbs[v as usize].add_neighbor(u, weight);
    }
}

/// Edge-insertion policy concerning edge weights
pub trait Weighting: Copy + Clone + Debug + Default + 'static {
    /// *true* if supplied weights are kept
    const WEIGHTED: bool;

    /// Maps a supplied weight to the weight that is stored
    fn normalize(weight: Weight) -> Weight;
}

/// Supplied weights are stored as they are
#[derive(Copy, Clone, Debug, Default)]
pub struct Weighted;

/// Every edge is stored with [`UNIT_WEIGHT`]
#[derive(Copy, Clone, Debug, Default)]
pub struct Unweighted;

impl Weighting for Weighted {
    const WEIGHTED: bool = true;

    fn normalize(weight: Weight) -> Weight {
        weight
    }
}

impl Weighting for Unweighted {
    const WEIGHTED: bool = false;

    fn normalize(_: Weight) -> Weight {
        UNIT_WEIGHT
    }
}
