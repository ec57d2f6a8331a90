/*!
# Errors

Every fallible operation of this crate returns [`Result`], failing with exactly one of three
kinds of [`GraphError`]. Errors are raised at the point of the invalid call and no partial
result is ever returned alongside them.
*/

use crate::{Node, NumEdges, NumNodes};

/// Shorthand for results of this crate
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A structurally invalid argument such as a negative vertex count or a self-loop
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex id outside of `[0, vertex_count)`
    #[error("vertex {vertex} is out of range [0, {vertex_count})")]
    IndexOutOfRange { vertex: i64, vertex_count: NumNodes },

    /// Two derivations of the same quantity disagree.
    /// This can only be caused by a bug in one of the derived representations.
    #[error(
        "component starting at vertex {smallest_vertex} has {adjacency_edges} edges in the adjacency matrix but {incidence_edges} in the incidence matrix"
    )]
    InternalConsistencyFault {
        smallest_vertex: Node,
        adjacency_edges: NumEdges,
        incidence_edges: NumEdges,
    },
}

impl GraphError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn out_of_range(vertex: impl Into<i64>, vertex_count: NumNodes) -> Self {
        Self::IndexOutOfRange {
            vertex: vertex.into(),
            vertex_count,
        }
    }

    /// Returns *true* for [`GraphError::InvalidArgument`]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns *true* for [`GraphError::IndexOutOfRange`]
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Returns `Ok(u)` if `u` is a vertex of a graph with `n` nodes
pub(crate) fn check_vertex(u: Node, n: NumNodes) -> Result<Node> {
    if u < n {
        Ok(u)
    } else {
        Err(GraphError::out_of_range(u, n))
    }
}
