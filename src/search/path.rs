use crate::graphs::{Distance, VertexId};

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path in the graph, from
/// the source to the target, and the total distance of traversing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub distance: Distance,
}
