use clap::ValueEnum;

use self::edge::{DirectedEdge, WeightedEdge};

pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod named_graph;

pub type VertexId = u32;
pub type Weight = i64;
pub type Distance = i64;

/// Decides which weight represents an ordered vertex pair that appears more
/// than once in the edge list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParallelEdges {
    /// The first edge read wins, later ones are ignored.
    First,
    /// The edge with the smallest weight wins.
    #[default]
    Minimum,
}

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.edges(vertex).len() as u32)
            .sum::<u32>()
    }

    fn edges(
        &self,
        tail: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn get_weight(&self, edge: &DirectedEdge) -> Option<Weight>;
}
