use ahash::AHashMap;
use log::trace;

use super::{
    edge::{DirectedEdge, TaillessEdge, WeightedEdge},
    Graph, ParallelEdges, VertexId, Weight,
};

/// A directed graph whose vertices are addressed by name.
///
/// Vertices get dense ids in the order they are first seen. Outgoing edges
/// of every vertex are kept sorted by head, so there is at most one edge per
/// ordered pair; the [`ParallelEdges`] policy decides which weight survives
/// when the same pair is added twice.
#[derive(Clone, Debug, Default)]
pub struct NamedGraph {
    names: Vec<String>,
    ids: AHashMap<String, VertexId>,
    edges: Vec<Vec<TaillessEdge>>,
    parallel_edges: ParallelEdges,
    number_of_parallel_edges: u32,
}

impl NamedGraph {
    pub fn new(parallel_edges: ParallelEdges) -> NamedGraph {
        NamedGraph {
            parallel_edges,
            ..NamedGraph::default()
        }
    }

    /// Registers `name` as a vertex unless it is already known and returns
    /// its id either way.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&vertex) = self.ids.get(name) {
            return vertex;
        }

        let vertex = self.names.len() as VertexId;
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), vertex);
        self.edges.push(Vec::new());
        vertex
    }

    /// Registers both endpoints and the directed edge between them. Returns
    /// the edge as it is stored after applying the parallel edge policy.
    pub fn add_edge(&mut self, origin: &str, destination: &str, weight: Weight) -> WeightedEdge {
        let tail = self.add_vertex(origin);
        let head = self.add_vertex(destination);

        let edges_sharing_tail = &mut self.edges[tail as usize];
        match edges_sharing_tail.binary_search_by_key(&head, |edge| edge.head()) {
            Ok(index) => {
                self.number_of_parallel_edges += 1;
                let existing = &mut edges_sharing_tail[index];
                if self.parallel_edges == ParallelEdges::Minimum && weight < existing.weight() {
                    existing.set_weight(weight);
                }
                trace!(
                    "parallel edge {}->{} folded, keeping weight {}",
                    origin,
                    destination,
                    existing.weight()
                );
                existing.set_tail(tail)
            }
            Err(index) => {
                let edge = WeightedEdge::new(tail, head, weight);
                edges_sharing_tail.insert(index, edge.tailless());
                edge
            }
        }
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    /// Panics if `vertex` was not handed out by this graph.
    pub fn vertex_name(&self, vertex: VertexId) -> &str {
        &self.names[vertex as usize]
    }

    /// Vertex names in the order they were first seen.
    pub fn vertex_names(&self) -> &[String] {
        &self.names
    }

    /// Number of edges that were folded into an already existing edge.
    pub fn number_of_parallel_edges(&self) -> u32 {
        self.number_of_parallel_edges
    }
}

impl Graph for NamedGraph {
    fn number_of_vertices(&self) -> u32 {
        self.names.len() as u32
    }

    fn edges(
        &self,
        tail: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        let edges_sharing_tail = self
            .edges
            .get(tail as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        Box::new(
            edges_sharing_tail
                .iter()
                .map(move |tailless_edge| tailless_edge.set_tail(tail)),
        )
    }

    fn get_weight(&self, edge: &DirectedEdge) -> Option<Weight> {
        let edges_sharing_tail = self.edges.get(edge.tail() as usize)?;

        let edge_index = edges_sharing_tail
            .binary_search_by_key(&edge.head(), |tailless_edge| tailless_edge.head())
            .ok()?;

        Some(edges_sharing_tail[edge_index].weight())
    }
}
