use super::path::Path;
use crate::graphs::{edge::WeightedEdge, Distance, VertexId};

/// Search state of a single vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathEntry {
    /// `None` until a path to the vertex is known.
    pub distance: Option<Distance>,
    /// `None` for the source and for vertices without a known path.
    pub predecessor: Option<VertexId>,
    pub is_visited: bool,
}

/// One [`PathEntry`] per vertex of the searched graph plus the bookkeeping of
/// the search that filled it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTable {
    source: VertexId,
    entries: Vec<PathEntry>,
    rounds: u32,
}

impl PathTable {
    /// Constructs a fresh table where only `source` has a known distance.
    pub fn new(number_of_vertices: u32, source: VertexId) -> PathTable {
        let mut entries = vec![PathEntry::default(); number_of_vertices as usize];
        entries[source as usize].distance = Some(0);

        PathTable {
            source,
            entries,
            rounds: 0,
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Number of vertices that have been visited, one per solver round.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn entry(&self, vertex: VertexId) -> &PathEntry {
        &self.entries[vertex as usize]
    }

    pub fn get_distance(&self, vertex: VertexId) -> Option<Distance> {
        self.entries.get(vertex as usize)?.distance
    }

    pub fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.entries.get(vertex as usize)?.predecessor
    }

    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.entries
            .get(vertex as usize)
            .map_or(false, |entry| entry.is_visited)
    }

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// Traces back from the target using the predecessors. A predecessor is
    /// always visited before the vertex it leads to, so the walk ends at the
    /// source.
    pub fn get_path(&self, target: VertexId) -> Option<Path> {
        let distance = self.get_distance(target)?;

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.get_predecessor(current) {
            current = predecessor;
            vertices.push(current);
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }

    pub(crate) fn visit(&mut self, vertex: VertexId) {
        self.entries[vertex as usize].is_visited = true;
        self.rounds += 1;
    }

    /// Lowers the distance of the edge's head if going through its tail is
    /// strictly shorter. Visited heads and unreached tails are left alone.
    /// Returns whether the head was updated.
    pub(crate) fn relax(&mut self, edge: &WeightedEdge) -> bool {
        let Some(distance_tail) = self.entries[edge.tail() as usize].distance else {
            return false;
        };

        let head = &mut self.entries[edge.head() as usize];
        if head.is_visited {
            return false;
        }

        let alternative_distance_head = distance_tail.saturating_add(edge.weight());
        if head
            .distance
            .map_or(true, |current| alternative_distance_head < current)
        {
            head.distance = Some(alternative_distance_head);
            head.predecessor = Some(edge.tail());
            return true;
        }

        false
    }
}
