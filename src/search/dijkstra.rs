use itertools::Itertools;
use log::{debug, trace};

use super::path_table::PathTable;
use crate::{
    error::{PathError, Result},
    graphs::{named_graph::NamedGraph, Distance, Graph, VertexId},
};

/// Dijkstra's algorithm with a linear scan for the next vertex instead of a
/// priority queue.
///
/// Every call to [`ScanDijkstra::step`] visits exactly one vertex: the
/// unvisited one with the smallest finite distance. Ties go to the vertex
/// whose name sorts first, which keeps results independent of the order the
/// edge list was written in.
pub struct ScanDijkstra<'a> {
    graph: &'a NamedGraph,
    table: PathTable,
    scan_order: Vec<VertexId>,
}

impl<'a> ScanDijkstra<'a> {
    pub fn new(graph: &'a NamedGraph, source: &str) -> Result<ScanDijkstra<'a>> {
        let source = graph
            .vertex_id(source)
            .ok_or_else(|| PathError::UnknownSourceVertex(source.to_string()))?;

        let scan_order = (0..graph.number_of_vertices())
            .sorted_by(|&a, &b| graph.vertex_name(a).cmp(graph.vertex_name(b)))
            .collect();

        Ok(ScanDijkstra {
            graph,
            table: PathTable::new(graph.number_of_vertices(), source),
            scan_order,
        })
    }

    pub fn table(&self) -> &PathTable {
        &self.table
    }

    /// Returns the unvisited vertex with the smallest finite distance, or
    /// `None` if every remaining vertex is unreachable.
    fn find_min(&self) -> Option<VertexId> {
        let mut min: Option<(VertexId, Distance)> = None;

        for &vertex in self.scan_order.iter() {
            let entry = self.table.entry(vertex);
            if entry.is_visited {
                continue;
            }
            if let Some(distance) = entry.distance {
                if min.map_or(true, |(_, min_distance)| distance < min_distance) {
                    min = Some((vertex, distance));
                }
            }
        }

        min.map(|(vertex, _)| vertex)
    }

    /// Visits the next vertex and relaxes its outgoing edges. Returns the
    /// visited vertex, or `None` once the search is exhausted.
    pub fn step(&mut self) -> Option<VertexId> {
        let tail = self.find_min()?;
        self.table.visit(tail);

        for edge in self.graph.edges(tail) {
            if self.table.relax(&edge) {
                trace!(
                    "{} now at distance {:?} via {}",
                    self.graph.vertex_name(edge.head()),
                    self.table.get_distance(edge.head()),
                    self.graph.vertex_name(tail)
                );
            }
        }

        Some(tail)
    }

    /// Runs the search to completion and hands out the finished table.
    pub fn run(mut self) -> PathTable {
        while let Some(vertex) = self.step() {
            trace!("visited {}", self.graph.vertex_name(vertex));
        }

        debug!(
            "search from {} visited {} of {} vertices",
            self.graph.vertex_name(self.table.source()),
            self.table.rounds(),
            self.graph.number_of_vertices()
        );

        self.table
    }
}

/// Shortest distances and predecessors from `source` to every vertex.
pub fn single_source(graph: &NamedGraph, source: &str) -> Result<PathTable> {
    Ok(ScanDijkstra::new(graph, source)?.run())
}

#[cfg(test)]
mod tests {
    use super::{single_source, ScanDijkstra};
    use crate::{
        error::PathError,
        graphs::{graph_factory::GraphFactory, named_graph::NamedGraph, Graph, ParallelEdges},
    };

    fn graph(edge_list: &str) -> NamedGraph {
        GraphFactory::from_edge_list(edge_list, ParallelEdges::Minimum).unwrap()
    }

    #[test]
    fn detour_beats_direct_edge() {
        let graph = graph("A;B;5\nB;C;3\nA;C;10\n");
        let table = single_source(&graph, "A").unwrap();

        let (a, b, c) = (0, 1, 2);
        assert_eq!(table.get_distance(a), Some(0));
        assert_eq!(table.get_predecessor(a), None);
        assert_eq!(table.get_distance(b), Some(5));
        assert_eq!(table.get_predecessor(b), Some(a));
        assert_eq!(table.get_distance(c), Some(8));
        assert_eq!(table.get_predecessor(c), Some(b));
        assert_eq!(table.rounds(), 3);
    }

    #[test]
    fn unknown_source_is_an_error() {
        let graph = graph("A;B;5\nB;C;3\nA;C;10\n");

        match single_source(&graph, "Z") {
            Err(PathError::UnknownSourceVertex(name)) => assert_eq!(name, "Z"),
            other => panic!("expected unknown source vertex, got {:?}", other),
        }
    }

    #[test]
    fn single_vertex_finishes_after_one_round() {
        let mut graph = NamedGraph::new(ParallelEdges::Minimum);
        graph.add_vertex("A");

        let mut search = ScanDijkstra::new(&graph, "A").unwrap();
        assert_eq!(search.step(), Some(0));
        assert_eq!(search.step(), None);

        let table = search.run();
        assert_eq!(table.get_distance(0), Some(0));
        assert_eq!(table.get_predecessor(0), None);
        assert_eq!(table.rounds(), 1);
    }

    #[test]
    fn isolated_vertex_stays_unreachable() {
        let mut graph = graph("A;B;1\n");
        let isolated = graph.add_vertex("X");

        let table = single_source(&graph, "A").unwrap();
        assert_eq!(table.get_distance(isolated), None);
        assert_eq!(table.get_predecessor(isolated), None);
        assert!(!table.is_visited(isolated));

        let table = single_source(&graph, "X").unwrap();
        assert_eq!(table.get_distance(isolated), Some(0));
        assert_eq!(table.get_distance(0), None);
        assert_eq!(table.rounds(), 1);
    }

    #[test]
    fn edges_point_one_way() {
        let graph = graph("A;B;1\nC;A;1\n");
        let table = single_source(&graph, "B").unwrap();

        assert_eq!(table.get_distance(0), None);
        assert_eq!(table.get_distance(1), Some(0));
        assert_eq!(table.get_distance(2), None);
        assert_eq!(table.rounds(), 1);
    }

    #[test]
    fn ties_are_broken_by_name() {
        // B is read before A, but A sorts first and is visited first, so it
        // becomes the predecessor of C.
        let graph = graph("S;B;1\nS;A;1\nB;C;1\nA;C;1\n");
        let mut search = ScanDijkstra::new(&graph, "S").unwrap();

        let order: Vec<_> = std::iter::from_fn(|| search.step())
            .map(|vertex| graph.vertex_name(vertex).to_string())
            .collect();
        assert_eq!(order, vec!["S", "A", "B", "C"]);

        let c = graph.vertex_id("C").unwrap();
        let a = graph.vertex_id("A").unwrap();
        assert_eq!(search.table().get_predecessor(c), Some(a));
        assert_eq!(search.table().get_distance(c), Some(2));
    }

    #[test]
    fn visited_distances_never_change() {
        let graph = graph("A;B;4\nA;C;1\nC;B;2\nB;D;1\nC;D;7\nD;E;3\nE;A;1\n");
        let mut search = ScanDijkstra::new(&graph, "A").unwrap();
        let mut finalized = Vec::new();

        while let Some(vertex) = search.step() {
            finalized.push((vertex, search.table().get_distance(vertex)));
            for &(visited, distance) in finalized.iter() {
                assert!(search.table().is_visited(visited));
                assert_eq!(search.table().get_distance(visited), distance);
            }
        }

        assert_eq!(finalized.len() as u32, graph.number_of_vertices());
    }

    #[test]
    fn parallel_edge_policy_changes_result() {
        let edge_list = "A;B;9\nA;B;2\n";

        let first = GraphFactory::from_edge_list(edge_list, ParallelEdges::First).unwrap();
        assert_eq!(single_source(&first, "A").unwrap().get_distance(1), Some(9));

        let minimum = GraphFactory::from_edge_list(edge_list, ParallelEdges::Minimum).unwrap();
        assert_eq!(single_source(&minimum, "A").unwrap().get_distance(1), Some(2));
    }
}
