//! Human readable and JSON renderings of a finished search.

use std::{cmp::Ordering, fmt};

use itertools::Itertools;
use serde::Serialize;

use crate::{
    error::{PathError, Result},
    graphs::{named_graph::NamedGraph, Distance, Graph},
    search::{path::Path, path_table::PathTable},
};

const COLUMN_WIDTH: usize = 30;
const NAMES_PER_ROW: usize = 3;

/// Lists the vertices of a graph in the order they were read.
pub struct GraphSummary<'a> {
    graph: &'a NamedGraph,
}

impl<'a> GraphSummary<'a> {
    pub fn new(graph: &'a NamedGraph) -> GraphSummary<'a> {
        GraphSummary { graph }
    }
}

impl fmt::Display for GraphSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "A weighted graph has been built for these {} vertices ({} edges, {} parallel edges folded)",
            self.graph.number_of_vertices(),
            self.graph.number_of_edges(),
            self.graph.number_of_parallel_edges()
        )?;
        writeln!(f)?;

        for row in &self.graph.vertex_names().iter().chunks(NAMES_PER_ROW) {
            for name in row {
                write!(f, "{:>width$}", name, width = COLUMN_WIDTH)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub vertex: String,
    /// `None` if the vertex is unreachable.
    pub distance: Option<Distance>,
    pub predecessor: Option<String>,
}

/// The search result as rows sorted by ascending distance. Unreachable
/// vertices come last, equal distances are ordered by vertex name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub source: String,
    pub rows: Vec<ReportRow>,
}

/// Report and optional route serialized as a single JSON object.
#[derive(Serialize)]
struct JsonDocument<'a> {
    #[serde(flatten)]
    report: &'a PathReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<&'a Route>,
}

fn compare_rows(a: &ReportRow, b: &ReportRow) -> Ordering {
    let by_distance = match (a.distance, b.distance) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_distance.then_with(|| a.vertex.cmp(&b.vertex))
}

impl PathReport {
    pub fn new(graph: &NamedGraph, table: &PathTable) -> PathReport {
        let rows = (0..graph.number_of_vertices())
            .map(|vertex| ReportRow {
                vertex: graph.vertex_name(vertex).to_string(),
                distance: table.get_distance(vertex),
                predecessor: table
                    .get_predecessor(vertex)
                    .map(|predecessor| graph.vertex_name(predecessor).to_string()),
            })
            .sorted_by(compare_rows)
            .collect();

        PathReport {
            source: graph.vertex_name(table.source()).to_string(),
            rows,
        }
    }

    /// The table as one JSON object. A route, if given, is embedded under
    /// `route` so the output stays a single document.
    pub fn to_json(&self, route: Option<&Route>) -> Result<String> {
        let document = JsonDocument {
            report: self,
            route,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "-".repeat(COLUMN_WIDTH * 3))?;
        writeln!(
            f,
            "{:>w$}{:>w$}{:>w$}",
            "Vertex",
            "Distance",
            "Previous",
            w = COLUMN_WIDTH
        )?;
        writeln!(f)?;

        for row in self.rows.iter() {
            let distance = row
                .distance
                .map_or_else(|| "unreachable".to_string(), |distance| distance.to_string());
            let predecessor = row.predecessor.as_deref().unwrap_or("none");
            writeln!(
                f,
                "{:>w$}{:>w$}{:>w$}",
                row.vertex,
                distance,
                predecessor,
                w = COLUMN_WIDTH
            )?;
        }

        Ok(())
    }
}

/// The path from the search source to one target vertex, by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    pub source: String,
    pub target: String,
    /// Vertex names from source to target, empty if there is no path.
    pub vertices: Vec<String>,
    pub distance: Option<Distance>,
}

impl Route {
    pub fn new(graph: &NamedGraph, table: &PathTable, target: &str) -> Result<Route> {
        let target_vertex = graph
            .vertex_id(target)
            .ok_or_else(|| PathError::UnknownTargetVertex(target.to_string()))?;

        let path = table.get_path(target_vertex);
        let vertices: Vec<String> = path
            .as_ref()
            .map(|Path { vertices, .. }| {
                vertices
                    .iter()
                    .map(|&vertex| graph.vertex_name(vertex).to_string())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Route {
            source: graph.vertex_name(table.source()).to_string(),
            target: target.to_string(),
            vertices,
            distance: path.map(|path| path.distance),
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.distance {
            Some(distance) => write!(
                f,
                "route to {}: {} (distance {})",
                self.target,
                self.vertices.join(" -> "),
                distance
            ),
            None => write!(f, "no path from {} to {}", self.source, self.target),
        }
    }
}
