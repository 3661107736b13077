use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, warn};

use super::{named_graph::NamedGraph, Graph, ParallelEdges, Weight};
use crate::error::{LineDefect, PathError, Result};

/// One parsed `origin;destination;weight` line, borrowing from the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLine<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub weight: Weight,
}

/// Splits a line into origin (before the first `;`), destination (between the
/// first and the last `;`) and weight (after the last `;`).
///
/// The destination may itself contain `;`. A trailing `\r` and whitespace
/// around the weight are ignored, vertex names are taken verbatim.
pub fn parse_edge_line(line: &str, line_number: usize) -> Result<EdgeLine<'_>> {
    let malformed = |defect| PathError::MalformedEdgeLine {
        line_number,
        line: line.to_string(),
        defect,
    };

    let content = line.strip_suffix('\r').unwrap_or(line);
    let (origin, rest) = content
        .split_once(';')
        .ok_or_else(|| malformed(LineDefect::MissingSeparator))?;
    let (destination, weight) = rest
        .rsplit_once(';')
        .ok_or_else(|| malformed(LineDefect::MissingSeparator))?;

    if origin.is_empty() {
        return Err(malformed(LineDefect::EmptyOrigin));
    }
    if destination.is_empty() {
        return Err(malformed(LineDefect::EmptyDestination));
    }

    let weight = weight
        .trim()
        .parse::<Weight>()
        .map_err(|error| malformed(LineDefect::InvalidWeight(error)))?;

    Ok(EdgeLine {
        origin,
        destination,
        weight,
    })
}

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_edge_list_file(path: &Path, parallel_edges: ParallelEdges) -> Result<NamedGraph> {
        let file = File::open(path).map_err(|source| PathError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("reading edge list {}", path.display());
        Self::from_reader(BufReader::new(file), parallel_edges)
    }

    pub fn from_edge_list(edge_list: &str, parallel_edges: ParallelEdges) -> Result<NamedGraph> {
        Self::from_reader(edge_list.as_bytes(), parallel_edges)
    }

    /// Builds the graph line by line and stops at the first malformed line.
    pub fn from_reader<R: BufRead>(reader: R, parallel_edges: ParallelEdges) -> Result<NamedGraph> {
        let mut graph = NamedGraph::new(parallel_edges);

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let EdgeLine {
                origin,
                destination,
                weight,
            } = parse_edge_line(&line, line_number)?;

            if weight < 0 {
                warn!(
                    "negative weight {} on line {} ({}->{}), distances may be wrong",
                    weight, line_number, origin, destination
                );
            }

            graph.add_edge(origin, destination, weight);
        }

        debug!(
            "built graph with {} vertices, {} edges and {} folded parallel edges",
            graph.number_of_vertices(),
            graph.number_of_edges(),
            graph.number_of_parallel_edges()
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{parse_edge_line, EdgeLine, GraphFactory};
    use crate::{
        error::{LineDefect, PathError},
        graphs::{edge::DirectedEdge, Graph, ParallelEdges},
    };

    #[test]
    fn parses_well_formed_lines() {
        assert_eq!(
            parse_edge_line("A;B;5", 1).unwrap(),
            EdgeLine {
                origin: "A",
                destination: "B",
                weight: 5
            }
        );
        assert_eq!(parse_edge_line("A;B; 7 \r", 1).unwrap().weight, 7);
        assert_eq!(parse_edge_line("A;B;+3", 1).unwrap().weight, 3);
        assert_eq!(parse_edge_line("A;B;-4", 1).unwrap().weight, -4);
        assert_eq!(
            parse_edge_line("New York;Los Angeles;2789", 1)
                .unwrap()
                .destination,
            "Los Angeles"
        );
    }

    #[test]
    fn destination_spans_first_to_last_separator() {
        let edge = parse_edge_line("A;B;C;5", 1).unwrap();
        assert_eq!(edge.origin, "A");
        assert_eq!(edge.destination, "B;C");
        assert_eq!(edge.weight, 5);
    }

    #[test]
    fn rejects_malformed_lines() {
        let defect = |line: &str| match parse_edge_line(line, 4) {
            Err(PathError::MalformedEdgeLine {
                line_number,
                line: reported,
                defect,
            }) => {
                assert_eq!(line_number, 4);
                assert_eq!(reported, line);
                defect
            }
            other => panic!("expected malformed edge line, got {:?}", other),
        };

        assert_eq!(defect(""), LineDefect::MissingSeparator);
        assert_eq!(defect("A;B"), LineDefect::MissingSeparator);
        assert_eq!(defect(";B;1"), LineDefect::EmptyOrigin);
        assert_eq!(defect("A;;1"), LineDefect::EmptyDestination);
        assert!(matches!(defect("A;B;x"), LineDefect::InvalidWeight(_)));
        assert!(matches!(defect("A;B;"), LineDefect::InvalidWeight(_)));
        assert!(matches!(defect("A;B;5x"), LineDefect::InvalidWeight(_)));
    }

    #[test]
    fn builds_graph_from_edge_list() {
        let graph =
            GraphFactory::from_edge_list("A;B;5\nB;C;3\nA;C;10\n", ParallelEdges::Minimum).unwrap();

        assert_eq!(graph.vertex_names(), &["A", "B", "C"]);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.get_weight(&DirectedEdge::new(1, 2)), Some(3));
    }

    #[test]
    fn parallel_edge_policy_is_applied() {
        let edge_list = "A;B;8\nA;B;2\n";

        let minimum = GraphFactory::from_edge_list(edge_list, ParallelEdges::Minimum).unwrap();
        assert_eq!(minimum.get_weight(&DirectedEdge::new(0, 1)), Some(2));

        let first = GraphFactory::from_edge_list(edge_list, ParallelEdges::First).unwrap();
        assert_eq!(first.get_weight(&DirectedEdge::new(0, 1)), Some(8));
        assert_eq!(first.number_of_parallel_edges(), 1);
    }

    #[test]
    fn reports_line_of_first_malformed_edge() {
        let error =
            GraphFactory::from_edge_list("A;B;5\nA;B;x\nB;C;y\n", ParallelEdges::Minimum)
                .unwrap_err();

        assert!(matches!(
            error,
            PathError::MalformedEdgeLine { line_number: 2, .. }
        ));
        assert!(error.to_string().contains("line 2"));
        assert!(error.to_string().contains("A;B;x"));
    }

    #[test]
    fn empty_edge_list_gives_empty_graph() {
        let graph = GraphFactory::from_edge_list("", ParallelEdges::Minimum).unwrap();
        assert_eq!(graph.number_of_vertices(), 0);
    }

    #[test]
    fn missing_file_is_reported() {
        let error = GraphFactory::from_edge_list_file(
            Path::new("this/file/does/not/exist.csv"),
            ParallelEdges::Minimum,
        )
        .unwrap_err();

        assert!(matches!(error, PathError::FileNotFound { .. }));
        assert!(error.to_string().starts_with("Invalid file: this/file/does/not/exist.csv"));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let bytes: &[u8] = b"A;B;1\n\xff\xfe;C;2\n";
        let error = GraphFactory::from_reader(bytes, ParallelEdges::Minimum).unwrap_err();
        assert!(matches!(error, PathError::Io(_)));
    }
}
