use std::path::Path;

use graphs::{graph_factory::GraphFactory, named_graph::NamedGraph, Graph, ParallelEdges};
use log::info;
use utility::get_progressspinner;

pub mod error;
pub mod graphs;
pub mod report;
pub mod search;
pub mod utility;

pub use error::{LineDefect, PathError, Result};

/// Reads an `origin;destination;weight` edge list from `path`.
pub fn read_graph(path: &Path, parallel_edges: ParallelEdges) -> Result<NamedGraph> {
    let spinner = get_progressspinner("Reading edge list");
    let graph = GraphFactory::from_edge_list_file(path, parallel_edges);
    spinner.finish_and_clear();

    let graph = graph?;
    info!(
        "read {} vertices and {} edges from {}",
        graph.number_of_vertices(),
        graph.number_of_edges(),
        path.display()
    );
    Ok(graph)
}
