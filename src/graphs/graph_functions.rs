use super::{Distance, Graph, VertexId};
use crate::search::path::Path;

/// Check if a path is a valid walk from `source` through `graph` whose
/// weight matches the distance stored in the path.
pub fn validate_path(graph: &dyn Graph, source: VertexId, path: &Path) -> Result<(), String> {
    // Ensure the path starts at the source.
    match path.vertices.first() {
        Some(first_vertex) if *first_vertex == source => {}
        Some(_) => return Err("first vertex of path is not the source".to_string()),
        None => return Err("path is empty".to_string()),
    }

    // Ensure no vertex is visited twice.
    let mut seen = vec![false; graph.number_of_vertices() as usize];
    for &vertex in path.vertices.iter() {
        let slot = seen
            .get_mut(vertex as usize)
            .ok_or_else(|| format!("vertex {} is not part of the graph", vertex))?;
        if *slot {
            return Err(format!("vertex {} appears twice in the path", vertex));
        }
        *slot = true;
    }

    // Check if there is an edge between consecutive path vertices.
    let mut edges = Vec::new();
    for window in path.vertices.windows(2) {
        let (tail, head) = (window[0], window[1]);
        if let Some(edge) = graph.edges(tail).find(|edge| edge.head() == head) {
            edges.push(edge);
        } else {
            return Err(format!("no edge between {} and {} found", tail, head));
        }
    }

    // Check if total weight of path is correct.
    let true_distance = edges.iter().map(|edge| edge.weight()).sum::<Distance>();
    if path.distance != true_distance {
        return Err(format!(
            "wrong path distance: path says {} but its edges sum to {}",
            path.distance, true_distance
        ));
    }

    Ok(())
}
