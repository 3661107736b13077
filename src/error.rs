use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// Errors produced while building a graph from an edge list or while
/// answering a shortest path query on it.
#[derive(Debug, Error)]
pub enum PathError {
    /// The edge list could not be opened.
    #[error("Invalid file: {} ({source})", .path.display())]
    FileNotFound { path: PathBuf, source: io::Error },

    /// Reading the edge list or the console failed, e.g. on invalid UTF-8,
    /// or writing the report failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed edge on line {line_number} ({line:?}): {defect}")]
    MalformedEdgeLine {
        /// 1-based line number inside the edge list.
        line_number: usize,
        line: String,
        defect: LineDefect,
    },

    #[error("unknown source vertex {0:?}")]
    UnknownSourceVertex(String),

    #[error("unknown target vertex {0:?}")]
    UnknownTargetVertex(String),

    #[error("unable to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// What exactly is wrong with a single `origin;destination;weight` line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineDefect {
    #[error("expected `origin;destination;weight`")]
    MissingSeparator,

    #[error("origin is empty")]
    EmptyOrigin,

    #[error("destination is empty")]
    EmptyDestination,

    #[error("weight is not an integer: {0}")]
    InvalidWeight(#[source] ParseIntError),
}

pub type Result<T, E = PathError> = std::result::Result<T, E>;
