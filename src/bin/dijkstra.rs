use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use env_logger::Env;
use tabular_paths::{
    graphs::{named_graph::NamedGraph, ParallelEdges},
    read_graph,
    report::{GraphSummary, PathReport, Route},
    search::{dijkstra::single_source, path_table::PathTable},
    PathError, Result,
};

/// Single source shortest paths over an `origin;destination;weight` edge
/// list. Prints every vertex with its distance from the source and its
/// predecessor on a shortest path.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge list, one `origin;destination;weight` per line
    graph: PathBuf,
    /// Source vertex, asked for on stdin if omitted
    #[arg(short, long)]
    source: Option<String>,
    /// Also print the route to this vertex
    #[arg(short, long)]
    target: Option<String>,
    /// Which weight to keep when an edge appears more than once
    #[arg(short, long, value_enum, default_value_t = ParallelEdges::Minimum)]
    parallel_edges: ParallelEdges,
    /// Print the result table (and route) as a single JSON document
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&args, &mut stdin.lock(), &mut stdout.lock(), &mut io::stderr()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

/// Reads the graph, solves from the requested source and writes the report
/// to `output`. Prompts go to `prompt` so `output` stays machine readable.
fn run<R: BufRead, W: Write, P: Write>(
    args: &Args,
    input: &mut R,
    output: &mut W,
    prompt: &mut P,
) -> Result<()> {
    let graph = read_graph(&args.graph, args.parallel_edges)?;

    // an unknown target fails before anything is solved or printed
    if let Some(target) = &args.target {
        if graph.vertex_id(target).is_none() {
            return Err(PathError::UnknownTargetVertex(target.clone()));
        }
    }

    if !args.json {
        writeln!(output, "{}", GraphSummary::new(&graph))?;
    }

    let table = match &args.source {
        Some(source) => single_source(&graph, source)?,
        None => match prompt_for_source(&graph, input, prompt)? {
            Some(table) => table,
            None => {
                writeln!(prompt, "No starting vertex given.")?;
                return Ok(());
            }
        },
    };

    let report = PathReport::new(&graph, &table);
    let route = args
        .target
        .as_deref()
        .map(|target| Route::new(&graph, &table, target))
        .transpose()?;

    if args.json {
        writeln!(output, "{}", report.to_json(route.as_ref())?)?;
    } else {
        writeln!(output, "{}", report)?;
        if let Some(route) = &route {
            writeln!(output, "{}", route)?;
        }
    }

    Ok(())
}

/// Asks for a starting vertex until a known one is entered. Returns `None`
/// when the input ends first.
fn prompt_for_source<R: BufRead, W: Write>(
    graph: &NamedGraph,
    input: &mut R,
    prompt: &mut W,
) -> Result<Option<PathTable>> {
    let mut line = String::new();

    loop {
        write!(prompt, "Please input your starting vertex: ")?;
        prompt.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match single_source(graph, line.trim()) {
            Ok(table) => return Ok(Some(table)),
            Err(PathError::UnknownSourceVertex(name)) => {
                writeln!(prompt, "Invalid vertex name {:?}, try again.", name)?;
            }
            Err(error) => return Err(error),
        }
    }
}
