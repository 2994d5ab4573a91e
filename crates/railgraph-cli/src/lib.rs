//! railgraph command-line interface.

pub mod options;
pub mod output;

use std::io::Read;
use std::time::Instant;

use tracing::info;

use railgraph_collect::{collect_diagram, parse_canvas_size, parse_facts};
use railgraph_dot::Diagram;
use railgraph_error::{Error, Result};

pub use options::{CollectArgs, GraphOptions, OutputFormat};
pub use output::{label_info, render_output};

/// Options for running railgraph.
#[derive(Debug, Clone, Default)]
pub struct RailgraphOptions {
    /// Facts document path; stdin when `None`
    pub input: Option<String>,
    pub output: Option<String>,
    pub graph: GraphOptions,
    pub collect: CollectArgs,
}

/// Main entry point: read facts, build the diagram, render it.
pub fn run_main(opts: &RailgraphOptions) -> Result<String> {
    let json = read_input(opts.input.as_deref())?;
    render_facts(&json, opts)
}

/// Build and render a diagram from facts JSON already in memory.
pub fn render_facts(json: &str, opts: &RailgraphOptions) -> Result<String> {
    let collect_start = Instant::now();
    let diagram = build_diagram(json, opts)?;
    info!(
        "Fact collection: {:.2}s",
        collect_start.elapsed().as_secs_f64()
    );

    Ok(render_output(&diagram, &opts.graph))
}

/// Collect the facts and apply command-line overrides.
pub fn build_diagram(json: &str, opts: &RailgraphOptions) -> Result<Diagram> {
    let mut doc = parse_facts(json)?;
    if let Some(origin) = &opts.graph.origin {
        doc.origin = origin.clone();
    }
    if let Some(kind) = &opts.graph.kind {
        doc.diagram_kind = Some(kind.clone());
    }
    if let Some(version) = &opts.graph.schema_version {
        doc.version = Some(version.clone());
    }
    doc.show_label |= opts.graph.label;

    let mut diagram = collect_diagram(&doc, &opts.collect.to_options())?;

    if let Some(size) = &opts.graph.size {
        diagram.set_canvas_size(Some(parse_canvas_size(size)?));
    }
    if diagram.show_label() {
        diagram.set_label_info(label_info(doc.version.as_deref()));
    }
    Ok(diagram)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("cli::read_input")
                .with_context("path", path)
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|err| Error::from(err).with_operation("cli::read_stdin"))?;
            Ok(buf)
        }
    }
}
