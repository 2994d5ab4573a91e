//! Output generation (DOT, XMI).

use std::time::Instant;

use chrono::Local;
use tracing::info;

use railgraph_dot::{Diagram, DiagramLabel};

use crate::options::{GraphOptions, OutputFormat};

/// Render the diagram in the requested format.
pub fn render_output(diagram: &Diagram, opts: &GraphOptions) -> String {
    let render_start = Instant::now();

    let result = match opts.format {
        OutputFormat::Dot => diagram.render(opts.hop_limit()),
        OutputFormat::Xmi => diagram.render_xmi(),
    };

    info!(
        "Graph rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );
    result
}

/// Label facts for a diagram generated now by this binary.
pub fn label_info(version: Option<&str>) -> DiagramLabel {
    let label = DiagramLabel::default()
        .with_generated_at(Local::now().naive_local())
        .with_generator(format!("railgraph {}", env!("CARGO_PKG_VERSION")));
    match version {
        Some(version) => label.with_version(version),
        None => label,
    }
}
