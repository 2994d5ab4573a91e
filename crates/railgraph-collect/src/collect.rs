//! Facts document to populated diagram.

use tracing::info;

use railgraph_dot::{CanvasSize, Diagram, DiagramLabel};
use railgraph_error::{Error, Result};

use crate::models::ModelCollector;
use crate::tuple::{edge_from_tuple, node_from_tuple};
use crate::types::{CollectOptions, FactsDocument};

/// Parse a facts document from JSON text.
pub fn parse_facts(json: &str) -> Result<FactsDocument> {
    serde_json::from_str(json).map_err(|err| {
        Error::deserialization_failed(format!("invalid facts document: {err}"))
            .with_operation("collect::parse_facts")
            .with_context("line", err.line().to_string())
            .set_source(err)
    })
}

/// Build a diagram from a facts document.
///
/// Raw tuples are added first, then model facts. The first malformed tuple
/// aborts collection.
pub fn collect_diagram(doc: &FactsDocument, options: &CollectOptions) -> Result<Diagram> {
    let mut diagram = Diagram::new(&doc.origin);
    if let Some((width, height)) = doc.size {
        let size = CanvasSize::new(width, height);
        if !size.is_valid() {
            return Err(Error::invalid_format(
                "size must be two finite positive numbers",
                format!("[{width}, {height}]"),
            )
            .with_operation("collect::document_size"));
        }
        diagram.set_canvas_size(Some(size));
    }
    if let Some(kind) = &doc.diagram_kind {
        diagram.set_diagram_kind(kind);
    }
    diagram.set_show_label(doc.show_label);
    if let Some(version) = &doc.version {
        diagram.set_label_info(DiagramLabel::default().with_version(version));
    }

    for (index, tuple) in doc.nodes.iter().enumerate() {
        diagram.add_node(node_from_tuple(index, tuple)?);
    }
    for (index, tuple) in doc.edges.iter().enumerate() {
        diagram.add_edge(edge_from_tuple(index, tuple)?);
    }

    ModelCollector::new(options, &doc.models).collect_into(&mut diagram);

    info!(
        nodes = diagram.nodes().len(),
        edges = diagram.edges().len(),
        models = doc.models.len(),
        "facts collected"
    );
    Ok(diagram)
}

/// [`parse_facts`] followed by [`collect_diagram`].
pub fn diagram_from_json(json: &str, options: &CollectOptions) -> Result<Diagram> {
    let doc = parse_facts(json)?;
    collect_diagram(&doc, options).map_err(|e| e.with_operation("collect::diagram_from_json"))
}

/// Size from a `W,H` string, e.g. `8,11` or `7.5,10`.
pub fn parse_canvas_size(text: &str) -> Result<CanvasSize> {
    let invalid = || {
        Error::invalid_argument("size must be two numbers separated by a comma")
            .with_operation("collect::parse_canvas_size")
            .with_context("value", text)
    };
    let (w, h) = text.split_once(',').ok_or_else(invalid)?;
    let width = w.trim().parse::<f64>().map_err(|_| invalid())?;
    let height = h.trim().parse::<f64>().map_err(|_| invalid())?;
    let size = CanvasSize::new(width, height);
    if !size.is_valid() {
        return Err(invalid());
    }
    Ok(size)
}
