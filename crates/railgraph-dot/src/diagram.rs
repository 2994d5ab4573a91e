//! The diagram graph model: a builder that collaborators fill with nodes and
//! edges before a single render.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::model::{Edge, Node};
use crate::prune::NeighborhoodPruner;
use crate::render::render_dot;

/// Physical output size in inches, emitted as `size="W,H"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both sides finite and positive; Graphviz rejects anything else.
    pub fn is_valid(&self) -> bool {
        [self.width, self.height]
            .iter()
            .all(|side| side.is_finite() && *side > 0.0)
    }
}

/// Caller-supplied facts for the `_diagram_info` node.
///
/// Missing fields are left out of the label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagramLabel {
    pub generated_at: Option<NaiveDateTime>,
    /// Schema or migration version of the described project
    pub version: Option<String>,
    /// Product name and version, e.g. `railgraph 0.5.0`
    pub generator: Option<String>,
}

impl DiagramLabel {
    pub fn with_generated_at(mut self, at: NaiveDateTime) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }
}

/// Nodes, edges and metadata of one diagram.
///
/// Nodes and edges are append-only and keep insertion order. Names are not
/// deduplicated and edges are not checked against existing nodes.
#[derive(Debug, Clone)]
pub struct Diagram {
    origin_name: String,
    diagram_kind: String,
    show_label: bool,
    label_info: DiagramLabel,
    canvas_size: Option<CanvasSize>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Create an empty diagram rooted at `origin_name` for pruning.
    pub fn new(origin_name: impl Into<String>) -> Self {
        Self {
            origin_name: origin_name.into(),
            diagram_kind: String::new(),
            show_label: false,
            label_info: DiagramLabel::default(),
            canvas_size: None,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_size(origin_name: impl Into<String>, width: f64, height: f64) -> Self {
        let mut diagram = Self::new(origin_name);
        diagram.canvas_size = Some(CanvasSize::new(width, height));
        diagram
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn set_diagram_kind(&mut self, kind: impl Into<String>) {
        self.diagram_kind = kind.into();
    }

    pub fn set_show_label(&mut self, show: bool) {
        self.show_label = show;
    }

    pub fn set_label_info(&mut self, info: DiagramLabel) {
        self.label_info = info;
    }

    pub fn set_canvas_size(&mut self, size: Option<CanvasSize>) {
        self.canvas_size = size;
    }

    pub fn origin_name(&self) -> &str {
        &self.origin_name
    }

    pub fn diagram_kind(&self) -> &str {
        &self.diagram_kind
    }

    pub fn show_label(&self) -> bool {
        self.show_label
    }

    pub fn label_info(&self) -> &DiagramLabel {
        &self.label_info
    }

    pub fn canvas_size(&self) -> Option<CanvasSize> {
        self.canvas_size
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Render to DOT, leaving out what `hop_limit` pruning rounds around the
    /// origin delete. `0` renders everything.
    ///
    /// Does not mutate the diagram; repeated calls give identical output.
    pub fn render(&self, hop_limit: usize) -> String {
        let pruner = NeighborhoodPruner::new(&self.origin_name, hop_limit);
        let exclusion = pruner.excluded(&self.nodes, &self.edges);
        debug!(
            kind = %self.diagram_kind,
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            hop_limit,
            "rendering diagram"
        );
        render_dot(self, &exclusion)
    }

    /// XMI export placeholder: prints a notice to stderr and returns an
    /// empty document.
    pub fn render_xmi(&self) -> String {
        warn!(kind = %self.diagram_kind, "XMI output requested but not implemented");
        eprint!("Sorry. XMI output not yet implemented.\n\n");
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EdgeKind, NodeKind};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn shop() -> Diagram {
        let mut diagram = Diagram::new("User");
        diagram.set_diagram_kind("Models");
        diagram.add_node(Node::model("User", ["name", "email :string"]));
        diagram.add_node(Node::plain(NodeKind::ModelBrief, "Order"));
        diagram.add_edge(Edge::unlabeled(EdgeKind::OneMany, "User", "Order"));
        diagram
    }

    #[test]
    fn test_render_full_document() {
        let expected = "digraph models_diagram {\n\
                        \tgraph[overlap=false splines=true]\n\
                        \t\"User\" [shape=Mrecord, label=\"{User|name\\lemail :string\\l}\"]\n\
                        \t\"Order\" []\n\
                        \t\"User\" -> \"Order\" [arrowtail=crow, arrowhead=dot, dir=both]\n\
                        }\n";
        assert_eq!(shop().render(0), expected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut diagram = shop();
        diagram.set_show_label(true);
        let first = diagram.render(2);
        let second = diagram.render(2);
        assert_eq!(first, second);
        assert_eq!(diagram.nodes().len(), 2);
        assert_eq!(diagram.edges().len(), 1);
    }

    #[test]
    fn test_canvas_size_validity() {
        assert!(CanvasSize::new(8.0, 11.0).is_valid());
        assert!(CanvasSize::new(0.5, 0.5).is_valid());
        assert!(!CanvasSize::new(0.0, 5.0).is_valid());
        assert!(!CanvasSize::new(-3.0, 11.0).is_valid());
        assert!(!CanvasSize::new(f64::NAN, 11.0).is_valid());
        assert!(!CanvasSize::new(8.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_canvas_size_attribute() {
        let mut diagram = Diagram::with_size("User", 8.0, 11.0);
        diagram.set_diagram_kind("Models");
        let out = diagram.render(0);
        assert!(out.contains("\tgraph[overlap=false splines=true size=\"8,11\"]\n"), "{out}");

        let out = shop().render(0);
        assert!(!out.contains("size="), "{out}");
    }

    #[test]
    fn test_duplicate_names_both_render() {
        let mut diagram = Diagram::new("nobody");
        diagram.add_node(Node::plain(NodeKind::Class, "Report"));
        diagram.add_node(Node::plain(NodeKind::Module, "Report"));
        let out = diagram.render(0);
        assert!(out.contains("\t\"Report\" [shape=record, label=\"{Report|}\"]\n"));
        assert!(out.contains("\t\"Report\" [shape=box, style=dotted, label=\"Report\"]\n"));
    }

    #[test]
    fn test_edge_label_prefix() {
        let mut diagram = Diagram::new("User");
        diagram.add_edge(Edge::new(EdgeKind::OneMany, "User", "Order", "orders"));
        let out = diagram.render(0);
        assert!(
            out.contains("\t\"User\" -> \"Order\" [label=\"orders\", arrowtail=crow, arrowhead=dot, dir=both]\n"),
            "{out}"
        );
    }

    #[test]
    fn test_edges_to_missing_nodes_render() {
        let mut diagram = Diagram::new("A");
        diagram.add_edge(Edge::unlabeled(EdgeKind::IsA, "Base", "Missing"));
        let out = diagram.render(0);
        assert!(out.contains("\t\"Base\" -> \"Missing\" [arrowhead=\"none\", arrowtail=\"onormal\"]\n"));
    }

    #[test]
    fn test_pruned_render_skips_excluded() {
        let mut diagram = shop();
        diagram.add_node(Node::plain(NodeKind::ClassBrief, "Audit"));
        diagram.add_edge(Edge::unlabeled(EdgeKind::OneOne, "Audit", "Log"));

        let out = diagram.render(1);
        assert!(!out.contains("\"User\""), "{out}");
        assert!(!out.contains("\"Order\""), "{out}");
        assert!(out.contains("\t\"Audit\" [shape=box]\n"), "{out}");
        assert!(out.contains("\t\"Audit\" -> \"Log\""), "{out}");

        assert_eq!(diagram.render(1), diagram.render(3));
    }

    #[test]
    fn test_label_node() {
        let mut diagram = shop();
        diagram.set_show_label(true);
        let at = NaiveDate::from_ymd_opt(2026, 2, 15)
            .expect("valid date")
            .and_hms_opt(9, 5, 0)
            .expect("valid time");
        diagram.set_label_info(
            DiagramLabel::default()
                .with_generated_at(at)
                .with_version("20260201120000")
                .with_generator("railgraph 0.5.0"),
        );

        let out = diagram.render(0);
        let label_line = out.lines().nth(2).expect("label line");
        assert_eq!(
            label_line,
            "\t_diagram_info [shape=\"plaintext\", label=\"Models diagram\\lDate: Feb 15 2026 - 09:05\\lVersion: 20260201120000\\lGenerated by railgraph 0.5.0\\l\", fontsize=14]"
        );
    }

    #[test]
    fn test_label_without_info() {
        let mut diagram = shop();
        diagram.set_show_label(true);
        let out = diagram.render(0);
        assert!(out.contains("\t_diagram_info [shape=\"plaintext\", label=\"Models diagram\\l\", fontsize=14]\n"));
    }

    #[test]
    fn test_xmi_stub_is_empty() {
        assert_eq!(shop().render_xmi(), "");
    }
}
