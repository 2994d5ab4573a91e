//! Kind-dispatched DOT serialization.

use tracing::warn;

use crate::diagram::Diagram;
use crate::dot::{DotWriter, quote};
use crate::model::{Edge, EdgeKind, MethodBuckets, Node, NodeBody};
use crate::prune::Exclusion;

/// DOT row separator inside record labels (left-justified line break).
const ROW: &str = "\\l";

/// Render the diagram, skipping everything in `exclusion`.
pub(crate) fn render_dot(diagram: &Diagram, exclusion: &Exclusion<'_>) -> String {
    let graph_id = format!("{}_diagram", diagram.diagram_kind().to_lowercase());
    let mut dot = DotWriter::new(&graph_id);

    write_header(&mut dot, diagram);

    for node in diagram.nodes() {
        if !exclusion.excludes_node(node) {
            write_node(&mut dot, node);
        }
    }
    for edge in diagram.edges() {
        if !exclusion.excludes_edge(edge) {
            dot.edge(&edge.from, &edge.to, &edge_attrs(edge));
        }
    }

    dot.build()
}

fn write_header(dot: &mut DotWriter, diagram: &Diagram) {
    let mut graph_attrs = vec![
        ("overlap", "false".to_string()),
        ("splines", "true".to_string()),
    ];
    if let Some(size) = diagram.canvas_size() {
        graph_attrs.push(("size", format!("\"{},{}\"", size.width, size.height)));
    }
    dot.graph_attrs(&graph_attrs);

    if diagram.show_label() {
        dot.node(
            "_diagram_info",
            &[
                "shape=\"plaintext\"".to_string(),
                format!("label=\"{}\"", label_text(diagram)),
                "fontsize=14".to_string(),
            ],
        );
    }
}

fn label_text(diagram: &Diagram) -> String {
    let info = diagram.label_info();
    let mut text = format!("{} diagram{ROW}", diagram.diagram_kind());
    if let Some(at) = info.generated_at {
        text.push_str(&format!("Date: {}{ROW}", at.format("%b %d %Y - %H:%M")));
    }
    if let Some(version) = &info.version {
        text.push_str(&format!("Version: {version}{ROW}"));
    }
    if let Some(generator) = &info.generator {
        text.push_str(&format!("Generated by {generator}{ROW}"));
    }
    text
}

fn write_node(dot: &mut DotWriter, node: &Node) {
    let mut attrs = match &node.body {
        NodeBody::Model { rows } => record("Mrecord", &node.name, &[rows.join(ROW) + ROW]),
        NodeBody::ModelBrief | NodeBody::ControllerBrief => Vec::new(),
        NodeBody::Class => record("record", &node.name, &[String::new()]),
        NodeBody::ClassBrief => vec!["shape=box".to_string()],
        NodeBody::Controller { methods } => controller(&node.name, methods),
        NodeBody::Module => vec![
            "shape=box".to_string(),
            "style=dotted".to_string(),
            format!("label={}", quote(&node.name)),
        ],
        NodeBody::Aasm { lines } => {
            // Clusters take no attribute list, so node options are dropped.
            dot.start_cluster(&node.name.to_lowercase(), &node.name);
            for line in lines {
                dot.raw(line);
            }
            dot.end_cluster();
            return;
        }
        NodeBody::Unknown { kind } => {
            warn!(kind = %kind, name = %node.name, "unknown node kind, rendering without style");
            Vec::new()
        }
    };

    attrs.extend(node.options.iter().map(|(k, v)| format!("{k}={v}")));
    dot.node(&quote(&node.name), &attrs);
}

/// `shape=<shape>, label="{<name>|<field>|...}"`
fn record(shape: &str, name: &str, fields: &[String]) -> Vec<String> {
    let mut label = String::from(name);
    for field in fields {
        label.push('|');
        label.push_str(field);
    }
    vec![format!("shape={shape}"), format!("label=\"{{{label}}}\"")]
}

fn controller(name: &str, methods: &MethodBuckets) -> Vec<String> {
    fn compartment(names: &[String]) -> String {
        names.join(ROW) + ROW
    }

    record(
        "Mrecord",
        name,
        &[
            compartment(&methods.public),
            compartment(&methods.protected),
            compartment(&methods.private),
        ],
    )
}

fn edge_attrs(edge: &Edge) -> Vec<String> {
    let mut attrs = Vec::new();
    if !edge.label.is_empty() {
        attrs.push(format!("label={}", quote(&edge.label)));
    }

    let style: &[&str] = match &edge.kind {
        EdgeKind::OneOne => &["arrowtail=odot", "arrowhead=dot", "dir=both"],
        EdgeKind::OneMany => &["arrowtail=crow", "arrowhead=dot", "dir=both"],
        EdgeKind::ManyMany => &["arrowtail=crow", "arrowhead=crow", "dir=both"],
        EdgeKind::IsA => &["arrowhead=\"none\"", "arrowtail=\"onormal\""],
        EdgeKind::Event => &["fontsize=10"],
        EdgeKind::Unknown(kind) => {
            warn!(
                kind = %kind,
                from = %edge.from,
                to = %edge.to,
                "unknown edge kind, rendering without style"
            );
            &[]
        }
    };
    attrs.extend(style.iter().map(|s| s.to_string()));
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;
    use pretty_assertions::assert_eq;

    fn node_line(node: Node) -> String {
        let mut dot = DotWriter::new("t");
        write_node(&mut dot, &node);
        let out = dot.build();
        out.lines().skip(1).take_while(|l| *l != "}").collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_model_record() {
        assert_eq!(
            node_line(Node::model("User", ["name", "email :string"])),
            "\t\"User\" [shape=Mrecord, label=\"{User|name\\lemail :string\\l}\"]"
        );
    }

    #[test]
    fn test_plain_kinds() {
        assert_eq!(node_line(Node::plain(NodeKind::ModelBrief, "User")), "\t\"User\" []");
        assert_eq!(
            node_line(Node::plain(NodeKind::Class, "Util")),
            "\t\"Util\" [shape=record, label=\"{Util|}\"]"
        );
        assert_eq!(node_line(Node::plain(NodeKind::ClassBrief, "Util")), "\t\"Util\" [shape=box]");
        assert_eq!(
            node_line(Node::plain(NodeKind::ControllerBrief, "UsersController")),
            "\t\"UsersController\" []"
        );
        assert_eq!(
            node_line(Node::plain(NodeKind::Module, "Auth")),
            "\t\"Auth\" [shape=box, style=dotted, label=\"Auth\"]"
        );
    }

    #[test]
    fn test_controller_compartments() {
        let methods = MethodBuckets {
            public: vec!["index".into(), "show".into()],
            protected: vec![],
            private: vec!["load_user".into()],
        };
        assert_eq!(
            node_line(Node::controller("UsersController", methods)),
            "\t\"UsersController\" [shape=Mrecord, label=\"{UsersController|index\\lshow\\l|\\l|load_user\\l}\"]"
        );
    }

    #[test]
    fn test_state_machine_cluster() {
        let node = Node::state_machine(
            "Order State",
            ["\"pending\" -> \"paid\" [fontsize=10]", "\"paid\" [shape=doublecircle]"],
        )
        .with_option("fontsize", "10");
        assert_eq!(
            node_line(node),
            "\tsubgraph cluster_order_state {\n\
             \t\tlabel = \"Order State\"\n\
             \t\t\"pending\" -> \"paid\" [fontsize=10]\n\
             \t\t\"paid\" [shape=doublecircle]\n\
             \t}"
        );
    }

    #[test]
    fn test_options_are_appended() {
        let node = Node::model("User", ["id"]).with_option("fontsize", "10");
        assert_eq!(
            node_line(node),
            "\t\"User\" [shape=Mrecord, label=\"{User|id\\l}\", fontsize=10]"
        );
        let brief = Node::plain(NodeKind::ModelBrief, "User")
            .with_option("fontsize", "10")
            .with_option("color", "red");
        assert_eq!(node_line(brief), "\t\"User\" [color=red, fontsize=10]");
    }

    #[test]
    fn test_unknown_node_kind_is_bare() {
        let node = Node::new(
            "Widget",
            NodeBody::Unknown {
                kind: "widget".into(),
            },
        );
        assert_eq!(node_line(node), "\t\"Widget\" []");
    }

    #[test]
    fn test_edge_styles() {
        let attrs = |kind: EdgeKind, label: &str| edge_attrs(&Edge::new(kind, "A", "B", label)).join(", ");

        assert_eq!(attrs(EdgeKind::OneOne, ""), "arrowtail=odot, arrowhead=dot, dir=both");
        assert_eq!(attrs(EdgeKind::OneMany, ""), "arrowtail=crow, arrowhead=dot, dir=both");
        assert_eq!(
            attrs(EdgeKind::OneMany, "orders"),
            "label=\"orders\", arrowtail=crow, arrowhead=dot, dir=both"
        );
        assert_eq!(attrs(EdgeKind::ManyMany, ""), "arrowtail=crow, arrowhead=crow, dir=both");
        assert_eq!(attrs(EdgeKind::IsA, ""), "arrowhead=\"none\", arrowtail=\"onormal\"");
        assert_eq!(attrs(EdgeKind::Event, "pay"), "label=\"pay\", fontsize=10");
        assert_eq!(attrs(EdgeKind::Unknown("uses".into()), ""), "");
        assert_eq!(attrs(EdgeKind::Unknown("uses".into()), "x"), "label=\"x\"");
    }
}
