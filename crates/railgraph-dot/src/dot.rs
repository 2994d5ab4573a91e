//! DOT format utilities for graph rendering.

use std::fmt::Write;

/// Quote a node name. No escaping is applied; names must not contain `"`.
pub fn quote(name: &str) -> String {
    format!("\"{name}\"")
}

/// Sanitize a string to be a valid DOT identifier.
/// Replaces any non-alphanumeric character with underscore.
pub fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push('\t');
    }
}

/// A DOT digraph writer. Every statement lands on its own line.
pub struct DotWriter {
    output: String,
    indent: usize,
}

impl DotWriter {
    /// Open a digraph with the given identifier.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {name} {{");
        Self { output, indent: 1 }
    }

    /// Add the graph-level attribute statement, e.g. `graph[overlap=false splines=true]`.
    pub fn graph_attrs(&mut self, attrs: &[(&str, String)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str("graph[");
        for (i, (key, value)) in attrs.iter().enumerate() {
            if i > 0 {
                self.output.push(' ');
            }
            let _ = write!(self.output, "{key}={value}");
        }
        self.output.push_str("]\n");
        self
    }

    /// Add a node statement. `id` is written as given, so callers quote it.
    pub fn node(&mut self, id: &str, attrs: &[String]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{id} [{}]", attrs.join(", "));
        self
    }

    /// Add an edge statement between two quoted names.
    pub fn edge(&mut self, from: &str, to: &str, attrs: &[String]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(
            self.output,
            "{} -> {} [{}]",
            quote(from),
            quote(to),
            attrs.join(", ")
        );
        self
    }

    /// Start a subgraph cluster.
    pub fn start_cluster(&mut self, id: &str, label: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "subgraph cluster_{} {{", sanitize_id(id));
        self.indent += 1;
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "label = {}", quote(label));
        self
    }

    /// Add a raw line at the current indent.
    pub fn raw(&mut self, line: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str(line);
        self.output.push('\n');
        self
    }

    /// End the current subgraph cluster.
    pub fn end_cluster(&mut self) -> &mut Self {
        self.indent -= 1;
        write_indent(&mut self.output, self.indent);
        self.output.push_str("}\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sanitize_id() {
        assert_eq!(sanitize_id("order state"), "order_state");
        assert_eq!(sanitize_id("admin::user"), "admin__user");
    }

    #[test]
    fn test_writer_layout() {
        let mut dot = DotWriter::new("g");
        dot.graph_attrs(&[("overlap", "false".to_string())]);
        dot.node(&quote("A"), &["shape=box".to_string()]);
        dot.node(&quote("B"), &[]);
        dot.edge("A", "B", &["fontsize=10".to_string(), "dir=both".to_string()]);
        dot.start_cluster("s", "S").raw("x -> y").end_cluster();

        let expected = "digraph g {\n\
                        \tgraph[overlap=false]\n\
                        \t\"A\" [shape=box]\n\
                        \t\"B\" []\n\
                        \t\"A\" -> \"B\" [fontsize=10, dir=both]\n\
                        \tsubgraph cluster_s {\n\
                        \t\tlabel = \"S\"\n\
                        \t\tx -> y\n\
                        \t}\n\
                        }\n";
        assert_eq!(dot.build(), expected);
    }
}
