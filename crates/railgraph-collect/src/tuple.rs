//! Validation of raw node and edge tuples.
//!
//! Node tuples are `[kind, name, attributes?, options?]`, edge tuples are
//! exactly `[kind, from, to, label]`. Any other shape is a contract violation
//! and fails with the offending tuple in the error context.

use std::collections::BTreeMap;

use serde_json::Value;

use railgraph_dot::{Edge, EdgeKind, MethodBuckets, Node, NodeBody, NodeKind};
use railgraph_error::{Error, Result};

/// Convert a node tuple into a typed node.
pub fn node_from_tuple(index: usize, tuple: &Value) -> Result<Node> {
    let fail = |message: &str| {
        Error::invalid_format(message, tuple.to_string())
            .with_operation("collect::node_tuple")
            .with_context("index", index.to_string())
    };

    let fields = tuple
        .as_array()
        .ok_or_else(|| fail("node must be an array"))?;
    if !(2..=4).contains(&fields.len()) {
        return Err(fail(&format!(
            "node needs 2 to 4 fields, got {}",
            fields.len()
        )));
    }

    let kind = fields[0]
        .as_str()
        .ok_or_else(|| fail("node kind must be a string"))?;
    let name = fields[1]
        .as_str()
        .ok_or_else(|| fail("node name must be a string"))?;
    let attributes = fields.get(2).unwrap_or(&Value::Null);

    let body = match kind.parse::<NodeKind>() {
        Ok(NodeKind::Model) => NodeBody::Model {
            rows: string_list(attributes).map_err(|m| fail(&m))?,
        },
        Ok(NodeKind::Aasm) => NodeBody::Aasm {
            lines: string_list(attributes).map_err(|m| fail(&m))?,
        },
        Ok(NodeKind::Controller) => NodeBody::Controller {
            methods: method_buckets(attributes).map_err(|m| fail(&m))?,
        },
        // Payload-free kinds ignore whatever attributes were passed.
        Ok(other) => NodeBody::empty(other),
        Err(_) => NodeBody::Unknown {
            kind: kind.to_string(),
        },
    };

    let mut node = Node::new(name, body);
    if let Some(options) = fields.get(3) {
        node.options = options_map(options).map_err(|m| fail(&m))?;
    }
    Ok(node)
}

/// Convert an edge tuple into a typed edge.
pub fn edge_from_tuple(index: usize, tuple: &Value) -> Result<Edge> {
    let fail = |message: &str| {
        Error::invalid_format(message, tuple.to_string())
            .with_operation("collect::edge_tuple")
            .with_context("index", index.to_string())
    };

    let fields = tuple
        .as_array()
        .ok_or_else(|| fail("edge must be an array"))?;
    if fields.len() != 4 {
        return Err(fail(&format!(
            "edge needs exactly 4 fields, got {}",
            fields.len()
        )));
    }

    let mut parts = Vec::with_capacity(4);
    for (field, what) in fields.iter().zip(["kind", "from", "to", "label"]) {
        let text = field
            .as_str()
            .ok_or_else(|| fail(&format!("edge {what} must be a string")))?;
        parts.push(text);
    }

    Ok(Edge::new(
        EdgeKind::from_name(parts[0]),
        parts[1],
        parts[2],
        parts[3],
    ))
}

fn string_list(value: &Value) -> std::result::Result<Vec<String>, String> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| format!("attribute {item} must be a string"))
            })
            .collect(),
        other => Err(format!("attributes must be a list, got {other}")),
    }
}

fn method_buckets(value: &Value) -> std::result::Result<MethodBuckets, String> {
    let Value::Object(map) = value else {
        return Err("controller attributes must be an object with public/protected/private".into());
    };
    let bucket = |key: &str| string_list(map.get(key).unwrap_or(&Value::Null));
    Ok(MethodBuckets {
        public: bucket("public")?,
        protected: bucket("protected")?,
        private: bucket("private")?,
    })
}

fn options_map(value: &Value) -> std::result::Result<BTreeMap<String, String>, String> {
    let map = match value {
        Value::Null => return Ok(BTreeMap::new()),
        Value::Object(map) => map,
        other => return Err(format!("options must be an object, got {other}")),
    };
    map.iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key.clone(), s.clone())),
            Value::Number(_) | Value::Bool(_) => Ok((key.clone(), value.to_string())),
            other => Err(format!("option {key} must be a scalar, got {other}")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use railgraph_error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_model_node() {
        let node = node_from_tuple(0, &json!(["model", "User", ["name :string"], {"fontsize": 10}])).unwrap();
        assert_eq!(node.name, "User");
        assert_eq!(
            node.body,
            NodeBody::Model {
                rows: vec!["name :string".into()]
            }
        );
        assert_eq!(node.options.get("fontsize").map(String::as_str), Some("10"));
    }

    #[test]
    fn test_two_field_node() {
        let node = node_from_tuple(0, &json!(["class", "Util"])).unwrap();
        assert_eq!(node.body, NodeBody::Class);
        assert!(node.options.is_empty());
    }

    #[test]
    fn test_brief_ignores_attributes() {
        let node = node_from_tuple(0, &json!(["model-brief", "User", []])).unwrap();
        assert_eq!(node.body, NodeBody::ModelBrief);
    }

    #[test]
    fn test_controller_node() {
        let node = node_from_tuple(
            0,
            &json!(["controller", "UsersController", {"public": ["index"], "private": ["load"]}]),
        )
        .unwrap();
        let NodeBody::Controller { methods } = node.body else {
            panic!("expected controller body");
        };
        assert_eq!(methods.public, ["index"]);
        assert!(methods.protected.is_empty());
        assert_eq!(methods.private, ["load"]);
    }

    #[test]
    fn test_unknown_kind_is_kept() {
        let node = node_from_tuple(0, &json!(["widget", "W", ["x"]])).unwrap();
        assert_eq!(node.kind_name(), "widget");
    }

    #[test]
    fn test_short_node_fails() {
        let err = node_from_tuple(3, &json!(["model"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(err.operation(), "collect::node_tuple");
        assert!(err.context().contains(&("tuple", r#"["model"]"#.to_string())));
        assert!(err.context().contains(&("index", "3".to_string())));
    }

    #[test]
    fn test_controller_with_list_fails() {
        let err = node_from_tuple(0, &json!(["controller", "C", ["index"]])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert!(err.message().contains("public/protected/private"));
    }

    #[test]
    fn test_non_string_name_fails() {
        let err = node_from_tuple(0, &json!(["model", 7])).unwrap_err();
        assert!(err.message().contains("name"));
    }

    #[test]
    fn test_edge_tuple() {
        let edge = edge_from_tuple(0, &json!(["one-many", "User", "Order", "orders"])).unwrap();
        assert_eq!(edge, Edge::new(EdgeKind::OneMany, "User", "Order", "orders"));
    }

    #[test]
    fn test_three_field_edge_fails() {
        let err = edge_from_tuple(1, &json!(["is-a", "Base", "User"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert!(err.message().contains("exactly 4"));
        assert_eq!(err.operation(), "collect::edge_tuple");
    }

    #[test]
    fn test_edge_label_must_be_string() {
        let err = edge_from_tuple(0, &json!(["event", "a", "b", null])).unwrap_err();
        assert!(err.message().contains("label"));
    }
}
