//! Diagram graph model and DOT rendering.
//!
//! Collaborators fill a [`Diagram`] with typed nodes and edges, then call
//! [`Diagram::render`] once. Rendering can first prune the graph around the
//! diagram's origin node (see [`NeighborhoodPruner`]).
//!
//! # Module Structure
//!
//! - [`model`]: node and edge types, kind vocabularies
//! - [`diagram`]: the builder and its metadata
//! - [`prune`]: neighborhood pruning
//! - [`dot`]: DOT writing utilities
//! - `render`: per-kind node and edge formatting
//!
//! ```
//! use railgraph_dot::{Diagram, Edge, EdgeKind, Node};
//!
//! let mut diagram = Diagram::with_size("User", 8.0, 11.0);
//! diagram.set_diagram_kind("Models");
//! diagram.add_node(Node::model("User", ["email :string"]));
//! diagram.add_edge(Edge::new(EdgeKind::OneMany, "User", "Order", "orders"));
//!
//! let dot = diagram.render(0);
//! assert!(dot.starts_with("digraph models_diagram {"));
//! assert!(dot.contains("size=\"8,11\""));
//! ```

pub mod diagram;
pub mod dot;
pub mod model;
pub mod prune;
mod render;

pub use diagram::{CanvasSize, Diagram, DiagramLabel};
pub use dot::DotWriter;
pub use model::{Edge, EdgeKind, MethodBuckets, Node, NodeBody, NodeKind};
pub use prune::{DEFAULT_HOP_LIMIT, Exclusion, Neighborhood, NeighborhoodPruner};
