//! Fact collection for diagram rendering.
//!
//! Collaborators describe a project as a JSON facts document: raw node and
//! edge tuples, and/or model facts (columns, associations, superclass). This
//! crate validates the tuples and turns everything into a populated
//! [`railgraph_dot::Diagram`].
//!
//! # Module Structure
//!
//! - [`types`]: facts document and [`CollectOptions`]
//! - [`tuple`]: raw tuple validation
//! - [`models`]: model facts to nodes and edges
//! - [`inflect`]: class/association name inflection

mod collect;
pub mod inflect;
pub mod models;
pub mod tuple;
pub mod types;

pub use collect::{collect_diagram, diagram_from_json, parse_canvas_size, parse_facts};
pub use models::ModelCollector;
pub use tuple::{edge_from_tuple, node_from_tuple};
pub use types::{
    AssociationFact, AssociationMacro, ColumnFact, CollectOptions, FactKind, FactsDocument,
    MAGIC_COLUMNS, ModelFact,
};
