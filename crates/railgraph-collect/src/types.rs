//! Facts document and collection options.

use serde::Deserialize;
use serde_json::Value;

// Configuration

/// Columns every model tends to have; hidden with `hide_magic`.
pub const MAGIC_COLUMNS: [&str; 20] = [
    // authentication plugins
    "login",
    "crypted_password",
    "salt",
    "remember_token",
    "remember_token_expires_at",
    "activation_code",
    "activated_at",
    // framework-managed
    "created_at",
    "created_on",
    "updated_at",
    "updated_on",
    "lock_version",
    "type",
    "id",
    "position",
    "parent_id",
    "lft",
    "rgt",
    "quote",
    "template",
];

/// Options controlling how model facts become nodes and edges.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Render every model as `model-brief` / `class-brief`.
    pub brief: bool,
    /// Drop [`MAGIC_COLUMNS`] and `<table>_count` from model attributes.
    pub hide_magic: bool,
    /// Omit ` :<type>` from attribute rows.
    pub hide_types: bool,
    /// Emit `is-a` edges from superclasses.
    pub inheritance: bool,
    /// Keep associations inherited from the superclass on the subclass too.
    pub transitive: bool,
    /// Skip `through` and many-to-many associations.
    pub only_simple_edges: bool,
    /// Include facts of kind `class`.
    pub all: bool,
    /// Include facts of kind `module`.
    pub modules: bool,
    /// `fontsize` option for model nodes.
    pub fontsize: Option<u32>,
    /// Superclass name marking a model that derives directly from the ORM.
    pub orm_base: String,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            brief: false,
            hide_magic: false,
            hide_types: false,
            inheritance: false,
            transitive: false,
            only_simple_edges: false,
            all: false,
            modules: false,
            fontsize: None,
            orm_base: "ActiveRecord::Base".to_string(),
        }
    }
}

impl CollectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brief(mut self, brief: bool) -> Self {
        self.brief = brief;
        self
    }

    pub fn with_hide_magic(mut self, hide_magic: bool) -> Self {
        self.hide_magic = hide_magic;
        self
    }

    pub fn with_hide_types(mut self, hide_types: bool) -> Self {
        self.hide_types = hide_types;
        self
    }

    pub fn with_inheritance(mut self, inheritance: bool) -> Self {
        self.inheritance = inheritance;
        self
    }

    pub fn with_transitive(mut self, transitive: bool) -> Self {
        self.transitive = transitive;
        self
    }

    pub fn with_only_simple_edges(mut self, only_simple_edges: bool) -> Self {
        self.only_simple_edges = only_simple_edges;
        self
    }

    pub fn with_all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    pub fn with_modules(mut self, modules: bool) -> Self {
        self.modules = modules;
        self
    }

    pub fn with_fontsize(mut self, fontsize: Option<u32>) -> Self {
        self.fontsize = fontsize;
        self
    }

    pub fn with_orm_base(mut self, orm_base: impl Into<String>) -> Self {
        self.orm_base = orm_base.into();
        self
    }
}

// Facts Document

/// Everything a collaborator extracted about one diagram.
///
/// `nodes` and `edges` hold raw tuples and are validated during collection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FactsDocument {
    pub origin: String,
    pub diagram_kind: Option<String>,
    pub show_label: bool,
    /// `[width, height]`
    pub size: Option<(f64, f64)>,
    /// Schema or migration version shown in the label node
    pub version: Option<String>,
    pub nodes: Vec<Value>,
    pub edges: Vec<Value>,
    pub models: Vec<ModelFact>,
}

/// What kind of definition a [`ModelFact`] describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactKind {
    /// A class backed by the ORM
    #[default]
    Model,
    /// Any other class
    Class,
    Module,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelFact {
    pub name: String,
    pub kind: FactKind,
    pub superclass: Option<String>,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    pub table_name: Option<String>,
    pub columns: Vec<ColumnFact>,
    pub associations: Vec<AssociationFact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnFact {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationMacro {
    BelongsTo,
    HasOne,
    HasMany,
    HasAndBelongsToMany,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssociationFact {
    #[serde(rename = "macro")]
    pub kind: AssociationMacro,
    pub name: String,
    pub class_name: String,
    /// Join association for `has_many :through`
    #[serde(default)]
    pub through: Option<String>,
}
