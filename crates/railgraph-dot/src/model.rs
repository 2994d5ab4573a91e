//! Node and edge types for diagram graphs.

use std::collections::BTreeMap;
use std::fmt;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

// Node Kind

/// The fixed node vocabulary shared by collectors and the renderer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum NodeKind {
    /// Persistent model with one row per content column
    Model,
    ModelBrief,
    /// Plain class, rendered as an empty record
    Class,
    ClassBrief,
    /// Controller with public/protected/private method compartments
    Controller,
    ControllerBrief,
    Module,
    /// State machine, rendered as a subgraph cluster
    Aasm,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

// Node Body

/// Method names of a controller, split by visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MethodBuckets {
    pub public: Vec<String>,
    pub protected: Vec<String>,
    pub private: Vec<String>,
}

/// Kind-specific payload of a node. Each variant holds only what its
/// rendering needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeBody {
    /// Attribute rows, e.g. `"email :string"`
    Model { rows: Vec<String> },
    ModelBrief,
    Class,
    ClassBrief,
    Controller { methods: MethodBuckets },
    ControllerBrief,
    Module,
    /// Raw DOT lines placed inside the cluster
    Aasm { lines: Vec<String> },
    /// A kind outside the vocabulary; rendered as a bare node.
    Unknown { kind: String },
}

impl NodeBody {
    /// Body for a kind that carries no payload.
    ///
    /// Payload kinds get an empty payload.
    pub fn empty(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Model => Self::Model { rows: Vec::new() },
            NodeKind::ModelBrief => Self::ModelBrief,
            NodeKind::Class => Self::Class,
            NodeKind::ClassBrief => Self::ClassBrief,
            NodeKind::Controller => Self::Controller {
                methods: MethodBuckets::default(),
            },
            NodeKind::ControllerBrief => Self::ControllerBrief,
            NodeKind::Module => Self::Module,
            NodeKind::Aasm => Self::Aasm { lines: Vec::new() },
        }
    }

    /// The vocabulary kind, or `None` for unknown kinds.
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            Self::Model { .. } => Some(NodeKind::Model),
            Self::ModelBrief => Some(NodeKind::ModelBrief),
            Self::Class => Some(NodeKind::Class),
            Self::ClassBrief => Some(NodeKind::ClassBrief),
            Self::Controller { .. } => Some(NodeKind::Controller),
            Self::ControllerBrief => Some(NodeKind::ControllerBrief),
            Self::Module => Some(NodeKind::Module),
            Self::Aasm { .. } => Some(NodeKind::Aasm),
            Self::Unknown { .. } => None,
        }
    }

    pub fn kind_name(&self) -> &str {
        match self {
            Self::Unknown { kind } => kind,
            other => other.kind().map(|k| k.as_str()).unwrap_or_default(),
        }
    }
}

// Node

/// A diagram node. Names are not unique: two nodes may share a name and
/// both are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    pub name: String,
    pub body: NodeBody,
    /// Extra DOT attributes, e.g. `fontsize=10`
    pub options: BTreeMap<String, String>,
}

impl Node {
    pub fn new(name: impl Into<String>, body: NodeBody) -> Self {
        Self {
            name: name.into(),
            body,
            options: BTreeMap::new(),
        }
    }

    pub fn model<I, S>(name: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            NodeBody::Model {
                rows: rows.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn controller(name: impl Into<String>, methods: MethodBuckets) -> Self {
        Self::new(name, NodeBody::Controller { methods })
    }

    pub fn state_machine<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            NodeBody::Aasm {
                lines: lines.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Node of a kind that carries no payload (`class`, `model-brief`, ...).
    pub fn plain(kind: NodeKind, name: impl Into<String>) -> Self {
        Self::new(name, NodeBody::empty(kind))
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn kind_name(&self) -> &str {
        self.body.kind_name()
    }
}

// Edge Kind

/// Relationship vocabulary. Unrecognized names parse into `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum EdgeKind {
    OneOne,
    OneMany,
    ManyMany,
    /// Inheritance, drawn from superclass to subclass
    IsA,
    /// State-machine transition
    Event,
    #[strum(default)]
    Unknown(String),
}

impl EdgeKind {
    pub fn from_name(name: &str) -> Self {
        name.parse()
            .unwrap_or_else(|_| Self::Unknown(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::OneOne => "one-one",
            Self::OneMany => "one-many",
            Self::ManyMany => "many-many",
            Self::IsA => "is-a",
            Self::Event => "event",
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Edge

/// A directed, optionally labeled relationship between two node names.
///
/// Endpoints are not checked against the node list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub kind: EdgeKind,
    pub from: String,
    pub to: String,
    /// Empty means no label
    pub label: String,
}

impl Edge {
    pub fn new(
        kind: EdgeKind,
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            from: from.into(),
            to: to.into(),
            label: label.into(),
        }
    }

    pub fn unlabeled(kind: EdgeKind, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(kind, from, to, "")
    }

    /// Whether either endpoint is `name`.
    pub fn touches(&self, name: &str) -> bool {
        self.from == name || self.to == name
    }
}
