//! Command-line option groups.

use clap::{Args, ValueEnum};

use railgraph_collect::CollectOptions;
use railgraph_dot::DEFAULT_HOP_LIMIT;

/// Output document format.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Graphviz DOT
    #[default]
    Dot,
    /// XMI (not implemented, produces empty output)
    Xmi,
}

/// Options for rendering the diagram.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphOptions {
    /// Hide the neighborhood of the origin node for N pruning rounds.
    /// `--hops` without a value uses 3 rounds; without the flag nothing is pruned.
    /// The value must be attached (`--hops=2`) so a following FILE is not taken as N.
    #[arg(long, value_name = "N", num_args = 0..=1, require_equals = true)]
    pub hops: Option<Option<usize>>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Dot)]
    pub format: OutputFormat,

    /// Add a label node with diagram kind, date and version
    #[arg(long)]
    pub label: bool,

    /// Output size in inches, e.g. `8,11`
    #[arg(long, value_name = "W,H")]
    pub size: Option<String>,

    /// Diagram kind used for the graph name and label (overrides the document)
    #[arg(long, value_name = "KIND")]
    pub kind: Option<String>,

    /// Origin node for pruning (overrides the document)
    #[arg(long, value_name = "NAME")]
    pub origin: Option<String>,

    /// Schema version shown in the label (overrides the document)
    #[arg(long = "schema-version", value_name = "VERSION")]
    pub schema_version: Option<String>,
}

impl GraphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pruning rounds requested on the command line; `0` disables pruning.
    pub fn hop_limit(&self) -> usize {
        match self.hops {
            None => 0,
            Some(None) => DEFAULT_HOP_LIMIT,
            Some(Some(n)) => n,
        }
    }

    pub fn with_hops(mut self, hops: Option<Option<usize>>) -> Self {
        self.hops = hops;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_label(mut self, label: bool) -> Self {
        self.label = label;
        self
    }

    pub fn with_size(mut self, size: Option<String>) -> Self {
        self.size = size;
        self
    }
}

/// Options for turning model facts into nodes and edges.
#[derive(Args, Debug, Clone, Default)]
pub struct CollectArgs {
    /// Render models without their attributes
    #[arg(long)]
    pub brief: bool,

    /// Hide framework-managed columns (id, timestamps, ...)
    #[arg(long = "hide-magic")]
    pub hide_magic: bool,

    /// Hide column types
    #[arg(long = "hide-types")]
    pub hide_types: bool,

    /// Draw inheritance edges
    #[arg(short = 'i', long)]
    pub inheritance: bool,

    /// Repeat inherited associations on subclasses
    #[arg(long)]
    pub transitive: bool,

    /// Skip many-to-many and `through` associations
    #[arg(long = "only-simple-edges")]
    pub only_simple_edges: bool,

    /// Include non-model classes
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Include modules
    #[arg(short = 'm', long)]
    pub modules: bool,

    /// Font size for model nodes
    #[arg(long, value_name = "PT")]
    pub fontsize: Option<u32>,

    /// Superclass of models that derive directly from the ORM
    #[arg(long = "orm-base", value_name = "CLASS")]
    pub orm_base: Option<String>,
}

impl CollectArgs {
    pub fn to_options(&self) -> CollectOptions {
        let options = CollectOptions::new()
            .with_brief(self.brief)
            .with_hide_magic(self.hide_magic)
            .with_hide_types(self.hide_types)
            .with_inheritance(self.inheritance)
            .with_transitive(self.transitive)
            .with_only_simple_edges(self.only_simple_edges)
            .with_all(self.all)
            .with_modules(self.modules)
            .with_fontsize(self.fontsize);
        match &self.orm_base {
            Some(base) => options.with_orm_base(base),
            None => options,
        }
    }
}
