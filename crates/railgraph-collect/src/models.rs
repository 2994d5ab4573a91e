//! Model facts to nodes and edges.

use std::collections::HashSet;

use tracing::{debug, trace};

use railgraph_dot::{Diagram, Edge, EdgeKind, Node, NodeKind};

use crate::inflect::{class_name_for, normalize_class_name};
use crate::types::{
    AssociationFact, AssociationMacro, CollectOptions, FactKind, MAGIC_COLUMNS, ModelFact,
};

/// Turns [`ModelFact`]s into diagram nodes and relationship edges.
pub struct ModelCollector<'a> {
    options: &'a CollectOptions,
    models: &'a [ModelFact],
    /// (from, to, label) of many-to-many edges already emitted
    many_many: HashSet<(String, String, String)>,
}

impl<'a> ModelCollector<'a> {
    pub fn new(options: &'a CollectOptions, models: &'a [ModelFact]) -> Self {
        Self {
            options,
            models,
            many_many: HashSet::new(),
        }
    }

    /// Add every model, in document order.
    pub fn collect_into(&mut self, diagram: &mut Diagram) {
        for model in self.models {
            self.process_model(model, diagram);
        }
    }

    fn process_model(&mut self, model: &ModelFact, diagram: &mut Diagram) {
        debug!(name = %model.name, kind = ?model.kind, "processing model");

        let generated = match model.kind {
            FactKind::Model => {
                diagram.add_node(self.model_node(model));
                for assoc in self.own_associations(model) {
                    if let Some(edge) = self.association_edge(&model.name, assoc) {
                        diagram.add_edge(edge);
                    }
                }
                true
            }
            FactKind::Class if self.options.all => {
                let kind = if self.options.brief {
                    NodeKind::ClassBrief
                } else {
                    NodeKind::Class
                };
                diagram.add_node(Node::plain(kind, &model.name));
                true
            }
            FactKind::Module if self.options.modules => {
                diagram.add_node(Node::plain(NodeKind::Module, &model.name));
                false
            }
            _ => {
                trace!(name = %model.name, "skipped");
                false
            }
        };

        if self.options.inheritance && generated {
            if let Some(superclass) = model.superclass.as_deref() {
                if superclass != self.options.orm_base && superclass != "Object" {
                    diagram.add_edge(Edge::unlabeled(EdgeKind::IsA, superclass, &model.name));
                }
            }
        }
    }

    fn model_node(&self, model: &ModelFact) -> Node {
        let derived = model
            .superclass
            .as_deref()
            .is_some_and(|s| s != self.options.orm_base);

        let node = if self.options.brief || model.is_abstract || derived {
            Node::plain(NodeKind::ModelBrief, &model.name)
        } else {
            Node::model(&model.name, self.attribute_rows(model))
        };

        match self.options.fontsize {
            Some(size) => node.with_option("fontsize", size.to_string()),
            None => node,
        }
    }

    fn attribute_rows(&self, model: &ModelFact) -> Vec<String> {
        let counter = model.table_name.as_ref().map(|t| format!("{t}_count"));
        model
            .columns
            .iter()
            .filter(|c| {
                !self.options.hide_magic
                    || !(MAGIC_COLUMNS.contains(&c.name.as_str())
                        || counter.as_deref() == Some(c.name.as_str()))
            })
            .map(|c| {
                if self.options.hide_types {
                    c.name.clone()
                } else {
                    format!("{} :{}", c.name, c.ty)
                }
            })
            .collect()
    }

    /// Associations of `model`, minus the superclass's when inheritance is
    /// drawn and not transitive.
    fn own_associations(&self, model: &'a ModelFact) -> Vec<&'a AssociationFact> {
        let inherited: &[AssociationFact] = match (&model.superclass, self.options.inheritance) {
            (Some(superclass), true) if !self.options.transitive => self
                .models
                .iter()
                .find(|m| &m.name == superclass)
                .map(|m| m.associations.as_slice())
                .unwrap_or_default(),
            _ => &[],
        };
        model
            .associations
            .iter()
            .filter(|a| !inherited.contains(a))
            .collect()
    }

    fn association_edge(&mut self, class_name: &str, assoc: &AssociationFact) -> Option<Edge> {
        trace!(class_name, association = %assoc.name, "processing association");

        if assoc.kind == AssociationMacro::BelongsTo {
            return None;
        }
        if self.options.only_simple_edges && assoc.through.is_some() {
            return None;
        }

        let target = normalize_class_name(&assoc.class_name);
        // Only non-standard association names get a label.
        let label = if target == class_name_for(&assoc.name) {
            String::new()
        } else {
            assoc.name.clone()
        };

        let kind = match (assoc.kind, &assoc.through) {
            (AssociationMacro::HasOne, _) => EdgeKind::OneOne,
            (AssociationMacro::HasMany, None) => EdgeKind::OneMany,
            _ => {
                if self.options.only_simple_edges {
                    return None;
                }
                let reverse = (target.clone(), class_name.to_string(), label.clone());
                if self.many_many.contains(&reverse) {
                    return None;
                }
                self.many_many
                    .insert((class_name.to_string(), target.clone(), label.clone()));
                EdgeKind::ManyMany
            }
        };

        Some(Edge::new(kind, class_name, target, label))
    }
}
