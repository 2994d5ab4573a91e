//! Neighborhood pruning around the diagram origin.
//!
//! Each round takes the edges touching any frontier name, drops them, and
//! deletes every node named by the frontier or by either endpoint of those
//! edges. Both endpoints become the next frontier, so it re-includes the
//! names just deleted. One round therefore removes the origin together with
//! its whole direct neighborhood, and each further round one more ring. This
//! over-deletes compared to a breadth-first boundary; existing diagrams depend
//! on the exact behavior.
//!
//! The railroad tool this descends from deleted only the frontier names each
//! round, one ring less than here, so its neighbors went a round later.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::model::{Edge, Node};

/// Hop limit used when pruning is requested without an explicit limit.
pub const DEFAULT_HOP_LIMIT: usize = 3;

/// Nodes and edges left after pruning, in insertion order.
#[derive(Debug, Default)]
pub struct Neighborhood<'a> {
    pub nodes: Vec<&'a Node>,
    pub edges: Vec<&'a Edge>,
}

/// Nodes and edges removed from rendering.
///
/// Computed as a set difference by value, so identical duplicates are kept
/// or excluded together.
#[derive(Debug, Default)]
pub struct Exclusion<'a> {
    nodes: HashSet<&'a Node>,
    edges: HashSet<&'a Edge>,
}

impl<'a> Exclusion<'a> {
    pub fn excludes_node(&self, node: &Node) -> bool {
        self.nodes.contains(node)
    }

    pub fn excludes_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Computes what survives `hop_limit` deletion rounds from `origin`.
///
/// A hop limit of zero prunes nothing.
pub struct NeighborhoodPruner<'a> {
    origin: &'a str,
    hop_limit: usize,
}

impl<'a> NeighborhoodPruner<'a> {
    pub fn new(origin: &'a str, hop_limit: usize) -> Self {
        Self { origin, hop_limit }
    }

    pub fn surviving(&self, nodes: &'a [Node], edges: &'a [Edge]) -> Neighborhood<'a> {
        let mut nodes: Vec<&'a Node> = nodes.iter().collect();
        let mut edges: Vec<&'a Edge> = edges.iter().collect();
        let mut frontier: BTreeSet<&'a str> = BTreeSet::from([self.origin]);

        for round in 0..self.hop_limit {
            if frontier.is_empty() {
                break;
            }

            let mut next = BTreeSet::new();
            for name in &frontier {
                let (connected, rest): (Vec<&Edge>, Vec<&Edge>) = std::mem::take(&mut edges)
                    .into_iter()
                    .partition(|edge| edge.touches(name));
                edges = rest;

                for edge in connected {
                    next.insert(edge.from.as_str());
                    next.insert(edge.to.as_str());
                }
            }
            nodes.retain(|node| {
                let name = node.name.as_str();
                !frontier.contains(name) && !next.contains(name)
            });

            debug!(
                round,
                frontier = frontier.len(),
                remaining_nodes = nodes.len(),
                remaining_edges = edges.len(),
                "pruning round"
            );
            frontier = next;
        }

        Neighborhood { nodes, edges }
    }

    /// `original − surviving` for both nodes and edges.
    pub fn excluded(&self, nodes: &'a [Node], edges: &'a [Edge]) -> Exclusion<'a> {
        if self.hop_limit == 0 {
            return Exclusion::default();
        }

        let surviving = self.surviving(nodes, edges);
        let kept_nodes: HashSet<&Node> = surviving.nodes.into_iter().collect();
        let kept_edges: HashSet<&Edge> = surviving.edges.into_iter().collect();

        let exclusion = Exclusion {
            nodes: nodes.iter().filter(|n| !kept_nodes.contains(n)).collect(),
            edges: edges.iter().filter(|e| !kept_edges.contains(e)).collect(),
        };
        debug!(
            origin = self.origin,
            hop_limit = self.hop_limit,
            excluded_nodes = exclusion.node_count(),
            excluded_edges = exclusion.edge_count(),
            "neighborhood pruned"
        );
        exclusion
    }
}
