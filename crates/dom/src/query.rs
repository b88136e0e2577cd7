//! Document queries

use crate::node::NodeId;
use crate::tree::Document;

/// Trait for querying a parsed document
pub trait Queryable {
    /// All descendants of the root, in document order
    fn descendants(&self) -> Vec<NodeId>;

    /// Find nodes whose kind (tag name or synthetic kind) matches exactly
    fn get_nodes_by_kind(&self, kind: &str) -> Vec<NodeId>;
}

impl Queryable for Document {
    fn descendants(&self) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.children(self.root_id()).into_iter().rev().collect();

        while let Some(id) = stack.pop() {
            result.push(id);
            if let Some(node) = self.get(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }

        result
    }

    fn get_nodes_by_kind(&self, kind: &str) -> Vec<NodeId> {
        self.descendants()
            .into_iter()
            .filter(|&id| self.get(id).is_some_and(|n| n.kind() == kind))
            .collect()
    }
}
