//! Wordfreq DOM - parsed document tree
//!
//! Node variants, the fragment router that builds the tree, and visible
//! text extraction.

mod classify;
mod node;
mod tree;
mod query;

pub use classify::{classify, is_void_element, node_type_name, FragmentClass};
pub use node::{Node, NodeId, NodeType};
pub use tree::Document;
pub use query::Queryable;
