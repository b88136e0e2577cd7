//! Node representation
//!
//! Every node variant implements the same small contract: whether it will
//! accept a fragment, how it digests one, and what text it renders.

use smallvec::SmallVec;
use std::fmt;

use crate::classify::{self, FragmentClass};

/// Elements whose content is never rendered as text
const INVISIBLE_TYPES: &[&str] = &["audio", "head", "script", "style", "video"];

/// Marker that ends a textarea's raw content
const TEXTAREA_END: &str = "</textarea";

/// Unique identifier for a node in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Type of node, with the state each variant carries
#[derive(Debug, Clone, PartialEq)]
pub enum NodeType {
    /// Document root, never closed
    Root,
    /// Container element, open until its closing tag arrives
    Element { tag_name: String, closed: bool },
    /// Element that can never have children
    Void { tag_name: String },
    /// Run of plain text
    Text(String),
    /// `<!-- ... -->`, accumulated until the content ends with `-->`
    Comment { content: String, closed: bool },
    /// `<textarea>` raw content, accumulated until `</textarea` shows up
    Textarea { content: String, closed: bool },
    /// `<!doctype ...>` declaration
    Doctype,
}

impl NodeType {
    /// Build the node type for the first fragment of a new node
    pub fn from_fragment(fragment: &str) -> Self {
        match classify::classify(fragment) {
            FragmentClass::Text => NodeType::Text(fragment.to_string()),
            FragmentClass::Comment => NodeType::Comment {
                content: fragment.to_string(),
                closed: fragment.ends_with("-->"),
            },
            FragmentClass::Doctype => NodeType::Doctype,
            // The opening tag itself is not part of the raw content
            FragmentClass::Textarea => NodeType::Textarea {
                content: String::new(),
                closed: false,
            },
            FragmentClass::Void(tag_name) => NodeType::Void {
                tag_name: tag_name.to_string(),
            },
            FragmentClass::Element(tag_name) => NodeType::Element {
                tag_name: tag_name.to_string(),
                closed: false,
            },
        }
    }
}

/// A node in the document
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Node type and associated data
    pub node_type: NodeType,
    /// Child node IDs, in document order
    pub children: SmallVec<[NodeId; 8]>,
}

impl Node {
    /// Create a new node
    pub fn new(id: NodeId, node_type: NodeType) -> Self {
        Self {
            id,
            node_type,
            children: SmallVec::new(),
        }
    }

    /// Tag name for elements, or the synthetic kind for everything else
    pub fn kind(&self) -> &str {
        match &self.node_type {
            NodeType::Root => "root",
            NodeType::Element { tag_name, .. } | NodeType::Void { tag_name } => tag_name.as_str(),
            NodeType::Text(_) => "text",
            NodeType::Comment { .. } => "comment",
            NodeType::Textarea { .. } => "textarea",
            NodeType::Doctype => "doctype",
        }
    }

    /// Check if this is the document root
    pub fn is_root(&self) -> bool {
        matches!(self.node_type, NodeType::Root)
    }

    /// Check if this node routes fragments to children (root and elements)
    pub fn is_container(&self) -> bool {
        matches!(self.node_type, NodeType::Root | NodeType::Element { .. })
    }

    /// Check if this node can accept no further input
    pub fn is_closed(&self) -> bool {
        match &self.node_type {
            NodeType::Root | NodeType::Text(_) => false,
            NodeType::Element { closed, .. }
            | NodeType::Comment { closed, .. }
            | NodeType::Textarea { closed, .. } => *closed,
            NodeType::Void { .. } | NodeType::Doctype => true,
        }
    }

    /// Check if this node's content is rendered
    pub fn is_visible(&self) -> bool {
        match &self.node_type {
            NodeType::Element { tag_name, .. } => !INVISIBLE_TYPES.contains(&tag_name.as_str()),
            NodeType::Root => true,
            _ => false,
        }
    }

    /// Whether this node wants the given fragment routed to it
    pub fn will_accept(&self, fragment: &str) -> bool {
        match &self.node_type {
            NodeType::Text(_) => !fragment.starts_with('<'),
            NodeType::Root => true,
            _ => !self.is_closed(),
        }
    }

    /// Whether the fragment is this element's own closing tag.
    ///
    /// This is a prefix match on the literal tag name, so `</pre>` also
    /// closes an open `p`.
    pub fn is_closed_by(&self, fragment: &str) -> bool {
        match &self.node_type {
            NodeType::Element { tag_name, .. } => fragment
                .strip_prefix("</")
                .is_some_and(|rest| rest.starts_with(tag_name.as_str())),
            _ => false,
        }
    }

    /// Mark an element closed. No-op for every other variant.
    pub fn close(&mut self) {
        if let NodeType::Element { closed, .. } = &mut self.node_type {
            *closed = true;
        }
    }

    /// Append a fragment to a content-carrying node.
    ///
    /// Containers never get here; the document routes fragments for them.
    pub fn digest(&mut self, fragment: &str) {
        match &mut self.node_type {
            NodeType::Text(content) => content.push_str(fragment),
            NodeType::Comment { content, closed } => {
                content.push_str(fragment);
                *closed = content.ends_with("-->");
            }
            NodeType::Textarea { content, closed } => {
                content.push_str(fragment);
                *closed = content.contains(TEXTAREA_END);
            }
            NodeType::Root
            | NodeType::Element { .. }
            | NodeType::Void { .. }
            | NodeType::Doctype => {}
        }
    }

    /// Text rendered by this node alone, ignoring children
    pub fn own_text(&self) -> &str {
        match &self.node_type {
            NodeType::Text(content) => content.as_str(),
            NodeType::Textarea { content, .. } => content
                .split_once(TEXTAREA_END)
                .map_or(content.as_str(), |(before, _)| before),
            _ => "",
        }
    }

    /// Raw accumulated content for text, comment and textarea nodes
    pub fn content(&self) -> Option<&str> {
        match &self.node_type {
            NodeType::Text(content)
            | NodeType::Comment { content, .. }
            | NodeType::Textarea { content, .. } => Some(content.as_str()),
            _ => None,
        }
    }
}
