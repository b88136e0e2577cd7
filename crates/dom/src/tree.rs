//! Document tree
//!
//! Owns every node of one parse and routes incoming fragments down the
//! right spine of open nodes.

use log::trace;
use rustc_hash::FxHashMap;
use std::fmt;

use crate::node::{Node, NodeId, NodeType};

/// Stack of open elements, mirroring the right spine below the root
type OpenElements = Vec<NodeId>;

/// Document that owns all nodes
pub struct Document {
    /// All nodes in the document
    nodes: FxHashMap<NodeId, Node>,
    /// Open containers from the outermost element down to the deepest
    open_elements: OpenElements,
    /// Next available node ID
    next_id: u32,
    /// Root node
    root_id: NodeId,
}

impl Document {
    /// Create a new document holding only the root
    pub fn new() -> Self {
        let root_id = NodeId::new(0);
        let root = Node::new(root_id, NodeType::Root);

        let mut nodes = FxHashMap::default();
        nodes.insert(root_id, root);

        Self {
            nodes,
            open_elements: Vec::new(),
            next_id: 1,
            root_id,
        }
    }

    /// Get the root node ID
    pub fn root_id(&self) -> NodeId {
        self.root_id
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Get all children of a node
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.get(id)
            .map(|n| n.children.to_vec())
            .unwrap_or_default()
    }

    /// Route a fragment to the deepest open node that accepts it.
    ///
    /// The deepest open container's last child gets the fragment if it
    /// accepts it. Otherwise the fragment either closes that container or
    /// starts a new last child.
    pub fn digest(&mut self, fragment: &str) {
        let current = self.current_node();

        let last_child = self.get(current).and_then(|n| n.children.last().copied());
        if let Some(child) = last_child.and_then(|id| self.nodes.get_mut(&id)) {
            if child.will_accept(fragment) {
                child.digest(fragment);
                return;
            }
        }

        if let Some(node) = self.nodes.get_mut(&current) {
            if node.is_closed_by(fragment) {
                trace!("Closing <{}> ({})", node.kind(), current);
                node.close();
                self.open_elements.pop();
                return;
            }
        }

        let child_id = self.create_child(current, fragment);
        if self.get(child_id).is_some_and(|n| n.is_container()) {
            self.open_elements.push(child_id);
        }
    }

    /// Deepest open container (top of the stack or root)
    fn current_node(&self) -> NodeId {
        self.open_elements.last().copied().unwrap_or(self.root_id)
    }

    /// Create a node from a fragment and append it as the last child
    fn create_child(&mut self, parent_id: NodeId, fragment: &str) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;

        let node = Node::new(id, NodeType::from_fragment(fragment));
        trace!("New {} node {} under {}", node.kind(), id, parent_id);
        self.nodes.insert(id, node);

        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.push(id);
        }

        id
    }

    /// Node IDs on the right spine: the root, then each open last child
    pub fn open_spine(&self) -> Vec<NodeId> {
        let mut spine = vec![self.root_id];
        let mut current = self.root_id;

        while let Some(&child_id) = self.get(current).and_then(|n| n.children.last()) {
            match self.get(child_id) {
                Some(child) if !child.is_closed() => {
                    spine.push(child_id);
                    current = child_id;
                }
                _ => break,
            }
        }

        spine
    }

    /// Visible text of the whole document
    pub fn text(&self) -> String {
        self.text_of(self.root_id)
    }

    /// Visible text of a node and its descendants.
    ///
    /// Non-empty child texts are joined with newlines; invisible elements
    /// contribute nothing. Post-order walk on an explicit stack.
    pub fn text_of(&self, id: NodeId) -> String {
        struct Frame<'a> {
            node: &'a Node,
            next_child: usize,
            parts: Vec<String>,
        }

        let Some(start) = self.get(id) else {
            return String::new();
        };
        if !start.is_container() {
            return start.own_text().to_string();
        }

        let mut stack = vec![Frame {
            node: start,
            next_child: 0,
            parts: Vec::new(),
        }];

        while let Some(frame) = stack.last_mut() {
            let pending = if frame.node.is_visible() {
                frame.node.children.get(frame.next_child).copied()
            } else {
                None
            };

            if let Some(child_id) = pending {
                frame.next_child += 1;
                let Some(child) = self.get(child_id) else {
                    continue;
                };
                if child.is_container() {
                    stack.push(Frame {
                        node: child,
                        next_child: 0,
                        parts: Vec::new(),
                    });
                } else if !child.own_text().is_empty() {
                    frame.parts.push(child.own_text().to_string());
                }
                continue;
            }

            let Some(done) = stack.pop() else {
                break;
            };
            let text = done.parts.join("\n");
            match stack.last_mut() {
                Some(parent) => {
                    if !text.is_empty() {
                        parent.parts.push(text);
                    }
                }
                None => return text,
            }
        }

        String::new()
    }

    /// Get the number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the document holds nothing but the root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Pretty print the tree for debugging
    pub fn pretty_print(&self) -> String {
        let mut output = String::new();
        let mut stack = vec![(self.root_id, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            let indent = "  ".repeat(depth);

            match &node.node_type {
                NodeType::Root => output.push_str("#root\n"),
                NodeType::Element { tag_name, .. } => {
                    output.push_str(&format!("{}<{}>\n", indent, tag_name));
                }
                NodeType::Void { tag_name } => {
                    output.push_str(&format!("{}<{}/>\n", indent, tag_name));
                }
                NodeType::Text(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        output.push_str(&format!("{}#text: {:?}\n", indent, trimmed));
                    }
                }
                NodeType::Comment { .. } => output.push_str(&format!("{}#comment\n", indent)),
                NodeType::Textarea { .. } => {
                    output.push_str(&format!("{}#textarea: {:?}\n", indent, node.own_text()));
                }
                NodeType::Doctype => output.push_str(&format!("{}#doctype\n", indent)),
            }

            for &child_id in node.children.iter().rev() {
                stack.push((child_id, depth + 1));
            }
        }

        output
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty_print())
    }
}
