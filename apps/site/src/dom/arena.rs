//! Arena-backed document tree.
//!
//! Every node lives in one vector and links to its relatives by index. Nodes
//! removed from the tree stay allocated but are unreachable from the document
//! root, so queries and serialization never see them.

use html5ever::{ns, LocalName, QualName};

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel for "no node".
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
    },
    Text(String),
    Comment(String),
    Doctype {
        name: String,
    },
}

#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// An HTML document as an arena of linked nodes.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds an HTML-namespace element name.
pub fn html_name(local: &str) -> QualName {
    QualName::new(None, ns!(html), LocalName::from(local))
}

/// Builds a namespace-less attribute name.
pub fn attr_name(local: &str) -> QualName {
    QualName::new(None, ns!(), LocalName::from(local))
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId::NONE,
        };
        doc.root = doc.alloc(NodeData::Document);
        doc
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(data));
        id
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        self.alloc(NodeData::Element { name, attrs })
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Text(text.into()))
    }

    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Comment(text.into()))
    }

    pub fn create_doctype(&mut self, name: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Doctype { name: name.into() })
    }

    /// Appends `child` as the last child of `parent`, detaching it first.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);

        let last_child = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
            node.prev_sibling = last_child;
        }

        if last_child.is_some() {
            if let Some(last) = self.get_mut(last_child) {
                last.next_sibling = child;
            }
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Appends text, merging into a trailing text node when there is one.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        let last_child = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        if let Some(last) = self.get_mut(last_child) {
            if let NodeData::Text(existing) = &mut last.data {
                existing.push_str(text);
                return;
            }
        }

        let node = self.create_text(text);
        self.append(parent, node);
    }

    /// Inserts `new_node` immediately before `sibling`.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        self.detach(new_node);

        let (parent, prev) = match self.get(sibling) {
            Some(n) => (n.parent, n.prev_sibling),
            None => return,
        };

        if let Some(node) = self.get_mut(new_node) {
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Inserts `new_node` immediately after `sibling`.
    pub fn insert_after(&mut self, sibling: NodeId, new_node: NodeId) {
        let (parent, next) = match self.get(sibling) {
            Some(n) => (n.parent, n.next_sibling),
            None => return,
        };

        if next.is_some() {
            self.insert_before(next, new_node);
        } else if parent.is_some() {
            self.append(parent, new_node);
        }
    }

    /// Unlinks a node from its parent and siblings. Its own subtree stays intact.
    pub fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = match self.get(id) {
            Some(n) => (n.parent, n.prev_sibling, n.next_sibling),
            None => return,
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    /// Removes every child of `parent`.
    pub fn clear_children(&mut self, parent: NodeId) {
        let children: Vec<_> = self.children(parent).collect();
        for child in children {
            self.detach(child);
        }
    }

    /// Replaces all children of `parent` with a single text node.
    pub fn set_text_content(&mut self, parent: NodeId, text: &str) {
        self.clear_children(parent);
        let node = self.create_text(text);
        self.append(parent, node);
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(NodeId::is_some)
    }

    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let first = self.get(parent).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children {
            doc: self,
            current: first,
        }
    }

    /// Child elements of `parent`, skipping text and comments.
    pub fn element_children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(parent).filter(|&c| self.is_element(c))
    }

    /// Attached descendants of `root` in document order, excluding `root`.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).collect();
        stack.reverse();
        while let Some(id) = stack.pop() {
            out.push(id);
            let mut children: Vec<_> = self.children(id).collect();
            children.reverse();
            stack.extend(children);
        }
        out
    }
}

pub struct Children<'a> {
    doc: &'a Document,
    current: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .doc
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(id)
    }
}

/// Element accessors.
impl Document {
    pub fn element_name(&self, id: NodeId) -> Option<&QualName> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(name),
            _ => None,
        })
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element_name(id).map(|name| name.local.as_ref())
    }

    pub fn attrs(&self, id: NodeId) -> &[Attribute] {
        match self.get(id).map(|n| &n.data) {
            Some(NodeData::Element { attrs, .. }) => attrs,
            _ => &[],
        }
    }

    pub fn attr(&self, id: NodeId, attr: &str) -> Option<&str> {
        self.attrs(id)
            .iter()
            .find(|a| a.name.local.as_ref() == attr)
            .map(|a| a.value.as_str())
    }

    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.attr(id, "id")
    }

    pub fn classes(&self, id: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.attr(id, "class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).any(|c| c == class)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Element { .. }))
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Concatenated text of every descendant text node.
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .into_iter()
            .filter_map(|d| self.text(d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(doc: &mut Document, tag: &str) -> NodeId {
        doc.create_element(html_name(tag), vec![])
    }

    #[test]
    fn test_append_keeps_order() {
        let mut doc = Document::new();
        let ul = element(&mut doc, "ul");
        let a = element(&mut doc, "li");
        let b = element(&mut doc, "li");
        doc.append(doc.root(), ul);
        doc.append(ul, a);
        doc.append(ul, b);

        let children: Vec<_> = doc.children(ul).collect();
        assert_eq!(children, vec![a, b]);
        assert_eq!(doc.parent(a), Some(ul));
    }

    #[test]
    fn test_detach_middle_child_relinks_siblings() {
        let mut doc = Document::new();
        let div = element(&mut doc, "div");
        let (a, b, c) = (
            element(&mut doc, "p"),
            element(&mut doc, "p"),
            element(&mut doc, "p"),
        );
        doc.append(div, a);
        doc.append(div, b);
        doc.append(div, c);

        doc.detach(b);

        let children: Vec<_> = doc.children(div).collect();
        assert_eq!(children, vec![a, c]);
        assert_eq!(doc.parent(b), None);
    }

    #[test]
    fn test_insert_after_last_child_appends() {
        let mut doc = Document::new();
        let div = element(&mut doc, "div");
        let h2 = element(&mut doc, "h2");
        let p = element(&mut doc, "p");
        doc.append(div, h2);
        doc.insert_after(h2, p);

        let children: Vec<_> = doc.children(div).collect();
        assert_eq!(children, vec![h2, p]);
    }

    #[test]
    fn test_insert_after_middle() {
        let mut doc = Document::new();
        let div = element(&mut doc, "div");
        let h2 = element(&mut doc, "h2");
        let footer = element(&mut doc, "footer");
        let p = element(&mut doc, "p");
        doc.append(div, h2);
        doc.append(div, footer);
        doc.insert_after(h2, p);

        let children: Vec<_> = doc.children(div).collect();
        assert_eq!(children, vec![h2, p, footer]);
    }

    #[test]
    fn test_set_text_content_replaces_children() {
        let mut doc = Document::new();
        let p = element(&mut doc, "p");
        let b = element(&mut doc, "b");
        doc.append(p, b);
        doc.append_text(b, "old");

        doc.set_text_content(p, "<new>");

        let children: Vec<_> = doc.children(p).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(doc.text(children[0]), Some("<new>"));
        assert_eq!(doc.text_content(p), "<new>");
    }

    #[test]
    fn test_append_text_merges() {
        let mut doc = Document::new();
        let p = element(&mut doc, "p");
        doc.append_text(p, "Hello, ");
        doc.append_text(p, "World!");

        assert_eq!(doc.children(p).count(), 1);
        assert_eq!(doc.text_content(p), "Hello, World!");
    }

    #[test]
    fn test_has_class_matches_whole_tokens() {
        let mut doc = Document::new();
        let div = doc.create_element(
            html_name("div"),
            vec![Attribute {
                name: attr_name("class"),
                value: "d-flex mb-5".to_string(),
            }],
        );
        assert!(doc.has_class(div, "mb-5"));
        assert!(!doc.has_class(div, "mb"));
    }
}
