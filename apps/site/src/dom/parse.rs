//! html5ever `TreeSink` that builds a [`Document`].

use std::borrow::Cow;
use std::cell::RefCell;

use html5ever::driver::ParseOpts;
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{parse_document, Attribute as Html5Attribute, QualName};

use super::arena::{Attribute, Document, NodeData, NodeId};

/// Parses an HTML page. Parsing is lenient and never fails, like a browser.
pub fn parse_html(html: &str) -> Document {
    parse_document(PageSink::new(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_document()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle(NodeId);

/// Interior mutability is required: `TreeSink` methods take `&self`.
struct PageSink {
    doc: RefCell<Document>,
}

impl PageSink {
    fn new() -> Self {
        Self {
            doc: RefCell::new(Document::new()),
        }
    }

    fn into_document(self) -> Document {
        self.doc.into_inner()
    }

    fn append_to(&self, parent: NodeId, child: NodeOrText<Handle>) {
        let mut doc = self.doc.borrow_mut();
        match child {
            NodeOrText::AppendNode(node) => doc.append(parent, node.0),
            NodeOrText::AppendText(text) => doc.append_text(parent, &text),
        }
    }
}

impl TreeSink for PageSink {
    type Handle = Handle;
    type Output = Self;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self
    }

    fn parse_error(&self, _msg: Cow<'static, str>) {}

    fn get_document(&self) -> Self::Handle {
        Handle(self.doc.borrow().root())
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        static EMPTY: QualName = QualName {
            prefix: None,
            ns: html5ever::ns!(),
            local: html5ever::local_name!(""),
        };

        let doc = self.doc.borrow();
        match doc.get(target.0).map(|n| &n.data) {
            Some(NodeData::Element { name, .. }) => {
                // SAFETY: names live in the arena owned by `self`. html5ever uses
                // the returned reference immediately, before any further node
                // is allocated, so the backing vector is not reallocated under it.
                unsafe { std::mem::transmute::<&QualName, &'a QualName>(name) }
            }
            _ => &EMPTY,
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Html5Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let attrs = attrs
            .into_iter()
            .map(|a| Attribute {
                name: a.name,
                value: a.value.to_string(),
            })
            .collect();
        Handle(self.doc.borrow_mut().create_element(name, attrs))
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        Handle(self.doc.borrow_mut().create_comment(text.to_string()))
    }

    fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Self::Handle {
        Handle(self.doc.borrow_mut().create_comment(String::new()))
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        self.append_to(parent.0, child);
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let parent = self.doc.borrow().parent(element.0);
        match parent {
            Some(parent) => self.append_to(parent, child),
            None => self.append_to(prev_element.0, child),
        }
    }

    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        let mut doc = self.doc.borrow_mut();
        let root = doc.root();
        let doctype = doc.create_doctype(name.to_string());
        doc.append(root, doctype);
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x.0 == y.0
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        let mut doc = self.doc.borrow_mut();
        match new_node {
            NodeOrText::AppendNode(node) => doc.insert_before(sibling.0, node.0),
            NodeOrText::AppendText(text) => {
                let text_node = doc.create_text(text.to_string());
                doc.insert_before(sibling.0, text_node);
            }
        }
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Html5Attribute>) {
        let mut doc = self.doc.borrow_mut();
        if let Some(node) = doc.get_mut(target.0) {
            if let NodeData::Element {
                attrs: existing, ..
            } = &mut node.data
            {
                for attr in attrs {
                    if !existing.iter().any(|a| a.name == attr.name) {
                        existing.push(Attribute {
                            name: attr.name,
                            value: attr.value.to_string(),
                        });
                    }
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.doc.borrow_mut().detach(target.0);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let mut doc = self.doc.borrow_mut();
        let children: Vec<_> = doc.children(node.0).collect();
        for child in children {
            doc.append(new_parent.0, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builds_html_body() {
        let doc = parse_html("<!DOCTYPE html><html><body><p>Hello</p></body></html>");

        let p = doc
            .descendants(doc.root())
            .into_iter()
            .find(|&id| doc.tag_name(id) == Some("p"))
            .expect("should find p");
        assert_eq!(doc.text_content(p), "Hello");
    }

    #[test]
    fn test_parse_keeps_attributes() {
        let doc = parse_html(r#"<section id="about" class="resume-section lead">x</section>"#);

        let section = doc
            .descendants(doc.root())
            .into_iter()
            .find(|&id| doc.tag_name(id) == Some("section"))
            .expect("should find section");
        assert_eq!(doc.element_id(section), Some("about"));
        assert!(doc.has_class(section, "lead"));
    }

    #[test]
    fn test_parse_implies_missing_structure() {
        let doc = parse_html("<p>bare</p>");

        let tags: Vec<_> = doc
            .descendants(doc.root())
            .into_iter()
            .filter_map(|id| doc.tag_name(id))
            .collect();
        assert_eq!(tags, vec!["html", "head", "body", "p"]);
    }
}
