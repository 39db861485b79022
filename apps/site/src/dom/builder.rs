//! Typed element construction.
//!
//! `ElementBuilder` is the only way rendering code creates nodes. Tag names
//! and attribute names are `&'static str`, so content from the data document
//! can never pick them. Leaf content is always a text node, and `href` only
//! accepts a [`SafeUrl`]. No method takes a markup string.

use super::arena::{attr_name, html_name, Attribute, Document, NodeId};
use crate::sanitize::SafeUrl;

#[derive(Debug, Clone)]
enum Child {
    Element(ElementBuilder),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Child>,
}

impl ElementBuilder {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    fn set(mut self, name: &'static str, value: String) -> Self {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Adds class tokens. Repeated calls accumulate, space separated.
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        let classes = classes.as_ref().trim();
        if classes.is_empty() {
            return self;
        }
        match self.attrs.iter_mut().find(|(n, _)| *n == "class") {
            Some((_, existing)) => {
                existing.push(' ');
                existing.push_str(classes);
                self
            }
            None => {
                self.attrs.push(("class", classes.to_string()));
                self
            }
        }
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.set("title", title.into())
    }

    pub fn data_icon(self, icon: impl Into<String>) -> Self {
        self.set("data-icon", icon.into())
    }

    pub fn href(self, url: SafeUrl) -> Self {
        self.set("href", url.to_string())
    }

    /// Opens in a new browsing context without an opener or referrer.
    pub fn new_tab(self) -> Self {
        self.set("target", "_blank".to_string())
            .set("rel", "noopener noreferrer".to_string())
    }

    /// Attribute whose name and value are both fixed in the source.
    pub fn static_attr(self, name: &'static str, value: &'static str) -> Self {
        self.set(name, value.to_string())
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ElementBuilder>) -> Self {
        self.children
            .extend(children.into_iter().map(Child::Element));
        self
    }

    /// Creates the subtree in `doc`, detached.
    pub fn build(self, doc: &mut Document) -> NodeId {
        let attrs = self
            .attrs
            .into_iter()
            .map(|(name, value)| Attribute {
                name: attr_name(name),
                value,
            })
            .collect();
        let element = doc.create_element(html_name(self.tag), attrs);

        for child in self.children {
            let node = match child {
                Child::Element(builder) => builder.build(doc),
                Child::Text(text) => doc.create_text(text),
            };
            doc.append(element, node);
        }
        element
    }

    pub fn append_to(self, doc: &mut Document, parent: NodeId) -> NodeId {
        let node = self.build(doc);
        doc.append(parent, node);
        node
    }
}
