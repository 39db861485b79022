//! HTML5 serialization of a [`Document`].

use super::arena::{Document, NodeData, NodeId};
use crate::sanitize::sanitize_text;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text children are emitted verbatim. Only the host page can
/// contain them; the element builder cannot create them. `noscript` is
/// included because the parser runs with scripting enabled.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

impl Document {
    /// Serializes the whole attached tree.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for child in self.children(self.root()) {
            self.write_node(child, &mut out);
        }
        out
    }

    /// Serializes one node and its subtree.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };

        match &node.data {
            NodeData::Document => {
                for child in self.children(id) {
                    self.write_node(child, out);
                }
            }
            NodeData::Doctype { name } => {
                out.push_str("<!DOCTYPE ");
                out.push_str(name);
                out.push('>');
            }
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeData::Text(text) => {
                let raw_parent = self
                    .parent(id)
                    .and_then(|p| self.tag_name(p))
                    .is_some_and(|t| RAW_TEXT_ELEMENTS.contains(&t));
                if raw_parent {
                    out.push_str(text);
                } else {
                    out.push_str(&sanitize_text(text));
                }
            }
            NodeData::Element { name, attrs } => {
                let tag = name.local.as_ref();
                out.push('<');
                out.push_str(tag);
                for attr in attrs {
                    out.push(' ');
                    // Foreign attributes (`xlink:href`, `xmlns:xlink`) keep their prefix.
                    if let Some(prefix) = &attr.name.prefix {
                        out.push_str(prefix.as_ref());
                        out.push(':');
                    }
                    out.push_str(attr.name.local.as_ref());
                    out.push_str("=\"");
                    out.push_str(&sanitize_text(&attr.value));
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&tag) {
                    return;
                }

                for child in self.children(id) {
                    self.write_node(child, out);
                }

                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::parse_html;

    #[test]
    fn test_serialize_round_trips_simple_page() {
        let html = r#"<!DOCTYPE html><html><head><title>R</title></head><body><p class="lead">Hi<br>there</p></body></html>"#;
        let doc = parse_html(html);
        assert_eq!(doc.to_html(), html);
    }

    #[test]
    fn test_serialize_escapes_text_and_attributes() {
        let mut doc = parse_html("<p></p>");
        let p = doc.select_first("p").unwrap();
        doc.set_text_content(p, "<script>alert('x')</script> & more");

        let html = doc.outer_html(p);
        assert_eq!(
            html,
            "<p>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more</p>"
        );
    }

    #[test]
    fn test_serialize_keeps_skeleton_scripts_verbatim() {
        let doc = parse_html("<body><script>if (a < b) { go(); }</script></body>");
        assert!(doc.to_html().contains("<script>if (a < b) { go(); }</script>"));
    }

    #[test]
    fn test_serialize_keeps_raw_text_elements_verbatim() {
        let doc = parse_html(
            "<body><noscript><img src=x></noscript><xmp><b>&</b></xmp><iframe>a<b</iframe></body>",
        );
        let html = doc.to_html();
        assert!(html.contains("<noscript><img src=x></noscript>"), "{html}");
        assert!(html.contains("<xmp><b>&</b></xmp>"), "{html}");
        assert!(html.contains("<iframe>a<b</iframe>"), "{html}");
    }

    #[test]
    fn test_serialize_keeps_attribute_prefixes() {
        let html = r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#icon"></use></svg>"##;
        let doc = parse_html(html);
        let out = doc.to_html();
        assert!(out.contains(r##"<use xlink:href="#icon">"##), "{out}");
        assert!(out.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#), "{out}");
        assert!(!out.contains(" xlink=\""), "{out}");
    }
}
