use crate::dom::{Document, ElementBuilder, NodeId};
use crate::loader::LoadError;

pub const FAILURE_MESSAGE: &str = "Failed to load resume data. Check the server log for details.";

const OVERLAY_STYLE: &str = "position:fixed;inset:0;z-index:10000;display:flex;\
align-items:center;justify-content:center;background:rgba(0,0,0,0.8);color:#fff;\
font-size:1.25rem;text-align:center;padding:2rem";

/// Puts a modal failure notice over the page.
///
/// The notice is the first child of `<body>`; no section anchor is touched.
pub fn show_blocking_notice(doc: &mut Document, error: &LoadError) -> NodeId {
    let mut dialog = ElementBuilder::new("div")
        .class("resume-load-failure")
        .static_attr("role", "alertdialog")
        .static_attr("aria-modal", "true")
        .static_attr("style", OVERLAY_STYLE)
        .child(ElementBuilder::new("p").text(FAILURE_MESSAGE));
    if let Some(status) = error.status() {
        dialog = dialog.child(
            ElementBuilder::new("p")
                .class("resume-load-failure-status")
                .text(format!("Status {status}")),
        );
    }

    let host = doc
        .select_first("body")
        .or_else(|| doc.select_first("html"))
        .unwrap_or_else(|| doc.root());
    let node = dialog.build(doc);
    let first = doc.children(host).next();
    match first {
        Some(first) => doc.insert_before(first, node),
        None => doc.append(host, node),
    }
    node
}
