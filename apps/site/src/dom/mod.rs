// In-memory page tree: html5ever parsing into an arena, anchor lookup through
// the `selectors` crate, typed element construction, and serialization back to HTML.

pub mod arena;
pub mod builder;
pub mod element_ref;
pub mod parse;
pub mod select;
pub mod serialize;

pub use arena::{Document, NodeId};
pub use builder::ElementBuilder;
pub use parse::parse_html;
pub use select::Selector;
