//! CSS selector queries over a [`Document`], for locating page anchors.

use selectors::context::{MatchingContext, QuirksMode, SelectorCaches};
use selectors::matching::{self, MatchingForInvalidation, MatchingMode, NeedsSelectorFlags};
use selectors::parser::{ParseRelative, SelectorList};

use super::arena::{Document, NodeId};
use super::element_ref::{ElementRef, PageSelectors};

/// A parsed selector list such as `#about .social-icons`.
pub struct Selector {
    list: SelectorList<PageSelectors>,
}

impl Selector {
    /// Returns `None` for an empty or malformed selector.
    pub fn parse(selector: &str) -> Option<Self> {
        let mut input = cssparser::ParserInput::new(selector);
        let mut parser = cssparser::Parser::new(&mut input);
        let list = SelectorList::parse(&PageSelectors, &mut parser, ParseRelative::No).ok()?;
        Some(Self { list })
    }

    fn matches(&self, element: &ElementRef<'_>, caches: &mut SelectorCaches) -> bool {
        let mut context = MatchingContext::new(
            MatchingMode::Normal,
            None,
            caches,
            QuirksMode::NoQuirks,
            NeedsSelectorFlags::No,
            MatchingForInvalidation::No,
        );
        self.list
            .slice()
            .iter()
            .any(|selector| matching::matches_selector(selector, 0, None, element, &mut context))
    }
}

impl Document {
    fn matching_within<'a>(
        &'a self,
        scope: NodeId,
        selector: &'a Selector,
    ) -> impl Iterator<Item = NodeId> + 'a {
        let mut caches = SelectorCaches::default();
        self.descendants(scope).into_iter().filter(move |&id| {
            self.is_element(id) && selector.matches(&ElementRef::new(self, id), &mut caches)
        })
    }

    /// All attached elements under `scope` matching `selector`, in document
    /// order. Ancestors outside `scope` still count toward combinators, as
    /// with `querySelectorAll`.
    pub fn select_all_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.matching_within(scope, selector).collect()
    }

    pub fn select_first_within(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.matching_within(scope, selector).next()
    }

    /// First match in the whole document. Malformed selectors match nothing.
    pub fn select_first(&self, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector)?;
        self.select_first_within(self.root(), &selector)
    }

    pub fn select_all(&self, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Some(selector) => self.select_all_within(self.root(), &selector),
            None => Vec::new(),
        }
    }

    /// Element with the given `id` attribute, if attached.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|&n| self.element_id(n) == Some(id))
    }

    /// First direct child element with the given tag.
    pub fn child_by_tag(&self, parent: NodeId, tag: &str) -> Option<NodeId> {
        self.element_children(parent)
            .find(|&c| self.tag_name(c).is_some_and(|t| t.eq_ignore_ascii_case(tag)))
    }
}
