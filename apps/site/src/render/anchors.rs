//! Selector contract with the host page.
//!
//! The page is assumed, not checked, to hold each anchor once; the first
//! match wins.

use crate::dom::{Document, NodeId, Selector};

use super::{Section, SectionError};

pub const NAME_HEADING: &str = "#about h1";
pub const NAVBAR_NAME: &str = ".navbar-brand span";
pub const BIO: &str = "#about .lead";
pub const SOCIAL_LINKS: &str = "#about .social-icons";
pub const EXPERIENCE: &str = "#experience .resume-section-content";
pub const SKILLS: &str = "#skills .resume-section-content";
pub const INTERESTS: &str = "#interests .resume-section-content";

/// Stable ids for the three skills lists. When absent, the lists are taken
/// positionally from the `ul` elements inside [`SKILLS`].
pub const LANGUAGES_LIST_ID: &str = "skills-languages";
pub const TOOLS_LIST_ID: &str = "skills-tools";
pub const WORKFLOW_LIST_ID: &str = "skills-workflow";

/// Tag of the heading that section content is placed after.
pub const SECTION_HEADING: &str = "h2";

/// First element matching `selector`, or `AnchorMissing`.
pub fn require(
    doc: &Document,
    section: Section,
    selector: &'static str,
) -> Result<NodeId, SectionError> {
    doc.select_first(selector)
        .ok_or(SectionError::AnchorMissing { section, selector })
}

/// The three skills lists, each resolved independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillsLists {
    pub languages: Option<NodeId>,
    pub tools: Option<NodeId>,
    pub workflow: Option<NodeId>,
}

impl SkillsLists {
    /// Resolves each list by its id first. Lists without an id take the
    /// remaining `ul` elements of the skills container in order, skipping
    /// any `ul` already claimed by id.
    pub fn resolve(doc: &Document) -> Self {
        let by_id = [LANGUAGES_LIST_ID, TOOLS_LIST_ID, WORKFLOW_LIST_ID]
            .map(|id| doc.element_by_id(id));

        let mut unclaimed = doc
            .select_first(SKILLS)
            .and_then(|container| {
                Selector::parse("ul").map(|ul| doc.select_all_within(container, &ul))
            })
            .unwrap_or_default()
            .into_iter()
            .filter(|ul| !by_id.contains(&Some(*ul)));

        let [languages, tools, workflow] = by_id.map(|found| found.or_else(|| unclaimed.next()));

        Self {
            languages,
            tools,
            workflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_positional_fallback() {
        let doc = parse_html(
            r#"<section id="skills"><div class="resume-section-content">
                <ul class="a"></ul><ul class="b"></ul><ul class="c"></ul>
            </div></section>"#,
        );
        let lists = SkillsLists::resolve(&doc);
        assert!(doc.has_class(lists.languages.unwrap(), "a"));
        assert!(doc.has_class(lists.tools.unwrap(), "b"));
        assert!(doc.has_class(lists.workflow.unwrap(), "c"));
    }

    #[test]
    fn test_ids_take_precedence_over_position() {
        let doc = parse_html(
            r#"<section id="skills"><div class="resume-section-content">
                <ul id="skills-workflow"></ul><ul id="skills-languages"></ul><ul id="skills-tools"></ul>
            </div></section>"#,
        );
        let lists = SkillsLists::resolve(&doc);
        assert_eq!(doc.element_id(lists.languages.unwrap()), Some("skills-languages"));
        assert_eq!(doc.element_id(lists.tools.unwrap()), Some("skills-tools"));
        assert_eq!(doc.element_id(lists.workflow.unwrap()), Some("skills-workflow"));
    }

    #[test]
    fn test_mixed_ids_and_positions_never_share_a_list() {
        let doc = parse_html(
            r#"<section id="skills"><div class="resume-section-content">
                <ul id="skills-tools"></ul><ul class="first"></ul><ul class="second"></ul>
            </div></section>"#,
        );
        let lists = SkillsLists::resolve(&doc);
        assert_eq!(doc.element_id(lists.tools.unwrap()), Some("skills-tools"));
        assert!(doc.has_class(lists.languages.unwrap(), "first"));
        assert!(doc.has_class(lists.workflow.unwrap(), "second"));
    }

    #[test]
    fn test_too_few_lists() {
        let doc = parse_html(
            r#"<section id="skills"><div class="resume-section-content"><ul></ul></div></section>"#,
        );
        let lists = SkillsLists::resolve(&doc);
        assert!(lists.languages.is_some());
        assert!(lists.tools.is_none());
        assert!(lists.workflow.is_none());
    }

    #[test]
    fn test_require_reports_selector() {
        let doc = parse_html("<p></p>");
        let err = require(&doc, Section::About, BIO).unwrap_err();
        assert_eq!(
            err,
            SectionError::AnchorMissing {
                section: Section::About,
                selector: BIO
            }
        );
    }
}
