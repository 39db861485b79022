use tracing::{debug, warn};

use super::anchors::{SkillsLists, LANGUAGES_LIST_ID, SKILLS, TOOLS_LIST_ID, WORKFLOW_LIST_ID};
use super::icons::run_icon_scan;
use super::{RenderContext, Section, SectionError};
use crate::dom::{Document, ElementBuilder, NodeId};
use crate::models::{LanguageSkill, SkillsInfo, ToolSkill};

/// Languages, tools and workflow, each into its own list.
///
/// A missing list is skipped and the other two still render; the first
/// missing one is reported.
pub fn render(
    doc: &mut Document,
    skills: &SkillsInfo,
    ctx: &RenderContext<'_>,
) -> Result<(), SectionError> {
    let lists = SkillsLists::resolve(doc);
    if lists.languages.is_none() && lists.tools.is_none() && lists.workflow.is_none() {
        return Err(missing(SKILLS));
    }

    let mut first_missing = None;

    match lists.languages {
        Some(list) => {
            debug!("Populating {} languages", skills.languages.len());
            fill(doc, list, skills.languages.iter().map(language_item));
        }
        None => {
            warn!("Languages list not found");
            first_missing.get_or_insert(missing(LANGUAGES_LIST_ID));
        }
    }

    match lists.tools {
        Some(list) => {
            debug!("Populating {} tools", skills.tools.len());
            fill(doc, list, skills.tools.iter().map(|t| tool_item(t, ctx)));
            run_icon_scan(ctx.icon_scanner, doc, list);
        }
        None => {
            warn!("Tools list not found");
            first_missing.get_or_insert(missing(TOOLS_LIST_ID));
        }
    }

    match lists.workflow {
        Some(list) => {
            debug!("Populating {} workflow items", skills.workflow.len());
            fill(
                doc,
                list,
                skills.workflow.iter().map(|w| checked_item(w.as_str())),
            );
        }
        None => {
            warn!("Workflow list not found");
            first_missing.get_or_insert(missing(WORKFLOW_LIST_ID));
        }
    }

    match first_missing {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn missing(selector: &'static str) -> SectionError {
    SectionError::AnchorMissing {
        section: Section::Skills,
        selector,
    }
}

fn fill(doc: &mut Document, list: NodeId, items: impl Iterator<Item = ElementBuilder>) {
    doc.clear_children(list);
    for item in items {
        item.append_to(doc, list);
    }
}

/// List item led by the check glyph.
fn checked_item(text: impl Into<String>) -> ElementBuilder {
    ElementBuilder::new("li")
        .child(
            ElementBuilder::new("span")
                .class("fa-li")
                .child(ElementBuilder::new("i").class("fas fa-check")),
        )
        .text(text)
}

fn language_item(language: &LanguageSkill) -> ElementBuilder {
    checked_item(format!(
        "{} \u{b7} {} \u{b7} {}",
        language.name, language.skills, language.proficiency
    ))
}

/// Iconify tools put the icon on the list item itself, wrapped in the link.
/// Everything else is a list item holding a link around a font glyph.
fn tool_item(tool: &ToolSkill, ctx: &RenderContext<'_>) -> ElementBuilder {
    let link = ElementBuilder::new("a")
        .href(ctx.safe_url(&tool.url))
        .new_tab()
        .title(tool.name.as_str());

    if tool.is_iconify() {
        link.child(
            ElementBuilder::new("li")
                .class("list-inline-item iconify")
                .data_icon(tool.icon.as_str()),
        )
    } else {
        ElementBuilder::new("li")
            .class("list-inline-item")
            .child(link.child(ElementBuilder::new("i").class(&tool.icon)))
    }
}
