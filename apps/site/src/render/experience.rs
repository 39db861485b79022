use super::anchors::{self, EXPERIENCE, SECTION_HEADING};
use super::{Section, SectionError};
use crate::dom::{Document, ElementBuilder};
use crate::models::ExperienceEntry;

/// Spacing class applied to every block except the last.
const SPACING_CLASS: &str = "mb-5";

/// One block per entry, in the given order, after the section heading.
pub fn render(doc: &mut Document, entries: &[ExperienceEntry]) -> Result<(), SectionError> {
    let container = anchors::require(doc, Section::Experience, EXPERIENCE)?;

    // Everything but the heading belongs to a previous render.
    let heading = doc.child_by_tag(container, SECTION_HEADING);
    let stale: Vec<_> = doc
        .children(container)
        .filter(|&c| Some(c) != heading)
        .collect();
    for node in stale {
        doc.detach(node);
    }

    let last = entries.len().saturating_sub(1);
    for (index, entry) in entries.iter().enumerate() {
        experience_block(entry, index < last).append_to(doc, container);
    }
    Ok(())
}

fn experience_block(entry: &ExperienceEntry, spaced: bool) -> ElementBuilder {
    let mut block =
        ElementBuilder::new("div").class("d-flex flex-column flex-md-row justify-content-between");
    if spaced {
        block = block.class(SPACING_CLASS);
    }

    let responsibilities = entry
        .responsibilities
        .iter()
        .map(|r| ElementBuilder::new("li").text(r.as_str()));

    block
        .child(
            ElementBuilder::new("div")
                .class("flex-grow-1")
                .child(ElementBuilder::new("h3").class("mb-0").text(entry.title.as_str()))
                .child(
                    ElementBuilder::new("div")
                        .class("subheading mb-3")
                        .text(format!("{} | {}", entry.company, entry.location)),
                )
                .child(ElementBuilder::new("ul").children(responsibilities)),
        )
        .child(
            ElementBuilder::new("div").class("flex-shrink-0").child(
                ElementBuilder::new("span")
                    .class("text-primary")
                    .text(format!("{} - {}", entry.start_date, entry.end_date)),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;
    use crate::render::test_support::PAGE;

    fn entry(title: &str) -> ExperienceEntry {
        ExperienceEntry {
            title: title.to_string(),
            company: "Acme".into(),
            location: "Remote".into(),
            start_date: "2020".into(),
            end_date: "Present".into(),
            responsibilities: vec!["First".into(), "Second".into()],
        }
    }

    fn blocks(doc: &Document) -> Vec<crate::dom::NodeId> {
        doc.select_all("#experience .resume-section-content .d-flex")
    }

    #[test]
    fn test_spacing_on_all_but_last() {
        let mut doc = parse_html(PAGE);
        let entries = vec![entry("C"), entry("B"), entry("A")];
        render(&mut doc, &entries).unwrap();

        let blocks = blocks(&doc);
        assert_eq!(blocks.len(), 3);
        let spaced: Vec<_> = blocks.iter().map(|&b| doc.has_class(b, "mb-5")).collect();
        assert_eq!(spaced, vec![true, true, false]);

        let titles: Vec<_> = doc
            .select_all("#experience h3")
            .iter()
            .map(|&h| doc.text_content(h))
            .collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_empty_experience_keeps_heading_only() {
        let mut doc = parse_html(PAGE);
        render(&mut doc, &[]).unwrap();

        assert!(blocks(&doc).is_empty());
        let container = doc.select_first(EXPERIENCE).unwrap();
        let children: Vec<_> = doc.children(container).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(doc.tag_name(children[0]), Some("h2"));
    }

    #[test]
    fn test_block_shape() {
        let mut doc = parse_html(PAGE);
        render(&mut doc, &[entry("Engineer")]).unwrap();

        let block = blocks(&doc)[0];
        assert_eq!(
            doc.outer_html(block),
            concat!(
                r#"<div class="d-flex flex-column flex-md-row justify-content-between">"#,
                r#"<div class="flex-grow-1"><h3 class="mb-0">Engineer</h3>"#,
                r#"<div class="subheading mb-3">Acme | Remote</div>"#,
                r#"<ul><li>First</li><li>Second</li></ul></div>"#,
                r#"<div class="flex-shrink-0"><span class="text-primary">2020 - Present</span></div>"#,
                r#"</div>"#
            )
        );
    }

    #[test]
    fn test_rerender_replaces_blocks() {
        let mut doc = parse_html(PAGE);
        render(&mut doc, &[entry("A"), entry("B")]).unwrap();
        render(&mut doc, &[entry("Only")]).unwrap();

        let blocks = blocks(&doc);
        assert_eq!(blocks.len(), 1);
        assert!(!doc.has_class(blocks[0], "mb-5"));
    }

    #[test]
    fn test_missing_container() {
        let mut doc = parse_html("<section id=\"experience\"></section>");
        assert_eq!(
            render(&mut doc, &[entry("A")]),
            Err(SectionError::AnchorMissing {
                section: Section::Experience,
                selector: EXPERIENCE
            })
        );
    }
}
