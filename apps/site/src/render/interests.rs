use super::anchors::{self, INTERESTS, SECTION_HEADING};
use super::{Section, SectionError};
use crate::dom::{Document, ElementBuilder};
use crate::models::InterestsInfo;

/// Summary, details and hobbies as three paragraphs right after the heading.
///
/// Whatever follows the heading is replaced. Without a heading the container
/// is cleared and the paragraphs are appended to it.
pub fn render(doc: &mut Document, interests: &InterestsInfo) -> Result<(), SectionError> {
    let container = anchors::require(doc, Section::Interests, INTERESTS)?;

    let paragraphs = [
        ElementBuilder::new("p").text(interests.summary.as_str()),
        ElementBuilder::new("p").text(interests.details.as_str()),
        ElementBuilder::new("p")
            .class("mb-0")
            .text(interests.hobbies.as_str()),
    ];

    match doc.child_by_tag(container, SECTION_HEADING) {
        Some(heading) => {
            let stale: Vec<_> = doc
                .children(container)
                .skip_while(|&c| c != heading)
                .skip(1)
                .collect();
            for node in stale {
                doc.detach(node);
            }

            let mut previous = heading;
            for paragraph in paragraphs {
                let node = paragraph.build(doc);
                doc.insert_after(previous, node);
                previous = node;
            }
        }
        None => {
            doc.clear_children(container);
            for paragraph in paragraphs {
                paragraph.append_to(doc, container);
            }
        }
    }
    Ok(())
}
