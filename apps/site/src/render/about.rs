use tracing::debug;

use super::anchors::{self, BIO, NAME_HEADING, NAVBAR_NAME, SOCIAL_LINKS};
use super::{RenderContext, Section, SectionError};
use crate::dom::{Document, ElementBuilder};
use crate::models::{AboutInfo, SocialLink};

/// Name, navbar name, bio and social links.
///
/// Each anchor is handled on its own, so one missing anchor does not stop the
/// others. The first missing required anchor is reported. The navbar name is
/// optional.
pub fn render(
    doc: &mut Document,
    about: &AboutInfo,
    ctx: &RenderContext<'_>,
) -> Result<(), SectionError> {
    let mut first_missing = None;
    let mut note = |result: Result<(), SectionError>| {
        if let Err(e) = result {
            first_missing.get_or_insert(e);
        }
    };

    if let Some(brand) = doc.select_first(NAVBAR_NAME) {
        doc.set_text_content(brand, &about.full_name());
    } else {
        debug!("No navbar name region; skipping");
    }

    note(render_name(doc, about));
    note(render_bio(doc, about));
    note(render_social_links(doc, &about.social_links, ctx));

    match first_missing {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// `First<br><span class="text-primary">Last</span>` built from nodes.
fn render_name(doc: &mut Document, about: &AboutInfo) -> Result<(), SectionError> {
    let heading = anchors::require(doc, Section::About, NAME_HEADING)?;
    doc.clear_children(heading);

    let first = doc.create_text(about.first_name.as_str());
    doc.append(heading, first);
    ElementBuilder::new("br").append_to(doc, heading);
    ElementBuilder::new("span")
        .class("text-primary")
        .text(about.last_name.as_str())
        .append_to(doc, heading);
    Ok(())
}

fn render_bio(doc: &mut Document, about: &AboutInfo) -> Result<(), SectionError> {
    let bio = anchors::require(doc, Section::About, BIO)?;
    doc.set_text_content(bio, &about.bio);
    Ok(())
}

fn render_social_links(
    doc: &mut Document,
    links: &[SocialLink],
    ctx: &RenderContext<'_>,
) -> Result<(), SectionError> {
    let container = anchors::require(doc, Section::About, SOCIAL_LINKS)?;
    doc.clear_children(container);

    for link in links {
        social_link(link, ctx).append_to(doc, container);
    }
    Ok(())
}

fn social_link(link: &SocialLink, ctx: &RenderContext<'_>) -> ElementBuilder {
    ElementBuilder::new("a")
        .class("social-icon")
        .href(ctx.safe_url(&link.url))
        .new_tab()
        .title(link.platform.as_str())
        .child(ElementBuilder::new("i").class(&link.icon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;
    use crate::render::test_support::{ada, PAGE};
    use url::Url;

    fn render_page(about: &AboutInfo) -> (Document, Result<(), SectionError>) {
        let origin = Url::parse("https://ada.example.org/").unwrap();
        let mut doc = parse_html(PAGE);
        let result = render(&mut doc, about, &RenderContext::new(&origin));
        (doc, result)
    }

    #[test]
    fn test_name_and_navbar() {
        let about = ada().about.unwrap();
        let (doc, result) = render_page(&about);
        assert!(result.is_ok());

        let h1 = doc.select_first(NAME_HEADING).unwrap();
        assert_eq!(
            doc.outer_html(h1),
            r#"<h1 class="mb-0">Ada<br><span class="text-primary">Lovelace</span></h1>"#
        );
        let brand = doc.select_first(NAVBAR_NAME).unwrap();
        assert_eq!(doc.text_content(brand), "Ada Lovelace");
    }

    #[test]
    fn test_social_link_shape() {
        let about = ada().about.unwrap();
        let (doc, _) = render_page(&about);

        let container = doc.select_first(SOCIAL_LINKS).unwrap();
        assert_eq!(
            doc.outer_html(container),
            concat!(
                r#"<div class="social-icons">"#,
                r#"<a class="social-icon" href="mailto:ada@example.com" target="_blank" rel="noopener noreferrer" title="Mail">"#,
                r#"<i class="fa-envelope"></i></a></div>"#
            )
        );
    }

    #[test]
    fn test_social_links_keep_order_and_block_script_urls() {
        let mut about = ada().about.unwrap();
        about.social_links = vec![
            SocialLink {
                platform: "GitHub".into(),
                url: "https://github.com/ada".into(),
                icon: "fab fa-github".into(),
            },
            SocialLink {
                platform: "Evil".into(),
                url: " JavaScript:alert(document.cookie)".into(),
                icon: "fa-bug\" onclick=\"alert(1)".into(),
            },
        ];
        let (doc, _) = render_page(&about);

        let links = doc.select_all("#about .social-icons a");
        assert_eq!(links.len(), 2);
        assert_eq!(doc.attr(links[0], "href"), Some("https://github.com/ada"));
        assert_eq!(doc.attr(links[1], "href"), Some("#"));

        let html = doc.to_html();
        assert!(!html.contains("onclick=\"alert"));
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
    }

    #[test]
    fn test_missing_bio_anchor_still_renders_the_rest() {
        let about = ada().about.unwrap();
        let origin = Url::parse("https://ada.example.org/").unwrap();
        let mut doc = parse_html(&PAGE.replace("lead mb-5", "intro mb-5"));

        let result = render(&mut doc, &about, &RenderContext::new(&origin));

        assert_eq!(
            result,
            Err(SectionError::AnchorMissing {
                section: Section::About,
                selector: BIO
            })
        );
        assert_eq!(doc.select_all("#about .social-icons a").len(), 1);
        let h1 = doc.select_first(NAME_HEADING).unwrap();
        assert_eq!(doc.text_content(h1), "AdaLovelace");
    }

    #[test]
    fn test_empty_social_links_clears_container() {
        let mut about = ada().about.unwrap();
        about.social_links.clear();
        let (doc, result) = render_page(&about);
        assert!(result.is_ok());
        let container = doc.select_first(SOCIAL_LINKS).unwrap();
        assert_eq!(doc.children(container).count(), 0);
    }
}
