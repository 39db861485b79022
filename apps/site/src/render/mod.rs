//! Sanitizing content renderer.
//!
//! Flow: about → experience → skills → interests, in that order, each run to
//! completion before the next. Every section clears what a previous render
//! put at its anchors before populating, so rendering the same document twice
//! leaves the page exactly as rendering it once.
//!
//! Nodes are only ever created through `ElementBuilder`: data lands in text
//! nodes or in the small set of attributes the builder exposes, and links go
//! through `sanitize_url` first.

pub mod about;
pub mod anchors;
pub mod experience;
pub mod icons;
pub mod interests;
pub mod notice;
pub mod skills;

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use crate::dom::Document;
use crate::models::ResumeDocument;
use crate::sanitize::{sanitize_url, SafeUrl};

pub use icons::{IconScanner, IconifyScanner};
pub use notice::show_blocking_notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Experience,
    Skills,
    Interests,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Interests => "interests",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem confined to one section. Logged, never surfaced to the visitor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SectionError {
    #[error("{section} anchor not found: {selector}")]
    AnchorMissing {
        section: Section,
        selector: &'static str,
    },

    #[error("{section} data missing from resume document")]
    MissingData { section: Section },
}

/// Per-render inputs other than the document and the data.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// The page's own origin, the base for relative links.
    pub page_origin: &'a Url,
    /// Optional icon-scan hook run after the tools list is populated.
    pub icon_scanner: Option<&'a dyn IconScanner>,
}

impl<'a> RenderContext<'a> {
    pub fn new(page_origin: &'a Url) -> Self {
        Self {
            page_origin,
            icon_scanner: None,
        }
    }

    pub fn with_icon_scanner(mut self, scanner: Option<&'a dyn IconScanner>) -> Self {
        self.icon_scanner = scanner;
        self
    }

    pub fn safe_url(&self, raw: &str) -> SafeUrl {
        let url = sanitize_url(raw, self.page_origin);
        if url.is_placeholder() && !raw.trim().is_empty() {
            debug!("Rejected link target {raw:?}");
        }
        url
    }
}

/// What happened to each section in one render.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub outcomes: Vec<(Section, Result<(), SectionError>)>,
}

impl RenderReport {
    fn record(&mut self, section: Section, outcome: Result<(), SectionError>) {
        match &outcome {
            Ok(()) => info!("{} section populated", capitalized(section)),
            Err(e) => warn!("{e}"),
        }
        self.outcomes.push((section, outcome));
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|(_, r)| r.is_ok())
    }

    #[cfg(test)]
    pub fn outcome(&self, section: Section) -> Option<&Result<(), SectionError>> {
        self.outcomes
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, r)| r)
    }
}

fn capitalized(section: Section) -> &'static str {
    match section {
        Section::About => "About",
        Section::Experience => "Experience",
        Section::Skills => "Skills",
        Section::Interests => "Interests",
    }
}

/// Populates all four sections of `doc` from `resume`.
///
/// Section failures are isolated: a missing anchor or a missing data section
/// skips that section and the rest still render.
pub fn render_resume(
    doc: &mut Document,
    resume: &ResumeDocument,
    ctx: &RenderContext<'_>,
) -> RenderReport {
    let mut report = RenderReport::default();
    debug!("Starting to populate resume...");

    let outcome = match &resume.about {
        Some(about) => about::render(doc, about, ctx),
        None => Err(SectionError::MissingData {
            section: Section::About,
        }),
    };
    report.record(Section::About, outcome);

    let outcome = match &resume.experience {
        Some(entries) => experience::render(doc, entries),
        None => Err(SectionError::MissingData {
            section: Section::Experience,
        }),
    };
    report.record(Section::Experience, outcome);

    let outcome = match &resume.skills {
        Some(skills) => skills::render(doc, skills, ctx),
        None => Err(SectionError::MissingData {
            section: Section::Skills,
        }),
    };
    report.record(Section::Skills, outcome);

    let outcome = match &resume.interests {
        Some(interests) => interests::render(doc, interests),
        None => Err(SectionError::MissingData {
            section: Section::Interests,
        }),
    };
    report.record(Section::Interests, outcome);

    report
}
