//! Optional icon-scan hook, run after the tools list is populated.
//!
//! The hook is best-effort: it may be absent, it may fail, and it may even
//! panic. None of that affects the render.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::{debug, warn};

use crate::dom::{Document, NodeId, Selector};

#[derive(Debug, Error)]
pub enum IconScanError {
    #[error("icon scan unavailable: {0}")]
    Unavailable(String),

    #[error("malformed icon names: {}", .0.join(", "))]
    MalformedIcons(Vec<String>),
}

/// Post-processes rendered icon placeholders under `scope`, returning how
/// many it handled.
pub trait IconScanner: Send + Sync {
    fn scan(&self, doc: &Document, scope: NodeId) -> Result<usize, IconScanError>;
}

/// Checks every `.iconify` placeholder for a well-formed `data-icon`
/// (`prefix:name`, lowercase alphanumerics and dashes), which is what the
/// Iconify client needs to resolve it in the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct IconifyScanner;

impl IconifyScanner {
    fn is_valid_icon_name(name: &str) -> bool {
        let valid_part = |s: &str| {
            !s.is_empty()
                && !s.starts_with('-')
                && s.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        };
        match name.split_once(':') {
            Some((prefix, icon)) => valid_part(prefix) && valid_part(icon),
            None => false,
        }
    }
}

impl IconScanner for IconifyScanner {
    fn scan(&self, doc: &Document, scope: NodeId) -> Result<usize, IconScanError> {
        let selector = Selector::parse(".iconify")
            .ok_or_else(|| IconScanError::Unavailable("bad selector".to_string()))?;

        let icons = doc.select_all_within(scope, &selector);
        let malformed: Vec<String> = icons
            .iter()
            .map(|&icon| doc.attr(icon, "data-icon").unwrap_or_default())
            .filter(|name| !Self::is_valid_icon_name(name))
            .map(str::to_string)
            .collect();

        if malformed.is_empty() {
            Ok(icons.len())
        } else {
            Err(IconScanError::MalformedIcons(malformed))
        }
    }
}

/// Runs the hook if present. Errors and panics are logged and swallowed.
pub fn run_icon_scan(scanner: Option<&dyn IconScanner>, doc: &Document, scope: NodeId) {
    let Some(scanner) = scanner else {
        debug!("No icon scanner installed; skipping scan");
        return;
    };

    match panic::catch_unwind(AssertUnwindSafe(|| scanner.scan(doc, scope))) {
        Ok(Ok(count)) => debug!("Icon scan handled {count} icons"),
        Ok(Err(e)) => warn!("Icon scan failed: {e}"),
        Err(_) => warn!("Icon scan panicked; continuing without it"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn tools_list(html: &str) -> (Document, NodeId) {
        let doc = parse_html(html);
        let list = doc.select_first("ul").unwrap();
        (doc, list)
    }

    #[test]
    fn test_valid_icon_names() {
        assert!(IconifyScanner::is_valid_icon_name("logos:rust"));
        assert!(IconifyScanner::is_valid_icon_name("simple-icons:neovim"));
        assert!(IconifyScanner::is_valid_icon_name("mdi:numeric-1-box"));
    }

    #[test]
    fn test_invalid_icon_names() {
        for name in ["", "rust", ":rust", "logos:", "Logos:Rust", "a:b:c", "x:-y", "a b:c"] {
            assert!(!IconifyScanner::is_valid_icon_name(name), "{name:?}");
        }
    }

    #[test]
    fn test_scan_counts_icons() {
        let (doc, list) = tools_list(
            r##"<ul><a href="#"><li class="iconify" data-icon="logos:rust"></li></a>
               <li class="list-inline-item"><a><i class="fab fa-git"></i></a></li>
               <a href="#"><li class="iconify" data-icon="logos:docker-icon"></li></a></ul>"##,
        );
        assert_eq!(IconifyScanner.scan(&doc, list).unwrap(), 2);
    }

    #[test]
    fn test_scan_reports_malformed() {
        let (doc, list) = tools_list(
            r#"<ul><li class="iconify" data-icon="not an icon"></li><li class="iconify"></li></ul>"#,
        );
        let err = IconifyScanner.scan(&doc, list).unwrap_err();
        match err {
            IconScanError::MalformedIcons(names) => {
                assert_eq!(names, vec!["not an icon".to_string(), String::new()])
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_run_without_scanner_is_noop() {
        let (doc, list) = tools_list("<ul></ul>");
        run_icon_scan(None, &doc, list);
    }
}
