//! Sanitization primitives shared by every section renderer.
//!
//! Section content never passes through these on its way into the tree: text
//! goes into text nodes and the serializer escapes it on the way out. These
//! functions cover the two places where a string does end up in markup: every
//! serialized text/attribute value (`sanitize_text`) and every `href`
//! (`sanitize_url`).

use std::fmt;

use url::Url;

/// Placeholder substituted for any rejected URL.
pub const SAFE_URL_PLACEHOLDER: &str = "#";

/// Schemes a rendered link may point at. Anything else is rejected.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Escapes the five markup metacharacters so the result, inserted as raw
/// markup (as text or as a quoted attribute value), shows exactly the
/// original characters.
pub fn sanitize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A link target that has passed the scheme allow-list.
///
/// Only [`sanitize_url`] constructs one, so an element builder that accepts
/// `SafeUrl` for `href` cannot be handed an unchecked string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeUrl(String);

impl SafeUrl {
    fn placeholder() -> Self {
        SafeUrl(SAFE_URL_PLACEHOLDER.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == SAFE_URL_PLACEHOLDER
    }
}

impl fmt::Display for SafeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves `raw` against the page origin and keeps it only if the scheme is
/// `http`, `https` or `mailto`. Everything else, including unparsable input,
/// becomes `"#"`.
///
/// Accepted URLs are returned as written (trimmed), not in resolved form, so a
/// relative link stays relative.
pub fn sanitize_url(raw: &str, base: &Url) -> SafeUrl {
    let candidate = raw.trim();
    if candidate.is_empty() {
        return SafeUrl::placeholder();
    }

    // The URL parser drops tabs and newlines anywhere in the input; a browser
    // does the same, so `java\tscript:` must be judged by its parsed scheme.
    match base.join(candidate) {
        Ok(url) if ALLOWED_SCHEMES.contains(&url.scheme()) => {
            if candidate.chars().any(char::is_control) {
                SafeUrl(url.to_string())
            } else {
                SafeUrl(candidate.to_string())
            }
        }
        _ => SafeUrl::placeholder(),
    }
}
