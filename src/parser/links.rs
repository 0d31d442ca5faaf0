//! Inline hyperlink detection.
//!
//! Extracts standard `[text](url)` markdown links from body lines so the
//! session can offer them as focusable, openable elements. Extraction happens
//! at parse time and the results are stored on the slide, which keeps focus
//! indices stable across renders.

use regex::Regex;
use std::sync::LazyLock;

static INLINE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]+)\]\(([^()\s]+)\)").unwrap());

/// A hyperlink found in a slide body line. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperlinkItem {
    /// Index into the owning slide's body lines.
    pub line_index: usize,
    /// Display text of the link.
    pub text: String,
    /// The link target.
    pub url: String,
}

/// Extract all inline links from a single body line.
pub fn extract_line_links(line: &str, line_index: usize) -> Vec<HyperlinkItem> {
    INLINE_LINK
        .captures_iter(line)
        .map(|caps| HyperlinkItem {
            line_index,
            text: caps[1].to_string(),
            url: caps[2].to_string(),
        })
        .collect()
}
