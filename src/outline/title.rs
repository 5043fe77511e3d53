use crate::model::PageText;

use super::{char_len, trim_ascii_controls};
use super::patterns::PatternCatalog;

pub const FALLBACK_TITLE: &str = "Document";

const TITLE_SCAN_PAGES: usize = 3;

/// Returns the first line on the first three pages that a title rule accepts.
/// Scan order is page, then line, then rule; there is no scoring.
pub fn extract_title(catalog: &PatternCatalog, pages: &[PageText]) -> String {
    pages
        .iter()
        .take(TITLE_SCAN_PAGES)
        .flat_map(|page| page.text.split('\n'))
        .map(trim_ascii_controls)
        .filter(|line| {
            let len = char_len(line);
            len > 10 && len < 100
        })
        .find_map(|line| title_candidate(catalog, line))
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

fn title_candidate(catalog: &PatternCatalog, line: &str) -> Option<String> {
    catalog.title_rules().find_map(|(_, regex)| {
        let candidate = trim_ascii_controls(regex.captures(line)?.get(1)?.as_str());
        if char_len(candidate) > 10 && !is_likely_header(candidate) {
            Some(candidate.to_string())
        } else {
            None
        }
    })
}

/// Heading-shaped text: a leading `N.` or a chapter/section/part keyword.
pub fn is_likely_header(text: &str) -> bool {
    let digits = text.len() - text.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 && text[digits..].starts_with('.') {
        return true;
    }

    let lower = text.to_lowercase();
    ["chapter", "section", "part"]
        .iter()
        .any(|keyword| lower.starts_with(keyword))
}
