use tracing::debug;

use crate::model::{HeadingCandidate, PageText};

use super::{char_len, trim_ascii_controls};
use super::patterns::PatternCatalog;

/// Exclusive bounds on the trimmed capture length.
const MIN_CAPTURE_CHARS: usize = 5;
const MAX_CAPTURE_CHARS: usize = 150;

/// Identical text within this many pages of an earlier hit is a repeat.
const DUPLICATE_PAGE_RADIUS: u32 = 1;

/// Runs every heading rule over every page and returns the surviving
/// candidates sorted by page. Same-page candidates keep discovery order.
pub fn collect_candidates(catalog: &PatternCatalog, pages: &[PageText]) -> Vec<HeadingCandidate> {
    let mut candidates = Vec::<HeadingCandidate>::new();

    for page in pages {
        let before = candidates.len();

        for (rule, regex) in catalog.heading_rules() {
            for captures in regex.captures_iter(&page.text) {
                let Some(text) = captures
                    .get(1)
                    .map(|value| trim_ascii_controls(value.as_str()))
                else {
                    continue;
                };

                let len = char_len(text);
                if len <= MIN_CAPTURE_CHARS || len >= MAX_CAPTURE_CHARS {
                    continue;
                }

                let accepted = push_unless_adjacent_duplicate(
                    &mut candidates,
                    HeadingCandidate {
                        level: catalog.levels().classify(text),
                        text: text.to_string(),
                        page: page.number,
                    },
                );
                if !accepted {
                    debug!(rule = rule.as_str(), page = page.number, text, "repeated heading");
                }
            }
        }

        debug!(
            page = page.number,
            candidates = candidates.len() - before,
            "collected heading candidates"
        );
    }

    candidates.sort_by_key(|candidate| candidate.page);
    candidates
}

/// Appends `candidate` unless an earlier candidate has the same text on the same
/// or a neighbouring page. Returns whether it was appended.
pub fn push_unless_adjacent_duplicate(
    candidates: &mut Vec<HeadingCandidate>,
    candidate: HeadingCandidate,
) -> bool {
    let repeated = candidates.iter().any(|existing| {
        existing.text == candidate.text
            && existing.page.abs_diff(candidate.page) <= DUPLICATE_PAGE_RADIUS
    });
    if repeated {
        return false;
    }

    candidates.push(candidate);
    true
}
