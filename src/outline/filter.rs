use std::collections::HashSet;

use crate::model::{Heading, HeadingCandidate};

use super::{char_len, is_separator_space, trim_ascii_controls};

const MIN_HEADING_CHARS: usize = 5;
const MAX_HEADING_CHARS: usize = 120;

const BOILERPLATE_HEADINGS: [&str; 4] = ["table of contents", "references", "bibliography", "index"];

/// Normalizes whitespace and drops out-of-range, repeated and boilerplate
/// candidates. The first case-insensitive occurrence of a text wins.
pub fn filter_and_clean(candidates: Vec<HeadingCandidate>) -> Vec<Heading> {
    let mut seen_texts = HashSet::<String>::new();
    let mut headings = Vec::new();

    for candidate in candidates {
        let text = normalize_whitespace(&candidate.text);

        let len = char_len(&text);
        if !(MIN_HEADING_CHARS..=MAX_HEADING_CHARS).contains(&len) {
            continue;
        }

        let key = text.to_lowercase();
        if seen_texts.contains(&key) {
            continue;
        }

        if is_common_false_positive(&text) {
            continue;
        }

        seen_texts.insert(key);
        headings.push(Heading {
            level: candidate.level,
            text,
            page: candidate.page,
        });
    }

    headings
}

/// Collapses runs of ASCII whitespace to one space and trims the ends.
pub fn normalize_whitespace(input: &str) -> String {
    let joined = input
        .split(is_separator_space)
        .filter(|part| !part.is_empty())
        .collect::<Vec<&str>>()
        .join(" ");

    trim_ascii_controls(&joined).to_string()
}

/// Page-number artifacts and standard back-matter section names.
pub fn is_common_false_positive(text: &str) -> bool {
    let lower = text.to_lowercase();

    if lower.contains("page") && lower.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }
    if BOILERPLATE_HEADINGS.contains(&lower.as_str()) {
        return true;
    }
    if !lower.is_empty() && lower.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }

    char_len(&lower) < 3
}
