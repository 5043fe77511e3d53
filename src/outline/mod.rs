//! Title and heading detection over plain page text.
//!
//! The pipeline is pattern matching only: every rule in the [`PatternCatalog`]
//! runs over every page, hits are leveled by `level::LevelClassifier`, repeats on
//! neighbouring pages are dropped, and a final pass cleans whitespace and
//! removes boilerplate.

mod filter;
mod headings;
mod level;
mod patterns;
#[cfg(test)]
mod tests;
mod title;

use anyhow::Result;

use crate::model::{DocumentOutline, Heading, PageText};

use filter::filter_and_clean;
use headings::collect_candidates;
use patterns::PatternCatalog;
use title::extract_title;

#[derive(Debug)]
pub struct OutlineExtractor {
    catalog: PatternCatalog,
}

impl OutlineExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            catalog: PatternCatalog::new()?,
        })
    }

    pub fn extract(&self, pages: &[PageText]) -> DocumentOutline {
        DocumentOutline {
            title: extract_title(&self.catalog, pages),
            headings: self.headings(pages),
        }
    }

    pub fn headings(&self, pages: &[PageText]) -> Vec<Heading> {
        filter_and_clean(collect_candidates(&self.catalog, pages))
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Space, tab, newline, vertical tab, form feed and carriage return. Unicode
/// spaces such as U+00A0 and U+3000 are heading text, not separators.
fn is_separator_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Strips ASCII control characters and spaces from both ends.
fn trim_ascii_controls(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}
