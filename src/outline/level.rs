use anyhow::{Context, Result};
use regex::Regex;

use crate::model::HeadingLevel;

use super::char_len;

/// Which form of the heading text a rule is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    Verbatim,
    Lowercase,
}

/// Tried in order; the first match decides the level. Whitespace classes are
/// ASCII only.
const LEVEL_RULES: [(&str, Subject, HeadingLevel); 8] = [
    (r"^[0-9]+\.[0-9]+\.[0-9]+", Subject::Verbatim, HeadingLevel::H3),
    (r"^[0-9]+\.[0-9]+", Subject::Verbatim, HeadingLevel::H2),
    (r"^[0-9]+\.", Subject::Verbatim, HeadingLevel::H1),
    (r"^(?:chapter|part)[\t\n\x0B\x0C\r ]+[0-9]", Subject::Lowercase, HeadingLevel::H1),
    (r"^section[\t\n\x0B\x0C\r ]+[0-9]", Subject::Lowercase, HeadingLevel::H2),
    (r"[章編部]", Subject::Verbatim, HeadingLevel::H1),
    (r"[節項]", Subject::Verbatim, HeadingLevel::H2),
    (r"^[A-Z][A-Z\t\n\x0B\x0C\r ]+$", Subject::Verbatim, HeadingLevel::H1),
];

/// Guesses a heading's depth from its surface form: dotted numbering depth,
/// then `chapter`/`part`/`section` keywords, then Japanese unit markers, then
/// all caps, and finally raw length.
#[derive(Debug)]
pub struct LevelClassifier {
    rules: Vec<(Regex, Subject, HeadingLevel)>,
}

impl LevelClassifier {
    pub fn new() -> Result<Self> {
        let rules = LEVEL_RULES
            .iter()
            .map(|&(pattern, subject, level)| {
                let regex = Regex::new(pattern)
                    .with_context(|| format!("failed to compile level regex {pattern}"))?;
                Ok((regex, subject, level))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    pub fn classify(&self, text: &str) -> HeadingLevel {
        let lower = text.to_lowercase();

        let matched = self.rules.iter().find(|(regex, subject, _)| match subject {
            Subject::Verbatim => regex.is_match(text),
            Subject::Lowercase => regex.is_match(&lower),
        });
        if let Some((_, _, level)) = matched {
            return *level;
        }

        match char_len(text) {
            len if len > 40 => HeadingLevel::H1,
            len if len > 25 => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        }
    }
}
