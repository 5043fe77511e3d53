use anyhow::{Context, Result};
use regex::Regex;

use super::level::LevelClassifier;

/// ASCII whitespace except `\n`, usable inside a character class.
const LINE_SPACE: &str = r"\t\x0B\x0C\r ";

/// Hiragana, Katakana and the CJK unified ideograph block.
const CJK: &str = r"\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FAF}";

/// Characters a heading body may start with.
const LEAD: &str = r"A-Z\xC0-\xFF\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FAF}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingRule {
    NumberedLevel1,
    NumberedLevel2,
    NumberedLevel3,
    RomanNumeral,
    ChapterKeyword,
    SectionKeyword,
    PartKeyword,
    AllCaps,
    JapaneseUnit,
    JapaneseNumbered,
    Emphasized,
}

impl HeadingRule {
    /// Catalog order. Earlier rules win when two rules capture the same line.
    pub const ALL: [HeadingRule; 11] = [
        HeadingRule::NumberedLevel1,
        HeadingRule::NumberedLevel2,
        HeadingRule::NumberedLevel3,
        HeadingRule::RomanNumeral,
        HeadingRule::ChapterKeyword,
        HeadingRule::SectionKeyword,
        HeadingRule::PartKeyword,
        HeadingRule::AllCaps,
        HeadingRule::JapaneseUnit,
        HeadingRule::JapaneseNumbered,
        HeadingRule::Emphasized,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HeadingRule::NumberedLevel1 => "numbered_level_1",
            HeadingRule::NumberedLevel2 => "numbered_level_2",
            HeadingRule::NumberedLevel3 => "numbered_level_3",
            HeadingRule::RomanNumeral => "roman_numeral",
            HeadingRule::ChapterKeyword => "chapter_keyword",
            HeadingRule::SectionKeyword => "section_keyword",
            HeadingRule::PartKeyword => "part_keyword",
            HeadingRule::AllCaps => "all_caps",
            HeadingRule::JapaneseUnit => "japanese_unit",
            HeadingRule::JapaneseNumbered => "japanese_numbered",
            HeadingRule::Emphasized => "emphasized",
        }
    }

    fn body(self) -> &'static str {
        match self {
            HeadingRule::NumberedLevel1 => r"[0-9]+\.?[<sp>]+[<lead>][^\n]{5,100}",
            HeadingRule::NumberedLevel2 => r"[0-9]+\.[0-9]+\.?[<sp>]+[<lead>][^\n]{5,100}",
            HeadingRule::NumberedLevel3 => {
                r"[0-9]+\.[0-9]+\.[0-9]+\.?[<sp>]+[<lead>][^\n]{5,100}"
            }
            HeadingRule::RomanNumeral => r"[IVX]+\.[<sp>]*[<lead>][^\n]{4,80}",
            HeadingRule::ChapterKeyword => {
                r"(?:Chapter|Chapitre|Kapitel|章)[<sp>]*[0-9]+[:.<sp>]+[<lead>][^\n]{5,100}"
            }
            HeadingRule::SectionKeyword => {
                r"(?:Section|Abschnitt|セクション)[<sp>]*[0-9]+[:.<sp>]+[<lead>][^\n]{5,100}"
            }
            HeadingRule::PartKeyword => {
                r"(?:Part|Partie|Teil)[<sp>]*[0-9]+[:.<sp>]+[<lead>][^\n]{5,100}"
            }
            HeadingRule::AllCaps => r"[A-Z][A-Z<sp>]{10,80}",
            HeadingRule::JapaneseUnit => {
                r"第?[０-９0-9一二三四五六七八九十百千万]+[章節項部編][<sp>]*[<cjk>]{3,50}"
            }
            HeadingRule::JapaneseNumbered => r"[０-９0-9]+[．.][０-９0-9]*[<sp>]*[<cjk>]{3,50}",
            HeadingRule::Emphasized => r"[A-Z][A-Za-z<sp>]{8,60}[A-Za-z]",
        }
    }

    fn case_insensitive(self) -> bool {
        matches!(
            self,
            HeadingRule::ChapterKeyword | HeadingRule::SectionKeyword | HeadingRule::PartKeyword
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleRule {
    Capitalized,
    Cjk,
    AllCaps,
}

impl TitleRule {
    pub const ALL: [TitleRule; 3] = [TitleRule::Capitalized, TitleRule::Cjk, TitleRule::AllCaps];

    pub fn as_str(self) -> &'static str {
        match self {
            TitleRule::Capitalized => "capitalized",
            TitleRule::Cjk => "cjk",
            TitleRule::AllCaps => "all_caps",
        }
    }

    fn body(self) -> &'static str {
        match self {
            TitleRule::Capitalized => r"[A-Z][A-Za-z<sp>]{10,80}[A-Za-z]",
            TitleRule::Cjk => r"[<cjk>]{5,80}",
            TitleRule::AllCaps => r"[A-Z][A-Z<sp>]{15,80}",
        }
    }
}

/// Compiled heading and title rules, built once per run and shared read-only.
#[derive(Debug)]
pub struct PatternCatalog {
    headings: Vec<(HeadingRule, Regex)>,
    titles: Vec<(TitleRule, Regex)>,
    levels: LevelClassifier,
}

impl PatternCatalog {
    pub fn new() -> Result<Self> {
        let mut headings = Vec::with_capacity(HeadingRule::ALL.len());
        for rule in HeadingRule::ALL {
            let flags = if rule.case_insensitive() { "(?mi)" } else { "(?m)" };
            let regex = compile_line_rule(flags, rule.body())
                .with_context(|| format!("failed to compile {} heading regex", rule.as_str()))?;
            headings.push((rule, regex));
        }

        let mut titles = Vec::with_capacity(TitleRule::ALL.len());
        for rule in TitleRule::ALL {
            let regex = compile_line_rule("", rule.body())
                .with_context(|| format!("failed to compile {} title regex", rule.as_str()))?;
            titles.push((rule, regex));
        }

        Ok(Self {
            headings,
            titles,
            levels: LevelClassifier::new()?,
        })
    }

    /// Heading rules in priority order. Each regex is multiline; capture group 1
    /// holds the heading text of one line.
    pub fn heading_rules(&self) -> impl Iterator<Item = (HeadingRule, &Regex)> {
        self.headings.iter().map(|(rule, regex)| (*rule, regex))
    }

    /// Title rules in priority order. Each regex must match a whole single line.
    pub fn title_rules(&self) -> impl Iterator<Item = (TitleRule, &Regex)> {
        self.titles.iter().map(|(rule, regex)| (*rule, regex))
    }

    pub fn levels(&self) -> &LevelClassifier {
        &self.levels
    }
}

fn compile_line_rule(flags: &str, body: &str) -> Result<Regex> {
    let body = body
        .replace("<sp>", LINE_SPACE)
        .replace("<lead>", LEAD)
        .replace("<cjk>", CJK);
    let pattern = format!(r"{flags}^[{LINE_SPACE}]*({body})[{LINE_SPACE}]*$");

    Ok(Regex::new(&pattern)?)
}
