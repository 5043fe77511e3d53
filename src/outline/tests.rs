use std::collections::HashSet;

use super::filter::{filter_and_clean, is_common_false_positive, normalize_whitespace};
use super::headings::push_unless_adjacent_duplicate;
use super::patterns::{HeadingRule, TitleRule};
use super::title::{FALLBACK_TITLE, is_likely_header};
use super::*;
use crate::model::{HeadingCandidate, HeadingLevel};

fn extractor() -> OutlineExtractor {
    OutlineExtractor::new().expect("pattern catalog should compile")
}

fn pages(texts: &[&str]) -> Vec<PageText> {
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| PageText::new(index as u32 + 1, *text))
        .collect()
}

fn heading(level: HeadingLevel, text: &str, page: u32) -> Heading {
    Heading {
        level,
        text: text.to_string(),
        page,
    }
}

fn candidate(level: HeadingLevel, text: &str, page: u32) -> HeadingCandidate {
    HeadingCandidate {
        level,
        text: text.to_string(),
        page,
    }
}

#[test]
fn catalog_keeps_rule_priority_order() {
    let catalog = PatternCatalog::new().expect("catalog");

    let heading_rules = catalog
        .heading_rules()
        .map(|(rule, _)| rule)
        .collect::<Vec<_>>();
    assert_eq!(heading_rules, HeadingRule::ALL.to_vec());
    assert_eq!(heading_rules.first(), Some(&HeadingRule::NumberedLevel1));
    assert_eq!(heading_rules.last(), Some(&HeadingRule::Emphasized));

    let title_rules = catalog
        .title_rules()
        .map(|(rule, _)| rule)
        .collect::<Vec<_>>();
    assert_eq!(title_rules, TitleRule::ALL.to_vec());
}

#[test]
fn numbered_headings_on_two_pages() {
    let outline = extractor().extract(&pages(&[
        "1. Introduction\nSome body text.\n",
        "1.1 Background\nMore text.\n",
    ]));

    assert_eq!(
        outline.headings,
        vec![
            heading(HeadingLevel::H1, "1. Introduction", 1),
            heading(HeadingLevel::H2, "1.1 Background", 2),
        ]
    );
    assert_eq!(outline.title, FALLBACK_TITLE);
}

#[test]
fn table_of_contents_is_never_a_heading() {
    let headings = extractor().headings(&pages(&[
        "Table of Contents\n1. Introduction\n",
        "TABLE OF CONTENTS\n",
    ]));

    assert!(
        headings
            .iter()
            .all(|heading| !heading.text.eq_ignore_ascii_case("table of contents"))
    );
    assert_eq!(headings, vec![heading(HeadingLevel::H1, "1. Introduction", 1)]);
}

#[test]
fn heading_repeated_on_adjacent_page_keeps_first_page() {
    let input = vec![
        PageText::new(3, "Project Overview\nBody text follows.\n"),
        PageText::new(4, "Project Overview\nBody text follows.\n"),
    ];

    let headings = extractor().headings(&input);
    assert_eq!(headings, vec![heading(HeadingLevel::H3, "Project Overview", 3)]);
}

#[test]
fn adjacent_duplicate_suppression_uses_page_radius_one() {
    let mut candidates = Vec::new();
    assert!(push_unless_adjacent_duplicate(
        &mut candidates,
        candidate(HeadingLevel::H3, "Overview", 3)
    ));
    assert!(!push_unless_adjacent_duplicate(
        &mut candidates,
        candidate(HeadingLevel::H3, "Overview", 4)
    ));
    assert!(!push_unless_adjacent_duplicate(
        &mut candidates,
        candidate(HeadingLevel::H3, "Overview", 2)
    ));
    assert!(push_unless_adjacent_duplicate(
        &mut candidates,
        candidate(HeadingLevel::H3, "Overview", 5)
    ));
    assert!(push_unless_adjacent_duplicate(
        &mut candidates,
        candidate(HeadingLevel::H3, "overview", 3)
    ));

    assert_eq!(
        candidates.iter().map(|c| c.page).collect::<Vec<_>>(),
        vec![3, 5, 3]
    );

    // The filter pass collapses what the page radius let through.
    let headings = filter_and_clean(candidates);
    assert_eq!(headings, vec![heading(HeadingLevel::H3, "Overview", 3)]);
}

#[test]
fn distant_repeats_collapse_case_insensitively() {
    let headings = extractor().headings(&pages(&[
        "Results Overview\n",
        "",
        "",
        "",
        "RESULTS OVERVIEW\n",
    ]));

    assert_eq!(headings, vec![heading(HeadingLevel::H3, "Results Overview", 1)]);
}

#[test]
fn same_page_order_follows_catalog_then_line() {
    let headings = extractor().headings(&pages(&[
        "Executive Summary Notes\n1. Introduction\n2. Methods Used\n",
    ]));

    assert_eq!(
        headings,
        vec![
            heading(HeadingLevel::H1, "1. Introduction", 1),
            heading(HeadingLevel::H1, "2. Methods Used", 1),
            heading(HeadingLevel::H3, "Executive Summary Notes", 1),
        ]
    );
}

#[test]
fn headings_are_sorted_by_page() {
    let input = vec![
        PageText::new(2, "2. Second Chapter\n"),
        PageText::new(1, "1. First Chapter Here\n"),
    ];

    let headings = extractor().headings(&input);
    assert_eq!(
        headings,
        vec![
            heading(HeadingLevel::H1, "1. First Chapter Here", 1),
            heading(HeadingLevel::H1, "2. Second Chapter", 2),
        ]
    );
}

#[test]
fn all_caps_line_is_reported_once() {
    let headings = extractor().headings(&pages(&["INTRODUCTION TO SYSTEMS\nbody text\n"]));

    assert_eq!(
        headings,
        vec![heading(HeadingLevel::H1, "INTRODUCTION TO SYSTEMS", 1)]
    );
}

#[test]
fn multilingual_keyword_and_roman_headings() {
    let headings = extractor().headings(&pages(&[
        "Chapitre 2: Méthodologie\nKapitel 3 Ergebnisse\n",
        "Section 4 Evaluation Criteria\nIV. Results and Discussion\n",
        "Part 2: Design Principles\nTeil 3 Grundlagen der Technik\nAbschnitt 4: Ergebnisse der Messung\n",
    ]));

    let found = headings
        .iter()
        .map(|heading| (heading.text.as_str(), heading.level, heading.page))
        .collect::<Vec<_>>();

    assert!(found.contains(&("Chapitre 2: Méthodologie", HeadingLevel::H3, 1)));
    assert!(found.contains(&("Kapitel 3 Ergebnisse", HeadingLevel::H3, 1)));
    assert!(found.contains(&("Section 4 Evaluation Criteria", HeadingLevel::H2, 2)));
    assert!(found.contains(&("IV. Results and Discussion", HeadingLevel::H2, 2)));

    // Section keywords come before part keywords on the same page.
    let page_three = found
        .iter()
        .filter(|(_, _, page)| *page == 3)
        .copied()
        .collect::<Vec<_>>();
    assert_eq!(
        page_three,
        vec![
            ("Abschnitt 4: Ergebnisse der Messung", HeadingLevel::H2, 3),
            ("Part 2: Design Principles", HeadingLevel::H1, 3),
            ("Teil 3 Grundlagen der Technik", HeadingLevel::H2, 3),
        ]
    );
}

#[test]
fn japanese_unit_headings() {
    let headings = extractor().headings(&pages(&[
        "１．システム概要\n第1章 概要説明\n本文です。\n第2節 背景と目的\n",
    ]));

    assert_eq!(
        headings,
        vec![
            heading(HeadingLevel::H1, "第1章 概要説明", 1),
            heading(HeadingLevel::H2, "第2節 背景と目的", 1),
            heading(HeadingLevel::H3, "１．システム概要", 1),
        ]
    );
}

#[test]
fn heading_invariants_hold_on_noisy_text() {
    let input = pages(&[
        "1.   Spaced    Out   Heading Title\nSome prose that is not a heading.\n",
        "2.\tTabbed Heading Text\r\nREFERENCES\nIndex\n",
        "3.2.1 Detailed Measurement Setup\nANOTHER ALL CAPS HEADING\n",
        "ANOTHER ALL CAPS HEADING\nAnother All Caps Heading\n",
    ]);

    let headings = extractor().headings(&input);
    assert!(!headings.is_empty());

    let mut seen = HashSet::new();
    for heading in &headings {
        let len = heading.text.chars().count();
        assert!((5..=120).contains(&len), "length out of range: {heading:?}");
        assert!(!heading.text.contains("  "), "doubled space: {heading:?}");
        assert_eq!(heading.text, heading.text.trim());
        assert!(seen.insert(heading.text.to_lowercase()), "duplicate: {heading:?}");
    }

    assert_eq!(headings[0], heading(HeadingLevel::H1, "1. Spaced Out Heading Title", 1));
    assert!(headings.iter().any(|h| h.text == "2. Tabbed Heading Text"));
    assert!(
        headings
            .iter()
            .any(|h| h.text == "3.2.1 Detailed Measurement Setup" && h.level == HeadingLevel::H3)
    );
    assert!(headings.iter().all(|h| h.text != "REFERENCES"));
}

#[test]
fn heading_extraction_is_deterministic() {
    let input = pages(&[
        "ANNUAL TECHNICAL REPORT\n1. Introduction\nText.\n",
        "1.1 Scope of Work\n1.2 Related Efforts\nSummary of Findings\n",
        "第3章 実験結果の分析\n",
    ]);
    let extractor = extractor();

    assert_eq!(extractor.extract(&input), extractor.extract(&input));
}

#[test]
fn title_falls_back_to_document() {
    let extractor = extractor();

    assert_eq!(extractor.extract(&[]).title, FALLBACK_TITLE);
    assert_eq!(
        extractor
            .extract(&pages(&["1. Introduction\nshort\n", "12345678901234\n"]))
            .title,
        FALLBACK_TITLE
    );
}

#[test]
fn title_skips_heading_shaped_lines() {
    let outline = extractor().extract(&pages(&[
        "Chapter One Overview Text\nThe Real Document Title\n",
    ]));

    assert_eq!(outline.title, "The Real Document Title");
}

#[test]
fn title_is_read_from_first_three_pages_only() {
    let outline = extractor().extract(&pages(&[
        "short\n",
        "",
        "x\n",
        "Annual Report on Climate Research\n",
    ]));

    assert_eq!(outline.title, FALLBACK_TITLE);
}

#[test]
fn title_accepts_cjk_and_all_caps_lines() {
    let extractor = extractor();

    assert_eq!(
        extractor.extract(&pages(&["深層学習による画像認識の基礎\n"])).title,
        "深層学習による画像認識の基礎"
    );
    assert_eq!(
        extractor
            .extract(&pages(&["  QUARTERLY FINANCIAL STATEMENT  \n"]))
            .title,
        "QUARTERLY FINANCIAL STATEMENT"
    );
}

#[test]
fn likely_header_detection() {
    assert!(is_likely_header("1. Introduction"));
    assert!(is_likely_header("12.Results"));
    assert!(is_likely_header("Chapter Seven"));
    assert!(is_likely_header("SECTION Overview"));
    assert!(is_likely_header("Partial Results"));
    assert!(!is_likely_header("2024 Annual Report"));
    assert!(!is_likely_header("The Real Document Title"));
}

#[test]
fn false_positive_detection() {
    assert!(is_common_false_positive("Page 3 Summary"));
    assert!(is_common_false_positive("see page 12"));
    assert!(is_common_false_positive("References"));
    assert!(is_common_false_positive("BIBLIOGRAPHY"));
    assert!(is_common_false_positive("Index"));
    assert!(is_common_false_positive("123456"));
    assert!(is_common_false_positive("ab"));
    assert!(!is_common_false_positive("Homepage Design"));
    assert!(!is_common_false_positive("Introduction"));
    assert!(!is_common_false_positive("Indexing Strategy"));
}

#[test]
fn filter_normalizes_and_drops_rejects() {
    let long_text = "Long ".repeat(30);
    let candidates = vec![
        candidate(HeadingLevel::H2, "  Spaced\t\tText  ", 1),
        candidate(HeadingLevel::H3, "Hi", 1),
        candidate(HeadingLevel::H3, "spaced text", 2),
        candidate(HeadingLevel::H1, "References", 2),
        candidate(HeadingLevel::H1, &long_text, 3),
        candidate(HeadingLevel::H1, "Page 7 Appendix", 3),
        candidate(HeadingLevel::H1, "Closing Remarks", 4),
    ];

    assert_eq!(
        filter_and_clean(candidates),
        vec![
            heading(HeadingLevel::H2, "Spaced Text", 1),
            heading(HeadingLevel::H1, "Closing Remarks", 4),
        ]
    );
}

#[test]
fn normalize_whitespace_collapses_ascii_runs_only() {
    assert_eq!(
        normalize_whitespace("  a \t\x0B b\u{00a0}\u{00a0}c  "),
        "a b\u{00a0}\u{00a0}c"
    );
    assert_eq!(normalize_whitespace("\u{0000} x\r\ny \u{0007}"), "x y");
}

#[test]
fn ideographic_space_stays_inside_headings() {
    let headings = extractor().headings(&pages(&["2. Mixed\u{3000}Width Spacing Here\n"]));

    assert_eq!(
        headings,
        vec![heading(HeadingLevel::H1, "2. Mixed\u{3000}Width Spacing Here", 1)]
    );
}

#[test]
fn title_line_with_leading_no_break_space_is_rejected() {
    let extractor = extractor();

    assert_eq!(
        extractor
            .extract(&pages(&["\u{00a0}Annual Report on Climate Research\n"]))
            .title,
        FALLBACK_TITLE
    );
    assert_eq!(
        extractor
            .extract(&pages(&["\t Annual Report on Climate Research \r\n"]))
            .title,
        "Annual Report on Climate Research"
    );
}
