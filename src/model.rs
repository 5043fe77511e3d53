use serde::{Deserialize, Serialize};

/// Plain text of one PDF page as produced by the text layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 1-based.
    pub number: u32,
    pub text: String,
}

impl PageText {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

/// A raw pattern hit before whitespace cleanup and boilerplate filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingCandidate {
    pub level: HeadingLevel,
    pub text: String,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOutline {
    pub title: String,
    #[serde(rename = "outline")]
    pub headings: Vec<Heading>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Completed,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    pub filename: String,
    pub sha256: Option<String>,
    pub status: DocumentStatus,
    pub output_path: Option<String>,
    pub page_count: usize,
    pub heading_count: usize,
    pub title: Option<String>,
    pub failure_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub manifest_version: u32,
    pub run_id: String,
    pub started_at: String,
    pub finished_at: String,
    pub input_dir: String,
    pub output_dir: String,
    pub max_pages: usize,
    pub document_count: usize,
    pub completed_count: usize,
    pub failed_count: usize,
    pub documents: Vec<DocumentReport>,
}
