use super::*;

/// Everything a single document needs; shared read-only across the batch.
pub(super) struct BatchContext<'a> {
    pub(super) output_dir: &'a Path,
    pub(super) max_pages: usize,
    pub(super) source: &'a dyn PageTextSource,
    pub(super) extractor: &'a OutlineExtractor,
    /// Only the batch report records source hashes.
    pub(super) hash_documents: bool,
}

#[derive(Debug)]
struct ProcessedDocument {
    sha256: Option<String>,
    output_path: PathBuf,
    page_count: usize,
    outline: DocumentOutline,
}

/// Processes every PDF in order. A failing document is logged and reported but
/// never stops the batch, and leaves no outline file behind.
pub(super) fn process_batch(
    pdf_paths: &[PathBuf],
    context: &BatchContext<'_>,
) -> Vec<DocumentReport> {
    pdf_paths
        .iter()
        .map(|pdf_path| process_document(pdf_path, context))
        .collect()
}

fn process_document(pdf_path: &Path, context: &BatchContext<'_>) -> DocumentReport {
    let filename = file_name_string(pdf_path);
    info!(file = %filename, "processing document");

    match extract_document(pdf_path, context) {
        Ok(processed) => {
            info!(
                file = %filename,
                output = %processed.output_path.display(),
                pages = processed.page_count,
                headings = processed.outline.headings.len(),
                title = %processed.outline.title,
                "wrote document outline"
            );

            DocumentReport {
                filename,
                sha256: processed.sha256,
                status: DocumentStatus::Completed,
                output_path: Some(processed.output_path.display().to_string()),
                page_count: processed.page_count,
                heading_count: processed.outline.headings.len(),
                title: Some(processed.outline.title),
                failure_reason: None,
            }
        }
        Err(err) => {
            error!(file = %filename, error = %err, "failed to process document");
            for cause in err.chain().skip(1) {
                error!(cause = %cause, "caused by");
            }

            DocumentReport {
                filename,
                sha256: None,
                status: DocumentStatus::Failed,
                output_path: None,
                page_count: 0,
                heading_count: 0,
                title: None,
                failure_reason: Some(format!("{err:#}")),
            }
        }
    }
}

fn extract_document(pdf_path: &Path, context: &BatchContext<'_>) -> Result<ProcessedDocument> {
    let sha256 = if context.hash_documents {
        Some(sha256_file(pdf_path)?)
    } else {
        None
    };
    let pages = context
        .source
        .extract_pages(pdf_path, context.max_pages)
        .with_context(|| format!("failed to extract page text from {}", pdf_path.display()))?;

    let outline = context.extractor.extract(&pages);

    let output_path = outline_path_for(pdf_path, context.output_dir)?;
    write_json_pretty(&output_path, &outline)?;

    Ok(ProcessedDocument {
        sha256,
        output_path,
        page_count: pages.len(),
        outline,
    })
}

pub(super) fn summarize_batch(documents: &[DocumentReport]) -> (usize, usize) {
    let completed = documents
        .iter()
        .filter(|document| document.status == DocumentStatus::Completed)
        .count();

    (completed, documents.len() - completed)
}
