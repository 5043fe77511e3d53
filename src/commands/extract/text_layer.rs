use super::*;

/// Yields the plain text of a PDF, one entry per page, capped at `max_pages`.
pub trait PageTextSource {
    fn extract_pages(&self, pdf_path: &Path, max_pages: usize) -> Result<Vec<PageText>>;
}

/// Text layer produced by poppler's `pdftotext`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdftotextSource;

impl PageTextSource for PdftotextSource {
    fn extract_pages(&self, pdf_path: &Path, max_pages: usize) -> Result<Vec<PageText>> {
        let output = Command::new("pdftotext")
            .arg("-enc")
            .arg("UTF-8")
            .arg("-f")
            .arg("1")
            .arg("-l")
            .arg(max_pages.to_string())
            .arg(pdf_path)
            .arg("-")
            .output()
            .with_context(|| format!("failed to execute pdftotext for {}", pdf_path.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "pdftotext returned non-zero exit status for {}: {}",
                pdf_path.display(),
                stderr.trim()
            );
        }

        let raw = String::from_utf8_lossy(&output.stdout);
        let mut pages = split_text_layer_pages(&raw);
        pages.truncate(max_pages);

        Ok(pages)
    }
}

/// Splits form-feed separated page text. Blank pages in the middle keep their
/// slot so page numbers stay aligned; trailing blank pages are dropped.
pub(super) fn split_text_layer_pages(raw: &str) -> Vec<PageText> {
    let mut pages = raw
        .split('\u{000C}')
        .map(|chunk| chunk.replace('\u{0000}', ""))
        .collect::<Vec<String>>();

    while let Some(last_page) = pages.last() {
        if last_page.trim().is_empty() {
            pages.pop();
            continue;
        }
        break;
    }

    pages
        .into_iter()
        .enumerate()
        .map(|(index, text)| PageText::new(index as u32 + 1, text))
        .collect()
}
