use docdeck_common::{DocDeckError, Result};
use lopdf::Document;
use std::path::Path;
use tracing::debug;

/// Extract text from every page of a PDF.
///
/// Pages that yield no text are skipped; each kept page is followed by a
/// newline. A page that fails to decode fails the whole document.
pub fn extract_pdf(path: &Path) -> Result<String> {
    let doc = Document::load(path)
        .map_err(|e| DocDeckError::extraction(format!("Failed to load PDF: {}", e)))?;

    let pages = doc.get_pages();
    let mut page_texts = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        let text = doc.extract_text(&[*page_number]).map_err(|e| {
            DocDeckError::extraction(format!(
                "Failed to extract text from page {}: {}",
                page_number, e
            ))
        })?;
        page_texts.push(text);
    }

    debug!("Extracted {} PDF pages from {}", page_texts.len(), path.display());
    Ok(join_pages(page_texts))
}

/// Concatenate page texts, dropping pages with no visible text
pub(crate) fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut text = String::new();
    for page in pages {
        if page.trim().is_empty() {
            continue;
        }
        text.push_str(&page);
        text.push('\n');
    }
    text
}
