//! Per-page text extraction from PDF files

use crate::error::ExtractorError;
use fundscan_domain::Document;
use std::path::Path;
use tracing::{debug, info};

/// Extract the text of every page of a PDF, in page order
///
/// Line breaks inside a page are folded into spaces. The document takes the
/// file stem as its name.
///
/// # Errors
///
/// - `ExtractorError::Pdf` if the file cannot be loaded or a page cannot be decoded
/// - `ExtractorError::EmptyPage` if a page yields no text
pub fn extract_pages(path: &Path) -> Result<Document, ExtractorError> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| ExtractorError::Pdf(format!("No file name in {}", path.display())))?;

    info!("Parsing file {}...", name);

    let pdf = lopdf::Document::load(path)
        .map_err(|e| ExtractorError::Pdf(format!("{}: {}", path.display(), e)))?;

    let mut texts = Vec::new();
    for (index, page_number) in pdf.get_pages().into_keys().enumerate() {
        let text = pdf
            .extract_text(&[page_number])
            .map_err(|e| ExtractorError::Pdf(format!("page {}: {}", index, e)))?;

        if text.trim().is_empty() {
            return Err(ExtractorError::EmptyPage { page: index });
        }

        debug!("Page {}: {} chars", index, text.len());
        texts.push(text);
    }

    let document = Document::from_texts(name, texts);
    info!("File parsed successfully. Number of pages: {}", document.page_count());

    Ok(document)
}
