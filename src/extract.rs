//! Per-page text extraction from gazette PDF files.
//!
//! This is the collaborator seam in front of the analysis pipeline: given a
//! file, produce the ordered per-page text blobs the assembler consumes.
//! Extraction quality and column order are lopdf's contract, not ours.

use std::path::Path;

use lopdf::Document as PdfDocument;

use crate::error::Result;

/// Extract the ordered per-page text of a PDF file.
///
/// Pages that fail text extraction or yield only whitespace are skipped
/// with a log line; the issue proceeds with the remaining pages. Only an
/// unreadable or corrupt file is an error.
pub fn extract_pages<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let doc = PdfDocument::load(path)?;
    Ok(page_texts(&doc))
}

/// Extract the ordered per-page text of a PDF held in memory.
pub fn extract_pages_from_bytes(data: &[u8]) -> Result<Vec<String>> {
    let doc = PdfDocument::load_mem(data)?;
    Ok(page_texts(&doc))
}

fn page_texts(doc: &PdfDocument) -> Vec<String> {
    let mut pages = Vec::new();
    for &number in doc.get_pages().keys() {
        match doc.extract_text(&[number]) {
            Ok(text) if !text.trim().is_empty() => pages.push(text),
            Ok(_) => log::debug!("page {}: no extractable text, skipping", number),
            Err(e) => log::warn!("page {}: text extraction failed, skipping: {}", number, e),
        }
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_file_is_an_error() {
        assert!(extract_pages("definitely/not/a/real/file.pdf").is_err());
    }

    #[test]
    fn test_garbage_bytes_are_an_error() {
        assert!(extract_pages_from_bytes(b"not a pdf at all").is_err());
    }

    #[test]
    fn test_non_pdf_file_is_an_error() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"plain text, not a pdf").unwrap();
        assert!(extract_pages(file.path()).is_err());
    }
}
