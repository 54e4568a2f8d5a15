//! # gaceta
//!
//! Structured legal-act extraction from official government-gazette PDF
//! issues.
//!
//! A gazette issue arrives as two-column page scans. This library reflows
//! the extracted page text into reading order, detects the boundary of each
//! legal act (decree, resolution, executive resolution, joint external
//! circular, agreement), parses type/number/year out of the title line, and
//! attributes each act to its issuing institution by fuzzy-matching against
//! the issue's table of contents.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gaceta::{analyze_file, render, JsonFormat};
//!
//! fn main() -> gaceta::Result<()> {
//!     let analysis = analyze_file("diario_51234.pdf")?;
//!
//!     for doc in &analysis.documentos {
//!         println!("{} {} de {}: {}", doc.tipo_documento, doc.numero, doc.anio, doc.institucion);
//!     }
//!
//!     let json = render::to_json(&analysis.documentos, JsonFormat::Pretty)?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```
//!
//! ## Degradation over failure
//!
//! Field-level heuristics never fail a document: a title that does not match
//! the boundary idiom yields empty fields and a keyword-classified type, a
//! missing masthead date yields an empty string, and a missing table of
//! contents resolves every institution to the unknown sentinel. Only an
//! unreadable file is an error.

pub mod analyze;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use analyze::{AnalyzeOptions, BoundaryScanner, DocumentAssembler, EntityResolver, TocExtractor};
pub use error::{Error, Result};
pub use model::{DocumentRecord, DocumentType, IssueAnalysis, TocEntry, UNKNOWN_INSTITUTION};
pub use render::JsonFormat;

use std::path::Path;

/// Analyze a gazette PDF file and return its structured records.
///
/// Records are tagged with the file's name in their `archivo` field.
///
/// # Example
///
/// ```no_run
/// use gaceta::analyze_file;
///
/// let analysis = analyze_file("diario_51234.pdf").unwrap();
/// println!("{} documentos", analysis.document_count());
/// ```
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<IssueAnalysis> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    analyze_file_with_options(path, AnalyzeOptions::new().with_source_name(name))
}

/// Analyze a gazette PDF file with custom options.
pub fn analyze_file_with_options<P: AsRef<Path>>(
    path: P,
    options: AnalyzeOptions,
) -> Result<IssueAnalysis> {
    let pages = extract::extract_pages(path)?;
    Ok(DocumentAssembler::new(options).assemble(&pages))
}

/// Analyze a gazette PDF held in memory.
pub fn analyze_bytes(data: &[u8]) -> Result<IssueAnalysis> {
    analyze_bytes_with_options(data, AnalyzeOptions::default())
}

/// Analyze a gazette PDF held in memory, with custom options.
pub fn analyze_bytes_with_options(data: &[u8], options: AnalyzeOptions) -> Result<IssueAnalysis> {
    let pages = extract::extract_pages_from_bytes(data)?;
    Ok(DocumentAssembler::new(options).assemble(&pages))
}

/// Analyze pre-extracted per-page text blobs.
///
/// This is the seam for callers that already ran their own PDF text
/// extraction: no file access, no failure modes.
pub fn analyze_pages(pages: &[String], options: AnalyzeOptions) -> IssueAnalysis {
    DocumentAssembler::new(options).assemble(pages)
}

/// Analyze the full raw text of an issue.
pub fn analyze_text(text: &str) -> IssueAnalysis {
    DocumentAssembler::default().assemble_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_text_end_to_end() {
        let analysis = analyze_text(
            "DECRETO NÚMERO 123 DE 2020\nPor la cual se ordena\nRESOLUCIÓN NÚMERO 9 DE 2020\ncuerpo",
        );
        assert_eq!(analysis.document_count(), 2);
        assert_eq!(analysis.documentos[0].tipo_documento, DocumentType::Decreto);
    }

    #[test]
    fn test_analyze_pages_tags_source() {
        let pages = vec!["ACUERDO NÚMERO 7 DE 2019\ncuerpo".to_string()];
        let analysis = analyze_pages(&pages, AnalyzeOptions::new().with_source_name("a.pdf"));
        assert_eq!(analysis.documentos[0].archivo, "a.pdf");
    }

    #[test]
    fn test_analyze_file_missing_path_errors() {
        assert!(analyze_file("missing/diario.pdf").is_err());
    }
}
