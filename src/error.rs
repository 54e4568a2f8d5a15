//! Error types for the gaceta library.

use std::io;
use thiserror::Error;

/// Result type alias for gaceta operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while processing a gazette issue.
///
/// Field-level heuristics (title fields, publication date, institution
/// attribution) never surface here: they degrade to empty strings or the
/// unknown-institution sentinel. Only collaborator-level failures propagate.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing the PDF container.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// Error serializing records (JSON, CSV).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PdfParse("bad xref".to_string());
        assert_eq!(err.to_string(), "PDF parsing error: bad xref");

        let err = Error::Render("bad record".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad record");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
