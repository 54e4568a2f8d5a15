//! Record-level types: document kinds and the per-act output unit.

use serde::{Deserialize, Serialize};

/// Sentinel institution name used when attribution is impossible.
pub const UNKNOWN_INSTITUTION: &str = "INSTITUCIÓN DESCONOCIDA";

/// The closed set of legal-act kinds a gazette issue can contain.
///
/// Ordering matters wherever these are matched against free text:
/// `ResolucionEjecutiva` must be tried before `Resolucion` because the
/// plain keyword is a prefix of the executive one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "DECRETO")]
    Decreto,
    #[serde(rename = "RESOLUCIÓN EJECUTIVA")]
    ResolucionEjecutiva,
    #[serde(rename = "RESOLUCIÓN")]
    Resolucion,
    #[serde(rename = "CIRCULAR EXTERNA CONJUNTA")]
    CircularExternaConjunta,
    #[serde(rename = "ACUERDO")]
    Acuerdo,
    #[serde(rename = "OTRO")]
    Otro,
}

impl DocumentType {
    /// The uppercase label used in gazette text and in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Decreto => "DECRETO",
            DocumentType::ResolucionEjecutiva => "RESOLUCIÓN EJECUTIVA",
            DocumentType::Resolucion => "RESOLUCIÓN",
            DocumentType::CircularExternaConjunta => "CIRCULAR EXTERNA CONJUNTA",
            DocumentType::Acuerdo => "ACUERDO",
            DocumentType::Otro => "OTRO",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted legal act.
///
/// Created once per detected document span and never mutated afterwards.
/// Field names are the wire schema for both JSON and CSV output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Act kind (DECRETO, RESOLUCIÓN, ...).
    pub tipo_documento: DocumentType,

    /// Act number as printed (digits only), empty when the title line
    /// did not match the boundary idiom.
    pub numero: String,

    /// Four-digit year as printed, empty on a field-parse miss.
    pub anio: String,

    /// Title line, with the parenthesized date annotation appended as a
    /// second line when one was found in the body.
    pub titulo: String,

    /// Body text with the title line (and date annotation) removed.
    pub descripcion: String,

    /// Issue-level publication date, ISO `YYYY-MM-DD` or empty.
    pub fecha_publicacion: String,

    /// Issuing institution, or [`UNKNOWN_INSTITUTION`].
    pub institucion: String,

    /// Source file name, set by the caller; empty for in-memory input.
    #[serde(default)]
    pub archivo: String,
}

/// Result of analyzing one gazette issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueAnalysis {
    /// Publication date shared by every act in the issue, or empty.
    pub fecha_publicacion: String,

    /// Detected acts in appearance order.
    pub documentos: Vec<DocumentRecord>,
}

impl IssueAnalysis {
    /// Number of acts detected in the issue.
    pub fn document_count(&self) -> usize {
        self.documentos.len()
    }

    /// Whether the issue yielded no acts.
    pub fn is_empty(&self) -> bool {
        self.documentos.is_empty()
    }

    /// Tag every record with the source file name.
    pub fn tag_source(&mut self, name: &str) {
        for doc in &mut self.documentos {
            doc.archivo = name.to_string();
        }
    }
}
