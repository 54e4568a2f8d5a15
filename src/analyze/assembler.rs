//! Pipeline driver: pages in, ordered document records out.

use super::boundary::BoundaryScanner;
use super::options::AnalyzeOptions;
use super::pubdate::extract_publication_date;
use super::reflow::{normalize_artifacts, reflow_lines};
use super::resolver::EntityResolver;
use super::title::parse_fields;
use super::toc::TocExtractor;
use crate::model::{DocumentRecord, IssueAnalysis};

/// Assembles an [`IssueAnalysis`] from per-page text blobs.
///
/// One issue is fully reflowed, boundary-scanned, and resolved before
/// results are emitted; nothing is shared across issues, so callers may
/// process many issues in parallel with one assembler each (or one shared
/// by `&self`).
pub struct DocumentAssembler {
    options: AnalyzeOptions,
    boundary: BoundaryScanner,
    toc: TocExtractor,
    resolver: EntityResolver,
}

impl DocumentAssembler {
    /// Create an assembler with the given options.
    pub fn new(options: AnalyzeOptions) -> Self {
        Self {
            options,
            boundary: BoundaryScanner::new(),
            toc: TocExtractor::new(),
            resolver: EntityResolver::new(),
        }
    }

    /// Analyze one issue from its ordered per-page text blobs.
    pub fn assemble(&self, pages: &[String]) -> IssueAnalysis {
        let joined = pages.join("\n");
        let raw = if self.options.normalize_artifacts {
            normalize_artifacts(&joined)
        } else {
            joined
        };

        let lines = reflow_lines(&raw);
        let text = lines.join("\n");

        let fecha_publicacion = extract_publication_date(&text);
        let toc_entries = self.toc.extract(&lines);
        let spans = self.boundary.scan(&text);

        log::debug!(
            "issue: {} reflowed lines, {} toc entries, {} document spans",
            lines.len(),
            toc_entries.len(),
            spans.len()
        );

        let documentos = spans
            .iter()
            .map(|span| {
                let fields = parse_fields(&self.boundary, span.slice(&text));
                let institucion = self.resolver.resolve(
                    &toc_entries,
                    &fields.tipo,
                    &fields.numero,
                    &fields.anio,
                );
                DocumentRecord {
                    tipo_documento: fields.tipo_documento,
                    numero: fields.numero,
                    anio: fields.anio,
                    titulo: fields.titulo,
                    descripcion: fields.descripcion,
                    fecha_publicacion: fecha_publicacion.clone(),
                    institucion,
                    archivo: self.options.source_name.clone().unwrap_or_default(),
                }
            })
            .collect();

        IssueAnalysis {
            fecha_publicacion,
            documentos,
        }
    }

    /// Analyze one issue from its full raw text.
    pub fn assemble_text(&self, text: &str) -> IssueAnalysis {
        self.assemble(std::slice::from_ref(&text.to_string()))
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new(AnalyzeOptions::default())
    }
}
