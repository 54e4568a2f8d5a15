//! Title-line field extraction and body splitting.

use regex::Regex;

use super::boundary::BoundaryScanner;
use crate::model::DocumentType;

/// Fields parsed out of one document span.
///
/// `tipo`, `numero`, and `anio` are the captures of the anchored boundary
/// match against the title line; all three are empty when the line does not
/// match, in which case `tipo_documento` comes from the keyword waterfall.
#[derive(Debug, Clone)]
pub struct TitleFields {
    pub tipo_documento: DocumentType,
    pub tipo: String,
    pub numero: String,
    pub anio: String,
    pub titulo: String,
    pub descripcion: String,
}

/// Classify a title by keyword, in waterfall order.
///
/// RESOLUCIÓN EJECUTIVA is checked before RESOLUCIÓN because the plain
/// keyword is a prefix of the executive one; first hit wins, no hit is OTRO.
pub fn identify_document_type(text: &str) -> DocumentType {
    let keywords = [
        (DocumentType::Decreto, r"(?i)\bDECRETO\b"),
        (
            DocumentType::ResolucionEjecutiva,
            r"(?i)\bRESOLUCI[ÓO]N\s+EJECUTIVA\b",
        ),
        (DocumentType::Resolucion, r"(?i)\bRESOLUCI[ÓO]N\b"),
        (
            DocumentType::CircularExternaConjunta,
            r"(?i)\bCIRCULAR\s+EXTERNA\s+CONJUNTA\b",
        ),
        (DocumentType::Acuerdo, r"(?i)\bACUERDO\b"),
    ];

    for (tipo, pattern) in keywords {
        if Regex::new(pattern).unwrap().is_match(text) {
            return tipo;
        }
    }
    DocumentType::Otro
}

/// Parse a document span's text into title fields and body.
///
/// Line 0 (trimmed) is the title. Among the remaining lines, any line shaped
/// `( ... )` is the optional date annotation (last one wins) and is excluded
/// from the body; everything else joins into `descripcion`. A captured
/// annotation is appended to the title as a second line.
pub fn parse_fields(scanner: &BoundaryScanner, span_text: &str) -> TitleFields {
    let mut lines = span_text.lines();
    let title_line = lines.next().unwrap_or("").trim().to_string();

    let (tipo_documento, tipo, numero, anio) = match scanner.match_title(&title_line) {
        Some((tipo, numero, anio)) => (tipo, tipo.as_str().to_string(), numero, anio),
        None => (
            identify_document_type(&title_line),
            String::new(),
            String::new(),
            String::new(),
        ),
    };

    let mut fecha_annotation: Option<String> = None;
    let mut body_lines: Vec<&str> = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.starts_with('(') && trimmed.ends_with(')') {
            fecha_annotation = Some(trimmed.to_string());
        } else {
            body_lines.push(line);
        }
    }

    let titulo = match &fecha_annotation {
        Some(fecha) => format!("{}\n{}", title_line, fecha),
        None => title_line,
    };

    TitleFields {
        tipo_documento,
        tipo,
        numero,
        anio,
        titulo,
        descripcion: body_lines.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_from_matching_title() {
        let scanner = BoundaryScanner::new();
        let text = "DECRETO NÚMERO 123 DE 2020\nPor la cual se ordena el gasto\nArtículo 1";
        let fields = parse_fields(&scanner, text);

        assert_eq!(fields.tipo_documento, DocumentType::Decreto);
        assert_eq!(fields.tipo, "DECRETO");
        assert_eq!(fields.numero, "123");
        assert_eq!(fields.anio, "2020");
        assert_eq!(fields.titulo, "DECRETO NÚMERO 123 DE 2020");
        assert_eq!(fields.descripcion, "Por la cual se ordena el gasto\nArtículo 1");
    }

    #[test]
    fn test_date_annotation_moves_to_title() {
        let scanner = BoundaryScanner::new();
        let text = "DECRETO NÚMERO 123 DE 2020\nPor la cual se ordena\n(enero 5 de 2020)\nArtículo 1";
        let fields = parse_fields(&scanner, text);

        assert_eq!(fields.titulo, "DECRETO NÚMERO 123 DE 2020\n(enero 5 de 2020)");
        assert_eq!(fields.descripcion, "Por la cual se ordena\nArtículo 1");
    }

    #[test]
    fn test_last_annotation_wins() {
        let scanner = BoundaryScanner::new();
        let text = "ACUERDO NÚMERO 7 DE 2019\n(marzo 1 de 2019)\ncuerpo\n(abril 2 de 2019)";
        let fields = parse_fields(&scanner, text);

        assert_eq!(fields.titulo, "ACUERDO NÚMERO 7 DE 2019\n(abril 2 de 2019)");
        assert_eq!(fields.descripcion, "cuerpo");
    }

    #[test]
    fn test_miss_falls_back_to_keyword_waterfall() {
        let scanner = BoundaryScanner::new();
        let text = "Aviso sobre la resolución ejecutiva pendiente\ncuerpo";
        let fields = parse_fields(&scanner, text);

        assert_eq!(fields.tipo_documento, DocumentType::ResolucionEjecutiva);
        assert_eq!(fields.tipo, "");
        assert_eq!(fields.numero, "");
        assert_eq!(fields.anio, "");
    }

    #[test]
    fn test_waterfall_order_and_default() {
        assert_eq!(
            identify_document_type("se expide el decreto reglamentario"),
            DocumentType::Decreto
        );
        assert_eq!(
            identify_document_type("RESOLUCIÓN EJECUTIVA de traslado"),
            DocumentType::ResolucionEjecutiva
        );
        assert_eq!(
            identify_document_type("resolucion sin acento"),
            DocumentType::Resolucion
        );
        assert_eq!(
            identify_document_type("circular externa conjunta aclaratoria"),
            DocumentType::CircularExternaConjunta
        );
        assert_eq!(identify_document_type("texto sin tipo"), DocumentType::Otro);
    }

    #[test]
    fn test_title_extraction_is_idempotent() {
        let scanner = BoundaryScanner::new();
        let text = "RESOLUCIÓN NÚMERO 9 DE 2020\n(febrero 2 de 2020)\ncuerpo";
        let fields = parse_fields(&scanner, text);

        let again = parse_fields(&scanner, &fields.titulo);
        assert_eq!(again.tipo_documento, fields.tipo_documento);
        assert_eq!(again.numero, fields.numero);
        assert_eq!(again.anio, fields.anio);
    }
}
