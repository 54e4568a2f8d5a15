//! Legal-act boundary detection over reflowed issue text.

use regex::Regex;

use crate::model::DocumentType;

/// A contiguous `[start, end)` byte range of the reflowed issue text
/// believed to contain exactly one legal act.
///
/// Spans produced by one scan are contiguous, non-overlapping, and cover
/// `[first-boundary-start, text-end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSpan {
    /// Byte offset of the boundary marker that opens the act.
    pub start: usize,
    /// Byte offset of the next boundary marker, or the text length.
    pub end: usize,
}

impl DocumentSpan {
    /// The span's text.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// One act kind paired with the pattern recognizing its opening idiom.
struct BoundaryPattern {
    tipo: DocumentType,
    regex: Regex,
}

/// Scans issue text for `<TYPE> NÚMERO <n> DE <year>` boundary markers.
///
/// Patterns are held as an explicit ordered list, one per act kind, with
/// RESOLUCIÓN EJECUTIVA ahead of RESOLUCIÓN so the longer keyword is never
/// shadowed by its prefix. Matching is case-insensitive and accepts the
/// unaccented NUMERO spelling.
pub struct BoundaryScanner {
    patterns: Vec<BoundaryPattern>,
}

impl BoundaryScanner {
    /// Compile the boundary pattern list.
    pub fn new() -> Self {
        let keywords = [
            (DocumentType::Decreto, r"DECRETO"),
            (DocumentType::ResolucionEjecutiva, r"RESOLUCI[ÓO]N\s+EJECUTIVA"),
            (DocumentType::Resolucion, r"RESOLUCI[ÓO]N"),
            (
                DocumentType::CircularExternaConjunta,
                r"CIRCULAR\s+EXTERNA\s+CONJUNTA",
            ),
            (DocumentType::Acuerdo, r"ACUERDO"),
        ];

        let patterns = keywords
            .into_iter()
            .map(|(tipo, keyword)| BoundaryPattern {
                tipo,
                regex: Regex::new(&format!(
                    r"(?i){}\s+N[ÚU]MERO\s+(\d+)\s+DE\s+(\d{{4}})",
                    keyword
                ))
                .unwrap(),
            })
            .collect();

        Self { patterns }
    }

    /// Find the earliest boundary at or after `from`.
    ///
    /// Ties at the same offset resolve to the earlier pattern in the list.
    fn find_boundary(&self, text: &str, from: usize) -> Option<(usize, DocumentType)> {
        if from > text.len() {
            return None;
        }
        let mut best: Option<(usize, DocumentType)> = None;
        for pattern in &self.patterns {
            if let Some(m) = pattern.regex.find_at(text, from) {
                match best {
                    Some((start, _)) if m.start() >= start => {}
                    _ => best = Some((m.start(), pattern.tipo)),
                }
            }
        }
        best
    }

    /// Split the issue text into one span per detected act.
    ///
    /// Each span runs from its boundary marker to the next boundary found
    /// strictly after it, or to end of text. Text before the first boundary
    /// (masthead, table of contents) is never captured.
    pub fn scan(&self, text: &str) -> Vec<DocumentSpan> {
        let mut spans = Vec::new();
        let mut current = self.find_boundary(text, 0);

        while let Some((start, _)) = current {
            // Boundary markers start with an ASCII letter, so one byte past
            // the start is a valid offset to resume searching from.
            let next = self.find_boundary(text, start + 1);
            let end = next.map_or(text.len(), |(s, _)| s);
            spans.push(DocumentSpan { start, end });
            current = next;
        }

        spans
    }

    /// Match the boundary idiom anchored at the start of a title line,
    /// yielding the act kind and its captured (numero, anio).
    pub fn match_title(&self, line: &str) -> Option<(DocumentType, String, String)> {
        for pattern in &self.patterns {
            if let Some(caps) = pattern.regex.captures(line) {
                if caps.get(0).map(|m| m.start()) == Some(0) {
                    let numero = caps.get(1).map_or("", |m| m.as_str()).to_string();
                    let anio = caps.get(2).map_or("", |m| m.as_str()).to_string();
                    return Some((pattern.tipo, numero, anio));
                }
            }
        }
        None
    }
}

impl Default for BoundaryScanner {
    fn default() -> Self {
        Self::new()
    }
}
