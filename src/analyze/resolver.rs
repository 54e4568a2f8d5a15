//! Institution attribution against the table-of-contents entries.

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::model::{TocEntry, UNKNOWN_INSTITUTION};

/// Words that terminate an institution name when cleaning a heading.
const NAME_STOPWORDS: [&str; 10] = [
    "COMUNICAR",
    "POR",
    "DECRETO",
    "RESOLUCIÓN",
    "RESOLUCION",
    "ACUERDO",
    "CIRCULAR",
    "CONTENIDO",
    "PRESENTE",
    "DOCTORES",
];

/// Decompose, strip diacritics, and uppercase for accent-insensitive
/// substring comparison.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase()
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Resolves a document's issuing institution by fuzzy-matching its
/// (tipo, numero, anio) triple against the TOC entries.
///
/// Resolution is a waterfall of independent passes over the full entry
/// list, from exact triple containment down to a year-only match, then the
/// last institution heading seen, then the unknown sentinel. The year-only
/// tier can attribute an act to an unrelated institution that merely shares
/// the publication year; that imprecision is accepted.
pub struct EntityResolver {
    heading: Regex,
}

impl EntityResolver {
    pub fn new() -> Self {
        Self {
            heading: Regex::new(r"(?i)^(MINISTERIO|DEPARTAMENTO|ENTIDAD|ORGANISMO)\b").unwrap(),
        }
    }

    /// Attribute an institution to the (tipo, numero, anio) triple.
    ///
    /// Empty triple components disable the tiers that depend on them: an
    /// empty needle is a substring of everything and would turn a content
    /// tier into "first entry wins".
    pub fn resolve(&self, toc: &[TocEntry], tipo: &str, numero: &str, anio: &str) -> String {
        let tipo = normalize(tipo);
        let numero = normalize(numero);
        let anio = normalize(anio);

        let full = |line: &str| line.contains(&tipo) && line.contains(&numero) && line.contains(&anio);
        let partial = |line: &str| line.contains(&numero) && line.contains(&anio);
        let weak = |line: &str| line.contains(&anio);

        let hit = (!tipo.is_empty() && !numero.is_empty() && !anio.is_empty())
            .then(|| Self::first_match(toc, full))
            .flatten()
            .or_else(|| {
                (!numero.is_empty() && !anio.is_empty())
                    .then(|| Self::first_match(toc, partial))
                    .flatten()
            })
            .or_else(|| {
                (!anio.is_empty())
                    .then(|| Self::first_match(toc, weak))
                    .flatten()
            })
            .or_else(|| Self::last_entity(toc));

        match hit {
            Some(name) => self.clean_entity_name(name),
            None => UNKNOWN_INSTITUTION.to_string(),
        }
    }

    /// One tier: scan all entries carrying an institution, top to bottom.
    fn first_match(toc: &[TocEntry], matches: impl Fn(&str) -> bool) -> Option<&str> {
        toc.iter()
            .filter(|entry| entry.has_entity())
            .find(|entry| matches(&normalize(&entry.linea)))
            .map(|entry| entry.entidad.as_str())
    }

    /// Guaranteed fallback: the last institution heading in effect.
    fn last_entity(toc: &[TocEntry]) -> Option<&str> {
        toc.iter()
            .rev()
            .find(|entry| entry.has_entity())
            .map(|entry| entry.entidad.as_str())
    }

    /// Cut an institution heading down to a presentable name.
    ///
    /// Takes the text up to the first newline or period. When the heading
    /// pattern matches, words are consumed until one hits the stopword list;
    /// otherwise the name is truncated to its first eight words. The result
    /// is title-cased either way.
    pub fn clean_entity_name(&self, raw: &str) -> String {
        let head = raw
            .split(['\n', '.'])
            .next()
            .unwrap_or("")
            .trim();
        let words: Vec<&str> = head.split_whitespace().collect();

        let kept: Vec<&str> = if self.heading.is_match(head) {
            words
                .iter()
                .take_while(|w| !NAME_STOPWORDS.contains(&w.to_uppercase().as_str()))
                .copied()
                .collect()
        } else {
            words.into_iter().take(8).collect()
        };

        kept.iter()
            .map(|w| title_case_word(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for EntityResolver {
    fn default() -> Self {
        Self::new()
    }
}
