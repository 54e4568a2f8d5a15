//! Table-of-contents extraction with sticky institution attribution.

use regex::Regex;

use crate::model::TocEntry;

/// Scans the table-of-contents region of an issue for (institution, line)
/// pairs.
///
/// The region opens at a heading spelling "Contenido" (letter-spaced
/// variants like `C o n t e n i d o` included) and closes at the first
/// page-break idiom. Institution headings update the entity in effect;
/// every other non-empty line is recorded under it.
pub struct TocExtractor {
    heading: Regex,
    page_word: Regex,
    page_number: Regex,
}

impl TocExtractor {
    pub fn new() -> Self {
        Self {
            heading: Regex::new(r"(?i)^(MINISTERIO|DEPARTAMENTO|ENTIDAD|ORGANISMO)\b").unwrap(),
            page_word: Regex::new(r"(?i)p[áa]gina").unwrap(),
            page_number: Regex::new(r"^\d+$").unwrap(),
        }
    }

    /// Whether a line spells "Contenido" once interior whitespace is ignored.
    fn is_region_start(line: &str) -> bool {
        let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        compact.eq_ignore_ascii_case("contenido")
    }

    fn is_page_break(&self, line: &str) -> bool {
        self.page_number.is_match(line) || self.page_word.is_match(line)
    }

    /// Extract the TOC entries of an issue from its reflowed lines.
    ///
    /// Returns an empty list when no "Contenido" heading exists; institution
    /// resolution then always falls through to the unknown sentinel.
    pub fn extract(&self, lines: &[String]) -> Vec<TocEntry> {
        let start = match lines.iter().position(|l| Self::is_region_start(l)) {
            Some(pos) => pos,
            None => return Vec::new(),
        };

        let (_, entries) = lines[start + 1..]
            .iter()
            .map(|l| l.trim())
            .take_while(|l| !self.is_page_break(l))
            .filter(|l| !l.is_empty())
            .fold(
                (String::new(), Vec::new()),
                |(current, mut entries), line| {
                    if self.heading.is_match(line) {
                        (line.to_string(), entries)
                    } else {
                        entries.push(TocEntry::new(current.clone(), line));
                        (current, entries)
                    }
                },
            );

        entries
    }
}

impl Default for TocExtractor {
    fn default() -> Self {
        Self::new()
    }
}
