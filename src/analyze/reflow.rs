//! Line reflow for two-column gazette extraction output.
//!
//! Extracted gazette pages arrive as short extraction-order line runs with
//! words hyphen-broken at column wraps. Reflow drops blank lines and joins
//! hyphen-broken fragments back into whole tokens. No geometric reordering
//! is attempted.

/// Fixed substitutions for known extraction artifacts.
///
/// Latin ligatures, the Unicode replacement character, and non-breaking
/// spaces are the only artifacts corrected; anything else is passed through.
const ARTIFACT_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("\u{FB00}", "ff"),
    ("\u{FB01}", "fi"),
    ("\u{FB02}", "fl"),
    ("\u{FB03}", "ffi"),
    ("\u{FB04}", "ffl"),
    ("\u{FFFD}", ""),
    ("\u{00A0}", " "),
];

/// Replace known extraction artifacts with their plain-text equivalents.
pub fn normalize_artifacts(text: &str) -> String {
    let mut result = text.to_string();
    for (artifact, replacement) in ARTIFACT_SUBSTITUTIONS {
        result = result.replace(artifact, replacement);
    }
    result
}

/// Reflow raw extracted text into reading-order lines.
///
/// Blank lines are dropped. A line ending in `-` has the hyphen stripped
/// and its content held back, to be joined directly onto the next non-empty
/// line so the broken word becomes one token again. Every other line flushes
/// the held fragment and is emitted as a single reflowed line.
pub fn reflow_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending = String::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(fragment) = line.strip_suffix('-') {
            pending.push_str(fragment);
        } else if pending.is_empty() {
            lines.push(line.to_string());
        } else {
            pending.push_str(line);
            lines.push(std::mem::take(&mut pending));
        }
    }

    // A trailing hyphen on the last line has nothing to join with.
    if !pending.is_empty() {
        lines.push(pending);
    }

    lines
}

/// Reflow raw extracted text into a single newline-joined string.
pub fn reflow(text: &str) -> String {
    reflow_lines(text).join("\n")
}
