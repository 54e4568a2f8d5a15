//! Table-of-contents entry type.

use serde::{Deserialize, Serialize};

/// One line captured from the table-of-contents region, tied to the
/// institution heading in effect when the line was read.
///
/// The relationship is sticky, not containing: every line between one
/// institution heading and the next belongs to the first heading. Lines
/// read before any heading carry an empty `entidad`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Institution heading in effect, empty when none has been seen yet.
    pub entidad: String,

    /// The raw table-of-contents line.
    pub linea: String,
}

impl TocEntry {
    /// Create a new entry.
    pub fn new(entidad: impl Into<String>, linea: impl Into<String>) -> Self {
        Self {
            entidad: entidad.into(),
            linea: linea.into(),
        }
    }

    /// Whether this entry carries an institution heading.
    pub fn has_entity(&self) -> bool {
        !self.entidad.is_empty()
    }
}
