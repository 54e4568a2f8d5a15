//! CSV rendering of document records.

use crate::error::{Error, Result};
use crate::model::DocumentRecord;

/// Serialize records to CSV, one row per record, with a header row of the
/// record's field names.
pub fn to_csv(records: &[DocumentRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| Error::Render(format!("CSV serialization error: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Render(format!("CSV flush error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::Render(format!("CSV encoding error: {}", e)))
}
