//! Import template generation.
//!
//! The template is a header-only CSV naming the canonical columns in fixed
//! order; operators fill it in before uploading.

use std::io::Write;
use std::path::Path;

use rta_model::IMPORT_COLUMNS;

use crate::error::{IngestError, Result};

/// Writes the header-only import template to `writer`.
pub fn write_template<W: Write>(writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(IMPORT_COLUMNS)
        .map_err(IngestError::Write)?;
    csv_writer.flush().map_err(IngestError::StreamRead)?;
    Ok(())
}

/// Writes the import template to a file, creating or truncating it.
pub fn write_template_to_path(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| IngestError::FileAccess {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_template(file)
}
