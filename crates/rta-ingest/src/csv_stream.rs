//! Streaming CSV row decoding.
//!
//! The reader is deliberately forgiving at row scope: ragged rows are padded
//! or truncated against the header, blank lines are skipped, and a record
//! the CSV layer cannot decode (bad UTF-8 inside one row) is surfaced as a
//! row-scoped failure instead of killing the stream. Only transport-level
//! problems are fatal.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use rta_model::is_canonical_column;

use crate::error::{DecodeFailure, IngestError, Result, RowDecodeError};
use crate::row::RawRow;

/// First bytes of the stream, re-chained after the BOM sniff.
type Prefixed<R> = std::io::Chain<Cursor<Vec<u8>>, R>;

/// Lazy, non-restartable sequence of [`RawRow`]s over a CSV byte stream.
///
/// Construction reads and validates the header; iteration yields one item
/// per data row in file order.
pub struct RowReader<R: Read> {
    records: csv::StringRecordsIntoIter<Prefixed<R>>,
    header: Vec<String>,
}

impl RowReader<File> {
    /// Opens a CSV file for row decoding.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileAccess {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::new(file)
    }
}

impl<R: Read> RowReader<R> {
    /// Wraps a byte stream, validating encoding and header.
    ///
    /// # Errors
    ///
    /// Fails fast on UTF-16 input, an absent header line, or a header that
    /// names none of the canonical import columns.
    pub fn new(mut input: R) -> Result<Self> {
        let sniffed = sniff_bom(&mut input)?;

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(Cursor::new(sniffed).chain(input));

        let header_record = reader.headers().map_err(classify_header_error)?.clone();
        let header: Vec<String> = header_record
            .iter()
            .enumerate()
            .map(|(i, field)| {
                // The csv crate strips a UTF-8 BOM itself; keep this as a
                // belt for streams it does not recognize.
                let field = if i == 0 {
                    field.strip_prefix('\u{feff}').unwrap_or(field)
                } else {
                    field
                };
                field.trim().to_string()
            })
            .collect();

        if header.is_empty() || header.iter().all(String::is_empty) {
            return Err(IngestError::MissingHeader);
        }
        if !header.iter().any(|c| is_canonical_column(c)) {
            return Err(IngestError::UnknownHeader { header });
        }
        for column in header.iter().filter(|c| !is_canonical_column(c)) {
            if !column.is_empty() {
                tracing::warn!(column = %column, "ignoring non-canonical column");
            }
        }

        Ok(Self {
            records: reader.into_records(),
            header,
        })
    }

    /// Declared column names, trimmed, in file order.
    pub fn header(&self) -> &[String] {
        &self.header
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = std::result::Result<RawRow, DecodeFailure>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(error) => return Some(Err(classify_record_error(error))),
            };

            // A whitespace-only line decodes as a single blank field; it is
            // not a data row. A row of empty cells (",,,") is a data row.
            if record.len() <= 1 && record.iter().all(|f| f.trim().is_empty()) {
                continue;
            }

            return Some(Ok(RawRow::from_header_and_cells(
                &self.header,
                record.iter(),
            )));
        }
    }
}

/// Reads up to two bytes to detect a UTF-16 BOM.
///
/// Returns the consumed bytes so they can be chained back in front of the
/// stream for the CSV reader.
fn sniff_bom<R: Read>(input: &mut R) -> Result<Vec<u8>> {
    let mut prefix = [0u8; 2];
    let mut filled = 0;
    while filled < prefix.len() {
        match input.read(&mut prefix[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(IngestError::StreamRead(e)),
        }
    }

    if filled >= 2 {
        if prefix == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
            });
        }
        if prefix == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(prefix[..filled].to_vec())
}

fn classify_header_error(error: csv::Error) -> IngestError {
    match error.into_kind() {
        csv::ErrorKind::Io(io) => IngestError::StreamRead(io),
        _ => IngestError::MissingHeader,
    }
}

/// Splits per-record decode errors from fatal stream errors.
fn classify_record_error(error: csv::Error) -> DecodeFailure {
    match error.into_kind() {
        csv::ErrorKind::Io(io) => DecodeFailure::Stream(IngestError::StreamRead(io)),
        kind => DecodeFailure::Row(RowDecodeError {
            message: format!("{kind:?}"),
        }),
    }
}
