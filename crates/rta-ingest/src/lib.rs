//! Trade data ingestion utilities.
//!
//! This crate turns an operator-authored CSV byte stream into an ordered
//! sequence of header-keyed raw rows, tolerating the corruption such files
//! routinely carry: ragged columns, quoting irregularities, blank lines,
//! stray whitespace, and a UTF-8 BOM.
//!
//! # Failure model
//!
//! - Stream-level problems (I/O error, UTF-16 input, missing header) are
//!   fatal and surface as [`IngestError`].
//! - A single unparsable row is reported as [`RowDecodeError`] and the
//!   stream continues; the caller decides how to record it.
//!
//! # Example
//!
//! ```ignore
//! use rta_ingest::RowReader;
//!
//! let mut reader = RowReader::from_path("trades.csv")?;
//! for decoded in &mut reader {
//!     match decoded {
//!         Ok(row) => println!("{}", row.get("desensitizedUid")),
//!         Err(failure) => eprintln!("{failure}"),
//!     }
//! }
//! ```

mod csv_stream;
mod error;
mod export;
mod row;
mod template;

// === Error Types ===
pub use error::{DecodeFailure, IngestError, Result, RowDecodeError};

// === Row Decoding ===
pub use csv_stream::RowReader;
pub use row::RawRow;

// === Companion Artifacts ===
pub use export::{write_records, write_records_to_path};
pub use template::{write_template, write_template_to_path};
