//! Error types for trade data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal, stream-level ingestion errors. Any of these aborts the batch.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or create a file.
    #[error("failed to access {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while reading the stream.
    #[error("failed to read input stream: {0}")]
    StreamRead(#[source] std::io::Error),

    /// Input is in an unsupported encoding (UTF-16 BOM detected).
    #[error("unsupported encoding: {encoding} (UTF-8 required)")]
    UnsupportedEncoding { encoding: &'static str },

    /// Input is empty or has no header line.
    #[error("input has no header line")]
    MissingHeader,

    /// Declared header shares no columns with the canonical registry.
    #[error("header matches no canonical import column: {header:?}")]
    UnknownHeader { header: Vec<String> },

    /// I/O failure while writing (template or export).
    #[error("failed to write output: {0}")]
    Write(#[source] csv::Error),
}

/// A single row that could not be decoded. Non-fatal: the stream continues.
#[derive(Debug, Error)]
#[error("row could not be decoded: {message}")]
pub struct RowDecodeError {
    /// Decoder's description of what went wrong (bad UTF-8, broken quoting).
    pub message: String,
}

/// Outcome of decoding one row: row-scoped failure or a fatal stream error.
///
/// The aggregator records [`DecodeFailure::Row`] as a failed line and keeps
/// going; [`DecodeFailure::Stream`] terminates the batch.
#[derive(Debug, Error)]
pub enum DecodeFailure {
    #[error(transparent)]
    Row(RowDecodeError),

    #[error(transparent)]
    Stream(IngestError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
