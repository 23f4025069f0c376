//! Batch outcome accumulation.

use serde::Serialize;

use rta_ingest::RawRow;
use rta_model::TradeId;

/// One row's final disposition.
#[derive(Debug, Clone, PartialEq)]
pub enum LineResult {
    /// The canonical record was persisted under `id`.
    Persisted {
        id: TradeId,
        warnings: Vec<String>,
    },
    /// The row could not be decoded, or the sink refused the record.
    Failed {
        row: RawRow,
        reason: String,
        warnings: Vec<String>,
    },
}

/// Defaulting warnings for one line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineWarnings {
    pub line: u64,
    pub warnings: Vec<String>,
}

/// One failed line: number, offending raw row, and the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineError {
    pub line: u64,
    pub data: RawRow,
    pub error: String,
}

/// Aggregate result of one import batch.
///
/// Owned by the runner for the duration of the batch and appended to
/// exactly once per row; entries stay in read order by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportOutcome {
    /// Data rows seen, including failed ones.
    pub total: u64,
    /// Rows persisted.
    pub success: u64,
    /// Rows that failed to decode or persist.
    pub failed: u64,
    /// Per-line defaulting warnings, ordered by line.
    pub warnings: Vec<LineWarnings>,
    /// Per-line failures, ordered by line.
    pub errors: Vec<LineError>,
    /// True when the batch stopped early on caller request.
    pub cancelled: bool,
}

impl ImportOutcome {
    /// Counts a new data row and returns its 1-based line number.
    ///
    /// Called before any other processing for the row, so even a row that
    /// fails later is already part of `total`.
    pub fn begin_row(&mut self) -> u64 {
        self.total += 1;
        self.total
    }

    /// Records the final disposition of the row begun as `line`.
    pub fn record(&mut self, line: u64, result: LineResult) {
        let warnings = match result {
            LineResult::Persisted { id, warnings } => {
                self.success += 1;
                tracing::debug!(line, id = %id, "row persisted");
                warnings
            }
            LineResult::Failed {
                row,
                reason,
                warnings,
            } => {
                self.failed += 1;
                tracing::debug!(line, reason = %reason, "row failed");
                self.errors.push(LineError {
                    line,
                    data: row,
                    error: reason,
                });
                warnings
            }
        };

        if !warnings.is_empty() {
            self.warnings.push(LineWarnings { line, warnings });
        }
    }
}
