//! The sequential import runner.
//!
//! One logical worker walks the stream in arrival order: pull row, count
//! it, transform, persist, record, repeat. Sequential processing is load-
//! bearing here — line numbers in the report must correlate with the
//! operator's original file, so results are appended strictly in read
//! order.

use std::io::Read;
use std::path::Path;

use chrono::{NaiveDateTime, Utc};
use tracing::{info, warn};

use rta_ingest::{DecodeFailure, RawRow, RowReader};
use rta_transform::{TransformContext, TransformedRow, transform_row};

use crate::cancel::CancelToken;
use crate::error::{ImportError, Result};
use crate::outcome::{ImportOutcome, LineResult};
use crate::sink::RecordSink;

/// Drives decode → transform → persist for one batch at a time.
pub struct ImportRunner<S> {
    sink: S,
    cancel: CancelToken,
    batch_time: Option<NaiveDateTime>,
}

impl<S: RecordSink> ImportRunner<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            cancel: CancelToken::new(),
            batch_time: None,
        }
    }

    /// Installs a cancellation token observed before each new row.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Pins the batch-processing time (the datetime defaulting fallback).
    /// Defaults to the wall clock at `run` time.
    #[must_use]
    pub fn with_batch_time(mut self, batch_time: NaiveDateTime) -> Self {
        self.batch_time = Some(batch_time);
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Imports one CSV byte stream.
    ///
    /// # Errors
    ///
    /// Only stream-level decode failures; per-row problems are folded into
    /// the returned [`ImportOutcome`].
    pub fn run<R: Read>(&mut self, input: R) -> Result<ImportOutcome> {
        let reader = match RowReader::new(input) {
            Ok(reader) => reader,
            Err(error) => {
                return Err(ImportError::Aborted {
                    source: error,
                    partial: Box::new(ImportOutcome::default()),
                });
            }
        };
        self.drive(reader)
    }

    /// Imports a CSV file.
    pub fn run_path(&mut self, path: impl AsRef<Path>) -> Result<ImportOutcome> {
        let reader = match RowReader::from_path(path) {
            Ok(reader) => reader,
            Err(error) => {
                return Err(ImportError::Aborted {
                    source: error,
                    partial: Box::new(ImportOutcome::default()),
                });
            }
        };
        self.drive(reader)
    }

    fn drive<R: Read>(&mut self, reader: RowReader<R>) -> Result<ImportOutcome> {
        let batch_time = self
            .batch_time
            .unwrap_or_else(|| Utc::now().naive_utc());
        let ctx = TransformContext::new(batch_time);
        let mut outcome = ImportOutcome::default();

        info!(batch_time = %batch_time, "import started");

        for decoded in reader {
            if self.cancel.is_cancelled() {
                info!(rows = outcome.total, "import cancelled");
                outcome.cancelled = true;
                break;
            }

            match decoded {
                Ok(raw) => {
                    let line = outcome.begin_row();
                    let TransformedRow { record, warnings } =
                        transform_row(&raw, &ctx.for_line(line));
                    match self.sink.persist(&record) {
                        Ok(id) => outcome.record(line, LineResult::Persisted { id, warnings }),
                        Err(error) => outcome.record(
                            line,
                            LineResult::Failed {
                                row: raw,
                                reason: error.to_string(),
                                warnings,
                            },
                        ),
                    }
                }
                Err(DecodeFailure::Row(error)) => {
                    // The row still counts toward the total; it must not
                    // silently disappear from the report.
                    let line = outcome.begin_row();
                    outcome.record(
                        line,
                        LineResult::Failed {
                            row: RawRow::default(),
                            reason: error.to_string(),
                            warnings: Vec::new(),
                        },
                    );
                }
                Err(DecodeFailure::Stream(error)) => {
                    warn!(rows = outcome.total, error = %error, "import aborted mid-stream");
                    return Err(ImportError::Aborted {
                        source: error,
                        partial: Box::new(outcome),
                    });
                }
            }
        }

        info!(
            total = outcome.total,
            success = outcome.success,
            failed = outcome.failed,
            "import finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::sink::{MemorySink, PersistError};
    use rta_model::{TradeId, TradeRecord};

    fn batch_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn runner() -> ImportRunner<MemorySink> {
        ImportRunner::new(MemorySink::new()).with_batch_time(batch_time())
    }

    #[test]
    fn imports_clean_rows_in_order() {
        let input = "desensitizedUid,tradeChannelRiskLevel\nu1,high\nu2,mid\nu3,low\n";
        let mut runner = runner();
        let outcome = runner.run(input.as_bytes()).unwrap();

        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.success, 3);
        assert_eq!(outcome.failed, 0);
        assert!(!outcome.cancelled);

        let records = runner.sink().records();
        assert_eq!(records[0].desensitized_uid, "u1");
        assert_eq!(records[2].desensitized_uid, "u3");
    }

    #[test]
    fn sink_rejection_fails_only_that_row() {
        // Row 2 repeats row 1's unique uid.
        let input = "desensitizedUid\nu1\nu1\nu3\n";
        let outcome = runner().run(input.as_bytes()).unwrap();

        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.success, 2);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].line, 2);
        assert!(outcome.errors[0].error.contains("duplicate"));
        assert_eq!(outcome.errors[0].data.get("desensitizedUid"), "u1");
    }

    #[test]
    fn undecodable_row_is_counted_and_reported() {
        let mut bytes = b"desensitizedUid\nu1\n".to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFF, b'\n']);
        bytes.extend_from_slice(b"u3\n");

        let outcome = runner().run(bytes.as_slice()).unwrap();
        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.success, 2);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.errors[0].line, 2);
    }

    #[test]
    fn defaulting_warnings_carry_line_numbers() {
        let input = "desensitizedUid,loginDeviceQuantity\nu1,2\nu2,abc\n";
        let outcome = runner().run(input.as_bytes()).unwrap();

        // Both rows warn (most columns are absent), but only row 2 warns
        // about the quantity.
        let row2 = outcome
            .warnings
            .iter()
            .find(|w| w.line == 2)
            .expect("row 2 warnings");
        assert!(
            row2.warnings
                .iter()
                .any(|w| w.starts_with("loginDeviceQuantity"))
        );
        let row1 = outcome.warnings.iter().find(|w| w.line == 1).unwrap();
        assert!(
            !row1
                .warnings
                .iter()
                .any(|w| w.starts_with("loginDeviceQuantity"))
        );
    }

    #[test]
    fn fatal_header_failure_aborts_with_empty_partial() {
        let error = runner().run("".as_bytes()).unwrap_err();
        assert_eq!(error.partial().total, 0);
    }

    #[test]
    fn cancellation_returns_partial_outcome() {
        let token = CancelToken::new();
        token.cancel();
        let mut runner =
            ImportRunner::new(MemorySink::new()).with_cancel_token(token);
        let outcome = runner
            .run("desensitizedUid\nu1\nu2\n".as_bytes())
            .unwrap();
        assert!(outcome.cancelled);
        assert_eq!(outcome.total, 0);
    }

    struct FlakySink {
        inner: MemorySink,
        fail_on: u64,
        calls: u64,
    }

    impl RecordSink for FlakySink {
        fn persist(&mut self, record: &TradeRecord) -> std::result::Result<TradeId, PersistError> {
            self.calls += 1;
            if self.calls == self.fail_on {
                return Err(PersistError::Unavailable("connection reset".to_string()));
            }
            self.inner.persist(record)
        }
    }

    #[test]
    fn transient_sink_outage_does_not_stop_the_batch() {
        let sink = FlakySink {
            inner: MemorySink::new(),
            fail_on: 2,
            calls: 0,
        };
        let mut runner = ImportRunner::new(sink).with_batch_time(batch_time());
        let outcome = runner.run("desensitizedUid\nu1\nu2\nu3\n".as_bytes()).unwrap();

        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.success, 2);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.errors[0].line, 2);
        assert!(outcome.errors[0].error.contains("unavailable"));
    }
}
