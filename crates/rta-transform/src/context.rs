use chrono::NaiveDateTime;

/// Runtime context for one row's transformation.
///
/// Carries the batch-processing time (the deterministic fallback for
/// unparsable timestamps) and the row's 1-based line number (used for
/// generated identifiers). Normalizing the same row twice with the same
/// context yields identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformContext {
    /// Timestamp substituted for empty or unparsable date/time cells.
    pub batch_time: NaiveDateTime,
    /// 1-based data-row number within the import file.
    pub line: u64,
}

impl TransformContext {
    /// Creates a context for the start of a batch.
    pub fn new(batch_time: NaiveDateTime) -> Self {
        Self {
            batch_time,
            line: 0,
        }
    }

    /// Context for a specific row of the same batch.
    #[must_use]
    pub fn for_line(&self, line: u64) -> Self {
        Self {
            batch_time: self.batch_time,
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn for_line_keeps_batch_time() {
        let t = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let ctx = TransformContext::new(t);
        let row_ctx = ctx.for_line(7);
        assert_eq!(row_ctx.batch_time, t);
        assert_eq!(row_ctx.line, 7);
    }
}
