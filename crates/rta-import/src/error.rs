//! Error types for the import pipeline.

use thiserror::Error;

use rta_ingest::IngestError;

use crate::outcome::ImportOutcome;

/// Fatal batch failure.
///
/// Row-scope problems never surface here; they are folded into the
/// [`ImportOutcome`]. Only stream-level decode errors abort the batch, and
/// they carry whatever partial outcome had accumulated by then.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("import aborted: {source}")]
    Aborted {
        #[source]
        source: IngestError,
        /// Outcome accumulated before the fatal point.
        partial: Box<ImportOutcome>,
    },
}

impl ImportError {
    /// The partial outcome accumulated before the abort.
    pub fn partial(&self) -> &ImportOutcome {
        match self {
            ImportError::Aborted { partial, .. } => partial,
        }
    }
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abort_carries_partial_outcome() {
        let mut partial = ImportOutcome::default();
        partial.begin_row();
        let error = ImportError::Aborted {
            source: IngestError::MissingHeader,
            partial: Box::new(partial),
        };
        assert_eq!(error.partial().total, 1);
        assert!(error.to_string().starts_with("import aborted"));
    }
}
