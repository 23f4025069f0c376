//! Best-effort bulk import pipeline.
//!
//! Drives the full row lifecycle — decode, normalize, persist — one row at
//! a time, in file order, isolating per-row failures so a corrupt line
//! never costs the rest of the batch.
//!
//! # Contract
//!
//! - Every data row counts toward `total` exactly once, before any other
//!   processing for that row
//! - Row-scope failures (undecodable row, sink rejection) become `Failed`
//!   line results; the batch continues
//! - Only stream-level decode errors abort, and the partial outcome
//!   accumulated so far travels with the error
//! - Cancellation stops reading new rows; the partial outcome is returned
//!   with the `cancelled` marker set

mod cancel;
mod error;
mod outcome;
mod runner;
mod sink;

pub use cancel::CancelToken;
pub use error::{ImportError, Result};
pub use outcome::{ImportOutcome, LineError, LineResult, LineWarnings};
pub use runner::ImportRunner;
pub use sink::{MemorySink, PersistError, RecordSink};
