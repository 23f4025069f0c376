//! Shared CLI infrastructure.
//!
//! The binary lives in `main.rs`; this library half exists so the logging
//! setup (and its redaction switch) can be exercised from tests.

pub mod logging;
