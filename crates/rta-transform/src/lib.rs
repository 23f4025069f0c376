//! Raw-row to canonical-record transformation.
//!
//! The heart of the import pipeline: a fixed registry of pure, per-field
//! normalization functions and the transformer that applies all of them to
//! one [`rta_ingest::RawRow`], assembling a fully-typed
//! [`rta_model::TradeRecord`].
//!
//! # Design principles
//!
//! - **Stateless functions**: every normalizer is `(raw, context) ->
//!   (value, defaulted)`; field interdependencies (suffix derivation) are
//!   explicit arguments, never shared state
//! - **Defaulting, not failing**: unusable input resolves to a documented
//!   default plus a warning; the transformer itself cannot fail
//! - **Deterministic dispatch**: keyword vocabularies are ordered slices,
//!   first declared match wins, regardless of input casing

mod context;
mod normalized;
mod transformer;

pub mod normalization;

pub use context::TransformContext;
pub use normalized::Normalized;
pub use transformer::{TransformedRow, transform_row};
