//! Canonical trade record model.
//!
//! This crate defines the fixed schema that the bulk import pipeline
//! normalizes into:
//!
//! - **Domain enums**: risk level, channel type, control method, fund-freeze
//!   flag — small closed vocabularies with canonical string forms
//! - **`TradeRecord`**: the fully-typed canonical record, every field always
//!   populated
//! - **Column registry**: the 28 canonical import columns in fixed template
//!   order
//! - **`TradeId`**: sink-assigned record identity

mod columns;
mod enums;
mod error;
mod ids;
mod record;

pub use columns::{IMPORT_COLUMNS, column_index, is_canonical_column};
pub use enums::{ChannelType, ControlMethod, FundFreezeFlag, RiskLevel};
pub use error::{ModelError, Result};
pub use ids::TradeId;
pub use record::TradeRecord;

pub use columns::names;
