//! Per-field normalization functions.
//!
//! Each function is pure: raw text (plus, for dependent fields, an explicit
//! sibling value or context) in, canonical value plus defaulted flag out.

pub mod datetime;
pub mod identifier;
pub mod keyword;
pub mod numeric;
pub mod text;
