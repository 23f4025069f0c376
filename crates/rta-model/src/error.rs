//! Error types for the canonical record model.

use thiserror::Error;

/// Errors that can occur when constructing model values from strings.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Value is not a member of the risk-level vocabulary.
    #[error("unknown risk level: {0}")]
    InvalidRiskLevel(String),

    /// Value is not a member of the channel-type vocabulary.
    #[error("unknown channel type: {0}")]
    InvalidChannelType(String),

    /// Value is not a member of the control-method vocabulary.
    #[error("unknown control method: {0}")]
    InvalidControlMethod(String),

    /// Value is not Y or N.
    #[error("unknown fund-freeze flag: {0}")]
    InvalidFundFreezeFlag(String),

    /// Column name is not part of the canonical registry.
    #[error("unknown canonical column: {0}")]
    UnknownColumn(String),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
