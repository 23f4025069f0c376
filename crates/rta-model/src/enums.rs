//! Type-safe enumerations for the canonical trade vocabularies.
//!
//! These enums give compile-time safety to concepts the source system stored
//! as free strings. `FromStr` is strict: it accepts only the canonical
//! spelling (case-insensitive). Tolerant matching of operator-authored input
//! lives in the transform crate's keyword tables, not here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Risk classification shared by channels, accounts, merchants, and trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// High risk.
    High,
    /// Medium risk.
    Mid,
    /// Low risk (the defaulting fallback).
    Low,
    /// Related / trusted counterparty.
    Rel,
}

impl RiskLevel {
    /// Canonical lowercase form as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Mid => "mid",
            RiskLevel::Low => "low",
            RiskLevel::Rel => "rel",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(RiskLevel::High),
            "mid" => Ok(RiskLevel::Mid),
            "low" => Ok(RiskLevel::Low),
            "rel" => Ok(RiskLevel::Rel),
            _ => Err(ModelError::InvalidRiskLevel(s.to_string())),
        }
    }
}

/// Goods classification for the trade channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    /// Physical goods.
    Physical,
    /// Virtual goods (the defaulting fallback).
    Virtual,
}

impl ChannelType {
    /// Canonical lowercase form as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Physical => "physical",
            ChannelType::Virtual => "virtual",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "physical" => Ok(ChannelType::Physical),
            "virtual" => Ok(ChannelType::Virtual),
            _ => Err(ModelError::InvalidChannelType(s.to_string())),
        }
    }
}

/// Recommended handling for a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlMethod {
    /// Intercept the trade.
    Block,
    /// Route the trade through verification (the defaulting fallback).
    Verify,
    /// Let the trade through.
    Pass,
}

impl ControlMethod {
    /// Canonical lowercase form as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlMethod::Block => "block",
            ControlMethod::Verify => "verify",
            ControlMethod::Pass => "pass",
        }
    }
}

impl fmt::Display for ControlMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlMethod {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "block" => Ok(ControlMethod::Block),
            "verify" => Ok(ControlMethod::Verify),
            "pass" => Ok(ControlMethod::Pass),
            _ => Err(ModelError::InvalidControlMethod(s.to_string())),
        }
    }
}

/// Whether the trade is a fund-freeze (deposit) business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundFreezeFlag {
    /// Affirmative.
    Y,
    /// Negative (the defaulting fallback).
    N,
}

impl FundFreezeFlag {
    /// Canonical single-letter form as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            FundFreezeFlag::Y => "Y",
            FundFreezeFlag::N => "N",
        }
    }
}

impl fmt::Display for FundFreezeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FundFreezeFlag {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "Y" => Ok(FundFreezeFlag::Y),
            "N" => Ok(FundFreezeFlag::N),
            _ => Err(ModelError::InvalidFundFreezeFlag(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_round_trips_canonical_form() {
        for level in [
            RiskLevel::High,
            RiskLevel::Mid,
            RiskLevel::Low,
            RiskLevel::Rel,
        ] {
            assert_eq!(level.as_str().parse::<RiskLevel>().unwrap(), level);
        }
    }

    #[test]
    fn risk_level_parse_is_case_insensitive() {
        assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert_eq!(" Rel ".parse::<RiskLevel>().unwrap(), RiskLevel::Rel);
    }

    #[test]
    fn risk_level_rejects_loose_spellings() {
        // Tolerant matching belongs to the transform keyword tables.
        assert!("H".parse::<RiskLevel>().is_err());
        assert!("hi-risk".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn fund_freeze_flag_parses_either_case() {
        assert_eq!("y".parse::<FundFreezeFlag>().unwrap(), FundFreezeFlag::Y);
        assert_eq!("N".parse::<FundFreezeFlag>().unwrap(), FundFreezeFlag::N);
    }

    #[test]
    fn enums_serialize_to_canonical_strings() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&ControlMethod::Verify).unwrap(),
            "\"verify\""
        );
        assert_eq!(serde_json::to_string(&FundFreezeFlag::Y).unwrap(), "\"Y\"");
    }
}
