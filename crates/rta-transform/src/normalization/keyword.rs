//! Ordered keyword-table dispatch for the closed vocabularies.
//!
//! Each table is an explicit slice of `(keyword, canonical value)` pairs
//! iterated in declaration order: the first entry whose key is a substring
//! of the trimmed, lowercased input wins. Full words and native-language
//! terms are declared before single-letter abbreviations and numeric codes
//! so the tie-break stays predictable.

use rta_model::{ChannelType, ControlMethod, FundFreezeFlag, RiskLevel};

use crate::normalized::Normalized;

/// Risk-level vocabulary. Numeric codes follow the legacy export encoding
/// (1=high .. 4=rel).
const RISK_LEVEL_KEYWORDS: &[(&str, RiskLevel)] = &[
    ("high", RiskLevel::High),
    ("mid", RiskLevel::Mid),
    ("medium", RiskLevel::Mid),
    ("low", RiskLevel::Low),
    ("rel", RiskLevel::Rel),
    ("related", RiskLevel::Rel),
    ("trust", RiskLevel::Rel),
    ("高", RiskLevel::High),
    ("中", RiskLevel::Mid),
    ("低", RiskLevel::Low),
    ("相关", RiskLevel::Rel),
    ("h", RiskLevel::High),
    ("m", RiskLevel::Mid),
    ("l", RiskLevel::Low),
    ("r", RiskLevel::Rel),
    ("1", RiskLevel::High),
    ("2", RiskLevel::Mid),
    ("3", RiskLevel::Low),
    ("4", RiskLevel::Rel),
];

/// Keywords identifying physical goods, native spellings included.
const PHYSICAL_KEYWORDS: &[(&str, ChannelType)] = &[
    ("physical", ChannelType::Physical),
    ("实物", ChannelType::Physical),
    ("实体", ChannelType::Physical),
    ("shiwu", ChannelType::Physical),
    ("phys", ChannelType::Physical),
    ("goods", ChannelType::Physical),
];

/// Keywords identifying virtual goods. A match here is a legitimate
/// classification, not a defaulting fallback.
const VIRTUAL_KEYWORDS: &[(&str, ChannelType)] = &[
    ("virtual", ChannelType::Virtual),
    ("虚拟", ChannelType::Virtual),
    ("xuni", ChannelType::Virtual),
    ("virt", ChannelType::Virtual),
];

const AFFIRMATIVE_KEYWORDS: &[(&str, FundFreezeFlag)] = &[
    ("yes", FundFreezeFlag::Y),
    ("true", FundFreezeFlag::Y),
    ("是", FundFreezeFlag::Y),
    ("有", FundFreezeFlag::Y),
    ("y", FundFreezeFlag::Y),
    ("1", FundFreezeFlag::Y),
];

const NEGATIVE_KEYWORDS: &[(&str, FundFreezeFlag)] = &[
    ("no", FundFreezeFlag::N),
    ("false", FundFreezeFlag::N),
    ("否", FundFreezeFlag::N),
    ("无", FundFreezeFlag::N),
    ("n", FundFreezeFlag::N),
    ("0", FundFreezeFlag::N),
];

/// Block-family keywords, checked before the pass family.
const BLOCK_KEYWORDS: &[(&str, ControlMethod)] = &[
    ("block", ControlMethod::Block),
    ("拦截", ControlMethod::Block),
    ("intercept", ControlMethod::Block),
    ("reject", ControlMethod::Block),
    ("deny", ControlMethod::Block),
];

const PASS_KEYWORDS: &[(&str, ControlMethod)] = &[
    ("pass", ControlMethod::Pass),
    ("放行", ControlMethod::Pass),
    ("allow", ControlMethod::Pass),
    ("permit", ControlMethod::Pass),
    ("release", ControlMethod::Pass),
];

const VERIFY_KEYWORDS: &[(&str, ControlMethod)] = &[
    ("verif", ControlMethod::Verify),
    ("校验", ControlMethod::Verify),
    ("check", ControlMethod::Verify),
    ("review", ControlMethod::Verify),
];

/// First table entry whose key is a substring of the normalized input.
fn match_keyword<T: Copy>(table: &[(&str, T)], raw: &str) -> Option<T> {
    let needle = raw.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    table
        .iter()
        .find(|(key, _)| needle.contains(key))
        .map(|(_, value)| *value)
}

/// Risk level: first match in declaration order, default Low.
pub fn normalize_risk_level(raw: &str) -> Normalized<RiskLevel> {
    match match_keyword(RISK_LEVEL_KEYWORDS, raw) {
        Some(level) => Normalized::matched(level),
        None => Normalized::defaulted(RiskLevel::Low),
    }
}

/// Channel type: physical on a physical-family match, virtual otherwise.
/// Only unmatched (or empty) input counts as defaulted.
pub fn normalize_channel_type(raw: &str) -> Normalized<ChannelType> {
    if let Some(channel) = match_keyword(PHYSICAL_KEYWORDS, raw) {
        return Normalized::matched(channel);
    }
    if let Some(channel) = match_keyword(VIRTUAL_KEYWORDS, raw) {
        return Normalized::matched(channel);
    }
    Normalized::defaulted(ChannelType::Virtual)
}

/// Yes/no flag: affirmative vocabulary first, then negative; unmatched
/// input defaults to N.
pub fn normalize_yes_no(raw: &str) -> Normalized<FundFreezeFlag> {
    if let Some(flag) = match_keyword(AFFIRMATIVE_KEYWORDS, raw) {
        return Normalized::matched(flag);
    }
    if let Some(flag) = match_keyword(NEGATIVE_KEYWORDS, raw) {
        return Normalized::matched(flag);
    }
    Normalized::defaulted(FundFreezeFlag::N)
}

/// Control method: block family, then pass family, then verify family;
/// everything else defaults to verify.
pub fn normalize_control_method(raw: &str) -> Normalized<ControlMethod> {
    if let Some(method) = match_keyword(BLOCK_KEYWORDS, raw) {
        return Normalized::matched(method);
    }
    if let Some(method) = match_keyword(PASS_KEYWORDS, raw) {
        return Normalized::matched(method);
    }
    if let Some(method) = match_keyword(VERIFY_KEYWORDS, raw) {
        return Normalized::matched(method);
    }
    Normalized::defaulted(ControlMethod::Verify)
}
