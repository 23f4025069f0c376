//! Per-row record assembly.
//!
//! The registry of normalizers is the statically-typed construction of
//! [`TradeRecord`]: one normalizer call per canonical field, dependent
//! fields fed their sibling's raw cell explicitly. Normalizer fallback is
//! never an error — each substitution becomes one warning naming the field
//! and the substituted value.

use std::fmt;

use rta_ingest::RawRow;
use rta_model::{TradeRecord, names};

use crate::context::TransformContext;
use crate::normalization::{datetime, identifier, keyword, numeric, text};
use crate::normalized::Normalized;

/// One row's transformation result: the canonical record plus a warning per
/// defaulted field.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedRow {
    pub record: TradeRecord,
    pub warnings: Vec<String>,
}

/// Applies every field normalizer to one raw row.
///
/// Infallible by design: unusable input defaults, it does not error.
pub fn transform_row(raw: &RawRow, ctx: &TransformContext) -> TransformedRow {
    let mut warnings = Vec::new();
    let w = &mut warnings;

    let record = TradeRecord {
        mc_create_trade_ip: note(
            names::MC_CREATE_TRADE_IP,
            text::normalize_text(raw.get(names::MC_CREATE_TRADE_IP), 45, "0.0.0.0"),
            w,
        ),
        mc_create_trade_time: note(
            names::MC_CREATE_TRADE_TIME,
            datetime::normalize_datetime(raw.get(names::MC_CREATE_TRADE_TIME), ctx),
            w,
        ),
        mc_create_trade_channel_type: note(
            names::MC_CREATE_TRADE_CHANNEL_TYPE,
            keyword::normalize_channel_type(raw.get(names::MC_CREATE_TRADE_CHANNEL_TYPE)),
            w,
        ),
        mc_create_trade_channel: note(
            names::MC_CREATE_TRADE_CHANNEL,
            text::normalize_text(raw.get(names::MC_CREATE_TRADE_CHANNEL), 50, "unknown"),
            w,
        ),
        trade_channel_risk_level: note(
            names::TRADE_CHANNEL_RISK_LEVEL,
            keyword::normalize_risk_level(raw.get(names::TRADE_CHANNEL_RISK_LEVEL)),
            w,
        ),
        is_fund_freeze_biz: note(
            names::IS_FUND_FREEZE_BIZ,
            keyword::normalize_yes_no(raw.get(names::IS_FUND_FREEZE_BIZ)),
            w,
        ),
        extra_account_reg_time: note(
            names::EXTRA_ACCOUNT_REG_TIME,
            datetime::normalize_datetime(raw.get(names::EXTRA_ACCOUNT_REG_TIME), ctx),
            w,
        ),
        extra_account_name: note(
            names::EXTRA_ACCOUNT_NAME,
            text::normalize_text(raw.get(names::EXTRA_ACCOUNT_NAME), 100, "unknown"),
            w,
        ),
        extra_account_certno: note(
            names::EXTRA_ACCOUNT_CERTNO,
            identifier::normalize_certno(raw.get(names::EXTRA_ACCOUNT_CERTNO)),
            w,
        ),
        // The suffix consumes the sibling's raw cell, not its normalized
        // form: a substituted placeholder must not become the suffix.
        extra_account_certno_last_six: note(
            names::EXTRA_ACCOUNT_CERTNO_LAST_SIX,
            identifier::normalize_suffix(
                raw.get(names::EXTRA_ACCOUNT_CERTNO_LAST_SIX),
                raw.get(names::EXTRA_ACCOUNT_CERTNO),
                6,
                identifier::clean_certno,
            ),
            w,
        ),
        extra_account_phone: note(
            names::EXTRA_ACCOUNT_PHONE,
            identifier::normalize_phone(raw.get(names::EXTRA_ACCOUNT_PHONE)),
            w,
        ),
        extra_account_phone_last_four: note(
            names::EXTRA_ACCOUNT_PHONE_LAST_FOUR,
            identifier::normalize_suffix(
                raw.get(names::EXTRA_ACCOUNT_PHONE_LAST_FOUR),
                raw.get(names::EXTRA_ACCOUNT_PHONE),
                4,
                identifier::clean_phone,
            ),
            w,
        ),
        extra_account_phone_reg_time: note(
            names::EXTRA_ACCOUNT_PHONE_REG_TIME,
            datetime::normalize_datetime(raw.get(names::EXTRA_ACCOUNT_PHONE_REG_TIME), ctx),
            w,
        ),
        login_device_quantity: note(
            names::LOGIN_DEVICE_QUANTITY,
            numeric::normalize_integer(raw.get(names::LOGIN_DEVICE_QUANTITY)),
            w,
        ),
        alipay_user_customer_id: note(
            names::ALIPAY_USER_CUSTOMER_ID,
            text::normalize_text(raw.get(names::ALIPAY_USER_CUSTOMER_ID), 100, "unknown"),
            w,
        ),
        desensitized_uid: note(
            names::DESENSITIZED_UID,
            text::normalize_text(
                raw.get(names::DESENSITIZED_UID),
                100,
                &text::generated_uid(ctx),
            ),
            w,
        ),
        extra_account_risk_level: note(
            names::EXTRA_ACCOUNT_RISK_LEVEL,
            keyword::normalize_risk_level(raw.get(names::EXTRA_ACCOUNT_RISK_LEVEL)),
            w,
        ),
        extra_account_business_level: note(
            names::EXTRA_ACCOUNT_BUSINESS_LEVEL,
            numeric::normalize_business_tier(raw.get(names::EXTRA_ACCOUNT_BUSINESS_LEVEL)),
            w,
        ),
        extra_account_business_level_reason: note(
            names::EXTRA_ACCOUNT_BUSINESS_LEVEL_REASON,
            text::normalize_text(
                raw.get(names::EXTRA_ACCOUNT_BUSINESS_LEVEL_REASON),
                255,
                "unknown",
            ),
            w,
        ),
        charged_card_number: note(
            names::CHARGED_CARD_NUMBER,
            text::normalize_text(raw.get(names::CHARGED_CARD_NUMBER), 100, "unknown"),
            w,
        ),
        charged_card_number_risk_level: note(
            names::CHARGED_CARD_NUMBER_RISK_LEVEL,
            keyword::normalize_risk_level(raw.get(names::CHARGED_CARD_NUMBER_RISK_LEVEL)),
            w,
        ),
        extra_merchant_id: note(
            names::EXTRA_MERCHANT_ID,
            text::normalize_text(raw.get(names::EXTRA_MERCHANT_ID), 100, "unknown"),
            w,
        ),
        extra_merchant_risk_level: note(
            names::EXTRA_MERCHANT_RISK_LEVEL,
            keyword::normalize_risk_level(raw.get(names::EXTRA_MERCHANT_RISK_LEVEL)),
            w,
        ),
        extra_create_trade_risk_level: note(
            names::EXTRA_CREATE_TRADE_RISK_LEVEL,
            keyword::normalize_risk_level(raw.get(names::EXTRA_CREATE_TRADE_RISK_LEVEL)),
            w,
        ),
        extra_create_trade_control_method: note(
            names::EXTRA_CREATE_TRADE_CONTROL_METHOD,
            keyword::normalize_control_method(raw.get(names::EXTRA_CREATE_TRADE_CONTROL_METHOD)),
            w,
        ),
        loan_type: note(
            names::LOAN_TYPE,
            text::normalize_text(raw.get(names::LOAN_TYPE), 50, "none"),
            w,
        ),
        instalments: note(
            names::INSTALMENTS,
            numeric::normalize_integer(raw.get(names::INSTALMENTS)),
            w,
        ),
        repayment_times: note(
            names::REPAYMENT_TIMES,
            numeric::normalize_integer(raw.get(names::REPAYMENT_TIMES)),
            w,
        ),
    };

    if !warnings.is_empty() {
        tracing::debug!(
            line = ctx.line,
            defaulted = warnings.len(),
            "row normalized with substitutions"
        );
    }

    TransformedRow { record, warnings }
}

/// Unwraps a normalization outcome, recording a warning on substitution.
fn note<T: fmt::Display>(column: &str, outcome: Normalized<T>, warnings: &mut Vec<String>) -> T {
    if outcome.defaulted {
        warnings.push(format!("{column} defaulted to {}", outcome.value));
    }
    outcome.value
}
