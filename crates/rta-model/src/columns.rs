//! The canonical import column registry.
//!
//! Column identifiers are the exact header tokens of the import template.
//! The mixed naming (one snake_case column among camelCase) is inherited
//! from the source system and must not be "fixed": operator files already
//! exist with these headers.

/// Canonical column names, one constant per field.
pub mod names {
    pub const MC_CREATE_TRADE_IP: &str = "mc_create_trade_ip";
    pub const MC_CREATE_TRADE_TIME: &str = "mcCreateTradeTime";
    pub const MC_CREATE_TRADE_CHANNEL_TYPE: &str = "mcCreateTradeChannelType";
    pub const MC_CREATE_TRADE_CHANNEL: &str = "mcCreateTradeChannel";
    pub const TRADE_CHANNEL_RISK_LEVEL: &str = "tradeChannelRiskLevel";
    pub const IS_FUND_FREEZE_BIZ: &str = "isFundFreezeBiz";
    pub const EXTRA_ACCOUNT_REG_TIME: &str = "extraAccountRegTime";
    pub const EXTRA_ACCOUNT_NAME: &str = "extraAccountName";
    pub const EXTRA_ACCOUNT_CERTNO: &str = "extraAccountCertno";
    pub const EXTRA_ACCOUNT_CERTNO_LAST_SIX: &str = "extraAccountCertnoLastSix";
    pub const EXTRA_ACCOUNT_PHONE: &str = "extraAccountPhone";
    pub const EXTRA_ACCOUNT_PHONE_LAST_FOUR: &str = "extraAccountPhoneLastFour";
    pub const EXTRA_ACCOUNT_PHONE_REG_TIME: &str = "extraAccountPhoneRegTime";
    pub const LOGIN_DEVICE_QUANTITY: &str = "loginDeviceQuantity";
    pub const ALIPAY_USER_CUSTOMER_ID: &str = "alipayUserCustomerId";
    pub const DESENSITIZED_UID: &str = "desensitizedUid";
    pub const EXTRA_ACCOUNT_RISK_LEVEL: &str = "extraAccountRiskLevel";
    pub const EXTRA_ACCOUNT_BUSINESS_LEVEL: &str = "extraAccountBusinessLevel";
    pub const EXTRA_ACCOUNT_BUSINESS_LEVEL_REASON: &str = "extraAccountBusinessLevelReason";
    pub const CHARGED_CARD_NUMBER: &str = "chargedCardNumber";
    pub const CHARGED_CARD_NUMBER_RISK_LEVEL: &str = "chargedCardNumberRiskLevel";
    pub const EXTRA_MERCHANT_ID: &str = "extraMerchantId";
    pub const EXTRA_MERCHANT_RISK_LEVEL: &str = "extraMerchantRiskLevel";
    pub const EXTRA_CREATE_TRADE_RISK_LEVEL: &str = "extraCreateTradeRiskLevel";
    pub const EXTRA_CREATE_TRADE_CONTROL_METHOD: &str = "extraCreateTradeControlMethod";
    pub const LOAN_TYPE: &str = "loanType";
    pub const INSTALMENTS: &str = "instalments";
    pub const REPAYMENT_TIMES: &str = "repaymentTimes";
}

/// All canonical import columns in fixed template order.
///
/// This order is the template order and the canonical export order; the row
/// decoder keys raw rows by whatever header the file declares, so column
/// order in uploaded files is free.
pub const IMPORT_COLUMNS: [&str; 28] = [
    names::MC_CREATE_TRADE_IP,
    names::MC_CREATE_TRADE_TIME,
    names::MC_CREATE_TRADE_CHANNEL_TYPE,
    names::MC_CREATE_TRADE_CHANNEL,
    names::TRADE_CHANNEL_RISK_LEVEL,
    names::IS_FUND_FREEZE_BIZ,
    names::EXTRA_ACCOUNT_REG_TIME,
    names::EXTRA_ACCOUNT_NAME,
    names::EXTRA_ACCOUNT_CERTNO,
    names::EXTRA_ACCOUNT_CERTNO_LAST_SIX,
    names::EXTRA_ACCOUNT_PHONE,
    names::EXTRA_ACCOUNT_PHONE_LAST_FOUR,
    names::EXTRA_ACCOUNT_PHONE_REG_TIME,
    names::LOGIN_DEVICE_QUANTITY,
    names::ALIPAY_USER_CUSTOMER_ID,
    names::DESENSITIZED_UID,
    names::EXTRA_ACCOUNT_RISK_LEVEL,
    names::EXTRA_ACCOUNT_BUSINESS_LEVEL,
    names::EXTRA_ACCOUNT_BUSINESS_LEVEL_REASON,
    names::CHARGED_CARD_NUMBER,
    names::CHARGED_CARD_NUMBER_RISK_LEVEL,
    names::EXTRA_MERCHANT_ID,
    names::EXTRA_MERCHANT_RISK_LEVEL,
    names::EXTRA_CREATE_TRADE_RISK_LEVEL,
    names::EXTRA_CREATE_TRADE_CONTROL_METHOD,
    names::LOAN_TYPE,
    names::INSTALMENTS,
    names::REPAYMENT_TIMES,
];

/// Returns true if `name` is one of the canonical import columns.
pub fn is_canonical_column(name: &str) -> bool {
    IMPORT_COLUMNS.contains(&name)
}

/// Position of a canonical column in template order.
pub fn column_index(name: &str) -> Option<usize> {
    IMPORT_COLUMNS.iter().position(|c| *c == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_no_duplicates() {
        for (i, name) in IMPORT_COLUMNS.iter().enumerate() {
            assert_eq!(column_index(name), Some(i), "duplicate column {name}");
        }
    }

    #[test]
    fn registry_membership() {
        assert!(is_canonical_column("mcCreateTradeTime"));
        assert!(is_canonical_column("mc_create_trade_ip"));
        assert!(!is_canonical_column("mccreatetradetime"));
        assert!(!is_canonical_column(""));
    }

    #[test]
    fn template_order_starts_and_ends_as_published() {
        assert_eq!(IMPORT_COLUMNS[0], "mc_create_trade_ip");
        assert_eq!(IMPORT_COLUMNS[27], "repaymentTimes");
        assert_eq!(IMPORT_COLUMNS.len(), 28);
    }
}
