//! The canonical, fully-typed trade record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::{ChannelType, ControlMethod, FundFreezeFlag, RiskLevel};

/// One fully normalized trade/account row, ready for persistence.
///
/// Invariant: every field is populated. The transform layer never leaves a
/// field empty — absent or unparsable input resolves to a documented
/// default, and that substitution is reported as a warning upstream.
///
/// Serde names match the canonical import/export column identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Merchant-side public IP that created the order.
    #[serde(rename = "mc_create_trade_ip")]
    pub mc_create_trade_ip: String,

    /// Trade creation time.
    #[serde(rename = "mcCreateTradeTime")]
    pub mc_create_trade_time: NaiveDateTime,

    /// Physical/virtual goods classification.
    #[serde(rename = "mcCreateTradeChannelType")]
    pub mc_create_trade_channel_type: ChannelType,

    /// Channel or content of the traded goods.
    #[serde(rename = "mcCreateTradeChannel")]
    pub mc_create_trade_channel: String,

    /// Risk level of the trade channel.
    #[serde(rename = "tradeChannelRiskLevel")]
    pub trade_channel_risk_level: RiskLevel,

    /// Whether this is a fund-freeze (deposit) business.
    #[serde(rename = "isFundFreezeBiz")]
    pub is_fund_freeze_biz: FundFreezeFlag,

    /// External account registration time.
    #[serde(rename = "extraAccountRegTime")]
    pub extra_account_reg_time: NaiveDateTime,

    /// External account holder name (may be partially masked at source).
    #[serde(rename = "extraAccountName")]
    pub extra_account_name: String,

    /// External account certificate number, digits plus check character X.
    #[serde(rename = "extraAccountCertno")]
    pub extra_account_certno: String,

    /// Last six characters of the certificate number, zero-padded.
    #[serde(rename = "extraAccountCertnoLastSix")]
    pub extra_account_certno_last_six: String,

    /// External account phone number, digits only.
    #[serde(rename = "extraAccountPhone")]
    pub extra_account_phone: String,

    /// Last four digits of the phone number, zero-padded.
    #[serde(rename = "extraAccountPhoneLastFour")]
    pub extra_account_phone_last_four: String,

    /// Time the phone number was bound to the account.
    #[serde(rename = "extraAccountPhoneRegTime")]
    pub extra_account_phone_reg_time: NaiveDateTime,

    /// Devices the account logged in from over the last 30 days.
    #[serde(rename = "loginDeviceQuantity")]
    pub login_device_quantity: i64,

    /// Linked buyer id on the payment platform.
    #[serde(rename = "alipayUserCustomerId")]
    pub alipay_user_customer_id: String,

    /// Desensitized unique external account id.
    #[serde(rename = "desensitizedUid")]
    pub desensitized_uid: String,

    /// Risk level of the external account.
    #[serde(rename = "extraAccountRiskLevel")]
    pub extra_account_risk_level: RiskLevel,

    /// Business tier of the external account, 1 through 3.
    #[serde(rename = "extraAccountBusinessLevel")]
    pub extra_account_business_level: u8,

    /// Stated reason for the business tier.
    #[serde(rename = "extraAccountBusinessLevelReason")]
    pub extra_account_business_level_reason: String,

    /// Recharged external account id.
    #[serde(rename = "chargedCardNumber")]
    pub charged_card_number: String,

    /// Risk level of the recharged account.
    #[serde(rename = "chargedCardNumberRiskLevel")]
    pub charged_card_number_risk_level: RiskLevel,

    /// Receiving external merchant id.
    #[serde(rename = "extraMerchantId")]
    pub extra_merchant_id: String,

    /// Risk level of the external merchant.
    #[serde(rename = "extraMerchantRiskLevel")]
    pub extra_merchant_risk_level: RiskLevel,

    /// Overall risk level of the trade.
    #[serde(rename = "extraCreateTradeRiskLevel")]
    pub extra_create_trade_risk_level: RiskLevel,

    /// Recommended control method for the trade.
    #[serde(rename = "extraCreateTradeControlMethod")]
    pub extra_create_trade_control_method: ControlMethod,

    /// Loan type, `"none"` when not a loan.
    #[serde(rename = "loanType")]
    pub loan_type: String,

    /// Number of instalments, 0 when not applicable.
    #[serde(rename = "instalments")]
    pub instalments: i64,

    /// Instalments already repaid, 0 when not applicable.
    #[serde(rename = "repaymentTimes")]
    pub repayment_times: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_record() -> TradeRecord {
        TradeRecord {
            mc_create_trade_ip: "203.0.113.7".to_string(),
            mc_create_trade_time: NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            mc_create_trade_channel_type: ChannelType::Virtual,
            mc_create_trade_channel: "game-topup".to_string(),
            trade_channel_risk_level: RiskLevel::Mid,
            is_fund_freeze_biz: FundFreezeFlag::N,
            extra_account_reg_time: NaiveDate::from_ymd_opt(2020, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            extra_account_name: "W*ng".to_string(),
            extra_account_certno: "110101199001011234".to_string(),
            extra_account_certno_last_six: "011234".to_string(),
            extra_account_phone: "13800138000".to_string(),
            extra_account_phone_last_four: "8000".to_string(),
            extra_account_phone_reg_time: NaiveDate::from_ymd_opt(2020, 1, 2)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
            login_device_quantity: 2,
            alipay_user_customer_id: "2088001234".to_string(),
            desensitized_uid: "uid-7f3a".to_string(),
            extra_account_risk_level: RiskLevel::Low,
            extra_account_business_level: 2,
            extra_account_business_level_reason: "steady volume".to_string(),
            charged_card_number: "acct-991".to_string(),
            charged_card_number_risk_level: RiskLevel::Low,
            extra_merchant_id: "m-1001".to_string(),
            extra_merchant_risk_level: RiskLevel::Low,
            extra_create_trade_risk_level: RiskLevel::Mid,
            extra_create_trade_control_method: ControlMethod::Verify,
            loan_type: "none".to_string(),
            instalments: 0,
            repayment_times: 0,
        }
    }

    #[test]
    fn serializes_with_canonical_column_names() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["mcCreateTradeTime"], "2024-03-15T10:00:00");
        assert_eq!(json["tradeChannelRiskLevel"], "mid");
        assert_eq!(json["isFundFreezeBiz"], "N");
        assert_eq!(json["mc_create_trade_ip"], "203.0.113.7");
    }

    #[test]
    fn json_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: TradeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
