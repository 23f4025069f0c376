//! The record sink boundary.
//!
//! Persistence is an external collaborator: the pipeline hands over one
//! canonical record and gets back an identity or a reason. Each persist is
//! independent — a failure on one row neither rolls back nor blocks any
//! other row.

use std::collections::BTreeSet;

use thiserror::Error;

use rta_model::{TradeId, TradeRecord};

/// Why a sink refused one canonical record. Always row-scoped.
#[derive(Debug, Clone, Error)]
pub enum PersistError {
    /// The record violates a persistence constraint.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// A record with the same unique key already exists.
    #[error("duplicate record: {0}")]
    Duplicate(String),

    /// The sink could not be reached for this record.
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

/// Accepts one canonical record at a time.
///
/// Implementations must treat every call independently; the import runner
/// relies on that to keep going past failures.
pub trait RecordSink {
    fn persist(&mut self, record: &TradeRecord) -> Result<TradeId, PersistError>;
}

/// In-memory sink used by tests and the CLI dry-run path.
///
/// Mimics the relational sink's one real constraint: `desensitizedUid` is
/// unique. Identities are sequential from 1.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<TradeRecord>,
    seen_uids: BTreeSet<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records persisted so far, in arrival order.
    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TradeRecord> {
        self.records
    }
}

impl RecordSink for MemorySink {
    fn persist(&mut self, record: &TradeRecord) -> Result<TradeId, PersistError> {
        if !self.seen_uids.insert(record.desensitized_uid.clone()) {
            return Err(PersistError::Duplicate(format!(
                "desensitizedUid {} already imported",
                record.desensitized_uid
            )));
        }
        self.records.push(record.clone());
        Ok(TradeId::new(self.records.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rta_model::{ChannelType, ControlMethod, FundFreezeFlag, RiskLevel};

    fn record(uid: &str) -> TradeRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        TradeRecord {
            mc_create_trade_ip: "0.0.0.0".to_string(),
            mc_create_trade_time: ts,
            mc_create_trade_channel_type: ChannelType::Virtual,
            mc_create_trade_channel: "unknown".to_string(),
            trade_channel_risk_level: RiskLevel::Low,
            is_fund_freeze_biz: FundFreezeFlag::N,
            extra_account_reg_time: ts,
            extra_account_name: "unknown".to_string(),
            extra_account_certno: "000000000000000000".to_string(),
            extra_account_certno_last_six: "000000".to_string(),
            extra_account_phone: "00000000000".to_string(),
            extra_account_phone_last_four: "0000".to_string(),
            extra_account_phone_reg_time: ts,
            login_device_quantity: 0,
            alipay_user_customer_id: "unknown".to_string(),
            desensitized_uid: uid.to_string(),
            extra_account_risk_level: RiskLevel::Low,
            extra_account_business_level: 1,
            extra_account_business_level_reason: "unknown".to_string(),
            charged_card_number: "unknown".to_string(),
            charged_card_number_risk_level: RiskLevel::Low,
            extra_merchant_id: "unknown".to_string(),
            extra_merchant_risk_level: RiskLevel::Low,
            extra_create_trade_risk_level: RiskLevel::Low,
            extra_create_trade_control_method: ControlMethod::Verify,
            loan_type: "none".to_string(),
            instalments: 0,
            repayment_times: 0,
        }
    }

    #[test]
    fn assigns_sequential_identities() {
        let mut sink = MemorySink::new();
        assert_eq!(sink.persist(&record("a")).unwrap(), TradeId::new(1));
        assert_eq!(sink.persist(&record("b")).unwrap(), TradeId::new(2));
        assert_eq!(sink.records().len(), 2);
    }

    #[test]
    fn rejects_duplicate_uid_without_poisoning_the_sink() {
        let mut sink = MemorySink::new();
        sink.persist(&record("a")).unwrap();
        let err = sink.persist(&record("a")).unwrap_err();
        assert!(matches!(err, PersistError::Duplicate(_)));
        // The sink keeps accepting later rows.
        assert_eq!(sink.persist(&record("b")).unwrap(), TradeId::new(2));
    }
}
