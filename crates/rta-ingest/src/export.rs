//! Canonical record export.
//!
//! The inverse of the import direction: already-canonical records mapped
//! straight onto the template columns. No normalization happens here.

use std::io::Write;
use std::path::Path;

use rta_model::{IMPORT_COLUMNS, TradeRecord};

use crate::error::{IngestError, Result};

/// Timestamp rendering used for exported records.
const EXPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes records as a canonical CSV, header first, template column order.
pub fn write_records<'a, W, I>(writer: W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TradeRecord>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(IMPORT_COLUMNS)
        .map_err(IngestError::Write)?;

    for record in records {
        csv_writer
            .write_record(record_cells(record))
            .map_err(IngestError::Write)?;
    }

    csv_writer.flush().map_err(IngestError::StreamRead)?;
    Ok(())
}

/// Writes records to a file, creating or truncating it.
pub fn write_records_to_path<'a, I>(path: impl AsRef<Path>, records: I) -> Result<()>
where
    I: IntoIterator<Item = &'a TradeRecord>,
{
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| IngestError::FileAccess {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_records(file, records)
}

/// One cell per canonical column, in template order.
fn record_cells(record: &TradeRecord) -> Vec<String> {
    vec![
        record.mc_create_trade_ip.clone(),
        record.mc_create_trade_time.format(EXPORT_TIME_FORMAT).to_string(),
        record.mc_create_trade_channel_type.to_string(),
        record.mc_create_trade_channel.clone(),
        record.trade_channel_risk_level.to_string(),
        record.is_fund_freeze_biz.to_string(),
        record.extra_account_reg_time.format(EXPORT_TIME_FORMAT).to_string(),
        record.extra_account_name.clone(),
        record.extra_account_certno.clone(),
        record.extra_account_certno_last_six.clone(),
        record.extra_account_phone.clone(),
        record.extra_account_phone_last_four.clone(),
        record
            .extra_account_phone_reg_time
            .format(EXPORT_TIME_FORMAT)
            .to_string(),
        record.login_device_quantity.to_string(),
        record.alipay_user_customer_id.clone(),
        record.desensitized_uid.clone(),
        record.extra_account_risk_level.to_string(),
        record.extra_account_business_level.to_string(),
        record.extra_account_business_level_reason.clone(),
        record.charged_card_number.clone(),
        record.charged_card_number_risk_level.to_string(),
        record.extra_merchant_id.clone(),
        record.extra_merchant_risk_level.to_string(),
        record.extra_create_trade_risk_level.to_string(),
        record.extra_create_trade_control_method.to_string(),
        record.loan_type.clone(),
        record.instalments.to_string(),
        record.repayment_times.to_string(),
    ]
}
