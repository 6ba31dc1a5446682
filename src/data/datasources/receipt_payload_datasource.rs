use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{
    data::models::play_billing::receipt_payload_model::ReceiptPayloadModel,
    domain::entities::{purchase_record::PurchaseRecord, purchase_state::PurchaseState},
    errors::ReceiptError,
};

/// Parses a raw purchase receipt into a normalized record.
///
/// Pure and deterministic. Optional fields fall back to defaults; only a
/// malformed payload or a missing purchase token fails the parse.
pub fn parse_receipt(raw_payload: &str) -> Result<PurchaseRecord, ReceiptError> {
    let m = decode_receipt_payload(raw_payload).inspect_err(|e| {
        tracing::warn!(error = %e, "failed to parse purchase receipt");
    })?;
    let record = PurchaseRecord::from_receipt_payload_model(m).inspect_err(|e| {
        tracing::warn!(error = %e, "purchase receipt rejected");
    })?;
    tracing::debug!(
        product_id = %record.product_id,
        purchase_state = ?record.purchase_state,
        "parsed purchase receipt"
    );
    Ok(record)
}

/// Decodes the payload, which must be a JSON object. Any other JSON value
/// (array, string, ...) is rejected as malformed.
fn decode_receipt_payload(raw_payload: &str) -> Result<ReceiptPayloadModel, ReceiptError> {
    let object: Map<String, Value> =
        serde_json::from_str(raw_payload).map_err(ReceiptError::Malformed)?;
    serde_json::from_value(Value::Object(object)).map_err(ReceiptError::Malformed)
}

impl PurchaseRecord {
    fn from_receipt_payload_model(m: ReceiptPayloadModel) -> Result<Self, ReceiptError> {
        let purchase_token = m
            .purchase_token
            .ok_or(ReceiptError::MissingRequiredField("purchaseToken"))?;
        Ok(PurchaseRecord {
            order_id: m.order_id,
            package_name: m.package_name,
            product_id: m.product_id,
            purchase_time: purchase_time_from_millis(m.purchase_time),
            purchase_state: PurchaseState::from_code(m.purchase_state.unwrap_or(1)),
            developer_payload: m.developer_payload,
            purchase_token,
            auto_renewing: m.auto_renewing,
        })
    }
}

/// Zero means the receipt carried no purchase time; the provider never
/// reports a genuine epoch-zero purchase.
fn purchase_time_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    if millis == 0 {
        return None;
    }
    let time = DateTime::from_timestamp_millis(millis);
    if time.is_none() {
        tracing::debug!(millis, "purchase time out of range, ignoring");
    }
    time
}
