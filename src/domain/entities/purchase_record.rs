use chrono::{serde::ts_milliseconds_option, DateTime, Utc};
use serde::Serialize;

use super::purchase_state::PurchaseState;

/// Normalized contents of a purchase receipt.
///
/// Optional string fields that were absent from the receipt are empty strings.
/// A record always carries a purchase token; receipts without one are rejected
/// during parsing.
///
/// Records are only produced by parsing a receipt; serialization emits the
/// receipt key layout, so a serialized record parses back to an equal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub(crate) order_id: String,
    pub(crate) package_name: String,
    pub(crate) product_id: String,
    #[serde(with = "ts_milliseconds_option")]
    pub(crate) purchase_time: Option<DateTime<Utc>>,
    pub(crate) purchase_state: PurchaseState,
    pub(crate) developer_payload: String,
    pub(crate) purchase_token: String,
    pub(crate) auto_renewing: bool,
}

impl PurchaseRecord {
    /// Order ID assigned by the billing provider. Empty if not present.
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Package name of the application the product was sold in.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Product SKU.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Time of purchase, or `None` if the receipt did not carry one.
    pub fn purchase_time(&self) -> Option<DateTime<Utc>> {
        self.purchase_time
    }

    pub fn purchase_state(&self) -> PurchaseState {
        self.purchase_state
    }

    /// Developer-specified string attached when the purchase was initiated.
    pub fn developer_payload(&self) -> &str {
        &self.developer_payload
    }

    /// Token identifying this purchase with the billing provider. Server-side
    /// verification is keyed on this value.
    pub fn purchase_token(&self) -> &str {
        &self.purchase_token
    }

    pub fn auto_renewing(&self) -> bool {
        self.auto_renewing
    }
}
