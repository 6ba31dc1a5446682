use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst};

/// Data structure of the purchase receipt JSON delivered by Google Play
/// in-app billing alongside the purchase signature.
///
/// https://developer.android.com/google/play/billing/billing_reference
///
/// Every field is lenient: a key that is absent or holds a value of the wrong
/// type decodes to its default rather than failing the whole receipt. Whether
/// the resulting model is acceptable is decided when converting it to a
/// domain record.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ReceiptPayloadModel {
    /// A unique order identifier for the transaction. This identifier
    /// corresponds to the Google payments order ID.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub(crate) order_id: String,
    /// The application package from which the purchase originated.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub(crate) package_name: String,
    /// The item's product identifier.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub(crate) product_id: String,
    /// The time the product was purchased, in milliseconds since the epoch
    /// (Jan 1, 1970). Zero means no time was provided.
    #[serde_as(deserialize_as = "DefaultOnError<PickFirst<(_, DisplayFromStr)>>")]
    pub(crate) purchase_time: i64,
    /// The purchase state of the order. Left unset (rather than zero, which
    /// means purchased) when absent or unreadable. Unlike the purchase time,
    /// numeric strings are not accepted here.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub(crate) purchase_state: Option<i64>,
    /// A developer-specified string that contains supplemental information
    /// about an order.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub(crate) developer_payload: String,
    /// A token that uniquely identifies a purchase for a given item and user
    /// pair.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub(crate) purchase_token: Option<String>,
    /// Indicates whether the subscription renews automatically.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub(crate) auto_renewing: bool,
}
