use base64::{prelude::BASE64_STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::{data::datasources::receipt_payload_datasource::parse_receipt, errors::ReceiptError};

use super::purchase_record::PurchaseRecord;

/// A purchase receipt as delivered by the billing channel: the raw JSON
/// payload together with the provider's signature over it.
///
/// The two strings are only ever handed out together, so that whatever is
/// forwarded to a verifier always includes the signature matching the payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseEnvelope {
    #[serde(rename = "receiptData")]
    raw_payload: String,
    signature: String,
}

impl PurchaseEnvelope {
    pub fn new(raw_payload: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            raw_payload: raw_payload.into(),
            signature: signature.into(),
        }
    }

    /// Parses the payload into a purchase record. The signature is NOT
    /// verified; the record should only be trusted once the envelope has been
    /// checked by a verifier.
    pub fn parse(&self) -> Result<PurchaseRecord, ReceiptError> {
        parse_receipt(&self.raw_payload)
    }

    /// Borrowed (payload, signature).
    pub fn parts(&self) -> (&str, &str) {
        (&self.raw_payload, &self.signature)
    }

    /// Consumes the envelope, returning (payload, signature).
    pub fn into_parts(self) -> (String, String) {
        (self.raw_payload, self.signature)
    }

    /// Raw signature bytes, for handing to a verifier. The billing channel
    /// delivers signatures base64-encoded.
    pub fn decode_signature(&self) -> Result<Vec<u8>, ReceiptError> {
        BASE64_STANDARD
            .decode(&self.signature)
            .map_err(ReceiptError::InvalidSignatureEncoding)
    }
}
