use thiserror::Error;

/// Failure modes when opening a purchase receipt or reading its signature.
///
/// None of these are fatal: the purchase should simply be treated as
/// unverifiable, and the caller decides whether to discard it or request
/// re-delivery from the billing channel.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The raw payload is not a well-formed JSON object.
    #[error("receipt payload is malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    /// A field without a sensible default is absent or has the wrong type.
    #[error("receipt payload is missing required field '{0}'")]
    MissingRequiredField(&'static str),

    /// The envelope's signature is not valid base64.
    #[error("receipt signature is not valid base64: {0}")]
    InvalidSignatureEncoding(#[source] base64::DecodeError),
}
