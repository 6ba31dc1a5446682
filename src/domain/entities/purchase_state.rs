use serde::{Deserialize, Deserializer};
use serde_repr::Serialize_repr;

/// Entitlement state of a purchase, as reported by the billing provider.
///
/// The integer codes are a wire contract with the billing provider and are
/// serialized as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr)]
#[repr(u8)]
pub enum PurchaseState {
    PurchasedSuccessfully = 0,
    Canceled = 1,
    Refunded = 2,
    SubscriptionExpired = 3,
}

impl PurchaseState {
    /// Maps a provider state code to a state.
    ///
    /// Total over all integers: any unrecognized code (negative, out of range,
    /// or introduced by a newer provider version) maps to `Canceled`, so that a
    /// corrupted code never grants an entitlement.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::PurchasedSuccessfully,
            1 => Self::Canceled,
            2 => Self::Refunded,
            3 => Self::SubscriptionExpired,
            _ => {
                tracing::debug!(code, "unrecognized purchase state code, treating as canceled");
                Self::Canceled
            }
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Whether a purchase in this state currently grants access to the
    /// purchased product.
    pub fn grants_entitlement(&self) -> bool {
        matches!(self, Self::PurchasedSuccessfully)
    }
}

impl<'de> Deserialize<'de> for PurchaseState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Self::from_code)
    }
}
