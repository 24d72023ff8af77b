use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::{decoded_receipt::DecodedReceipt, environment::Environment};

/// Result of a successful validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptInfo {
    /// The environment that returned the successful status, which differs from
    /// the requested one if the validation was retried.
    pub environment: Environment,
    pub receipt: DecodedReceipt,
    /// Base64 receipt for the most recent renewal. Only returned for
    /// auto-renewable subscriptions.
    pub latest_receipt: Option<String>,
    /// Decoded receipt for the most recent renewal. Only returned for
    /// auto-renewable subscriptions.
    pub latest_receipt_info: Option<DecodedReceipt>,
}

impl ReceiptInfo {
    pub fn latest_receipt_bytes(&self) -> Option<Vec<u8>> {
        self.latest_receipt
            .as_ref()
            .and_then(|encoded| STANDARD.decode(encoded).ok())
    }
}
