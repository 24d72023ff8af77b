use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::in_app_purchase_receipt::InAppPurchaseReceipt;

/// Typed view of a receipt object returned by the validation service. The
/// original JSON object is retained so fields not surfaced here can still be
/// read.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody/receipt
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedReceipt {
    /// The app's bundle identifier (CFBundleIdentifier).
    pub bundle_id: String,
    /// The app's version number (CFBundleVersion on iOS).
    pub application_version: String,
    /// The version of the app that was originally purchased. Always "1.0" in
    /// the sandbox.
    pub original_application_version: String,
    pub creation_date: DateTime<Utc>,
    /// Only present for apps purchased through the Volume Purchase Program.
    pub expiration_date: Option<DateTime<Utc>>,
    /// In the order the service returned them.
    pub in_app_receipts: Vec<InAppPurchaseReceipt>,

    pub(crate) json: Map<String, Value>,
}

impl DecodedReceipt {
    pub fn json(&self) -> &Map<String, Value> {
        &self.json
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.json.get(name)
    }
}
