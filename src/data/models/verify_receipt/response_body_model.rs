use serde::Deserialize;
use serde_json::{Map, Value};
use serde_with::{serde_as, DefaultOnError};

/// Body returned by the verifyReceipt endpoint for status 0 or 21006.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody
#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseBodyModel {
    /// The decoded receipt. Kept as a raw object so it can be retained on the
    /// decoded entity.
    pub(crate) receipt: Map<String, Value>,
    /// The latest base64-encoded app receipt. Only returned for receipts that
    /// contain auto-renewable subscriptions.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub(crate) latest_receipt: Option<String>,
    /// Only decoded when it is an object; anything else is ignored.
    #[serde(default)]
    pub(crate) latest_receipt_info: Value,
}

/// Reads the integer `status` field every response carries.
pub(crate) fn read_status(json: &Map<String, Value>) -> Option<i64> {
    json.get("status").and_then(Value::as_i64)
}
