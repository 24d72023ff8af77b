use chrono::{DateTime, Utc};

/// Receipt for a single in-app purchase. Depending on the type of purchase,
/// some of the fields are `None`.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody/receipt/in_app
#[derive(Debug, Clone, PartialEq)]
pub struct InAppPurchaseReceipt {
    /// The number of consumable products purchased.
    pub quantity: i64,
    /// The product identifier of the item that was purchased.
    pub product_id: String,
    /// The transaction identifier of the item that was purchased.
    pub transaction_id: String,
    /// For a restored or renewed transaction, the identifier of the original
    /// transaction. Otherwise identical to `transaction_id`.
    pub original_transaction_id: String,
    pub purchase_date: DateTime<Utc>,
    /// For an auto-renewable subscription, the beginning of the subscription
    /// period, even if it has been renewed since.
    pub original_purchase_date: DateTime<Utc>,
    /// Only present for auto-renewable subscription receipts.
    pub subscription_expiration_date: Option<DateTime<Utc>>,
    /// Set when the transaction was canceled by customer support. Treat a
    /// canceled receipt as if no purchase had ever been made.
    pub cancellation_date: Option<DateTime<Utc>>,
    /// True only when the service sent the string "true".
    pub is_trial_period: bool,
    /// Not present for receipts created in the sandbox.
    pub app_item_id: Option<String>,
    /// Not present for receipts created in the sandbox.
    pub version_external_identifier: Option<String>,
    /// Primary key for identifying subscription purchases.
    pub web_order_line_item_id: Option<String>,
}
