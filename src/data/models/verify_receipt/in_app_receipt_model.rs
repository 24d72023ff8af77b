use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError, DisplayFromStr};

use super::common::MillisString;

/// One entry of a receipt's `in_app` array.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody/receipt/in_app
#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct InAppReceiptModel {
    /// Sent as a decimal string.
    #[serde_as(as = "DisplayFromStr")]
    pub(crate) quantity: i64,
    pub(crate) product_id: String,
    pub(crate) transaction_id: String,
    pub(crate) original_transaction_id: String,
    #[serde_as(as = "MillisString")]
    pub(crate) purchase_date_ms: DateTime<Utc>,
    #[serde_as(as = "MillisString")]
    pub(crate) original_purchase_date_ms: DateTime<Utc>,

    #[serde_as(as = "DefaultOnError<Option<MillisString>>")]
    #[serde(default)]
    pub(crate) expires_date_ms: Option<DateTime<Utc>>,
    #[serde_as(as = "DefaultOnError<Option<MillisString>>")]
    #[serde(default)]
    pub(crate) receipt_expires_date: Option<DateTime<Utc>>,
    #[serde_as(as = "DefaultOnError<Option<MillisString>>")]
    #[serde(default)]
    pub(crate) expires_date: Option<DateTime<Utc>>,

    #[serde_as(as = "DefaultOnError<Option<MillisString>>")]
    #[serde(default)]
    pub(crate) cancellation_date_ms: Option<DateTime<Utc>>,
    #[serde_as(as = "DefaultOnError<Option<MillisString>>")]
    #[serde(default)]
    pub(crate) receipt_cancellation_date: Option<DateTime<Utc>>,
    #[serde_as(as = "DefaultOnError<Option<MillisString>>")]
    #[serde(default)]
    pub(crate) cancellation_date: Option<DateTime<Utc>>,

    /// Not documented by Apple. Sent as the string "true" or "false".
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub(crate) is_trial_period: Option<String>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub(crate) app_item_id: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub(crate) version_external_identifier: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub(crate) web_order_line_item_id: Option<String>,
}

impl InAppReceiptModel {
    pub(crate) fn subscription_expiration_date(&self) -> Option<DateTime<Utc>> {
        self.expires_date_ms
            .or(self.receipt_expires_date)
            .or(self.expires_date)
    }

    pub(crate) fn cancellation_date(&self) -> Option<DateTime<Utc>> {
        self.cancellation_date_ms
            .or(self.receipt_cancellation_date)
            .or(self.cancellation_date)
    }

    pub(crate) fn is_trial_period(&self) -> bool {
        self.is_trial_period.as_deref() == Some("true")
    }
}
