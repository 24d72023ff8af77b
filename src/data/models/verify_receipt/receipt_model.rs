use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError};

use super::common::MillisString;

/// Receipt object nested in a verifyReceipt response.
///
/// The service documentation and the observed payloads disagree on several
/// field names, so each date is looked up under every known name and the
/// first parseable one wins. `in_app` is decoded from the retained object
/// entry by entry so that a bad entry fails the receipt.
#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct ReceiptModel {
    pub(crate) bundle_id: String,
    pub(crate) application_version: String,
    pub(crate) original_application_version: String,

    #[serde_as(as = "DefaultOnError<Option<MillisString>>")]
    #[serde(default)]
    pub(crate) receipt_creation_date_ms: Option<DateTime<Utc>>,
    #[serde_as(as = "DefaultOnError<Option<MillisString>>")]
    #[serde(default)]
    pub(crate) receipt_creation_date: Option<DateTime<Utc>>,

    #[serde_as(as = "DefaultOnError<Option<MillisString>>")]
    #[serde(default)]
    pub(crate) expiration_date_ms: Option<DateTime<Utc>>,
    #[serde_as(as = "DefaultOnError<Option<MillisString>>")]
    #[serde(default)]
    pub(crate) receipt_expiration_date: Option<DateTime<Utc>>,
    #[serde_as(as = "DefaultOnError<Option<MillisString>>")]
    #[serde(default)]
    pub(crate) expiration_date: Option<DateTime<Utc>>,
}

impl ReceiptModel {
    pub(crate) fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.receipt_creation_date_ms.or(self.receipt_creation_date)
    }

    pub(crate) fn expiration_date(&self) -> Option<DateTime<Utc>> {
        self.expiration_date_ms
            .or(self.receipt_expiration_date)
            .or(self.expiration_date)
    }
}
