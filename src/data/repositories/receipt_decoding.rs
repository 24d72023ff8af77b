use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    data::models::verify_receipt::{
        in_app_receipt_model::InAppReceiptModel, receipt_model::ReceiptModel,
        response_body_model::ResponseBodyModel,
    },
    domain::entities::{
        decoded_receipt::DecodedReceipt, environment::Environment,
        in_app_purchase_receipt::InAppPurchaseReceipt, receipt_info::ReceiptInfo,
    },
    errors::DecodeError,
};

impl ReceiptInfo {
    /// Decodes a full verifyReceipt response body. `environment` is the
    /// environment that returned it.
    pub(crate) fn from_response(
        json: &Map<String, Value>,
        environment: Environment,
    ) -> Result<Self, DecodeError> {
        let m = ResponseBodyModel::deserialize(json)?;
        let latest_receipt_info = match m.latest_receipt_info {
            Value::Object(info) => Some(DecodedReceipt::from_json(info)?),
            _ => None,
        };
        Ok(ReceiptInfo {
            environment,
            receipt: DecodedReceipt::from_json(m.receipt)?,
            latest_receipt: m.latest_receipt,
            latest_receipt_info,
        })
    }
}

impl DecodedReceipt {
    /// Takes ownership of the object, which is retained on the receipt.
    pub(crate) fn from_json(json: Map<String, Value>) -> Result<Self, DecodeError> {
        let m = ReceiptModel::deserialize(&json)?;
        let creation_date = m.creation_date().ok_or_else(|| {
            DecodeError::MissingFields("receipt_creation_date".to_owned())
        })?;
        let expiration_date = m.expiration_date();
        let in_app_receipts = match json.get("in_app") {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| match entry {
                    Value::Object(entry) => InAppPurchaseReceipt::from_json(entry),
                    _ => Err(DecodeError::MissingFields(
                        "in_app entry is not an object".to_owned(),
                    )),
                })
                .collect::<Result<Vec<_>, _>>()?,
            _ => Vec::new(),
        };
        Ok(DecodedReceipt {
            bundle_id: m.bundle_id,
            application_version: m.application_version,
            original_application_version: m.original_application_version,
            creation_date,
            expiration_date,
            in_app_receipts,
            json,
        })
    }
}

impl InAppPurchaseReceipt {
    pub(crate) fn from_json(json: &Map<String, Value>) -> Result<Self, DecodeError> {
        let m = InAppReceiptModel::deserialize(json)?;
        Ok(InAppPurchaseReceipt {
            quantity: m.quantity,
            subscription_expiration_date: m.subscription_expiration_date(),
            cancellation_date: m.cancellation_date(),
            is_trial_period: m.is_trial_period(),
            product_id: m.product_id,
            transaction_id: m.transaction_id,
            original_transaction_id: m.original_transaction_id,
            purchase_date: m.purchase_date_ms,
            original_purchase_date: m.original_purchase_date_ms,
            app_item_id: m.app_item_id,
            version_external_identifier: m.version_external_identifier,
            web_order_line_item_id: m.web_order_line_item_id,
        })
    }
}
