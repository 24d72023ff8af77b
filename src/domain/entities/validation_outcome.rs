use serde_json::{Map, Value};

use crate::errors::CashierError;

use super::receipt_info::ReceiptInfo;

/// The single result of a validation call.
#[derive(Debug)]
pub enum ValidationOutcome {
    /// The service reported success (or an expired subscription) and the
    /// payload decoded cleanly.
    Decoded(ReceiptInfo),
    /// The service reported success but the payload could not be decoded.
    /// The original response is preserved for inspection.
    RawPayload(Map<String, Value>),
    Failure(CashierError),
}

impl ValidationOutcome {
    pub fn is_decoded(&self) -> bool {
        matches!(self, ValidationOutcome::Decoded(_))
    }

    pub fn receipt_info(&self) -> Option<&ReceiptInfo> {
        match self {
            ValidationOutcome::Decoded(info) => Some(info),
            _ => None,
        }
    }

    pub fn raw_payload(&self) -> Option<&Map<String, Value>> {
        match self {
            ValidationOutcome::RawPayload(json) => Some(json),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CashierError> {
        match self {
            ValidationOutcome::Failure(e) => Some(e),
            _ => None,
        }
    }
}
