use thiserror::Error;

/// Terminal failure of a receipt validation call.
#[derive(Debug, Error)]
pub enum CashierError {
    /// The request body could not be prepared. Never retried.
    #[error("failed to prepare the validation request: {0}")]
    RequestPreparationError(String),

    /// The transport failed before a response was received. Never retried.
    #[error("network error while contacting the validation service: {0}")]
    ClientNetworkError(#[from] TransportError),

    #[error("validation service returned an empty response")]
    EmptyResponse,

    /// The body was not a JSON object with an integer `status` field.
    #[error("failed to parse validation service response")]
    JsonParsingFailed,

    #[error("validation service returned unknown status {0}")]
    UnknownResponseStatus(i64),

    #[error(transparent)]
    Apple(#[from] AppleValidationError),
}

/// Known nonzero status codes of the receipt validation service.
///
/// https://developer.apple.com/documentation/appstorereceipts/status
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppleValidationError {
    /// The App Store could not read the JSON object you provided.
    #[error("the App Store could not read the JSON object provided")]
    BadJson,
    /// The data in the receipt-data property was malformed or missing.
    #[error("the data in the receipt-data property was malformed or missing")]
    MalformedReceiptData,
    /// The receipt could not be authenticated.
    #[error("the receipt could not be authenticated")]
    InvalidReceipt,
    /// The shared secret you provided does not match the shared secret on
    /// file for your account.
    #[error("the shared secret does not match the shared secret on file")]
    IncorrectSharedSecret,
    /// The receipt server is not currently available.
    #[error("the receipt server is not currently available")]
    ServerUnavailable,
    /// This receipt is valid but the subscription has expired. The receipt
    /// data is still returned as part of the response.
    #[error("the receipt is valid but the subscription has expired")]
    SubscriptionExpired,
    /// This receipt is from the test environment, but it was sent to the
    /// production environment for verification.
    #[error("sandbox receipt was sent to the production environment")]
    TestReceiptInProductionEnvironment,
    /// This receipt is from the production environment, but it was sent to the
    /// test environment for verification.
    #[error("production receipt was sent to the sandbox environment")]
    ProductionReceiptInTestEnvironment,
}

impl AppleValidationError {
    pub fn code(&self) -> i64 {
        match self {
            Self::BadJson => 21000,
            Self::MalformedReceiptData => 21002,
            Self::InvalidReceipt => 21003,
            Self::IncorrectSharedSecret => 21004,
            Self::ServerUnavailable => 21005,
            Self::SubscriptionExpired => 21006,
            Self::TestReceiptInProductionEnvironment => 21007,
            Self::ProductionReceiptInTestEnvironment => 21008,
        }
    }

    /// Returns `None` for 0 (success) and for codes outside the known table.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            21000 => Some(Self::BadJson),
            21002 => Some(Self::MalformedReceiptData),
            21003 => Some(Self::InvalidReceipt),
            21004 => Some(Self::IncorrectSharedSecret),
            21005 => Some(Self::ServerUnavailable),
            21006 => Some(Self::SubscriptionExpired),
            21007 => Some(Self::TestReceiptInProductionEnvironment),
            21008 => Some(Self::ProductionReceiptInTestEnvironment),
            _ => None,
        }
    }
}

/// Failure reported by the HTTP transport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed to send: {0}")]
    Send(String),
    #[error("request timed out")]
    Timeout,
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// A receipt payload could not be decoded into the typed model. Never
/// surfaced to callers of the validator; the raw payload is returned instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing or malformed required fields: {0}")]
    MissingFields(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::MissingFields(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_both_ways() {
        for code in [21000, 21002, 21003, 21004, 21005, 21006, 21007, 21008] {
            let error = AppleValidationError::from_code(code).unwrap();
            assert_eq!(error.code(), code);
        }
    }

    #[test]
    fn success_and_unlisted_codes_are_not_errors() {
        assert_eq!(AppleValidationError::from_code(0), None);
        assert_eq!(AppleValidationError::from_code(21001), None);
        assert_eq!(AppleValidationError::from_code(21010), None);
        assert_eq!(AppleValidationError::from_code(-1), None);
    }
}
