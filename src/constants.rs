pub(crate) const PRODUCTION_VERIFY_RECEIPT_URL: &str = "https://buy.itunes.apple.com/verifyReceipt";
pub(crate) const SANDBOX_VERIFY_RECEIPT_URL: &str = "https://sandbox.itunes.apple.com/verifyReceipt";

pub(crate) const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// An attempt against the other environment is made at most once per call.
pub(crate) const MAX_VALIDATION_ATTEMPTS: usize = 2;

// Environment variables read by ReceiptValidatorConfig::from_env.
pub(crate) const ENV_SHARED_SECRET: &str = "APPLE_SHARED_SECRET";
pub(crate) const ENV_PRODUCTION_URL: &str = "APPLE_VERIFY_RECEIPT_PRODUCTION_URL";
pub(crate) const ENV_SANDBOX_URL: &str = "APPLE_VERIFY_RECEIPT_SANDBOX_URL";
pub(crate) const ENV_TIMEOUT_SECS: &str = "APPLE_VERIFY_RECEIPT_TIMEOUT_SECS";
