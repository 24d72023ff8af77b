use async_trait::async_trait;

use crate::domain::entities::{environment::Environment, validation_outcome::ValidationOutcome};

#[async_trait]
pub trait ReceiptValidationRepository: Send + Sync {
    /// Validates a base64 receipt against the given environment. If the
    /// service reports an environment mismatch and `retry_in_correct_environment`
    /// is set, one more attempt is made against the other environment.
    async fn validate_receipt(
        &self,
        base64_receipt: &str,
        environment: Environment,
        shared_secret: Option<&str>,
        retry_in_correct_environment: bool,
    ) -> ValidationOutcome;
}
