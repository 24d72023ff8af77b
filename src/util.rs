use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;

use crate::{
    config::ReceiptValidatorConfig,
    data::{
        datasources::verify_receipt_datasource::{
            VerifyReceiptDatasource, VerifyReceiptDatasourceImpl,
        },
        repositories::receipt_validation_repository_impl::ReceiptValidationRepositoryImpl,
    },
    domain::{
        entities::{environment::Environment, validation_outcome::ValidationOutcome},
        repositories::receipt_validation_repository::ReceiptValidationRepository,
    },
    errors::ConfigError,
};

/// Validates App Store receipts against the verifyReceipt service.
///
/// Each call owns its own request lifecycle; a single validator can be shared
/// between any number of concurrent calls.
pub struct ReceiptValidator<D: VerifyReceiptDatasource = VerifyReceiptDatasourceImpl> {
    receipt_validation_repository: ReceiptValidationRepositoryImpl<D>,
    shared_secret: Option<String>,
    retry_in_correct_environment: bool,
}

impl<D: VerifyReceiptDatasource> ReceiptValidator<D> {
    /// Uses the given transport instead of the default HTTP client.
    pub fn with_datasource(config: ReceiptValidatorConfig, datasource: D) -> Self {
        Self {
            receipt_validation_repository: ReceiptValidationRepositoryImpl::new(
                datasource,
                config.production_url,
                config.sandbox_url,
            ),
            shared_secret: config.shared_secret,
            retry_in_correct_environment: config.retry_in_correct_environment,
        }
    }

    /// Validates with the configured shared secret and retry setting.
    pub async fn validate_receipt(
        &self,
        base64_receipt: &str,
        environment: Environment,
    ) -> ValidationOutcome {
        self.validate_receipt_with(
            base64_receipt,
            environment,
            self.shared_secret.as_deref(),
            self.retry_in_correct_environment,
        )
        .await
    }

    pub async fn validate_receipt_with(
        &self,
        base64_receipt: &str,
        environment: Environment,
        shared_secret: Option<&str>,
        retry_in_correct_environment: bool,
    ) -> ValidationOutcome {
        self.receipt_validation_repository
            .validate_receipt(
                base64_receipt,
                environment,
                shared_secret,
                retry_in_correct_environment,
            )
            .await
    }

    /// Runs the validation on the current tokio runtime and returns
    /// immediately. `callback` is invoked exactly once with the outcome.
    ///
    /// The shared secret and retry flag given here take the place of the
    /// configured ones. Must be called from within a tokio runtime.
    pub fn validate_receipt_with_callback<F>(
        self: &Arc<Self>,
        base64_receipt: String,
        environment: Environment,
        shared_secret: Option<String>,
        retry_in_correct_environment: bool,
        callback: F,
    ) -> JoinHandle<()>
    where
        D: 'static,
        F: FnOnce(ValidationOutcome) + Send + 'static,
    {
        let validator = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = validator
                .validate_receipt_with(
                    &base64_receipt,
                    environment,
                    shared_secret.as_deref(),
                    retry_in_correct_environment,
                )
                .await;
            callback(outcome);
        })
    }
}

impl ReceiptValidator<VerifyReceiptDatasourceImpl> {
    pub fn new(config: ReceiptValidatorConfig) -> Result<Self, ConfigError> {
        let datasource =
            VerifyReceiptDatasourceImpl::new(Duration::from_secs(config.request_timeout_secs))?;
        Ok(Self::with_datasource(config, datasource))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ReceiptValidatorConfig::from_env()?)
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::oneshot;

    use super::*;
    use crate::{
        data::repositories::receipt_validation_repository_impl::tests::{
            status, success, ScriptedDatasource,
        },
        errors::{AppleValidationError, CashierError},
    };

    fn config(shared_secret: Option<&str>, retry: bool) -> ReceiptValidatorConfig {
        ReceiptValidatorConfig {
            production_url: "https://production.test".to_owned(),
            sandbox_url: "https://sandbox.test".to_owned(),
            shared_secret: shared_secret.map(str::to_owned),
            retry_in_correct_environment: retry,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn uses_configured_shared_secret() {
        let validator = ReceiptValidator::with_datasource(
            config(Some("s3cr3t"), true),
            ScriptedDatasource::new([success(0)]),
        );
        let outcome = validator
            .validate_receipt("cmVjZWlwdA==", Environment::Production)
            .await;
        assert!(outcome.is_decoded());
        let requests = validator
            .receipt_validation_repository
            .datasource()
            .requests
            .lock()
            .unwrap()
            .clone();
        assert_eq!(requests[0].1["password"], "s3cr3t");
    }

    #[tokio::test]
    async fn configured_retry_setting_is_honoured() {
        let validator = ReceiptValidator::with_datasource(
            config(None, false),
            ScriptedDatasource::new([status(21007)]),
        );
        let outcome = validator
            .validate_receipt("cmVjZWlwdA==", Environment::Production)
            .await;
        assert!(matches!(
            outcome.error(),
            Some(CashierError::Apple(
                AppleValidationError::TestReceiptInProductionEnvironment
            ))
        ));
    }

    #[tokio::test]
    async fn callback_receives_the_outcome_once() {
        let validator = Arc::new(ReceiptValidator::with_datasource(
            config(None, true),
            ScriptedDatasource::new([status(21007), success(0)]),
        ));
        let (tx, rx) = oneshot::channel();
        let handle = validator.validate_receipt_with_callback(
            "cmVjZWlwdA==".to_owned(),
            Environment::Production,
            None,
            true,
            move |outcome| {
                let _ = tx.send(outcome);
            },
        );
        handle.await.unwrap();
        let outcome = rx.await.unwrap();
        assert_eq!(
            outcome.receipt_info().unwrap().environment,
            Environment::Sandbox
        );
    }

    #[tokio::test]
    async fn callback_uses_per_call_secret_and_retry_flag() {
        let validator = Arc::new(ReceiptValidator::with_datasource(
            config(Some("configured"), true),
            ScriptedDatasource::new([status(21007)]),
        ));
        let (tx, rx) = oneshot::channel();
        validator
            .validate_receipt_with_callback(
                "cmVjZWlwdA==".to_owned(),
                Environment::Production,
                Some("per-call".to_owned()),
                false,
                move |outcome| {
                    let _ = tx.send(outcome);
                },
            )
            .await
            .unwrap();
        let outcome = rx.await.unwrap();
        assert!(matches!(
            outcome.error(),
            Some(CashierError::Apple(
                AppleValidationError::TestReceiptInProductionEnvironment
            ))
        ));
        let requests = validator
            .receipt_validation_repository
            .datasource()
            .requests
            .lock()
            .unwrap()
            .clone();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1["password"], "per-call");
    }

    #[test]
    fn builds_default_http_validator() {
        assert!(ReceiptValidator::new(ReceiptValidatorConfig::default()).is_ok());
    }
}
