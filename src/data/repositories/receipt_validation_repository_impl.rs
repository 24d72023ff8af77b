use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::{
    constants::MAX_VALIDATION_ATTEMPTS,
    data::{
        datasources::verify_receipt_datasource::VerifyReceiptDatasource,
        models::verify_receipt::{
            request_body_model::RequestBodyModel, response_body_model::read_status,
        },
    },
    domain::{
        entities::{
            environment::Environment,
            receipt_info::ReceiptInfo,
            response_classification::{classify, ResponseClassification, TerminalStatus},
            validation_outcome::ValidationOutcome,
        },
        repositories::receipt_validation_repository::ReceiptValidationRepository,
    },
    errors::{AppleValidationError, CashierError},
};

pub(crate) struct ReceiptValidationRepositoryImpl<D: VerifyReceiptDatasource> {
    verify_receipt_datasource: D,
    production_url: String,
    sandbox_url: String,
}

#[async_trait]
impl<D: VerifyReceiptDatasource> ReceiptValidationRepository for ReceiptValidationRepositoryImpl<D> {
    async fn validate_receipt(
        &self,
        base64_receipt: &str,
        environment: Environment,
        shared_secret: Option<&str>,
        retry_in_correct_environment: bool,
    ) -> ValidationOutcome {
        let body = match serde_json::to_vec(&RequestBodyModel {
            receipt_data: base64_receipt,
            password: shared_secret,
        }) {
            Ok(body) => body,
            Err(e) => {
                return ValidationOutcome::Failure(CashierError::RequestPreparationError(
                    e.to_string(),
                ))
            }
        };

        let mut environment = environment;
        let mut attempt = 1;
        loop {
            let (http_status, json) = match self.request(environment, body.clone()).await {
                Ok(response) => response,
                Err(e) => return ValidationOutcome::Failure(e),
            };
            let Some(status) = read_status(&json) else {
                return ValidationOutcome::Failure(CashierError::JsonParsingFailed);
            };

            let classification = classify(http_status, status);
            debug!(%environment, attempt, http_status, status, ?classification, "Classified verifyReceipt response.");
            match classification {
                ResponseClassification::Success | ResponseClassification::ExpiredButDecodable => {
                    return Self::decode(json, environment);
                }
                ResponseClassification::EnvironmentMismatch(direction) => {
                    if retry_in_correct_environment && attempt < MAX_VALIDATION_ATTEMPTS {
                        info!(
                            from = %environment,
                            to = %environment.opposite(),
                            "Receipt belongs to the other environment; retrying."
                        );
                        environment = environment.opposite();
                        attempt += 1;
                        continue;
                    }
                    return ValidationOutcome::Failure(CashierError::Apple(
                        AppleValidationError::from(direction),
                    ));
                }
                ResponseClassification::TerminalError(TerminalStatus::Known(e)) => {
                    return ValidationOutcome::Failure(CashierError::Apple(e));
                }
                ResponseClassification::TerminalError(TerminalStatus::Unknown(code)) => {
                    return ValidationOutcome::Failure(CashierError::UnknownResponseStatus(code));
                }
            }
        }
    }
}

impl<D: VerifyReceiptDatasource> ReceiptValidationRepositoryImpl<D> {
    pub(crate) fn new(
        verify_receipt_datasource: D,
        production_url: impl Into<String>,
        sandbox_url: impl Into<String>,
    ) -> Self {
        Self {
            verify_receipt_datasource,
            production_url: production_url.into(),
            sandbox_url: sandbox_url.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn datasource(&self) -> &D {
        &self.verify_receipt_datasource
    }

    fn url(&self, environment: Environment) -> &str {
        match environment {
            Environment::Production => &self.production_url,
            Environment::Sandbox => &self.sandbox_url,
        }
    }

    /// Sends one request and parses the body into a JSON object.
    async fn request(
        &self,
        environment: Environment,
        body: Vec<u8>,
    ) -> Result<(u16, Map<String, Value>), CashierError> {
        let url = self.url(environment);
        debug!(%environment, url, "Sending verifyReceipt request.");
        let response = self
            .verify_receipt_datasource
            .post_receipt(url, body)
            .await
            .map_err(|e| {
                warn!(%environment, error = %e, "verifyReceipt callout failed.");
                CashierError::ClientNetworkError(e)
            })?;
        if response.body.is_empty() {
            return Err(CashierError::EmptyResponse);
        }
        match serde_json::from_slice(&response.body) {
            Ok(Value::Object(json)) => Ok((response.http_status, json)),
            _ => Err(CashierError::JsonParsingFailed),
        }
    }

    fn decode(json: Map<String, Value>, environment: Environment) -> ValidationOutcome {
        match ReceiptInfo::from_response(&json, environment) {
            Ok(info) => ValidationOutcome::Decoded(info),
            Err(e) => {
                warn!(%environment, error = %e, "Receipt could not be decoded; returning raw payload.");
                ValidationOutcome::RawPayload(json)
            }
        }
    }
}
