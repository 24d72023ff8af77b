use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::errors::{ConfigError, TransportError};

/// Status and body of an HTTP response. Non-2xx statuses are not treated as
/// errors; the validation service reports failures in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHttpResponse {
    pub http_status: u16,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait VerifyReceiptDatasource: Send + Sync {
    /// Verify Receipt:
    /// https://developer.apple.com/documentation/appstorereceipts/verifyreceipt
    ///
    /// url:
    ///   The production or sandbox endpoint.
    /// body:
    ///   Serialized JSON request body.
    async fn post_receipt(&self, url: &str, body: Vec<u8>)
        -> Result<RawHttpResponse, TransportError>;
}

pub struct VerifyReceiptDatasourceImpl {
    client: reqwest::Client,
}

#[async_trait]
impl VerifyReceiptDatasource for VerifyReceiptDatasourceImpl {
    async fn post_receipt(
        &self,
        url: &str,
        body: Vec<u8>,
    ) -> Result<RawHttpResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::Send(format!("{:?}", e))
                }
            })?;
        let http_status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Body(format!("{:?}", e))
            }
        })?;
        Ok(RawHttpResponse {
            http_status,
            body: body.to_vec(),
        })
    }
}

impl VerifyReceiptDatasourceImpl {
    pub(crate) fn new(request_timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }
}
