use std::time::Duration;

use shared::{
    domain::Operation,
    error::ApiError,
    protocol::{CalculateRequest, CalculateResponse, HealthResponse, OperationsResponse},
};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// One outstanding request per calculation; the original front end aborts
/// the fetch after this interval.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Api(ApiError),
    #[error("unexpected response from server")]
    UnexpectedResponse,
}

/// Client for the calculator JSON API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url })
    }

    pub async fn calculate(
        &self,
        operation: Operation,
        num1: f64,
        num2: f64,
    ) -> Result<f64, ClientError> {
        let url = self.endpoint("/api/calculate")?;
        let response = self
            .http
            .post(url)
            .json(&CalculateRequest {
                operation,
                num1,
                num2,
            })
            .send()
            .await?;

        if response.status().is_success() {
            let body: CalculateResponse = response.json().await?;
            debug!(%operation, num1, num2, result = body.result, "remote calculation");
            Ok(body.result)
        } else {
            let err: ApiError = response
                .json()
                .await
                .map_err(|_| ClientError::UnexpectedResponse)?;
            Err(ClientError::Api(err))
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = self.endpoint("/api/health")?;
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn operations(&self) -> Result<OperationsResponse, ClientError> {
        let url = self.endpoint("/api/operations")?;
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))
    }
}
