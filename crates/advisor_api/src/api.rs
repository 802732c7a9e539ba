use std::time::Duration;

use advisor_logging::advisor_trace;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{ApiError, ApiFailureKind, RecommendationReport};

/// Name of the static credential header attached to every request.
pub const API_KEY_HEADER: &str = "x-api-key";
/// Number of synthetic events requested per simulation run.
pub const SIMULATION_EVENT_COUNT: u32 = 10;
/// Delay between synthetic events, in seconds.
pub const SIMULATION_EVENT_DELAY_SECS: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_key: SecretString,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait]
pub trait RecommendationApi: Send + Sync {
    async fn fetch_recommendations(
        &self,
        customer_id: &str,
    ) -> Result<RecommendationReport, ApiError>;

    async fn start_simulation(&self, customers: Option<&[String]>) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpRecommendationApi {
    client: reqwest::Client,
    settings: ApiSettings,
}

impl HttpRecommendationApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiFailureKind::Network, err.to_string()))?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Debug, Deserialize)]
struct RecommendationsBody {
    #[serde(default)]
    customer_id: Option<String>,
    #[serde(default)]
    recommendations: Option<Vec<(String, String)>>,
    #[serde(default)]
    explanation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Debug, Serialize)]
struct SimulateUsageBody<'a> {
    customers: Option<&'a [String]>,
    num_events: u32,
    delay: f64,
}

#[async_trait]
impl RecommendationApi for HttpRecommendationApi {
    async fn fetch_recommendations(
        &self,
        customer_id: &str,
    ) -> Result<RecommendationReport, ApiError> {
        let url = self.endpoint(&format!("recommendations/{customer_id}"));
        advisor_trace!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.settings.api_key.expose_secret())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &text));
        }

        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(ApiError::new(ApiFailureKind::NoBody, "empty response body"));
        }

        let body: RecommendationsBody = serde_json::from_str(trimmed)
            .map_err(|err| ApiError::new(ApiFailureKind::InvalidBody, err.to_string()))?;

        Ok(RecommendationReport {
            customer_id: body.customer_id,
            // An absent field means the backend had nothing to recommend.
            products: body.recommendations.unwrap_or_default(),
            explanation: body.explanation.unwrap_or_default(),
        })
    }

    async fn start_simulation(&self, customers: Option<&[String]>) -> Result<(), ApiError> {
        let url = self.endpoint("simulate_usage");
        advisor_trace!("POST {url}");

        let body = SimulateUsageBody {
            customers,
            num_events: SIMULATION_EVENT_COUNT,
            delay: SIMULATION_EVENT_DELAY_SECS,
        };

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.settings.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &text));
        }
        Ok(())
    }
}

fn status_error(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail);
    let message = detail
        .clone()
        .unwrap_or_else(|| format!("http status {status}"));
    ApiError::new(ApiFailureKind::HttpStatus { status, detail }, message)
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiFailureKind::Timeout, err.to_string());
    }
    ApiError::new(ApiFailureKind::Network, err.to_string())
}
