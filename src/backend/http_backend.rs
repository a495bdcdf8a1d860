//! HTTP client for the map generation service

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::backend::traits::{GeneratedMap, GenerationService, MapRequest};
use crate::config::ServiceConfig;
use crate::error::{AppError, Result};

const GENERATE_PATH: &str = "generate-map";

/// HTTP-based map generation backend
pub struct HttpBackend {
    name: String,
    client: Client,
    generate_url: Url,
}

/// Success body: `{ "url": string }`
#[derive(Debug, Deserialize)]
struct ApiGenerateResponse {
    #[serde(default)]
    url: Option<String>,
}

/// Error body: `{ "detail": ... }`. Only string details are meaningful to the user.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl HttpBackend {
    /// Create a new HTTP backend from configuration
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut builder = Client::builder();
        // No timeout unless configured; the transport default applies.
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            name: "http".to_string(),
            client,
            generate_url: generate_url(&config.base_url)?,
        })
    }
}

/// Join the endpoint path onto the base URL, tolerating a trailing slash.
fn generate_url(base_url: &str) -> Result<Url> {
    let mut base = Url::parse(base_url)
        .map_err(|e| AppError::InvalidRequest(format!("Invalid base URL '{}': {}", base_url, e)))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(GENERATE_PATH)
        .map_err(|e| AppError::InvalidRequest(format!("Invalid base URL '{}': {}", base_url, e)))
}

fn parse_detail(body: &str) -> Option<String> {
    let parsed: ApiErrorResponse = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}

#[async_trait]
impl GenerationService for HttpBackend {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, request: MapRequest) -> Result<GeneratedMap> {
        debug!(
            backend = %self.name,
            url = %self.generate_url,
            style = %request.style,
            "Sending generate request"
        );

        let response = self
            .client
            .post(self.generate_url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(backend = %self.name, error = %e, "Generate request failed in transport");
                AppError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = parse_detail(&body);
            warn!(
                backend = %self.name,
                status = status.as_u16(),
                detail = ?detail,
                "Service returned an error status"
            );
            return Err(AppError::Service {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: ApiGenerateResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

        match parsed.url {
            Some(url) if !url.trim().is_empty() => {
                debug!(backend = %self.name, status = status.as_u16(), "Received generated map");
                Ok(GeneratedMap { url })
            }
            _ => Err(AppError::MalformedResponse(
                "Response is missing the 'url' field".to_string(),
            )),
        }
    }
}
