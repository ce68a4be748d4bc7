use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use super::types::*;
use super::Backend;
use crate::config::ApiConfig;
use crate::error::ApiError;

/// reqwest-backed client for the Smart Free Time Utilizer HTTP API.
pub struct HttpBackend {
    base: Url,
    http: Client,
}

impl HttpBackend {
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .build()?;

        Ok(Self { base, http })
    }

    /// Join path segments onto the base URL; segments are percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        {
            let mut parts = url.path_segments_mut().map_err(|_| ApiError::InvalidBaseUrl {
                url: self.base.to_string(),
                message: "URL cannot serve as a base".to_string(),
            })?;
            parts.pop_if_empty();
            parts.extend(segments);
        }
        Ok(url)
    }

    /// Turn a non-success response into a Rejected error carrying the
    /// backend's message when one is present in the body
    async fn rejection(resp: reqwest::Response) -> ApiError {
        #[derive(Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            message: String,
        }

        let status = resp.status().as_u16();
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => "Something went wrong".to_string(),
        };

        ApiError::Rejected { status, message }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn sign_in(&self, req: &SignInRequest) -> Result<AuthResponse, ApiError> {
        let url = self.endpoint(&["signin"])?;
        debug!("POST {}", url);

        let resp = self.http.post(url).json(req).send().await?;
        if !resp.status().is_success() {
            return Err(Self::rejection(resp).await);
        }

        Ok(resp.json().await?)
    }

    async fn sign_up(&self, req: &SignUpRequest) -> Result<AuthResponse, ApiError> {
        let url = self.endpoint(&["signup"])?;
        debug!("POST {}", url);

        let resp = self.http.post(url).json(req).send().await?;
        if !resp.status().is_success() {
            return Err(Self::rejection(resp).await);
        }

        Ok(resp.json().await?)
    }

    async fn generate_plan(&self, req: &PlanRequest) -> Result<PlanResponse, ApiError> {
        let url = self.endpoint(&["api", "process-data"])?;
        debug!("POST {}", url);

        let resp = self.http.post(url).json(req).send().await?;
        if !resp.status().is_success() {
            return Err(Self::rejection(resp).await);
        }

        Ok(resp.json().await?)
    }

    async fn history(&self, username: &str) -> Result<Vec<HistoryEntry>, ApiError> {
        let url = self.endpoint(&["history", username])?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await?;

        // 404 is "no history yet", not a failure
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !resp.status().is_success() {
            return Err(Self::rejection(resp).await);
        }

        let body: HistoryResponse = resp.json().await?;
        Ok(body.history)
    }
}
