//! REST implementation of the backend boundary

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::api::{ApiError, TokensApi};
use crate::config::schema::ApiConfig;
use crate::models::Token;

/// reqwest-backed client for the admin console backend API
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestClient {
    /// Build a client from configuration.
    ///
    /// The security server ships with a self-signed TLS certificate, so
    /// `accept_invalid_certs` is honored here rather than forcing hosts to
    /// provision a CA bundle first.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build()?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TokensApi for RestClient {
    async fn get_tokens(&self) -> Result<Vec<Token>, ApiError> {
        tracing::debug!("Fetching token inventory");
        let resp = self.http.get(self.endpoint("tokens")).send().await?;
        let resp = Self::check_status(resp).await?;
        Ok(resp.json().await?)
    }

    async fn logout_token(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!("Logging out of token {}", id);
        let resp = self
            .http
            .put(self.endpoint(&format!("tokens/{}/logout", id)))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        Self::check_status(resp).await?;
        Ok(())
    }
}
