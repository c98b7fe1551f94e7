//! Backend API boundary
//!
//! The admin console backend is an external collaborator. This module pins
//! down its boundary as a trait so sessions can be driven against the real
//! REST backend or a test double.

mod rest;

pub use rest::RestClient;

use async_trait::async_trait;

use crate::models::Token;

/// Backend call failures
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),
}

/// Token management operations exposed by the backend
#[async_trait]
pub trait TokensApi: Send + Sync {
    /// `GET /tokens`: the full token inventory
    async fn get_tokens(&self) -> Result<Vec<Token>, ApiError>;

    /// `PUT /tokens/{id}/logout`: log out of a token
    async fn logout_token(&self, id: &str) -> Result<(), ApiError>;
}
