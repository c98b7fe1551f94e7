//! Token session for console hosts
//!
//! `TokenSession` wraps the backend API boundary, the alert boundary and the
//! token store into a single injectable component. It hosts the asynchronous
//! actions: each one awaits a backend call and, only on success, applies the
//! corresponding store mutators. Errors are re-raised to the caller; nothing
//! is swallowed here.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::api::TokensApi;
use crate::config::schema::Config;
use crate::models::Token;
use crate::services::alerts::{AlertActions, NoopAlerts};
use crate::store::TokenStore;

/// An injectable session over the token inventory.
///
/// Created at console session start and torn down at session end. Cloning is
/// cheap and shares the underlying store and boundaries.
///
/// # Example
///
/// ```rust,no_run
/// use tokenview::config::schema::Config;
/// use tokenview::services::TokenSession;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::default();
/// let session = TokenSession::from_config(&config)?;
///
/// session.fetch_tokens().await?;
/// for token in session.store().sorted_tokens() {
///     println!("{}: {}", token.id, token.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TokenSession {
    api: Arc<dyn TokensApi>,
    alerts: Arc<dyn AlertActions>,
    store: TokenStore,
}

impl TokenSession {
    /// Create a session with injected boundaries and a fresh store.
    pub fn new(api: Arc<dyn TokensApi>, alerts: Arc<dyn AlertActions>) -> Self {
        Self {
            api,
            alerts,
            store: TokenStore::new(),
        }
    }

    /// Create a session backed by the REST client, without an alerts module.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api =
            crate::api::RestClient::new(&config.api).context("Failed to create API client")?;
        Ok(Self::new(Arc::new(api), Arc::new(NoopAlerts)))
    }

    /// Returns a reference to the token store.
    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Open a token's detail rows.
    pub fn expand_token(&self, id: &str) {
        self.store.set_token_expanded(id);
    }

    /// Close a token's detail rows.
    pub fn hide_token(&self, id: &str) {
        self.store.set_token_hidden(id);
    }

    /// Focus a token for detail views.
    pub fn set_selected_token(&self, token: Token) {
        self.store.set_selected_token(token);
    }

    /// Fetch the token inventory and replace the stored snapshot.
    ///
    /// On failure the snapshot is left untouched and the error is re-raised.
    pub async fn fetch_tokens(&self) -> Result<()> {
        let tokens = self
            .api
            .get_tokens()
            .await
            .context("Failed to fetch tokens")?;
        self.store.set_tokens(tokens);
        Ok(())
    }

    /// Log out of a token.
    ///
    /// On success an inventory refresh and an alert status re-check are
    /// dispatched in the background. The refresh is best effort and not part
    /// of the logout operation's success contract. On failure neither
    /// follow-up runs and the error is re-raised.
    pub async fn token_logout(&self, id: &str) -> Result<()> {
        if let Err(e) = self.api.logout_token(id).await {
            tracing::info!(
                target: "audit",
                event = "Log out from token failed",
                token_id = %id,
                reason = %e,
            );
            return Err(e).with_context(|| format!("Failed to log out from token {}", id));
        }

        tracing::info!(target: "audit", event = "Log out from token", token_id = %id);

        let session = self.clone();
        tokio::spawn(async move {
            if let Err(e) = session.fetch_tokens().await {
                tracing::warn!("Token refresh after logout failed: {}", e);
            }
        });

        let alerts = Arc::clone(&self.alerts);
        tokio::spawn(async move {
            alerts.check_alert_status().await;
        });

        Ok(())
    }
}
