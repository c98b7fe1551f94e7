//! Alert status boundary
//!
//! The console's alerts module owns global alert banners and re-checks its
//! state after operations that can change it, such as a token logout. From
//! this module's perspective the call is fire-and-forget; failures are the
//! sibling module's concern.

use async_trait::async_trait;

/// Entry point of the sibling alerts module
#[async_trait]
pub trait AlertActions: Send + Sync {
    /// Re-check global alert status.
    async fn check_alert_status(&self);
}

/// No-op implementation for hosts without an alerts module
pub struct NoopAlerts;

#[async_trait]
impl AlertActions for NoopAlerts {
    async fn check_alert_status(&self) {}
}
