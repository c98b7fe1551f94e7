//! Services module
//!
//! Session wiring and the boundaries to sibling console modules.

mod alerts;
mod session;

pub use alerts::{AlertActions, NoopAlerts};
pub use session::TokenSession;
