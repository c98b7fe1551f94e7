//! Store module
//!
//! The token inventory state container and its derived views.

pub mod filter;
mod state;

pub use state::TokenStore;
