//! Model layer
//!
//! Rust types for the backend token management API payloads.

mod token;

pub use token::{Key, KeyUsage, Token, TokenCertificate, TokenStatus, TokenType};
