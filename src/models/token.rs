//! Token inventory entity types
//!
//! These mirror the backend API schema for the token management endpoints.
//! Instances are treated as immutable value types: the store replaces whole
//! snapshots rather than patching individual fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of security module backing a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenType {
    Hardware,
    Software,
}

/// PIN/initialization status reported by the signer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenStatus {
    Ok,
    UserPinLocked,
    UserPinIncorrect,
    UserPinInvalid,
    UserPinExpired,
    UserPinCountLow,
    UserPinFinalTry,
    NotInitialized,
}

/// Intended usage of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyUsage {
    Authentication,
    Signing,
}

/// A certificate stored under a key, attributed to an owner member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenCertificate {
    /// Owner member identifier. Absent for certificates imported without
    /// a resolvable owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub saved_to_configuration: bool,

    /// Certificate expiry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_after: Option<DateTime<Utc>>,
}

/// A key entry belonging to a token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub id: String,

    /// Friendly name. Keys generated outside the console may have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<KeyUsage>,

    #[serde(default)]
    pub certificates: Vec<TokenCertificate>,
}

/// A cryptographic token (hardware or software security module)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Unique within a single backend fetch
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub token_type: TokenType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TokenStatus>,

    #[serde(default)]
    pub logged_in: bool,

    #[serde(default)]
    pub available: bool,

    #[serde(default)]
    pub saved_to_configuration: bool,

    #[serde(default)]
    pub read_only: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(default)]
    pub keys: Vec<Key>,
}
