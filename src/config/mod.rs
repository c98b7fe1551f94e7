//! Configuration module
//!
//! Loading, validation and persistence of the host-side configuration file.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{ApiConfig, Config};
