//! # Address Client
//!
//! An async Rust client library for the Address wallet management REST API.
//!
//! ## Features
//!
//! - Coin, wallet and account endpoints scoped to an active coin
//! - Deterministic path resolution across the coin → wallet → account hierarchy
//! - HMAC-SHA256 signing of sends and permission changes
//! - Pluggable HTTP transport, `reqwest` by default
//! - Decimal amounts with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use address_api_client::AddressClient;
//! use address_api_client::auth::EnvCredentials;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AddressClient::builder()
//!         .coin("btc")
//!         .credentials(Arc::new(EnvCredentials::from_env()))
//!         .build()?;
//!     let coins = client.get_coins().await?;
//!     println!("Coins: {}", coins);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod params;
pub mod path;
pub mod transport;
pub mod types;

// Re-export commonly used types at crate root
pub use client::{AddressClient, AddressClientBuilder, ClientConfig};
pub use error::{AddressError, TransportError};
pub use params::{ParamValue, ParameterSet};
pub use path::{Operation, PathContext, ResourceKind, resolve_path};
pub use types::common::Permission;

/// Result type alias using AddressError
pub type Result<T> = std::result::Result<T, AddressError>;
