//! # Wallet Exchange Client
//!
//! An async Rust client library for a wallet-authenticated cryptocurrency
//! exchange REST API.
//!
//! ## Features
//!
//! - Public market data: order books, depth, quotes, trade history, symbols
//! - Private account and trading endpoints: balances, deposits, refunds,
//!   withdrawals, orders, trades
//! - API keys provisioned on demand by signing a nonce with an Ethereum wallet
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wallet_exchange_client::rest::ExchangeRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ExchangeRestClient::from_env()?;
//!     let status = client.get_exchange_status().await?;
//!     println!("Exchange status: {:?}", status);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, ExchangeError};
pub use rest::{ExchangeClient, ExchangeRestClient};
pub use types::{Side, to_iso8601};

/// Result type alias using ExchangeError
pub type Result<T> = std::result::Result<T, ExchangeError>;
