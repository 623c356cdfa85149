//! Exchange REST API client.
//!
//! Provides access to all public and private REST endpoints.
//!
//! # Trait-based API
//!
//! The [`ExchangeClient`] trait abstracts all REST API operations, enabling:
//! - Fake implementations for testing
//! - Decorators around the real client
//!
//! ```rust,ignore
//! use wallet_exchange_client::rest::{ExchangeClient, ExchangeRestClient};
//!
//! async fn use_client<C: ExchangeClient>(client: &C) -> Result<(), wallet_exchange_client::ExchangeError> {
//!     let books = client.get_orderbooks().await?;
//!     println!("{} order books", books.len());
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod traits;

pub use client::{ExchangeRestClient, ExchangeRestClientBuilder};
pub use endpoints::*;
pub use traits::ExchangeClient;
