//! Authentication module for the exchange API.
//!
//! This module provides:
//! - Wallet signing used to prove address ownership
//! - API-key storage with single-flight provisioning
//! - Nonce generation for key-issuance payloads
//! - Environment-based configuration

mod api_key;
mod credentials;
mod nonce;
mod wallet;

pub use api_key::ApiKeyStore;
pub use credentials::{API_KEY_VAR, BASE_URL_VAR, EnvConfig, PRIVATE_KEY_VAR};
pub use nonce::{FixedNonce, NonceProvider, TimestampNonce};
pub use wallet::{LocalWallet, WalletSigner};
