//! Wallet signing for API-key issuance.
//!
//! The exchange proves wallet ownership with an EIP-191 personal-message
//! signature:
//! ```text
//! sign(keccak256("\x19Ethereum Signed Message:\n" + len(message) + message))
//! ```
//!
//! The 65-byte `r || s || v` signature is sent hex-encoded with a `0x` prefix
//! in the `api-sig` header.

use std::str::FromStr;

use alloy::primitives::{Address, hex};
use alloy::signers::SignerSync;
use alloy::signers::local::PrivateKeySigner;

use crate::error::ExchangeError;

/// Trait for the wallet that identifies the client to the exchange.
///
/// Implement this to keep the private key outside the process, e.g. in a
/// hardware wallet or a remote signer.
pub trait WalletSigner: Send + Sync {
    /// The public address derived from the private key.
    fn address(&self) -> Address;

    /// Sign a UTF-8 message, returning the `0x`-prefixed hex signature.
    fn sign_message(&self, message: &str) -> Result<String, ExchangeError>;
}

/// A wallet backed by an in-memory secp256k1 private key.
#[derive(Clone)]
pub struct LocalWallet {
    signer: PrivateKeySigner,
}

impl LocalWallet {
    /// Create a wallet from a hex private key, with or without `0x` prefix.
    pub fn from_private_key(private_key: &str) -> Result<Self, ExchangeError> {
        let signer = PrivateKeySigner::from_str(private_key.trim())
            .map_err(|e| ExchangeError::Signing(format!("Invalid private key: {e}")))?;
        Ok(Self { signer })
    }
}

impl From<PrivateKeySigner> for LocalWallet {
    fn from(signer: PrivateKeySigner) -> Self {
        Self { signer }
    }
}

impl WalletSigner for LocalWallet {
    fn address(&self) -> Address {
        self.signer.address()
    }

    fn sign_message(&self, message: &str) -> Result<String, ExchangeError> {
        let signature = self
            .signer
            .sign_message_sync(message.as_bytes())
            .map_err(|e| ExchangeError::Signing(e.to_string()))?;
        Ok(hex::encode_prefixed(signature.as_bytes()))
    }
}

impl std::fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalWallet")
            .field("address", &self.signer.address())
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
