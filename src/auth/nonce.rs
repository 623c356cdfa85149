//! Nonce generation for API-key issuance.
//!
//! The exchange expects the key-issuance payload to carry the current
//! timestamp in milliseconds, rendered as a string.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for key-issuance requests.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    fn next_nonce(&self) -> u64;
}

/// A nonce provider based on the wall clock in milliseconds.
///
/// Two calls within the same millisecond still yield distinct, increasing
/// values.
pub struct TimestampNonce {
    last_nonce: AtomicU64,
}

impl TimestampNonce {
    /// Create a new timestamp nonce provider.
    pub fn new() -> Self {
        Self {
            last_nonce: AtomicU64::new(0),
        }
    }

    fn current_time_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

impl Default for TimestampNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for TimestampNonce {
    fn next_nonce(&self) -> u64 {
        let now = Self::current_time_millis();
        let mut last = self.last_nonce.load(Ordering::SeqCst);
        loop {
            let next = now.max(last + 1);
            match self
                .last_nonce
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }
}

/// A nonce provider that always returns the same value.
///
/// Useful for reproducible signatures in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedNonce(pub u64);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}
