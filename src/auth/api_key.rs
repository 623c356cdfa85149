//! API-key holder with single-flight provisioning.

use std::future::Future;
use std::sync::{PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;

use crate::error::ExchangeError;

/// Holds the API key of one client instance.
///
/// The key is absent until it is supplied or provisioned. Concurrent callers
/// that find it absent share a single provisioning run through
/// [`ApiKeyStore::get_or_provision`].
pub struct ApiKeyStore {
    current: RwLock<Option<SecretString>>,
    provisioning: Mutex<()>,
}

impl ApiKeyStore {
    /// Create a store, optionally seeded with an existing key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            current: RwLock::new(api_key.map(SecretString::from)),
            provisioning: Mutex::new(()),
        }
    }

    /// The currently held key.
    pub fn get(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|key| key.expose_secret().to_owned())
    }

    /// Whether a key is held.
    pub fn is_set(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Replace the held key. No validation is performed.
    pub fn replace(&self, api_key: impl Into<String>) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(SecretString::from(api_key.into()));
    }

    /// Drop the held key so the next authenticated call provisions again.
    pub fn clear(&self) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = None;
    }

    /// Return the held key, running `provision` first if there is none.
    ///
    /// Only one provisioning runs at a time. Callers that queued behind it
    /// pick up the key it stored. If it failed, the next caller in line runs
    /// its own provisioning.
    pub async fn get_or_provision<F, Fut>(&self, provision: F) -> Result<String, ExchangeError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, ExchangeError>>,
    {
        if let Some(key) = self.get() {
            return Ok(key);
        }

        let _guard = self.provisioning.lock().await;
        if let Some(key) = self.get() {
            return Ok(key);
        }

        let key = provision().await?;
        self.replace(key.clone());
        Ok(key)
    }
}

impl Default for ApiKeyStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for ApiKeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.is_set() { "[REDACTED]" } else { "None" };
        f.debug_struct("ApiKeyStore")
            .field("api_key", &api_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn test_store_lifecycle() {
        let store = ApiKeyStore::new(None);
        assert!(store.get().is_none());

        store.replace("first");
        assert_eq!(store.get().as_deref(), Some("first"));

        store.replace("second");
        assert_eq!(store.get().as_deref(), Some("second"));

        store.clear();
        assert!(!store.is_set());
    }

    #[test]
    fn test_debug_redacted() {
        let store = ApiKeyStore::new(Some("super_secret_key".to_string()));
        let debug_str = format!("{:?}", store);
        assert!(!debug_str.contains("super_secret_key"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn test_existing_key_skips_provisioning() {
        let store = ApiKeyStore::new(Some("seeded".to_string()));
        let key = store
            .get_or_provision(|| async {
                Err::<String, _>(ExchangeError::Auth("unexpected provisioning".to_string()))
            })
            .await
            .unwrap();
        assert_eq!(key, "seeded");
    }

    #[tokio::test]
    async fn test_concurrent_callers_provision_once() {
        let store = Arc::new(ApiKeyStore::new(None));
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            let calls = calls.clone();
            handles.push(tokio::spawn(async move {
                store
                    .get_or_provision(|| async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(20)).await;
                        Ok::<_, ExchangeError>("provisioned".to_string())
                    })
                    .await
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "provisioned");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_provisioning_leaves_key_absent() {
        let store = ApiKeyStore::new(None);
        let result = store
            .get_or_provision(|| async {
                Err::<String, _>(ExchangeError::Auth("rejected".to_string()))
            })
            .await;
        assert!(matches!(result, Err(ExchangeError::Auth(_))));
        assert!(!store.is_set());

        let key = store
            .get_or_provision(|| async { Ok::<_, ExchangeError>("second-try".to_string()) })
            .await
            .unwrap();
        assert_eq!(key, "second-try");
    }
}
