//! Exchange REST API client implementation.

use std::sync::Arc;

use alloy::primitives::Address;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::auth::{ApiKeyStore, EnvConfig, LocalWallet, NonceProvider, TimestampNonce, WalletSigner};
use crate::error::{ApiError, ExchangeError};
use crate::rest::endpoints::{API_KEY_HEADER, DEFAULT_BASE_URL, SIGNATURE_HEADER, private};
use crate::rest::private::ApiKeyResponse;

/// The exchange REST API client.
///
/// The client is identified by a wallet. Private endpoints additionally need
/// an API key; if none was supplied, the first private call obtains one by
/// signing a nonce with the wallet (see [`ExchangeRestClient::generate_api_key`]).
///
/// # Example
///
/// ```rust,no_run
/// use wallet_exchange_client::rest::ExchangeRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ExchangeRestClient::new("0xac09...ff80", None)?;
///
///     // Public endpoints never touch the API key.
///     let status = client.get_exchange_status().await?;
///     println!("Exchange status: {:?}", status.status);
///
///     // The first private call provisions an API key.
///     let balances = client.get_balances(None).await?;
///     println!("Balances: {:?}", balances);
///
///     Ok(())
/// }
/// ```
///
/// Clones share the connection pool and the API key.
#[derive(Clone)]
pub struct ExchangeRestClient {
    http_client: ClientWithMiddleware,
    base_url: Url,
    wallet: Arc<dyn WalletSigner>,
    api_key: Arc<ApiKeyStore>,
    nonce_provider: Arc<dyn NonceProvider>,
}

/// Body of the key-issuance request.
#[derive(Debug, Serialize)]
struct NoncePayload {
    nonce: String,
}

impl ExchangeRestClient {
    /// Create a client from a hex private key and an optional existing API key.
    pub fn new(private_key: &str, api_key: Option<String>) -> Result<Self, ExchangeError> {
        let mut builder = Self::builder().private_key(private_key);
        if let Some(api_key) = api_key {
            builder = builder.api_key(api_key);
        }
        builder.build()
    }

    /// Create a client configured from environment variables.
    ///
    /// See [`EnvConfig`] for the variables read.
    pub fn from_env() -> Result<Self, ExchangeError> {
        let config = EnvConfig::try_from_env().ok_or_else(|| {
            ExchangeError::Auth(format!(
                "Environment variable {} not set",
                crate::auth::PRIVATE_KEY_VAR
            ))
        })?;
        Self::builder().env_config(&config).build()
    }

    /// Create a new client builder.
    pub fn builder() -> ExchangeRestClientBuilder {
        ExchangeRestClientBuilder::new()
    }

    /// The wallet address this client authenticates as.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// The API key currently attached to private requests, if any.
    pub fn api_key(&self) -> Option<String> {
        self.api_key.get()
    }

    /// Replace the API key attached to private requests.
    ///
    /// The key is not validated and no request is made.
    pub fn update_api_key(&self, api_key: impl Into<String>) {
        self.api_key.replace(api_key);
    }

    /// Forget the API key; the next private call provisions a new one.
    pub fn clear_api_key(&self) {
        self.api_key.clear();
    }

    /// Obtain a new API key from the exchange and start using it.
    ///
    /// Signs `{"nonce":"<unix millis>"}` with the wallet and posts it to
    /// `/apikeys` with the signature in the `api-sig` header. The returned key
    /// replaces any key held so far.
    pub async fn generate_api_key(&self) -> Result<String, ExchangeError> {
        let api_key = self.request_api_key().await?;
        self.update_api_key(api_key.clone());
        Ok(api_key)
    }

    /// Run the key-issuance exchange without storing the result.
    async fn request_api_key(&self) -> Result<String, ExchangeError> {
        let payload = NoncePayload {
            nonce: self.nonce_provider.next_nonce().to_string(),
        };
        // The exact signed string is sent as the body.
        let message = serde_json::to_string(&payload)?;
        let signature = self.wallet.sign_message(&message)?;

        tracing::debug!(address = %self.wallet.address(), nonce = %payload.nonce, "Requesting API key");

        let url = self.endpoint_url(&[private::API_KEYS])?;
        let response = self
            .http_client
            .post(url)
            .header(SIGNATURE_HEADER, signature)
            .header(CONTENT_TYPE, "application/json")
            .body(message)
            .send()
            .await?;

        let issued = self
            .parse_response::<ApiKeyResponse>(response)
            .await
            .and_then(|issued| {
                issued.api_key().map(str::to_owned).ok_or_else(|| {
                    ExchangeError::InvalidResponse(format!(
                        "No API key in issuance response: {}",
                        issued.body
                    ))
                })
            });

        match issued {
            Ok(api_key) => {
                tracing::debug!(address = %self.wallet.address(), "API key issued");
                Ok(api_key)
            }
            Err(e) => {
                tracing::warn!(error = %e, "API key request failed");
                Err(e)
            }
        }
    }

    /// Return the held API key, provisioning one first if there is none.
    async fn ensure_api_key(&self) -> Result<String, ExchangeError> {
        self.api_key
            .get_or_provision(|| self.request_api_key())
            .await
    }

    // URL construction.

    /// Build `base_url/segment/...`, percent-encoding each segment.
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url, ExchangeError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ExchangeError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Attach a query string serialized from `params` in field order.
    pub(crate) fn with_query<Q>(mut url: Url, params: &Q) -> Result<Url, ExchangeError>
    where
        Q: Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| ExchangeError::InvalidRequest(e.to_string()))?;
        if !query_string.is_empty() {
            url.set_query(Some(&query_string));
        }
        Ok(url)
    }

    // HTTP request methods.

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(&self, url: Url) -> Result<T, ExchangeError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.http_client.get(url).send().await?;
        self.parse_response(response).await
    }

    /// Make an authenticated GET request.
    pub(crate) async fn private_get<T>(&self, url: Url) -> Result<T, ExchangeError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.private_request(Method::GET, url, None).await
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn private_post<T, B>(&self, url: Url, body: &B) -> Result<T, ExchangeError>
    where
        T: serde::de::DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        self.private_request(Method::POST, url, Some(body)).await
    }

    /// Make an authenticated DELETE request.
    pub(crate) async fn private_delete<T>(&self, url: Url) -> Result<T, ExchangeError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.private_request(Method::DELETE, url, None).await
    }

    async fn private_request<T>(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<T, ExchangeError>
    where
        T: serde::de::DeserializeOwned,
    {
        let api_key = self.ensure_api_key().await?;
        let mut api_key_value = HeaderValue::from_str(&api_key)
            .map_err(|_| ExchangeError::Auth("API key is not a valid header value".to_string()))?;
        api_key_value.set_sensitive(true);

        let mut request = self
            .http_client
            .request(method, url)
            .header(API_KEY_HEADER, api_key_value);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await?;
        self.parse_response(response).await
    }

    /// Parse a response from the exchange.
    ///
    /// Non-2xx statuses become [`ExchangeError::Api`] carrying the raw body.
    /// An empty 2xx body decodes as JSON `null`.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, ExchangeError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ExchangeError::Api(ApiError::new(status.as_u16(), body)));
        }

        let json = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(json).map_err(|e| {
            ExchangeError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })
    }
}

impl std::fmt::Debug for ExchangeRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeRestClient")
            .field("base_url", &self.base_url.as_str())
            .field("address", &self.wallet.address())
            .field("has_api_key", &self.api_key.is_set())
            .finish()
    }
}

/// Builder for [`ExchangeRestClient`].
pub struct ExchangeRestClientBuilder {
    base_url: String,
    wallet: Option<Arc<dyn WalletSigner>>,
    private_key: Option<SecretString>,
    api_key: Option<String>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    max_retries: u32,
}

impl ExchangeRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            wallet: None,
            private_key: None,
            api_key: None,
            nonce_provider: None,
            user_agent: None,
            max_retries: 0,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Use a wallet built from a hex private key.
    pub fn private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(SecretString::from(private_key.into()));
        self
    }

    /// Use a custom wallet signer. Takes precedence over [`Self::private_key`].
    pub fn wallet(mut self, wallet: Arc<dyn WalletSigner>) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// Start with a previously issued API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Apply settings read from the environment.
    pub fn env_config(mut self, config: &EnvConfig) -> Self {
        self = self.private_key(config.expose_private_key());
        if let Some(api_key) = &config.api_key {
            self = self.api_key(api_key.clone());
        }
        if let Some(base_url) = &config.base_url {
            self = self.base_url(base_url.clone());
        }
        self
    }

    /// Set a custom nonce provider for key issuance.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Retry transient failures up to `retries` times.
    ///
    /// Defaults to 0: the first failure is returned to the caller. Retries
    /// apply to every request, including order submission.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ExchangeRestClient, ExchangeError> {
        let wallet: Arc<dyn WalletSigner> = match (self.wallet, self.private_key) {
            (Some(wallet), _) => wallet,
            (None, Some(private_key)) => {
                Arc::new(LocalWallet::from_private_key(private_key.expose_secret())?)
            }
            (None, None) => {
                return Err(ExchangeError::Auth(
                    "A wallet or private key is required".to_string(),
                ));
            }
        };

        let base_url = Url::parse(&self.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ExchangeError::Url(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("wallet-exchange-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("wallet-exchange-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder().default_headers(headers).build()?;

        let mut client_builder = ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
        if self.max_retries > 0 {
            let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);
            client_builder =
                client_builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(TimestampNonce::new()));

        Ok(ExchangeRestClient {
            http_client: client_builder.build(),
            base_url,
            wallet,
            api_key: Arc::new(ApiKeyStore::new(self.api_key)),
            nonce_provider,
        })
    }
}

impl Default for ExchangeRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
