//! High-level client: `CopyTradeClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the bearer token and the accessor methods.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client;

use crate::auth::client::Auth;
use crate::domain::follower::client::Followers;
use crate::domain::trade::client::Trades;
use crate::domain::trader::client::Traders;
use crate::error::SdkError;
use crate::http::CopyTradeHttp;
use crate::network::{DEFAULT_API_URL, ENV_ACCESS_TOKEN, ENV_API_URL, ENV_TIMEOUT_SECS};

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::follower::client::Followers as FollowersClient;
pub use crate::domain::trade::client::Trades as TradesClient;
pub use crate::domain::trader::client::Traders as TradersClient;

/// The primary entry point for the copy-trading API.
///
/// Provides nested sub-client accessors for each resource family:
/// `client.traders()`, `client.trades()`, `client.followers()`, `client.auth()`.
///
/// Every call issues exactly one request. Nothing is cached or retried.
/// Clones share the transport's connection pool.
#[derive(Debug, Clone)]
pub struct CopyTradeClient {
    pub(crate) http: CopyTradeHttp,
}

impl CopyTradeClient {
    pub fn builder() -> CopyTradeClientBuilder {
        CopyTradeClientBuilder::default()
    }

    /// Client for `base_url` with default transport settings.
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::builder().base_url(base_url).build()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn traders(&self) -> Traders<'_> {
        Traders { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn followers(&self) -> Followers<'_> {
        Followers { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    // ── Bearer token ─────────────────────────────────────────────────────

    /// Attach an access token to every subsequent request from this value.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.http.set_access_token(Some(token.into()));
    }

    pub fn clear_access_token(&mut self) {
        self.http.set_access_token(None);
    }

    pub fn has_access_token(&self) -> bool {
        self.http.has_access_token()
    }

    /// A clone of this client carrying `token`. The original is unchanged.
    pub fn with_access_token(&self, token: impl Into<String>) -> Self {
        let mut client = self.clone();
        client.set_access_token(token);
        client
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CopyTradeClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
    access_token: Option<String>,
    http_client: Option<Client>,
}

impl Default for CopyTradeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            default_headers: Vec::new(),
            access_token: None,
            http_client: None,
        }
    }
}

impl CopyTradeClientBuilder {
    /// Builder seeded from `COPYTRADE_API_URL`, `COPYTRADE_ACCESS_TOKEN` and
    /// `COPYTRADE_TIMEOUT_SECS`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, SdkError> {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(ENV_API_URL) {
            builder = builder.base_url(&url);
        }
        if let Ok(token) = std::env::var(ENV_ACCESS_TOKEN) {
            builder = builder.access_token(token);
        }
        if let Ok(secs) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                SdkError::Config(format!("{} must be whole seconds: {}", ENV_TIMEOUT_SECS, e))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Transport-level timeout. Unset means the transport's own default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Use a preconfigured transport. `timeout` and `header` are ignored when
    /// one is supplied.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<CopyTradeClient, SdkError> {
        let transport = match self.http_client {
            Some(client) => client,
            None => {
                let mut headers = HeaderMap::new();
                headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

                for (name, value) in &self.default_headers {
                    let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                        SdkError::Config(format!("Invalid header name '{}': {}", name, e))
                    })?;
                    let header_value = HeaderValue::from_str(value).map_err(|e| {
                        SdkError::Config(format!("Invalid header value for '{}': {}", name, e))
                    })?;
                    headers.insert(header_name, header_value);
                }

                let mut builder = Client::builder().default_headers(headers);
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder
                    .build()
                    .map_err(|e| SdkError::Config(format!("Failed to build HTTP client: {}", e)))?
            }
        };

        let mut http = CopyTradeHttp::new(&self.base_url, transport);
        http.set_access_token(self.access_token);
        Ok(CopyTradeClient { http })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults() {
        let client = CopyTradeClient::builder().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
        assert!(!client.has_access_token());
    }

    #[test]
    fn test_client_builder() {
        let client = CopyTradeClient::builder()
            .base_url("https://copy.example.com/api/")
            .timeout(Duration::from_secs(60))
            .header("X-Client", "desk-7")
            .access_token("acc")
            .build()
            .unwrap();

        // Base URL should have trailing slash removed
        assert_eq!(client.base_url(), "https://copy.example.com/api");
        assert!(client.has_access_token());
    }

    #[test]
    fn test_invalid_header_is_config_error() {
        let err = CopyTradeClient::builder()
            .header("bad header", "x")
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn test_with_access_token_leaves_original() {
        let client = CopyTradeClient::new("http://localhost:8000/api").unwrap();
        let authed = client.with_access_token("acc");
        assert!(authed.has_access_token());
        assert!(!client.has_access_token());

        let mut authed = authed;
        authed.clear_access_token();
        assert!(!authed.has_access_token());
    }

    #[test]
    fn test_injected_transport() {
        let client = CopyTradeClient::builder()
            .base_url("http://127.0.0.1:9000/api")
            .http_client(Client::new())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000/api");
    }
}
